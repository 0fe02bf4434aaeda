use crate::prelude::LatLon;

/// Change notification published by the remote game model.
///
/// Notifications carry no delta. Every handler re-reads the full current
/// collection from the model, so delivering the same notification twice for
/// one logical state is harmless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// The whole model was unloaded; every clearable layer must empty.
    Cleared,
    /// The viewport should recenter on the new theater midpoint.
    MapCenterChanged(LatLon),
    ControlPointsChanged,
    GroundObjectsChanged,
    SupplyRoutesChanged,
    FlightsChanged,
}
