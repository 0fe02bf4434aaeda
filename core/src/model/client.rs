use crate::model::entities::{ControlPoint, Flight, GroundObject, SupplyRoute};
use crate::prelude::LatLon;

/// Read interface onto the remote game model.
///
/// The core never holds an authoritative copy of the theater. Each snapshot
/// getter returns the full current collection, read fresh on every
/// notification, so the drawn picture cannot drift from the source of truth.
pub trait GameModel: Send + Sync {
    fn map_center(&self) -> LatLon;
    fn control_points(&self) -> Vec<ControlPoint>;
    fn ground_objects(&self) -> Vec<GroundObject>;
    fn supply_routes(&self) -> Vec<SupplyRoute>;
    fn flights(&self) -> Vec<Flight>;

    /// Action hook behind a control-point marker click.
    fn open_base_menu(&self, control_point: u32);
}
