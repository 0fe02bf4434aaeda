pub mod client;
pub mod entities;
pub mod event;

pub use client::GameModel;
pub use entities::{
    AltitudeReference, ControlPoint, Flight, GroundObject, SupplyRoute, Waypoint,
};
pub use event::GameEvent;
