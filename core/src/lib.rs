//! Map-layer synchronization core for the Rust theater map platform.
//!
//! The modules mirror the legacy web-map synchronization script while
//! providing typed entities, an explicit layer registry, and well-defined
//! render passes driven by change notifications from the remote game model.

pub mod layers;
pub mod model;
pub mod prelude;
pub mod render;
pub mod style;
pub mod surface;
pub mod sync;
pub mod telemetry;

#[cfg(test)]
pub(crate) mod testutil;

pub use prelude::{EntityRenderer, Faction, LatLon, SyncError, SyncResult};
