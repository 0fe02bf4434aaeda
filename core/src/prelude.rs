use serde::{Deserialize, Serialize};

use crate::layers::LayerId;
use crate::model::GameModel;
use crate::surface::MapSurface;

/// Geographic position in WGS-84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Coalition owning an entity. Blue is the player-friendly side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Blue,
    Red,
}

/// Common error type for synchronization passes.
#[derive(thiserror::Error, Debug)]
pub enum SyncError {
    #[error("engine not connected: {0}")]
    NotConnected(String),
    #[error("notification channel closed: {0}")]
    ChannelClosed(String),
    #[error("render failure: {0}")]
    Render(String),
}

pub type SyncResult<T> = Result<T, SyncError>;

/// Trait describing one full redraw pass for a single entity kind.
///
/// Every pass follows the same template: clear the owned layers, re-read
/// the full collection from the remote model, and repopulate. Passes never
/// diff against the previous picture, which keeps them idempotent under
/// at-least-once notification delivery.
pub trait EntityRenderer {
    fn name(&self) -> &'static str;
    fn owned_layers(&self) -> &'static [LayerId];
    fn render(&self, model: &dyn GameModel, surface: &mut dyn MapSurface) -> SyncResult<usize>;

    fn clear_owned(&self, surface: &mut dyn MapSurface) {
        for layer in self.owned_layers() {
            surface.clear_layer(*layer);
        }
    }
}
