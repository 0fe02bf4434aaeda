use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::layers::LayerId;
use crate::prelude::LatLon;
use crate::style::MarkerIcon;

/// Interaction carried by a marker, dispatched when the user clicks it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MarkerAction {
    OpenBaseMenu { control_point: u32 },
}

/// A point marker with an optional persistent tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub position: LatLon,
    pub icon: MarkerIcon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<MarkerAction>,
}

/// An ordered polyline in one color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathLine {
    pub points: Vec<LatLon>,
    pub color: String,
}

/// A stroke-only range ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleRing {
    pub center: LatLon,
    pub radius_m: f64,
    pub color: String,
    pub weight: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Marker(Marker),
    Path(PathLine),
    Circle(CircleRing),
}

/// Contract required of the map-drawing surface.
///
/// Layers are independently clearable containers; clearing an empty layer
/// is a no-op. Within one layer, later additions paint on top of earlier
/// ones.
pub trait MapSurface {
    fn add_marker(&mut self, layer: LayerId, marker: Marker);
    fn add_path(&mut self, layer: LayerId, path: PathLine);
    fn add_circle(&mut self, layer: LayerId, circle: CircleRing);
    fn clear_layer(&mut self, layer: LayerId);
    fn recenter(&mut self, center: LatLon, animate: bool);
}

/// Serializable snapshot of everything currently drawn.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    pub center: Option<LatLon>,
    pub layers: Vec<SceneLayer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneLayer {
    pub id: LayerId,
    pub primitives: Vec<Primitive>,
}

/// In-memory map surface retaining primitives per layer in insertion order.
///
/// This is the surface the engine renders into in-process; the actual map
/// widget repaints from `scene()` snapshots published over the bridge.
#[derive(Default)]
pub struct SceneSurface {
    layers: HashMap<LayerId, Vec<Primitive>>,
    center: Option<LatLon>,
}

impl SceneSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primitives(&self, layer: LayerId) -> &[Primitive] {
        self.layers.get(&layer).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn primitive_count(&self, layer: LayerId) -> usize {
        self.primitives(layer).len()
    }

    pub fn total_primitives(&self) -> usize {
        self.layers.values().map(Vec::len).sum()
    }

    pub fn center(&self) -> Option<LatLon> {
        self.center
    }

    /// Snapshot with layers emitted in z-order.
    pub fn scene(&self) -> Scene {
        Scene {
            center: self.center,
            layers: LayerId::ALL
                .iter()
                .map(|&id| SceneLayer {
                    id,
                    primitives: self.primitives(id).to_vec(),
                })
                .collect(),
        }
    }
}

impl MapSurface for SceneSurface {
    fn add_marker(&mut self, layer: LayerId, marker: Marker) {
        self.layers
            .entry(layer)
            .or_default()
            .push(Primitive::Marker(marker));
    }

    fn add_path(&mut self, layer: LayerId, path: PathLine) {
        self.layers
            .entry(layer)
            .or_default()
            .push(Primitive::Path(path));
    }

    fn add_circle(&mut self, layer: LayerId, circle: CircleRing) {
        self.layers
            .entry(layer)
            .or_default()
            .push(Primitive::Circle(circle));
    }

    fn clear_layer(&mut self, layer: LayerId) {
        if let Some(primitives) = self.layers.get_mut(&layer) {
            primitives.clear();
        }
    }

    fn recenter(&mut self, center: LatLon, _animate: bool) {
        self.center = Some(center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::LatLon;

    fn marker_at(lat: f64, lon: f64) -> Marker {
        Marker {
            position: LatLon::new(lat, lon),
            icon: MarkerIcon::Waypoint,
            tooltip: None,
            action: None,
        }
    }

    #[test]
    fn clear_layer_is_idempotent_and_scoped() {
        let mut surface = SceneSurface::new();
        surface.add_marker(LayerId::ControlPoints, marker_at(1.0, 1.0));
        surface.add_marker(LayerId::GroundObjects, marker_at(2.0, 2.0));

        surface.clear_layer(LayerId::ControlPoints);
        surface.clear_layer(LayerId::ControlPoints);
        surface.clear_layer(LayerId::SupplyRoutes);

        assert_eq!(surface.primitive_count(LayerId::ControlPoints), 0);
        assert_eq!(surface.primitive_count(LayerId::GroundObjects), 1);
    }

    #[test]
    fn scene_snapshot_preserves_insertion_order() {
        let mut surface = SceneSurface::new();
        surface.add_marker(LayerId::BluePlans, marker_at(1.0, 0.0));
        surface.add_path(
            LayerId::BluePlans,
            PathLine {
                points: vec![LatLon::new(0.0, 0.0), LatLon::new(1.0, 1.0)],
                color: "#ffffff".into(),
            },
        );

        let scene = surface.scene();
        let layer = scene
            .layers
            .iter()
            .find(|layer| layer.id == LayerId::BluePlans)
            .unwrap();
        assert!(matches!(layer.primitives[0], Primitive::Marker(_)));
        assert!(matches!(layer.primitives[1], Primitive::Path(_)));
    }

    #[test]
    fn recenter_updates_snapshot_center() {
        let mut surface = SceneSurface::new();
        assert!(surface.center().is_none());
        surface.recenter(LatLon::new(26.0, 56.0), true);
        assert_eq!(surface.scene().center, Some(LatLon::new(26.0, 56.0)));
    }
}
