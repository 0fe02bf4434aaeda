use serde::{Deserialize, Serialize};

use crate::surface::MapSurface;

/// The fixed set of independently clearable map layers.
///
/// Variant order is the z-order the scene is composed in: later layers sit
/// on top of earlier ones when the surface paints them back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerId {
    SupplyRoutes,
    BlueSamDetection,
    RedSamDetection,
    BlueSamThreat,
    RedSamThreat,
    GroundObjects,
    ControlPoints,
    BluePlans,
    RedPlans,
    SelectedPlans,
}

impl LayerId {
    pub const ALL: [LayerId; 10] = [
        LayerId::SupplyRoutes,
        LayerId::BlueSamDetection,
        LayerId::RedSamDetection,
        LayerId::BlueSamThreat,
        LayerId::RedSamThreat,
        LayerId::GroundObjects,
        LayerId::ControlPoints,
        LayerId::BluePlans,
        LayerId::RedPlans,
        LayerId::SelectedPlans,
    ];
}

/// Static policy for one layer: how the toggle chrome labels and groups it
/// and whether it is attached to the map by default.
#[derive(Debug, Clone, Copy)]
pub struct LayerInfo {
    pub id: LayerId,
    pub title: &'static str,
    pub group: &'static str,
    pub default_visible: bool,
    pub exclusive_group: Option<&'static str>,
}

const POINTS_OF_INTEREST: &str = "Points of Interest";
const AIR_DEFENSES: &str = "Air Defenses";
const FLIGHT_PLANS: &str = "Flight Plans";

const LAYER_TABLE: [LayerInfo; 10] = [
    LayerInfo {
        id: LayerId::SupplyRoutes,
        title: "Supply routes",
        group: POINTS_OF_INTEREST,
        default_visible: true,
        exclusive_group: None,
    },
    LayerInfo {
        id: LayerId::BlueSamDetection,
        title: "Ally SAM detection range",
        group: AIR_DEFENSES,
        default_visible: false,
        exclusive_group: None,
    },
    LayerInfo {
        id: LayerId::RedSamDetection,
        title: "Enemy SAM detection range",
        group: AIR_DEFENSES,
        default_visible: false,
        exclusive_group: None,
    },
    LayerInfo {
        id: LayerId::BlueSamThreat,
        title: "Ally SAM threat range",
        group: AIR_DEFENSES,
        default_visible: false,
        exclusive_group: None,
    },
    LayerInfo {
        id: LayerId::RedSamThreat,
        title: "Enemy SAM threat range",
        group: AIR_DEFENSES,
        default_visible: true,
        exclusive_group: None,
    },
    LayerInfo {
        id: LayerId::GroundObjects,
        title: "Ground objects",
        group: POINTS_OF_INTEREST,
        default_visible: true,
        exclusive_group: None,
    },
    LayerInfo {
        id: LayerId::ControlPoints,
        title: "Control points",
        group: POINTS_OF_INTEREST,
        default_visible: true,
        exclusive_group: None,
    },
    LayerInfo {
        id: LayerId::BluePlans,
        title: "Show all blue",
        group: FLIGHT_PLANS,
        default_visible: true,
        exclusive_group: Some(FLIGHT_PLANS),
    },
    LayerInfo {
        id: LayerId::RedPlans,
        title: "Show all red",
        group: FLIGHT_PLANS,
        default_visible: false,
        exclusive_group: Some(FLIGHT_PLANS),
    },
    LayerInfo {
        id: LayerId::SelectedPlans,
        title: "Show selected blue",
        group: FLIGHT_PLANS,
        default_visible: false,
        exclusive_group: Some(FLIGHT_PLANS),
    },
];

/// Serializable layer description consumed by the external toggle chrome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegendEntry {
    pub id: LayerId,
    pub title: String,
    pub group: String,
    pub default_visible: bool,
    pub exclusive_group: Option<String>,
}

/// Registry of the fixed layer set.
///
/// The registry owns layer policy, not primitive storage; the drawn
/// primitives live in the map surface's layer containers. Exclusivity
/// between flight-plan layers is enforced by the toggle chrome, not here.
pub struct LayerRegistry {
    layers: &'static [LayerInfo],
}

impl LayerRegistry {
    pub fn new() -> Self {
        Self {
            layers: &LAYER_TABLE,
        }
    }

    pub fn info(&self, id: LayerId) -> &LayerInfo {
        self.layers
            .iter()
            .find(|info| info.id == id)
            .unwrap_or(&self.layers[0])
    }

    /// Removes every primitive from one layer. Idempotent.
    pub fn clear(&self, surface: &mut dyn MapSurface, id: LayerId) {
        surface.clear_layer(id);
    }

    /// Clears every layer, used on a full model reset.
    pub fn clear_all(&self, surface: &mut dyn MapSurface) {
        for info in self.layers {
            surface.clear_layer(info.id);
        }
    }

    pub fn legend(&self) -> Vec<LegendEntry> {
        self.layers
            .iter()
            .map(|info| LegendEntry {
                id: info.id,
                title: info.title.to_string(),
                group: info.group.to_string(),
                default_visible: info.default_visible,
                exclusive_group: info.exclusive_group.map(str::to_string),
            })
            .collect()
    }
}

impl Default for LayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_every_layer_exactly_once() {
        let registry = LayerRegistry::new();
        for id in LayerId::ALL {
            assert_eq!(registry.info(id).id, id);
        }
        assert_eq!(registry.legend().len(), LayerId::ALL.len());
    }

    #[test]
    fn flight_plan_layers_share_an_exclusive_group() {
        let registry = LayerRegistry::new();
        for id in [LayerId::BluePlans, LayerId::RedPlans, LayerId::SelectedPlans] {
            assert_eq!(registry.info(id).exclusive_group, Some(FLIGHT_PLANS));
        }
        assert_eq!(registry.info(LayerId::ControlPoints).exclusive_group, None);
    }

    #[test]
    fn default_visibility_matches_startup_attachment() {
        let registry = LayerRegistry::new();
        let on: Vec<LayerId> = registry
            .legend()
            .into_iter()
            .filter(|entry| entry.default_visible)
            .map(|entry| entry.id)
            .collect();
        assert_eq!(
            on,
            vec![
                LayerId::SupplyRoutes,
                LayerId::RedSamThreat,
                LayerId::GroundObjects,
                LayerId::ControlPoints,
                LayerId::BluePlans,
            ]
        );
    }
}
