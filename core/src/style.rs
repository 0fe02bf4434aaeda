use serde::{Deserialize, Serialize};

use crate::layers::LayerId;
use crate::prelude::Faction;

/// Fixed color palette shared by every renderer.
pub struct Palette;

impl Palette {
    pub const BLUE: &'static str = "#0084ff";
    pub const RED: &'static str = "#c85050";
    pub const BLUE_DETECTION: &'static str = "#bb89ff";
    pub const RED_DETECTION: &'static str = "#eee17b";
    pub const HIGHLIGHT: &'static str = "#ffff00";
    pub const SUPPLY_ROUTE: &'static str = "#3388ff";
}

/// Marker icon assets hosted outside the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerIcon {
    FriendlyCp,
    EnemyCp,
    Waypoint,
}

impl MarkerIcon {
    pub fn asset_url(self) -> &'static str {
        match self {
            MarkerIcon::FriendlyCp => {
                "https://raw.githubusercontent.com/pointhi/leaflet-color-markers/master/img/marker-icon-2x-blue.png"
            }
            MarkerIcon::EnemyCp => {
                "https://raw.githubusercontent.com/pointhi/leaflet-color-markers/master/img/marker-icon-2x-red.png"
            }
            MarkerIcon::Waypoint => {
                "https://cdnjs.cloudflare.com/ajax/libs/leaflet/0.7.7/images/marker-icon.png"
            }
        }
    }
}

/// Resolved styling for one faction: marker icon, color families, and the
/// faction-specific target layers. Pure and total over the two factions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactionStyle {
    pub icon: MarkerIcon,
    pub color: &'static str,
    pub detection_color: &'static str,
    pub plan_layer: LayerId,
    pub detection_layer: LayerId,
    pub threat_layer: LayerId,
}

impl FactionStyle {
    pub fn of(faction: Faction) -> Self {
        match faction {
            Faction::Blue => Self {
                icon: MarkerIcon::FriendlyCp,
                color: Palette::BLUE,
                detection_color: Palette::BLUE_DETECTION,
                plan_layer: LayerId::BluePlans,
                detection_layer: LayerId::BlueSamDetection,
                threat_layer: LayerId::BlueSamThreat,
            },
            Faction::Red => Self {
                icon: MarkerIcon::EnemyCp,
                color: Palette::RED,
                detection_color: Palette::RED_DETECTION,
                plan_layer: LayerId::RedPlans,
                detection_layer: LayerId::RedSamDetection,
                threat_layer: LayerId::RedSamThreat,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_keep_factions_on_separate_layers() {
        let blue = FactionStyle::of(Faction::Blue);
        let red = FactionStyle::of(Faction::Red);
        assert_ne!(blue.plan_layer, red.plan_layer);
        assert_ne!(blue.detection_layer, red.detection_layer);
        assert_ne!(blue.threat_layer, red.threat_layer);
        assert_ne!(blue.icon, red.icon);
    }

    #[test]
    fn detection_and_threat_use_different_color_families() {
        for faction in [Faction::Blue, Faction::Red] {
            let style = FactionStyle::of(faction);
            assert_ne!(style.color, style.detection_color);
        }
    }
}
