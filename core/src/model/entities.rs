use serde::{Deserialize, Serialize};
use std::fmt;

use crate::prelude::{Faction, LatLon};

/// A capturable base rendered as exactly one marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlPoint {
    pub id: u32,
    pub name: String,
    pub position: LatLon,
    pub faction: Faction,
}

impl ControlPoint {
    pub fn new(id: u32, name: impl Into<String>, position: LatLon, faction: Faction) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            faction,
        }
    }
}

/// A theater ground object. SAM sites carry detection and threat ranges;
/// the two collections are independent and either may be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundObject {
    pub id: u32,
    pub name: String,
    pub position: LatLon,
    pub faction: Faction,
    #[serde(default)]
    pub sam_detection_ranges: Vec<f64>,
    #[serde(default)]
    pub sam_threat_ranges: Vec<f64>,
}

/// An ordered ground path between control points. Carries no faction
/// styling of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplyRoute {
    pub points: Vec<LatLon>,
}

/// Reference frame for a waypoint altitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AltitudeReference {
    Agl,
    Msl,
}

impl fmt::Display for AltitudeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AltitudeReference::Agl => write!(f, "AGL"),
            AltitudeReference::Msl => write!(f, "MSL"),
        }
    }
}

/// A single flight-plan waypoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Waypoint {
    pub number: u32,
    pub name: String,
    pub position: LatLon,
    pub altitude_ft: f64,
    pub altitude_reference: AltitudeReference,
    pub timing: String,
    #[serde(default)]
    pub is_divert: bool,
}

/// A package member with its flight plan. The first waypoint is the
/// departure point and is only ever used as a path start, never a marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    pub id: u32,
    pub callsign: String,
    pub faction: Faction,
    #[serde(default)]
    pub selected: bool,
    pub flight_plan: Vec<Waypoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn altitude_reference_displays_frame_name() {
        assert_eq!(AltitudeReference::Agl.to_string(), "AGL");
        assert_eq!(AltitudeReference::Msl.to_string(), "MSL");
    }

    #[test]
    fn ground_object_ranges_default_to_empty() {
        let tgo: GroundObject = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "Depot",
            "position": {"lat": 1.0, "lon": 2.0},
            "faction": "Red"
        }))
        .unwrap();
        assert!(tgo.sam_detection_ranges.is_empty());
        assert!(tgo.sam_threat_ranges.is_empty());
    }
}
