use rand::{rngs::StdRng, Rng, SeedableRng};
use theatercore::model::{
    AltitudeReference, ControlPoint, Flight, GroundObject, SupplyRoute, Waypoint,
};
use theatercore::prelude::{Faction, LatLon};

use crate::scenario::config::ScenarioConfig;

/// Builds a deterministic Persian Gulf style demonstration theater.
///
/// The seed only drives small position jitter so repeated runs with the
/// same seed replay the identical scenario.
pub fn build_demo_scenario(seed: u64) -> ScenarioConfig {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut jitter = |lat: f64, lon: f64| {
        LatLon::new(
            lat + rng.gen_range(-0.05..0.05),
            lon + rng.gen_range(-0.05..0.05),
        )
    };

    let khasab = jitter(26.17, 56.24);
    let bandar = jitter(27.22, 56.37);
    let lavan = jitter(26.81, 53.35);
    let havadarya = jitter(27.16, 56.17);
    let sam_site = jitter(27.10, 56.45);
    let hawk_site = jitter(26.25, 56.30);

    let waypoint = |number: u32, name: &str, position: LatLon, altitude_ft: f64, timing: &str| {
        Waypoint {
            number,
            name: name.into(),
            position,
            altitude_ft,
            altitude_reference: AltitudeReference::Msl,
            timing: timing.into(),
            is_divert: false,
        }
    };

    let strike_plan = vec![
        waypoint(0, "DEPARTURE", khasab, 0.0, "T+0:00"),
        waypoint(1, "INGRESS", LatLon::new(26.7, 56.1), 24_000.0, "T+0:12"),
        waypoint(2, "TARGET", sam_site, 20_000.0, "T+0:21"),
        Waypoint {
            is_divert: true,
            ..waypoint(3, "DIVERT", lavan, 10_000.0, "T+0:35")
        },
        waypoint(4, "LANDING", khasab, 0.0, "T+0:52"),
    ];

    let cap_plan = vec![
        waypoint(0, "DEPARTURE", bandar, 0.0, "T+0:00"),
        waypoint(1, "RACETRACK START", LatLon::new(26.9, 55.9), 26_000.0, "T+0:10"),
        waypoint(2, "RACETRACK END", LatLon::new(26.6, 56.3), 26_000.0, "T+0:40"),
        waypoint(3, "LANDING", bandar, 0.0, "T+1:02"),
    ];

    ScenarioConfig {
        name: Some("Hormuz demonstration".into()),
        map_center: LatLon::new(26.6, 56.0),
        control_points: vec![
            ControlPoint::new(1, "Khasab", khasab, Faction::Blue),
            ControlPoint::new(2, "Lavan Island", lavan, Faction::Blue),
            ControlPoint::new(3, "Bandar Abbas", bandar, Faction::Red),
            ControlPoint::new(4, "Havadarya", havadarya, Faction::Red),
        ],
        ground_objects: vec![
            GroundObject {
                id: 10,
                name: "SA-10 battery".into(),
                position: sam_site,
                faction: Faction::Red,
                sam_detection_ranges: vec![120_000.0],
                sam_threat_ranges: vec![75_000.0, 40_000.0],
            },
            GroundObject {
                id: 11,
                name: "Hawk battery".into(),
                position: hawk_site,
                faction: Faction::Blue,
                sam_detection_ranges: vec![90_000.0],
                sam_threat_ranges: vec![45_000.0],
            },
            GroundObject {
                id: 12,
                name: "Ammo depot".into(),
                position: jitter(27.0, 56.3),
                faction: Faction::Red,
                sam_detection_ranges: Vec::new(),
                sam_threat_ranges: Vec::new(),
            },
        ],
        supply_routes: vec![
            SupplyRoute {
                points: vec![bandar, LatLon::new(27.1, 56.3), havadarya],
            },
            SupplyRoute {
                points: vec![khasab, LatLon::new(26.0, 56.3), hawk_site],
            },
        ],
        flights: vec![
            Flight {
                id: 100,
                callsign: "Dodge 1".into(),
                faction: Faction::Blue,
                selected: false,
                flight_plan: strike_plan,
            },
            Flight {
                id: 101,
                callsign: "Colt 1".into(),
                faction: Faction::Blue,
                selected: false,
                flight_plan: cap_plan.clone(),
            },
            Flight {
                id: 102,
                callsign: "Enfield 1".into(),
                faction: Faction::Red,
                selected: false,
                flight_plan: cap_plan,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_scenario_is_deterministic_per_seed() {
        let a = build_demo_scenario(7);
        let b = build_demo_scenario(7);
        assert_eq!(
            a.control_points[0].position.lat,
            b.control_points[0].position.lat
        );
        assert_eq!(a.entity_count(), b.entity_count());
    }

    #[test]
    fn demo_scenario_covers_every_entity_kind() {
        let scenario = build_demo_scenario(1);
        assert!(!scenario.control_points.is_empty());
        assert!(!scenario.ground_objects.is_empty());
        assert!(!scenario.supply_routes.is_empty());
        assert!(!scenario.flights.is_empty());
        assert!(scenario
            .flights
            .iter()
            .any(|flight| flight.flight_plan.iter().any(|wp| wp.is_divert)));
    }
}
