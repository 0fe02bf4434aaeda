use theatercore::model::{GameModel, SupplyRoute};
use theatercore::prelude::{Faction, LatLon};

use crate::game::state::TheaterHandle;

/// Scripted demonstration sequence touching every notification kind.
///
/// Runs against the Hormuz demo scenario ids; on a custom scenario the
/// unknown-id steps are logged and skipped by the handle.
pub fn run_demo_script(theater: &TheaterHandle) -> usize {
    let mut steps = 0;

    theater.set_map_center(LatLon::new(26.9, 56.2));
    steps += 1;

    theater.capture_control_point(4, Faction::Blue);
    steps += 1;

    theater.strike_ground_object(10);
    steps += 1;

    let mut routes = theater.supply_routes();
    routes.push(SupplyRoute {
        points: vec![LatLon::new(26.17, 56.24), LatLon::new(27.16, 56.17)],
    });
    theater.set_supply_routes(routes);
    steps += 1;

    theater.select_flight(100);
    steps += 1;

    theater.clear_theater();
    theater.refresh_all();
    steps += 5;

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::demo::build_demo_scenario;
    use theatercore::model::GameEvent;

    #[test]
    fn script_emits_every_notification_kind() {
        let scenario = build_demo_scenario(3);
        let (theater, mut events) = TheaterHandle::new(&scenario);
        let steps = run_demo_script(&theater);

        let mut received = Vec::new();
        while let Ok(event) = events.try_recv() {
            received.push(event);
        }
        assert_eq!(received.len(), steps);
        assert!(received.contains(&GameEvent::Cleared));
        assert!(received
            .iter()
            .any(|event| matches!(event, GameEvent::MapCenterChanged(_))));
        assert!(received.contains(&GameEvent::ControlPointsChanged));
        assert!(received.contains(&GameEvent::GroundObjectsChanged));
        assert!(received.contains(&GameEvent::SupplyRoutesChanged));
        assert!(received.contains(&GameEvent::FlightsChanged));
    }

    #[test]
    fn script_leaves_one_selected_flight() {
        let scenario = build_demo_scenario(3);
        let (theater, _events) = TheaterHandle::new(&scenario);
        run_demo_script(&theater);

        let selected = theater
            .flights()
            .into_iter()
            .filter(|flight| flight.selected)
            .count();
        assert_eq!(selected, 1);
    }
}
