use log::{info, warn};
use std::sync::{Arc, RwLock};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use theatercore::model::{ControlPoint, Flight, GameEvent, GameModel, GroundObject, SupplyRoute};
use theatercore::prelude::{Faction, LatLon};

use crate::scenario::config::ScenarioConfig;

struct TheaterState {
    map_center: LatLon,
    control_points: Vec<ControlPoint>,
    ground_objects: Vec<GroundObject>,
    supply_routes: Vec<SupplyRoute>,
    flights: Vec<Flight>,
}

impl TheaterState {
    fn from_scenario(scenario: &ScenarioConfig) -> Self {
        Self {
            map_center: scenario.map_center,
            control_points: scenario.control_points.clone(),
            ground_objects: scenario.ground_objects.clone(),
            supply_routes: scenario.supply_routes.clone(),
            flights: scenario.flights.clone(),
        }
    }
}

/// The remote game model the engine synchronizes against.
///
/// Mutators update the shared state first and then emit the matching
/// change notification, so by the time a handler re-reads the model it
/// always observes the post-mutation snapshot.
#[derive(Clone)]
pub struct TheaterHandle {
    inner: Arc<RwLock<TheaterState>>,
    events: UnboundedSender<GameEvent>,
}

impl TheaterHandle {
    pub fn new(scenario: &ScenarioConfig) -> (Self, UnboundedReceiver<GameEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let handle = Self {
            inner: Arc::new(RwLock::new(TheaterState::from_scenario(scenario))),
            events,
        };
        (handle, receiver)
    }

    fn emit(&self, event: GameEvent) {
        if self.events.send(event).is_err() {
            warn!("dropping {:?}: engine receiver is gone", event);
        }
    }

    pub fn set_map_center(&self, center: LatLon) {
        self.inner.write().unwrap().map_center = center;
        self.emit(GameEvent::MapCenterChanged(center));
    }

    /// Flips ownership of a control point to the given faction.
    pub fn capture_control_point(&self, id: u32, by: Faction) {
        {
            let mut state = self.inner.write().unwrap();
            if let Some(cp) = state.control_points.iter_mut().find(|cp| cp.id == id) {
                cp.faction = by;
            } else {
                warn!("capture of unknown control point {}", id);
                return;
            }
        }
        self.emit(GameEvent::ControlPointsChanged);
    }

    /// Destroys a ground object's air defenses, leaving the site itself.
    pub fn strike_ground_object(&self, id: u32) {
        {
            let mut state = self.inner.write().unwrap();
            if let Some(tgo) = state.ground_objects.iter_mut().find(|tgo| tgo.id == id) {
                tgo.sam_detection_ranges.clear();
                tgo.sam_threat_ranges.clear();
            } else {
                warn!("strike on unknown ground object {}", id);
                return;
            }
        }
        self.emit(GameEvent::GroundObjectsChanged);
    }

    pub fn set_supply_routes(&self, routes: Vec<SupplyRoute>) {
        self.inner.write().unwrap().supply_routes = routes;
        self.emit(GameEvent::SupplyRoutesChanged);
    }

    /// Marks one flight as selected and deselects every other.
    pub fn select_flight(&self, id: u32) {
        {
            let mut state = self.inner.write().unwrap();
            for flight in &mut state.flights {
                flight.selected = flight.id == id;
            }
        }
        self.emit(GameEvent::FlightsChanged);
    }

    pub fn clear_theater(&self) {
        self.emit(GameEvent::Cleared);
    }

    /// Re-announces every collection, used after a clear or hot swap.
    pub fn refresh_all(&self) {
        self.emit(GameEvent::ControlPointsChanged);
        self.emit(GameEvent::GroundObjectsChanged);
        self.emit(GameEvent::SupplyRoutesChanged);
        self.emit(GameEvent::FlightsChanged);
    }

    /// Replaces the whole theater with a new scenario.
    pub fn load_scenario(&self, scenario: &ScenarioConfig) {
        {
            let mut state = self.inner.write().unwrap();
            *state = TheaterState::from_scenario(scenario);
        }
        self.emit(GameEvent::Cleared);
        self.emit(GameEvent::MapCenterChanged(scenario.map_center));
        self.refresh_all();
    }

    pub fn flight_roster(&self) -> Vec<(u32, String, bool)> {
        self.inner
            .read()
            .unwrap()
            .flights
            .iter()
            .map(|flight| (flight.id, flight.callsign.clone(), flight.selected))
            .collect()
    }
}

impl GameModel for TheaterHandle {
    fn map_center(&self) -> LatLon {
        self.inner.read().unwrap().map_center
    }

    fn control_points(&self) -> Vec<ControlPoint> {
        self.inner.read().unwrap().control_points.clone()
    }

    fn ground_objects(&self) -> Vec<GroundObject> {
        self.inner.read().unwrap().ground_objects.clone()
    }

    fn supply_routes(&self) -> Vec<SupplyRoute> {
        self.inner.read().unwrap().supply_routes.clone()
    }

    fn flights(&self) -> Vec<Flight> {
        self.inner.read().unwrap().flights.clone()
    }

    fn open_base_menu(&self, control_point: u32) {
        let name = self
            .inner
            .read()
            .unwrap()
            .control_points
            .iter()
            .find(|cp| cp.id == control_point)
            .map(|cp| cp.name.clone());
        match name {
            Some(name) => info!("base menu requested for {} ({})", name, control_point),
            None => warn!("base menu requested for unknown control point {}", control_point),
        }
    }
}
