use std::sync::Mutex;

use crate::model::{ControlPoint, Flight, GameModel, GroundObject, SupplyRoute};
use crate::prelude::LatLon;

/// Fixed-snapshot model for renderer and engine tests.
#[derive(Default)]
pub struct StaticModel {
    pub center: LatLon,
    pub control_points: Vec<ControlPoint>,
    pub ground_objects: Vec<GroundObject>,
    pub supply_routes: Vec<SupplyRoute>,
    pub flights: Vec<Flight>,
    pub opened_menus: Mutex<Vec<u32>>,
}

impl GameModel for StaticModel {
    fn map_center(&self) -> LatLon {
        self.center
    }

    fn control_points(&self) -> Vec<ControlPoint> {
        self.control_points.clone()
    }

    fn ground_objects(&self) -> Vec<GroundObject> {
        self.ground_objects.clone()
    }

    fn supply_routes(&self) -> Vec<SupplyRoute> {
        self.supply_routes.clone()
    }

    fn flights(&self) -> Vec<Flight> {
        self.flights.clone()
    }

    fn open_base_menu(&self, control_point: u32) {
        if let Ok(mut opened) = self.opened_menus.lock() {
            opened.push(control_point);
        }
    }
}
