use serde::{Deserialize, Serialize};
use theatercore::model::GameModel;
use theatercore::prelude::Faction;
use theatercore::surface::Scene;

use crate::game::state::TheaterHandle;

/// Everything the visualizer needs per poll: the drawn scene plus enough
/// roster context to offer selection and base-menu controls.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScenePayload {
    pub scenario: Option<String>,
    pub scene: Scene,
    pub passes: usize,
    pub primitives: usize,
    pub errors: usize,
    pub flights: Vec<FlightSummary>,
    pub control_points: Vec<ControlPointSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightSummary {
    pub id: u32,
    pub callsign: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlPointSummary {
    pub id: u32,
    pub name: String,
    pub faction: Faction,
}

/// Body of a POST /select request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SelectRequest {
    pub flight: u32,
}

impl ScenePayload {
    pub fn compose(
        scenario: Option<String>,
        scene: Scene,
        metrics: (usize, usize, usize),
        theater: &TheaterHandle,
    ) -> Self {
        let (passes, primitives, errors) = metrics;
        Self {
            scenario,
            scene,
            passes,
            primitives,
            errors,
            flights: theater
                .flight_roster()
                .into_iter()
                .map(|(id, callsign, selected)| FlightSummary {
                    id,
                    callsign,
                    selected,
                })
                .collect(),
            control_points: theater
                .control_points()
                .into_iter()
                .map(|cp| ControlPointSummary {
                    id: cp.id,
                    name: cp.name,
                    faction: cp.faction,
                })
                .collect(),
        }
    }
}
