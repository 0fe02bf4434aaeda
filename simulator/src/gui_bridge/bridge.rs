use anyhow::Result;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::Filter;

use theatercore::layers::LegendEntry;
use theatercore::model::GameModel;
use theatercore::surface::MarkerAction;

use crate::game::state::TheaterHandle;
use crate::gui_bridge::model::{ScenePayload, SelectRequest};
use crate::scenario::config::ScenarioConfig;

fn gui_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

/// Bridge that hosts the scene endpoint and routes map interactions back
/// into the theater.
pub struct GuiBridge {
    state: Arc<RwLock<ScenePayload>>,
}

impl GuiBridge {
    pub fn new(theater: TheaterHandle, legend: Vec<LegendEntry>) -> Self {
        let state = Arc::new(RwLock::new(ScenePayload::default()));
        let state_for_filter = state.clone();
        let state_filter = warp::any().map(move || state_for_filter.clone());
        let theater_filter = warp::any().map(move || theater.clone());

        let scene_route = warp::path("scene")
            .and(warp::get())
            .and(state_filter)
            .map(|state: Arc<RwLock<ScenePayload>>| warp::reply::json(&*state.read().unwrap()));

        let legend_route = warp::path("legend")
            .and(warp::get())
            .map(move || warp::reply::json(&legend));

        let action_route = warp::path("action")
            .and(warp::post())
            .and(warp::body::json())
            .and(theater_filter.clone())
            .map(|action: MarkerAction, theater: TheaterHandle| {
                match action {
                    MarkerAction::OpenBaseMenu { control_point } => {
                        theater.open_base_menu(control_point);
                    }
                }
                warp::reply::json(&json!({"status": "ok"}))
            });

        let select_route = warp::path("select")
            .and(warp::post())
            .and(warp::body::json())
            .and(theater_filter.clone())
            .map(|request: SelectRequest, theater: TheaterHandle| {
                theater.select_flight(request.flight);
                warp::reply::json(&json!({"status": "ok", "selected": request.flight}))
            });

        let scenario_route = warp::path("scenario")
            .and(warp::post())
            .and(warp::body::json())
            .and(theater_filter)
            .map(|scenario: ScenarioConfig, theater: TheaterHandle| {
                let entities = scenario.entity_count();
                theater.load_scenario(&scenario);
                warp::reply::json(&json!({
                    "status": "ok",
                    "entities": entities,
                    "name": scenario.name.clone().unwrap_or_default()
                }))
            });

        thread::spawn(move || {
            let routes = scene_route
                .or(legend_route)
                .or(action_route)
                .or(select_route)
                .or(scenario_route);
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(gui_bind_address()).await;
            });
        });

        Self { state }
    }

    pub fn publish(&self, payload: &ScenePayload) -> Result<()> {
        let mut guard = self.state.write().unwrap();
        *guard = payload.clone();
        println!(
            "[GUI] passes: {}, primitives drawn: {}, errors: {}",
            guard.passes, guard.primitives, guard.errors
        );
        Ok(())
    }

    pub fn publish_status(&self, message: &str) {
        println!("[GUI] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> ScenePayload {
        self.state.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::demo::build_demo_scenario;
    use std::sync::Arc;
    use theatercore::layers::LayerRegistry;
    use theatercore::surface::SceneSurface;
    use theatercore::sync::SyncEngine;

    #[test]
    fn gui_bridge_publishes_the_current_scene() {
        let scenario = build_demo_scenario(5);
        let (theater, _events) = TheaterHandle::new(&scenario);
        let bridge = GuiBridge::new(theater.clone(), LayerRegistry::new().legend());

        let mut engine = SyncEngine::new(Arc::new(theater.clone()), SceneSurface::new());
        engine.connect().unwrap();

        let payload = ScenePayload::compose(
            scenario.name.clone(),
            engine.surface().scene(),
            engine.metrics().snapshot(),
            &theater,
        );
        bridge.publish(&payload).unwrap();

        let snapshot = bridge.snapshot();
        assert_eq!(snapshot.scenario.as_deref(), Some("Hormuz demonstration"));
        assert_eq!(snapshot.flights.len(), 3);
        assert!(snapshot.primitives > 0);
    }
}
