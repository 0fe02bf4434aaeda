use log::warn;

use crate::layers::LayerId;
use crate::model::GameModel;
use crate::prelude::{EntityRenderer, SyncResult};
use crate::style::Palette;
use crate::surface::{MapSurface, PathLine};
use crate::telemetry::log::LogManager;

/// Redraws supply routes as plain connected paths, one per route.
pub struct SupplyRouteRenderer {
    logger: LogManager,
}

impl SupplyRouteRenderer {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new(),
        }
    }
}

impl Default for SupplyRouteRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRenderer for SupplyRouteRenderer {
    fn name(&self) -> &'static str {
        "SupplyRouteRenderer"
    }

    fn owned_layers(&self) -> &'static [LayerId] {
        &[LayerId::SupplyRoutes]
    }

    fn render(&self, model: &dyn GameModel, surface: &mut dyn MapSurface) -> SyncResult<usize> {
        self.clear_owned(surface);

        let mut drawn = 0;
        for route in model.supply_routes() {
            if route.points.len() < 2 {
                warn!("skipping supply route with {} points", route.points.len());
                continue;
            }
            surface.add_path(
                LayerId::SupplyRoutes,
                PathLine {
                    points: route.points,
                    color: Palette::SUPPLY_ROUTE.to_string(),
                },
            );
            drawn += 1;
        }

        self.logger.record_pass(self.name(), drawn);
        Ok(drawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SupplyRoute;
    use crate::prelude::LatLon;
    use crate::surface::{Primitive, SceneSurface};
    use crate::testutil::StaticModel;

    #[test]
    fn each_route_becomes_one_path_through_all_points() {
        let points = vec![
            LatLon::new(41.0, 41.0),
            LatLon::new(41.5, 41.2),
            LatLon::new(42.0, 41.6),
        ];
        let model = StaticModel {
            supply_routes: vec![SupplyRoute {
                points: points.clone(),
            }],
            ..Default::default()
        };
        let mut surface = SceneSurface::new();
        SupplyRouteRenderer::new()
            .render(&model, &mut surface)
            .unwrap();

        match &surface.primitives(LayerId::SupplyRoutes)[0] {
            Primitive::Path(path) => assert_eq!(path.points, points),
            other => panic!("expected a path, got {:?}", other),
        }
    }

    #[test]
    fn degenerate_routes_are_skipped_without_panicking() {
        let model = StaticModel {
            supply_routes: vec![
                SupplyRoute {
                    points: vec![LatLon::new(41.0, 41.0)],
                },
                SupplyRoute {
                    points: vec![LatLon::new(41.0, 41.0), LatLon::new(42.0, 42.0)],
                },
            ],
            ..Default::default()
        };
        let mut surface = SceneSurface::new();
        let drawn = SupplyRouteRenderer::new()
            .render(&model, &mut surface)
            .unwrap();

        assert_eq!(drawn, 1);
        assert_eq!(surface.primitive_count(LayerId::SupplyRoutes), 1);
    }
}
