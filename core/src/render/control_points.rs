use crate::layers::LayerId;
use crate::model::GameModel;
use crate::prelude::{EntityRenderer, SyncResult};
use crate::style::FactionStyle;
use crate::surface::{MapSurface, Marker, MarkerAction};
use crate::telemetry::log::LogManager;

/// Redraws the control-point markers. One marker per base; clicking it
/// opens the base menu through the model's action hook.
pub struct ControlPointRenderer {
    logger: LogManager,
}

impl ControlPointRenderer {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new(),
        }
    }
}

impl Default for ControlPointRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRenderer for ControlPointRenderer {
    fn name(&self) -> &'static str {
        "ControlPointRenderer"
    }

    fn owned_layers(&self) -> &'static [LayerId] {
        &[LayerId::ControlPoints]
    }

    fn render(&self, model: &dyn GameModel, surface: &mut dyn MapSurface) -> SyncResult<usize> {
        self.clear_owned(surface);

        let control_points = model.control_points();
        for cp in &control_points {
            let style = FactionStyle::of(cp.faction);
            surface.add_marker(
                LayerId::ControlPoints,
                Marker {
                    position: cp.position,
                    icon: style.icon,
                    tooltip: None,
                    action: Some(MarkerAction::OpenBaseMenu {
                        control_point: cp.id,
                    }),
                },
            );
        }

        self.logger.record_pass(self.name(), control_points.len());
        Ok(control_points.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ControlPoint;
    use crate::prelude::{Faction, LatLon};
    use crate::surface::{Primitive, SceneSurface};
    use crate::testutil::StaticModel;

    fn model_with_two_points() -> StaticModel {
        StaticModel {
            control_points: vec![
                ControlPoint::new(1, "Kobuleti", LatLon::new(41.9, 41.8), Faction::Blue),
                ControlPoint::new(2, "Senaki", LatLon::new(42.2, 42.0), Faction::Red),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn draws_one_marker_per_control_point() {
        let model = model_with_two_points();
        let mut surface = SceneSurface::new();
        let renderer = ControlPointRenderer::new();

        let drawn = renderer.render(&model, &mut surface).unwrap();
        assert_eq!(drawn, 2);
        assert_eq!(surface.primitive_count(LayerId::ControlPoints), 2);
    }

    #[test]
    fn markers_carry_the_base_menu_action() {
        let model = model_with_two_points();
        let mut surface = SceneSurface::new();
        ControlPointRenderer::new()
            .render(&model, &mut surface)
            .unwrap();

        match &surface.primitives(LayerId::ControlPoints)[1] {
            Primitive::Marker(marker) => {
                assert_eq!(
                    marker.action,
                    Some(MarkerAction::OpenBaseMenu { control_point: 2 })
                );
            }
            other => panic!("expected a marker, got {:?}", other),
        }
    }

    #[test]
    fn repeated_passes_leave_an_identical_layer() {
        let model = model_with_two_points();
        let mut surface = SceneSurface::new();
        let renderer = ControlPointRenderer::new();

        renderer.render(&model, &mut surface).unwrap();
        let first = surface.primitives(LayerId::ControlPoints).to_vec();
        renderer.render(&model, &mut surface).unwrap();

        assert_eq!(surface.primitives(LayerId::ControlPoints), first.as_slice());
    }
}
