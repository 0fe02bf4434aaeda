use crate::layers::LayerId;
use crate::model::{GameModel, GroundObject};
use crate::prelude::{EntityRenderer, SyncResult};
use crate::style::FactionStyle;
use crate::surface::{CircleRing, MapSurface, Marker};
use crate::telemetry::log::LogManager;

const RING_WEIGHT: f32 = 2.0;

/// Redraws ground objects: one marker per object plus its SAM detection and
/// threat rings on the faction-specific air-defense layers.
pub struct GroundObjectRenderer {
    logger: LogManager,
}

impl GroundObjectRenderer {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new(),
        }
    }

    fn draw_sam_rings(&self, tgo: &GroundObject, surface: &mut dyn MapSurface) -> usize {
        let style = FactionStyle::of(tgo.faction);

        for &range in &tgo.sam_detection_ranges {
            surface.add_circle(
                style.detection_layer,
                CircleRing {
                    center: tgo.position,
                    radius_m: range,
                    color: style.detection_color.to_string(),
                    weight: RING_WEIGHT,
                },
            );
        }

        for &range in &tgo.sam_threat_ranges {
            surface.add_circle(
                style.threat_layer,
                CircleRing {
                    center: tgo.position,
                    radius_m: range,
                    color: style.color.to_string(),
                    weight: RING_WEIGHT,
                },
            );
        }

        tgo.sam_detection_ranges.len() + tgo.sam_threat_ranges.len()
    }
}

impl Default for GroundObjectRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRenderer for GroundObjectRenderer {
    fn name(&self) -> &'static str {
        "GroundObjectRenderer"
    }

    fn owned_layers(&self) -> &'static [LayerId] {
        &[
            LayerId::GroundObjects,
            LayerId::BlueSamDetection,
            LayerId::RedSamDetection,
            LayerId::BlueSamThreat,
            LayerId::RedSamThreat,
        ]
    }

    fn render(&self, model: &dyn GameModel, surface: &mut dyn MapSurface) -> SyncResult<usize> {
        self.clear_owned(surface);

        let mut drawn = 0;
        let ground_objects = model.ground_objects();
        for tgo in &ground_objects {
            let style = FactionStyle::of(tgo.faction);
            surface.add_marker(
                LayerId::GroundObjects,
                Marker {
                    position: tgo.position,
                    icon: style.icon,
                    tooltip: None,
                    action: None,
                },
            );
            drawn += 1 + self.draw_sam_rings(tgo, surface);
        }

        self.logger.record_pass(self.name(), drawn);
        Ok(drawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::{Faction, LatLon};
    use crate::surface::{Primitive, SceneSurface};
    use crate::testutil::StaticModel;

    fn sam_site(faction: Faction, detection: Vec<f64>, threat: Vec<f64>) -> GroundObject {
        GroundObject {
            id: 10,
            name: "SAM site".into(),
            position: LatLon::new(42.0, 41.5),
            faction,
            sam_detection_ranges: detection,
            sam_threat_ranges: threat,
        }
    }

    #[test]
    fn enemy_threat_rings_target_only_the_enemy_layer() {
        let model = StaticModel {
            ground_objects: vec![sam_site(Faction::Red, vec![], vec![10_000.0, 20_000.0])],
            ..Default::default()
        };
        let mut surface = SceneSurface::new();
        GroundObjectRenderer::new()
            .render(&model, &mut surface)
            .unwrap();

        assert_eq!(surface.primitive_count(LayerId::RedSamThreat), 2);
        assert_eq!(surface.primitive_count(LayerId::BlueSamThreat), 0);
        for primitive in surface.primitives(LayerId::RedSamThreat) {
            match primitive {
                Primitive::Circle(ring) => assert_eq!(ring.color, "#c85050"),
                other => panic!("expected a ring, got {:?}", other),
            }
        }
    }

    #[test]
    fn detection_and_threat_rings_are_independent_collections() {
        let model = StaticModel {
            ground_objects: vec![sam_site(Faction::Blue, vec![45_000.0], vec![])],
            ..Default::default()
        };
        let mut surface = SceneSurface::new();
        GroundObjectRenderer::new()
            .render(&model, &mut surface)
            .unwrap();

        assert_eq!(surface.primitive_count(LayerId::BlueSamDetection), 1);
        assert_eq!(surface.primitive_count(LayerId::BlueSamThreat), 0);
        assert_eq!(surface.primitive_count(LayerId::GroundObjects), 1);
    }

    #[test]
    fn pass_clears_all_owned_layers_before_redrawing() {
        let mut model = StaticModel {
            ground_objects: vec![sam_site(Faction::Red, vec![30_000.0], vec![15_000.0])],
            ..Default::default()
        };
        let mut surface = SceneSurface::new();
        let renderer = GroundObjectRenderer::new();
        renderer.render(&model, &mut surface).unwrap();

        model.ground_objects.clear();
        renderer.render(&model, &mut surface).unwrap();

        for layer in renderer.owned_layers() {
            assert_eq!(surface.primitive_count(*layer), 0);
        }
    }
}
