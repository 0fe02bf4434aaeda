use log::warn;

use crate::layers::LayerId;
use crate::model::{Flight, GameModel, Waypoint};
use crate::prelude::{EntityRenderer, SyncResult};
use crate::style::{FactionStyle, MarkerIcon, Palette};
use crate::surface::{MapSurface, Marker, PathLine};
use crate::telemetry::log::LogManager;

/// Redraws every flight plan.
///
/// The selected flight (at most one) is drawn strictly after all unselected
/// flights so its highlighted path and waypoint markers sit on top. The
/// surface only offers implicit z-ordering by draw sequence, so this is a
/// deferred draw within one pass, not a z-index guarantee across passes.
pub struct FlightPlanRenderer {
    logger: LogManager,
}

impl FlightPlanRenderer {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new(),
        }
    }

    fn waypoint_tooltip(waypoint: &Waypoint) -> String {
        format!(
            "{} {}\n{:.0} ft {}\n{}",
            waypoint.number,
            waypoint.name,
            waypoint.altitude_ft,
            waypoint.altitude_reference,
            waypoint.timing
        )
    }

    fn draw_flight_plan(&self, flight: &Flight, surface: &mut dyn MapSurface) -> usize {
        let style = FactionStyle::of(flight.faction);
        let layer = style.plan_layer;

        let Some(departure) = flight.flight_plan.first() else {
            warn!("skipping flight {} with an empty flight plan", flight.callsign);
            return 0;
        };

        // The departure waypoint gets no marker (it is likely coincident
        // with the landing waypoint), but the path starts from it.
        let mut points = vec![departure.position];
        let mut drawn = 0;

        for waypoint in &flight.flight_plan[1..] {
            if !waypoint.is_divert {
                points.push(waypoint.position);
            }

            if flight.selected {
                let marker = Marker {
                    position: waypoint.position,
                    icon: MarkerIcon::Waypoint,
                    tooltip: Some(Self::waypoint_tooltip(waypoint)),
                    action: None,
                };
                surface.add_marker(layer, marker.clone());
                surface.add_marker(LayerId::SelectedPlans, marker);
                drawn += 2;
            }
        }

        if flight.selected {
            let path = PathLine {
                points,
                color: Palette::HIGHLIGHT.to_string(),
            };
            surface.add_path(LayerId::SelectedPlans, path.clone());
            surface.add_path(layer, path);
            drawn += 2;
        } else {
            surface.add_path(
                layer,
                PathLine {
                    points,
                    color: style.color.to_string(),
                },
            );
            drawn += 1;
        }

        drawn
    }
}

impl Default for FlightPlanRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRenderer for FlightPlanRenderer {
    fn name(&self) -> &'static str {
        "FlightPlanRenderer"
    }

    fn owned_layers(&self) -> &'static [LayerId] {
        &[LayerId::BluePlans, LayerId::RedPlans, LayerId::SelectedPlans]
    }

    fn render(&self, model: &dyn GameModel, surface: &mut dyn MapSurface) -> SyncResult<usize> {
        self.clear_owned(surface);

        let flights = model.flights();
        let mut selected = None;
        let mut drawn = 0;

        for flight in &flights {
            if flight.selected {
                selected = Some(flight);
            } else {
                drawn += self.draw_flight_plan(flight, surface);
            }
        }

        if let Some(flight) = selected {
            drawn += self.draw_flight_plan(flight, surface);
        }

        self.logger.record_pass(self.name(), drawn);
        Ok(drawn)
    }
}
