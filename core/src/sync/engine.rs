use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::layers::LayerRegistry;
use crate::model::{GameEvent, GameModel};
use crate::prelude::{EntityRenderer, SyncError, SyncResult};
use crate::render::{
    ControlPointRenderer, FlightPlanRenderer, GroundObjectRenderer, SupplyRouteRenderer,
};
use crate::surface::MapSurface;
use crate::telemetry::{LogManager, MetricsRecorder};

/// Engine lifecycle. The one-way transition to `Synced` happens on the
/// initial full draw; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Uninitialized,
    Synced,
}

/// Maps the remote game model onto the fixed layer set.
///
/// Each notification is handled to completion before the next one, so a
/// handler's clear-then-repopulate sequence is atomic from the perspective
/// of every other handler. A multi-worker host must preserve that
/// serialization (a single-consumer queue) or add per-layer exclusion.
pub struct SyncEngine<S: MapSurface> {
    model: Arc<dyn GameModel>,
    surface: S,
    registry: LayerRegistry,
    control_points: ControlPointRenderer,
    ground_objects: GroundObjectRenderer,
    supply_routes: SupplyRouteRenderer,
    flight_plans: FlightPlanRenderer,
    metrics: MetricsRecorder,
    logger: LogManager,
    state: SyncState,
}

impl<S: MapSurface> SyncEngine<S> {
    pub fn new(model: Arc<dyn GameModel>, surface: S) -> Self {
        Self {
            model,
            surface,
            registry: LayerRegistry::new(),
            control_points: ControlPointRenderer::new(),
            ground_objects: GroundObjectRenderer::new(),
            supply_routes: SupplyRouteRenderer::new(),
            flight_plans: FlightPlanRenderer::new(),
            metrics: MetricsRecorder::new(),
            logger: LogManager::new(),
            state: SyncState::Uninitialized,
        }
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn registry(&self) -> &LayerRegistry {
        &self.registry
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }

    /// One-shot transition to `Synced`: recenter, then run every renderer
    /// once in the fixed order. Calling it again is a logged no-op.
    pub fn connect(&mut self) -> SyncResult<()> {
        if self.state == SyncState::Synced {
            self.logger.record("connect called while already synced");
            return Ok(());
        }

        self.surface.recenter(self.model.map_center(), true);
        self.full_draw()?;
        self.state = SyncState::Synced;
        self.logger.record("initial draw complete, engine synced");
        Ok(())
    }

    fn full_draw(&mut self) -> SyncResult<()> {
        let drawn = self
            .control_points
            .render(self.model.as_ref(), &mut self.surface)?;
        self.metrics.record_pass(drawn);
        let drawn = self
            .ground_objects
            .render(self.model.as_ref(), &mut self.surface)?;
        self.metrics.record_pass(drawn);
        let drawn = self
            .supply_routes
            .render(self.model.as_ref(), &mut self.surface)?;
        self.metrics.record_pass(drawn);
        let drawn = self
            .flight_plans
            .render(self.model.as_ref(), &mut self.surface)?;
        self.metrics.record_pass(drawn);
        Ok(())
    }

    /// Dispatches one change notification. Handlers re-read full state, so
    /// re-delivering a notification for the same logical state is safe.
    pub fn handle_event(&mut self, event: GameEvent) -> SyncResult<()> {
        if self.state != SyncState::Synced {
            self.metrics.record_error();
            return Err(SyncError::NotConnected(format!(
                "dropping {:?} before the initial draw",
                event
            )));
        }

        match event {
            GameEvent::Cleared => {
                self.registry.clear_all(&mut self.surface);
                self.logger.record("model cleared, emptied every layer");
            }
            GameEvent::MapCenterChanged(center) => {
                self.surface.recenter(center, true);
            }
            GameEvent::ControlPointsChanged => {
                let drawn = self
                    .control_points
                    .render(self.model.as_ref(), &mut self.surface)?;
                self.metrics.record_pass(drawn);
            }
            GameEvent::GroundObjectsChanged => {
                let drawn = self
                    .ground_objects
                    .render(self.model.as_ref(), &mut self.surface)?;
                self.metrics.record_pass(drawn);
            }
            GameEvent::SupplyRoutesChanged => {
                let drawn = self
                    .supply_routes
                    .render(self.model.as_ref(), &mut self.surface)?;
                self.metrics.record_pass(drawn);
            }
            GameEvent::FlightsChanged => {
                let drawn = self
                    .flight_plans
                    .render(self.model.as_ref(), &mut self.surface)?;
                self.metrics.record_pass(drawn);
            }
        }

        Ok(())
    }

    /// Synchronously handles every already-queued notification.
    pub fn drain(&mut self, events: &mut UnboundedReceiver<GameEvent>) -> SyncResult<usize> {
        let mut handled = 0;
        while let Ok(event) = events.try_recv() {
            self.handle_event(event)?;
            handled += 1;
        }
        Ok(handled)
    }

    /// Single-consumer notification loop: one event at a time, in arrival
    /// order, to completion. `after_pass` runs once per handled event with
    /// the surface and a metrics snapshot so the host can publish the
    /// updated scene.
    pub async fn run<F>(
        &mut self,
        events: &mut UnboundedReceiver<GameEvent>,
        mut after_pass: F,
    ) -> SyncResult<()>
    where
        F: FnMut(&S, (usize, usize, usize)),
    {
        while let Some(event) = events.recv().await {
            self.handle_event(event)?;
            after_pass(&self.surface, self.metrics.snapshot());
        }
        Err(SyncError::ChannelClosed(
            "remote model dropped its notification sender".into(),
        ))
    }
}
