//! Frame-by-frame lifecycle of a particle field.
//!
//! An [`Animation`] does not schedule itself. The host calls
//! [`Animation::frame`] once per display refresh and keeps doing so until it
//! returns [`FrameStatus::Stopped`].

use crate::{
    config::FieldConfig,
    event_dispatcher::EventDispatcher,
    init_field::InitField,
    renderer::{surface::Surface, Renderer},
    simulator::{
        ressources::{
            events::SimulatorEvent,
            simulator_vars::{RunState, SurfaceSize},
        },
        Simulator,
    },
};
use log::info;
use rand::Rng;

/// Outcome of a single [`Animation::frame`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    /// [`Animation::start`] has not been called yet. Nothing happened.
    Idle,
    /// The field moved and was redrawn.
    Drawn,
    /// Nothing moved and nothing was drawn. Keep scheduling frames.
    Paused,
    /// The animation is over. Stop scheduling frames.
    Stopped,
}

pub struct Animation<S: Surface> {
    simulator: Simulator<'static, 'static>,
    renderer: Renderer,
    surface: S,
    started: bool,
}

impl<S: Surface> Animation<S> {
    pub fn new(simulator: Simulator<'static, 'static>, renderer: Renderer, surface: S) -> Self {
        Self {
            simulator,
            renderer,
            surface,
            started: false,
        }
    }

    /// Seeds a random field of `size` and wraps it, not yet started.
    pub fn seeded<R: Rng + ?Sized>(
        config: &FieldConfig,
        size: SurfaceSize,
        surface: S,
        rng: &mut R,
    ) -> Self {
        let field = InitField::random(size, config, rng);
        let simulator = Simulator::builder()
            .proximity_threshold(config.proximity_threshold)
            .build(field);
        Self::new(simulator, Renderer::new(config), surface)
    }

    /// Lets subsequent frames draw. Returns `false` when already started or stopped.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.simulator.sync_events();
        if self.simulator.run_state() == RunState::Stopped {
            return false;
        }

        self.started = true;
        info!(
            "Particle field started: {} nodes, {} edges on {}x{}",
            self.simulator.node_count(),
            self.simulator.edge_count(),
            self.simulator.surface_size().width,
            self.simulator.surface_size().height
        );
        true
    }

    /// Runs one display refresh: applies pending events, then clears the
    /// surface, draws the edges, advances the nodes and draws them.
    pub fn frame(&mut self) -> FrameStatus {
        if !self.started {
            return FrameStatus::Idle;
        }

        self.simulator.sync_events();
        match self.simulator.run_state() {
            RunState::Stopped => FrameStatus::Stopped,
            RunState::Paused => FrameStatus::Paused,
            RunState::Running => {
                self.surface.clear();
                self.renderer
                    .draw_edges(&self.simulator.world, &mut self.surface);
                self.simulator.step();
                self.renderer
                    .draw_nodes(&self.simulator.world, &mut self.surface);
                FrameStatus::Drawn
            }
        }
    }

    /// Cancels the animation. The next [`Animation::frame`] reports [`FrameStatus::Stopped`].
    pub fn stop(&self) {
        self.simulator.events().send(SimulatorEvent::Stopped);
    }

    pub fn pause(&self) {
        self.simulator.events().send(SimulatorEvent::Paused);
    }

    pub fn resume(&self) {
        self.simulator.events().send(SimulatorEvent::Resumed);
    }

    /// New bounce bounds, applied on the next frame. Nodes are not moved.
    pub fn resize(&self, width: u32, height: u32) {
        self.simulator
            .events()
            .send(SimulatorEvent::Resized { width, height });
    }

    /// Event handle that outlives borrows of the animation.
    pub fn handle(&self) -> EventDispatcher {
        self.simulator.events().clone()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn simulator(&self) -> &Simulator<'static, 'static> {
        &self.simulator
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
