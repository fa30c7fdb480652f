//! Animated particle network background: drifting nodes joined by proximity
//! edges, redrawn every display refresh.
//!
//! # Example
//! ```
//! use neural_field::prelude::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let config = FieldConfig::default();
//! let size = SurfaceSize::new(800, 600);
//! let mut animation = Animation::seeded(
//!     &config,
//!     size,
//!     RecordingSurface::new(),
//!     &mut StdRng::seed_from_u64(7),
//! );
//!
//! animation.start();
//! assert_eq!(animation.frame(), FrameStatus::Drawn);
//! assert_eq!(animation.simulator().node_count(), 24);
//!
//! animation.stop();
//! assert_eq!(animation.frame(), FrameStatus::Stopped);
//! ```

pub mod animation;
pub mod config;
pub mod event_dispatcher;
pub mod init_field;
pub mod renderer;
pub mod simulator;
#[cfg(target_arch = "wasm32")]
pub mod web;

/// Exports all the core types of the library.
pub mod prelude {
    pub use crate::animation::{Animation, FrameStatus};
    pub use crate::config::{ConfigError, FieldConfig};
    pub use crate::event_dispatcher::EventDispatcher;
    pub use crate::init_field::{node_count, proximity_opacity, InitField, NodeSeed, ProximityEdge};
    pub use crate::renderer::{
        color::Rgba,
        surface::{DrawCommand, RecordingSurface, Surface},
        Renderer,
    };
    pub use crate::simulator::ressources::events::SimulatorEvent;
    pub use crate::simulator::ressources::simulator_vars::{
        ProximityThreshold, RunState, SurfaceSize,
    };
    pub use crate::simulator::{EdgeState, NodeState, Simulator, SimulatorBuilder};
}
