//! Ressources used by the particle simulator.

/// Surface dimensions in device pixels.
///
/// Bounce checks use these bounds, so a resize only changes where nodes turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Surface area in device pixels.
    pub fn area(&self) -> f64 {
        self.width as f64 * self.height as f64
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Edges are only drawn while their endpoints are closer than this.
pub struct ProximityThreshold(pub f32);

impl Default for ProximityThreshold {
    fn default() -> Self {
        Self(150.0)
    }
}

/// Whether the simulation advances on the next frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Running,
    Paused,
    /// Terminal. No event leaves this state.
    Stopped,
}
