//! Events for steering the simulator from the outside.

/// Describes an event received by a [`Simulator`](crate::simulator::Simulator).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulatorEvent {
    /// The surface now has these dimensions, in device pixels.
    Resized { width: u32, height: u32 },

    /// Freeze node movement and drawing.
    Paused,

    /// Continue after [`SimulatorEvent::Paused`].
    Resumed,

    /// Cancel the animation for good.
    Stopped,
}
