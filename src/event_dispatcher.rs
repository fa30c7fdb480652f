use crate::simulator::ressources::events::SimulatorEvent;
use log::debug;
use specs::shrev::{EventChannel, ReaderId};
use std::sync::{Arc, PoisonError, RwLock};

/// Shared handle for sending [`SimulatorEvent`]s to a running field.
///
/// Clones share the same channel, so a host can keep one while the
/// simulator owns another.
#[derive(Clone)]
pub struct EventDispatcher {
    pub sim_chan: Arc<RwLock<EventChannel<SimulatorEvent>>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            sim_chan: Arc::new(RwLock::new(EventChannel::new())),
        }
    }

    pub fn send(&self, event: SimulatorEvent) {
        debug!("Dispatching {event:?}");
        self.sim_chan
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .single_write(event);
    }

    /// Registers a reader that sees every event sent from now on.
    pub fn register_reader(&self) -> ReaderId<SimulatorEvent> {
        self.sim_chan
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .register_reader()
    }

    /// Drains the events `reader` has not seen yet.
    pub fn read(&self, reader: &mut ReaderId<SimulatorEvent>) -> Vec<SimulatorEvent> {
        self.sim_chan
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .read(reader)
            .copied()
            .collect()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
