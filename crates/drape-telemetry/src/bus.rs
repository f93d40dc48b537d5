//! Event bus with pluggable sinks.
//!
//! Producers `emit` into an `mpsc` channel; `flush` drains the channel
//! and hands every event to every registered sink in order.

use std::sync::mpsc;

use crate::events::SimulationEvent;
use crate::sinks::EventSink;

/// Broadcast event bus for simulation telemetry.
pub struct EventBus {
    sender: mpsc::Sender<SimulationEvent>,
    receiver: mpsc::Receiver<SimulationEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    /// Disabled bus is a no-op.
    enabled: bool,
    emitted: u64,
}

impl EventBus {
    /// Creates a new event bus with no sinks.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            sinks: Vec::new(),
            enabled: true,
            emitted: 0,
        }
    }

    /// Registers a sink to receive events.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Enables or disables the bus. Disabled bus drops events silently.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Emit an event. No-op when disabled.
    pub fn emit(&mut self, event: SimulationEvent) {
        if !self.enabled {
            return;
        }
        // The receiver lives as long as the bus.
        let _ = self.sender.send(event);
        self.emitted += 1;
    }

    /// Dispatch all pending events to the registered sinks.
    ///
    /// Call at the end of each frame and before shutdown.
    pub fn flush(&mut self) {
        while let Ok(event) = self.receiver.try_recv() {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
        }
    }

    /// Flushes pending events, then finalizes every sink.
    pub fn finalize(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }

    /// Number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Events accepted since creation.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
