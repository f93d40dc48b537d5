//! Pluggable event sinks.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::events::SimulationEvent;

/// Trait for event consumers.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &SimulationEvent);

    /// Called when the run ends. Flush buffers, close files, etc.
    fn finalize(&mut self) {}

    /// Human-readable sink name.
    fn name(&self) -> &str;
}

/// Event storage shared between a [`VecSink`] and its owner.
pub type SharedEvents = Arc<Mutex<Vec<SimulationEvent>>>;

/// Collects events in memory for tests and inspection.
///
/// The storage is shared, so the events can still be read after the
/// sink has been boxed into an [`EventBus`](crate::EventBus).
#[derive(Default)]
pub struct VecSink {
    events: SharedEvents,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the collected events.
    pub fn events(&self) -> SharedEvents {
        Arc::clone(&self.events)
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &SimulationEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// Logs every event through `tracing`.
pub struct TracingSink {
    level: tracing::Level,
}

impl TracingSink {
    pub fn new(level: tracing::Level) -> Self {
        Self { level }
    }

    /// Level every event is logged at.
    pub fn level(&self) -> tracing::Level {
        self.level
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(tracing::Level::DEBUG)
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &SimulationEvent) {
        // `tracing` macros need a constant level.
        match self.level {
            tracing::Level::ERROR => {
                tracing::error!(frame = event.frame, event = ?event.kind, "simulation_event")
            }
            tracing::Level::WARN => {
                tracing::warn!(frame = event.frame, event = ?event.kind, "simulation_event")
            }
            tracing::Level::INFO => {
                tracing::info!(frame = event.frame, event = ?event.kind, "simulation_event")
            }
            tracing::Level::DEBUG => {
                tracing::debug!(frame = event.frame, event = ?event.kind, "simulation_event")
            }
            tracing::Level::TRACE => {
                tracing::trace!(frame = event.frame, event = ?event.kind, "simulation_event")
            }
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}

/// Writes one JSON object per event to a file.
pub struct JsonLinesSink {
    writer: BufWriter<File>,
    failed: bool,
}

impl JsonLinesSink {
    /// Creates (or truncates) the file at `path`.
    pub fn create(path: &Path) -> std::io::Result<Self> {
        Ok(Self {
            writer: BufWriter::new(File::create(path)?),
            failed: false,
        })
    }

    fn write_event(&mut self, event: &SimulationEvent) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.writer, event)?;
        self.writer.write_all(b"\n")
    }
}

impl EventSink for JsonLinesSink {
    fn handle(&mut self, event: &SimulationEvent) {
        if self.failed {
            return;
        }
        if let Err(e) = self.write_event(event) {
            tracing::warn!(error = %e, "event log write failed, dropping further events");
            self.failed = true;
        }
    }

    fn finalize(&mut self) {
        if let Err(e) = self.writer.flush() {
            tracing::warn!(error = %e, "event log flush failed");
        }
    }

    fn name(&self) -> &str {
        "json_lines"
    }
}
