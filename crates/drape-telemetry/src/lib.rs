//! # drape-telemetry
//!
//! Event bus for simulation telemetry. The frame loop emits structured
//! events (frame timing, constraint relaxation, sphere contacts,
//! rasterization counts) that are consumed by pluggable sinks: the
//! `tracing` log, a JSON-lines file, or an in-memory `Vec` for tests.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, JsonLinesSink, SharedEvents, TracingSink, VecSink};
