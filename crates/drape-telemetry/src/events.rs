//! Simulation event types.
//!
//! Events are lightweight value types tagged with the frame they belong
//! to. They carry just enough data to monitor a run without holding on
//! to particle state.

use serde::{Deserialize, Serialize};

/// A simulation event emitted by the frame loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Frame number (0-indexed).
    pub frame: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Frame started.
    FrameBegin {
        /// Simulation time after the step's time advance.
        sim_time: f32,
    },

    /// Frame completed (step, render and output).
    FrameEnd {
        /// Wall-clock time for the whole frame (seconds).
        wall_time: f64,
    },

    /// Distance constraint relaxation finished.
    ConstraintRelaxation {
        /// Gauss–Seidel sweeps performed.
        iterations: u32,
        /// Constraint visits skipped for coincident endpoints.
        skipped: u32,
        /// Summed |length - rest| before the first sweep.
        violation_before: f32,
        /// Summed |length - rest| after the last sweep.
        violation_after: f32,
    },

    /// Sphere collider pushed particles out.
    SphereContact {
        /// Particles moved to the sphere surface.
        resolved: u32,
        /// Deepest penetration below the contact radius.
        max_penetration: f32,
    },

    /// Kinetic energy of the free particles.
    Energy {
        /// 0.5 * |v|^2 summed, unit mass.
        kinetic: f64,
    },

    /// Rasterization counters for the frame.
    FrameRendered {
        triangles_drawn: u32,
        triangles_degenerate: u32,
        pixels_written: u32,
    },

    /// A frame was handed to the output sink.
    FrameSaved {
        /// Output sink name.
        sink: String,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given frame.
    pub fn new(frame: u32, kind: EventKind) -> Self {
        Self { frame, kind }
    }
}
