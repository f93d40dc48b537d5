//! # drape-sim
//!
//! The per-frame cloth pipeline and everything needed to drive it.
//!
//! A [`Simulation`] owns the grid topology, the particle state and the
//! optional sphere collider. Each `step()` runs the physics phases in a
//! fixed order:
//!
//! ```text
//! time advance → Verlet → vertex normals → wind → constraints → (sphere)
//! ```
//!
//! after which `render()` rasterizes the cloth into a pixel surface.
//! [`FrameRunner`] repeats step, render and output for a number of
//! frames, emitting telemetry and collecting [`RunMetrics`].

pub mod config;
pub mod metrics;
pub mod runner;
pub mod scenarios;
pub mod simulation;

pub use config::{CanvasConfig, GridConfig, SimulationConfig, SphereConfig};
pub use metrics::RunMetrics;
pub use runner::FrameRunner;
pub use scenarios::ScenarioKind;
pub use simulation::{Simulation, StepReport};
