//! # drape-solver
//!
//! Per-frame cloth physics: integration, normals, wind, and constraint
//! relaxation over a [`ClothState`].
//!
//! ## Key Types
//!
//! - [`ClothState`]: Ordered particle array plus elapsed simulation time
//! - [`SolverConfig`] / [`WindConfig`]: Step parameters
//! - [`RelaxationReport`]: Constraint violation before/after a solve
//!
//! Phases are plain functions over `&mut [Particle]` so a pipeline can
//! run them in its own fixed order.

pub mod config;
pub mod constraints;
pub mod integrator;
pub mod normals;
pub mod state;
pub mod wind;

pub use config::{SolverConfig, WindConfig};
pub use constraints::{relax_constraints, RelaxationReport, Violation};
pub use state::{ClothState, Particle};
