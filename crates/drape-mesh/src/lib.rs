//! # drape-mesh
//!
//! Rectangular cloth grid and its fixed topology.
//!
//! ## Key Types
//!
//! - [`ClothGrid`]: Particle layout: dimensions, spacing, origin.
//! - [`PinPolicy`]: Which particles are anchored in place.
//! - [`Topology`]: Distance constraints and the triangle list, both in
//!   a fixed construction order that the solver and renderer rely on.

pub mod grid;
pub mod topology;

pub use grid::{ClothGrid, PinPolicy};
pub use topology::{DistanceConstraint, Topology};
