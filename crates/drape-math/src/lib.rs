//! # drape-math
//!
//! Linear algebra primitives for drape.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Vec2`)
//! - Zero-safe normalization and un-normalized face normals
//! - Barycentric coordinates over a projected 2D triangle

pub mod barycentric;
pub mod vector;

// Re-export glam types as the canonical math types for drape.
pub use glam::{Vec2, Vec3};

pub use barycentric::{Barycentric, BarycentricFrame};
pub use vector::{face_normal, unit_or_zero};
