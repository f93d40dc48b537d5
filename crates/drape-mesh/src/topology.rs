//! Constraint graph and triangle list of a cloth grid.
//!
//! Both lists are built once and never change. Their order is part of the
//! contract: the Gauss–Seidel solver sweeps constraints in exactly this
//! order, and the quad split fixes the winding that decides which side of
//! the cloth faces the light and the wind.

use drape_types::ParticleId;

use crate::grid::ClothGrid;

/// Keeps two particles at their rest distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceConstraint {
    /// First endpoint.
    pub a: ParticleId,
    /// Second endpoint.
    pub b: ParticleId,
    /// Distance captured at construction (the grid spacing).
    pub rest_length: f32,
}

/// Fixed topology of a cloth grid.
#[derive(Debug, Clone)]
pub struct Topology {
    /// Distance constraints in sweep order.
    pub constraints: Vec<DistanceConstraint>,
    /// Triangles as particle index triples, two per quad.
    pub triangles: Vec<[u32; 3]>,
}

impl Topology {
    /// Builds constraints and triangles for `grid`.
    ///
    /// Constraints are emitted row-major; at each particle the horizontal
    /// edge to its right neighbour comes first, then the vertical edge to
    /// the particle below. There are no shear or bending constraints.
    ///
    /// Each quad `(top_left, top_right, bot_left, bot_right)` splits into
    /// `[top_left, bot_left, top_right]` and `[top_right, bot_left, bot_right]`.
    /// On an undeformed grid both face normals point to -Z.
    pub fn build(grid: &ClothGrid) -> Self {
        let mut constraints = Vec::with_capacity(grid.constraint_count());
        for row in 0..grid.height {
            for col in 0..grid.width {
                if col + 1 < grid.width {
                    constraints.push(DistanceConstraint {
                        a: grid.index(row, col),
                        b: grid.index(row, col + 1),
                        rest_length: grid.spacing,
                    });
                }
                if row + 1 < grid.height {
                    constraints.push(DistanceConstraint {
                        a: grid.index(row, col),
                        b: grid.index(row + 1, col),
                        rest_length: grid.spacing,
                    });
                }
            }
        }

        let mut triangles = Vec::with_capacity(grid.triangle_count());
        for row in 0..grid.height.saturating_sub(1) {
            for col in 0..grid.width.saturating_sub(1) {
                let top_left = grid.index(row, col).0;
                let top_right = top_left + 1;
                let bot_left = top_left + grid.width;
                let bot_right = bot_left + 1;

                // Upper-left triangle
                triangles.push([top_left, bot_left, top_right]);
                // Lower-right triangle
                triangles.push([top_right, bot_left, bot_right]);
            }
        }

        Self {
            constraints,
            triangles,
        }
    }

    /// Number of distance constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}
