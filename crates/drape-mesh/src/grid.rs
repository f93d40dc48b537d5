//! Cloth grid layout and pinning.
//!
//! Particle `(row, col)` has identity `row * width + col` and rests at
//! `origin + (col * spacing, row * spacing, 0)`. Rows grow along +Y,
//! which points down the canvas.

use drape_math::Vec3;
use drape_types::constants::DEFAULT_GRID_ORIGIN;
use drape_types::{DrapeError, DrapeResult, ParticleId};
use serde::{Deserialize, Serialize};

/// Dimensions and placement of a rectangular particle grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClothGrid {
    /// Particles per row.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
    /// Rest distance between horizontally or vertically adjacent particles.
    pub spacing: f32,
    /// Rest position of particle (0, 0).
    pub origin: Vec3,
}

impl ClothGrid {
    /// Creates a grid at the default origin.
    pub fn new(width: u32, height: u32, spacing: f32) -> Self {
        Self {
            width,
            height,
            spacing,
            origin: Vec3::from_array(DEFAULT_GRID_ORIGIN),
        }
    }

    /// Moves the grid so particle (0, 0) rests at `origin`.
    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    /// Rejects grids the physics cannot run on.
    ///
    /// A single row or column is a rope and is accepted.
    pub fn validate(&self) -> DrapeResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(DrapeError::InvalidGrid(format!(
                "grid must have at least one particle per axis, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(DrapeError::InvalidGrid(format!(
                "spacing must be positive and finite, got {}",
                self.spacing
            )));
        }
        if !self.origin.is_finite() {
            return Err(DrapeError::InvalidGrid("origin must be finite".into()));
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(DrapeError::InvalidGrid(format!(
                "{}x{} particles overflow the index space",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Particle identity for `(row, col)`.
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> ParticleId {
        ParticleId(row * self.width + col)
    }

    /// Rest position of particle `(row, col)`.
    #[inline]
    pub fn rest_position(&self, row: u32, col: u32) -> Vec3 {
        self.origin + Vec3::new(col as f32 * self.spacing, row as f32 * self.spacing, 0.0)
    }

    /// `width * height`.
    pub fn particle_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Horizontal plus vertical edges: `(W-1)·H + W·(H-1)`.
    pub fn constraint_count(&self) -> usize {
        let w = self.width as usize;
        let h = self.height as usize;
        w.saturating_sub(1) * h + w * h.saturating_sub(1)
    }

    /// Two triangles per quad cell.
    pub fn triangle_count(&self) -> usize {
        let w = self.width as usize;
        let h = self.height as usize;
        2 * w.saturating_sub(1) * h.saturating_sub(1)
    }
}

/// Rule deciding which particles are pinned at construction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PinPolicy {
    /// Row 0 at columns 0, `width / 2` and `width - 1`.
    #[default]
    TopAnchors,
    /// Every particle of row 0.
    TopRow,
    /// Row 0 at columns 0 and `width - 1`.
    TopCorners,
    /// An explicit list of particle indices. Out-of-range entries are ignored.
    Indices { indices: Vec<u32> },
    /// Nothing is pinned; the cloth falls freely.
    None,
}

impl PinPolicy {
    /// Whether particle `(row, col)` of `grid` is pinned.
    pub fn is_pinned(&self, grid: &ClothGrid, row: u32, col: u32) -> bool {
        let last = grid.width.saturating_sub(1);
        match self {
            PinPolicy::TopAnchors => row == 0 && (col == 0 || col == grid.width / 2 || col == last),
            PinPolicy::TopRow => row == 0,
            PinPolicy::TopCorners => row == 0 && (col == 0 || col == last),
            PinPolicy::Indices { indices } => indices.contains(&grid.index(row, col).0),
            PinPolicy::None => false,
        }
    }

    /// Per-particle pin flags in identity order.
    pub fn pinned_mask(&self, grid: &ClothGrid) -> Vec<bool> {
        let mut mask = Vec::with_capacity(grid.particle_count());
        for row in 0..grid.height {
            for col in 0..grid.width {
                mask.push(self.is_pinned(grid, row, col));
            }
        }
        mask
    }
}
