//! Simulation state: the ordered particle array.
//!
//! Particle `i` is grid particle `i`; the order never changes, so the
//! constraint and triangle indices built by `drape-mesh` stay valid for
//! the whole run.

use drape_math::Vec3;
use drape_mesh::{ClothGrid, PinPolicy};
use drape_types::DrapeResult;

/// One cloth particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Current position.
    pub position: Vec3,
    /// Position one step ago. `position - previous` is the implicit velocity.
    pub previous: Vec3,
    /// Vertex normal, rebuilt every step. Unit length or zero.
    pub normal: Vec3,
    /// Pinned particles are skipped by every physics phase.
    pub pinned: bool,
}

impl Particle {
    /// Creates a particle at rest.
    pub fn new(position: Vec3, pinned: bool) -> Self {
        Self {
            position,
            previous: position,
            normal: Vec3::ZERO,
            pinned,
        }
    }

    /// Implicit Verlet velocity (displacement per step).
    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.position - self.previous
    }
}

/// All mutable cloth state.
#[derive(Debug, Clone)]
pub struct ClothState {
    /// Particles in grid identity order.
    pub particles: Vec<Particle>,
    /// Elapsed simulation time.
    pub time: f32,
}

impl ClothState {
    /// Lays particles out on `grid` at rest, pinned according to `pins`.
    pub fn from_grid(grid: &ClothGrid, pins: &PinPolicy) -> DrapeResult<Self> {
        grid.validate()?;

        let mut particles = Vec::with_capacity(grid.particle_count());
        for row in 0..grid.height {
            for col in 0..grid.width {
                particles.push(Particle::new(
                    grid.rest_position(row, col),
                    pins.is_pinned(grid, row, col),
                ));
            }
        }

        Ok(Self {
            particles,
            time: 0.0,
        })
    }

    /// Number of particles.
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Number of pinned particles.
    pub fn pinned_count(&self) -> usize {
        self.particles.iter().filter(|p| p.pinned).count()
    }

    /// Current positions, in identity order.
    pub fn positions(&self) -> Vec<Vec3> {
        self.particles.iter().map(|p| p.position).collect()
    }

    /// `0.5 · Σ |v|²` over free particles, with unit mass and the
    /// per-step implicit velocity. Settles toward zero as the cloth rests.
    pub fn kinetic_energy(&self) -> f64 {
        self.particles
            .iter()
            .filter(|p| !p.pinned)
            .map(|p| 0.5 * p.velocity().length_squared() as f64)
            .sum()
    }

    /// Largest distance any particle has moved away from `reference`.
    pub fn max_displacement(&self, reference: &[Vec3]) -> f32 {
        self.particles
            .iter()
            .zip(reference)
            .map(|(p, r)| p.position.distance(*r))
            .fold(0.0_f32, f32::max)
    }
}
