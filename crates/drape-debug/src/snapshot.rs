//! State snapshot serialization for replay and debugging.

use std::path::Path;

use drape_math::Vec3;
use drape_solver::state::{ClothState, Particle};
use drape_types::{DrapeError, DrapeResult};
use serde::{Deserialize, Serialize};

/// A complete cloth state at one frame.
///
/// Normals are not stored; they are rebuilt by the next step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Frames completed when the snapshot was taken.
    pub frame: u32,
    /// Elapsed simulation time.
    pub time: f32,
    /// Current positions, in particle order.
    pub positions: Vec<[f32; 3]>,
    /// Previous positions (Verlet history).
    pub previous: Vec<[f32; 3]>,
    /// Pin flags.
    pub pinned: Vec<bool>,
}

/// Aggregate numbers printed by `drape inspect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotSummary {
    pub particle_count: usize,
    pub pinned_count: usize,
    pub bounds_min: Vec3,
    pub bounds_max: Vec3,
    /// Largest per-step displacement of any particle.
    pub max_speed: f32,
    pub kinetic_energy: f64,
}

impl StateSnapshot {
    /// Captures `state` after `frame` completed frames.
    pub fn capture(frame: u32, state: &ClothState) -> Self {
        Self {
            frame,
            time: state.time,
            positions: state.particles.iter().map(|p| p.position.to_array()).collect(),
            previous: state.particles.iter().map(|p| p.previous.to_array()).collect(),
            pinned: state.particles.iter().map(|p| p.pinned).collect(),
        }
    }

    /// Rebuilds a cloth state from this snapshot.
    pub fn restore(&self) -> DrapeResult<ClothState> {
        self.check_lengths()?;
        let particles = self
            .positions
            .iter()
            .zip(&self.previous)
            .zip(&self.pinned)
            .map(|((&pos, &prev), &pinned)| Particle {
                position: Vec3::from_array(pos),
                previous: Vec3::from_array(prev),
                normal: Vec3::ZERO,
                pinned,
            })
            .collect();
        Ok(ClothState {
            particles,
            time: self.time,
        })
    }

    pub fn particle_count(&self) -> usize {
        self.positions.len()
    }

    /// Bounding box, speeds and energy of the captured state.
    pub fn summary(&self) -> SnapshotSummary {
        let mut bounds_min = Vec3::splat(f32::INFINITY);
        let mut bounds_max = Vec3::splat(f32::NEG_INFINITY);
        let mut max_speed = 0.0_f32;
        let mut kinetic_energy = 0.0_f64;

        for ((&pos, &prev), &pinned) in self.positions.iter().zip(&self.previous).zip(&self.pinned)
        {
            let p = Vec3::from_array(pos);
            bounds_min = bounds_min.min(p);
            bounds_max = bounds_max.max(p);
            let v = p - Vec3::from_array(prev);
            max_speed = max_speed.max(v.length());
            if !pinned {
                kinetic_energy += 0.5 * v.length_squared() as f64;
            }
        }

        if self.positions.is_empty() {
            bounds_min = Vec3::ZERO;
            bounds_max = Vec3::ZERO;
        }

        SnapshotSummary {
            particle_count: self.positions.len(),
            pinned_count: self.pinned.iter().filter(|p| **p).count(),
            bounds_min,
            bounds_max,
            max_speed,
            kinetic_energy,
        }
    }

    /// Serializes to compact binary format.
    pub fn to_bytes(&self) -> DrapeResult<Vec<u8>> {
        bincode::serialize(self)
            .map_err(|e| DrapeError::Serialization(format!("snapshot serialization failed: {e}")))
    }

    /// Deserializes from binary format.
    pub fn from_bytes(data: &[u8]) -> DrapeResult<Self> {
        let snapshot: Self = bincode::deserialize(data).map_err(|e| {
            DrapeError::Serialization(format!("snapshot deserialization failed: {e}"))
        })?;
        snapshot.check_lengths()?;
        Ok(snapshot)
    }

    /// Writes the binary snapshot to `path`.
    pub fn save(&self, path: &Path) -> DrapeResult<()> {
        std::fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    /// Reads a binary snapshot from `path`.
    pub fn load(path: &Path) -> DrapeResult<Self> {
        Self::from_bytes(&std::fs::read(path)?)
    }

    fn check_lengths(&self) -> DrapeResult<()> {
        let n = self.positions.len();
        if self.previous.len() != n || self.pinned.len() != n {
            return Err(DrapeError::Serialization(format!(
                "snapshot arrays disagree: {} positions, {} previous, {} pin flags",
                n,
                self.previous.len(),
                self.pinned.len()
            )));
        }
        Ok(())
    }
}
