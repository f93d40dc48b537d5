//! Stylized wind.
//!
//! The wind displaces particles directly along their normals instead of
//! accelerating them. The next integration and constraint passes smooth the
//! nudge out, which gives a fluttering look rather than a physical force.

use drape_math::{unit_or_zero, Vec3};

use crate::state::Particle;

/// Wind direction at simulation time `t`: `(sin 2t + 0.5, cos t, sin t)`.
///
/// `cos t` and `sin t` never vanish together, so the wind is never zero.
pub fn wind_at(t: f32) -> Vec3 {
    Vec3::new((t * 2.0).sin() + 0.5, t.cos(), t.sin())
}

/// Pushes each free particle along its normal by
/// `max(0, n̂ · ŵ) * strength`.
///
/// Surfaces facing away from the wind are left alone; there is no suction.
/// Returns how many particles moved.
pub fn apply_wind(particles: &mut [Particle], wind: Vec3, strength: f32) -> usize {
    let direction = unit_or_zero(wind);
    let mut pushed = 0;

    for p in particles.iter_mut().filter(|p| !p.pinned) {
        let alignment = unit_or_zero(p.normal).dot(direction).max(0.0);
        if alignment > 0.0 {
            p.position += p.normal * (alignment * strength);
            pushed += 1;
        }
    }

    pushed
}
