//! Verlet integration.
//!
//! Velocity is never stored: it is the difference between the current and
//! previous positions. The constraint solver only ever corrects positions,
//! and the next step picks up the correction as velocity for free.

use drape_math::Vec3;

use crate::state::Particle;

/// Advances every free particle by one damped Verlet step.
///
/// `position += (position - previous) * damping + (0, gravity, 0)`, after
/// which `previous` holds the old position. Pinned particles get neither
/// velocity nor gravity.
pub fn verlet_step(particles: &mut [Particle], damping: f32, gravity: f32) {
    let impulse = Vec3::new(0.0, gravity, 0.0);
    for p in particles.iter_mut().filter(|p| !p.pinned) {
        let velocity = p.velocity() * damping;
        p.previous = p.position;
        p.position += velocity + impulse;
    }
}
