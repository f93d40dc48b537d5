//! Vertex normal computation from the cloth triangles.
//!
//! Computes area-weighted vertex normals by accumulating
//! face normals from each adjacent triangle.

use drape_math::{face_normal, unit_or_zero, Vec3};

use crate::state::Particle;

/// Recompute particle normals from triangle geometry (area-weighted).
///
/// Each triangle's un-normalized face normal `(b - a) × (c - a)` is added
/// to all three of its particles, then every sum is normalized. Particles
/// whose sum is zero (no triangles, or only degenerate ones) get a zero
/// normal.
pub fn accumulate_vertex_normals(particles: &mut [Particle], triangles: &[[u32; 3]]) {
    for p in particles.iter_mut() {
        p.normal = Vec3::ZERO;
    }

    for &[ia, ib, ic] in triangles {
        let a = ia as usize;
        let b = ib as usize;
        let c = ic as usize;

        let n = face_normal(
            particles[a].position,
            particles[b].position,
            particles[c].position,
        );

        particles[a].normal += n;
        particles[b].normal += n;
        particles[c].normal += n;
    }

    for p in particles.iter_mut() {
        p.normal = unit_or_zero(p.normal);
    }
}
