//! Small vector operations shared by the physics and the rasterizer.

use glam::Vec3;

/// Normalizes `v`, returning the zero vector when `v` has zero length.
///
/// Degenerate mesh regions produce zero normals, and every consumer
/// (wind, shading) treats a zero normal as "no contribution".
#[inline]
pub fn unit_or_zero(v: Vec3) -> Vec3 {
    let len = v.length();
    if len == 0.0 || !len.is_finite() {
        Vec3::ZERO
    } else {
        v / len
    }
}

/// Un-normalized face normal of triangle `(a, b, c)`: `(b - a) × (c - a)`.
///
/// The magnitude is twice the triangle area, so summing these at shared
/// vertices gives area-weighted vertex normals.
#[inline]
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a)
}
