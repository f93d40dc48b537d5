//! Triangle rasterization.
//!
//! For each triangle: flat-shade from the face normal, clip the
//! floor/ceil bounding box of its projection to the surface, and test
//! every integer pixel coordinate inside the box with barycentric
//! weights. Covered pixels interpolate depth and go through the
//! depth buffer before being written.

use drape_math::{face_normal, unit_or_zero, BarycentricFrame, Vec2, Vec3};
use drape_solver::state::Particle;
use drape_types::constants::{BARYCENTRIC_EPSILON, DEGENERATE_DENOMINATOR, MIN_SHADE};
use image::Rgba;

use crate::depth::DepthBuffer;
use crate::surface::PixelSurface;

/// What happened to one triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// The triangle was rasterized; `pixels` passed the depth test.
    Drawn { pixels: u32 },
    /// The projection had (near) zero area and was skipped.
    Degenerate,
}

/// Maps a light intensity in `[0, 1]` to a gray level in `[MIN_SHADE, 255]`.
#[inline]
pub fn shade(intensity: f32) -> u8 {
    (255.0 * intensity).clamp(MIN_SHADE as f32, 255.0) as u8
}

/// Flat-shaded gray for the face `(p1, p2, p3)` under `light`.
fn face_color(p1: Vec3, p2: Vec3, p3: Vec3, light: Vec3) -> Rgba<u8> {
    let normal = unit_or_zero(face_normal(p1, p2, p3));
    let intensity = normal.dot(unit_or_zero(light)).max(0.0);
    let gray = shade(intensity);
    Rgba([gray, gray, gray, 255])
}

/// Rasterizes one triangle into `surface`, depth-tested against `depth`.
///
/// `depth` must match the surface dimensions.
pub fn rasterize_triangle<S: PixelSurface + ?Sized>(
    surface: &mut S,
    depth: &mut DepthBuffer,
    vertices: [&Particle; 3],
    light: Vec3,
) -> Coverage {
    let [p1, p2, p3] = vertices.map(|p| p.position);

    let Some(frame) =
        BarycentricFrame::new(p1.truncate(), p2.truncate(), p3.truncate(), DEGENERATE_DENOMINATOR)
    else {
        return Coverage::Degenerate;
    };

    let color = face_color(p1, p2, p3, light);

    let min_x = p1.x.min(p2.x).min(p3.x).floor();
    let max_x = p1.x.max(p2.x).max(p3.x).ceil();
    let min_y = p1.y.min(p2.y).min(p3.y).floor();
    let max_y = p1.y.max(p2.y).max(p3.y).ceil();
    if !(min_x.is_finite() && max_x.is_finite() && min_y.is_finite() && max_y.is_finite()) {
        return Coverage::Degenerate;
    }

    let x0 = (min_x as i64).max(0);
    let x1 = (max_x as i64).min(surface.width() as i64 - 1);
    let y0 = (min_y as i64).max(0);
    let y1 = (max_y as i64).min(surface.height() as i64 - 1);

    let mut pixels = 0;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let w = frame.weights(Vec2::new(x as f32, y as f32));
            if !w.is_inside(BARYCENTRIC_EPSILON) {
                continue;
            }

            let z = w.interpolate(p1.z, p2.z, p3.z);
            let (px, py) = (x as u32, y as u32);
            if depth.test_and_set(px, py, z) {
                surface.set_pixel(px, py, color);
                pixels += 1;
            }
        }
    }

    Coverage::Drawn { pixels }
}
