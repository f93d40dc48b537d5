//! Barycentric coordinates over a 2D triangle.
//!
//! Weights `(a, b, c)` belong to vertices `(p1, p2, p3)`. They sum to one;
//! a negative weight means the point lies outside the opposite edge.

use glam::Vec2;

/// Barycentric weights of a point relative to a triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barycentric {
    /// Weight of the first vertex.
    pub a: f32,
    /// Weight of the second vertex.
    pub b: f32,
    /// Weight of the third vertex.
    pub c: f32,
}

impl Barycentric {
    /// Sum of the three weights (one, up to rounding).
    #[inline]
    pub fn sum(&self) -> f32 {
        self.a + self.b + self.c
    }

    /// True when no weight is more negative than `-epsilon`.
    #[inline]
    pub fn is_inside(&self, epsilon: f32) -> bool {
        self.a >= -epsilon && self.b >= -epsilon && self.c >= -epsilon
    }

    /// Interpolates a per-vertex scalar (e.g. depth).
    #[inline]
    pub fn interpolate(&self, v1: f32, v2: f32, v3: f32) -> f32 {
        self.a * v1 + self.b * v2 + self.c * v3
    }
}

/// A triangle prepared for repeated barycentric queries.
///
/// The denominator depends only on the triangle, so it is computed once
/// per triangle rather than once per pixel.
#[derive(Debug, Clone, Copy)]
pub struct BarycentricFrame {
    p1: Vec2,
    p2: Vec2,
    p3: Vec2,
    denominator: f32,
}

impl BarycentricFrame {
    /// Prepares triangle `(p1, p2, p3)`.
    ///
    /// Returns `None` when `|denominator| < min_denominator`, i.e. the
    /// triangle has (near) zero projected area.
    pub fn new(p1: Vec2, p2: Vec2, p3: Vec2, min_denominator: f32) -> Option<Self> {
        let denominator = (p2.y - p3.y) * (p1.x - p3.x) + (p3.x - p2.x) * (p1.y - p3.y);
        if denominator.abs() < min_denominator || !denominator.is_finite() {
            return None;
        }
        Some(Self {
            p1,
            p2,
            p3,
            denominator,
        })
    }

    /// Signed denominator, twice the signed area of the triangle.
    #[inline]
    pub fn denominator(&self) -> f32 {
        self.denominator
    }

    /// Barycentric weights of `p`.
    #[inline]
    pub fn weights(&self, p: Vec2) -> Barycentric {
        let dx = p.x - self.p3.x;
        let dy = p.y - self.p3.y;
        let a = ((self.p2.y - self.p3.y) * dx + (self.p3.x - self.p2.x) * dy) / self.denominator;
        let b = ((self.p3.y - self.p1.y) * dx + (self.p1.x - self.p3.x) * dy) / self.denominator;
        Barycentric {
            a,
            b,
            c: 1.0 - a - b,
        }
    }
}
