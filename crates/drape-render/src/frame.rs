//! Whole-frame rendering.
//!
//! A frame starts from the background color and a fully cleared depth
//! buffer; nothing carries over from the previous frame.

use drape_math::Vec3;
use drape_solver::state::Particle;
use drape_types::constants::{BACKGROUND_GRAY, DEFAULT_LIGHT};
use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::depth::DepthBuffer;
use crate::raster::{rasterize_triangle, Coverage};
use crate::surface::PixelSurface;

/// Per-frame rasterization counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameStats {
    /// Triangles that went through the pixel loop.
    pub triangles_drawn: u32,
    /// Triangles skipped for zero projected area.
    pub triangles_degenerate: u32,
    /// Pixel writes that passed the depth test.
    pub pixels_written: u32,
}

/// Renders frames, reusing its depth buffer allocation between them.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    depth: DepthBuffer,
    /// Direction light travels along when shading faces.
    pub light: Vec3,
    /// Color painted before any triangle.
    pub background: Rgba<u8>,
}

impl FrameRenderer {
    /// Creates a renderer with the given light and the default background.
    pub fn new(light: Vec3) -> Self {
        Self {
            depth: DepthBuffer::new(0, 0),
            light,
            background: Rgba([BACKGROUND_GRAY, BACKGROUND_GRAY, BACKGROUND_GRAY, 255]),
        }
    }

    /// Depth buffer left by the last rendered frame.
    pub fn depth(&self) -> &DepthBuffer {
        &self.depth
    }

    /// Clears `surface` and draws every triangle of `particles` into it.
    pub fn render<S: PixelSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        triangles: &[[u32; 3]],
        particles: &[Particle],
    ) -> FrameStats {
        surface.fill(self.background);
        self.depth.reset(surface.width(), surface.height());

        let mut stats = FrameStats::default();
        for &[a, b, c] in triangles {
            let vertices = [
                &particles[a as usize],
                &particles[b as usize],
                &particles[c as usize],
            ];
            match rasterize_triangle(surface, &mut self.depth, vertices, self.light) {
                Coverage::Drawn { pixels } => {
                    stats.triangles_drawn += 1;
                    stats.pixels_written += pixels;
                }
                Coverage::Degenerate => stats.triangles_degenerate += 1,
            }
        }
        stats
    }
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new(Vec3::from_array(DEFAULT_LIGHT))
    }
}

/// Renders one frame with a freshly allocated depth buffer.
pub fn render_frame<S: PixelSurface + ?Sized>(
    surface: &mut S,
    triangles: &[[u32; 3]],
    particles: &[Particle],
    light: Vec3,
) -> FrameStats {
    FrameRenderer::new(light).render(surface, triangles, particles)
}
