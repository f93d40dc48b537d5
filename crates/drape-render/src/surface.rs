//! Pixel surface abstraction.
//!
//! The rasterizer only needs per-pixel RGBA access and a way to persist
//! the result. [`ImageSurface`] implements both on top of an
//! `image::RgbaImage`; the output format follows the file extension.

use std::path::Path;

use drape_types::{DrapeError, DrapeResult};
use image::{Rgba, RgbaImage};

/// A 2D grid of RGBA8 pixels.
pub trait PixelSurface {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Reads pixel `(x, y)`. Panics when out of bounds.
    fn pixel(&self, x: u32, y: u32) -> Rgba<u8>;

    /// Writes pixel `(x, y)`. Panics when out of bounds.
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba<u8>);

    /// Paints every pixel with `color`.
    fn fill(&mut self, color: Rgba<u8>) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Persists the surface as an image file.
    fn save(&self, path: &Path) -> DrapeResult<()>;
}

/// In-memory surface backed by `image::RgbaImage`.
#[derive(Debug, Clone)]
pub struct ImageSurface {
    image: RgbaImage,
}

impl ImageSurface {
    /// Creates a transparent black surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// Borrows the underlying image.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

impl PixelSurface for ImageSurface {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        self.image.put_pixel(x, y, color);
    }

    fn fill(&mut self, color: Rgba<u8>) {
        for px in self.image.pixels_mut() {
            *px = color;
        }
    }

    fn save(&self, path: &Path) -> DrapeResult<()> {
        self.image
            .save(path)
            .map_err(|e| DrapeError::Image(format!("failed to save {}: {e}", path.display())))
    }
}
