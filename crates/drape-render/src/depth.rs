//! Per-frame depth buffer.
//!
//! Larger depth means nearer the viewer. Every entry starts at negative
//! infinity ("nothing seen yet"), so the first surface drawn to a pixel
//! always passes.

/// One `f32` depth per pixel.
#[derive(Debug, Clone)]
pub struct DepthBuffer {
    width: u32,
    height: u32,
    depth: Vec<f32>,
}

impl DepthBuffer {
    /// Creates a cleared buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            depth: vec![f32::NEG_INFINITY; width as usize * height as usize],
        }
    }

    /// Forgets everything drawn so far.
    pub fn clear(&mut self) {
        self.depth.fill(f32::NEG_INFINITY);
    }

    /// Resizes to `width × height` and clears.
    pub fn reset(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.depth.clear();
        self.depth
            .resize(width as usize * height as usize, f32::NEG_INFINITY);
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Nearest depth recorded at `(x, y)`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.depth[self.offset(x, y)]
    }

    /// Records `z` at `(x, y)` if it is nearer than what is there.
    ///
    /// Returns whether the caller should write the pixel.
    #[inline]
    pub fn test_and_set(&mut self, x: u32, y: u32, z: f32) -> bool {
        let i = self.offset(x, y);
        if z > self.depth[i] {
            self.depth[i] = z;
            true
        } else {
            false
        }
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
