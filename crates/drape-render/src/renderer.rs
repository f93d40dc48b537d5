//! Frame sinks and the headless sink.
//!
//! A sink is handed every rendered frame in order. It may persist the
//! pixels, record the particle positions, or simply count frames for
//! benchmarks and CI.

use drape_solver::state::Particle;
use drape_types::DrapeResult;

use crate::surface::PixelSurface;

/// One rendered frame, borrowed from the simulation and the surface.
pub struct RenderFrame<'a> {
    /// Zero-based frame index.
    pub index: u32,
    /// Simulated time at this frame.
    pub time: f32,
    /// Particles as they were rasterized.
    pub particles: &'a [Particle],
    /// The surface the frame was drawn into.
    pub surface: &'a dyn PixelSurface,
}

/// Consumer of rendered frames.
///
/// # Implementations
/// - [`HeadlessSink`]: counts frames and discards them
/// - [`PngSequenceWriter`](crate::PngSequenceWriter): one image per frame
/// - [`JsonFrameExporter`](crate::JsonFrameExporter): positions of every frame in one JSON file
pub trait FrameSink: Send {
    /// Called once before the first frame with the mesh topology.
    fn init(&mut self, triangles: &[[u32; 3]], particle_count: usize) -> DrapeResult<()>;

    /// Submit a frame.
    fn submit_frame(&mut self, frame: &RenderFrame<'_>) -> DrapeResult<()>;

    /// Flush buffers, close files.
    fn finalize(&mut self) -> DrapeResult<()>;

    /// Sink name.
    fn name(&self) -> &str;

    /// Number of frames submitted so far.
    fn frame_count(&self) -> u32;
}

/// Discards every frame.
#[derive(Debug, Default)]
pub struct HeadlessSink {
    frames: u32,
}

impl HeadlessSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameSink for HeadlessSink {
    fn init(&mut self, _triangles: &[[u32; 3]], _particle_count: usize) -> DrapeResult<()> {
        Ok(())
    }

    fn submit_frame(&mut self, _frame: &RenderFrame<'_>) -> DrapeResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn finalize(&mut self) -> DrapeResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
