//! # drape-render
//!
//! Software rasterization of the cloth mesh into an RGBA pixel surface.
//!
//! The projection is orthographic: a particle at `(x, y, z)` lands on
//! pixel `(x, y)` with depth `z`, and larger `z` is nearer the viewer.
//! Every triangle is flat shaded from its own face normal.
//!
//! Provides the [`PixelSurface`] abstraction (backed by the `image`
//! crate), the per-frame [`DepthBuffer`], the triangle rasterizer, and
//! [`FrameSink`]s that persist rendered frames.

pub mod depth;
pub mod frame;
pub mod json_exporter;
pub mod png_sequence;
pub mod raster;
pub mod renderer;
pub mod surface;

pub use depth::DepthBuffer;
pub use frame::{render_frame, FrameRenderer, FrameStats};
pub use json_exporter::JsonFrameExporter;
pub use png_sequence::{frame_path, PngSequenceWriter};
pub use raster::{rasterize_triangle, shade, Coverage};
pub use renderer::{FrameSink, HeadlessSink, RenderFrame};
pub use surface::{ImageSurface, PixelSurface};
