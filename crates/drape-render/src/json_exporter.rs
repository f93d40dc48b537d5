//! JSON frame exporter.
//!
//! Captures the particle positions of every frame together with the
//! triangle indices and writes the whole animation as one JSON document
//! on `finalize()`.

use std::path::PathBuf;

use drape_types::{DrapeError, DrapeResult};
use serde::Serialize;

use crate::renderer::{FrameSink, RenderFrame};

#[derive(Serialize)]
struct FrameData {
    frame: u32,
    time: f32,
    positions: Vec<f32>, // [x0,y0,z0, x1,y1,z1, ...]
}

#[derive(Serialize)]
struct AnimationData<'a> {
    particle_count: usize,
    triangle_count: usize,
    indices: &'a [u32],
    frames: &'a [FrameData],
}

/// Writes all submitted frames to a single JSON file.
pub struct JsonFrameExporter {
    output_path: PathBuf,
    indices: Vec<u32>,
    particle_count: usize,
    frames: Vec<FrameData>,
}

impl JsonFrameExporter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            indices: Vec::new(),
            particle_count: 0,
            frames: Vec::new(),
        }
    }
}

impl FrameSink for JsonFrameExporter {
    fn init(&mut self, triangles: &[[u32; 3]], particle_count: usize) -> DrapeResult<()> {
        self.particle_count = particle_count;
        self.indices = triangles.iter().flatten().copied().collect();
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame<'_>) -> DrapeResult<()> {
        let positions = frame
            .particles
            .iter()
            .flat_map(|p| p.position.to_array())
            .collect();
        self.frames.push(FrameData {
            frame: frame.index,
            time: frame.time,
            positions,
        });
        Ok(())
    }

    fn finalize(&mut self) -> DrapeResult<()> {
        let data = AnimationData {
            particle_count: self.particle_count,
            triangle_count: self.indices.len() / 3,
            indices: &self.indices,
            frames: &self.frames,
        };
        let json = serde_json::to_string(&data)
            .map_err(|e| DrapeError::Serialization(format!("JSON serialization failed: {e}")))?;
        std::fs::write(&self.output_path, json)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.frames.len() as u32
    }
}
