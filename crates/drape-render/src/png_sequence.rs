//! Numbered image sequence output.
//!
//! Frame paths come from a pattern containing `{frame}`, which is replaced
//! by the zero-padded three-digit frame index: `outputs/frame_{frame}.png`
//! yields `outputs/frame_000.png`, `outputs/frame_001.png`, and so on.

use std::path::{Path, PathBuf};

use drape_types::{DrapeError, DrapeResult};

use crate::renderer::{FrameSink, RenderFrame};

/// Placeholder substituted with the frame index.
pub const FRAME_PLACEHOLDER: &str = "{frame}";

/// Expands `pattern` for frame `index`.
pub fn frame_path(pattern: &str, index: u32) -> PathBuf {
    PathBuf::from(pattern.replace(FRAME_PLACEHOLDER, &format!("{index:03}")))
}

/// Saves every submitted surface to its own numbered file.
#[derive(Debug)]
pub struct PngSequenceWriter {
    pattern: String,
    frames: u32,
    last_path: Option<PathBuf>,
}

impl PngSequenceWriter {
    /// Fails if `pattern` has no `{frame}` placeholder, since every frame
    /// would then overwrite the same file.
    pub fn new(pattern: impl Into<String>) -> DrapeResult<Self> {
        let pattern = pattern.into();
        if !pattern.contains(FRAME_PLACEHOLDER) {
            return Err(DrapeError::InvalidConfig(format!(
                "output pattern '{pattern}' must contain {FRAME_PLACEHOLDER}"
            )));
        }
        Ok(Self {
            pattern,
            frames: 0,
            last_path: None,
        })
    }

    /// Path of the most recently written frame.
    pub fn last_path(&self) -> Option<&Path> {
        self.last_path.as_deref()
    }
}

impl FrameSink for PngSequenceWriter {
    fn init(&mut self, _triangles: &[[u32; 3]], _particle_count: usize) -> DrapeResult<()> {
        let first = frame_path(&self.pattern, 0);
        if let Some(dir) = first.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame<'_>) -> DrapeResult<()> {
        let path = frame_path(&self.pattern, frame.index);
        frame.surface.save(&path)?;
        tracing::info!(frame = frame.index, path = %path.display(), "frame saved");
        self.frames += 1;
        self.last_path = Some(path);
        Ok(())
    }

    fn finalize(&mut self) -> DrapeResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "png_sequence"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
