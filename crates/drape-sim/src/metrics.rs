//! Run metrics collected by the frame runner.

use serde::{Deserialize, Serialize};

/// Metrics collected from one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Scenario or config name.
    pub scenario: String,
    /// Frames completed.
    pub frames: u32,
    pub particle_count: usize,
    pub triangle_count: usize,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average physics step time (seconds).
    pub avg_step_time: f64,
    /// Average rasterization time (seconds).
    pub avg_render_time: f64,
    /// Slowest whole frame, output included (seconds).
    pub max_frame_time: f64,
    /// Kinetic energy of the free particles after the last frame.
    pub final_kinetic_energy: f64,
    /// Largest particle displacement from its position before the run.
    pub max_displacement: f32,
    /// Summed constraint violation after the last frame's relaxation.
    pub final_violation: f32,
    /// Sphere contacts resolved over the whole run.
    pub total_contacts: u64,
    /// Pixels written in the last frame.
    pub last_pixels_written: u32,
}

impl RunMetrics {
    pub fn to_csv_header() -> String {
        "scenario,particles,triangles,frames,total_wall_time_s,avg_step_ms,avg_render_ms,max_frame_ms,final_ke,max_displacement,final_violation,total_contacts,last_pixels".to_string()
    }

    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{:.6},{:.4},{:.4},{:.4},{:.6e},{:.6},{:.6},{},{}",
            self.scenario,
            self.particle_count,
            self.triangle_count,
            self.frames,
            self.total_wall_time,
            self.avg_step_time * 1000.0,
            self.avg_render_time * 1000.0,
            self.max_frame_time * 1000.0,
            self.final_kinetic_energy,
            self.max_displacement,
            self.final_violation,
            self.total_contacts,
            self.last_pixels_written,
        )
    }

    /// Header plus one row per run.
    pub fn to_csv(metrics: &[RunMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
