//! Frame runner: step, render, output, repeat.

use std::time::Instant;

use drape_render::{FrameSink, PixelSurface, RenderFrame};
use drape_telemetry::{EventBus, EventKind, SimulationEvent};
use drape_types::DrapeResult;

use crate::metrics::RunMetrics;
use crate::simulation::Simulation;

/// Drives a [`Simulation`] for a number of frames.
pub struct FrameRunner;

impl FrameRunner {
    /// Runs `frames` frames and returns the collected metrics.
    ///
    /// Frame indices handed to `sink` continue from `sim.frame()`, so a
    /// resumed simulation keeps numbering where it left off. The first
    /// sink error aborts the run.
    pub fn run<S: PixelSurface>(
        sim: &mut Simulation,
        surface: &mut S,
        sink: &mut dyn FrameSink,
        bus: &mut EventBus,
        frames: u32,
    ) -> DrapeResult<RunMetrics> {
        sink.init(sim.triangles(), sim.particles().len())?;

        let initial = sim.state().positions();
        let mut step_time = 0.0_f64;
        let mut render_time = 0.0_f64;
        let mut max_frame_time = 0.0_f64;
        let mut total_contacts = 0_u64;
        let mut final_violation = 0.0_f32;
        let mut last_pixels_written = 0;

        tracing::info!(
            scenario = sim.name(),
            frames,
            sink = sink.name(),
            "run started"
        );
        let total_start = Instant::now();

        for _ in 0..frames {
            let index = sim.frame();
            let frame_start = Instant::now();

            let report = sim.step();
            step_time += frame_start.elapsed().as_secs_f64();
            bus.emit(SimulationEvent::new(
                index,
                EventKind::FrameBegin {
                    sim_time: report.time,
                },
            ));
            bus.emit(SimulationEvent::new(
                index,
                EventKind::ConstraintRelaxation {
                    iterations: report.relaxation.iterations,
                    skipped: report.relaxation.skipped,
                    violation_before: report.relaxation.before.total,
                    violation_after: report.relaxation.after.total,
                },
            ));
            if let Some(contact) = report.contact.filter(|c| !c.is_empty()) {
                total_contacts += contact.resolved_count as u64;
                bus.emit(SimulationEvent::new(
                    index,
                    EventKind::SphereContact {
                        resolved: contact.resolved_count,
                        max_penetration: contact.max_penetration,
                    },
                ));
            }
            final_violation = report.relaxation.after.total;

            let render_start = Instant::now();
            let stats = sim.render(surface);
            render_time += render_start.elapsed().as_secs_f64();
            last_pixels_written = stats.pixels_written;
            bus.emit(SimulationEvent::new(
                index,
                EventKind::FrameRendered {
                    triangles_drawn: stats.triangles_drawn,
                    triangles_degenerate: stats.triangles_degenerate,
                    pixels_written: stats.pixels_written,
                },
            ));

            let frame = RenderFrame {
                index,
                time: sim.time(),
                particles: sim.particles(),
                surface: &*surface,
            };
            sink.submit_frame(&frame)?;
            bus.emit(SimulationEvent::new(
                index,
                EventKind::FrameSaved {
                    sink: sink.name().to_string(),
                },
            ));

            let wall_time = frame_start.elapsed().as_secs_f64();
            max_frame_time = max_frame_time.max(wall_time);
            bus.emit(SimulationEvent::new(index, EventKind::FrameEnd { wall_time }));
            bus.flush();
        }

        sink.finalize()?;
        bus.emit(SimulationEvent::new(
            sim.frame(),
            EventKind::Energy {
                kinetic: sim.state().kinetic_energy(),
            },
        ));
        bus.finalize();

        let total_wall_time = total_start.elapsed().as_secs_f64();
        let per_frame = |t: f64| if frames > 0 { t / frames as f64 } else { 0.0 };

        let metrics = RunMetrics {
            scenario: sim.name().to_string(),
            frames,
            particle_count: sim.particles().len(),
            triangle_count: sim.triangles().len(),
            total_wall_time,
            avg_step_time: per_frame(step_time),
            avg_render_time: per_frame(render_time),
            max_frame_time,
            final_kinetic_energy: sim.state().kinetic_energy(),
            max_displacement: sim.state().max_displacement(&initial),
            final_violation,
            total_contacts,
            last_pixels_written,
        };

        tracing::info!(
            scenario = %metrics.scenario,
            frames,
            wall_time_s = metrics.total_wall_time,
            "run finished"
        );
        Ok(metrics)
    }
}
