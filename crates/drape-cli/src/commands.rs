//! CLI command implementations.

use std::path::{Path, PathBuf};

use clap::Args;
use drape_debug::StateSnapshot;
use drape_render::{FrameSink, HeadlessSink, JsonFrameExporter, PngSequenceWriter};
use drape_sim::{FrameRunner, RunMetrics, ScenarioKind, Simulation, SimulationConfig};
use drape_telemetry::{EventBus, JsonLinesSink, TracingSink};

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Options for `drape simulate`.
#[derive(Args)]
pub struct SimulateArgs {
    /// Simulation config (TOML). Overrides --scenario.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Built-in scenario (flag, sphere_drape).
    #[arg(short, long, default_value = "flag")]
    pub scenario: String,

    /// Number of frames to render.
    #[arg(short, long)]
    pub frames: Option<u32>,

    /// Output path pattern; `{frame}` becomes the 3-digit frame index.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Write the particle positions of every frame to this JSON file
    /// instead of rendering images.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Continue from a state snapshot.
    #[arg(long)]
    pub resume: Option<PathBuf>,

    /// Save the final state snapshot here.
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Log every simulation event as JSON lines to this file.
    #[arg(long)]
    pub events: Option<PathBuf>,
}

/// Builds the run configuration from a file or a scenario, then applies overrides.
fn resolve_config(args: &SimulateArgs) -> Result<SimulationConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => args.scenario.parse::<ScenarioKind>()?.config(),
    };
    if let Some(frames) = args.frames {
        config.frames = frames;
    }
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    config.validate()?;
    Ok(config)
}

fn event_bus(events: Option<&Path>) -> Result<EventBus, Box<dyn std::error::Error>> {
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::default()));
    if let Some(path) = events {
        bus.add_sink(Box::new(JsonLinesSink::create(path)?));
    }
    Ok(bus)
}

/// Simulate and write frames.
pub fn simulate(args: &SimulateArgs) -> CliResult {
    let config = resolve_config(args)?;

    println!("drape simulation");
    println!("────────────────");
    println!(
        "Scenario: {}  ({}x{} grid, {} frames, {}x{} canvas)",
        config.name,
        config.grid.width,
        config.grid.height,
        config.frames,
        config.canvas.width,
        config.canvas.height
    );
    println!();

    let mut sim = Simulation::from_config(&config)?;
    if let Some(path) = &args.resume {
        let snapshot = StateSnapshot::load(path)?;
        sim.resume(snapshot.restore()?, snapshot.frame)?;
        println!("Resumed from {} at frame {}", path.display(), snapshot.frame);
    }

    let mut sink: Box<dyn FrameSink> = match &args.json {
        Some(path) => Box::new(JsonFrameExporter::new(path)),
        None => Box::new(PngSequenceWriter::new(config.output.clone())?),
    };
    let mut surface = sim.new_surface();
    let mut bus = event_bus(args.events.as_deref())?;

    let metrics = FrameRunner::run(
        &mut sim,
        &mut surface,
        sink.as_mut(),
        &mut bus,
        config.frames,
    )?;

    if let Some(path) = &args.snapshot {
        StateSnapshot::capture(sim.frame(), sim.state()).save(path)?;
        println!("Snapshot written to: {}", path.display());
    }

    println!();
    println!("Process finished. {} frames created.", sink.frame_count());
    println!("  Wall time:     {:.3}s", metrics.total_wall_time);
    println!("  Avg step:      {:.3}ms", metrics.avg_step_time * 1000.0);
    println!("  Avg render:    {:.3}ms", metrics.avg_render_time * 1000.0);
    if let Some(path) = &args.json {
        println!("  Animation:     {}", path.display());
    }
    Ok(())
}

/// Run scenarios headless.
pub fn benchmark(scenario_name: &str, frames: Option<u32>, output_path: Option<&Path>) -> CliResult {
    println!("drape benchmark");
    println!("═══════════════");
    println!();

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        vec![scenario_name.parse()?]
    };

    let mut all_metrics = Vec::new();
    for kind in scenarios {
        let config = kind.config();
        let frames = frames.unwrap_or(config.frames);
        let mut sim = Simulation::from_config(&config)?;
        let mut surface = sim.new_surface();
        let mut bus = EventBus::new();
        bus.set_enabled(false);

        println!(
            "Running: {} ({} particles, {} tris, {} frames)",
            kind.name(),
            sim.particles().len(),
            sim.triangles().len(),
            frames
        );

        let metrics =
            FrameRunner::run(&mut sim, &mut surface, &mut HeadlessSink::new(), &mut bus, frames)
                .map_err(|e| format!("benchmark failed: {e}"))?;

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg step:      {:.3}ms", metrics.avg_step_time * 1000.0);
        println!("  Avg render:    {:.3}ms", metrics.avg_render_time * 1000.0);
        println!("  Final KE:      {:.6e}", metrics.final_kinetic_energy);
        println!("  Violation:     {:.4}", metrics.final_violation);
        println!("  Contacts:      {}", metrics.total_contacts);
        println!();

        all_metrics.push(metrics);
    }

    let csv = RunMetrics::to_csv(&all_metrics);
    match output_path {
        Some(path) => {
            std::fs::write(path, &csv)?;
            println!("Results written to: {}", path.display());
        }
        None => {
            println!("CSV Output:");
            println!("{csv}");
        }
    }
    Ok(())
}

/// Inspect a state snapshot.
pub fn inspect(path: &Path) -> CliResult {
    println!("drape snapshot inspector");
    println!("────────────────────────");
    println!();

    let snapshot = StateSnapshot::load(path)?;
    let s = snapshot.summary();

    println!("Frame:        {}", snapshot.frame);
    println!("Sim time:     {:.4}", snapshot.time);
    println!("Particles:    {}", s.particle_count);
    println!("Pinned:       {}", s.pinned_count);
    println!(
        "Bounds:       [{:.2}, {:.2}, {:.2}] .. [{:.2}, {:.2}, {:.2}]",
        s.bounds_min.x, s.bounds_min.y, s.bounds_min.z, s.bounds_max.x, s.bounds_max.y, s.bounds_max.z
    );
    println!("Max speed:    {:.4}", s.max_speed);
    println!("Kinetic E:    {:.6e}", s.kinetic_energy);
    Ok(())
}

/// Validate a simulation config.
pub fn validate(path: &Path) -> CliResult {
    println!("drape validator");
    println!("───────────────");
    println!();

    let config = SimulationConfig::load(path)?;
    let grid = config.grid.to_grid();
    println!("✅ Config is valid.");
    println!(
        "  Grid:        {}x{} ({} particles, {} constraints, {} triangles)",
        grid.width,
        grid.height,
        grid.particle_count(),
        grid.constraint_count(),
        grid.triangle_count()
    );
    println!("  Canvas:      {}x{}", config.canvas.width, config.canvas.height);
    println!("  Frames:      {}", config.frames);
    println!("  Output:      {}", config.output);
    println!(
        "  Sphere:      {}",
        if config.sphere.is_some() { "yes" } else { "no" }
    );
    Ok(())
}
