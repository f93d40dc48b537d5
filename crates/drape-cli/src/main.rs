//! drape CLI: render cloth animations, benchmark, inspect snapshots.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "drape")]
#[command(version, about = "drape: cloth simulation with a software rasterizer")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate and render frames to disk.
    Simulate(commands::SimulateArgs),

    /// Run scenarios headless and report timings.
    Benchmark {
        /// Which scenario to run (flag, sphere_drape, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Frames per scenario (defaults to each scenario's own count).
        #[arg(short, long)]
        frames: Option<u32>,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect a state snapshot file.
    Inspect {
        /// Path to snapshot file.
        path: PathBuf,
    },

    /// Validate a simulation config (TOML).
    Validate {
        /// Path to config file.
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Simulate(args) => commands::simulate(&args),
        Commands::Benchmark {
            scenario,
            frames,
            output,
        } => commands::benchmark(&scenario, frames, output.as_deref()),
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
