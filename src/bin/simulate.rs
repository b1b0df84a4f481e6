//! FlyVibe balance simulator CLI.
//!
//! Flies autopilot runs through the real game loop and reports score,
//! survival and medal statistics.
//!
//! Usage:
//!   cargo run --bin flyvibe-sim -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin flyvibe-sim                        # 200 runs, normal mode
//!   cargo run --bin flyvibe-sim -- -n 50 --mode stormy
//!   cargo run --bin flyvibe-sim -- --seed 42 --json    # reproducible, saves JSON

use anyhow::{Context, Result};
use clap::Parser;
use flyvibe::core::{GameConfig, GameMode};
use flyvibe::simulator::{run_simulation, SimConfig};
use flyvibe::utils::{build_info, logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, long_version = build_info::LONG_VERSION, about = "FlyVibe balance simulator", long_about = None)]
struct Args {
    /// Number of runs
    #[arg(short = 'n', long, default_value_t = 200)]
    runs: u32,

    /// Game mode: normal, extreme, stormy or impossible
    #[arg(short, long, default_value = "normal")]
    mode: GameMode,

    /// Base seed; run i uses seed + i
    #[arg(long)]
    seed: Option<u64>,

    /// Stop a run after this many ticks
    #[arg(long, default_value_t = 36_000)]
    max_ticks: u64,

    /// Also write sim_report_<timestamp>.json
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Config file to simulate with (defaults to compiled defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print every run and enable debug logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_stderr_logging(args.verbose);

    let game = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("could not load config {}", path.display()))?,
        None => GameConfig::default(),
    };

    let sim = SimConfig {
        num_runs: args.runs,
        seed: args.seed,
        mode: args.mode,
        max_ticks_per_run: args.max_ticks,
        verbosity: if args.verbose { 2 } else { 1 },
        ..Default::default()
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              FLYVIBE BALANCE SIMULATOR                        ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", sim.num_runs);
    println!("  Mode:           {}", sim.mode.name());
    println!("  Max Ticks:      {}", sim.max_ticks_per_run);
    if let Some(seed) = sim.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&sim, &game);
    println!("{}", report.to_text());

    if args.json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())
            .with_context(|| format!("could not write {filename}"))?;
        println!("JSON report saved to: {}", filename);
    }
    Ok(())
}
