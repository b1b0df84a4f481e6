//! Simulation configuration.

use crate::core::modes::GameMode;

/// Configuration for a batch of autopilot runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random). Run `i` uses `seed + i`.
    pub seed: Option<u64>,

    pub mode: GameMode,

    /// A run that survives this many ticks is stopped and counted as timed out
    pub max_ticks_per_run: u64,

    /// How far below the gap midpoint the autopilot sinks before flapping
    pub flap_margin: f64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 200,
            seed: None,
            mode: GameMode::Normal,
            // ten minutes at 60 fps
            max_ticks_per_run: 36_000,
            flap_margin: 0.0,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small seeded batch, handy for tests and quick balance checks.
    pub fn quick(num_runs: u32, seed: u64, mode: GameMode) -> Self {
        Self {
            num_runs,
            seed: Some(seed),
            mode,
            max_ticks_per_run: 6_000,
            verbosity: 0,
            ..Default::default()
        }
    }
}
