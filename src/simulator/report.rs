//! Simulation report generation.

use super::runner::RunStats;
use crate::core::modes::GameMode;
use crate::core::scoring::Medal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated results from a batch of runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub mode: GameMode,
    pub num_runs: u32,
    pub runs_crashed: u32,
    pub runs_timed_out: u32,

    pub mean_score: f64,
    pub median_score: f64,
    pub max_score: f64,
    pub mean_passes: f64,
    /// Perfect passes over all passes.
    pub perfect_ratio: f64,
    pub mean_ticks: f64,
    pub mean_flaps: f64,
    pub max_difficulty: u32,

    /// Runs per medal name, plus `"None"`.
    pub medal_distribution: BTreeMap<&'static str, u32>,

    #[serde(skip)]
    pub runs: Vec<RunStats>,
}

fn mean(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    values.sum::<f64>() / count.max(1) as f64
}

fn median(mut values: Vec<f64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

impl SimReport {
    pub fn from_runs(mode: GameMode, runs: Vec<RunStats>) -> Self {
        let n = runs.len();
        let runs_crashed = runs.iter().filter(|r| r.crashed).count() as u32;

        let total_passes: u32 = runs.iter().map(|r| r.passes).sum();
        let total_perfect: u32 = runs.iter().map(|r| r.perfect_passes).sum();
        let perfect_ratio = if total_passes > 0 {
            total_perfect as f64 / total_passes as f64
        } else {
            0.0
        };

        let mut medal_distribution: BTreeMap<&'static str, u32> = Medal::ALL
            .iter()
            .map(|m| (m.name(), 0))
            .chain(std::iter::once(("None", 0)))
            .collect();
        for run in &runs {
            let key = run.medal.map_or("None", Medal::name);
            *medal_distribution.entry(key).or_insert(0) += 1;
        }

        Self {
            mode,
            num_runs: n as u32,
            runs_crashed,
            runs_timed_out: n as u32 - runs_crashed,
            mean_score: mean(runs.iter().map(|r| r.score), n),
            median_score: median(runs.iter().map(|r| r.score).collect()),
            max_score: runs.iter().map(|r| r.score).fold(0.0, f64::max),
            mean_passes: mean(runs.iter().map(|r| r.passes as f64), n),
            perfect_ratio,
            mean_ticks: mean(runs.iter().map(|r| r.ticks as f64), n),
            mean_flaps: mean(runs.iter().map(|r| r.flaps as f64), n),
            max_difficulty: runs.iter().map(|r| r.final_difficulty).max().unwrap_or(0),
            medal_distribution,
            runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str(&format!("                    {} mode\n", self.mode.name()));
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} crashed, {} timed out\n\n",
            self.num_runs, self.runs_crashed, self.runs_timed_out
        ));

        report.push_str("── SCORE ────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Mean Score:        {:.1}\n", self.mean_score));
        report.push_str(&format!("  Median Score:      {:.1}\n", self.median_score));
        report.push_str(&format!("  Max Score:         {:.1}\n", self.max_score));
        report.push_str(&format!("  Mean Passes:       {:.1}\n", self.mean_passes));
        report.push_str(&format!(
            "  Perfect Passes:    {:.1}%\n",
            self.perfect_ratio * 100.0
        ));
        report.push_str(&format!("  Max Difficulty:    {}\n\n", self.max_difficulty));

        report.push_str("── SURVIVAL ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Mean Ticks:        {:.0} ({:.1}s at 60 fps)\n",
            self.mean_ticks,
            self.mean_ticks / 60.0
        ));
        report.push_str(&format!("  Mean Flaps:        {:.0}\n\n", self.mean_flaps));

        report.push_str("── MEDALS ───────────────────────────────────────────────────────\n");
        let names = Medal::ALL.iter().map(|m| m.name()).chain(std::iter::once("None"));
        for name in names {
            let count = self.medal_distribution.get(name).copied().unwrap_or(0);
            let pct = count as f64 / self.num_runs.max(1) as f64 * 100.0;
            let bar = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  {:<9} {:>5.1}% {}\n", name, pct, bar));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
