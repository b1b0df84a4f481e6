//! Drives real [`Session`]s with the autopilot and collects per-run stats.
//!
//! Nothing here re-implements game rules; every run goes through the same
//! `Session::tick` the terminal game uses, and statistics come from the
//! returned `TickEvents`.

use super::autopilot::Autopilot;
use super::config::SimConfig;
use super::report::SimReport;
use crate::core::config::GameConfig;
use crate::core::scoring::Medal;
use crate::core::session::{GameState, Session};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Outcome of one autopilot run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStats {
    pub score: f64,
    pub passes: u32,
    pub perfect_passes: u32,
    pub flaps: u32,
    /// Ticks spent airborne.
    pub ticks: u64,
    pub crashed: bool,
    pub final_difficulty: u32,
    pub medal: Option<Medal>,
}

/// Run the full batch and return a report.
pub fn run_simulation(sim: &SimConfig, game: &GameConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(sim.num_runs as usize);

    for run_idx in 0..sim.num_runs {
        let mut rng = match sim.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(sim, game, &mut rng);
        if sim.verbosity >= 2 {
            println!(
                "Run {}/{} - score {:.1}, {} passes ({} perfect), {} ticks{}",
                run_idx + 1,
                sim.num_runs,
                stats.score,
                stats.passes,
                stats.perfect_passes,
                stats.ticks,
                if stats.crashed { "" } else { ", timed out" }
            );
        }
        tracing::debug!(run = run_idx, score = stats.score, ticks = stats.ticks, "run finished");
        all_runs.push(stats);
    }

    SimReport::from_runs(sim.mode, all_runs)
}

/// Start, take off, then fly until a crash or the tick limit.
pub fn simulate_single_run<R: Rng>(sim: &SimConfig, game: &GameConfig, rng: &mut R) -> RunStats {
    let frame_ms = game.session.frame_ms;
    let pilot = Autopilot::new(sim.flap_margin);
    let mut session = Session::new(game.clone(), sim.mode, rng);

    session.primary_action(rng);
    session.tick(frame_ms, rng);
    session.primary_action(rng);

    let mut ticks = 0;
    let mut flaps = 0;
    let mut crashed = false;
    while ticks < sim.max_ticks_per_run {
        if pilot.should_flap(&session) {
            session.primary_action(rng);
            flaps += 1;
        }
        let events = session.tick(frame_ms, rng);
        ticks += 1;
        if events.crashed || session.state == GameState::GameOver {
            crashed = true;
            break;
        }
    }

    RunStats {
        score: session.score.score,
        passes: session.score.passes,
        perfect_passes: session.score.perfect_passes,
        flaps,
        ticks,
        crashed,
        final_difficulty: session.score.difficulty,
        medal: Medal::for_score(session.score.score),
    }
}
