//! Headless balance simulator.
//!
//! Flies thousands of autopilot runs through the real [`crate::core::Session`]
//! to analyze:
//! - Score and survival time per mode
//! - Perfect-pass rates
//! - Medal distribution
//!
//! Every run uses the same tick path as the interactive game, so results
//! track gameplay changes without a separate model.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::Autopilot;
pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, simulate_single_run, RunStats};
