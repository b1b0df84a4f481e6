//! Core game state and logic.

pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod leaderboard;
pub mod modes;
pub mod scoring;
pub mod session;
pub mod social;

pub use config::GameConfig;
pub use error::{ConfigError, ConfigResult};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use modes::{GameMode, ModeParams};
pub use scoring::{Medal, PassOutcome, ScoreState};
pub use session::{Banner, FlightPhase, GameState, Session, TickEvents};
