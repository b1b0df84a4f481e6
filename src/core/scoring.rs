//! Score, streak/combo and difficulty progression for one run.

use super::config::{PipeConfig, ScoringConfig};
use crate::render::Rgba;
use serde::Serialize;

/// Banner texts for consecutive perfect passes.
pub const STREAK_MESSAGES: [&str; 7] = [
    "Nice!",
    "Great!",
    "Perfect!",
    "Amazing!",
    "Incredible!",
    "Unstoppable!",
    "GODLIKE!",
];

/// Result of scoring one passed obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassOutcome {
    pub perfect: bool,
    pub points: f64,
    pub streak: u32,
    pub combo: f64,
    /// Difficulty changed as a result of this pass.
    pub difficulty_changed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreState {
    /// True score; fractional when combos apply.
    pub score: f64,
    /// Display value easing toward `score`.
    pub animated: f64,
    pub difficulty: u32,
    /// Global speed multiplier applied to new obstacles.
    pub game_speed: f64,
    pub streak: u32,
    pub combo: f64,
    pub passes: u32,
    pub perfect_passes: u32,
    /// Highest score threshold index already applied.
    threshold_level: u32,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self {
            score: 0.0,
            animated: 0.0,
            difficulty: 1,
            game_speed: 1.0,
            streak: 0,
            combo: 1.0,
            passes: 0,
            perfect_passes: 0,
            threshold_level: 0,
        }
    }
}

impl ScoreState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_perfect(vehicle_y: f64, gap_mid: f64, config: &ScoringConfig) -> bool {
        (vehicle_y - gap_mid).abs() < config.perfect_threshold
    }

    /// Award a pass. Perfect passes grow the streak and combo; anything else
    /// resets both.
    pub fn register_pass(&mut self, perfect: bool, points_multiplier: f64, config: &ScoringConfig) -> PassOutcome {
        if perfect {
            self.streak += 1;
            self.perfect_passes += 1;
            self.combo = (1.0 + self.streak as f64 * config.combo_per_streak).min(config.combo_max);
        } else {
            self.streak = 0;
            self.combo = 1.0;
        }
        self.passes += 1;

        let points = points_multiplier * self.combo;
        self.score += points;
        let difficulty_changed = self.update_difficulty(config);

        PassOutcome {
            perfect,
            points,
            streak: self.streak,
            combo: self.combo,
            difficulty_changed,
        }
    }

    /// Recompute difficulty and speed once per new score threshold.
    fn update_difficulty(&mut self, config: &ScoringConfig) -> bool {
        let level = (self.score / config.difficulty_threshold).floor() as u32;
        if level <= self.threshold_level {
            return false;
        }
        self.threshold_level = level;

        let target = 1 + (self.score / config.difficulty_score_divisor).floor() as u32;
        let before = self.difficulty;
        self.difficulty = self.difficulty.max(target.min(config.difficulty_max));
        self.game_speed = (1.0 + self.score / config.speed_score_divisor).min(config.speed_max);
        tracing::debug!(
            "score {:.1}: difficulty {} speed {:.3}",
            self.score,
            self.difficulty,
            self.game_speed
        );
        self.difficulty != before
    }

    /// Ease the displayed score toward the true score.
    pub fn animate(&mut self, config: &ScoringConfig) {
        self.animated += (self.score - self.animated) * config.animation_speed;
    }

    /// Ticks between obstacle spawns at the current score.
    pub fn spawn_interval(&self, config: &PipeConfig) -> u32 {
        let tens = (self.score / 10.0).floor().max(0.0) as u32;
        let step = tens.saturating_mul(config.interval_step);
        config
            .base_interval
            .saturating_sub(step)
            .max(config.min_interval)
    }

    /// Whole points, as shown and stored on the leaderboard.
    pub fn whole_score(&self) -> u32 {
        self.score.max(0.0).floor() as u32
    }
}

/// Banner for a perfect-pass streak, if there is one.
pub fn streak_message(streak: u32) -> Option<&'static str> {
    if streak == 0 {
        return None;
    }
    let index = (streak as usize - 1).min(STREAK_MESSAGES.len() - 1);
    Some(STREAK_MESSAGES[index])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Medal {
    pub const ALL: [Medal; 4] = [Medal::Bronze, Medal::Silver, Medal::Gold, Medal::Platinum];

    /// Best medal earned by `score`.
    pub fn for_score(score: f64) -> Option<Medal> {
        match score {
            s if s >= 50.0 => Some(Medal::Platinum),
            s if s >= 30.0 => Some(Medal::Gold),
            s if s >= 20.0 => Some(Medal::Silver),
            s if s >= 10.0 => Some(Medal::Bronze),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Medal::Bronze => "Bronze",
            Medal::Silver => "Silver",
            Medal::Gold => "Gold",
            Medal::Platinum => "Platinum",
        }
    }

    pub fn color(self) -> Rgba {
        match self {
            Medal::Bronze => Rgba::rgb(205, 127, 50),
            Medal::Silver => Rgba::rgb(192, 192, 192),
            Medal::Gold => Rgba::GOLD,
            Medal::Platinum => Rgba::rgb(229, 228, 226),
        }
    }
}
