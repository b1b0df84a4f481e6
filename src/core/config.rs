//! Runtime tuning loaded from `~/.flyvibe/config.toml`.
//!
//! [`GameConfig`] mirrors every tunable in [`crate::core::constants`]. Each
//! section is `#[serde(default)]`, so a file only needs the keys it wants to
//! override:
//!
//! ```toml
//! [vehicle]
//! flap_strength = -3.5
//!
//! [environment]
//! day_length_ticks = 3600
//! ```
//!
//! `constants.rs` remains the authoritative default used by `Default`.

use super::constants::*;
use super::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    /// Height of the ground band at the bottom of the play area.
    pub ground_height: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            ground_height: GROUND_HEIGHT,
        }
    }
}

impl WorldConfig {
    /// Vertical position at which the vehicle touches the ground band.
    pub fn ground_contact_y(&self) -> f64 {
        self.height - self.ground_height / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleConfig {
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub hitbox_fraction: f64,
    pub gravity: f64,
    pub flap_strength: f64,
    pub terminal_velocity: f64,
    pub flap_cooldown_ticks: u32,
    pub takeoff_boost: f64,
    pub wing_energy_max: f64,
    pub wing_energy_decay: f64,
    pub flap_momentum_max: f64,
    pub flap_momentum_decay: f64,
    pub lift_per_momentum: f64,
    pub base_lift: f64,
    pub rotation_smoothing: f64,
    pub wing_tilt: f64,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            x: VEHICLE_X,
            width: VEHICLE_WIDTH,
            height: VEHICLE_HEIGHT,
            hitbox_fraction: VEHICLE_HITBOX_FRACTION,
            gravity: BASE_GRAVITY,
            flap_strength: FLAP_STRENGTH,
            terminal_velocity: TERMINAL_VELOCITY,
            flap_cooldown_ticks: FLAP_COOLDOWN_TICKS,
            takeoff_boost: TAKEOFF_BOOST,
            wing_energy_max: WING_ENERGY_MAX,
            wing_energy_decay: WING_ENERGY_DECAY,
            flap_momentum_max: FLAP_MOMENTUM_MAX,
            flap_momentum_decay: FLAP_MOMENTUM_DECAY,
            lift_per_momentum: LIFT_PER_MOMENTUM,
            base_lift: BASE_LIFT,
            rotation_smoothing: ROTATION_SMOOTHING,
            wing_tilt: WING_TILT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipeConfig {
    pub width: f64,
    pub base_speed: f64,
    pub gap_min_fraction: f64,
    pub gap_max_fraction: f64,
    pub gap_shrink_per_level: f64,
    pub top_min_fraction: f64,
    pub top_max_fraction: f64,
    pub initial_interval: u32,
    pub base_interval: u32,
    pub min_interval: u32,
    pub interval_step: u32,
}

impl Default for PipeConfig {
    fn default() -> Self {
        Self {
            width: PIPE_WIDTH,
            base_speed: PIPE_BASE_SPEED,
            gap_min_fraction: PIPE_GAP_MIN_FRACTION,
            gap_max_fraction: PIPE_GAP_MAX_FRACTION,
            gap_shrink_per_level: PIPE_GAP_SHRINK_PER_LEVEL,
            top_min_fraction: PIPE_TOP_MIN_FRACTION,
            top_max_fraction: PIPE_TOP_MAX_FRACTION,
            initial_interval: PIPE_INITIAL_INTERVAL,
            base_interval: PIPE_BASE_INTERVAL,
            min_interval: PIPE_MIN_INTERVAL,
            interval_step: PIPE_INTERVAL_STEP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub perfect_threshold: f64,
    pub combo_per_streak: f64,
    pub combo_max: f64,
    pub animation_speed: f64,
    pub difficulty_threshold: f64,
    pub difficulty_score_divisor: f64,
    pub difficulty_max: u32,
    pub speed_score_divisor: f64,
    pub speed_max: f64,
    /// Banner alpha lost per tick while playing.
    pub banner_fade_per_tick: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            perfect_threshold: PERFECT_PASS_THRESHOLD,
            combo_per_streak: COMBO_PER_STREAK,
            combo_max: COMBO_MAX,
            animation_speed: SCORE_ANIMATION_SPEED,
            difficulty_threshold: DIFFICULTY_THRESHOLD,
            difficulty_score_divisor: DIFFICULTY_SCORE_DIVISOR,
            difficulty_max: DIFFICULTY_MAX,
            speed_score_divisor: SPEED_SCORE_DIVISOR,
            speed_max: SPEED_MAX,
            banner_fade_per_tick: BANNER_FADE_PER_TICK,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub warning_ticks: u32,
    pub initial_cooldown_ticks: u32,
    pub cooldown_min_ticks: u32,
    pub cooldown_max_ticks: u32,
    /// Per-tick chance that an effect starts once the cooldown has expired.
    pub start_chance: f64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            warning_ticks: WEATHER_WARNING_TICKS,
            initial_cooldown_ticks: WEATHER_INITIAL_COOLDOWN_TICKS,
            cooldown_min_ticks: WEATHER_COOLDOWN_MIN_TICKS,
            cooldown_max_ticks: WEATHER_COOLDOWN_MAX_TICKS,
            start_chance: WEATHER_START_CHANCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub day_length_ticks: u32,
    pub cloud_spawn_chance: f64,
    pub cloud_min_count: usize,
    pub parallax_speed: f64,
    pub star_count: usize,
    pub star_seed: u64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            day_length_ticks: DAY_LENGTH_TICKS,
            cloud_spawn_chance: CLOUD_SPAWN_CHANCE,
            cloud_min_count: CLOUD_MIN_COUNT,
            parallax_speed: PARALLAX_SPEED,
            star_count: STAR_COUNT,
            star_seed: STAR_SEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub ad_duration_ms: u64,
    pub death_sound_delay_ticks: u32,
    pub frame_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ad_duration_ms: AD_DURATION_MS,
            death_sound_delay_ticks: DEATH_SOUND_DELAY_TICKS,
            frame_ms: FRAME_MS,
        }
    }
}

/// All runtime-tunable values, grouped by subsystem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world: WorldConfig,
    pub vehicle: VehicleConfig,
    pub pipes: PipeConfig,
    pub scoring: ScoringConfig,
    pub weather: WeatherConfig,
    pub environment: EnvironmentConfig,
    pub session: SessionConfig,
}

fn require(ok: bool, field: &'static str, value: f64, expected: &'static str) -> ConfigResult<()> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            value,
            expected,
        })
    }
}

impl GameConfig {
    /// Parse a TOML document. `path` is only used for error messages.
    pub fn from_toml_str(contents: &str, path: &Path) -> ConfigResult<Self> {
        let config: GameConfig = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }

    /// Load `path`, falling back to compiled defaults.
    ///
    /// A missing file is normal and only logged at info level. Unreadable or
    /// invalid files are logged as warnings; the game still starts.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!("no config at {}; using compiled defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                tracing::info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{e}; using compiled defaults");
                Self::default()
            }
        }
    }

    /// Render the config as TOML (used by `--print-config`).
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> ConfigResult<()> {
        let w = &self.world;
        require(w.width > 0.0, "world.width", w.width, "> 0")?;
        require(w.height > 0.0, "world.height", w.height, "> 0")?;
        require(
            w.ground_height >= 0.0 && w.ground_height < w.height,
            "world.ground_height",
            w.ground_height,
            "in [0, world.height)",
        )?;

        let v = &self.vehicle;
        require(
            v.hitbox_fraction > 0.0 && v.hitbox_fraction <= 0.5,
            "vehicle.hitbox_fraction",
            v.hitbox_fraction,
            "in (0, 0.5]",
        )?;
        require(
            v.flap_strength < 0.0,
            "vehicle.flap_strength",
            v.flap_strength,
            "< 0 (upward)",
        )?;
        require(
            v.terminal_velocity > 0.0,
            "vehicle.terminal_velocity",
            v.terminal_velocity,
            "> 0",
        )?;

        let p = &self.pipes;
        require(p.width > 0.0, "pipes.width", p.width, "> 0")?;
        require(
            p.gap_min_fraction > 0.0 && p.gap_min_fraction <= p.gap_max_fraction,
            "pipes.gap_min_fraction",
            p.gap_min_fraction,
            "in (0, pipes.gap_max_fraction]",
        )?;
        require(
            p.top_min_fraction >= 0.0 && p.top_min_fraction <= p.top_max_fraction,
            "pipes.top_min_fraction",
            p.top_min_fraction,
            "in [0, pipes.top_max_fraction]",
        )?;
        require(
            p.min_interval > 0 && p.min_interval <= p.base_interval,
            "pipes.min_interval",
            p.min_interval as f64,
            "in (0, pipes.base_interval]",
        )?;
        require(
            p.interval_step <= p.base_interval,
            "pipes.interval_step",
            p.interval_step as f64,
            "<= pipes.base_interval",
        )?;

        let s = &self.scoring;
        require(s.combo_max >= 1.0, "scoring.combo_max", s.combo_max, ">= 1")?;
        require(
            s.difficulty_max >= 1,
            "scoring.difficulty_max",
            s.difficulty_max as f64,
            ">= 1",
        )?;
        require(s.speed_max >= 1.0, "scoring.speed_max", s.speed_max, ">= 1")?;
        require(
            s.difficulty_threshold > 0.0,
            "scoring.difficulty_threshold",
            s.difficulty_threshold,
            "> 0",
        )?;

        let wx = &self.weather;
        require(
            wx.cooldown_min_ticks <= wx.cooldown_max_ticks,
            "weather.cooldown_min_ticks",
            wx.cooldown_min_ticks as f64,
            "<= weather.cooldown_max_ticks",
        )?;
        require(
            (0.0..=1.0).contains(&wx.start_chance),
            "weather.start_chance",
            wx.start_chance,
            "in [0, 1]",
        )?;

        let e = &self.environment;
        require(
            e.day_length_ticks > 0,
            "environment.day_length_ticks",
            e.day_length_ticks as f64,
            "> 0",
        )?;

        require(
            self.session.frame_ms > 0,
            "session.frame_ms",
            self.session.frame_ms as f64,
            "> 0",
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_overrides_only_named_keys() {
        let toml = r#"
            [vehicle]
            flap_strength = -4.5

            [environment]
            day_length_ticks = 600
        "#;
        let config = GameConfig::from_toml_str(toml, Path::new("test.toml")).unwrap();
        assert_eq!(config.vehicle.flap_strength, -4.5);
        assert_eq!(config.environment.day_length_ticks, 600);
        // untouched keys keep their compiled defaults
        assert_eq!(config.vehicle.gravity, BASE_GRAVITY);
        assert_eq!(config.world, WorldConfig::default());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = GameConfig::from_toml_str("[world\nwidth = ", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_zero_day_length_rejected() {
        let mut config = GameConfig::default();
        config.environment.day_length_ticks = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("environment.day_length_ticks"));
    }

    #[test]
    fn test_inverted_gap_band_rejected() {
        let mut config = GameConfig::default();
        config.pipes.gap_min_fraction = 0.5;
        config.pipes.gap_max_fraction = 0.2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_interval_step_rejected() {
        let err = GameConfig::from_toml_str(
            "[pipes]\ninterval_step = 1000000000\n",
            Path::new("step.toml"),
        )
        .unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "pipes.interval_step"),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = GameConfig::load_or_default(Path::new("/definitely/not/here/flyvibe.toml"));
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_to_toml_round_trips_through_parser() {
        let text = GameConfig::default().to_toml();
        let parsed = GameConfig::from_toml_str(&text, Path::new("dump.toml")).unwrap();
        assert_eq!(parsed, GameConfig::default());
    }
}
