//! Weather effects for stormy mode.
//!
//! At most one effect exists at a time. It starts with a warning lead during
//! which nothing physical happens, then perturbs the vehicle (air pocket) or
//! the obstacle speed (head/tailwind) until its duration runs out. A random
//! cooldown then has to pass before the next effect may roll.

use crate::core::config::WeatherConfig;
use crate::core::context::{uniform, uniform_ticks};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherKind {
    /// Pushes the vehicle downward each tick.
    AirPocket,
    /// Slows obstacles by `intensity` (fraction).
    Headwind,
    /// Speeds obstacles up by `intensity` (fraction).
    Tailwind,
}

impl WeatherKind {
    pub const ALL: [WeatherKind; 3] = [
        WeatherKind::AirPocket,
        WeatherKind::Headwind,
        WeatherKind::Tailwind,
    ];

    /// Active duration in ticks, inclusive range.
    pub fn duration_range(self) -> (u32, u32) {
        match self {
            Self::AirPocket => (60, 120),
            Self::Headwind => (180, 300),
            Self::Tailwind => (180, 300),
        }
    }

    /// Intensity range `[lo, hi)`. Air pocket is velocity per tick; winds are
    /// a fraction of obstacle speed.
    pub fn intensity_range(self) -> (f64, f64) {
        match self {
            Self::AirPocket => (0.08, 0.18),
            Self::Headwind => (0.2, 0.4),
            Self::Tailwind => (0.2, 0.5),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::AirPocket => "Air pocket",
            Self::Headwind => "Headwind",
            Self::Tailwind => "Tailwind",
        }
    }

    pub fn warning_text(self) -> &'static str {
        match self {
            Self::AirPocket => "AIR POCKET AHEAD!",
            Self::Headwind => "HEADWIND INCOMING!",
            Self::Tailwind => "TAILWIND INCOMING!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherEffect {
    pub kind: WeatherKind,
    pub intensity: f64,
    /// Active ticks left once the warning is over.
    pub remaining_ticks: u32,
    /// Warning ticks left; the effect does nothing while this is non-zero.
    pub warning_ticks: u32,
}

impl WeatherEffect {
    pub fn is_warning(&self) -> bool {
        self.warning_ticks > 0
    }
}

/// Transitions reported by [`WeatherState::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeatherEvent {
    Warning(WeatherKind),
    Began(WeatherKind),
    Ended(WeatherKind),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherState {
    pub effect: Option<WeatherEffect>,
    /// Ticks before another effect may start.
    pub cooldown_ticks: u32,
}

impl WeatherState {
    pub fn new(config: &WeatherConfig) -> Self {
        Self {
            effect: None,
            cooldown_ticks: config.initial_cooldown_ticks,
        }
    }

    /// Effect currently perturbing the game, if its warning is over.
    pub fn active(&self) -> Option<&WeatherEffect> {
        self.effect.as_ref().filter(|e| !e.is_warning())
    }

    /// Effect still in its warning lead, if any.
    pub fn warning(&self) -> Option<&WeatherEffect> {
        self.effect.as_ref().filter(|e| e.is_warning())
    }

    /// Roll a new effect of the given kind.
    pub fn start<R: Rng>(&mut self, rng: &mut R, kind: WeatherKind, config: &WeatherConfig) -> WeatherEvent {
        let (dur_lo, dur_hi) = kind.duration_range();
        let (int_lo, int_hi) = kind.intensity_range();
        let effect = WeatherEffect {
            kind,
            intensity: uniform(rng, int_lo, int_hi),
            remaining_ticks: uniform_ticks(rng, dur_lo, dur_hi),
            warning_ticks: config.warning_ticks,
        };
        tracing::debug!(
            "weather: {} (intensity {:.2}, {} ticks, warning {})",
            kind.name(),
            effect.intensity,
            effect.remaining_ticks,
            effect.warning_ticks
        );
        self.effect = Some(effect);
        if effect.is_warning() {
            WeatherEvent::Warning(kind)
        } else {
            WeatherEvent::Began(kind)
        }
    }

    pub fn update<R: Rng>(&mut self, rng: &mut R, config: &WeatherConfig) -> Option<WeatherEvent> {
        let Some(effect) = self.effect.as_mut() else {
            if self.cooldown_ticks > 0 {
                self.cooldown_ticks -= 1;
                return None;
            }
            if rng.gen::<f64>() >= config.start_chance {
                return None;
            }
            let kind = WeatherKind::ALL[rng.gen_range(0..WeatherKind::ALL.len())];
            return Some(self.start(rng, kind, config));
        };

        if effect.warning_ticks > 0 {
            effect.warning_ticks -= 1;
            return (effect.warning_ticks == 0).then_some(WeatherEvent::Began(effect.kind));
        }

        effect.remaining_ticks = effect.remaining_ticks.saturating_sub(1);
        if effect.remaining_ticks > 0 {
            return None;
        }

        let kind = effect.kind;
        self.effect = None;
        self.cooldown_ticks =
            uniform_ticks(rng, config.cooldown_min_ticks, config.cooldown_max_ticks);
        tracing::debug!("weather: {} ended, cooldown {}", kind.name(), self.cooldown_ticks);
        Some(WeatherEvent::Ended(kind))
    }

    /// Multiplier applied to obstacle speed.
    pub fn pipe_speed_factor(&self) -> f64 {
        match self.active() {
            Some(e) if e.kind == WeatherKind::Headwind => 1.0 - e.intensity,
            Some(e) if e.kind == WeatherKind::Tailwind => 1.0 + e.intensity,
            _ => 1.0,
        }
    }

    /// Extra downward velocity per tick.
    pub fn vertical_push(&self) -> f64 {
        match self.active() {
            Some(e) if e.kind == WeatherKind::AirPocket => e.intensity,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn config() -> WeatherConfig {
        WeatherConfig::default()
    }

    #[test]
    fn test_no_effect_during_cooldown() {
        let cfg = WeatherConfig {
            start_chance: 1.0,
            ..config()
        };
        let mut state = WeatherState::new(&cfg);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..cfg.initial_cooldown_ticks {
            assert_eq!(state.update(&mut rng, &cfg), None);
        }
        assert!(state.effect.is_none());
        // cooldown expired, guaranteed draw
        assert!(matches!(
            state.update(&mut rng, &cfg),
            Some(WeatherEvent::Warning(_))
        ));
    }

    #[test]
    fn test_warning_has_no_physical_effect() {
        let cfg = config();
        let mut state = WeatherState::new(&cfg);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        state.start(&mut rng, WeatherKind::Headwind, &cfg);
        assert!(state.warning().is_some());
        assert_eq!(state.pipe_speed_factor(), 1.0);

        state.start(&mut rng, WeatherKind::AirPocket, &cfg);
        assert_eq!(state.vertical_push(), 0.0);
    }

    #[test]
    fn test_headwind_slows_within_intensity_bounds() {
        let cfg = config();
        let mut state = WeatherState::new(&cfg);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        state.start(&mut rng, WeatherKind::Headwind, &cfg);

        let mut began = false;
        for _ in 0..cfg.warning_ticks {
            if state.update(&mut rng, &cfg) == Some(WeatherEvent::Began(WeatherKind::Headwind)) {
                began = true;
            }
        }
        assert!(began);
        let factor = state.pipe_speed_factor();
        assert!(factor >= 0.6 && factor <= 0.8, "factor {factor}");
    }

    #[test]
    fn test_expiry_restores_speed_and_sets_cooldown() {
        let cfg = WeatherConfig {
            warning_ticks: 0,
            ..config()
        };
        let mut state = WeatherState::new(&cfg);
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        assert_eq!(
            state.start(&mut rng, WeatherKind::Tailwind, &cfg),
            WeatherEvent::Began(WeatherKind::Tailwind)
        );
        assert!(state.pipe_speed_factor() > 1.0);

        let mut ended = false;
        for _ in 0..400 {
            if state.update(&mut rng, &cfg) == Some(WeatherEvent::Ended(WeatherKind::Tailwind)) {
                ended = true;
                break;
            }
        }
        assert!(ended);
        assert_eq!(state.pipe_speed_factor(), 1.0);
        assert!(state.effect.is_none());
        assert!(
            (cfg.cooldown_min_ticks..=cfg.cooldown_max_ticks).contains(&state.cooldown_ticks)
        );
    }

    #[test]
    fn test_air_pocket_pushes_down_once_active() {
        let cfg = WeatherConfig {
            warning_ticks: 0,
            ..config()
        };
        let mut state = WeatherState::new(&cfg);
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        state.start(&mut rng, WeatherKind::AirPocket, &cfg);
        let push = state.vertical_push();
        assert!((0.08..0.18).contains(&push));
        assert_eq!(state.pipe_speed_factor(), 1.0);
    }
}
