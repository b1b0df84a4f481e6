//! Per-tick values shared by every entity update.

use super::config::GameConfig;
use super::modes::ModeParams;
use rand::Rng;

/// Everything an entity may read during its update besides its own state.
///
/// Built fresh by the session each tick, so entities never reach into
/// session-wide globals.
#[derive(Debug, Clone, Copy)]
pub struct TickContext<'a> {
    pub config: &'a GameConfig,
    /// Global speed multiplier from difficulty progression.
    pub game_speed: f64,
    pub mode: ModeParams,
    /// Frames since the process started (drives trails and animation).
    pub frame: u64,
}

impl TickContext<'_> {
    pub fn width(&self) -> f64 {
        self.config.world.width
    }

    pub fn height(&self) -> f64 {
        self.config.world.height
    }

    pub fn ground_contact_y(&self) -> f64 {
        self.config.world.ground_contact_y()
    }
}

/// Uniform sample in `[lo, hi)`, or `lo` when the range is empty.
pub fn uniform<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Inclusive integer sample, or `lo` when `hi < lo`.
pub fn uniform_ticks<R: Rng>(rng: &mut R, lo: u32, hi: u32) -> u32 {
    if hi > lo {
        rng.gen_range(lo..=hi)
    } else {
        lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_uniform_empty_range_returns_low() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(uniform(&mut rng, 5.0, 5.0), 5.0);
        assert_eq!(uniform(&mut rng, 5.0, 1.0), 5.0);
        assert_eq!(uniform_ticks(&mut rng, 9, 3), 9);
    }

    #[test]
    fn test_uniform_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..200 {
            let v = uniform(&mut rng, -3.0, 3.0);
            assert!((-3.0..3.0).contains(&v));
            let t = uniform_ticks(&mut rng, 300, 600);
            assert!((300..=600).contains(&t));
        }
    }

    #[test]
    fn test_ground_contact_is_mid_ground_band() {
        let config = GameConfig::default();
        let ctx = TickContext {
            config: &config,
            game_speed: 1.0,
            mode: crate::core::modes::GameMode::Normal.params(),
            frame: 0,
        };
        assert_eq!(ctx.ground_contact_y(), 550.0);
    }
}
