//! Night-sky star field with a fixed layout.

use crate::core::context::uniform;
use crate::render::{alpha, Painter, Rgba};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// Offset into the twinkle cycle.
    pub twinkle: f64,
}

/// Stars are laid out from their own seeded generator, so the sky looks the
/// same every night and gameplay randomness is never consumed for it.
#[derive(Debug, Clone, PartialEq)]
pub struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    /// Scatter `count` stars over the upper part of the sky (above `horizon`).
    pub fn generate(seed: u64, count: usize, width: f64, horizon: f64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let stars = (0..count)
            .map(|_| Star {
                x: uniform(&mut rng, 0.0, width),
                y: uniform(&mut rng, 0.0, horizon * 0.8),
                size: uniform(&mut rng, 1.0, 3.0),
                twinkle: uniform(&mut rng, 0.0, std::f64::consts::TAU),
            })
            .collect();
        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Draw at `opacity` (0..=1). Nothing is drawn when fully faded out.
    pub fn draw(&self, painter: &mut dyn Painter, opacity: f64, frame: u64) {
        if opacity <= 0.0 {
            return;
        }
        let time = frame as f64 * 0.05;
        for star in &self.stars {
            let twinkle = 0.7 + 0.3 * (time + star.twinkle).sin();
            let a = alpha(255.0 * opacity * twinkle);
            painter.fill_circle(star.x, star.y, star.size / 2.0, Rgba::WHITE.with_alpha(a));
        }
    }
}
