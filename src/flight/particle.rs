//! Short-lived smoke/spark particles.

use crate::core::context::uniform;
use crate::render::{alpha, Painter, Rgba};
use rand::Rng;
use std::f64::consts::TAU;

/// Downward pull per tick; kept small so bursts read as smoke.
const GRAVITY: f64 = 0.05;
const DRAG: f64 = 0.98;
const FADE_PER_TICK: f64 = 5.0;
/// Particles smaller than this are removed.
pub const MIN_SIZE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub color: Rgba,
    /// 255 at spawn, minus 5 per tick.
    pub alpha: f64,
    pub rotation: f64,
    pub rotation_speed: f64,
    /// Fractional growth per tick.
    pub expand_rate: f64,
}

impl Particle {
    pub fn new<R: Rng>(rng: &mut R, x: f64, y: f64, vx: f64, vy: f64, size: f64, color: Rgba) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            size,
            color,
            alpha: 255.0,
            rotation: uniform(rng, 0.0, TAU),
            rotation_speed: uniform(rng, -0.02, 0.02),
            expand_rate: uniform(rng, 0.01, 0.03),
        }
    }

    pub fn update(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += GRAVITY;
        self.vx *= DRAG;
        self.vy *= DRAG;
        self.alpha -= FADE_PER_TICK;
        self.size += self.size * self.expand_rate;
        self.rotation += self.rotation_speed;
    }

    pub fn is_dead(&self) -> bool {
        self.alpha <= 0.0 || self.size < MIN_SIZE
    }

    pub fn draw(&self, painter: &mut dyn Painter) {
        if self.is_dead() {
            return;
        }
        painter.fill_circle(
            self.x,
            self.y,
            self.size / 2.0,
            self.color.with_alpha(alpha(self.alpha)),
        );
    }
}

/// Color choice for a burst.
#[derive(Debug, Clone, Copy)]
pub enum BurstColor {
    Solid(Rgba),
    /// Each particle picks uniformly from the palette.
    Palette(&'static [Rgba]),
}

/// Parameters for spawning several particles at once. Ranges are `(lo, hi)`.
#[derive(Debug, Clone, Copy)]
pub struct Burst {
    pub x: f64,
    pub y: f64,
    pub count: usize,
    pub vx: (f64, f64),
    pub vy: (f64, f64),
    pub size: (f64, f64),
    /// Vertical jitter applied to the spawn point.
    pub y_jitter: f64,
    pub color: BurstColor,
}

impl Burst {
    /// Omnidirectional burst used for death, revival, start and mode select.
    pub fn explosion(x: f64, y: f64, count: usize, size: (f64, f64), color: Rgba) -> Self {
        Self {
            x,
            y,
            count,
            vx: (-3.0, 3.0),
            vy: (-3.0, 3.0),
            size,
            y_jitter: 0.0,
            color: BurstColor::Solid(color),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit<R: Rng>(&mut self, rng: &mut R, burst: Burst) {
        self.particles.reserve(burst.count);
        for _ in 0..burst.count {
            let color = match burst.color {
                BurstColor::Solid(c) => c,
                BurstColor::Palette(colors) if !colors.is_empty() => {
                    colors[rng.gen_range(0..colors.len())]
                }
                BurstColor::Palette(_) => Rgba::WHITE,
            };
            let y = burst.y + uniform(rng, -burst.y_jitter, burst.y_jitter);
            let vx = uniform(rng, burst.vx.0, burst.vx.1);
            let vy = uniform(rng, burst.vy.0, burst.vy.1);
            let size = uniform(rng, burst.size.0, burst.size.1);
            self.particles
                .push(Particle::new(rng, burst.x, y, vx, vy, size, color));
        }
    }

    /// Advance every particle and drop the ones that have faded out.
    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.update();
        }
        self.particles.retain(|p| !p.is_dead());
    }

    pub fn draw(&self, painter: &mut dyn Painter) {
        for particle in &self.particles {
            particle.draw(painter);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
