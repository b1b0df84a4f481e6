//! The player's paper glider.

use super::particle::{Burst, BurstColor, ParticleSystem};
use super::weather::{WeatherEvent, WeatherState};
use crate::core::config::{GameConfig, VehicleConfig};
use crate::core::context::{uniform, TickContext};
use crate::render::{alpha, Painter, Rgba};
use rand::Rng;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_6};

/// Sprite animation sequence (frame indices).
const ANIMATION_FRAMES: [usize; 4] = [0, 1, 2, 1];
const TRAIL_START_OPACITY: f64 = 180.0;
const TRAIL_FADE_PER_TICK: f64 = 5.0;
const TRAIL_DRIFT: f64 = 2.0;
const WING_ENERGY_FLOOR: f64 = 1e-3;

pub const MAIN_BLUE: Rgba = Rgba::rgb(65, 105, 225);
const DARK_BLUE: Rgba = Rgba::rgb(30, 60, 180);
const LIGHT_BLUE: Rgba = Rgba::rgb(100, 150, 255);

/// One puff of the smoke trail.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    pub size: f64,
    pub expand_rate: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    /// Fixed horizontal column.
    pub x: f64,
    pub y: f64,
    /// Vertical velocity, positive is downward.
    pub velocity: f64,
    pub rotation: f64,
    pub alive: bool,
    pub width: f64,
    pub height: f64,
    /// Fractional animation counter; see [`Vehicle::animation_frame`].
    pub anim_phase: f64,
    /// Extra upward push from the last flap, decaying each tick.
    pub wing_energy: f64,
    /// Builds with each flap, feeds the lift term.
    pub flap_momentum: f64,
    /// Ticks before another flap is accepted.
    pub flap_cooldown: u32,
    pub weather: WeatherState,
    pub trail: Vec<TrailPoint>,
}

impl Vehicle {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.vehicle.x,
            y: config.world.height / 2.0,
            velocity: 0.0,
            rotation: 0.0,
            alive: true,
            width: config.vehicle.width,
            height: config.vehicle.height,
            anim_phase: 0.0,
            wing_energy: 0.0,
            flap_momentum: 0.0,
            flap_cooldown: 0,
            weather: WeatherState::new(&config.weather),
            trail: Vec::new(),
        }
    }

    /// Hold the vehicle still on the runway, resting on the ground band.
    pub fn park_on_runway(&mut self, config: &GameConfig) {
        let ground = config.world.ground_contact_y();
        self.y = ground - self.height / 2.0;
        self.velocity = 0.0;
        self.rotation = 0.0;
    }

    /// Vertical extent used for obstacle hits: a band of
    /// `hitbox_fraction * height` on each side of the center.
    pub fn hitbox(&self, hitbox_fraction: f64) -> (f64, f64) {
        let half = self.height * hitbox_fraction;
        (self.y - half, self.y + half)
    }

    pub fn animation_frame(&self) -> usize {
        ANIMATION_FRAMES[(self.anim_phase.max(0.0) as usize) % ANIMATION_FRAMES.len()]
    }

    fn emit_exhaust<R: Rng>(&self, rng: &mut R, particles: &mut ParticleSystem) {
        particles.emit(
            rng,
            Burst {
                x: self.x - 5.0,
                y: self.y,
                count: 5,
                vx: (-2.0, -1.0),
                vy: (-1.0, 1.0),
                size: (4.0, 8.0),
                y_jitter: 5.0,
                color: BurstColor::Solid(Rgba::rgba(255, 255, 255, 150)),
            },
        );
    }

    fn apply_flap(&mut self, config: &VehicleConfig, impulse: f64, momentum_gain: f64) {
        self.velocity = impulse;
        self.wing_energy = config.wing_energy_max;
        self.flap_momentum = (self.flap_momentum + momentum_gain).min(config.flap_momentum_max);
        self.flap_cooldown = config.flap_cooldown_ticks;
    }

    /// Flap if alive and off cooldown. Returns whether the flap happened.
    pub fn flap<R: Rng>(&mut self, rng: &mut R, config: &VehicleConfig, particles: &mut ParticleSystem) -> bool {
        if !self.alive || self.flap_cooldown > 0 {
            return false;
        }
        self.apply_flap(config, config.flap_strength, 1.0);
        self.emit_exhaust(rng, particles);
        true
    }

    /// Leave the runway: a double flap that ignores the cooldown.
    pub fn takeoff<R: Rng>(&mut self, rng: &mut R, config: &VehicleConfig, particles: &mut ParticleSystem) {
        if !self.alive {
            return;
        }
        self.apply_flap(config, config.flap_strength * config.takeoff_boost, 2.0);
        self.emit_exhaust(rng, particles);
        self.emit_exhaust(rng, particles);
        particles.emit(
            rng,
            Burst {
                x: self.x - 10.0,
                y: self.y + 10.0,
                count: 15,
                vx: (-3.0, -1.0),
                vy: (-1.0, 1.0),
                size: (5.0, 15.0),
                y_jitter: 0.0,
                color: BurstColor::Solid(Rgba::rgba(100, 100, 100, 200)),
            },
        );
    }

    /// Integrate one airborne tick. Weather only runs when the mode enables it.
    pub fn update<R: Rng>(&mut self, ctx: &TickContext<'_>, rng: &mut R) -> Option<WeatherEvent> {
        let cfg = &ctx.config.vehicle;
        let mut weather_event = None;

        if self.alive {
            if ctx.mode.weather {
                weather_event = self.weather.update(rng, &ctx.config.weather);
            }

            let gravity = cfg.gravity * ctx.mode.gravity_multiplier;
            let lift = self.flap_momentum * cfg.lift_per_momentum + cfg.base_lift;
            self.velocity += gravity - self.wing_energy - lift + self.weather.vertical_push();
            self.velocity = self.velocity.min(cfg.terminal_velocity);
            self.y += self.velocity;

            self.wing_energy *= cfg.wing_energy_decay;
            if self.wing_energy < WING_ENERGY_FLOOR {
                self.wing_energy = 0.0;
            }
            self.flap_momentum *= cfg.flap_momentum_decay;
            self.flap_cooldown = self.flap_cooldown.saturating_sub(1);

            let mut target = map_range(self.velocity, -10.0, 15.0, -FRAC_PI_6, FRAC_PI_2)
                .clamp(-FRAC_PI_6, FRAC_PI_2);
            if self.wing_energy > 0.0 && cfg.wing_energy_max > 0.0 {
                target -= cfg.wing_tilt * (self.wing_energy / cfg.wing_energy_max);
            }
            self.rotation += (target - self.rotation) * cfg.rotation_smoothing;

            self.anim_phase += crate::core::constants::ANIMATION_SPEED;

            if ctx.frame % crate::core::constants::TRAIL_INTERVAL_TICKS == 0 {
                self.trail.push(TrailPoint {
                    x: self.x - 10.0,
                    y: self.y,
                    opacity: TRAIL_START_OPACITY,
                    size: uniform(rng, 3.0, 6.0),
                    expand_rate: uniform(rng, 0.01, 0.03),
                });
            }

            let ceiling = self.height / 2.0;
            if self.y < ceiling {
                self.y = ceiling;
                self.velocity = 0.0;
            }
        }

        self.update_trail(ctx.game_speed);
        weather_event
    }

    fn update_trail(&mut self, game_speed: f64) {
        for point in &mut self.trail {
            point.x -= TRAIL_DRIFT * game_speed;
            point.opacity -= TRAIL_FADE_PER_TICK;
            point.size += point.size * point.expand_rate;
        }
        self.trail.retain(|p| p.opacity > 0.0);
    }

    /// Kill the vehicle. Returns `false` if it was already dead.
    pub fn die<R: Rng>(&mut self, rng: &mut R, particles: &mut ParticleSystem) -> bool {
        if !self.alive {
            return false;
        }
        self.alive = false;
        particles.emit(
            rng,
            Burst::explosion(self.x, self.y, 20, (5.0, 12.0), Rgba::rgba(255, 255, 255, 200)),
        );
        true
    }

    /// Bring the vehicle back at `y` with no velocity.
    pub fn revive(&mut self, y: f64) {
        self.y = y;
        self.velocity = 0.0;
        self.rotation = 0.0;
        self.wing_energy = 0.0;
        self.flap_cooldown = 0;
        self.alive = true;
    }

    pub fn draw(&self, painter: &mut dyn Painter, body: Rgba) {
        for point in &self.trail {
            painter.fill_circle(
                point.x,
                point.y,
                point.size / 2.0,
                Rgba::WHITE.with_alpha(alpha(point.opacity)),
            );
        }

        if !self.alive {
            // crumpled paper
            painter.fill_circle(self.x, self.y, self.height / 3.0, body);
            painter.fill_circle(self.x + 4.0, self.y - 3.0, self.height / 5.0, DARK_BLUE);
            painter.fill_circle(self.x - 4.0, self.y + 2.0, self.height / 6.0, LIGHT_BLUE);
            return;
        }

        let (sin, cos) = self.rotation.sin_cos();
        let flutter = self.animation_frame() as f64 * 0.5;
        let local = |lx: f64, ly: f64| (self.x + lx * cos - ly * sin, self.y + lx * sin + ly * cos);
        let nose = local(self.width * 0.3, -2.0 + flutter);
        let tail_top = local(-self.width * 0.45, -self.height * 0.2);
        let tail_bottom = local(-self.width * 0.45, self.height * 0.15);
        let fold = local(-self.width * 0.1, -self.height * 0.25 + flutter * 0.4);

        painter.line(tail_top.0, tail_top.1, nose.0, nose.1, body);
        painter.line(tail_bottom.0, tail_bottom.1, nose.0, nose.1, body);
        painter.line(tail_top.0, tail_top.1, tail_bottom.0, tail_bottom.1, DARK_BLUE);
        painter.line(tail_top.0, tail_top.1, fold.0, fold.1, LIGHT_BLUE);
        painter.line(fold.0, fold.1, nose.0, nose.1, LIGHT_BLUE);
    }
}

fn map_range(value: f64, in_lo: f64, in_hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    out_lo + (value - in_lo) * (out_hi - out_lo) / (in_hi - in_lo)
}
