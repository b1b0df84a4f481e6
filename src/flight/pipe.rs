//! Obstacle pairs and their spawn geometry.

use super::vehicle::Vehicle;
use crate::core::config::{GameConfig, PipeConfig};
use crate::core::context::{uniform, TickContext};
use crate::render::{Painter, Rgba};
use rand::Rng;

const PIPE_GREEN: Rgba = Rgba::rgb(76, 175, 80);
const PIPE_HIGHLIGHT: Rgba = Rgba::rgb(129, 199, 132);
const PIPE_CAP: Rgba = Rgba::rgb(56, 142, 60);
const CAP_HEIGHT: f64 = 12.0;
const CAP_OVERHANG: f64 = 3.0;

/// A top and bottom obstacle with a gap between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge.
    pub x: f64,
    pub width: f64,
    /// Y of the bottom of the top obstacle.
    pub gap_top: f64,
    /// Gap height.
    pub spacing: f64,
    /// Speed at spawn, before weather.
    pub speed: f64,
    pub passed: bool,
    /// Vehicle center is currently over this pipe. Visual only.
    pub highlighted: bool,
}

/// Gap height for a difficulty level, clamped to the configured band.
pub fn gap_for_difficulty(config: &PipeConfig, world_height: f64, difficulty: u32) -> f64 {
    let max = world_height * config.gap_max_fraction;
    let min = world_height * config.gap_min_fraction;
    (max - difficulty as f64 * config.gap_shrink_per_level).clamp(min, max)
}

impl Pipe {
    /// A new pipe at the right edge of the world.
    pub fn spawn<R: Rng>(rng: &mut R, ctx: &TickContext<'_>, difficulty: u32) -> Self {
        let cfg = &ctx.config.pipes;
        let h = ctx.height();
        Self {
            x: ctx.width(),
            width: cfg.width,
            gap_top: uniform(rng, h * cfg.top_min_fraction, h * cfg.top_max_fraction),
            spacing: gap_for_difficulty(cfg, h, difficulty),
            speed: cfg.base_speed * ctx.game_speed * ctx.mode.speed_multiplier,
            passed: false,
            highlighted: false,
        }
    }

    pub fn gap_bottom(&self) -> f64 {
        self.gap_top + self.spacing
    }

    pub fn gap_mid(&self) -> f64 {
        self.gap_top + self.spacing / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Move left by the spawn speed times the weather factor, and refresh the
    /// highlight flag.
    pub fn update(&mut self, speed_factor: f64, vehicle_x: f64) {
        self.x -= self.speed * speed_factor;
        self.highlighted = self.overlaps_column(vehicle_x);
    }

    fn overlaps_column(&self, x: f64) -> bool {
        x > self.x && x < self.right()
    }

    /// True when the vehicle's center column is over the pipe and its shrunken
    /// hitbox is not entirely inside the gap.
    pub fn hits(&self, vehicle: &Vehicle, hitbox_fraction: f64) -> bool {
        if !self.overlaps_column(vehicle.x) {
            return false;
        }
        let (top, bottom) = vehicle.hitbox(hitbox_fraction);
        !(top > self.gap_top && bottom < self.gap_bottom())
    }

    /// Trailing edge has cleared the vehicle, with a quarter-width margin.
    pub fn is_cleared_by(&self, vehicle: &Vehicle) -> bool {
        self.right() < vehicle.x - vehicle.width / 4.0
    }

    pub fn is_offscreen(&self) -> bool {
        self.right() < 0.0
    }

    pub fn draw(&self, painter: &mut dyn Painter, config: &GameConfig, lighting: f64) {
        let body = if self.highlighted { PIPE_HIGHLIGHT } else { PIPE_GREEN }.scaled(lighting);
        let cap = PIPE_CAP.scaled(lighting);
        let floor = config.world.height - config.world.ground_height;

        painter.fill_rect(self.x, 0.0, self.width, self.gap_top, body);
        painter.fill_rect(
            self.x - CAP_OVERHANG,
            self.gap_top - CAP_HEIGHT,
            self.width + CAP_OVERHANG * 2.0,
            CAP_HEIGHT,
            cap,
        );

        let bottom = self.gap_bottom();
        painter.fill_rect(self.x, bottom, self.width, (floor - bottom).max(0.0), body);
        painter.fill_rect(
            self.x - CAP_OVERHANG,
            bottom,
            self.width + CAP_OVERHANG * 2.0,
            CAP_HEIGHT,
            cap,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::modes::GameMode;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn pipe_at(x: f64, gap_top: f64, spacing: f64) -> Pipe {
        Pipe {
            x,
            width: 52.0,
            gap_top,
            spacing,
            speed: 2.0,
            passed: false,
            highlighted: false,
        }
    }

    fn vehicle_at(y: f64) -> Vehicle {
        let mut v = Vehicle::new(&GameConfig::default());
        v.y = y;
        v
    }

    #[test]
    fn test_gap_shrinks_with_difficulty_and_clamps() {
        let cfg = PipeConfig::default();
        assert!((gap_for_difficulty(&cfg, 600.0, 0) - 200.0).abs() < 1e-9);
        assert!((gap_for_difficulty(&cfg, 600.0, 2) - 190.0).abs() < 1e-9);
        // floor of the band is 180 at 600 high
        assert!((gap_for_difficulty(&cfg, 600.0, 8) - 180.0).abs() < 1e-9);
        assert!((gap_for_difficulty(&cfg, 600.0, 50) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_spawn_geometry_within_bands() {
        let config = GameConfig::default();
        let ctx = TickContext {
            config: &config,
            game_speed: 1.2,
            mode: GameMode::Extreme.params(),
            frame: 0,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..100 {
            let pipe = Pipe::spawn(&mut rng, &ctx, 3);
            assert_eq!(pipe.x, 400.0);
            assert!((60.0..360.0).contains(&pipe.gap_top));
            assert!((180.0..=200.0).contains(&pipe.spacing));
            assert!((pipe.speed - 2.0 * 1.2 * 1.5).abs() < 1e-9);
        }
    }

    #[test]
    fn test_vehicle_inside_gap_never_hits() {
        let pipe = pipe_at(60.0, 200.0, 190.0);
        // hitbox spans y +/- 4.8
        for y in [205.0, 250.0, 300.0, 385.0] {
            assert!(!pipe.hits(&vehicle_at(y), 0.2), "y = {y}");
        }
    }

    #[test]
    fn test_vehicle_leaving_gap_hits() {
        let pipe = pipe_at(60.0, 200.0, 190.0);
        for y in [204.0, 150.0, 386.0, 500.0] {
            assert!(pipe.hits(&vehicle_at(y), 0.2), "y = {y}");
        }
    }

    #[test]
    fn test_no_hit_without_horizontal_overlap() {
        let v = vehicle_at(50.0);
        // vehicle center at x = 80; edges are exclusive
        assert!(!pipe_at(80.0, 200.0, 190.0).hits(&v, 0.2));
        assert!(!pipe_at(28.0, 200.0, 190.0).hits(&v, 0.2));
        assert!(pipe_at(79.0, 200.0, 190.0).hits(&v, 0.2));
    }

    #[test]
    fn test_highlight_tracks_vehicle_column() {
        let mut pipe = pipe_at(90.0, 200.0, 190.0);
        pipe.update(1.0, 80.0);
        assert!(pipe.highlighted);
        pipe.x = 20.0;
        pipe.update(1.0, 80.0);
        assert!(!pipe.highlighted);
    }

    #[test]
    fn test_weather_factor_scales_movement() {
        let mut pipe = pipe_at(300.0, 200.0, 190.0);
        pipe.update(0.5, 80.0);
        assert!((pipe.x - 299.0).abs() < 1e-9);
        pipe.update(1.5, 80.0);
        assert!((pipe.x - 296.0).abs() < 1e-9);
    }

    #[test]
    fn test_cleared_uses_quarter_width_margin() {
        let v = vehicle_at(300.0);
        // vehicle.x - width / 4 = 80 - 8.5 = 71.5
        assert!(!pipe_at(71.5 - 52.0, 200.0, 190.0).is_cleared_by(&v));
        assert!(pipe_at(71.0 - 52.0, 200.0, 190.0).is_cleared_by(&v));
    }

    #[test]
    fn test_offscreen_once_right_edge_passes_zero() {
        assert!(!pipe_at(-52.0, 200.0, 190.0).is_offscreen());
        assert!(pipe_at(-53.0, 200.0, 190.0).is_offscreen());
    }
}
