//! Background world: day-night clock, sky, stars, clouds and parallax bands.

pub mod celestial;
pub mod clouds;
pub mod layers;
pub mod stars;
pub mod timeline;

pub use celestial::{BodyKind, CelestialBody};
pub use clouds::{Cloud, CloudField};
pub use layers::ParallaxLayer;
pub use stars::StarField;
pub use timeline::DayCycle;

use crate::core::config::GameConfig;
use crate::render::Painter;
use rand::Rng;

/// Everything behind the play field.
#[derive(Debug, Clone)]
pub struct Environment {
    pub cycle: DayCycle,
    pub stars: StarField,
    pub clouds: CloudField,
    pub layers: Vec<ParallaxLayer>,
}

impl Environment {
    pub fn new<R: Rng>(rng: &mut R, config: &GameConfig) -> Self {
        let w = &config.world;
        let env = &config.environment;
        let horizon = w.height - w.ground_height;
        Self {
            cycle: DayCycle::new(env.day_length_ticks),
            stars: StarField::generate(env.star_seed, env.star_count, w.width, horizon),
            clouds: CloudField::new(rng, w.width, w.height, env.parallax_speed),
            layers: layers::default_layers(w.width, w.height, w.ground_height),
        }
    }

    pub fn phase(&self) -> f64 {
        self.cycle.phase()
    }

    /// One tick. The clock only runs while a run is in progress; clouds and
    /// layers always scroll.
    pub fn update<R: Rng>(&mut self, rng: &mut R, config: &GameConfig, game_speed: f64, advance_clock: bool) {
        if advance_clock {
            self.cycle.advance();
        }
        let factor = timeline::cloud_factor(self.phase());
        self.clouds.update(
            rng,
            &config.environment,
            (config.world.width, config.world.height),
            game_speed,
            factor,
        );
        for layer in &mut self.layers {
            layer.update(game_speed);
        }
    }

    pub fn lighting(&self) -> f64 {
        timeline::lighting_factor(self.phase())
    }

    pub fn celestial(&self, config: &GameConfig) -> CelestialBody {
        let w = &config.world;
        CelestialBody::at(self.phase(), w.width, w.height, w.height - w.ground_height)
    }

    pub fn draw_sky(&self, painter: &mut dyn Painter, config: &GameConfig) {
        let w = &config.world;
        painter.fill_rect(0.0, 0.0, w.width, w.height, timeline::sky_color(self.phase()));
    }

    pub fn draw_celestial(&self, painter: &mut dyn Painter, config: &GameConfig) {
        self.celestial(config).draw(painter);
    }

    pub fn draw_stars(&self, painter: &mut dyn Painter, frame: u64) {
        self.stars
            .draw(painter, timeline::star_opacity(self.phase()), frame);
    }

    pub fn draw_clouds(&self, painter: &mut dyn Painter) {
        self.clouds
            .draw(painter, timeline::cloud_factor(self.phase()));
    }

    pub fn draw_layers(&self, painter: &mut dyn Painter) {
        let lighting = self.lighting();
        for layer in &self.layers {
            layer.draw(painter, lighting);
        }
    }
}
