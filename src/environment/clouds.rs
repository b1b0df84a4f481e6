//! Drifting decorative clouds.

use crate::core::config::EnvironmentConfig;
use crate::core::context::uniform;
use crate::render::{alpha, Painter, Rgba};
use rand::Rng;

/// Clouds left of this x are removed.
const DESPAWN_X: f64 = -100.0;
const INITIAL_CLOUDS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    pub scale: f64,
    pub opacity: f64,
    pub width: f64,
    pub height: f64,
    /// Jitter for the two side puffs.
    pub puff_offsets: [(f64, f64); 2],
}

impl Cloud {
    /// A cloud just past the right edge.
    pub fn spawn<R: Rng>(rng: &mut R, world_width: f64, world_height: f64, parallax: f64) -> Self {
        Self {
            x: world_width + uniform(rng, 50.0, 200.0),
            y: uniform(rng, 50.0, world_height / 2.0),
            speed: uniform(rng, 0.2, 0.5) * parallax,
            scale: uniform(rng, 0.8, 1.3),
            opacity: uniform(rng, 180.0, 220.0),
            width: uniform(rng, 60.0, 100.0),
            height: uniform(rng, 25.0, 40.0),
            puff_offsets: [
                (uniform(rng, -5.0, 5.0), uniform(rng, -3.0, 3.0)),
                (uniform(rng, -5.0, 5.0), uniform(rng, -3.0, 3.0)),
            ],
        }
    }

    pub fn update(&mut self, game_speed: f64) {
        self.x -= self.speed * game_speed;
    }

    pub fn is_offscreen(&self) -> bool {
        self.x < DESPAWN_X
    }

    /// `factor` scales the cloud's own opacity (dusk/dawn fade).
    pub fn draw(&self, painter: &mut dyn Painter, factor: f64) {
        let base = self.opacity * factor;
        if base <= 0.0 {
            return;
        }
        let (w, h) = (self.width * self.scale, self.height * self.scale);
        let [(ox1, oy1), (ox2, oy2)] = self.puff_offsets;
        let white = |extra: f64| Rgba::WHITE.with_alpha(alpha((base + extra * factor).min(255.0)));

        painter.fill_circle(self.x, self.y, h / 2.0, white(0.0));
        painter.fill_circle(self.x - w / 4.0 + ox1, self.y - h / 4.0 + oy1, h / 3.0, white(20.0));
        painter.fill_circle(self.x + w / 4.0 + ox2, self.y - h / 5.0 + oy2, h / 3.5, white(20.0));
        painter.fill_circle(self.x, self.y - h / 3.0, h / 4.0, white(40.0));
    }
}

#[derive(Debug, Clone, Default)]
pub struct CloudField {
    clouds: Vec<Cloud>,
}

impl CloudField {
    /// A few clouds already spread across the screen.
    pub fn new<R: Rng>(rng: &mut R, width: f64, height: f64, parallax: f64) -> Self {
        let clouds = (0..INITIAL_CLOUDS)
            .map(|_| {
                let mut cloud = Cloud::spawn(rng, width, height, parallax);
                cloud.x = uniform(rng, 0.0, width);
                cloud
            })
            .collect();
        Self { clouds }
    }

    /// Move clouds, drop the ones past the left edge, and maybe spawn one.
    ///
    /// Spawning is scaled by `factor`, so no clouds appear during the night.
    pub fn update<R: Rng>(
        &mut self,
        rng: &mut R,
        config: &EnvironmentConfig,
        (width, height): (f64, f64),
        game_speed: f64,
        factor: f64,
    ) {
        for cloud in &mut self.clouds {
            cloud.update(game_speed);
        }
        self.clouds.retain(|c| !c.is_offscreen());

        if factor <= 0.0 {
            return;
        }
        let below_minimum = self.clouds.len() < config.cloud_min_count;
        if below_minimum || rng.gen::<f64>() < config.cloud_spawn_chance * factor {
            self.clouds
                .push(Cloud::spawn(rng, width, height, config.parallax_speed));
        }
    }

    pub fn draw(&self, painter: &mut dyn Painter, factor: f64) {
        for cloud in &self.clouds {
            cloud.draw(painter, factor);
        }
    }

    pub fn len(&self) -> usize {
        self.clouds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clouds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cloud> {
        self.clouds.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingPainter;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_no_spawns_at_night() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let config = EnvironmentConfig::default();
        let mut field = CloudField::default();
        for _ in 0..1000 {
            field.update(&mut rng, &config, (400.0, 600.0), 1.0, 0.0);
        }
        assert!(field.is_empty());
    }

    #[test]
    fn test_minimum_count_kept_by_day() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let config = EnvironmentConfig::default();
        let mut field = CloudField::default();
        for _ in 0..config.cloud_min_count {
            field.update(&mut rng, &config, (400.0, 600.0), 1.0, 1.0);
        }
        assert!(field.len() >= config.cloud_min_count);
    }

    #[test]
    fn test_clouds_despawn_past_left_edge() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let config = EnvironmentConfig::default();
        let mut field = CloudField::new(&mut rng, 400.0, 600.0, config.parallax_speed);
        // slowest cloud: 0.1 units per tick from at most x = 400
        for _ in 0..6000 {
            field.update(&mut rng, &config, (400.0, 600.0), 1.0, 0.0);
        }
        assert!(field.is_empty());
    }

    #[test]
    fn test_faded_clouds_are_not_drawn() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let cloud = Cloud::spawn(&mut rng, 400.0, 600.0, 0.5);
        let mut painter = RecordingPainter::new();
        cloud.draw(&mut painter, 0.0);
        assert_eq!(painter.primitive_count(), 0);
        cloud.draw(&mut painter, 1.0);
        assert_eq!(painter.primitive_count(), 4);
    }
}
