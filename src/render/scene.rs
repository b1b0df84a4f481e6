//! Full-frame composition in a fixed back-to-front order.

use super::{alpha, screens, Painter, Rgba};
use crate::core::session::Session;
use crate::environment::timeline;

/// Section names in draw order.
pub const DRAW_ORDER: [&str; 9] = [
    "sky",
    "celestial",
    "stars",
    "clouds",
    "layers",
    "screen",
    "particles",
    "flash",
    "ui",
];

/// Forwards every primitive with a fixed offset applied.
struct Shaken<'a> {
    inner: &'a mut dyn Painter,
    dx: f64,
    dy: f64,
}

impl Painter for Shaken<'_> {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        self.inner.fill_rect(x + self.dx, y + self.dy, w, h, color);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.inner.fill_circle(x + self.dx, y + self.dy, radius, color);
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgba) {
        self.inner
            .line(x1 + self.dx, y1 + self.dy, x2 + self.dx, y2 + self.dy, color);
    }

    fn text(&mut self, x: f64, y: f64, text: &str, color: Rgba) {
        self.inner.text(x + self.dx, y + self.dy, text, color);
    }

    fn layer(&mut self) {
        self.inner.layer();
    }

    fn section(&mut self, name: &'static str) {
        self.inner.section(name);
    }
}

/// Shake displacement for this frame. Deterministic so frames replay.
pub fn shake_offset(shake: f64, frame: u64) -> (f64, f64) {
    if shake <= 0.0 {
        return (0.0, 0.0);
    }
    let f = frame as f64;
    (shake * (f * 1.7).sin(), shake * (f * 2.3).cos())
}

/// Draw one complete frame of `session`.
pub fn draw_frame(session: &Session, painter: &mut dyn Painter) {
    let config = session.config();
    let env = &session.environment;

    painter.section("sky");
    env.draw_sky(painter, config);

    let (dx, dy) = shake_offset(session.shake, session.frame);
    {
        let mut world = Shaken {
            inner: &mut *painter,
            dx,
            dy,
        };
        world.section("celestial");
        env.draw_celestial(&mut world, config);
        world.section("stars");
        env.draw_stars(&mut world, session.frame);
        world.section("clouds");
        env.draw_clouds(&mut world);
        world.section("layers");
        env.draw_layers(&mut world);
        world.section("screen");
        screens::draw_state_screen(session, &mut world);
        world.section("particles");
        session.particles.draw(&mut world);
    }

    painter.section("flash");
    if session.flash > 0.0 {
        painter.layer();
        let w = &config.world;
        painter.fill_rect(0.0, 0.0, w.width, w.height, Rgba::WHITE.with_alpha(alpha(session.flash)));
    }

    painter.section("ui");
    let label = timeline::time_of_day(session.phase());
    painter.text(config.world.width - 40.0, 14.0, label, Rgba::rgba(255, 255, 255, 180));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::GameState;
    use crate::core::{GameConfig, GameMode};
    use crate::render::{DrawCall, RecordingPainter};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn session() -> (Session, ChaCha8Rng) {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let s = Session::new(GameConfig::default(), GameMode::Normal, &mut rng);
        (s, rng)
    }

    #[test]
    fn test_sections_follow_draw_order_in_every_state() {
        let (mut s, mut rng) = session();
        let check = |s: &Session| {
            let mut painter = RecordingPainter::new();
            draw_frame(s, &mut painter);
            assert_eq!(painter.sections(), DRAW_ORDER.to_vec(), "state {}", s.state.name());
        };
        check(&s);
        s.primary_action(&mut rng);
        check(&s);
        s.primary_action(&mut rng);
        s.tick(16, &mut rng);
        check(&s);
        while s.state != GameState::GameOver {
            s.tick(16, &mut rng);
        }
        check(&s);
        s.continue_with_ad();
        check(&s);
    }

    #[test]
    fn test_flash_overlay_only_after_crash() {
        let (mut s, mut rng) = session();
        let mut painter = RecordingPainter::new();
        draw_frame(&s, &mut painter);
        assert!(!painter.calls.contains(&DrawCall::Layer));

        s.primary_action(&mut rng);
        s.primary_action(&mut rng);
        while s.state != GameState::GameOver {
            s.tick(16, &mut rng);
        }
        let mut painter = RecordingPainter::new();
        draw_frame(&s, &mut painter);
        let flash_at = painter
            .calls
            .iter()
            .position(|c| *c == DrawCall::Section("flash"))
            .unwrap();
        assert!(matches!(
            painter.calls[flash_at + 2],
            DrawCall::Rect { color, .. } if color.r == 255 && color.a > 0
        ));
    }

    #[test]
    fn test_shake_offset_is_zero_when_still() {
        assert_eq!(shake_offset(0.0, 77), (0.0, 0.0));
        let (dx, dy) = shake_offset(10.0, 3);
        assert!(dx.abs() <= 10.0 && dy.abs() <= 10.0);
        assert!(dx != 0.0 || dy != 0.0);
    }
}
