//! State-specific screens: start, playing, game over and the ad break.

use super::buttons::{self, ButtonAction};
use super::{alpha, Painter, Rgba};
use crate::core::scoring::Medal;
use crate::core::session::{FlightPhase, GameState, Session};

const SHADOW: Rgba = Rgba::rgba(0, 0, 0, 100);
const PANEL: Rgba = Rgba::rgb(255, 230, 180);
const PANEL_EDGE: Rgba = Rgba::rgb(200, 150, 80);
const GAME_OVER_RED: Rgba = Rgba::rgb(200, 50, 50);
const DARK_TEXT: Rgba = Rgba::rgb(50, 50, 50);
const RUNWAY: Rgba = Rgba::rgb(50, 50, 50);
const HIGHLIGHT_NAME: Rgba = Rgba::rgb(255, 255, 0);
const PLACEHOLDER: Rgba = Rgba::rgb(150, 150, 150);

/// Draw whatever screen belongs to the session's current state.
pub fn draw_state_screen(session: &Session, painter: &mut dyn Painter) {
    match session.state {
        GameState::Start => draw_start(session, painter),
        GameState::Playing(phase) => draw_playing(session, painter, phase),
        GameState::GameOver => draw_game_over(session, painter),
        GameState::WatchingAd { .. } => draw_ad(session, painter),
    }
}

fn shadowed_text(painter: &mut dyn Painter, x: f64, y: f64, text: &str, color: Rgba) {
    painter.text(x + 2.0, y + 2.0, text, SHADOW);
    painter.text(x, y, text, color);
}

fn draw_start(session: &Session, painter: &mut dyn Painter) {
    let w = &session.config().world;
    let cx = w.width / 2.0;
    let frame = session.frame as f64;

    let title_y = w.height / 5.0 + (frame * 0.05).sin() * 5.0;
    shadowed_text(painter, cx, title_y, "FlyVibe", session.title_color());
    painter.text(cx, title_y + 30.0, "THE GAME EVERYONE'S TALKING ABOUT", Rgba::WHITE);

    // demo glider bobbing under the title
    let demo_x = cx + (frame * 0.05).sin() * 30.0;
    let demo_y = title_y + 80.0 + (frame * 0.08).cos() * 15.0;
    let tilt = (frame * 0.1).sin() * 4.0;
    let color = session.vehicle_color();
    painter.line(demo_x - 10.0, demo_y + tilt, demo_x + 10.0, demo_y - 5.0, color);
    painter.line(demo_x - 10.0, demo_y + tilt, demo_x + 10.0, demo_y + 5.0, color);

    painter.text(cx, 260.0, "Click or Press Space to Start", Rgba::WHITE);
    painter.text(cx, 295.0, "SELECT MODE:", Rgba::WHITE);

    for button in buttons::start_screen_buttons(w.width) {
        let selected = match button.action {
            ButtonAction::SelectMode(mode) => mode == session.mode,
            ButtonAction::ToggleRainbow => session.rainbow,
            _ => false,
        };
        button.draw(painter, selected);
        if let ButtonAction::SelectMode(mode) = button.action {
            if selected {
                let (l, t) = (button.left() - 2.0, button.top() - 2.0);
                let (r, b) = (l + button.width + 4.0, t + button.height + 4.0);
                let c = mode.color();
                painter.line(l, t, r, t, c);
                painter.line(r, t, r, b, c);
                painter.line(r, b, l, b, c);
                painter.line(l, b, l, t, c);
            }
        }
        if button.action == ButtonAction::NameBox {
            draw_name_box(session, painter, button.x, button.y);
        }
    }

    painter.text(cx, 480.0, "LEADERBOARD", Rgba::WHITE);
    for (i, entry) in session.leaderboard.entries().iter().enumerate() {
        let color = if entry.name == session.player_name() {
            HIGHLIGHT_NAME
        } else {
            Rgba::WHITE
        };
        let line = format!("{}. {} - {}", i + 1, entry.name, entry.score);
        painter.text(cx, 500.0 + i as f64 * 20.0, &line, color);
    }

    if let Some(banner) = &session.banner {
        let c = banner.color.with_alpha(alpha(banner.alpha));
        painter.text(cx, w.height - 8.0, &banner.text, c);
    }
}

fn draw_name_box(session: &Session, painter: &mut dyn Painter, x: f64, y: f64) {
    painter.text(x, y - 25.0, "ENTER YOUR NAME:", Rgba::WHITE);
    match session.name_entry() {
        Some(entry) => {
            let cursor = if session.frame % 30 < 15 { "|" } else { "" };
            painter.text(x, y, &format!("{entry}{cursor}"), Rgba::WHITE);
        }
        None if session.player_name() == crate::core::constants::DEFAULT_PLAYER_NAME => {
            painter.text(x, y, "Click to enter name", PLACEHOLDER);
        }
        None => painter.text(x, y, session.player_name(), Rgba::WHITE),
    }
}

fn draw_runway(session: &Session, painter: &mut dyn Painter) {
    let w = &session.config().world;
    let strip_y = w.ground_contact_y() + 10.0;
    painter.fill_rect(0.0, strip_y, w.width, 20.0, RUNWAY);
    let mut x = 0.0;
    while x < w.width {
        painter.fill_rect(x, strip_y + 8.0, 50.0, 4.0, Rgba::WHITE);
        x += 100.0;
    }
    let lights_y = strip_y - 5.0;
    let mut x = 0.0;
    while x < w.width {
        painter.fill_circle(x, lights_y, 2.5, Rgba::rgb(255, 255, 0));
        painter.fill_circle(x + 20.0, lights_y, 2.5, Rgba::rgb(255, 0, 0));
        x += 40.0;
    }
}

fn draw_playing(session: &Session, painter: &mut dyn Painter, phase: FlightPhase) {
    let config = session.config();
    let cx = config.world.width / 2.0;
    let cy = config.world.height / 2.0;

    if phase == FlightPhase::Runway {
        draw_runway(session, painter);
    }

    let lighting = session.environment.lighting();
    for pipe in &session.pipes {
        pipe.draw(painter, config, lighting);
    }
    session.vehicle.draw(painter, session.vehicle_color());

    let shown = session.score.animated.floor().max(0.0) as u64;
    shadowed_text(painter, cx, 50.0, &shown.to_string(), Rgba::WHITE);
    painter.text(cx, 80.0, &format!("{} MODE", session.mode.name()), session.mode.color());

    if session.score.combo > 1.0 {
        painter.text(cx, 110.0, &format!("COMBO x{:.1}", session.score.combo), Rgba::GOLD);
    }
    if let Some(effect) = session.vehicle.weather.active() {
        painter.text(cx, 135.0, &effect.kind.name().to_uppercase(), Rgba::rgb(200, 220, 255));
    }

    if phase == FlightPhase::Runway {
        painter.text(cx, cy, "Press SPACE to take off!", Rgba::WHITE);
    }

    if let Some(banner) = &session.banner {
        let a = alpha(banner.alpha);
        painter.text(cx, cy - 100.0, &banner.text, banner.color.with_alpha(a));
        if session.score.streak > 2 {
            let streak = format!("STREAK: {}", session.score.streak);
            painter.text(cx, cy - 70.0, &streak, Rgba::GOLD.with_alpha(a));
        }
    }
}

fn draw_game_over(session: &Session, painter: &mut dyn Painter) {
    let config = session.config();
    let (w, h) = (config.world.width, config.world.height);
    let cx = w / 2.0;

    // frozen play field under the overlay
    let lighting = session.environment.lighting();
    for pipe in &session.pipes {
        pipe.draw(painter, config, lighting);
    }
    session.vehicle.draw(painter, session.vehicle_color());

    painter.layer();
    painter.fill_rect(0.0, 0.0, w, h, Rgba::rgba(0, 0, 0, 150));

    let (pw, ph) = (300.0, 200.0);
    let (px, py) = (cx - pw / 2.0, h / 3.0 - ph / 2.0);
    painter.fill_rect(px + 5.0, py + 5.0, pw, ph, SHADOW);
    painter.fill_rect(px - 3.0, py - 3.0, pw + 6.0, ph + 6.0, PANEL_EDGE);
    painter.fill_rect(px, py, pw, ph, PANEL);

    painter.text(cx, py + 40.0, "GAME OVER", GAME_OVER_RED);
    painter.text(cx, py + 80.0, &format!("Score: {}", session.score.whole_score()), DARK_TEXT);
    painter.text(cx, py + 105.0, &format!("{} MODE", session.mode.name()), session.mode.color().scaled(0.8));
    if session.new_high_score {
        painter.text(cx, py + 135.0, "NEW HIGH SCORE!", DARK_TEXT);
    } else {
        let best = session.high_score.floor().max(0.0) as u64;
        painter.text(cx, py + 135.0, &format!("Best: {best}"), DARK_TEXT);
    }

    if let Some(medal) = Medal::for_score(session.score.score) {
        painter.fill_circle(px + 50.0, py + 105.0, 22.0, medal.color());
        painter.fill_circle(px + 50.0, py + 105.0, 14.0, medal.color().scaled(0.8));
        painter.text(px + 50.0, py + 140.0, medal.name(), DARK_TEXT);
    }

    for button in buttons::game_over_buttons(w, h) {
        button.draw(painter, false);
    }

    match &session.banner {
        Some(banner) => painter.text(cx, h - 40.0, &banner.text, banner.color),
        None => painter.text(cx, h - 50.0, "SHARE YOUR SCORE!", Rgba::WHITE),
    }
}

fn draw_ad(session: &Session, painter: &mut dyn Painter) {
    let w = &session.config().world;
    let (cx, cy) = (w.width / 2.0, w.height / 2.0);
    let progress = session.ad_progress().unwrap_or(0.0);
    let remaining = session.ad_seconds_remaining().unwrap_or(0);

    painter.layer();
    painter.fill_rect(0.0, 0.0, w.width, w.height, Rgba::BLACK);
    painter.fill_rect(50.0, cy + 50.0, w.width - 100.0, 20.0, Rgba::rgb(50, 50, 50));
    painter.fill_rect(50.0, cy + 50.0, (w.width - 100.0) * progress, 20.0, Rgba::rgb(0, 200, 0));
    painter.text(cx, cy, "Watching Ad...", Rgba::WHITE);
    painter.text(cx, cy + 30.0, &format!("{remaining} seconds remaining"), Rgba::WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, GameMode};
    use crate::render::RecordingPainter;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn session() -> (Session, ChaCha8Rng) {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let s = Session::new(GameConfig::default(), GameMode::Extreme, &mut rng);
        (s, rng)
    }

    #[test]
    fn test_start_screen_lists_leaderboard() {
        let (s, _) = session();
        let mut painter = RecordingPainter::new();
        draw_state_screen(&s, &mut painter);
        let texts = painter.texts();
        assert!(texts.contains(&"1. Ace - 42"));
        assert!(texts.contains(&"EXTREME"));
        assert!(texts.contains(&"Click to enter name"));
    }

    #[test]
    fn test_runway_prompt_shown_before_takeoff() {
        let (mut s, mut rng) = session();
        s.primary_action(&mut rng);
        let mut painter = RecordingPainter::new();
        draw_state_screen(&s, &mut painter);
        assert!(painter.texts().contains(&"Press SPACE to take off!"));
        assert!(painter.texts().contains(&"EXTREME MODE"));
    }

    #[test]
    fn test_game_over_shows_new_high_score() {
        let (mut s, mut rng) = session();
        s.primary_action(&mut rng);
        s.primary_action(&mut rng);
        s.score.score = 12.0;
        while s.state != GameState::GameOver {
            s.tick(16, &mut rng);
        }
        let mut painter = RecordingPainter::new();
        draw_state_screen(&s, &mut painter);
        let texts = painter.texts();
        assert!(texts.contains(&"GAME OVER"));
        assert!(texts.contains(&"NEW HIGH SCORE!"));
        assert!(texts.contains(&"RESTART"));
    }
}
