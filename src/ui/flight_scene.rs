//! Terminal rendering for a FlyVibe session.

use super::game_common::{create_game_layout, heading, labeled, render_info_panel_frame, render_status_bar};
use super::raster::{fit_world, to_color, Raster};
use crate::core::session::{FlightPhase, GameState, Session};
use crate::environment::timeline;
use crate::render::scene;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 24;

/// Draw the whole game into `area`. Returns the play rectangle so clicks can
/// be mapped back to world coordinates.
pub fn render_flyvibe(frame: &mut Frame, area: Rect, session: &Session) -> Rect {
    let layout = create_game_layout(
        frame,
        area,
        " FlyVibe ",
        to_color(session.mode.color()),
        INFO_PANEL_WIDTH,
    );
    let play = render_play_area(frame, layout.content, session);
    render_status_bar_content(frame, layout.status_bar, session);
    render_info_panel(frame, layout.info_panel, session);
    play
}

fn render_play_area(frame: &mut Frame, area: Rect, session: &Session) -> Rect {
    let world = &session.config().world;
    let play = fit_world(area, world.width, world.height);
    if play.width == 0 || play.height == 0 {
        return play;
    }
    let mut raster = Raster::new(play.width, play.height, world.width, world.height);
    scene::draw_frame(session, &mut raster);
    frame.render_widget(Paragraph::new(raster.to_lines()), play);
    play
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, session: &Session) {
    if session.name_entry().is_some() {
        render_status_bar(
            frame,
            area,
            "Type your pilot name",
            Color::Yellow,
            &[("[Enter]", "Save"), ("[Bksp]", "Delete"), ("[Esc]", "Done")],
        );
        return;
    }

    match session.state {
        GameState::Start => render_status_bar(
            frame,
            area,
            &format!("{} mode selected", session.mode.name()),
            to_color(session.mode.color()),
            &[
                ("[Space]", "Start"),
                ("[1-4]", "Mode"),
                ("[R]", "Rainbow"),
                ("[N]", "Name"),
                ("[Q]", "Quit"),
            ],
        ),
        GameState::Playing(FlightPhase::Runway) => render_status_bar(
            frame,
            area,
            "Cleared for takeoff",
            Color::Yellow,
            &[("[Space/Up/Enter]", "Take off"), ("[Q]", "Quit")],
        ),
        GameState::Playing(FlightPhase::Airborne) => render_status_bar(
            frame,
            area,
            &format!("Score: {}", session.score.whole_score()),
            Color::Green,
            &[("[Space/Up/Enter]", "Flap"), ("[Q]", "Quit")],
        ),
        GameState::GameOver => render_status_bar(
            frame,
            area,
            &format!("Crashed with {} points", session.score.whole_score()),
            Color::Red,
            &[
                ("[Space]", "Restart"),
                ("[C]", "Continue"),
                ("[S]", "Share"),
                ("[X]", "Challenge"),
            ],
        ),
        GameState::WatchingAd { .. } => render_status_bar(
            frame,
            area,
            &format!(
                "Ad break: {}s",
                session.ad_seconds_remaining().unwrap_or_default()
            ),
            Color::DarkGray,
            &[("[Q]", "Quit")],
        ),
    }
}

fn weather_line(session: &Session) -> Line<'static> {
    if !session.mode.params().weather {
        return labeled("Weather", "calm".to_string(), Color::DarkGray);
    }
    let weather = &session.vehicle.weather;
    if let Some(effect) = weather.active() {
        labeled("Weather", effect.kind.name().to_string(), Color::LightBlue)
    } else if let Some(effect) = weather.warning() {
        labeled("Weather", format!("{}!", effect.kind.name()), Color::Yellow)
    } else {
        labeled("Weather", "clear".to_string(), Color::White)
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &Session) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let score = &session.score;
    let mut lines = vec![
        heading(format!(" {} ", session.mode.name()), to_color(session.mode.color())),
        Line::from(""),
        labeled("Score", score.whole_score().to_string(), Color::White),
        labeled(
            "Best",
            (session.high_score.max(0.0) as u64).to_string(),
            Color::Yellow,
        ),
        labeled("Level", score.difficulty.to_string(), Color::Cyan),
        labeled("Speed", format!("x{:.2}", score.game_speed), Color::Cyan),
        labeled("Combo", format!("x{:.1}", score.combo), Color::Yellow),
        labeled("Streak", score.streak.to_string(), Color::White),
        Line::from(""),
        labeled(
            "Time",
            timeline::time_of_day(session.phase()).to_string(),
            if session.is_night() { Color::LightBlue } else { Color::LightYellow },
        ),
        weather_line(session),
        Line::from(""),
        Line::from(Span::styled(" Leaderboard", Style::default().fg(Color::DarkGray))),
    ];

    for (i, entry) in session.leaderboard.entries().iter().enumerate() {
        let color = if entry.name == session.player_name() {
            Color::Yellow
        } else {
            Color::White
        };
        lines.push(Line::from(Span::styled(
            format!(" {}. {:<10} {:>3}", i + 1, entry.name, entry.score),
            Style::default().fg(color),
        )));
    }

    lines.push(Line::from(""));
    lines.push(labeled("Pilot", session.player_name().to_string(), Color::White));

    frame.render_widget(Paragraph::new(lines), inner);
}
