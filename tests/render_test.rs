//! Integration test: frame composition
//!
//! Every state draws the same back-to-front section order, and the
//! half-block raster accepts a full frame at awkward sizes.

use flyvibe::core::{FlightPhase, GameConfig, GameMode, GameState, Session};
use flyvibe::render::scene::{draw_frame, DRAW_ORDER};
use flyvibe::render::{DrawCall, RecordingPainter};
use flyvibe::ui::raster::Raster;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// One session per state, reached through normal play.
fn sessions_in_every_state() -> Vec<Session> {
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let mut out = Vec::new();
    let mut session = Session::new(GameConfig::default(), GameMode::Stormy, &mut rng);
    out.push(session.clone());

    session.primary_action(&mut rng);
    session.tick(16, &mut rng);
    out.push(session.clone());

    session.primary_action(&mut rng);
    session.tick(16, &mut rng);
    out.push(session.clone());

    while session.state != GameState::GameOver {
        session.tick(16, &mut rng);
    }
    out.push(session.clone());

    session.continue_with_ad();
    session.tick(1000, &mut rng);
    out.push(session);
    out
}

#[test]
fn test_draw_order_is_fixed_in_every_state() {
    let sessions = sessions_in_every_state();
    let states: Vec<GameState> = sessions.iter().map(|s| s.state).collect();
    assert_eq!(states[1], GameState::Playing(FlightPhase::Runway));
    assert_eq!(states[2], GameState::Playing(FlightPhase::Airborne));
    assert!(matches!(states[4], GameState::WatchingAd { .. }));

    for session in &sessions {
        let mut painter = RecordingPainter::new();
        draw_frame(session, &mut painter);
        assert_eq!(painter.sections(), DRAW_ORDER.to_vec(), "{:?}", session.state);
        assert!(painter.primitive_count() > 0);
    }
}

#[test]
fn test_sky_is_the_first_primitive() {
    let sessions = sessions_in_every_state();
    let mut painter = RecordingPainter::new();
    draw_frame(&sessions[2], &mut painter);

    let first = painter
        .calls
        .iter()
        .find(|call| !matches!(call, DrawCall::Section(_) | DrawCall::Layer));
    let Some(DrawCall::Rect { x, y, .. }) = first else {
        panic!("expected the sky fill first, got {first:?}");
    };
    assert_eq!((*x, *y), (0.0, 0.0));
}

#[test]
fn test_ad_screen_shows_countdown() {
    let sessions = sessions_in_every_state();
    let mut painter = RecordingPainter::new();
    draw_frame(&sessions[4], &mut painter);
    let texts = painter.texts();
    assert!(texts.contains(&"Watching Ad..."));
    assert!(texts.iter().any(|t| t.ends_with("seconds remaining")));
}

#[test]
fn test_raster_accepts_full_frames_at_odd_sizes() {
    let sessions = sessions_in_every_state();
    for (cols, rows) in [(1, 1), (13, 7), (40, 30), (97, 61)] {
        for session in &sessions {
            let world = &session.config().world;
            let mut raster = Raster::new(cols, rows, world.width, world.height);
            draw_frame(session, &mut raster);
            assert_eq!(raster.to_lines().len(), rows as usize);
        }
    }
}
