//! Integration test: scoring, difficulty, day cycle and collision properties
//!
//! Long randomized sequences checked against the invariants the game relies
//! on: combo never drops below 1, difficulty and speed only climb to their
//! caps, the day phase always wraps into `[0, 1)`.

use flyvibe::core::config::ScoringConfig;
use flyvibe::core::{FlightPhase, GameConfig, GameMode, GameState, ScoreState, Session};
use flyvibe::environment::DayCycle;
use flyvibe::flight::{Burst, Pipe, ParticleSystem, Vehicle};
use flyvibe::render::Rgba;
use flyvibe::simulator::Autopilot;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[test]
fn test_combo_and_difficulty_invariants_over_random_passes() {
    let config = ScoringConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut score = ScoreState::new();
    let mut last_difficulty = score.difficulty;
    let mut last_speed = score.game_speed;

    for _ in 0..2000 {
        let perfect = rng.gen_bool(0.6);
        let outcome = score.register_pass(perfect, 3.0, &config);

        assert!(score.combo >= 1.0);
        assert!(score.combo <= config.combo_max);
        if !perfect {
            assert_eq!(score.combo, 1.0);
            assert_eq!(score.streak, 0);
        }
        assert_eq!(outcome.combo, score.combo);

        assert!(score.difficulty >= last_difficulty);
        assert!(score.difficulty <= config.difficulty_max);
        assert!(score.game_speed >= last_speed);
        assert!(score.game_speed <= config.speed_max);
        last_difficulty = score.difficulty;
        last_speed = score.game_speed;
    }

    assert_eq!(score.difficulty, config.difficulty_max);
    assert_eq!(score.game_speed, config.speed_max);
}

#[test]
fn test_points_scale_with_mode_and_combo() {
    let config = ScoringConfig::default();
    let mut score = ScoreState::new();

    let first = score.register_pass(true, 2.0, &config);
    assert_eq!(first.points, 2.0 * (1.0 + config.combo_per_streak));

    let plain = score.register_pass(false, 2.0, &config);
    assert_eq!(plain.points, 2.0);
    assert_eq!(score.score, first.points + plain.points);
}

#[test]
fn test_animated_score_eases_toward_score() {
    let config = ScoringConfig::default();
    let mut score = ScoreState::new();
    for _ in 0..10 {
        score.register_pass(false, 1.0, &config);
    }

    let mut last_gap = score.score - score.animated;
    for _ in 0..200 {
        score.animate(&config);
        let gap = score.score - score.animated;
        assert!(gap >= 0.0 && gap <= last_gap);
        last_gap = gap;
    }
    assert!(last_gap < 0.01);
}

#[test]
fn test_day_phase_wraps_modulo_one() {
    let mut cycle = DayCycle::new(97);
    let step = 1.0 / 97.0;
    for n in 1..=1000u32 {
        cycle.advance();
        let phase = cycle.phase();
        assert!((0.0..1.0).contains(&phase));
        let expected = (n as f64 * step).rem_euclid(1.0);
        let diff = (phase - expected).abs();
        // accumulated rounding may put one side just below 1.0
        assert!(diff < 1e-9 || (1.0 - diff) < 1e-9, "tick {n}: {phase} vs {expected}");
    }
}

#[test]
fn test_day_clock_only_runs_while_playing() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let mut session = Session::new(GameConfig::default(), GameMode::Normal, &mut rng);
    for _ in 0..50 {
        session.tick(16, &mut rng);
    }
    assert_eq!(session.phase(), 0.0);

    session.primary_action(&mut rng);
    for _ in 0..50 {
        session.tick(16, &mut rng);
    }
    assert!(session.phase() > 0.0);
    assert!(session.phase() < 1.0);
}

#[test]
fn test_difficulty_never_drops_during_autopilot_run() {
    let mut config = GameConfig::default();
    config.scoring.difficulty_threshold = 1.0;
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let mut session = Session::new(config, GameMode::Normal, &mut rng);
    let pilot = Autopilot::new(0.0);

    session.primary_action(&mut rng);
    session.tick(16, &mut rng);
    session.primary_action(&mut rng);

    let mut last = session.score.difficulty;
    for _ in 0..10_000 {
        if session.state != GameState::Playing(FlightPhase::Airborne) {
            break;
        }
        if pilot.should_flap(&session) {
            session.primary_action(&mut rng);
        }
        session.tick(16, &mut rng);
        assert!(session.score.difficulty >= last);
        assert!(session.score.combo >= 1.0);
        last = session.score.difficulty;
    }
}

#[test]
fn test_gap_containment_decides_collision() {
    let config = GameConfig::default();
    let mut vehicle = Vehicle::new(&config);
    let hitbox = config.vehicle.hitbox_fraction;
    let half = vehicle.height * hitbox;
    let pipe = Pipe {
        x: vehicle.x - 20.0,
        width: 52.0,
        gap_top: 200.0,
        spacing: 200.0,
        speed: 2.0,
        passed: false,
        highlighted: false,
    };

    for y in [200.0 + half + 0.5, 300.0, 400.0 - half - 0.5] {
        vehicle.y = y;
        assert!(!pipe.hits(&vehicle, hitbox), "y = {y} is inside the gap");
    }
    for y in [200.0 + half - 0.5, 100.0, 400.0 - half + 0.5, 500.0] {
        vehicle.y = y;
        assert!(pipe.hits(&vehicle, hitbox), "y = {y} leaves the gap");
    }

    let ahead = Pipe {
        x: vehicle.x + 10.0,
        ..pipe
    };
    vehicle.y = 100.0;
    assert!(!ahead.hits(&vehicle, hitbox));
}

#[test]
fn test_particles_fade_and_are_dropped() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let mut particles = ParticleSystem::new();
    particles.emit(
        &mut rng,
        Burst::explosion(100.0, 100.0, 25, (5.0, 15.0), Rgba::WHITE),
    );

    let mut last: Vec<f64> = particles.iter().map(|p| p.alpha).collect();
    while !particles.is_empty() {
        particles.update();
        let now: Vec<f64> = particles.iter().map(|p| p.alpha).collect();
        assert!(particles.iter().all(|p| !p.is_dead()));
        // nothing is spawned, so survivors keep their order
        assert!(now.len() <= last.len());
        for alpha in &now {
            assert!(last.iter().any(|before| before > alpha));
        }
        last = now;
    }
}
