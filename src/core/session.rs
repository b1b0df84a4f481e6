//! The game flow state machine and the per-frame driver.
//!
//! A [`Session`] owns every piece of mutable game state: vehicle, obstacles,
//! particles, environment, score, leaderboard and the sound outbox. Input
//! methods are called between ticks; [`Session::tick`] advances exactly one
//! frame and reports what happened in a [`TickEvents`].

use super::config::GameConfig;
use super::context::{uniform, TickContext};
use super::leaderboard::Leaderboard;
use super::modes::GameMode;
use super::scoring::{streak_message, PassOutcome, ScoreState};
use super::social;
use crate::audio::{CueQueue, SoundCue};
use crate::environment::{timeline, Environment};
use crate::flight::{Burst, BurstColor, ParticleSystem, Pipe, Vehicle, WeatherEvent, WeatherKind};
use crate::render::buttons::{self, ButtonAction};
use crate::render::{Rgba, RAINBOW};
use rand::Rng;

const FLASH_DECAY: f64 = 10.0;
const SHAKE_DECAY: f64 = 0.9;
const SHAKE_FLOOR: f64 = 0.1;
const TAGLINE_INTERVAL_FRAMES: u64 = 300;
const TAGLINE_FADE: f64 = 0.5;
const RAINBOW_FRAMES_PER_COLOR: u64 = 5;
/// Chance per warning tick of a streak particle entering from the right.
const WARNING_STREAK_CHANCE: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightPhase {
    /// Parked on the runway, waiting for takeoff. No obstacles spawn.
    Runway,
    Airborne,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Start,
    Playing(FlightPhase),
    GameOver,
    WatchingAd { elapsed_ms: u64 },
}

impl GameState {
    pub fn name(self) -> &'static str {
        match self {
            GameState::Start => "start",
            GameState::Playing(FlightPhase::Runway) => "runway",
            GameState::Playing(FlightPhase::Airborne) => "playing",
            GameState::GameOver => "gameover",
            GameState::WatchingAd { .. } => "watching ad",
        }
    }
}

/// Fading text shown over the play field.
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub text: String,
    pub alpha: f64,
    pub color: Rgba,
}

impl Banner {
    fn new(text: impl Into<String>, color: Rgba) -> Self {
        Self {
            text: text.into(),
            alpha: 255.0,
            color,
        }
    }
}

/// What happened during one [`Session::tick`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickEvents {
    pub passes: Vec<PassOutcome>,
    pub pipe_spawned: bool,
    pub crashed: bool,
    pub revived: bool,
    pub weather: Option<WeatherEvent>,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    pub state: GameState,
    pub mode: GameMode,
    pub vehicle: Vehicle,
    pub pipes: Vec<Pipe>,
    pub particles: ParticleSystem,
    pub environment: Environment,
    pub score: ScoreState,
    pub frames_since_last_pipe: u32,
    pub spawn_interval: u32,
    /// Frames since the session was created.
    pub frame: u64,
    /// White overlay opacity (0..=255) after a crash.
    pub flash: f64,
    /// Screen shake amplitude in world units.
    pub shake: f64,
    pub banner: Option<Banner>,
    /// Best score this process.
    pub high_score: f64,
    /// The run that just ended set a new high score.
    pub new_high_score: bool,
    pub leaderboard: Leaderboard,
    pub rainbow: bool,
    player_name: String,
    /// Text being typed while the name box is active.
    name_entry: Option<String>,
    cues: CueQueue,
}

impl Session {
    pub fn new<R: Rng>(config: GameConfig, mode: GameMode, rng: &mut R) -> Self {
        let vehicle = Vehicle::new(&config);
        let environment = Environment::new(rng, &config);
        let spawn_interval = config.pipes.initial_interval;
        Self {
            state: GameState::Start,
            mode,
            vehicle,
            pipes: Vec::new(),
            particles: ParticleSystem::new(),
            environment,
            score: ScoreState::new(),
            frames_since_last_pipe: 0,
            spawn_interval,
            frame: 0,
            flash: 0.0,
            shake: 0.0,
            banner: None,
            high_score: 0.0,
            new_high_score: false,
            leaderboard: Leaderboard::default(),
            rainbow: false,
            player_name: super::constants::DEFAULT_PLAYER_NAME.to_string(),
            name_entry: None,
            cues: CueQueue::new(),
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Text in the name box while it is active.
    pub fn name_entry(&self) -> Option<&str> {
        self.name_entry.as_deref()
    }

    pub fn set_player_name(&mut self, name: &str) {
        self.player_name = clean_name(name);
    }

    pub fn phase(&self) -> f64 {
        self.environment.phase()
    }

    pub fn is_night(&self) -> bool {
        timeline::is_night(self.phase())
    }

    /// Sounds queued since the last drain.
    pub fn drain_sounds(&mut self) -> Vec<SoundCue> {
        self.cues.drain()
    }

    fn set_state(&mut self, state: GameState) {
        if self.state != state {
            tracing::debug!("state: {} -> {}", self.state.name(), state.name());
        }
        self.state = state;
    }

    /// Fresh vehicle, no obstacles, zero score. Mode, leaderboard and
    /// cosmetics survive.
    fn reset_run(&mut self) {
        self.vehicle = Vehicle::new(&self.config);
        self.vehicle.park_on_runway(&self.config);
        self.pipes.clear();
        self.score = ScoreState::new();
        self.frames_since_last_pipe = 0;
        self.spawn_interval = self.config.pipes.initial_interval;
        self.banner = None;
        self.new_high_score = false;
    }

    fn center(&self) -> (f64, f64) {
        (self.config.world.width / 2.0, self.config.world.height / 2.0)
    }

    // ── Input ────────────────────────────────────────────────────────────

    /// The single primary key: start, take off, flap or restart.
    pub fn primary_action<R: Rng>(&mut self, rng: &mut R) {
        if self.name_entry.is_some() {
            self.commit_name();
            return;
        }
        match self.state {
            GameState::Start => self.start_run(rng),
            GameState::Playing(FlightPhase::Runway) => self.take_off(rng),
            GameState::Playing(FlightPhase::Airborne) => {
                if self
                    .vehicle
                    .flap(rng, &self.config.vehicle, &mut self.particles)
                {
                    self.cues.play(SoundCue::Flap);
                }
            }
            GameState::GameOver => self.restart(),
            GameState::WatchingAd { .. } => {}
        }
    }

    /// A click at world coordinates.
    pub fn pointer<R: Rng>(&mut self, x: f64, y: f64, rng: &mut R) {
        let (w, h) = (self.config.world.width, self.config.world.height);
        let hit = buttons::hit_test(self.state, w, h, x, y);
        match self.state {
            GameState::Start => match hit {
                Some(ButtonAction::NameBox) => self.begin_name_entry(),
                Some(ButtonAction::SelectMode(mode)) => {
                    self.select_mode(mode, rng);
                }
                Some(ButtonAction::ToggleRainbow) => self.toggle_rainbow(rng),
                _ => {
                    self.commit_name();
                    self.start_run(rng);
                }
            },
            GameState::Playing(_) => self.primary_action(rng),
            GameState::GameOver => match hit {
                Some(ButtonAction::Share) => {
                    self.share();
                }
                Some(ButtonAction::Challenge) => {
                    self.challenge();
                }
                Some(ButtonAction::Restart) => {
                    self.cues.play(SoundCue::Button);
                    self.restart();
                }
                Some(ButtonAction::Continue) => {
                    self.cues.play(SoundCue::Button);
                    self.continue_with_ad();
                }
                _ => {}
            },
            GameState::WatchingAd { .. } => {}
        }
    }

    /// Start screen → runway.
    pub fn start_run<R: Rng>(&mut self, rng: &mut R) {
        if self.state != GameState::Start {
            return;
        }
        self.reset_run();
        self.set_state(GameState::Playing(FlightPhase::Runway));
        let (cx, cy) = self.center();
        self.particles.emit(
            rng,
            Burst::explosion(cx, cy, 20, (5.0, 15.0), Rgba::GOLD.with_alpha(200)),
        );
        tracing::info!(
            "run started: mode {}, pilot {}",
            self.mode.name(),
            self.player_name
        );
    }

    fn take_off<R: Rng>(&mut self, rng: &mut R) {
        self.vehicle
            .takeoff(rng, &self.config.vehicle, &mut self.particles);
        self.cues.play(SoundCue::Flap);
        self.set_state(GameState::Playing(FlightPhase::Airborne));
    }

    /// Game over → runway with everything but the mode reset.
    pub fn restart(&mut self) {
        if self.state != GameState::GameOver {
            return;
        }
        self.reset_run();
        self.set_state(GameState::Playing(FlightPhase::Runway));
    }

    /// Game over → watching an ad. Returns whether the transition happened.
    pub fn continue_with_ad(&mut self) -> bool {
        if self.state != GameState::GameOver {
            return false;
        }
        self.set_state(GameState::WatchingAd { elapsed_ms: 0 });
        true
    }

    /// Change mode on the start screen. Does not change state.
    pub fn select_mode<R: Rng>(&mut self, mode: GameMode, rng: &mut R) -> bool {
        if self.state != GameState::Start {
            return false;
        }
        self.mode = mode;
        self.cues.play(SoundCue::Button);
        let (cx, cy) = self.center();
        self.particles
            .emit(rng, Burst::explosion(cx, cy, 20, (5.0, 15.0), mode.color()));
        tracing::debug!("mode selected: {}", mode.name());
        true
    }

    pub fn toggle_rainbow<R: Rng>(&mut self, rng: &mut R) {
        self.rainbow = !self.rainbow;
        self.cues.play(SoundCue::Button);
        let (cx, cy) = self.center();
        self.particles.emit(
            rng,
            Burst {
                color: BurstColor::Palette(&RAINBOW),
                ..Burst::explosion(cx, cy, 30, (5.0, 15.0), Rgba::WHITE)
            },
        );
    }

    /// Activate the name box (start screen only).
    pub fn begin_name_entry(&mut self) {
        if self.state != GameState::Start || self.name_entry.is_some() {
            return;
        }
        let current = if self.player_name == super::constants::DEFAULT_PLAYER_NAME {
            String::new()
        } else {
            self.player_name.clone()
        };
        self.name_entry = Some(current);
    }

    /// Printable ASCII only, up to the length cap.
    pub fn type_char(&mut self, c: char) {
        if let Some(entry) = self.name_entry.as_mut() {
            if (' '..='~').contains(&c) && entry.len() < super::constants::PLAYER_NAME_MAX_LEN {
                entry.push(c);
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(entry) = self.name_entry.as_mut() {
            entry.pop();
        }
    }

    /// Close the name box; an empty name reverts to the default.
    pub fn commit_name(&mut self) {
        if let Some(entry) = self.name_entry.take() {
            self.player_name = clean_name(&entry);
            tracing::debug!("pilot name: {}", self.player_name);
        }
    }

    /// Compose the share text and show it. Game over only.
    pub fn share(&mut self) -> Option<String> {
        if self.state != GameState::GameOver {
            return None;
        }
        let text = social::share_message(self.score.whole_score(), self.mode);
        self.show_social(&text);
        Some(text)
    }

    pub fn challenge(&mut self) -> Option<String> {
        if self.state != GameState::GameOver {
            return None;
        }
        let text = social::challenge_message(self.score.whole_score(), self.mode);
        self.show_social(&text);
        Some(text)
    }

    fn show_social(&mut self, text: &str) {
        self.cues.play(SoundCue::Button);
        self.banner = Some(Banner::new(text, Rgba::WHITE));
    }

    // ── Frame ────────────────────────────────────────────────────────────

    /// Advance one frame. `dt_ms` is the wall-clock time since the previous
    /// tick; only the ad countdown uses it.
    pub fn tick<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> TickEvents {
        let mut events = TickEvents::default();
        self.frame += 1;
        self.cues.tick();
        self.particles.update();
        self.decay_screen_signals();

        let playing = matches!(self.state, GameState::Playing(_));
        self.environment
            .update(rng, &self.config, self.score.game_speed, playing);

        match self.state {
            GameState::Start => self.tick_start_screen(rng),
            GameState::Playing(FlightPhase::Runway) => {
                self.vehicle.park_on_runway(&self.config);
                self.fade_banner(self.config.scoring.banner_fade_per_tick);
            }
            GameState::Playing(FlightPhase::Airborne) => self.tick_airborne(rng, &mut events),
            GameState::GameOver => self.update_wreck(rng),
            GameState::WatchingAd { elapsed_ms } => {
                self.update_wreck(rng);
                self.tick_ad(elapsed_ms.saturating_add(dt_ms), rng, &mut events);
            }
        }

        self.score.animate(&self.config.scoring);
        events
    }

    fn decay_screen_signals(&mut self) {
        self.flash = (self.flash - FLASH_DECAY).max(0.0);
        self.shake *= SHAKE_DECAY;
        if self.shake < SHAKE_FLOOR {
            self.shake = 0.0;
        }
    }

    fn fade_banner(&mut self, amount: f64) {
        if let Some(banner) = self.banner.as_mut() {
            banner.alpha -= amount;
            if banner.alpha <= 0.0 {
                self.banner = None;
            }
        }
    }

    fn tick_start_screen<R: Rng>(&mut self, rng: &mut R) {
        if self.frame % TAGLINE_INTERVAL_FRAMES == 0 {
            let line = social::TAGLINES[rng.gen_range(0..social::TAGLINES.len())];
            self.banner = Some(Banner::new(line, Rgba::WHITE));
        }
        self.fade_banner(TAGLINE_FADE);
    }

    /// Trail keeps fading after a crash.
    fn update_wreck<R: Rng>(&mut self, rng: &mut R) {
        let ctx = TickContext {
            config: &self.config,
            game_speed: self.score.game_speed,
            mode: self.mode.params(),
            frame: self.frame,
        };
        self.vehicle.update(&ctx, rng);
    }

    fn tick_airborne<R: Rng>(&mut self, rng: &mut R, events: &mut TickEvents) {
        let mode = self.mode.params();
        let ctx = TickContext {
            config: &self.config,
            game_speed: self.score.game_speed,
            mode,
            frame: self.frame,
        };
        events.weather = self.vehicle.update(&ctx, rng);

        self.frames_since_last_pipe += 1;
        if self.frames_since_last_pipe >= self.spawn_interval {
            self.pipes
                .push(Pipe::spawn(rng, &ctx, self.score.difficulty));
            self.frames_since_last_pipe = 0;
            self.spawn_interval = self.score.spawn_interval(&self.config.pipes);
            events.pipe_spawned = true;
        }

        let speed_factor = if mode.weather {
            self.vehicle.weather.pipe_speed_factor()
        } else {
            1.0
        };
        let hitbox = self.config.vehicle.hitbox_fraction;
        let mut crashed = false;
        let mut cleared_gaps = Vec::new();
        for pipe in &mut self.pipes {
            pipe.update(speed_factor, self.vehicle.x);
            if pipe.hits(&self.vehicle, hitbox) {
                crashed = true;
            }
            if !pipe.passed && pipe.is_cleared_by(&self.vehicle) {
                pipe.passed = true;
                cleared_gaps.push(pipe.gap_mid());
            }
        }
        self.pipes.retain(|p| !p.is_offscreen());

        let ground = ctx.ground_contact_y();
        if self.vehicle.y >= ground {
            self.vehicle.y = ground;
            crashed = true;
        }

        if let Some(event) = events.weather {
            self.on_weather(event);
        }
        if mode.weather {
            self.emit_warning_streaks(rng);
        }

        for gap_mid in cleared_gaps {
            let outcome = self.score_pass(gap_mid, rng);
            events.passes.push(outcome);
        }

        self.fade_banner(self.config.scoring.banner_fade_per_tick);

        if crashed {
            events.crashed = self.crash(rng);
        }
    }

    fn on_weather(&mut self, event: WeatherEvent) {
        match event {
            WeatherEvent::Warning(kind) => {
                self.banner = Some(Banner::new(kind.warning_text(), weather_color(kind)));
            }
            WeatherEvent::Began(kind) => tracing::debug!("weather active: {}", kind.name()),
            WeatherEvent::Ended(kind) => tracing::debug!("weather cleared: {}", kind.name()),
        }
    }

    /// Streaks blowing in from the right edge foreshadow an incoming effect.
    fn emit_warning_streaks<R: Rng>(&mut self, rng: &mut R) {
        let Some(kind) = self.vehicle.weather.warning().map(|e| e.kind) else {
            return;
        };
        if rng.gen::<f64>() >= WARNING_STREAK_CHANCE {
            return;
        }
        let w = &self.config.world;
        let y = uniform(rng, 50.0, w.height - w.ground_height - 50.0);
        self.particles.emit(
            rng,
            Burst {
                x: w.width,
                y,
                count: 1,
                vx: (-8.0, -5.0),
                vy: (-0.3, 0.3),
                size: (2.0, 4.0),
                y_jitter: 0.0,
                color: BurstColor::Solid(weather_color(kind).with_alpha(160)),
            },
        );
    }

    fn score_pass<R: Rng>(&mut self, gap_mid: f64, rng: &mut R) -> PassOutcome {
        let perfect = ScoreState::is_perfect(self.vehicle.y, gap_mid, &self.config.scoring);
        let outcome = self.score.register_pass(
            perfect,
            self.mode.params().points_multiplier,
            &self.config.scoring,
        );

        if let Some(message) = streak_message(outcome.streak) {
            self.banner = Some(Banner::new(message, Rgba::WHITE));
        }
        self.cues.play(SoundCue::Score);

        let color = if self.rainbow {
            BurstColor::Palette(&RAINBOW)
        } else if perfect {
            BurstColor::Solid(Rgba::GOLD)
        } else {
            BurstColor::Solid(Rgba::WHITE)
        };
        self.particles.emit(
            rng,
            Burst {
                x: self.vehicle.x + 20.0,
                y: self.vehicle.y - 20.0,
                count: 5,
                vx: (0.0, 2.0),
                vy: (-2.0, -0.5),
                size: (5.0, 10.0),
                y_jitter: 0.0,
                color,
            },
        );
        outcome
    }

    /// Kill the vehicle and enter game over. Returns false if it was
    /// already dead.
    fn crash<R: Rng>(&mut self, rng: &mut R) -> bool {
        if !self.vehicle.die(rng, &mut self.particles) {
            return false;
        }
        self.flash = 255.0;
        self.shake = 10.0;
        self.cues.play(SoundCue::Hit);
        self.cues
            .schedule(SoundCue::Die, self.config.session.death_sound_delay_ticks);
        self.set_state(GameState::GameOver);

        let final_score = self.score.score;
        if final_score > self.high_score {
            self.high_score = final_score;
            self.new_high_score = true;
            let name = self.player_name.clone();
            self.leaderboard.submit(&name, self.score.whole_score());
        }
        tracing::info!(
            "run ended: score {:.1}, {} passes ({} perfect), difficulty {}{}",
            final_score,
            self.score.passes,
            self.score.perfect_passes,
            self.score.difficulty,
            if self.new_high_score { ", new high score" } else { "" }
        );
        true
    }

    fn tick_ad<R: Rng>(&mut self, elapsed_ms: u64, rng: &mut R, events: &mut TickEvents) {
        if elapsed_ms < self.config.session.ad_duration_ms {
            self.state = GameState::WatchingAd { elapsed_ms };
            return;
        }
        let mid = self.config.world.height / 2.0;
        self.vehicle.revive(mid);
        self.particles.emit(
            rng,
            Burst::explosion(
                self.vehicle.x,
                mid,
                30,
                (5.0, 15.0),
                Rgba::rgba(100, 255, 100, 200),
            ),
        );
        self.set_state(GameState::Playing(FlightPhase::Airborne));
        events.revived = true;
    }

    /// Seconds left on the ad, rounded down.
    pub fn ad_seconds_remaining(&self) -> Option<u64> {
        match self.state {
            GameState::WatchingAd { elapsed_ms } => Some(
                self.config
                    .session
                    .ad_duration_ms
                    .saturating_sub(elapsed_ms)
                    / 1000,
            ),
            _ => None,
        }
    }

    /// Ad progress in `[0, 1]`.
    pub fn ad_progress(&self) -> Option<f64> {
        match self.state {
            GameState::WatchingAd { elapsed_ms } => {
                let total = self.config.session.ad_duration_ms.max(1) as f64;
                Some((elapsed_ms as f64 / total).min(1.0))
            }
            _ => None,
        }
    }

    /// Body color, cycling in rainbow mode.
    pub fn vehicle_color(&self) -> Rgba {
        if self.rainbow {
            RAINBOW[((self.frame / RAINBOW_FRAMES_PER_COLOR) % RAINBOW.len() as u64) as usize]
        } else {
            crate::flight::vehicle::MAIN_BLUE
        }
    }

    /// Title color, blending between neighbouring rainbow colors.
    pub fn title_color(&self) -> Rgba {
        if !self.rainbow {
            return Rgba::GOLD;
        }
        let t = self.frame as f64 * 0.05;
        let index = t.floor() as usize % RAINBOW.len();
        let next = (index + 1) % RAINBOW.len();
        RAINBOW[index].lerp(RAINBOW[next], t.fract())
    }
}

fn weather_color(kind: WeatherKind) -> Rgba {
    match kind {
        WeatherKind::AirPocket => Rgba::rgb(150, 180, 255),
        WeatherKind::Headwind => Rgba::rgb(220, 220, 220),
        WeatherKind::Tailwind => Rgba::rgb(255, 230, 150),
    }
}

/// Keep printable ASCII, cap the length, and fall back to the default name.
fn clean_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| (' '..='~').contains(c))
        .take(super::constants::PLAYER_NAME_MAX_LEN)
        .collect();
    if cleaned.trim().is_empty() {
        super::constants::DEFAULT_PLAYER_NAME.to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn session() -> (Session, ChaCha8Rng) {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let s = Session::new(GameConfig::default(), GameMode::Normal, &mut rng);
        (s, rng)
    }

    #[test]
    fn test_start_goes_to_runway_then_airborne() {
        let (mut s, mut rng) = session();
        assert_eq!(s.state, GameState::Start);
        s.primary_action(&mut rng);
        assert_eq!(s.state, GameState::Playing(FlightPhase::Runway));
        assert!(s.particles.len() >= 20);

        s.tick(16, &mut rng);
        assert!(s.pipes.is_empty());
        s.primary_action(&mut rng);
        assert_eq!(s.state, GameState::Playing(FlightPhase::Airborne));
        assert!(s.vehicle.velocity < 0.0);
    }

    #[test]
    fn test_runway_holds_vehicle_still() {
        let (mut s, mut rng) = session();
        s.primary_action(&mut rng);
        let y = s.vehicle.y;
        for _ in 0..200 {
            s.tick(16, &mut rng);
        }
        assert_eq!(s.vehicle.y, y);
        assert!(s.pipes.is_empty());
        assert_eq!(s.state, GameState::Playing(FlightPhase::Runway));
    }

    #[test]
    fn test_mode_selection_keeps_state() {
        let (mut s, mut rng) = session();
        assert!(s.select_mode(GameMode::Impossible, &mut rng));
        assert_eq!(s.state, GameState::Start);
        assert_eq!(s.mode, GameMode::Impossible);
        assert_eq!(s.drain_sounds(), vec![SoundCue::Button]);
    }

    #[test]
    fn test_falling_to_ground_ends_run() {
        let (mut s, mut rng) = session();
        s.primary_action(&mut rng);
        s.primary_action(&mut rng);
        let mut crashed = false;
        for _ in 0..2000 {
            if s.tick(16, &mut rng).crashed {
                crashed = true;
                break;
            }
        }
        assert!(crashed);
        assert_eq!(s.state, GameState::GameOver);
        assert!(!s.vehicle.alive);
        assert_eq!(s.flash, 255.0);
    }

    #[test]
    fn test_death_sound_is_delayed() {
        let (mut s, mut rng) = session();
        s.primary_action(&mut rng);
        s.primary_action(&mut rng);
        while s.state != GameState::GameOver {
            s.tick(16, &mut rng);
        }
        let sounds = s.drain_sounds();
        assert!(sounds.contains(&SoundCue::Hit));
        assert!(!sounds.contains(&SoundCue::Die));

        let delay = s.config().session.death_sound_delay_ticks;
        for _ in 0..delay - 1 {
            s.tick(16, &mut rng);
        }
        assert!(!s.drain_sounds().contains(&SoundCue::Die));
        s.tick(16, &mut rng);
        assert_eq!(s.drain_sounds(), vec![SoundCue::Die]);
    }

    #[test]
    fn test_name_entry_rules() {
        let (mut s, mut rng) = session();
        s.begin_name_entry();
        assert_eq!(s.name_entry(), Some(""));
        for c in "Amelia Earhart".chars() {
            s.type_char(c);
        }
        s.type_char('\u{e9}');
        assert_eq!(s.name_entry(), Some("Amelia Ear"));
        s.backspace();
        // primary key commits instead of starting
        s.primary_action(&mut rng);
        assert_eq!(s.player_name(), "Amelia Ea");
        assert_eq!(s.state, GameState::Start);

        s.begin_name_entry();
        for _ in 0..20 {
            s.backspace();
        }
        s.commit_name();
        assert_eq!(s.player_name(), "Player");
    }

    #[test]
    fn test_pointer_on_start_screen_hits_buttons_first() {
        let (mut s, mut rng) = session();
        let rainbow = buttons::start_screen_buttons(400.0)
            .into_iter()
            .find(|b| b.action == ButtonAction::ToggleRainbow)
            .unwrap();
        s.pointer(rainbow.x, rainbow.y, &mut rng);
        assert!(s.rainbow);
        assert_eq!(s.state, GameState::Start);

        s.pointer(200.0, 40.0, &mut rng);
        assert_eq!(s.state, GameState::Playing(FlightPhase::Runway));
    }

    #[test]
    fn test_share_only_after_game_over() {
        let (mut s, mut rng) = session();
        assert!(s.share().is_none());
        s.primary_action(&mut rng);
        s.primary_action(&mut rng);
        while s.state != GameState::GameOver {
            s.tick(16, &mut rng);
        }
        let text = s.share().unwrap();
        assert!(text.contains("NORMAL"));
        assert_eq!(s.banner.as_ref().map(|b| b.text.as_str()), Some(text.as_str()));
    }

    #[test]
    fn test_clean_name() {
        assert_eq!(clean_name("   "), "Player");
        assert_eq!(clean_name("Bessie Coleman"), "Bessie Col");
    }

    #[test]
    fn test_rainbow_vehicle_cycles() {
        let (mut s, _) = session();
        assert_eq!(s.vehicle_color(), crate::flight::vehicle::MAIN_BLUE);
        s.rainbow = true;
        s.frame = 0;
        assert_eq!(s.vehicle_color(), RAINBOW[0]);
        s.frame = 5;
        assert_eq!(s.vehicle_color(), RAINBOW[1]);
        s.frame = 35;
        assert_eq!(s.vehicle_color(), RAINBOW[0]);
    }
}
