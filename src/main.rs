//! FlyVibe: an endless flyer for the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use flyvibe::audio::{AudioSink, BellAudio, SilentAudio};
use flyvibe::core::{GameConfig, GameMode, Session};
use flyvibe::input::{apply, map_key, map_mouse};
use flyvibe::ui::flight_scene::render_flyvibe;
use flyvibe::utils::{self, build_info, logging};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(author, version, long_version = build_info::LONG_VERSION, about = "FlyVibe - an endless flyer for the terminal", long_about = None)]
struct Args {
    /// Game mode: normal, extreme, stormy or impossible
    #[arg(short, long, default_value = "normal")]
    mode: GameMode,

    /// Pilot name shown on the leaderboard
    #[arg(long)]
    name: Option<String>,

    /// Config file (defaults to ~/.flyvibe/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Ring the terminal bell on crashes
    #[arg(long, default_value_t = false)]
    bell: bool,

    /// Print the effective config as TOML and exit
    #[arg(long, default_value_t = false)]
    print_config: bool,
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<()> {
    let args = Args::parse();

    let log_path = utils::log_path().context("could not create ~/.flyvibe")?;
    logging::init_file_logging(&log_path)
        .with_context(|| format!("could not open log file {}", log_path.display()))?;
    tracing::info!("flyvibe {} starting", build_info::LONG_VERSION);

    let config_path = match args.config {
        Some(path) => path,
        None => utils::default_config_path().context("could not resolve config path")?,
    };
    let config = GameConfig::load_or_default(&config_path);

    if args.print_config {
        print!("{}", config.to_toml());
        return Ok(());
    }

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut session = Session::new(config, args.mode, &mut rng);
    if let Some(name) = &args.name {
        session.set_player_name(name);
    }

    let mut audio: Box<dyn AudioSink> = if args.bell {
        Box::new(BellAudio)
    } else {
        Box::new(SilentAudio)
    };
    audio.start_background_loop();

    let mut terminal = setup_terminal().context("failed to initialise the terminal")?;
    let result = run(&mut terminal, &mut session, &mut rng, audio.as_mut());
    restore_terminal(&mut terminal).context("failed to restore the terminal")?;

    tracing::info!("exiting; best score {:.0}", session.high_score);
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Fixed-rate loop: draw, wait for input until the next tick is due, tick.
fn run(terminal: &mut Tui, session: &mut Session, rng: &mut ChaCha8Rng, audio: &mut dyn AudioSink) -> Result<()> {
    let frame_time = Duration::from_millis(session.config().session.frame_ms.max(1));
    let (world_w, world_h) = {
        let w = &session.config().world;
        (w.width, w.height)
    };
    let mut play = Rect::default();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            play = render_flyvibe(frame, area, session);
        })?;

        let timeout = frame_time.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let action = match event::read()? {
                Event::Key(key) => map_key(key, session.name_entry().is_some()),
                Event::Mouse(mouse) => map_mouse(mouse, play, world_w, world_h),
                _ => None,
            };
            if let Some(action) = action {
                if !apply(session, action, rng) {
                    return Ok(());
                }
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= frame_time {
            last_tick = Instant::now();
            session.tick(elapsed.as_millis() as u64, rng);
            for cue in session.drain_sounds() {
                audio.play(cue);
            }
        }
    }
}
