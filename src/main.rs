//! Blockfall terminal runner (default binary).
//!
//! Owns the clock and the terminal. Each frame it reads keys, feeds the mapped
//! commands and the current time to the engine, renders the new snapshot and
//! rings the bell for level-ups and game over.

mod cli;

use std::fs::OpenOptions;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use crossterm::event::{self, Event};
use log::{info, LevelFilter};
use simplelog::WriteLogger;

use blockfall::core::{cues_between, Cue, GameState};
use blockfall::input::{map_key, should_quit};
use blockfall::term::{FrameBuffer, GameView, Screen, Viewport};
use blockfall::types::FRAME_MS;

use cli::{parse_args, Command, Config, LOG_ENV, USAGE};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(&args, std::env::var(LOG_ENV).ok())? {
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        Command::Play(config) => config,
    };

    if let Some(path) = &config.log_file {
        init_file_logger(path)?;
    }
    info!("starting with seed {}", config.seed);

    let mut screen = Screen::stdout();
    screen.enter()?;

    let result = run(&mut screen, &config);

    // Always try to restore terminal state.
    let _ = screen.leave();
    info!("exit");
    result
}

/// Append log records to `path`; stdout belongs to the game screen.
fn init_file_logger(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), file)
        .map_err(|e| anyhow!("install logger: {}", e))
}

fn run(screen: &mut Screen, config: &Config) -> Result<()> {
    let epoch = Instant::now();
    let now_ms = || epoch.elapsed().as_millis() as u64;
    let frame = Duration::from_millis(FRAME_MS as u64);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut game = GameState::new(config.seed, now_ms());
    let mut prev = game.snapshot();

    loop {
        let frame_start = Instant::now();

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&prev, Viewport::new(w, h), &mut fb);
        screen.draw(&fb)?;

        // Input until the next frame is due.
        let mut timeout = frame;
        while event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    for action in map_key(key, game.phase()) {
                        game = game.apply_action(action, now_ms());
                    }
                }
                Event::Resize(_, _) => screen.invalidate(),
                _ => {}
            }
            timeout = frame.saturating_sub(frame_start.elapsed());
        }

        game = game.tick(now_ms());

        let snap = game.snapshot();
        for cue in cues_between(&prev, &snap) {
            match cue {
                Cue::LevelUp { level } => info!("cue: level {}", level),
                Cue::GameOver => info!("cue: game over, score {}", snap.score),
            }
            screen.bell()?;
        }
        prev = snap;
    }
}
