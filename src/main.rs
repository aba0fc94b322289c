//! Gridfall runner (default binary).
//!
//! Wires the demo engine to a terminal surface: poll input with a
//! timeout until the next frame deadline, latch key presses, run one
//! driver frame, repeat until the engine exits.

use std::fs::File;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event};
use log::LevelFilter;
use simplelog::WriteLogger;

use gridfall::driver::{DriverState, FrameDriver};
use gridfall::engine::DemoEngine;
use gridfall::input::handle_key_event;
use gridfall::surface::{Settings, TermSurface};
use gridfall::types::Timestamp;

fn main() -> Result<()> {
    init_logging()?;
    let settings = Settings::from_env();
    log::info!("starting: {:?}", settings);

    let mut term = TermSurface::new(&settings);
    term.enter()?;

    let result = run(&mut term, &settings);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TermSurface, settings: &Settings) -> Result<()> {
    let (cols, rows) = (settings.cols, settings.rows);
    let mut driver = FrameDriver::start(now_ms(), |t| DemoEngine::new(cols, rows, t));

    let frame = Duration::from_millis(settings.tick_ms);
    let mut last_tick = Instant::now();

    loop {
        // Input with timeout until the next frame deadline.
        let timeout = frame
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = handle_key_event(key) {
                    driver.latch(action);
                }
            }
        }

        if last_tick.elapsed() >= frame {
            last_tick = Instant::now();
            if driver.frame(now_ms(), term)? == DriverState::Stopped {
                return Ok(());
            }
        }
    }
}

fn now_ms() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as Timestamp
}

fn init_logging() -> Result<()> {
    if let Ok(path) = std::env::var("GRIDFALL_LOG") {
        WriteLogger::init(
            LevelFilter::Info,
            simplelog::Config::default(),
            File::create(path)?,
        )?;
    }
    Ok(())
}
