//! letgo - write a thought, drag it into the fire, let it go
//!
//! Entry point: sets up file logging, loads the release history, holds
//! the terminal in interactive mode, and runs the single-threaded event
//! loop that drives the ritual.

mod app;
mod config;
mod domain;
mod input;
mod platform;
mod store;
mod ui;

use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::app::controller::SessionController;
use crate::config::TICK_INTERVAL;
use crate::input::{InputEvent, map_event};
use crate::platform::{NoHaptics, TerminalBell, TerminalGuard};
use crate::store::FileKeyValue;
use crate::ui::ScreenPainter;
use crate::ui::scene;

fn main() -> Result<()> {
    init_logging();

    let store = FileKeyValue::at_user_data_dir();
    let mut controller = SessionController::new(store, NoHaptics, TerminalBell);

    let terminal = TerminalGuard::new().context("failed to initialize terminal")?;
    let mut painter = ScreenPainter::new();
    tracing::info!("letgo started");

    'ritual: loop {
        let now = Instant::now();
        let (width, height) = terminal.size().context("failed to query terminal size")?;
        let layout = scene::layout(width, height);

        // Drain everything the user did since the last tick
        while crossterm::event::poll(Duration::from_millis(0))? {
            let event = crossterm::event::read()?;
            if let Some(input) = map_event(&event) {
                if matches!(input, InputEvent::Quit) {
                    break 'ritual;
                }
                controller.handle_input(input, &layout, now);
            }
        }

        controller.tick(now);
        let frame = scene::draw(&controller.scene_view(now), width, height);
        painter.paint(&frame)?;

        // Sleep until the next tick, waking early on input
        crossterm::event::poll(TICK_INTERVAL)?;
    }

    tracing::info!(releases = controller.release_count(), "letgo closed");
    Ok(())
}

/// Routes tracing to a file under the data directory; the terminal
/// owns stdout. Logging is an enhancement: any setup failure simply
/// leaves it off.
fn init_logging() {
    let Some(dir) = dirs::data_dir().map(|base| base.join("letgo")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(dir.join("letgo.log")) else {
        return;
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("letgo=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();
}
