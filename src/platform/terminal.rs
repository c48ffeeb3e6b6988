//! Terminal session management
//!
//! RAII guard around the terminal modes the ritual needs: raw input,
//! the alternate screen, mouse capture for the drag gesture, and a
//! hidden cursor. Drop restores everything best-effort so a panic or
//! early return never strands the user's shell.

use std::io::{Write, stdout};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode, size,
};
use thiserror::Error;

/// Terminal setup errors; the only failures that abort startup
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("failed to enter raw mode: {0}")]
    RawModeFailed(#[source] std::io::Error),

    #[error("failed to configure terminal screen: {0}")]
    ScreenSetupFailed(#[source] std::io::Error),

    #[error("failed to query terminal size: {0}")]
    SizeQueryFailed(#[source] std::io::Error),
}

/// Holds the terminal in interactive mode for its lifetime
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode().map_err(TerminalError::RawModeFailed)?;
        if let Err(err) = execute!(stdout(), EnterAlternateScreen, EnableMouseCapture, Hide) {
            // Leave raw mode again so the shell stays usable
            let _ = disable_raw_mode();
            return Err(TerminalError::ScreenSetupFailed(err));
        }
        tracing::debug!("terminal configured for interactive session");
        Ok(Self)
    }

    /// Current terminal size as (columns, rows)
    pub fn size(&self) -> Result<(u16, u16), TerminalError> {
        size().map_err(TerminalError::SizeQueryFailed)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = stdout();
        let _ = execute!(out, DisableMouseCapture, LeaveAlternateScreen, Show);
        let _ = disable_raw_mode();
        let _ = out.flush();
        tracing::debug!("terminal restored");
    }
}
