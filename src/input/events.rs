//! Raw terminal events to application input events
//!
//! Normalizes crossterm's event stream into the small vocabulary the
//! controller understands. Anything unmapped is dropped here.

use crossterm::event::{
    Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Application-level input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Printable character typed into the card
    Char(char),
    /// Delete the last character
    Backspace,
    /// The commit key (Enter); doubles as newline while composing
    CommitKey,
    /// Prompt shortcut F1-F3, zero-based index
    Prompt(usize),
    /// Toggle the fire-crackle sound (Ctrl+S)
    ToggleSound,
    /// Leave the application (Esc or Ctrl+C)
    Quit,
    /// Left button pressed at (column, row)
    PointerDown(u16, u16),
    /// Pointer moved with the left button held
    PointerMove(u16, u16),
    /// Left button released at (column, row)
    PointerUp(u16, u16),
}

/// Maps a raw terminal event; None for anything the app ignores
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return match key.code {
                    KeyCode::Char('c') | KeyCode::Char('q') => Some(InputEvent::Quit),
                    KeyCode::Char('s') => Some(InputEvent::ToggleSound),
                    _ => None,
                };
            }
            match key.code {
                KeyCode::Enter => Some(InputEvent::CommitKey),
                KeyCode::Backspace => Some(InputEvent::Backspace),
                KeyCode::Esc => Some(InputEvent::Quit),
                KeyCode::F(n @ 1..=3) => Some(InputEvent::Prompt(n as usize - 1)),
                KeyCode::Char(c) => Some(InputEvent::Char(c)),
                _ => None,
            }
        }
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            ..
        }) => match kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(InputEvent::PointerDown(*column, *row))
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                Some(InputEvent::PointerMove(*column, *row))
            }
            MouseEventKind::Up(MouseButton::Left) => Some(InputEvent::PointerUp(*column, *row)),
            _ => None,
        },
        _ => None,
    }
}
