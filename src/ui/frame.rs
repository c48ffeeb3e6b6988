//! Character frame buffer and screen painter
//!
//! The scene is composed into a plain cell grid first and painted to the
//! terminal afterwards, keeping layout logic testable without a tty.

use std::io::{Stdout, Write, stdout};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, ResetColor, SetForegroundColor};

/// Semantic color of a cell; resolved to a terminal color at paint time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Default,
    /// Backdrop while the scene is dimmed during a near-flame drag
    Dim,
    Paper,
    Flame,
    Ember,
    Smoke,
    Hint,
    Accent,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Default => Color::Grey,
            Tone::Dim => Color::DarkGrey,
            Tone::Paper => Color::White,
            Tone::Flame => Color::Yellow,
            Tone::Ember => Color::DarkYellow,
            Tone::Smoke => Color::DarkGrey,
            Tone::Hint => Color::DarkGrey,
            Tone::Accent => Color::Cyan,
        }
    }
}

/// One composed frame of the scene
#[derive(Debug)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<(char, Tone)>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![(' ', Tone::Default); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Writes one cell; coordinates outside the frame are clipped
    pub fn put(&mut self, x: i32, y: i32, ch: char, tone: Tone) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.cells[y as usize * self.width as usize + x as usize] = (ch, tone);
    }

    /// Writes a string starting at (x, y), clipping at the frame edge
    pub fn put_str(&mut self, x: i32, y: i32, text: &str, tone: Tone) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i as i32, y, ch, tone);
        }
    }

    /// Writes a string centered on the given row
    pub fn put_centered(&mut self, y: i32, text: &str, tone: Tone) {
        let x = (self.width as i32 - text.chars().count() as i32) / 2;
        self.put_str(x, y, text, tone);
    }

    pub fn cell(&self, x: u16, y: u16) -> (char, Tone) {
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Plain-text rendering of a row, for tests
    #[cfg(test)]
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width).map(|x| self.cell(x, y).0).collect()
    }
}

/// Paints composed frames to the terminal
pub struct ScreenPainter {
    out: Stdout,
}

impl ScreenPainter {
    pub fn new() -> Self {
        Self { out: stdout() }
    }

    /// Writes the whole frame, grouping runs of equal tone
    pub fn paint(&mut self, frame: &Frame) -> std::io::Result<()> {
        let mut current_tone: Option<Tone> = None;
        for y in 0..frame.height() {
            queue!(self.out, MoveTo(0, y))?;
            let mut run = String::new();
            for x in 0..frame.width() {
                let (ch, tone) = frame.cell(x, y);
                if current_tone != Some(tone) {
                    if !run.is_empty() {
                        self.out.write_all(run.as_bytes())?;
                        run.clear();
                    }
                    queue!(self.out, SetForegroundColor(tone.color()))?;
                    current_tone = Some(tone);
                }
                run.push(ch);
            }
            self.out.write_all(run.as_bytes())?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }
}

impl Default for ScreenPainter {
    fn default() -> Self {
        Self::new()
    }
}
