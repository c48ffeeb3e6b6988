//! Scene layout and per-phase rendering
//!
//! Everything in here is cosmetic: the forest backdrop, the paper card,
//! the flame, the burn, the breathing circle. Layout is computed first
//! so the controller can map pointer gestures onto the same rectangles
//! the renderer draws.

use crate::app::state::Phase;
use crate::domain::breathing::BreathPhase;
use crate::domain::core::{Rect, Vec2};
use crate::ui::frame::{Frame, Tone};

/// Fixed scene rectangles for a given terminal size, in cell units
#[derive(Debug, Clone, Copy)]
pub struct SceneLayout {
    /// Paper card at rest
    pub card: Rect,
    /// Flame region at the bottom center
    pub flame: Rect,
}

/// Computes the scene layout for a terminal of `width` x `height` cells
pub fn layout(width: u16, height: u16) -> SceneLayout {
    let w = width as f32;
    let h = height as f32;
    let card_w = (w - 6.0).clamp(20.0, 44.0);
    let card = Rect::new(((w - card_w) / 2.0).floor(), 5.0, card_w, 9.0);
    let flame = Rect::new(((w - 9.0) / 2.0).floor(), h - 6.0, 9.0, 4.0);
    SceneLayout { card, flame }
}

/// Everything the renderer needs for one frame, already decided
/// by the controller
#[derive(Debug, Clone)]
pub struct SceneView {
    pub phase: Phase,
    pub text: String,
    pub count: u64,
    pub sound_enabled: bool,
    /// Card displacement from rest, in cells (drag or snap-back)
    pub card_offset: (i32, i32),
    pub dragging: bool,
    pub near_target: bool,
    pub burn_progress: f32,
    pub smoke_visible: bool,
    pub breath: Option<(BreathPhase, f32)>,
    pub quote: Option<&'static str>,
    pub write_again_visible: bool,
    pub prompts: Vec<&'static str>,
    pub show_drag_hint: bool,
    pub show_commit_hint: bool,
}

/// Composes the full scene for the current phase
pub fn draw(view: &SceneView, width: u16, height: u16) -> Frame {
    let mut frame = Frame::new(width, height);
    let scene = layout(width, height);
    let dimmed = view.near_target;

    draw_backdrop(&mut frame, dimmed);
    draw_header(&mut frame, view);

    match view.phase {
        Phase::Composing => {
            draw_flame(&mut frame, &scene.flame, view.near_target);
            draw_composing(&mut frame, &scene, view);
        }
        Phase::Releasing => {
            draw_flame(&mut frame, &scene.flame, true);
            draw_burning(&mut frame, &scene, view);
        }
        Phase::Released => draw_released(&mut frame, view),
    }
    frame
}

fn backdrop_tone(dimmed: bool) -> Tone {
    if dimmed { Tone::Dim } else { Tone::Default }
}

/// Forest floor, tree line, fireflies
fn draw_backdrop(frame: &mut Frame, dimmed: bool) {
    let tone = backdrop_tone(dimmed);
    let w = frame.width() as i32;
    let h = frame.height() as i32;

    for x in 0..w {
        frame.put(x, h - 2, '_', tone);
    }
    // Two staggered tree rows
    let mut x = 2;
    while x < w - 2 {
        frame.put(x, h - 3, '^', tone);
        frame.put(x, h - 4, '^', tone);
        frame.put(x + 4, h - 3, '^', tone);
        x += 9;
    }
    // Fireflies at fixed pseudo-random spots; their twinkle is left
    // to the imagination
    let firefly_tone = if dimmed { Tone::Dim } else { Tone::Hint };
    for i in 0..10i32 {
        let fx = (i * 13 + 5) % w.max(1);
        let fy = 3 + (i * 7) % (h - 10).max(1);
        frame.put(fx, fy, '.', firefly_tone);
    }
}

fn draw_header(frame: &mut Frame, view: &SceneView) {
    if view.count > 0 {
        frame.put_str(
            1,
            0,
            &format!("thoughts released: {}", view.count),
            Tone::Hint,
        );
    }
    let sound = if view.sound_enabled {
        "[ sound on  ^S ]"
    } else {
        "[ sound off ^S ]"
    };
    let x = frame.width() as i32 - sound.chars().count() as i32 - 1;
    frame.put_str(x, 0, sound, Tone::Hint);
}

/// The flame, excited while the card hovers near it
fn draw_flame(frame: &mut Frame, flame: &Rect, excited: bool) {
    let art: [&str; 4] = if excited {
        ["  ( ) (  ", " ) ( ) ( ", "(  ) (  )", " ======= "]
    } else {
        ["    )    ", "   ( (   ", "  )   (  ", " ======= "]
    };
    let x = flame.x as i32;
    let y = flame.y as i32;
    for (row, line) in art.iter().enumerate() {
        let tone = if row == art.len() - 1 {
            Tone::Ember
        } else {
            Tone::Flame
        };
        frame.put_str(x, y + row as i32, line, tone);
    }
    if excited {
        // Sparks above an excited flame
        frame.put(x + 1, y - 1, '*', Tone::Ember);
        frame.put(x + 5, y - 2, '*', Tone::Ember);
        frame.put(x + 7, y - 1, '*', Tone::Ember);
    }
}

fn draw_composing(frame: &mut Frame, scene: &SceneLayout, view: &SceneView) {
    let card = scene.card.translated(Vec2::new(
        view.card_offset.0 as f32,
        view.card_offset.1 as f32,
    ));

    if !view.prompts.is_empty() {
        for (i, prompt) in view.prompts.iter().enumerate() {
            frame.put_centered(1 + i as i32, &format!("F{}  {}", i + 1, prompt), Tone::Hint);
        }
    }

    draw_card(frame, &card, &view.text, view.dragging);

    if view.show_drag_hint {
        frame.put_centered(
            card.bottom() as i32 + 1,
            "drag the card into the fire to release",
            Tone::Accent,
        );
    }
    if view.show_commit_hint {
        frame.put_centered(
            frame.height() as i32 - 1,
            "press Enter twice to release",
            Tone::Hint,
        );
    }
}

/// The paper card with its spiral binding and ruled text area
fn draw_card(frame: &mut Frame, card: &Rect, text: &str, dragging: bool) {
    let x = card.x as i32;
    let y = card.y as i32;
    let w = card.w as i32;
    let h = card.h as i32;
    let tone = if dragging { Tone::Accent } else { Tone::Paper };

    for col in 0..w {
        // Spiral holes along the top edge
        let top = if col % 4 == 2 { 'o' } else { '-' };
        frame.put(x + col, y, top, tone);
        frame.put(x + col, y + h - 1, '-', tone);
    }
    for row in 0..h {
        frame.put(x, y + row, '|', tone);
        frame.put(x + w - 1, y + row, '|', tone);
    }
    frame.put(x, y, '+', tone);
    frame.put(x + w - 1, y, '+', tone);
    frame.put(x, y + h - 1, '+', tone);
    frame.put(x + w - 1, y + h - 1, '+', tone);

    let inner_w = (w - 4).max(1) as usize;
    if text.is_empty() {
        frame.put_str(x + 2, y + 2, "Write what you want to let go...", Tone::Hint);
        return;
    }
    for (i, line) in wrap_text(text, inner_w).iter().take((h - 2) as usize).enumerate() {
        frame.put_str(x + 2, y + 1 + i as i32, line, Tone::Paper);
    }
}

fn draw_burning(frame: &mut Frame, scene: &SceneLayout, view: &SceneView) {
    let p = view.burn_progress.clamp(0.0, 1.0);
    let card = &scene.card;

    // The card shrinks toward its center as it chars
    let w = (card.w * (1.0 - p)).max(4.0) as i32;
    let h = (card.h * (1.0 - p)).max(2.0) as i32;
    let x = (card.x + (card.w - w as f32) / 2.0) as i32;
    let y = (card.y + (card.h - h as f32) / 2.0) as i32;

    let char_glyph = if p < 0.4 { '-' } else { '#' };
    let tone = if p < 0.6 { Tone::Ember } else { Tone::Smoke };
    for col in 0..w {
        frame.put(x + col, y, char_glyph, tone);
        frame.put(x + col, y + h - 1, char_glyph, tone);
    }
    for row in 0..h {
        frame.put(x, y + row, char_glyph, tone);
        frame.put(x + w - 1, y + row, char_glyph, tone);
    }

    // Text fades as it burns
    if p < 0.6 {
        let inner_w = (w - 4).max(1) as usize;
        for (i, line) in wrap_text(&view.text, inner_w)
            .iter()
            .take((h - 2).max(0) as usize)
            .enumerate()
        {
            frame.put_str(x + 2, y + 1 + i as i32, line, Tone::Smoke);
        }
    }

    // Flying embers around the card
    for i in 0..8i32 {
        let ex = x + (i * 5 + 3) % w.max(1);
        let ey = y - 1 - (i % 3);
        frame.put(ex, ey, '*', Tone::Ember);
    }

    if view.smoke_visible {
        for i in 0..4i32 {
            let sx = x + (i * 7 + 2) % w.max(1);
            frame.put(sx, y - 2 - i, '~', Tone::Smoke);
        }
    }
}

fn draw_released(frame: &mut Frame, view: &SceneView) {
    let w = frame.width() as i32;
    let h = frame.height() as i32;
    let cx = w / 2;
    let cy = h / 2 - 1;

    frame.put_centered(2, "It's gone.", Tone::Paper);
    frame.put_centered(3, "Take a moment to breathe.", Tone::Hint);

    if let Some((phase, progress)) = view.breath {
        let radius = breathing_radius(phase, progress);
        draw_ring(frame, cx, cy, radius);
        frame.put_centered(cy, phase.instruction(), Tone::Paper);
    }

    if let Some(quote) = view.quote {
        frame.put_centered(h - 5, &format!("\"{}\"", quote), Tone::Accent);
    }
    if view.count > 1 {
        frame.put_centered(
            h - 3,
            &format!("{} thoughts released so far", view.count),
            Tone::Hint,
        );
    }
    if view.write_again_visible {
        frame.put_centered(h - 2, "press Enter to write again", Tone::Accent);
    }
}

/// Circle radius for the breathing animation, in rows
fn breathing_radius(phase: BreathPhase, progress: f32) -> f32 {
    match phase {
        BreathPhase::BreatheIn => 2.0 + 2.0 * progress,
        BreathPhase::Hold => 4.0,
        BreathPhase::BreatheOut => 4.0 - 2.0 * progress,
        BreathPhase::Rest => 2.0,
    }
}

/// Approximate circle from cell samples; doubled on x for cell aspect
fn draw_ring(frame: &mut Frame, cx: i32, cy: i32, radius: f32) {
    let steps = 48;
    for i in 0..steps {
        let angle = i as f32 / steps as f32 * std::f32::consts::TAU;
        let x = cx + (radius * 2.0 * angle.cos()).round() as i32;
        let y = cy + (radius * angle.sin()).round() as i32;
        frame.put(x, y, 'o', Tone::Accent);
    }
}

/// Greedy word wrap honoring embedded newlines; long words hard-break
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        let mut current = String::new();
        for word in raw_line.split(' ') {
            let mut word = word;
            // Hard-break words wider than the card
            while word.chars().count() > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let split: String = word.chars().take(width).collect();
                lines.push(split.clone());
                word = &word[split.len()..];
            }
            let needed = word.chars().count() + if current.is_empty() { 0 } else { 1 };
            if current.chars().count() + needed > width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }
    lines
}
