//! Session controller and coordination layer
//!
//! The controller orchestrates between input, domain, store, and
//! presentation. It owns the session, routes every event through the
//! pure state machine, and performs the side effects (persistence,
//! haptics, audio, timers) when a transition actually happens. All
//! device-facing dependencies come in as capability traits so the whole
//! flow is testable without a terminal.

use std::time::Instant;

use rand::seq::SliceRandom;

use crate::app::sequencer::{BurnEvent, BurnSequencer};
use crate::app::state::{Phase, Session, SessionEvent, SessionMachine};
use crate::config::{HAPTIC_PATTERN_MS, PROMPTS, QUOTES, VISIBLE_PROMPTS, WRITE_AGAIN_DELAY};
use crate::domain::breathing::BreathingCycle;
use crate::domain::core::Vec2;
use crate::domain::drag::DragTracker;
use crate::input::commit::CommitPressTracker;
use crate::input::events::InputEvent;
use crate::platform::capabilities::{AudioPlayer, HapticFeedback};
use crate::store::history::ReleaseHistoryStore;
use crate::store::keyvalue::KeyValue;
use crate::ui::scene::{SceneLayout, SceneView};

/// Main session controller
///
/// Generic over the storage backend and the haptic/audio capabilities;
/// production wires in the file store, silent haptics, and the terminal
/// bell, tests wire in recording fakes.
pub struct SessionController<S: KeyValue, H: HapticFeedback, A: AudioPlayer> {
    session: Session,
    history: ReleaseHistoryStore<S>,
    haptics: H,
    audio: A,
    /// In-session sound toggle; deliberately not persisted
    sound_enabled: bool,
    commit_tracker: CommitPressTracker,
    drag: DragTracker,
    sequencer: Option<BurnSequencer>,
    breathing: Option<BreathingCycle>,
    released_at: Option<Instant>,
    quote: Option<&'static str>,
    last_tick: Option<Instant>,
}

impl<S: KeyValue, H: HapticFeedback, A: AudioPlayer> SessionController<S, H, A> {
    pub fn new(store: S, haptics: H, audio: A) -> Self {
        Self {
            session: Session::new(),
            history: ReleaseHistoryStore::load(store),
            haptics,
            audio,
            sound_enabled: false,
            commit_tracker: CommitPressTracker::new(),
            drag: DragTracker::new(crate::config::cell_drag_thresholds()),
            sequencer: None,
            breathing: None,
            released_at: None,
            quote: None,
            last_tick: None,
        }
    }

    /// Routes one input event
    ///
    /// `layout` carries the scene rectangles the pointer events are
    /// interpreted against; `now` anchors every timing decision.
    pub fn handle_input(&mut self, event: InputEvent, layout: &SceneLayout, now: Instant) {
        match event {
            InputEvent::Char(c) => self.edit_text(|text| text.push(c)),
            InputEvent::Backspace => self.edit_text(|text| {
                text.pop();
            }),
            InputEvent::CommitKey => self.handle_commit_key(now),
            InputEvent::Prompt(index) => self.select_prompt(index),
            InputEvent::ToggleSound => {
                // Available in every phase, at any time
                self.sound_enabled = !self.sound_enabled;
                tracing::debug!(enabled = self.sound_enabled, "sound toggled");
            }
            InputEvent::PointerDown(x, y) => self.handle_pointer_down(x, y, layout),
            InputEvent::PointerMove(x, y) => {
                self.drag.update(Vec2::new(x as f32, y as f32));
            }
            InputEvent::PointerUp(_, _) => self.handle_pointer_up(now),
            InputEvent::Quit => {}
        }
    }

    /// Advances timers: snap-back spring, burn sequence, breathing
    pub fn tick(&mut self, now: Instant) {
        let dt = self
            .last_tick
            .map(|prev| now.duration_since(prev).as_secs_f32())
            .unwrap_or(0.0);
        self.last_tick = Some(now);
        self.drag.step(dt);

        let events = match &mut self.sequencer {
            Some(sequencer) => sequencer.poll(now),
            None => Vec::new(),
        };
        for event in events {
            match event {
                BurnEvent::SmokeStarted => tracing::debug!("smoke started"),
                BurnEvent::Completed => self.finish_burn(now),
            }
        }
    }

    /// Builds the render model for the current instant
    pub fn scene_view(&self, now: Instant) -> SceneView {
        let offset = self.drag.offset();
        let prompts = if self.session.phase == Phase::Composing && self.session.text.is_empty() {
            PROMPTS[..VISIBLE_PROMPTS].to_vec()
        } else {
            Vec::new()
        };
        SceneView {
            phase: self.session.phase,
            text: self.session.text.clone(),
            count: self.history.count(),
            sound_enabled: self.sound_enabled,
            card_offset: (offset.x.round() as i32, offset.y.round() as i32),
            dragging: self.drag.is_active(),
            near_target: self.drag.near_target(),
            burn_progress: self
                .sequencer
                .as_ref()
                .map(|s| s.progress(now))
                .unwrap_or(0.0),
            smoke_visible: self
                .sequencer
                .as_ref()
                .map(|s| s.smoke_visible(now))
                .unwrap_or(false),
            breath: match self.session.phase {
                Phase::Released => self
                    .breathing
                    .map(|b| (b.phase_at(now), b.phase_progress(now))),
                _ => None,
            },
            quote: match self.session.phase {
                Phase::Released => self.quote,
                _ => None,
            },
            write_again_visible: self.write_again_visible(now),
            prompts,
            show_drag_hint: self.session.phase == Phase::Composing
                && !self.history.drag_hint_seen()
                && !self.drag.is_active(),
            show_commit_hint: self.session.phase == Phase::Composing
                && self.session.has_release_worthy_text(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    pub fn release_count(&self) -> u64 {
        self.history.count()
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    #[cfg(test)]
    pub fn history(&self) -> &ReleaseHistoryStore<S> {
        &self.history
    }

    fn edit_text(&mut self, mutate: impl FnOnce(&mut String)) {
        if self.session.phase != Phase::Composing {
            return;
        }
        let mut text = self.session.text.clone();
        mutate(&mut text);
        self.apply(SessionEvent::TextEdited(text));
    }

    fn select_prompt(&mut self, index: usize) {
        if self.session.phase != Phase::Composing || !self.session.text.is_empty() {
            return;
        }
        if let Some(prompt) = PROMPTS.get(index).filter(|_| index < VISIBLE_PROMPTS) {
            self.apply(SessionEvent::TextEdited(format!("{prompt} ")));
        }
    }

    fn handle_commit_key(&mut self, now: Instant) {
        match self.session.phase {
            Phase::Composing => {
                if !self.session.has_release_worthy_text() {
                    // Blank text never arms the double-press window
                    self.commit_tracker.reset();
                    self.edit_text(|text| text.push('\n'));
                    return;
                }
                if self.commit_tracker.press(now) {
                    self.request_release(now);
                } else {
                    self.edit_text(|text| text.push('\n'));
                }
            }
            Phase::Releasing => {}
            Phase::Released => {
                if self.write_again_visible(now) {
                    self.start_over();
                }
            }
        }
    }

    fn handle_pointer_down(&mut self, x: u16, y: u16, layout: &SceneLayout) {
        if self.session.phase != Phase::Composing {
            return;
        }
        let card = layout.card.translated(self.drag.offset());
        if card.contains_point(x as f32, y as f32) {
            self.drag
                .begin(Vec2::new(x as f32, y as f32), layout.card.bottom(), layout.flame.y);
        }
    }

    fn handle_pointer_up(&mut self, now: Instant) {
        if !self.drag.is_active() {
            return;
        }
        let real_drag = self.drag.passed_min_drag();
        let near = self.drag.end();
        if real_drag || near {
            // The user has discovered dragging; retire the onboarding hint
            self.history.mark_drag_hint_seen();
        }
        if near && self.session.has_release_worthy_text() {
            self.request_release(now);
        }
    }

    /// The release path shared by the drag drop and the double press
    ///
    /// Side effects fire only when the state machine actually
    /// transitions, and none of them can block it: persistence, haptics,
    /// and audio all swallow their own failures.
    fn request_release(&mut self, now: Instant) {
        let before = self.session.phase;
        self.apply(SessionEvent::ReleaseRequested);
        if before == self.session.phase {
            return;
        }
        tracing::info!("releasing thought");
        self.commit_tracker.reset();
        self.drag.settle();
        self.history.record_release();
        self.haptics.pulse(&HAPTIC_PATTERN_MS);
        if self.sound_enabled {
            self.audio.play_crackle();
        }
        self.sequencer = Some(BurnSequencer::new(now));
    }

    fn finish_burn(&mut self, now: Instant) {
        let before = self.session.phase;
        self.apply(SessionEvent::BurnCompleted);
        if before == self.session.phase {
            return;
        }
        tracing::debug!("burn complete");
        self.sequencer = None;
        self.breathing = Some(BreathingCycle::new(now));
        self.released_at = Some(now);
        self.quote = QUOTES.choose(&mut rand::thread_rng()).copied();
    }

    fn start_over(&mut self) {
        let before = self.session.phase;
        self.apply(SessionEvent::StartOver);
        if before == self.session.phase {
            return;
        }
        tracing::debug!("starting over");
        self.breathing = None;
        self.released_at = None;
        self.quote = None;
    }

    fn write_again_visible(&self, now: Instant) -> bool {
        self.session.phase == Phase::Released
            && self
                .released_at
                .is_some_and(|at| now.duration_since(at) >= WRITE_AGAIN_DELAY)
    }

    fn apply(&mut self, event: SessionEvent) {
        self.session = SessionMachine::process_event(self.session.clone(), event);
    }
}
