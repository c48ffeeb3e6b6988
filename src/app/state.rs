//! Session state management
//!
//! Defines the core session state machine and its transitions.
//! The session is deliberately small: a phase and the text being
//! composed. Side effects (persistence, haptics, audio, timers) live
//! in the controller; this module is pure.

/// Lifecycle phase of one ritual session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// User is writing the thought on the paper card
    Composing,
    /// The card is burning; a fixed-length sequence is running
    Releasing,
    /// The burn finished; breathing guidance is shown
    Released,
}

/// One ritual session: the current phase plus the composed text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub phase: Phase,
    pub text: String,
}

impl Session {
    /// Creates a fresh session, composing with empty text
    pub fn new() -> Self {
        Self {
            phase: Phase::Composing,
            text: String::new(),
        }
    }

    /// Whether the text qualifies for release
    ///
    /// Whitespace-only text counts as empty.
    pub fn has_release_worthy_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Session transition events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The composed text was replaced
    TextEdited(String),
    /// The user asked to burn the card (drag drop or double commit key)
    ReleaseRequested,
    /// The burn sequence signalled completion
    BurnCompleted,
    /// The user chose to write again
    StartOver,
}

/// State machine for session transitions
///
/// There are no error states: every invalid (phase, event) pairing is a
/// silent no-op that returns the session unchanged.
pub struct SessionMachine;

impl SessionMachine {
    /// Processes an event and returns the new session
    pub fn process_event(mut session: Session, event: SessionEvent) -> Session {
        match (session.phase, event) {
            (Phase::Composing, SessionEvent::TextEdited(text)) => {
                session.text = text;
                session
            }

            (Phase::Composing, SessionEvent::ReleaseRequested) => {
                // Blank text never burns
                if session.has_release_worthy_text() {
                    session.phase = Phase::Releasing;
                }
                session
            }

            (Phase::Releasing, SessionEvent::BurnCompleted) => {
                session.phase = Phase::Released;
                session
            }

            (Phase::Released, SessionEvent::StartOver) => {
                session.text.clear();
                session.phase = Phase::Composing;
                session
            }

            // Invalid transitions - ignore event
            (_, _) => session,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composing(text: &str) -> Session {
        Session {
            phase: Phase::Composing,
            text: text.to_owned(),
        }
    }

    #[test]
    fn new_session_is_composing_and_empty() {
        let session = Session::new();
        assert_eq!(session.phase, Phase::Composing);
        assert!(session.text.is_empty());
    }

    #[test]
    fn text_edits_apply_only_while_composing() {
        let session =
            SessionMachine::process_event(composing(""), SessionEvent::TextEdited("hi".into()));
        assert_eq!(session.text, "hi");

        let mut burning = composing("hi");
        burning.phase = Phase::Releasing;
        let unchanged =
            SessionMachine::process_event(burning.clone(), SessionEvent::TextEdited("x".into()));
        assert_eq!(unchanged, burning);
    }

    #[test]
    fn release_with_text_starts_burning() {
        let session =
            SessionMachine::process_event(composing("let this go"), SessionEvent::ReleaseRequested);
        assert_eq!(session.phase, Phase::Releasing);
        assert_eq!(session.text, "let this go");
    }

    #[test]
    fn release_with_blank_text_is_a_no_op() {
        for text in ["", "   ", "\n\t  \n"] {
            let session =
                SessionMachine::process_event(composing(text), SessionEvent::ReleaseRequested);
            assert_eq!(session.phase, Phase::Composing);
        }
    }

    #[test]
    fn burn_completion_releases() {
        let mut session = composing("gone");
        session.phase = Phase::Releasing;
        let session = SessionMachine::process_event(session, SessionEvent::BurnCompleted);
        assert_eq!(session.phase, Phase::Released);
    }

    #[test]
    fn burn_completion_ignored_outside_releasing() {
        let session = SessionMachine::process_event(composing("hi"), SessionEvent::BurnCompleted);
        assert_eq!(session.phase, Phase::Composing);

        let mut released = composing("hi");
        released.phase = Phase::Released;
        let session = SessionMachine::process_event(released, SessionEvent::BurnCompleted);
        assert_eq!(session.phase, Phase::Released);
    }

    #[test]
    fn start_over_clears_text_and_returns_to_composing() {
        let mut session = composing("old thought");
        session.phase = Phase::Released;
        let session = SessionMachine::process_event(session, SessionEvent::StartOver);
        assert_eq!(session.phase, Phase::Composing);
        assert!(session.text.is_empty());
    }

    #[test]
    fn start_over_ignored_outside_released() {
        let session = SessionMachine::process_event(composing("keep me"), SessionEvent::StartOver);
        assert_eq!(session.phase, Phase::Composing);
        assert_eq!(session.text, "keep me");
    }

    #[test]
    fn full_cycle_ends_where_it_began() {
        let mut session = Session::new();
        session = SessionMachine::process_event(session, SessionEvent::TextEdited("hello".into()));
        session = SessionMachine::process_event(session, SessionEvent::ReleaseRequested);
        assert_eq!(session.phase, Phase::Releasing);
        session = SessionMachine::process_event(session, SessionEvent::BurnCompleted);
        assert_eq!(session.phase, Phase::Released);
        session = SessionMachine::process_event(session, SessionEvent::StartOver);
        assert_eq!(session, Session::new());
    }

    #[test]
    fn whitespace_only_text_is_not_release_worthy() {
        assert!(!composing(" \t ").has_release_worthy_text());
        assert!(composing(" a ").has_release_worthy_text());
    }
}
