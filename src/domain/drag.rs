//! Drag gesture tracking and flame proximity detection
//!
//! Tracks the paper card's displacement from its rest position during an
//! active pointer gesture, decides when the card is close enough to the
//! flame to qualify for a release, and animates the spring snap-back when
//! a gesture ends anywhere else.

use crate::domain::core::Vec2;

/// Proximity thresholds for the near-flame decision
///
/// Expressed in scene units so the presentation layer can scale them
/// (pixel-sized defaults here, cell-sized values for a terminal).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragThresholds {
    /// The card qualifies once its bottom edge crosses the flame's top
    /// edge minus this margin.
    pub proximity_margin: f32,
    /// Minimum downward displacement before a gesture can qualify.
    /// Guards against a near-zero drag triggering a release.
    pub min_drag_distance: f32,
}

impl Default for DragThresholds {
    fn default() -> Self {
        Self {
            proximity_margin: 30.0,
            min_drag_distance: 80.0,
        }
    }
}

/// Spring parameters for the snap-back animation (cosmetic)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 300.0,
            damping: 30.0,
        }
    }
}

/// Transient state of the current gesture; discarded when it ends
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    pub active: bool,
    pub offset: Vec2,
    pub near_target: bool,
}

/// Tracks one draggable element against one fixed flame region
///
/// Lifecycle: `begin` on pointer down, `update` on every movement,
/// `end` on pointer up. `update` returns the near-target signal the
/// presentation layer uses to dim the scene and excite the flame.
#[derive(Debug)]
pub struct DragTracker {
    thresholds: DragThresholds,
    spring: SpringConfig,
    state: DragState,
    /// Pointer position that maps to zero offset for this gesture
    origin: Vec2,
    /// Card bottom edge at rest, in scene units
    rest_bottom: f32,
    /// Flame top edge, in scene units
    flame_top: f32,
    velocity: Vec2,
    snapping: bool,
}

impl DragTracker {
    pub fn new(thresholds: DragThresholds) -> Self {
        Self {
            thresholds,
            spring: SpringConfig::default(),
            state: DragState::default(),
            origin: Vec2::zero(),
            rest_bottom: 0.0,
            flame_top: 0.0,
            velocity: Vec2::zero(),
            snapping: false,
        }
    }

    /// Starts a gesture at the given pointer position
    ///
    /// A gesture that starts mid snap-back supersedes it and resumes
    /// from the card's current offset, so the card never jumps.
    pub fn begin(&mut self, pointer: Vec2, rest_bottom: f32, flame_top: f32) {
        self.snapping = false;
        self.velocity = Vec2::zero();
        self.rest_bottom = rest_bottom;
        self.flame_top = flame_top;
        self.origin = pointer.delta(&self.state.offset);
        self.state.active = true;
        self.state.near_target = self.is_near();
    }

    /// Updates the gesture with a new pointer position
    ///
    /// # Returns
    /// The near-target signal for this movement update. Ignored (returns
    /// the previous signal) when no gesture is active.
    pub fn update(&mut self, pointer: Vec2) -> bool {
        if !self.state.active {
            return self.state.near_target;
        }
        self.state.offset = pointer.delta(&self.origin);
        self.state.near_target = self.is_near();
        self.state.near_target
    }

    /// Ends the gesture
    ///
    /// # Returns
    /// true if the card was near the flame at release. A snap-back starts
    /// regardless; a caller that consumes the release as a burn should
    /// follow up with [`DragTracker::settle`].
    pub fn end(&mut self) -> bool {
        if !self.state.active {
            return false;
        }
        let near = self.state.near_target;
        self.state.active = false;
        self.state.near_target = false;
        self.snapping = true;
        near
    }

    /// Drops the card at rest immediately, cancelling any snap-back
    pub fn settle(&mut self) {
        self.state = DragState::default();
        self.velocity = Vec2::zero();
        self.snapping = false;
    }

    /// Advances the snap-back spring by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        if !self.snapping {
            return;
        }
        let k = self.spring.stiffness;
        let c = self.spring.damping;
        let accel = Vec2::new(
            -k * self.state.offset.x - c * self.velocity.x,
            -k * self.state.offset.y - c * self.velocity.y,
        );
        self.velocity.x += accel.x * dt;
        self.velocity.y += accel.y * dt;
        self.state.offset.x += self.velocity.x * dt;
        self.state.offset.y += self.velocity.y * dt;

        if self.state.offset.length() < 0.5 && self.velocity.length() < 1.0 {
            self.settle();
        }
    }

    /// True while the gesture displacement has passed the minimum drag
    /// distance, i.e. the user has demonstrably discovered dragging
    pub fn passed_min_drag(&self) -> bool {
        self.state.offset.y > self.thresholds.min_drag_distance
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn offset(&self) -> Vec2 {
        self.state.offset
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    pub fn is_snapping(&self) -> bool {
        self.snapping
    }

    pub fn near_target(&self) -> bool {
        self.state.near_target
    }

    /// The near-flame rule: the card's bottom edge must have crossed the
    /// flame's top edge minus the margin, AND the vertical displacement
    /// must exceed the minimum drag distance.
    fn is_near(&self) -> bool {
        let card_bottom = self.rest_bottom + self.state.offset.y;
        card_bottom > self.flame_top - self.thresholds.proximity_margin
            && self.state.offset.y > self.thresholds.min_drag_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Rest geometry used throughout: card bottom at 400, flame top at 500.
    // With the default 30-unit margin the crossing line sits at 470.
    fn tracker_with_gesture() -> DragTracker {
        let mut tracker = DragTracker::new(DragThresholds::default());
        tracker.begin(Vec2::new(100.0, 100.0), 400.0, 500.0);
        tracker
    }

    #[test]
    fn fresh_tracker_is_inactive() {
        let tracker = DragTracker::new(DragThresholds::default());
        assert_eq!(tracker.state(), DragState::default());
        assert!(!tracker.is_active());
        assert!(!tracker.near_target());
        assert_eq!(tracker.offset(), Vec2::zero());
    }

    #[test]
    fn near_requires_both_crossing_and_min_distance() {
        let mut tracker = tracker_with_gesture();

        // Crossed the flame line (475 > 470) but displacement below minimum
        assert!(!tracker.update(Vec2::new(100.0, 175.0)));

        // Past both: bottom at 490 > 470 and displacement 90 > 80
        assert!(tracker.update(Vec2::new(100.0, 190.0)));
        assert!(tracker.near_target());
    }

    #[test]
    fn near_zero_drag_never_qualifies() {
        let mut tracker = DragTracker::new(DragThresholds::default());
        // Card already resting just above the flame line
        tracker.begin(Vec2::new(0.0, 0.0), 465.0, 500.0);
        assert!(!tracker.update(Vec2::new(0.0, 10.0)));
        assert!(!tracker.end());
    }

    #[test]
    fn long_drag_without_crossing_never_qualifies() {
        let mut tracker = DragTracker::new(DragThresholds::default());
        // Card resting far from the flame
        tracker.begin(Vec2::new(0.0, 0.0), 100.0, 500.0);
        assert!(!tracker.update(Vec2::new(0.0, 100.0)));
    }

    #[test]
    fn end_reports_proximity_and_clears_gesture() {
        let mut tracker = tracker_with_gesture();
        tracker.update(Vec2::new(100.0, 200.0));
        assert!(tracker.end());
        assert!(!tracker.is_active());
        assert!(!tracker.near_target());
    }

    #[test]
    fn missed_drop_snaps_back_to_rest() {
        let mut tracker = tracker_with_gesture();
        tracker.update(Vec2::new(130.0, 140.0));
        assert!(!tracker.end());
        assert!(tracker.is_snapping());

        // Two simulated seconds at 60fps is far past settling time
        for _ in 0..120 {
            tracker.step(1.0 / 60.0);
        }
        assert!(!tracker.is_snapping());
        assert_eq!(tracker.offset(), Vec2::zero());
    }

    #[test]
    fn new_gesture_supersedes_snap_back() {
        let mut tracker = tracker_with_gesture();
        tracker.update(Vec2::new(100.0, 150.0));
        tracker.end();
        tracker.step(1.0 / 60.0);
        let mid_snap = tracker.offset();

        tracker.begin(Vec2::new(200.0, 200.0), 400.0, 500.0);
        assert!(tracker.is_active());
        assert!(!tracker.is_snapping());
        // Gesture resumes from the in-flight offset, no jump
        assert_eq!(tracker.offset(), mid_snap);
    }

    #[test]
    fn settle_drops_card_at_rest() {
        let mut tracker = tracker_with_gesture();
        tracker.update(Vec2::new(100.0, 200.0));
        tracker.end();
        tracker.settle();
        assert_eq!(tracker.offset(), Vec2::zero());
        assert!(!tracker.is_snapping());
    }

    #[test]
    fn update_without_gesture_is_ignored() {
        let mut tracker = DragTracker::new(DragThresholds::default());
        assert!(!tracker.update(Vec2::new(50.0, 300.0)));
        assert_eq!(tracker.offset(), Vec2::zero());
    }

    #[test]
    fn passed_min_drag_tracks_displacement() {
        let mut tracker = tracker_with_gesture();
        tracker.update(Vec2::new(100.0, 150.0));
        assert!(!tracker.passed_min_drag());
        tracker.update(Vec2::new(100.0, 190.0));
        assert!(tracker.passed_min_drag());
    }
}
