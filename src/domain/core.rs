//! Core domain types and operations
//!
//! This module defines pure domain types that work exclusively with
//! abstract scene units and have no knowledge of terminal or device concepts.

/// 2D vector in scene units
///
/// Used for drag displacements and spring velocities. Scene units are
/// whatever the presentation layer decides (pixels, character cells);
/// the domain logic only compares them against injected thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Creates a new vector
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The zero vector
    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Component-wise difference, `self - other`
    pub fn delta(&self, other: &Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }

    /// Euclidean length
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// Rectangle in scene units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Creates a new rectangle
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Returns the right edge coordinate
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Returns the bottom edge coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Returns true if this rectangle contains the given point
    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Returns a copy of this rectangle shifted by the given offset
    pub fn translated(&self, offset: Vec2) -> Rect {
        Rect::new(self.x + offset.x, self.y + offset.y, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_basic_properties() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 70.0);
    }

    #[test]
    fn rect_contains_point() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains_point(15.0, 15.0)); // Inside
        assert!(rect.contains_point(10.0, 10.0)); // Top-left corner
        assert!(!rect.contains_point(30.0, 30.0)); // Outside right-bottom
        assert!(!rect.contains_point(5.0, 5.0)); // Outside left-top
    }

    #[test]
    fn rect_translation_moves_edges() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let moved = rect.translated(Vec2::new(3.0, -2.0));
        assert_eq!(moved.x, 3.0);
        assert_eq!(moved.y, -2.0);
        assert_eq!(moved.bottom(), 8.0);
    }

    #[test]
    fn vec2_delta_and_length() {
        let a = Vec2::new(3.0, 4.0);
        let b = Vec2::zero();
        assert_eq!(a.delta(&b), a);
        assert_eq!(a.length(), 5.0);
    }
}
