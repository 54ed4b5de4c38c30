//! Axis-aligned rectangle geometry
//!
//! Everything in the arena is an upright rectangle in screen space: origin at
//! the top-left corner, y growing downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Overlap test with touching edges counted as overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.bottom() >= other.top()
            && self.top() <= other.bottom()
    }
}

/// Clamp `value` to `[0, max]`, treating a negative `max` as 0.
///
/// `f32::clamp` panics when min > max, which happens whenever the arena is
/// smaller than the object being clamped.
#[inline]
pub fn clamp_to_span(value: f32, max: f32) -> f32 {
    value.clamp(0.0, max.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_edges() {
        let r = rect(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_overlap_inside_and_apart() {
        let paddle = rect(30.0, 250.0, 10.0, 100.0);

        assert!(rect(35.0, 290.0, 20.0, 20.0).overlaps(&paddle));
        assert!(!rect(100.0, 290.0, 20.0, 20.0).overlaps(&paddle));
        // Beside the paddle horizontally but above it
        assert!(!rect(35.0, 200.0, 20.0, 20.0).overlaps(&paddle));
    }

    #[test]
    fn test_touching_edges_count() {
        let paddle = rect(30.0, 250.0, 10.0, 100.0);

        // Ball's left edge exactly on paddle's right edge
        assert!(rect(40.0, 290.0, 20.0, 20.0).overlaps(&paddle));
        // Ball's bottom edge exactly on paddle's top edge
        assert!(rect(30.0, 230.0, 20.0, 20.0).overlaps(&paddle));
        // One unit clear
        assert!(!rect(41.0, 290.0, 20.0, 20.0).overlaps(&paddle));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn test_clamp_to_span() {
        assert_eq!(clamp_to_span(-5.0, 100.0), 0.0);
        assert_eq!(clamp_to_span(150.0, 100.0), 100.0);
        assert_eq!(clamp_to_span(50.0, 100.0), 50.0);
        // Arena shorter than the object
        assert_eq!(clamp_to_span(10.0, -20.0), 0.0);
    }
}
