//! Axis-aligned collision tests and the paddle deflection rule

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
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

    /// Strict overlap test: rectangles that only share an edge do not touch
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Vertical velocity after a paddle hit
///
/// Proportional to how far the ball center sits from the paddle center, so a
/// dead-center hit returns straight and edge hits leave steeply. The result
/// is deliberately not clamped.
#[inline]
pub fn deflect_vy(ball_center_y: f32, paddle_center_y: f32, deflection: f32) -> f32 {
    (ball_center_y - paddle_center_y) * deflection
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let paddle = Rect::new(20.0, 250.0, 16.0, 100.0);
        let ball = Rect::new(30.0, 290.0, 18.0, 18.0);
        assert!(paddle.overlaps(&ball));
        assert!(ball.overlaps(&paddle));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let paddle = Rect::new(20.0, 250.0, 16.0, 100.0);
        // Ball's left edge exactly on the paddle's right edge
        let ball = Rect::new(36.0, 290.0, 18.0, 18.0);
        assert!(!paddle.overlaps(&ball));
        // Ball's top edge exactly on the paddle's bottom edge
        let ball = Rect::new(25.0, 350.0, 18.0, 18.0);
        assert!(!paddle.overlaps(&ball));
    }

    #[test]
    fn test_separated_vertically() {
        let paddle = Rect::new(20.0, 250.0, 16.0, 100.0);
        let ball = Rect::new(25.0, 100.0, 18.0, 18.0);
        assert!(!paddle.overlaps(&ball));
    }

    #[test]
    fn test_deflect_center_is_straight() {
        assert_eq!(deflect_vy(300.0, 300.0, 0.25), 0.0);
    }

    #[test]
    fn test_deflect_edges() {
        // Hit near the top edge sends the ball up, bottom edge sends it down
        assert_eq!(deflect_vy(250.0, 300.0, 0.25), -12.5);
        assert_eq!(deflect_vy(350.0, 300.0, 0.25), 12.5);
    }
}
