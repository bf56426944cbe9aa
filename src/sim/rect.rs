//! Axis-aligned rectangles for the ball, the paddle and the blocks
//!
//! Screen coordinates: x grows right, y grows down, (x, y) is the top-left corner.

use serde::{Deserialize, Serialize};

/// A positioned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entity {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Entity {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost column
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// One past the bottom row
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    #[inline]
    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    /// Bounding-box overlap. Rectangles that only share an edge do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Entity) -> bool {
        other.x < self.right()
            && self.x < other.right()
            && other.y < self.bottom()
            && self.y < other.bottom()
    }

    #[inline]
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }
}
