//! Integer grid geometry
//!
//! Rooms occupy sets of unit grid cells; the dungeon reports its extent as an
//! inclusive axis-aligned rectangle over them.

use core::fmt;
use core::ops::Add;
use serde::{Deserialize, Serialize};

/// A position on the integer grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Vec2I {
    pub x: i32,
    pub y: i32,
}

impl Vec2I {
    /// Create a new grid position
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2I {
    type Output = Vec2I;

    fn add(self, rhs: Vec2I) -> Vec2I {
        Vec2I::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Vec2I {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// An axis-aligned rectangle with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect2I {
    /// Left x coordinate
    pub lx: i32,
    /// Top y coordinate
    pub ly: i32,
    /// Right x coordinate (inclusive)
    pub hx: i32,
    /// Bottom y coordinate (inclusive)
    pub hy: i32,
}

impl Rect2I {
    /// Create a new rectangle
    pub const fn new(lx: i32, ly: i32, hx: i32, hy: i32) -> Self {
        Self { lx, ly, hx, hy }
    }

    /// The 1x1 rectangle covering a single cell
    pub const fn around(p: Vec2I) -> Self {
        Self::new(p.x, p.y, p.x, p.y)
    }

    /// Get the width of the rectangle
    pub fn width(&self) -> i32 {
        if self.hx >= self.lx {
            self.hx - self.lx + 1
        } else {
            0
        }
    }

    /// Get the height of the rectangle
    pub fn height(&self) -> i32 {
        if self.hy >= self.ly {
            self.hy - self.ly + 1
        } else {
            0
        }
    }

    /// Check if the rectangle contains a cell
    pub fn contains(&self, p: Vec2I) -> bool {
        p.x >= self.lx && p.x <= self.hx && p.y >= self.ly && p.y <= self.hy
    }

    /// Grow the rectangle so that it covers the given cell
    pub fn expand_to(&mut self, p: Vec2I) {
        self.lx = self.lx.min(p.x);
        self.ly = self.ly.min(p.y);
        self.hx = self.hx.max(p.x);
        self.hy = self.hy.max(p.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_dimensions() {
        let r = Rect2I::new(0, 1, 5, 4);
        assert_eq!(r.width(), 6);
        assert_eq!(r.height(), 4);
    }

    #[test]
    fn test_rect_expand_to() {
        let mut r = Rect2I::around(Vec2I::new(2, 2));
        r.expand_to(Vec2I::new(-1, 3));
        r.expand_to(Vec2I::new(4, 0));
        assert_eq!(r, Rect2I::new(-1, 0, 4, 3));
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect2I::new(0, 0, 3, 3);
        assert!(r.contains(Vec2I::new(0, 0)));
        assert!(r.contains(Vec2I::new(3, 3)));
        assert!(!r.contains(Vec2I::new(4, 3)));
    }
}
