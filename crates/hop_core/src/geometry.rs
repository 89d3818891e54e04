//! Axis-aligned rectangles in world space.
//!
//! World space is y-down: `y` grows toward the bottom of the level, so a
//! rectangle's `top()` is its smallest y and `bottom()` its largest. All
//! gameplay contact tests (platforms, coins, enemies, goal) go through
//! [`Rect::overlaps`] so that every contact uses the same edge convention.

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Build a rect of `size` whose centre sits at `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            x: center.x - size.x * 0.5,
            y: center.y - size.y * 0.5,
            w: size.x,
            h: size.y,
        }
    }

    /// Build a rect of `size` whose bottom edge midpoint sits at `midbottom`.
    pub fn from_midbottom(midbottom: Vec2, size: Vec2) -> Self {
        Self {
            x: midbottom.x - size.x * 0.5,
            y: midbottom.y - size.y,
            w: size.x,
            h: size.y,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Strict overlap: rects that only share an edge do not overlap, and a
    /// zero-sized rect never overlaps anything.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.w > 0.0
            && self.h > 0.0
            && other.w > 0.0
            && other.h > 0.0
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Half-open point test: left/top edges are inside, right/bottom are not.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}
