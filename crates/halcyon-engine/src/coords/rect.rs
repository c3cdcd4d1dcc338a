use super::{RectOffset, Vec2};

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rectangle spanning two corners given in any order.
    #[inline]
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self::from_origin_size(min, max - min)
    }

    /// A rectangle large enough to never clip anything.
    #[inline]
    pub const fn unbounded() -> Self {
        Self::new(-1.0e9, -1.0e9, 2.0e9, 2.0e9)
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < max.x && p.y < max.y
    }

    /// Overlapping area of two rectangles, `None` when they do not overlap.
    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let min = self.min().max(other.min());
        let max = self.max().min(other.max());

        if max.x <= min.x || max.y <= min.y {
            None
        } else {
            Some(Rect::from_origin_size(min, max - min))
        }
    }

    /// Smallest rectangle containing both.
    #[inline]
    pub fn union(self, other: Rect) -> Rect {
        Rect::from_corners(self.min().min(other.min()), self.max().max(other.max()))
    }

    #[inline]
    #[must_use]
    pub fn translate(self, offset: Vec2) -> Rect {
        Rect::from_origin_size(self.origin + offset, self.size)
    }

    /// Shrinks the rectangle by `offset`; the size never goes negative.
    #[inline]
    #[must_use]
    pub fn inset(self, offset: RectOffset) -> Rect {
        Rect::new(
            self.origin.x + offset.left,
            self.origin.y + offset.top,
            (self.size.x - offset.h()).max(0.0),
            (self.size.y - offset.v()).max(0.0),
        )
    }
}
