use crate::coords::{Rect, Vec2};

/// A textured axis-aligned quad.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Quad {
    pub rect: Rect,
    /// UV at `rect.min()`.
    pub uv_min: Vec2,
    /// UV at `rect.max()`.
    pub uv_max: Vec2,
}

impl Quad {
    #[inline]
    pub const fn new(rect: Rect, uv_min: Vec2, uv_max: Vec2) -> Self {
        Self { rect, uv_min, uv_max }
    }

    #[inline]
    #[must_use]
    pub fn translate(self, offset: Vec2) -> Quad {
        Quad { rect: self.rect.translate(offset), ..self }
    }

    /// Clips the quad to `clip`, moving UVs proportionally.
    ///
    /// A quad entirely outside `clip` collapses to a zero-area quad so the
    /// element keeps its quad count.
    #[must_use]
    pub fn clipped(self, clip: Rect) -> Quad {
        let Some(visible) = self.rect.intersect(clip) else {
            let p = self.rect.origin.max(clip.min()).min(clip.max());
            return Quad::new(Rect::from_origin_size(p, Vec2::zero()), self.uv_min, self.uv_min);
        };

        let t0 = self.local(visible.min());
        let t1 = self.local(visible.max());
        Quad::new(
            visible,
            Vec2::new(
                self.uv_min.x + (self.uv_max.x - self.uv_min.x) * t0.x,
                self.uv_min.y + (self.uv_max.y - self.uv_min.y) * t0.y,
            ),
            Vec2::new(
                self.uv_min.x + (self.uv_max.x - self.uv_min.x) * t1.x,
                self.uv_min.y + (self.uv_max.y - self.uv_min.y) * t1.y,
            ),
        )
    }

    /// Position of `p` relative to the quad, `[0, 1]` on each axis.
    fn local(&self, p: Vec2) -> Vec2 {
        let fx = if self.rect.size.x > 0.0 { (p.x - self.rect.origin.x) / self.rect.size.x } else { 0.0 };
        let fy = if self.rect.size.y > 0.0 { (p.y - self.rect.origin.y) / self.rect.size.y } else { 0.0 };
        Vec2::new(fx, fy)
    }
}
