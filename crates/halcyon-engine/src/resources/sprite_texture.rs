use std::rc::Rc;

use crate::coords::{Rect, Vec2};

use super::HTexture;

/// Shared handle to a sprite texture.
pub type HSpriteTexture = Rc<SpriteTexture>;

/// A sub-rectangle of a texture, addressed in normalized UV space.
///
/// Styles reference sprite textures rather than raw textures so several
/// widget states can live in one atlas.
#[derive(Debug, Clone)]
pub struct SpriteTexture {
    texture: HTexture,
    uv: Rect,
}

impl SpriteTexture {
    /// `uv` is in normalized `[0, 1]` coordinates of `texture`.
    pub fn new(texture: HTexture, uv: Rect) -> Self {
        Self { texture, uv }
    }

    /// Covers the whole texture.
    pub fn full(texture: HTexture) -> Self {
        Self::new(texture, Rect::new(0.0, 0.0, 1.0, 1.0))
    }

    /// Sub-rectangle given in texels.
    pub fn from_texels(texture: HTexture, texels: Rect) -> Self {
        let size = texture.size();
        let uv = if size.x > 0.0 && size.y > 0.0 {
            Rect::new(
                texels.origin.x / size.x,
                texels.origin.y / size.y,
                texels.size.x / size.x,
                texels.size.y / size.y,
            )
        } else {
            Rect::default()
        };
        Self::new(texture, uv)
    }

    #[inline]
    pub fn texture(&self) -> &HTexture {
        &self.texture
    }

    #[inline]
    pub fn uv(&self) -> Rect {
        self.uv
    }

    /// Width of the sub-rectangle in texels.
    #[inline]
    pub fn width(&self) -> f32 {
        self.uv.size.x * self.texture.width() as f32
    }

    /// Height of the sub-rectangle in texels.
    #[inline]
    pub fn height(&self) -> f32 {
        self.uv.size.y * self.texture.height() as f32
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    /// Maps a coordinate local to this sprite (`[0, 1]` on both axes) to the
    /// atlas UV space of the backing texture.
    #[inline]
    pub fn transform_uv(&self, local: Vec2) -> Vec2 {
        Vec2::new(
            self.uv.origin.x + local.x * self.uv.size.x,
            self.uv.origin.y + local.y * self.uv.size.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::resources::Texture;

    #[test]
    fn texel_rect_maps_to_normalized_uv() {
        let tex = Rc::new(Texture::solid(64, 32, Color::white()));
        let sprite = SpriteTexture::from_texels(tex, Rect::new(16.0, 8.0, 32.0, 16.0));
        assert_eq!(sprite.uv(), Rect::new(0.25, 0.25, 0.5, 0.5));
        assert_eq!(sprite.size(), Vec2::new(32.0, 16.0));
    }

    #[test]
    fn transform_uv_stays_inside_sub_rect() {
        let tex = Rc::new(Texture::solid(4, 4, Color::white()));
        let sprite = SpriteTexture::new(tex, Rect::new(0.5, 0.0, 0.5, 0.5));
        assert_eq!(sprite.transform_uv(Vec2::zero()), Vec2::new(0.5, 0.0));
        assert_eq!(sprite.transform_uv(Vec2::one()), Vec2::new(1.0, 0.5));
    }
}
