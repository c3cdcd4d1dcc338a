use crate::coords::{Rect, RectOffset, Vec2};
use crate::paint::Color;
use crate::resources::{HSpriteTexture, MaterialKind, SpriteMaterial};

use super::{Quad, Sprite, SpriteRenderElement};

/// Geometry descriptor for an [`ImageSprite`].
#[derive(Debug, Clone)]
pub struct ImageSpriteDesc {
    pub width: f32,
    pub height: f32,
    /// `None` renders nothing.
    pub texture: Option<HSpriteTexture>,
    /// Nine-slice border in texels. All zero renders a single stretched quad.
    pub border: RectOffset,
    pub tint: Color,
}

impl Default for ImageSpriteDesc {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            texture: None,
            border: RectOffset::default(),
            tint: Color::white(),
        }
    }
}

/// A textured rectangle, optionally nine-sliced.
///
/// Produces at most one render element: 1 quad without borders, 9 quads
/// with any non-zero border (corners keep their texel size, edges stretch
/// along one axis, the centre along both).
#[derive(Debug, Default)]
pub struct ImageSprite {
    elements: Vec<SpriteRenderElement>,
}

impl ImageSprite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the geometry from `desc`.
    pub fn update(&mut self, desc: &ImageSpriteDesc) {
        self.elements.clear();

        let Some(texture) = &desc.texture else {
            return;
        };

        let quads = if desc.border.is_zero() {
            vec![Quad::new(
                Rect::new(0.0, 0.0, desc.width, desc.height),
                texture.transform_uv(Vec2::zero()),
                texture.transform_uv(Vec2::one()),
            )]
        } else {
            nine_slice(desc, texture)
        };

        self.elements.push(SpriteRenderElement {
            material: SpriteMaterial::new(texture.texture().clone(), MaterialKind::Image, desc.tint),
            quads,
        });
    }
}

impl Sprite for ImageSprite {
    fn render_elements(&self) -> &[SpriteRenderElement] {
        &self.elements
    }
}

/// Scales a pair of borders down when they do not fit in `extent`.
fn fit_borders(a: f32, b: f32, extent: f32) -> (f32, f32) {
    let total = a + b;
    if total > extent && total > 0.0 {
        let s = extent.max(0.0) / total;
        (a * s, b * s)
    } else {
        (a, b)
    }
}

fn nine_slice(desc: &ImageSpriteDesc, texture: &HSpriteTexture) -> Vec<Quad> {
    let border = desc.border;
    let (w, h) = (desc.width.max(0.0), desc.height.max(0.0));
    let (tw, th) = (texture.width(), texture.height());

    let (left, right) = fit_borders(border.left, border.right, w);
    let (top, bottom) = fit_borders(border.top, border.bottom, h);

    let xs = [0.0, left, w - right, w];
    let ys = [0.0, top, h - bottom, h];

    let frac = |v: f32, extent: f32| if extent > 0.0 { (v / extent).clamp(0.0, 1.0) } else { 0.0 };
    let us = [0.0, frac(border.left, tw), 1.0 - frac(border.right, tw), 1.0];
    let vs = [0.0, frac(border.top, th), 1.0 - frac(border.bottom, th), 1.0];

    let mut quads = Vec::with_capacity(9);
    for row in 0..3 {
        for col in 0..3 {
            let rect = Rect::from_corners(Vec2::new(xs[col], ys[row]), Vec2::new(xs[col + 1], ys[row + 1]));
            quads.push(Quad::new(
                rect,
                texture.transform_uv(Vec2::new(us[col], vs[row])),
                texture.transform_uv(Vec2::new(us[col + 1], vs[row + 1])),
            ));
        }
    }
    quads
}
