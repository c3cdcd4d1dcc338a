use std::collections::BTreeMap;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::resources::{MaterialKind, SpriteMaterial};
use crate::text::HFont;

use super::{Quad, Sprite, SpriteRenderElement};

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TextHorzAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TextVertAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Geometry descriptor for a [`TextSprite`].
#[derive(Debug, Clone)]
pub struct TextSpriteDesc {
    pub text: String,
    pub font: Option<HFont>,
    pub font_size: f32,
    /// Area the text block is aligned in. Zero disables alignment on that axis.
    pub width: f32,
    pub height: f32,
    pub horz_align: TextHorzAlign,
    pub vert_align: TextVertAlign,
    pub tint: Color,
}

impl Default for TextSpriteDesc {
    fn default() -> Self {
        Self {
            text: String::new(),
            font: None,
            font_size: 10.0,
            width: 0.0,
            height: 0.0,
            horz_align: TextHorzAlign::default(),
            vert_align: TextVertAlign::default(),
            tint: Color::white(),
        }
    }
}

/// Text drawn from a bitmap font: one quad per visible glyph, one render
/// element per atlas page that has glyphs (in page order).
#[derive(Debug, Default)]
pub struct TextSprite {
    elements: Vec<SpriteRenderElement>,
}

impl TextSprite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, desc: &TextSpriteDesc) {
        self.elements.clear();

        let Some(font) = &desc.font else {
            return;
        };
        if desc.text.is_empty() {
            return;
        }

        let lines = font.layout(&desc.text, desc.font_size);
        let line_height = font.line_height(desc.font_size);
        let block_height = lines.len() as f32 * line_height;

        let top = if desc.height > 0.0 {
            align(desc.vert_align_offset(), desc.height, block_height)
        } else {
            0.0
        };

        let mut per_page: BTreeMap<usize, Vec<Quad>> = BTreeMap::new();
        for (row, line) in lines.iter().enumerate() {
            let left = if desc.width > 0.0 {
                align(desc.horz_align_offset(), desc.width, line.width)
            } else {
                0.0
            };
            let origin = Vec2::new(left, top + row as f32 * line_height);
            for g in &line.glyphs {
                per_page
                    .entry(g.page)
                    .or_default()
                    .push(Quad::new(g.rect.translate(origin), g.uv_min, g.uv_max));
            }
        }

        for (page, quads) in per_page {
            let Some(texture) = font.page(page) else {
                continue;
            };
            self.elements.push(SpriteRenderElement {
                material: SpriteMaterial::new(texture.clone(), MaterialKind::Text, desc.tint),
                quads,
            });
        }
    }
}

impl TextSpriteDesc {
    fn horz_align_offset(&self) -> f32 {
        match self.horz_align {
            TextHorzAlign::Left => 0.0,
            TextHorzAlign::Center => 0.5,
            TextHorzAlign::Right => 1.0,
        }
    }

    fn vert_align_offset(&self) -> f32 {
        match self.vert_align {
            TextVertAlign::Top => 0.0,
            TextVertAlign::Center => 0.5,
            TextVertAlign::Bottom => 1.0,
        }
    }
}

/// Start position of `content` inside `extent` for an alignment factor in `[0, 1]`.
/// Rounded down to whole pixels so glyphs stay crisp.
#[inline]
fn align(factor: f32, extent: f32, content: f32) -> f32 {
    ((extent - content) * factor).floor()
}

impl Sprite for TextSprite {
    fn render_elements(&self) -> &[SpriteRenderElement] {
        &self.elements
    }
}
