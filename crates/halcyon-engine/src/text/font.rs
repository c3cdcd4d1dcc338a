use std::collections::HashMap;
use std::rc::Rc;

use crate::coords::{Rect, Vec2};
use crate::resources::HTexture;

/// Shared handle to an immutable font.
pub type HFont = Rc<BitmapFont>;

/// Placement data for one character, in texels/pixels at the font's base size.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Glyph {
    /// Atlas page index.
    pub page: usize,
    /// Source rectangle in the page, in texels.
    pub uv: Rect,
    /// Drawn size.
    pub size: Vec2,
    /// Offset from the pen position to the glyph's top-left; `y` is measured
    /// from the top of the line.
    pub bearing: Vec2,
    /// Horizontal pen advance.
    pub advance: f32,
}

/// A glyph placed in line-local space (origin at the line's top-left).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PositionedGlyph {
    pub page: usize,
    pub rect: Rect,
    pub uv_min: Vec2,
    pub uv_max: Vec2,
}

/// One laid out line of text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextLine {
    pub width: f32,
    pub glyphs: Vec<PositionedGlyph>,
}

/// A font rendered from pre-rasterized atlas pages.
#[derive(Debug)]
pub struct BitmapFont {
    base_size: f32,
    line_height: f32,
    pages: Vec<HTexture>,
    glyphs: HashMap<char, Glyph>,
}

impl BitmapFont {
    /// Size the glyph table was built for.
    #[inline]
    pub fn base_size(&self) -> f32 {
        self.base_size
    }

    /// Line advance when drawn at `font_size`.
    #[inline]
    pub fn line_height(&self, font_size: f32) -> f32 {
        self.line_height * self.scale(font_size)
    }

    #[inline]
    pub fn page(&self, idx: usize) -> Option<&HTexture> {
        self.pages.get(idx)
    }

    #[inline]
    pub fn num_pages(&self) -> usize {
        self.pages.len()
    }

    /// Looks up `ch`, falling back to `'?'` for characters the font lacks.
    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch).or_else(|| self.glyphs.get(&'?'))
    }

    /// Builds a font from a fixed-cell atlas: `chars` fill the page row by
    /// row, each glyph is one `cell` with advance `cell.x`. Base size is the
    /// cell height.
    pub fn monospace(page: HTexture, cell: Vec2, line_height: f32, chars: impl IntoIterator<Item = char>) -> Self {
        let columns = if cell.x > 0.0 { (page.width() as f32 / cell.x).floor().max(1.0) as usize } else { 1 };
        let mut builder = BitmapFontBuilder::new(cell.y, line_height).page(page);
        for (i, ch) in chars.into_iter().enumerate() {
            let col = (i % columns) as f32;
            let row = (i / columns) as f32;
            builder = builder.glyph(ch, Glyph {
                page: 0,
                uv: Rect::new(col * cell.x, row * cell.y, cell.x, cell.y),
                size: cell,
                bearing: Vec2::zero(),
                advance: cell.x,
            });
        }
        builder.build()
    }

    #[inline]
    fn scale(&self, font_size: f32) -> f32 {
        if self.base_size > 0.0 { font_size / self.base_size } else { 1.0 }
    }

    /// Lays out `text` at `font_size`, breaking lines at `'\n'` only.
    ///
    /// Whitespace and zero-sized glyphs advance the pen but produce no
    /// positioned glyph.
    pub fn layout(&self, text: &str, font_size: f32) -> Vec<TextLine> {
        let scale = self.scale(font_size);

        text.split('\n')
            .map(|line| {
                let mut pen = 0.0;
                let mut glyphs = Vec::new();
                for ch in line.chars() {
                    let Some(glyph) = self.glyph(ch) else {
                        continue;
                    };

                    if glyph.size.x > 0.0 && glyph.size.y > 0.0 && !ch.is_whitespace() {
                        if let Some(page) = self.pages.get(glyph.page) {
                            let page_size = page.size();
                            glyphs.push(PositionedGlyph {
                                page: glyph.page,
                                rect: Rect::from_origin_size(
                                    Vec2::new(pen + glyph.bearing.x * scale, glyph.bearing.y * scale),
                                    glyph.size * scale,
                                ),
                                uv_min: Vec2::new(glyph.uv.origin.x / page_size.x, glyph.uv.origin.y / page_size.y),
                                uv_max: Vec2::new(glyph.uv.max().x / page_size.x, glyph.uv.max().y / page_size.y),
                            });
                        }
                    }
                    pen += glyph.advance * scale;
                }
                TextLine { width: pen, glyphs }
            })
            .collect()
    }

    /// Size of the laid out text block at `font_size`.
    #[must_use]
    pub fn measure(&self, text: &str, font_size: f32) -> Vec2 {
        if text.is_empty() {
            return Vec2::zero();
        }
        let lines = self.layout(text, font_size);
        let width = lines.iter().map(|l| l.width).fold(0.0, f32::max);
        Vec2::new(width, lines.len() as f32 * self.line_height(font_size))
    }
}

/// Assembles a [`BitmapFont`] from atlas pages and a glyph table.
///
/// ```rust,ignore
/// let font = BitmapFontBuilder::new(16.0, 20.0)
///     .page(atlas)
///     .glyph('A', Glyph { page: 0, uv: Rect::new(0.0, 0.0, 10.0, 16.0), size: Vec2::new(10.0, 16.0),
///                         bearing: Vec2::new(0.0, 2.0), advance: 11.0 })
///     .build();
/// ```
#[derive(Debug)]
pub struct BitmapFontBuilder {
    base_size: f32,
    line_height: f32,
    pages: Vec<HTexture>,
    glyphs: HashMap<char, Glyph>,
}

impl BitmapFontBuilder {
    pub fn new(base_size: f32, line_height: f32) -> Self {
        Self { base_size, line_height, pages: Vec::new(), glyphs: HashMap::new() }
    }

    pub fn page(mut self, texture: HTexture) -> Self {
        self.pages.push(texture);
        self
    }

    pub fn glyph(mut self, ch: char, glyph: Glyph) -> Self {
        self.glyphs.insert(ch, glyph);
        self
    }

    pub fn build(self) -> BitmapFont {
        BitmapFont {
            base_size: self.base_size,
            line_height: self.line_height,
            pages: self.pages,
            glyphs: self.glyphs,
        }
    }
}
