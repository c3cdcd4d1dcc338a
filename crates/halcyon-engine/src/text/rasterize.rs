use std::fmt;
use std::rc::Rc;

use crate::coords::{Rect, Vec2};
use crate::resources::Texture;

use super::{BitmapFont, BitmapFontBuilder, Glyph};

/// Atlas page width for rasterized fonts; the height grows to fit.
const ATLAS_WIDTH: usize = 256;
/// Empty texels kept around every glyph to avoid bleeding under filtering.
const GLYPH_PADDING: usize = 1;

/// Error returned by [`BitmapFont::from_ttf`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

struct Rasterized {
    ch: char,
    metrics: fontdue::Metrics,
    coverage: Vec<u8>,
    x: usize,
    y: usize,
}

impl BitmapFont {
    /// Rasterizes `chars` from TrueType/OpenType `bytes` at `size` pixels into
    /// a single white-on-transparent atlas page (coverage in alpha).
    pub fn from_ttf(
        bytes: &[u8],
        size: f32,
        chars: impl IntoIterator<Item = char>,
    ) -> Result<BitmapFont, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;

        let line = font
            .horizontal_line_metrics(size)
            .ok_or_else(|| FontLoadError("font has no horizontal line metrics".into()))?;

        // Shelf packing: fill rows left to right, start a new shelf when full.
        let mut glyphs = Vec::new();
        let (mut pen_x, mut shelf_y, mut shelf_h) = (GLYPH_PADDING, GLYPH_PADDING, 0usize);
        for ch in chars {
            let (metrics, coverage) = font.rasterize(ch, size);
            if metrics.width + 2 * GLYPH_PADDING > ATLAS_WIDTH {
                return Err(FontLoadError(format!(
                    "glyph {ch:?} is {} px wide, atlas is {ATLAS_WIDTH}",
                    metrics.width
                )));
            }
            if pen_x + metrics.width + GLYPH_PADDING > ATLAS_WIDTH {
                pen_x = GLYPH_PADDING;
                shelf_y += shelf_h + GLYPH_PADDING;
                shelf_h = 0;
            }
            let (w, h) = (metrics.width, metrics.height);
            glyphs.push(Rasterized { ch, metrics, coverage, x: pen_x, y: shelf_y });
            pen_x += w + GLYPH_PADDING;
            shelf_h = shelf_h.max(h);
        }

        let height = (shelf_y + shelf_h + GLYPH_PADDING).next_power_of_two();
        let mut pixels = vec![0u8; ATLAS_WIDTH * height * 4];
        for g in &glyphs {
            for row in 0..g.metrics.height {
                for col in 0..g.metrics.width {
                    let alpha = g.coverage[row * g.metrics.width + col];
                    let i = ((g.y + row) * ATLAS_WIDTH + g.x + col) * 4;
                    pixels[i..i + 4].copy_from_slice(&[255, 255, 255, alpha]);
                }
            }
        }

        let page = Texture::from_rgba8(ATLAS_WIDTH as u32, height as u32, pixels)
            .map_err(|e| FontLoadError(e.to_string()))?;

        let mut builder = BitmapFontBuilder::new(size, line.new_line_size).page(Rc::new(page));
        for g in &glyphs {
            let m = &g.metrics;
            let size = Vec2::new(m.width as f32, m.height as f32);
            builder = builder.glyph(g.ch, Glyph {
                page: 0,
                uv: Rect::from_origin_size(Vec2::new(g.x as f32, g.y as f32), size),
                size,
                bearing: Vec2::new(m.xmin as f32, line.ascent - (m.ymin as f32 + m.height as f32)),
                advance: m.advance_width,
            });
        }

        log::debug!("rasterized {} glyphs at {size}px into {ATLAS_WIDTH}x{height} atlas", glyphs.len());
        Ok(builder.build())
    }
}
