//! Bitmap fonts.
//!
//! A [`BitmapFont`] is a set of atlas pages plus a glyph table. Fonts can be
//! assembled from pre-baked atlases with [`BitmapFontBuilder`] or rasterized
//! from TrueType/OpenType data with [`BitmapFont::from_ttf`].

mod font;
mod rasterize;

pub use font::{BitmapFont, BitmapFontBuilder, Glyph, HFont, PositionedGlyph, TextLine};
pub use rasterize::FontLoadError;
