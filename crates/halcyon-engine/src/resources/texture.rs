use std::fmt;
use std::path::Path;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Context;

use crate::coords::Vec2;
use crate::paint::Color;

static NEXT_TEXTURE_ID: AtomicU64 = AtomicU64::new(1);

/// Shared handle to an immutable texture.
pub type HTexture = Rc<Texture>;

/// Process-unique texture identifier. Renderers key GPU uploads on it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TextureId(u64);

impl TextureId {
    fn next() -> Self {
        TextureId(NEXT_TEXTURE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Error returned when constructing or decoding a [`Texture`].
#[derive(Debug, Clone, PartialEq)]
pub enum TextureError {
    /// Pixel buffer length does not match `width * height * 4`.
    SizeMismatch { expected: usize, actual: usize },
    /// The encoded image could not be decoded.
    Decode(String),
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureError::SizeMismatch { expected, actual } => {
                write!(f, "texture pixel buffer has {actual} bytes, expected {expected}")
            }
            TextureError::Decode(msg) => write!(f, "texture decode error: {msg}"),
        }
    }
}

impl std::error::Error for TextureError {}

/// CPU-side RGBA8 texture.
///
/// The pixel data is kept so an external renderer can upload it; the GUI
/// layer only reads the dimensions.
pub struct Texture {
    id: TextureId,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl fmt::Debug for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("id", &self.id)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Texture {
    /// Wraps tightly packed RGBA8 pixels.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, TextureError> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(TextureError::SizeMismatch { expected, actual: pixels.len() });
        }
        Ok(Self { id: TextureId::next(), width, height, pixels })
    }

    /// A texture filled with a single color.
    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        let texel = color.to_rgba8();
        let pixels = texel.repeat(width as usize * height as usize);
        Self { id: TextureId::next(), width, height, pixels }
    }

    /// Decodes any image format enabled on the `image` crate.
    pub fn decode(bytes: &[u8]) -> Result<Self, TextureError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| TextureError::Decode(e.to_string()))?
            .to_rgba8();
        let (width, height) = img.dimensions();
        Self::from_rgba8(width, height, img.into_raw())
    }

    /// Reads and decodes an image file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("reading texture {}", path.display()))?;
        let texture = Self::decode(&bytes)
            .with_context(|| format!("decoding texture {}", path.display()))?;
        log::debug!("loaded texture {} ({}x{})", path.display(), texture.width, texture.height);
        Ok(texture)
    }

    #[inline]
    pub fn id(&self) -> TextureId {
        self.id
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Tightly packed RGBA8 rows, top row first.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}
