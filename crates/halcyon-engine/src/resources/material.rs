use std::rc::Rc;

use crate::paint::Color;

use super::HTexture;

/// Shader family a render element is drawn with.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MaterialKind {
    /// Full RGBA texture sample.
    Image,
    /// Alpha-coverage glyph atlas sample.
    Text,
}

/// Material description for one render element.
///
/// Two render elements can be drawn in the same batch iff their materials
/// compare equal: same texture handle, same kind, same tint.
#[derive(Debug, Clone)]
pub struct SpriteMaterial {
    pub texture: HTexture,
    pub kind: MaterialKind,
    pub tint: Color,
}

impl SpriteMaterial {
    #[inline]
    pub fn new(texture: HTexture, kind: MaterialKind, tint: Color) -> Self {
        Self { texture, kind, tint }
    }
}

impl PartialEq for SpriteMaterial {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.texture, &other.texture)
            && self.kind == other.kind
            && self.tint == other.tint
    }
}
