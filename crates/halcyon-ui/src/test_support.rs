use std::rc::Rc;

use halcyon_engine::coords::{Rect, Vec2};
use halcyon_engine::paint::Color;
use halcyon_engine::resources::{HSpriteTexture, SpriteTexture, Texture};
use halcyon_engine::sprite::QuadBufferSet;
use halcyon_engine::text::{BitmapFont, HFont};

use crate::widget::Widget;

pub(crate) fn sprite_texture(w: u32, h: u32) -> HSpriteTexture {
    Rc::new(SpriteTexture::full(Rc::new(Texture::solid(w, h, Color::white()))))
}

/// 8x10 cells, line height 12, printable ASCII.
pub(crate) fn mono_font() -> HFont {
    let page = Rc::new(Texture::solid(128, 128, Color::white()));
    Rc::new(BitmapFont::monospace(page, Vec2::new(8.0, 10.0), 12.0, ' '..='~'))
}

/// Lays `widget` out at its measured size from `origin`.
pub(crate) fn layout_at(widget: &mut dyn Widget, origin: Vec2) {
    let size = widget.measure(crate::constraints::Constraints::unbounded());
    widget.layout(Rect::from_origin_size(origin, size), Rect::unbounded(), 0);
}

pub(crate) fn filled(widget: &dyn Widget, idx: usize) -> QuadBufferSet {
    let quads = widget.num_quads(idx);
    let mut set = QuadBufferSet::with_quads(quads);
    let written = widget.fill_buffer(&mut set.as_buffers(), 0, quads, idx);
    assert_eq!(written, quads);
    set
}
