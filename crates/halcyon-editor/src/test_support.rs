use std::rc::Rc;

use halcyon_engine::coords::Vec2;
use halcyon_engine::paint::Color;
use halcyon_engine::resources::{HSpriteTexture, SpriteTexture, Texture};
use halcyon_engine::text::{BitmapFont, HFont};
use halcyon_ui::style::{GuiElementStyle, GuiSkin, GuiStateStyle};

pub(crate) fn sprite_texture(w: u32, h: u32) -> HSpriteTexture {
    Rc::new(SpriteTexture::full(Rc::new(Texture::solid(w, h, Color::white()))))
}

/// 8x10 cells, line height 12, printable ASCII.
pub(crate) fn mono_font() -> HFont {
    let page = Rc::new(Texture::solid(128, 128, Color::white()));
    Rc::new(BitmapFont::monospace(page, Vec2::new(8.0, 10.0), 12.0, ' '..='~'))
}

/// Field frames without textures, 30x14 inputs, labels sharing one font.
pub(crate) fn skin() -> GuiSkin {
    let font = mono_font();
    let state = |w: u32| GuiStateStyle { texture: Some(sprite_texture(w, 14)), ..Default::default() };
    GuiSkin::new()
        .with_style("Vector2Field", GuiElementStyle::default())
        .with_style("EditorFloatField", GuiElementStyle::default())
        .with_style(
            "EditorFieldInput",
            GuiElementStyle {
                normal: state(30),
                hover: state(31),
                focused: state(32),
                font: Some(font.clone()),
                ..Default::default()
            },
        )
        .with_style("EditorFieldLabel", GuiElementStyle { font: Some(font), ..Default::default() })
}
