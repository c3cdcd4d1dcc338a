use std::path::Path;
use std::rc::Rc;

use anyhow::Context;
use halcyon_editor::GuiVector2Field;
use halcyon_engine::logging::{init_logging, LoggingConfig};
use halcyon_engine::resources::Texture;
use halcyon_engine::text::BitmapFont;
use halcyon_ui::prelude::*;

const FONT_SIZE: f32 = 13.0;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║         HALCYON WIDGET STUDIO          ║");
    println!("  ║   headless sprites  ·  scripted input  ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let mut args = std::env::args().skip(1);
    let font = load_font(args.next().as_deref())?;
    let toggle_texture = match args.next() {
        Some(path) => Some(
            Texture::load(&path)
                .map(|t| Rc::new(SpriteTexture::full(Rc::new(t))))
                .with_context(|| format!("loading toggle texture {path}"))?,
        ),
        None => None,
    };
    let skin = build_skin(font, toggle_texture);

    // ── TOGGLE ────────────────────────────────────────────────────────────
    let mut toggle = GuiToggle::new(&skin, "Snap to grid");
    toggle.on_toggled.connect(|on: &bool| println!("  [toggle] snap to grid -> {on}"));
    let size = toggle.measure(Constraints::loose(Vec2::new(400.0, 100.0)));
    toggle.layout(Rect::from_origin_size(Vec2::new(20.0, 20.0), size), Rect::new(0.0, 0.0, 400.0, 300.0), 0);

    let cursor = Vec2::new(30.0, 28.0);
    for kind in [
        MouseEventType::Over,
        MouseEventType::Down,
        MouseEventType::Up,
        MouseEventType::Down,
        MouseEventType::Up,
        MouseEventType::Out,
    ] {
        toggle.on_mouse_event(&GuiMouseEvent::new(kind, cursor));
    }

    // ── VECTOR2 FIELD ─────────────────────────────────────────────────────
    let mut offset = GuiVector2Field::new(&skin, Some("Offset"), 60.0);
    offset.on_value_changed.connect(|v: &Vec2| println!("  [offset] value -> ({}, {})", v.x, v.y));
    offset.set_value(Vec2::new(4.0, -2.0));
    offset.layout(Rect::new(20.0, 60.0, 260.0, 18.0), Rect::new(0.0, 0.0, 400.0, 300.0), 0);

    let x_input = offset.x_field().input().bounds();
    let click = x_input.origin + Vec2::new(4.0, 4.0);
    offset.on_mouse_event(&GuiMouseEvent::new(MouseEventType::Down, click));
    offset.on_command(GuiCommand::Backspace);
    for ch in ["1", "2", ".", "5"] {
        offset.on_text_input(ch);
    }
    offset.on_command(GuiCommand::Confirm);
    let value = offset.value();
    println!("  [offset] final value ({}, {})", value.x, value.y);

    // ── RENDER ────────────────────────────────────────────────────────────
    let mut queue = RenderQueue::new();
    queue.collect(&mut toggle);
    queue.collect(&mut offset);

    println!();
    println!("  {} batches, {} quads", queue.batches().len(), queue.total_quads());
    for batch in queue.iter_in_paint_order() {
        let texture = &batch.material.texture;
        println!(
            "    depth {:>2}  {:<5}  {:>3} quads  {}x{} texture  {} index bytes",
            batch.key.depth,
            format!("{:?}", batch.material.kind),
            batch.buffers.num_quads(),
            texture.width(),
            texture.height(),
            batch.buffers.index_bytes().len(),
        );
    }
    println!();

    Ok(())
}

/// Font from `path`, else the first system font found, else a blocky
/// fallback built in memory.
fn load_font(path: Option<&str>) -> anyhow::Result<HFont> {
    let bytes = match path {
        Some(path) => Some(std::fs::read(path).with_context(|| format!("reading font {path}"))?),
        None => [
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/noto/NotoSans-Regular.ttf",
            "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
        ]
        .iter()
        .find_map(|p| std::fs::read(Path::new(p)).ok()),
    };

    let font = match bytes {
        Some(bytes) => BitmapFont::from_ttf(&bytes, FONT_SIZE, ' '..='~').context("rasterizing font")?,
        None => {
            log::warn!("no font found; using built-in block font");
            let page = Rc::new(Texture::solid(128, 128, Color::white()));
            BitmapFont::monospace(page, Vec2::new(7.0, FONT_SIZE), FONT_SIZE + 3.0, ' '..='~')
        }
    };
    Ok(Rc::new(font))
}

fn solid(w: u32, h: u32, rgb: [u8; 3]) -> HSpriteTexture {
    let color = Color::from_srgb_u8(rgb[0], rgb[1], rgb[2], 255);
    Rc::new(SpriteTexture::full(Rc::new(Texture::solid(w, h, color))))
}

fn state(texture: HSpriteTexture, text_color: Color) -> GuiStateStyle {
    GuiStateStyle { texture: Some(texture), text_color }
}

/// Editor skin with flat procedural textures.
fn build_skin(font: HFont, toggle_texture: Option<HSpriteTexture>) -> GuiSkin {
    let text = Color::from_srgb_u8(230, 234, 240, 255);
    let dark = Color::from_srgb_u8(20, 24, 30, 255);

    let toggle_off = toggle_texture.unwrap_or_else(|| solid(120, 20, [51, 64, 89]));
    let toggle = GuiElementStyle {
        normal: state(toggle_off, text),
        hover: state(solid(120, 20, [64, 80, 110]), text),
        active: state(solid(120, 20, [38, 48, 66]), text),
        normal_on: state(solid(120, 20, [26, 178, 115]), dark),
        hover_on: state(solid(120, 20, [40, 200, 135]), dark),
        active_on: state(solid(120, 20, [20, 140, 90]), dark),
        border: RectOffset::all(3.0),
        content_offset: RectOffset::new(6.0, 6.0, 2.0, 2.0),
        font: Some(font.clone()),
        font_size: FONT_SIZE,
        ..Default::default()
    };

    let input = GuiElementStyle {
        normal: state(solid(40, 18, [15, 26, 41]), text),
        hover: state(solid(40, 18, [18, 36, 56]), text),
        focused: state(solid(40, 18, [0, 90, 140]), text),
        border: RectOffset::all(2.0),
        content_offset: RectOffset::new(3.0, 3.0, 0.0, 0.0),
        font: Some(font.clone()),
        font_size: FONT_SIZE,
        ..Default::default()
    };

    let label = GuiElementStyle { font: Some(font.clone()), font_size: FONT_SIZE, ..Default::default() };

    GuiSkin::new()
        .with_style(GuiToggle::gui_type_name(), toggle)
        .with_style(GuiLabel::gui_type_name(), label.clone())
        .with_style("EditorFieldLabel", label)
        .with_style("EditorFieldInput", input)
        .with_style(halcyon_editor::GuiFloatField::gui_type_name(), GuiElementStyle::default())
        .with_style(GuiVector2Field::gui_type_name(), GuiElementStyle::default())
}
