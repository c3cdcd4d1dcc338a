use std::collections::HashMap;

use halcyon_engine::coords::RectOffset;
use halcyon_engine::paint::Color;
use halcyon_engine::resources::HSpriteTexture;
use halcyon_engine::sprite::{TextHorzAlign, TextVertAlign};
use halcyon_engine::text::HFont;

/// Visuals for one interaction state.
#[derive(Debug, Clone)]
pub struct GuiStateStyle {
    pub texture: Option<HSpriteTexture>,
    pub text_color: Color,
}

impl Default for GuiStateStyle {
    fn default() -> Self {
        Self { texture: None, text_color: Color::white() }
    }
}

/// The eight per-state slots a style carries. `*On` variants are used by
/// widgets with a toggled state.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ElementState {
    Normal,
    Hover,
    Active,
    Focused,
    NormalOn,
    HoverOn,
    ActiveOn,
    FocusedOn,
}

/// Immutable bundle of per-state resources and layout defaults for one
/// widget type.
#[derive(Debug, Clone)]
pub struct GuiElementStyle {
    pub normal: GuiStateStyle,
    pub hover: GuiStateStyle,
    pub active: GuiStateStyle,
    pub focused: GuiStateStyle,
    pub normal_on: GuiStateStyle,
    pub hover_on: GuiStateStyle,
    pub active_on: GuiStateStyle,
    pub focused_on: GuiStateStyle,

    /// Nine-slice border of the state textures, in texels.
    pub border: RectOffset,
    /// Outer spacing requested from the parent layout.
    pub margins: RectOffset,
    /// Inset from the element bounds to its content (text) area.
    pub content_offset: RectOffset,

    pub font: Option<HFont>,
    pub font_size: f32,
    pub text_horz_align: TextHorzAlign,
    pub text_vert_align: TextVertAlign,

    pub fixed_width: bool,
    pub width: f32,
    pub fixed_height: bool,
    pub height: f32,
    /// Zero means "no limit" for all four.
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,

    /// Style names used by child elements, keyed by the child's role.
    pub sub_styles: HashMap<String, String>,
}

impl Default for GuiElementStyle {
    fn default() -> Self {
        Self {
            normal: GuiStateStyle::default(),
            hover: GuiStateStyle::default(),
            active: GuiStateStyle::default(),
            focused: GuiStateStyle::default(),
            normal_on: GuiStateStyle::default(),
            hover_on: GuiStateStyle::default(),
            active_on: GuiStateStyle::default(),
            focused_on: GuiStateStyle::default(),
            border: RectOffset::default(),
            margins: RectOffset::default(),
            content_offset: RectOffset::default(),
            font: None,
            font_size: 10.0,
            text_horz_align: TextHorzAlign::Left,
            text_vert_align: TextVertAlign::Center,
            fixed_width: false,
            width: 0.0,
            fixed_height: false,
            height: 0.0,
            min_width: 0.0,
            max_width: 0.0,
            min_height: 0.0,
            max_height: 0.0,
            sub_styles: HashMap::new(),
        }
    }
}

impl GuiElementStyle {
    #[inline]
    pub fn state(&self, state: ElementState) -> &GuiStateStyle {
        match state {
            ElementState::Normal => &self.normal,
            ElementState::Hover => &self.hover,
            ElementState::Active => &self.active,
            ElementState::Focused => &self.focused,
            ElementState::NormalOn => &self.normal_on,
            ElementState::HoverOn => &self.hover_on,
            ElementState::ActiveOn => &self.active_on,
            ElementState::FocusedOn => &self.focused_on,
        }
    }

    /// Style name for the child element playing `role`; falls back to `role`
    /// itself when the style does not override it.
    pub fn sub_style_name<'a>(&'a self, role: &'a str) -> &'a str {
        self.sub_styles.get(role).map_or(role, String::as_str)
    }

    /// Maps `role` to `style_name` for child elements.
    pub fn with_sub_style(mut self, role: impl Into<String>, style_name: impl Into<String>) -> Self {
        self.sub_styles.insert(role.into(), style_name.into());
        self
    }
}
