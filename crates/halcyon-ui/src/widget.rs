use std::rc::Rc;

use halcyon_engine::coords::{Rect, Vec2};
use halcyon_engine::paint::Color;
use halcyon_engine::resources::SpriteMaterial;
use halcyon_engine::sprite::QuadBuffers;

use crate::constraints::Constraints;
use crate::event::{EventResult, GuiCommand, GuiMouseEvent};
use crate::style::{ElementState, GuiElementStyle, GuiLayoutOptions, GuiSkin};

// ── Widget trait ──────────────────────────────────────────────────────────

/// The capability interface every GUI element implements.
///
/// Four concerns: measure, layout, render elements and input. Composite
/// widgets implement it by delegating to the children they own.
///
/// Render elements are produced lazily: input and setters only mark the
/// widget dirty, and [`update_render_elements`](Self::update_render_elements)
/// rebuilds geometry once before the next draw. The render-element queries
/// describe the state as of the last update.
pub trait Widget {
    /// Size this widget wants within `constraints`.
    ///
    /// Must be deterministic; parents may call it several times per layout.
    fn measure(&self, constraints: Constraints) -> Vec2;

    /// Assigns the widget its area, clip rect and depth. Larger depth is
    /// drawn further back.
    fn layout(&mut self, area: Rect, clip: Rect, depth: u32);

    /// Area assigned by the last [`layout`](Self::layout).
    fn bounds(&self) -> Rect;

    /// Rebuilds geometry if the widget is dirty; no-op otherwise.
    fn update_render_elements(&mut self);

    fn is_content_dirty(&self) -> bool;

    fn num_render_elements(&self) -> usize;

    fn material(&self, idx: usize) -> Option<&SpriteMaterial>;

    fn num_quads(&self, idx: usize) -> usize;

    fn render_element_depth(&self, idx: usize) -> u32;

    /// Writes render element `idx` into `buffers` starting at quad slot
    /// `start_quad`; returns the number of quads written.
    fn fill_buffer(&self, buffers: &mut QuadBuffers<'_>, start_quad: usize, max_quads: usize, idx: usize) -> usize;

    fn on_mouse_event(&mut self, event: &GuiMouseEvent) -> EventResult;

    /// Committed text input, delivered to the focused widget.
    fn on_text_input(&mut self, _text: &str) -> EventResult {
        EventResult::Ignored
    }

    /// Editing command, delivered to the focused widget.
    fn on_command(&mut self, _command: GuiCommand) -> EventResult {
        EventResult::Ignored
    }

    fn set_focus(&mut self, _focused: bool) {}

    fn has_input_focus(&self) -> bool {
        false
    }

    fn set_tint(&mut self, color: Color);

    fn tint(&self) -> Color;

    /// Re-resolves styles after the skin changed.
    fn style_updated(&mut self, skin: &GuiSkin);
}

/// Maps a composite's flat render-element index onto the child that owns
/// it, walking `children` in order.
pub fn locate_render_element<'a>(children: &[&'a dyn Widget], idx: usize) -> Option<(&'a dyn Widget, usize)> {
    let mut local = idx;
    for &child in children {
        let n = child.num_render_elements();
        if local < n {
            return Some((child, local));
        }
        local -= n;
    }
    None
}

// ── ElementBase ───────────────────────────────────────────────────────────

/// State every element carries: resolved style, layout, tint and the dirty
/// flag. Widgets own one and forward to it.
#[derive(Debug, Clone)]
pub struct ElementBase {
    style_name: String,
    style: Rc<GuiElementStyle>,
    layout_options: GuiLayoutOptions,
    explicit_layout: bool,
    area: Rect,
    clip: Rect,
    depth: u32,
    tint: Color,
    content_dirty: bool,
}

impl ElementBase {
    pub fn new(skin: &GuiSkin, style_name: impl Into<String>) -> Self {
        let style_name = style_name.into();
        let style = skin.style(&style_name);
        let layout_options = GuiLayoutOptions::from_style(&style);
        Self {
            style_name,
            style,
            layout_options,
            explicit_layout: false,
            area: Rect::default(),
            clip: Rect::unbounded(),
            depth: 0,
            tint: Color::white(),
            content_dirty: true,
        }
    }

    #[inline]
    pub fn style(&self) -> &GuiElementStyle {
        &self.style
    }

    #[inline]
    pub fn style_name(&self) -> &str {
        &self.style_name
    }

    /// Re-resolves the style by name. Layout options follow the style unless
    /// they were set explicitly.
    pub fn refresh_style(&mut self, skin: &GuiSkin) {
        self.style = skin.style(&self.style_name);
        if !self.explicit_layout {
            self.layout_options = GuiLayoutOptions::from_style(&self.style);
        }
        self.content_dirty = true;
    }

    /// Switches to another style name and resolves it.
    pub fn set_style_name(&mut self, skin: &GuiSkin, style_name: impl Into<String>) {
        self.style_name = style_name.into();
        self.refresh_style(skin);
    }

    #[inline]
    pub fn layout_options(&self) -> &GuiLayoutOptions {
        &self.layout_options
    }

    pub fn set_layout_options(&mut self, options: GuiLayoutOptions) {
        self.layout_options = options;
        self.explicit_layout = true;
    }

    /// Applies layout options and parent constraints to a natural size.
    #[inline]
    pub fn measure(&self, optimal: Vec2, constraints: Constraints) -> Vec2 {
        constraints.constrain(self.layout_options.constrain(optimal))
    }

    /// Stores the new layout; marks dirty when anything changed.
    pub fn set_layout(&mut self, area: Rect, clip: Rect, depth: u32) {
        if self.area != area || self.clip != clip || self.depth != depth {
            self.area = area;
            self.clip = clip;
            self.depth = depth;
            self.content_dirty = true;
        }
    }

    #[inline]
    pub fn area(&self) -> Rect {
        self.area
    }

    #[inline]
    pub fn clip(&self) -> Rect {
        self.clip
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Area inside the style's content offset.
    #[inline]
    pub fn content_bounds(&self) -> Rect {
        self.area.inset(self.style.content_offset)
    }

    /// Content bounds clipped to the element clip rect.
    pub fn content_clip(&self) -> Rect {
        let content = self.content_bounds();
        content
            .intersect(self.clip)
            .unwrap_or(Rect::from_origin_size(content.origin, Vec2::zero()))
    }

    #[inline]
    pub fn tint(&self) -> Color {
        self.tint
    }

    pub fn set_tint(&mut self, tint: Color) {
        if self.tint != tint {
            self.tint = tint;
            self.content_dirty = true;
        }
    }

    /// Style text color for `state` with the tint applied.
    #[inline]
    pub fn text_color(&self, state: ElementState) -> Color {
        self.style.state(state).text_color.multiply(self.tint)
    }

    #[inline]
    pub fn mark_content_dirty(&mut self) {
        self.content_dirty = true;
    }

    #[inline]
    pub fn is_content_dirty(&self) -> bool {
        self.content_dirty
    }

    /// Returns the dirty flag and clears it.
    #[inline]
    pub fn take_content_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.content_dirty, false)
    }
}
