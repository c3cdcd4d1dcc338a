use std::fmt;

use halcyon_engine::coords::{Rect, Vec2};
use halcyon_engine::paint::Color;
use halcyon_engine::resources::SpriteMaterial;
use halcyon_engine::sprite::{ImageSpriteDesc, QuadBuffers, TextSpriteDesc};

use crate::constraints::Constraints;
use crate::event::{EventResult, GuiCommand, GuiMouseEvent, MouseEventType};
use crate::signal::Event;
use crate::style::{ElementState, GuiLayoutOptions, GuiSkin};
use crate::widget::{ElementBase, Widget};

use super::layers::ImageTextLayers;

type TextFilter = Box<dyn Fn(&str) -> bool>;

/// A single-line text entry box.
///
/// Click to focus, then feed it committed text through
/// [`Widget::on_text_input`]. An optional filter vets every candidate value;
/// input that would produce a rejected value is dropped.
///
/// # Example
/// ```rust,ignore
/// let mut input = GuiInputBox::new(&skin).filter(|s| s.chars().all(|c| c.is_ascii_digit()));
/// input.on_text_changed.connect(|text: &String| log::debug!("now {text}"));
/// ```
pub struct GuiInputBox {
    base: ElementBase,
    text: String,
    hovered: bool,
    focused: bool,
    /// Text when focus was gained; `Cancel` restores it.
    text_at_focus: String,
    filter: Option<TextFilter>,
    image_desc: ImageSpriteDesc,
    layers: ImageTextLayers,

    /// Fired after user input changed the text.
    pub on_text_changed: Event<String>,
    /// Fired on [`GuiCommand::Confirm`] with the committed text.
    pub on_confirm: Event<String>,
}

impl GuiInputBox {
    pub const fn gui_type_name() -> &'static str {
        "InputBox"
    }

    pub fn new(skin: &GuiSkin) -> Self {
        Self::with_style(skin, Self::gui_type_name())
    }

    pub fn with_style(skin: &GuiSkin, style: &str) -> Self {
        let base = ElementBase::new(skin, style);
        let image_desc = ImageSpriteDesc {
            texture: base.style().normal.texture.clone(),
            border: base.style().border,
            ..Default::default()
        };
        Self {
            base,
            text: String::new(),
            hovered: false,
            focused: false,
            text_at_focus: String::new(),
            filter: None,
            image_desc,
            layers: ImageTextLayers::default(),
            on_text_changed: Event::new(),
            on_confirm: Event::new(),
        }
    }

    pub fn layout_options(mut self, v: GuiLayoutOptions) -> Self { self.base.set_layout_options(v); self }
    pub fn filter(mut self, f: impl Fn(&str) -> bool + 'static) -> Self { self.filter = Some(Box::new(f)); self }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text without firing [`on_text_changed`](Self::on_text_changed).
    /// The filter does not apply. While focused, the new text is also what
    /// `Cancel` restores.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.focused {
            self.text_at_focus.clone_from(&text);
        }
        if self.text != text {
            self.text = text;
            self.base.mark_content_dirty();
        }
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn style_name(&self) -> &str {
        self.base.style_name()
    }

    /// Switches to another style and re-resolves it.
    pub fn set_style(&mut self, skin: &GuiSkin, style: &str) {
        self.base.set_style_name(skin, style);
        self.image_desc.border = self.base.style().border;
        self.refresh_texture();
    }

    fn accepts(&self, candidate: &str) -> bool {
        self.filter.as_ref().is_none_or(|f| f(candidate))
    }

    fn element_state(&self) -> ElementState {
        if self.focused {
            ElementState::Focused
        } else if self.hovered {
            ElementState::Hover
        } else {
            ElementState::Normal
        }
    }

    fn refresh_texture(&mut self) {
        self.image_desc.texture = self.base.style().state(self.element_state()).texture.clone();
        self.base.mark_content_dirty();
    }

    fn commit(&mut self, text: String) {
        self.text = text;
        self.base.mark_content_dirty();
        let current = self.text.clone();
        self.on_text_changed.emit(&current);
    }
}

impl fmt::Debug for GuiInputBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuiInputBox")
            .field("text", &self.text)
            .field("hovered", &self.hovered)
            .field("focused", &self.focused)
            .field("filtered", &self.filter.is_some())
            .finish_non_exhaustive()
    }
}

impl Widget for GuiInputBox {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let style = self.base.style();
        let texture = self.image_desc.texture.as_ref().map_or(Vec2::zero(), |t| t.size());
        let text = style
            .font
            .as_ref()
            .map_or(Vec2::zero(), |f| f.measure(&self.text, style.font_size))
            + Vec2::new(style.content_offset.h(), style.content_offset.v());
        self.base.measure(texture.max(text), constraints)
    }

    fn layout(&mut self, area: Rect, clip: Rect, depth: u32) {
        self.base.set_layout(area, clip, depth);
    }

    fn bounds(&self) -> Rect {
        self.base.area()
    }

    fn update_render_elements(&mut self) {
        if !self.base.take_content_dirty() {
            return;
        }
        log::debug!("rebuilding input box geometry ({} chars)", self.text.len());

        let area = self.base.area();
        self.image_desc.width = area.size.x;
        self.image_desc.height = area.size.y;
        self.image_desc.tint = self.base.tint();

        let content = self.base.content_bounds();
        let style = self.base.style();
        let text_desc = TextSpriteDesc {
            text: self.text.clone(),
            font: style.font.clone(),
            font_size: style.font_size,
            width: content.size.x,
            height: content.size.y,
            horz_align: style.text_horz_align,
            vert_align: style.text_vert_align,
            tint: self.base.text_color(self.element_state()),
        };

        self.layers.update(&self.image_desc, &text_desc);
    }

    fn is_content_dirty(&self) -> bool {
        self.base.is_content_dirty()
    }

    fn num_render_elements(&self) -> usize {
        self.layers.num_render_elements()
    }

    fn material(&self, idx: usize) -> Option<&SpriteMaterial> {
        self.layers.material(idx)
    }

    fn num_quads(&self, idx: usize) -> usize {
        self.layers.num_quads(idx)
    }

    fn render_element_depth(&self, idx: usize) -> u32 {
        self.layers.depth(idx, self.base.depth())
    }

    fn fill_buffer(&self, buffers: &mut QuadBuffers<'_>, start_quad: usize, max_quads: usize, idx: usize) -> usize {
        self.layers.fill_buffer(buffers, start_quad, max_quads, idx, &self.base)
    }

    fn on_mouse_event(&mut self, event: &GuiMouseEvent) -> EventResult {
        match event.kind {
            MouseEventType::Over => {
                self.hovered = true;
                self.refresh_texture();
            }
            MouseEventType::Out => {
                self.hovered = false;
                self.refresh_texture();
            }
            MouseEventType::Down => self.set_focus(true),
            MouseEventType::Up => {}
            MouseEventType::Move => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    fn on_text_input(&mut self, text: &str) -> EventResult {
        if !self.focused {
            return EventResult::Ignored;
        }
        let candidate = format!("{}{text}", self.text);
        if self.accepts(&candidate) {
            self.commit(candidate);
        } else {
            log::trace!("input box rejected {candidate:?}");
        }
        EventResult::Consumed
    }

    fn on_command(&mut self, command: GuiCommand) -> EventResult {
        if !self.focused {
            return EventResult::Ignored;
        }
        match command {
            GuiCommand::Backspace => {
                let mut candidate = self.text.clone();
                if candidate.pop().is_some() && self.accepts(&candidate) {
                    self.commit(candidate);
                }
            }
            GuiCommand::Confirm => {
                self.set_focus(false);
                let current = self.text.clone();
                self.on_confirm.emit(&current);
            }
            GuiCommand::Cancel => {
                let original = std::mem::take(&mut self.text_at_focus);
                self.set_focus(false);
                if self.text != original {
                    self.commit(original);
                }
            }
        }
        EventResult::Consumed
    }

    fn set_focus(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            if focused {
                self.text_at_focus.clone_from(&self.text);
            }
            log::trace!("input box focus: {focused}");
            self.refresh_texture();
        }
    }

    fn has_input_focus(&self) -> bool {
        self.focused
    }

    fn set_tint(&mut self, color: Color) {
        self.base.set_tint(color);
    }

    fn tint(&self) -> Color {
        self.base.tint()
    }

    fn style_updated(&mut self, skin: &GuiSkin) {
        self.base.refresh_style(skin);
        self.image_desc.border = self.base.style().border;
        self.refresh_texture();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::style::{GuiElementStyle, GuiStateStyle};
    use crate::test_support::{layout_at, mono_font, sprite_texture};

    fn skin() -> GuiSkin {
        let state = |w: u32| GuiStateStyle { texture: Some(sprite_texture(w, 14)), ..Default::default() };
        GuiSkin::new().with_style(
            "InputBox",
            GuiElementStyle {
                normal: state(40),
                hover: state(41),
                focused: state(42),
                font: Some(mono_font()),
                ..Default::default()
            },
        )
    }

    fn focused(input: GuiInputBox) -> GuiInputBox {
        let mut input = input;
        input.set_focus(true);
        input
    }

    fn changes(input: &GuiInputBox) -> Rc<RefCell<Vec<String>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        input.on_text_changed.connect(move |s: &String| sink.borrow_mut().push(s.clone()));
        seen
    }

    #[test]
    fn unfocused_box_ignores_text() {
        let mut input = GuiInputBox::new(&skin());
        assert_eq!(input.on_text_input("a"), EventResult::Ignored);
        assert_eq!(input.text(), "");
    }

    #[test]
    fn click_focuses() {
        let mut input = GuiInputBox::new(&skin());
        input.on_mouse_event(&GuiMouseEvent::new(MouseEventType::Down, Vec2::zero()));
        assert!(input.has_input_focus());
        assert_eq!(input.image_desc.texture.as_ref().map(|t| t.width()), Some(42.0));
    }

    #[test]
    fn typing_appends_and_notifies() {
        let mut input = focused(GuiInputBox::new(&skin()));
        let seen = changes(&input);
        input.on_text_input("1");
        input.on_text_input("2");
        input.on_command(GuiCommand::Backspace);
        assert_eq!(input.text(), "1");
        assert_eq!(*seen.borrow(), vec!["1", "12", "1"]);
    }

    #[test]
    fn filter_drops_rejected_input() {
        let mut input = focused(GuiInputBox::new(&skin()).filter(|s| s.chars().all(|c| c.is_ascii_digit())));
        let seen = changes(&input);
        input.on_text_input("4");
        assert!(input.on_text_input("x").is_consumed());
        assert_eq!(input.text(), "4");
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn set_text_is_silent() {
        let mut input = GuiInputBox::new(&skin());
        let seen = changes(&input);
        input.set_text("abc");
        assert_eq!(input.text(), "abc");
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn confirm_reports_text_and_drops_focus() {
        let mut input = focused(GuiInputBox::new(&skin()));
        let confirmed = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&confirmed);
        input.on_confirm.connect(move |s: &String| *sink.borrow_mut() = Some(s.clone()));
        input.on_text_input("go");
        input.on_command(GuiCommand::Confirm);
        assert_eq!(confirmed.borrow().as_deref(), Some("go"));
        assert!(!input.has_input_focus());
    }

    #[test]
    fn cancel_restores_text_from_focus_gain() {
        let mut input = GuiInputBox::new(&skin());
        input.set_text("7");
        input.set_focus(true);
        let seen = changes(&input);
        input.on_text_input("5");
        input.on_command(GuiCommand::Cancel);
        assert_eq!(input.text(), "7");
        assert!(!input.has_input_focus());
        assert_eq!(*seen.borrow(), vec!["75", "7"]);
    }

    #[test]
    fn cancel_keeps_text_set_while_focused() {
        let mut input = focused(GuiInputBox::new(&skin()));
        input.set_text("9");
        let seen = changes(&input);
        input.on_text_input("1");
        input.on_command(GuiCommand::Cancel);
        assert_eq!(input.text(), "9");
        assert_eq!(*seen.borrow(), vec!["91", "9"]);
    }

    #[test]
    fn renders_background_and_text() {
        let mut input = GuiInputBox::new(&skin());
        input.set_text("ab");
        layout_at(&mut input, Vec2::zero());
        assert_eq!(input.bounds().size, Vec2::new(40.0, 14.0));
        input.update_render_elements();
        assert_eq!(input.num_render_elements(), 2);
        assert_eq!(input.num_quads(1), 2);
    }
}
