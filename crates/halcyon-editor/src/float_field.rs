use std::cell::Cell;
use std::rc::Rc;

use halcyon_engine::coords::{Rect, Vec2};
use halcyon_engine::paint::Color;
use halcyon_engine::resources::SpriteMaterial;
use halcyon_engine::sprite::QuadBuffers;
use halcyon_ui::constraints::Constraints;
use halcyon_ui::event::{EventResult, GuiCommand, GuiMouseEvent};
use halcyon_ui::signal::Event;
use halcyon_ui::style::{GuiLayoutOptions, GuiSkin};
use halcyon_ui::widget::Widget;
use halcyon_ui::widgets::GuiInputBox;

use crate::field::FieldBase;

/// Sub-style role for the numeric input box.
pub const INPUT_STYLE_ROLE: &str = "EditorFieldInput";

/// Accepts text on the way to a decimal number: an optional leading `-`,
/// digits and at most one `.`.
pub fn is_numeric_prefix(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let mut seen_dot = false;
    digits.chars().all(|c| match c {
        '0'..='9' => true,
        '.' if !seen_dot => {
            seen_dot = true;
            true
        }
        _ => false,
    })
}

fn format_value(value: f32) -> String {
    format!("{value}")
}

/// An editable `f32` with an optional label.
///
/// The value only changes when the edited text parses; partial input such
/// as `"-"` leaves it untouched. When the box loses focus the text is
/// rewritten from the value.
#[derive(Debug)]
pub struct GuiFloatField {
    field: FieldBase,
    input: GuiInputBox,
    value: f32,
    edited: Rc<Cell<bool>>,

    /// Fired when an edit produces a different value.
    pub on_value_changed: Event<f32>,
}

impl GuiFloatField {
    pub const fn gui_type_name() -> &'static str {
        "EditorFloatField"
    }

    pub fn new(skin: &GuiSkin, label: Option<&str>, label_width: f32) -> Self {
        Self::with_style(skin, label, label_width, Self::gui_type_name())
    }

    pub fn with_style(skin: &GuiSkin, label: Option<&str>, label_width: f32, style: &str) -> Self {
        let field = FieldBase::new(skin, style, label, label_width);
        let input_style = field.element().style().sub_style_name(INPUT_STYLE_ROLE).to_string();
        let mut input = GuiInputBox::with_style(skin, &input_style).filter(is_numeric_prefix);
        input.set_text(format_value(0.0));

        let edited = Rc::new(Cell::new(false));
        let flag = Rc::clone(&edited);
        input.on_text_changed.connect(move |_: &String| flag.set(true));

        Self { field, input, value: 0.0, edited, on_value_changed: Event::new() }
    }

    pub fn layout_options(mut self, v: GuiLayoutOptions) -> Self { self.field.element_mut().set_layout_options(v); self }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Sets the value without firing [`on_value_changed`](Self::on_value_changed).
    pub fn set_value(&mut self, value: f32) {
        self.value = value;
        self.input.set_text(format_value(value));
        self.edited.set(false);
    }

    #[inline]
    pub fn input(&self) -> &GuiInputBox {
        &self.input
    }

    #[inline]
    pub fn field(&self) -> &FieldBase {
        &self.field
    }

    pub fn style_name(&self) -> &str {
        self.field.element().style_name()
    }

    /// Switches the frame style; label and input styles follow its sub-styles.
    pub fn set_style(&mut self, skin: &GuiSkin, style: &str) {
        self.field.element_mut().set_style_name(skin, style);
        self.style_updated(skin);
    }

    /// Applies a pending edit from the input box.
    fn commit_edit(&mut self) {
        if !self.edited.replace(false) {
            return;
        }
        let Ok(parsed) = self.input.text().parse::<f32>() else {
            return;
        };
        if parsed.to_bits() != self.value.to_bits() {
            self.value = parsed;
            log::trace!("float field value -> {parsed}");
            self.on_value_changed.emit(&parsed);
        }
    }

    /// Commits pending edits; rewrites the text from the value if focus was lost.
    fn after_input(&mut self, was_focused: bool) {
        self.commit_edit();
        if was_focused && !self.input.has_input_focus() {
            self.input.set_text(format_value(self.value));
            self.edited.set(false);
        }
    }
}

impl Widget for GuiFloatField {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let content = self.input.measure(self.field.content_constraints(constraints));
        self.field.measure(content, constraints)
    }

    fn layout(&mut self, area: Rect, clip: Rect, depth: u32) {
        let content = self.field.layout(area, clip, depth);
        self.input.layout(content, clip, depth);
    }

    fn bounds(&self) -> Rect {
        self.field.bounds()
    }

    fn update_render_elements(&mut self) {
        self.field.update_render_elements(&mut [&mut self.input as &mut dyn Widget]);
    }

    fn is_content_dirty(&self) -> bool {
        self.field.is_content_dirty(&[&self.input as &dyn Widget])
    }

    fn num_render_elements(&self) -> usize {
        self.field.num_render_elements(&[&self.input as &dyn Widget])
    }

    fn material(&self, idx: usize) -> Option<&SpriteMaterial> {
        let (child, local) = self.field.locate(&[&self.input as &dyn Widget], idx)?;
        child.material(local)
    }

    fn num_quads(&self, idx: usize) -> usize {
        self.field
            .locate(&[&self.input as &dyn Widget], idx)
            .map_or(0, |(child, local)| child.num_quads(local))
    }

    fn render_element_depth(&self, idx: usize) -> u32 {
        self.field
            .locate(&[&self.input as &dyn Widget], idx)
            .map_or(self.field.element().depth(), |(child, local)| child.render_element_depth(local))
    }

    fn fill_buffer(&self, buffers: &mut QuadBuffers<'_>, start_quad: usize, max_quads: usize, idx: usize) -> usize {
        match self.field.locate(&[&self.input as &dyn Widget], idx) {
            Some((child, local)) => child.fill_buffer(buffers, start_quad, max_quads, local),
            None => {
                log::warn!("render element index {idx} out of range");
                0
            }
        }
    }

    fn on_mouse_event(&mut self, event: &GuiMouseEvent) -> EventResult {
        let was_focused = self.input.has_input_focus();
        let result = self.field.route_mouse(event, &mut [&mut self.input as &mut dyn Widget]);
        self.after_input(was_focused);
        result
    }

    fn on_text_input(&mut self, text: &str) -> EventResult {
        let was_focused = self.input.has_input_focus();
        let result = self.field.route_text(text, &mut [&mut self.input as &mut dyn Widget]);
        self.after_input(was_focused);
        result
    }

    fn on_command(&mut self, command: GuiCommand) -> EventResult {
        let was_focused = self.input.has_input_focus();
        let result = self.field.route_command(command, &mut [&mut self.input as &mut dyn Widget]);
        self.after_input(was_focused);
        result
    }

    fn set_focus(&mut self, focused: bool) {
        let was_focused = self.input.has_input_focus();
        self.input.set_focus(focused);
        self.after_input(was_focused);
    }

    fn has_input_focus(&self) -> bool {
        self.input.has_input_focus()
    }

    fn set_tint(&mut self, color: Color) {
        self.field.set_tint(color);
        self.input.set_tint(color);
    }

    fn tint(&self) -> Color {
        self.field.tint()
    }

    fn style_updated(&mut self, skin: &GuiSkin) {
        self.field.style_updated(skin);
        let input_style = self.field.element().style().sub_style_name(INPUT_STYLE_ROLE).to_string();
        self.input.set_style(skin, &input_style);
    }
}
