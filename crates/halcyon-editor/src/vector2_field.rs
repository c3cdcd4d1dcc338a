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

use crate::field::FieldBase;
use crate::float_field::GuiFloatField;

/// Label width of the `X`/`Y` labels in front of each component.
pub const ELEMENT_LABEL_WIDTH: f32 = 10.0;

/// Component-wise bit equality: `NaN` matches itself, `-0.0` differs from `0.0`.
fn same_bits(a: Vec2, b: Vec2) -> bool {
    a.x.to_bits() == b.x.to_bits() && a.y.to_bits() == b.y.to_bits()
}

/// Editor field for a [`Vec2`]: an optional label followed by one float
/// field per component.
///
/// The value is not stored; [`value`](Self::value) reads both components.
/// Edits in either component produce one
/// [`on_value_changed`](Self::on_value_changed) per input event.
///
/// # Example
/// ```rust,ignore
/// let mut offset = GuiVector2Field::new(&skin, Some("Offset"), 60.0);
/// offset.set_value(Vec2::new(4.0, -2.0));
/// offset.on_value_changed.connect(|v: &Vec2| log::info!("offset {v:?}"));
/// ```
#[derive(Debug)]
pub struct GuiVector2Field {
    field: FieldBase,
    x: GuiFloatField,
    y: GuiFloatField,
    component_changed: Rc<Cell<bool>>,

    /// Fired with the full value after either component changed.
    pub on_value_changed: Event<Vec2>,
}

impl GuiVector2Field {
    pub const fn gui_type_name() -> &'static str {
        "Vector2Field"
    }

    /// Style key the component fields are resolved through.
    pub const fn float_field_style_type() -> &'static str {
        GuiFloatField::gui_type_name()
    }

    pub fn new(skin: &GuiSkin, label: Option<&str>, label_width: f32) -> Self {
        Self::with_style(skin, label, label_width, Self::gui_type_name())
    }

    pub fn with_style(skin: &GuiSkin, label: Option<&str>, label_width: f32, style: &str) -> Self {
        let field = FieldBase::new(skin, style, label, label_width);
        let float_style = field.element().style().sub_style_name(Self::float_field_style_type()).to_string();
        let x = GuiFloatField::with_style(skin, Some("X"), ELEMENT_LABEL_WIDTH, &float_style);
        let y = GuiFloatField::with_style(skin, Some("Y"), ELEMENT_LABEL_WIDTH, &float_style);

        let component_changed = Rc::new(Cell::new(false));
        for component in [&x, &y] {
            let flag = Rc::clone(&component_changed);
            component.on_value_changed.connect(move |_: &f32| flag.set(true));
        }

        Self { field, x, y, component_changed, on_value_changed: Event::new() }
    }

    pub fn layout_options(mut self, v: GuiLayoutOptions) -> Self { self.field.element_mut().set_layout_options(v); self }

    #[inline]
    pub fn value(&self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }

    /// Writes both components. Fires [`on_value_changed`](Self::on_value_changed)
    /// once if either component differs from before.
    pub fn set_value(&mut self, value: Vec2) {
        let old = self.value();
        self.x.set_value(value.x);
        self.y.set_value(value.y);
        if !same_bits(old, value) {
            self.on_value_changed.emit(&value);
        }
    }

    #[inline]
    pub fn x_field(&self) -> &GuiFloatField {
        &self.x
    }

    #[inline]
    pub fn y_field(&self) -> &GuiFloatField {
        &self.y
    }

    #[inline]
    pub fn field(&self) -> &FieldBase {
        &self.field
    }

    fn float_style_name(&self) -> String {
        self.field.element().style().sub_style_name(Self::float_field_style_type()).to_string()
    }

    /// Emits once for everything the last routed event changed.
    fn flush_component_changes(&mut self) {
        if self.component_changed.replace(false) {
            let value = self.value();
            log::trace!("vector2 field value -> {value:?}");
            self.on_value_changed.emit(&value);
        }
    }
}

impl Widget for GuiVector2Field {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let inner = self.field.content_constraints(constraints);
        let x = self.x.measure(inner);
        let y = self.y.measure(inner);
        self.field.measure(Vec2::new(x.x + y.x, x.y.max(y.y)), constraints)
    }

    /// Components split the content area evenly.
    fn layout(&mut self, area: Rect, clip: Rect, depth: u32) {
        let content = self.field.layout(area, clip, depth);
        let half = (content.size.x * 0.5).floor();
        self.x.layout(Rect::new(content.origin.x, content.origin.y, half, content.size.y), clip, depth);
        self.y.layout(
            Rect::new(content.origin.x + half, content.origin.y, content.size.x - half, content.size.y),
            clip,
            depth,
        );
    }

    fn bounds(&self) -> Rect {
        self.field.bounds()
    }

    fn update_render_elements(&mut self) {
        self.field.update_render_elements(&mut [&mut self.x as &mut dyn Widget, &mut self.y]);
    }

    fn is_content_dirty(&self) -> bool {
        self.field.is_content_dirty(&[&self.x as &dyn Widget, &self.y])
    }

    fn num_render_elements(&self) -> usize {
        self.field.num_render_elements(&[&self.x as &dyn Widget, &self.y])
    }

    fn material(&self, idx: usize) -> Option<&SpriteMaterial> {
        let (child, local) = self.field.locate(&[&self.x as &dyn Widget, &self.y], idx)?;
        child.material(local)
    }

    fn num_quads(&self, idx: usize) -> usize {
        self.field
            .locate(&[&self.x as &dyn Widget, &self.y], idx)
            .map_or(0, |(child, local)| child.num_quads(local))
    }

    fn render_element_depth(&self, idx: usize) -> u32 {
        self.field
            .locate(&[&self.x as &dyn Widget, &self.y], idx)
            .map_or(self.field.element().depth(), |(child, local)| child.render_element_depth(local))
    }

    fn fill_buffer(&self, buffers: &mut QuadBuffers<'_>, start_quad: usize, max_quads: usize, idx: usize) -> usize {
        match self.field.locate(&[&self.x as &dyn Widget, &self.y], idx) {
            Some((child, local)) => child.fill_buffer(buffers, start_quad, max_quads, local),
            None => {
                log::warn!("render element index {idx} out of range");
                0
            }
        }
    }

    fn on_mouse_event(&mut self, event: &GuiMouseEvent) -> EventResult {
        let result = self.field.route_mouse(event, &mut [&mut self.x as &mut dyn Widget, &mut self.y]);
        self.flush_component_changes();
        result
    }

    fn on_text_input(&mut self, text: &str) -> EventResult {
        let result = self.field.route_text(text, &mut [&mut self.x as &mut dyn Widget, &mut self.y]);
        self.flush_component_changes();
        result
    }

    fn on_command(&mut self, command: GuiCommand) -> EventResult {
        let result = self.field.route_command(command, &mut [&mut self.x as &mut dyn Widget, &mut self.y]);
        self.flush_component_changes();
        result
    }

    /// Focus goes to the X component; clearing it clears both.
    fn set_focus(&mut self, focused: bool) {
        if focused {
            if !self.has_input_focus() {
                self.x.set_focus(true);
            }
        } else {
            self.x.set_focus(false);
            self.y.set_focus(false);
        }
        self.flush_component_changes();
    }

    fn has_input_focus(&self) -> bool {
        self.x.has_input_focus() || self.y.has_input_focus()
    }

    fn set_tint(&mut self, color: Color) {
        self.field.set_tint(color);
        self.x.set_tint(color);
        self.y.set_tint(color);
    }

    fn tint(&self) -> Color {
        self.field.tint()
    }

    fn style_updated(&mut self, skin: &GuiSkin) {
        self.field.style_updated(skin);
        let float_style = self.float_style_name();
        self.x.set_style(skin, &float_style);
        self.y.set_style(skin, &float_style);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use halcyon_engine::resources::MaterialKind;
    use halcyon_ui::event::MouseEventType;
    use halcyon_ui::style::GuiElementStyle;

    use super::*;
    use crate::test_support::skin;

    /// Label 40 wide, then X over [40, 80) and Y over [80, 120).
    fn laid_out(skin: &GuiSkin) -> GuiVector2Field {
        let mut field = GuiVector2Field::new(skin, Some("Pos"), 40.0);
        field.layout(Rect::new(0.0, 0.0, 120.0, 14.0), Rect::unbounded(), 0);
        field
    }

    fn changes(field: &GuiVector2Field) -> Rc<RefCell<Vec<Vec2>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        field.on_value_changed.connect(move |v: &Vec2| sink.borrow_mut().push(*v));
        seen
    }

    fn mouse(field: &mut GuiVector2Field, kind: MouseEventType, x: f32) -> EventResult {
        field.on_mouse_event(&GuiMouseEvent::new(kind, Vec2::new(x, 5.0)))
    }

    #[test]
    fn set_then_get_is_exact() {
        let mut field = GuiVector2Field::new(&skin(), None, 0.0);
        for v in [Vec2::new(1.5, -3.25), Vec2::new(0.1, 1e-7), Vec2::new(f32::MAX, f32::MIN_POSITIVE)] {
            field.set_value(v);
            assert_eq!(field.value(), v);
        }
    }

    #[test]
    fn set_value_writes_both_components() {
        let mut field = GuiVector2Field::new(&skin(), None, 0.0);
        field.set_value(Vec2::new(2.0, 7.0));
        assert_eq!(field.x_field().value(), 2.0);
        assert_eq!(field.y_field().value(), 7.0);
    }

    #[test]
    fn set_value_emits_once_per_change() {
        let mut field = GuiVector2Field::new(&skin(), None, 0.0);
        let seen = changes(&field);

        field.set_value(Vec2::new(1.0, 2.0));
        field.set_value(Vec2::new(1.0, 2.0));
        field.set_value(Vec2::new(1.0, 3.0));

        assert_eq!(*seen.borrow(), vec![Vec2::new(1.0, 2.0), Vec2::new(1.0, 3.0)]);
    }

    #[test]
    fn repeated_nan_is_not_a_change() {
        let mut field = GuiVector2Field::new(&skin(), None, 0.0);
        let seen = changes(&field);
        field.set_value(Vec2::new(f32::NAN, 1.0));
        field.set_value(Vec2::new(f32::NAN, 1.0));
        assert_eq!(seen.borrow().len(), 1);
        assert!(field.value().x.is_nan());
    }

    #[test]
    fn negative_zero_is_a_change() {
        let mut field = GuiVector2Field::new(&skin(), None, 0.0);
        let seen = changes(&field);
        field.set_value(Vec2::new(-0.0, 0.0));
        assert_eq!(seen.borrow().len(), 1);
        assert!(field.value().x.is_sign_negative());
        assert_eq!(field.x_field().input().text(), "-0");

        field.set_value(Vec2::new(-0.0, 0.0));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn set_value_while_editing_survives_cancel() {
        let mut field = laid_out(&skin());
        mouse(&mut field, MouseEventType::Down, 60.0);
        let seen = changes(&field);

        field.set_value(Vec2::new(7.0, 0.0));
        field.on_command(GuiCommand::Cancel);

        assert_eq!(field.value(), Vec2::new(7.0, 0.0));
        assert_eq!(field.x_field().input().text(), "7");
        assert_eq!(*seen.borrow(), vec![Vec2::new(7.0, 0.0)]);
    }

    #[test]
    fn component_edit_emits_one_composite_event() {
        let mut field = laid_out(&skin());
        field.set_value(Vec2::new(0.0, 9.0));
        let seen = changes(&field);

        assert!(mouse(&mut field, MouseEventType::Down, 60.0).is_consumed());
        assert!(field.x_field().has_input_focus());

        field.on_command(GuiCommand::Backspace);
        assert!(seen.borrow().is_empty());
        field.on_text_input("5");

        assert_eq!(*seen.borrow(), vec![Vec2::new(5.0, 9.0)]);
    }

    #[test]
    fn editing_y_keeps_x() {
        let mut field = laid_out(&skin());
        field.set_value(Vec2::new(3.0, 1.0));
        let seen = changes(&field);

        mouse(&mut field, MouseEventType::Down, 100.0);
        assert!(field.has_input_focus());
        assert!(field.y_field().has_input_focus() && !field.x_field().has_input_focus());
        field.on_text_input("2");

        assert_eq!(field.value(), Vec2::new(3.0, 12.0));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn clicking_other_component_moves_focus() {
        let mut field = laid_out(&skin());
        mouse(&mut field, MouseEventType::Down, 60.0);
        mouse(&mut field, MouseEventType::Down, 100.0);
        assert!(!field.x_field().has_input_focus());
        assert!(field.y_field().has_input_focus());

        field.set_focus(false);
        assert!(!field.has_input_focus());
    }

    #[test]
    fn hover_is_routed_per_component() {
        let mut field = laid_out(&skin());
        mouse(&mut field, MouseEventType::Move, 60.0);
        assert!(field.x_field().input().is_hovered());
        mouse(&mut field, MouseEventType::Move, 100.0);
        assert!(!field.x_field().input().is_hovered());
        assert!(field.y_field().input().is_hovered());
        mouse(&mut field, MouseEventType::Out, 200.0);
        assert!(!field.y_field().input().is_hovered());
    }

    #[test]
    fn hover_alone_never_emits() {
        let mut field = laid_out(&skin());
        let seen = changes(&field);
        mouse(&mut field, MouseEventType::Over, 60.0);
        mouse(&mut field, MouseEventType::Move, 100.0);
        mouse(&mut field, MouseEventType::Out, 100.0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn tint_reaches_every_part() {
        let mut field = laid_out(&skin());
        let c = Color::from_straight(0.2, 0.4, 0.6, 0.8);
        field.set_tint(c);

        assert_eq!(field.tint(), c);
        assert_eq!(field.x_field().tint(), c);
        assert_eq!(field.y_field().tint(), c);
        assert_eq!(field.field().label().map(|l| l.tint()), Some(c));
        assert_eq!(field.x_field().input().tint(), c);
    }

    #[test]
    fn render_elements_in_child_order() {
        let mut field = laid_out(&skin());
        field.update_render_elements();

        // "Pos" label, then per component: label text, input image, input text.
        assert_eq!(field.num_render_elements(), 7);
        let kinds: Vec<_> = (0..7).filter_map(|i| field.material(i).map(|m| m.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                MaterialKind::Text,
                MaterialKind::Text,
                MaterialKind::Image,
                MaterialKind::Text,
                MaterialKind::Text,
                MaterialKind::Image,
                MaterialKind::Text,
            ]
        );
        assert_eq!(field.num_quads(0), 3);
        assert_eq!(field.render_element_depth(2), 1);
        assert!(field.material(7).is_none());
    }

    #[test]
    fn component_layout_splits_content() {
        let field = laid_out(&skin());
        assert_eq!(field.x_field().bounds(), Rect::new(40.0, 0.0, 40.0, 14.0));
        assert_eq!(field.y_field().bounds(), Rect::new(80.0, 0.0, 40.0, 14.0));
        assert_eq!(field.x_field().input().bounds(), Rect::new(50.0, 0.0, 30.0, 14.0));
    }

    #[test]
    fn measure_adds_label_and_components() {
        let field = GuiVector2Field::new(&skin(), Some("Pos"), 40.0);
        assert_eq!(field.measure(Constraints::unbounded()), Vec2::new(120.0, 14.0));
    }

    #[test]
    fn style_update_reresolves_component_style() {
        let mut skin = skin();
        let mut field = GuiVector2Field::new(&skin, None, 0.0);
        assert_eq!(field.x_field().style_name(), "EditorFloatField");

        skin.set_style(
            "Vector2Field",
            GuiElementStyle::default().with_sub_style(GuiVector2Field::float_field_style_type(), "CompactFloat"),
        );
        skin.set_style("CompactFloat", GuiElementStyle::default());
        field.style_updated(&skin);

        assert_eq!(field.x_field().style_name(), "CompactFloat");
        assert_eq!(field.y_field().style_name(), "CompactFloat");
    }
}
