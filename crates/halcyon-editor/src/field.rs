use halcyon_engine::coords::{Rect, RectOffset, Vec2};
use halcyon_engine::paint::Color;
use halcyon_ui::constraints::Constraints;
use halcyon_ui::event::{EventResult, GuiCommand, GuiMouseEvent, MouseEventType};
use halcyon_ui::style::GuiSkin;
use halcyon_ui::widget::{locate_render_element, ElementBase, Widget};
use halcyon_ui::widgets::GuiLabel;

/// Sub-style role for the label column of editor fields.
pub const LABEL_STYLE_ROLE: &str = "EditorFieldLabel";

/// Shared part of every editor field: an optional label of fixed width on
/// the left, the frame style, and input routing to the content children.
///
/// Fields keep their content widgets themselves and pass them in as a
/// slice; the order of that slice is the order of their render elements
/// (after the label's).
#[derive(Debug)]
pub struct FieldBase {
    base: ElementBase,
    label: Option<GuiLabel>,
    label_width: f32,
    hovered: Option<usize>,
}

impl FieldBase {
    pub fn new(skin: &GuiSkin, style: &str, label: Option<&str>, label_width: f32) -> Self {
        let base = ElementBase::new(skin, style);
        let label = label.map(|text| {
            let label_style = base.style().sub_style_name(LABEL_STYLE_ROLE).to_string();
            GuiLabel::with_style(skin, text, &label_style)
        });
        Self { base, label, label_width, hovered: None }
    }

    #[inline]
    pub fn element(&self) -> &ElementBase {
        &self.base
    }

    #[inline]
    pub fn element_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    #[inline]
    pub fn label(&self) -> Option<&GuiLabel> {
        self.label.as_ref()
    }

    /// Width of the label column; zero without a label.
    #[inline]
    pub fn label_width(&self) -> f32 {
        if self.label.is_some() { self.label_width } else { 0.0 }
    }

    /// Constraints left for the content once the label column is taken.
    pub fn content_constraints(&self, constraints: Constraints) -> Constraints {
        constraints.shrink(RectOffset::new(self.label_width(), 0.0, 0.0, 0.0))
    }

    /// Field size for a measured content size.
    pub fn measure(&self, content: Vec2, constraints: Constraints) -> Vec2 {
        let label_height = self
            .label
            .as_ref()
            .map_or(0.0, |l| l.measure(Constraints::unbounded()).y);
        let optimal = Vec2::new(self.label_width() + content.x, label_height.max(content.y));
        self.base.measure(optimal, constraints)
    }

    /// Lays out the label column and returns the area left for content.
    pub fn layout(&mut self, area: Rect, clip: Rect, depth: u32) -> Rect {
        self.base.set_layout(area, clip, depth);

        let label_w = self.label_width().min(area.size.x);
        if let Some(label) = &mut self.label {
            label.layout(Rect::new(area.origin.x, area.origin.y, label_w, area.size.y), clip, depth);
        }
        Rect::new(area.origin.x + label_w, area.origin.y, area.size.x - label_w, area.size.y)
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.base.area()
    }

    pub fn update_render_elements(&mut self, content: &mut [&mut dyn Widget]) {
        self.base.take_content_dirty();
        if let Some(label) = &mut self.label {
            label.update_render_elements();
        }
        for child in content.iter_mut() {
            child.update_render_elements();
        }
    }

    pub fn is_content_dirty(&self, content: &[&dyn Widget]) -> bool {
        self.base.is_content_dirty()
            || self.label.as_ref().is_some_and(|l| l.is_content_dirty())
            || content.iter().any(|c| c.is_content_dirty())
    }

    pub fn num_render_elements(&self, content: &[&dyn Widget]) -> usize {
        self.label.as_ref().map_or(0, |l| l.num_render_elements())
            + content.iter().map(|c| c.num_render_elements()).sum::<usize>()
    }

    /// Maps a flat render-element index onto the label or a content child.
    pub fn locate<'a>(&'a self, content: &[&'a dyn Widget], idx: usize) -> Option<(&'a dyn Widget, usize)> {
        let mut idx = idx;
        if let Some(label) = &self.label {
            let n = label.num_render_elements();
            if idx < n {
                return Some((label as &dyn Widget, idx));
            }
            idx -= n;
        }
        locate_render_element(content, idx)
    }

    /// Routes a pointer event to the content child under the cursor.
    ///
    /// When the hovered child changes, the old one gets `Out` and the new
    /// one `Over` before the event itself is forwarded. A `Down` takes
    /// focus away from every other child.
    pub fn route_mouse(&mut self, event: &GuiMouseEvent, content: &mut [&mut dyn Widget]) -> EventResult {
        let target = match event.kind {
            MouseEventType::Out => None,
            _ => content.iter().position(|c| c.bounds().contains(event.position)),
        };

        let mut result = EventResult::Ignored;
        if target != self.hovered {
            if let Some(old) = self.hovered {
                if let Some(child) = content.get_mut(old) {
                    result = result.or(child.on_mouse_event(&event.with_kind(MouseEventType::Out)));
                }
            }
            if let Some(new) = target {
                if let Some(child) = content.get_mut(new) {
                    result = result.or(child.on_mouse_event(&event.with_kind(MouseEventType::Over)));
                }
            }
            log::trace!("field hover {:?} -> {:?}", self.hovered, target);
            self.hovered = target;
        }

        if event.kind == MouseEventType::Down {
            for (i, child) in content.iter_mut().enumerate() {
                if Some(i) != target && child.has_input_focus() {
                    child.set_focus(false);
                }
            }
        }

        let forwarded = matches!(event.kind, MouseEventType::Move | MouseEventType::Down | MouseEventType::Up);
        if let (true, Some(i)) = (forwarded, target) {
            if let Some(child) = content.get_mut(i) {
                result = result.or(child.on_mouse_event(event));
            }
        }
        result
    }

    /// Delivers text to the focused content child.
    pub fn route_text(&mut self, text: &str, content: &mut [&mut dyn Widget]) -> EventResult {
        content
            .iter_mut()
            .find(|c| c.has_input_focus())
            .map_or(EventResult::Ignored, |c| c.on_text_input(text))
    }

    /// Delivers a command to the focused content child.
    pub fn route_command(&mut self, command: GuiCommand, content: &mut [&mut dyn Widget]) -> EventResult {
        content
            .iter_mut()
            .find(|c| c.has_input_focus())
            .map_or(EventResult::Ignored, |c| c.on_command(command))
    }

    #[inline]
    pub fn tint(&self) -> Color {
        self.base.tint()
    }

    pub fn set_tint(&mut self, color: Color) {
        self.base.set_tint(color);
        if let Some(label) = &mut self.label {
            label.set_tint(color);
        }
    }

    /// Re-resolves the frame style, then the label style through it.
    pub fn style_updated(&mut self, skin: &GuiSkin) {
        self.base.refresh_style(skin);
        let label_style = self.base.style().sub_style_name(LABEL_STYLE_ROLE).to_string();
        if let Some(label) = &mut self.label {
            label.set_style(skin, &label_style);
        }
    }
}
