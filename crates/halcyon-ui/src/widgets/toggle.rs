use halcyon_engine::coords::{Rect, Vec2};
use halcyon_engine::paint::Color;
use halcyon_engine::resources::{HSpriteTexture, SpriteMaterial};
use halcyon_engine::sprite::{ImageSpriteDesc, QuadBuffers, TextSpriteDesc};

use crate::constraints::Constraints;
use crate::event::{EventResult, GuiMouseEvent, MouseEventType};
use crate::signal::Event;
use crate::style::{ElementState, GuiElementStyle, GuiLayoutOptions, GuiSkin};
use crate::widget::{ElementBase, Widget};

use super::layers::ImageTextLayers;

/// Pointer interaction state of a toggle, independent of its on/off value.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum InteractionState {
    #[default]
    Normal,
    Hover,
    Active,
}

/// Style slot for a toggled value and interaction state.
pub fn toggle_element_state(toggled: bool, interaction: InteractionState) -> ElementState {
    match (toggled, interaction) {
        (false, InteractionState::Normal) => ElementState::Normal,
        (false, InteractionState::Hover) => ElementState::Hover,
        (false, InteractionState::Active) => ElementState::Active,
        (true, InteractionState::Normal) => ElementState::NormalOn,
        (true, InteractionState::Hover) => ElementState::HoverOn,
        (true, InteractionState::Active) => ElementState::ActiveOn,
    }
}

/// Texture a toggle shows for `toggled` and `interaction`.
pub fn select_texture(style: &GuiElementStyle, toggled: bool, interaction: InteractionState) -> Option<HSpriteTexture> {
    style.state(toggle_element_state(toggled, interaction)).texture.clone()
}

/// A two-state button: a nine-sliced background that follows the pointer
/// state plus an optional caption.
///
/// Pressing shows the active texture; releasing flips the value and fires
/// [`on_toggled`](Self::on_toggled). Hover changes never fire it.
///
/// # Example
/// ```rust,ignore
/// let mut toggle = GuiToggle::new(&skin, "Snap");
/// toggle.on_toggled.connect(|on: &bool| log::info!("snap: {on}"));
/// ```
#[derive(Debug)]
pub struct GuiToggle {
    base: ElementBase,
    text: String,
    toggled: bool,
    interaction: InteractionState,
    image_desc: ImageSpriteDesc,
    layers: ImageTextLayers,

    /// Fired with the new value each time a release flips the toggle.
    pub on_toggled: Event<bool>,
}

impl GuiToggle {
    pub const fn gui_type_name() -> &'static str {
        "Toggle"
    }

    pub fn new(skin: &GuiSkin, text: impl Into<String>) -> Self {
        Self::with_style(skin, text, Self::gui_type_name())
    }

    pub fn with_style(skin: &GuiSkin, text: impl Into<String>, style: &str) -> Self {
        let base = ElementBase::new(skin, style);
        let texture = select_texture(base.style(), false, InteractionState::Normal);
        let size = texture.as_ref().map_or(Vec2::zero(), |t| t.size());
        let image_desc = ImageSpriteDesc {
            width: size.x,
            height: size.y,
            texture,
            border: base.style().border,
            ..Default::default()
        };

        Self {
            base,
            text: text.into(),
            toggled: false,
            interaction: InteractionState::Normal,
            image_desc,
            layers: ImageTextLayers::default(),
            on_toggled: Event::new(),
        }
    }

    pub fn layout_options(mut self, v: GuiLayoutOptions) -> Self { self.base.set_layout_options(v); self }
    pub fn toggled(mut self, v: bool) -> Self { self.set_toggled(v); self }

    #[inline]
    pub fn is_toggled(&self) -> bool {
        self.toggled
    }

    /// Sets the value without firing [`on_toggled`](Self::on_toggled).
    pub fn set_toggled(&mut self, toggled: bool) {
        if self.toggled != toggled {
            self.toggled = toggled;
            self.refresh_texture();
        }
    }

    #[inline]
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.text != text {
            self.text = text;
            self.base.mark_content_dirty();
        }
    }

    /// Texture currently selected for display.
    #[inline]
    pub fn current_texture(&self) -> Option<&HSpriteTexture> {
        self.image_desc.texture.as_ref()
    }

    fn set_interaction(&mut self, interaction: InteractionState) {
        self.interaction = interaction;
        self.refresh_texture();
    }

    fn refresh_texture(&mut self) {
        self.image_desc.texture = select_texture(self.base.style(), self.toggled, self.interaction);
        self.base.mark_content_dirty();
    }

    fn element_state(&self) -> ElementState {
        toggle_element_state(self.toggled, self.interaction)
    }
}

impl Widget for GuiToggle {
    /// Natural size is the selected texture's size, zero without one.
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let optimal = self.image_desc.texture.as_ref().map_or(Vec2::zero(), |t| t.size());
        self.base.measure(optimal, constraints)
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
        log::debug!("rebuilding toggle geometry {:?}", self.text);

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
            MouseEventType::Over => self.set_interaction(InteractionState::Hover),
            MouseEventType::Out => self.set_interaction(InteractionState::Normal),
            MouseEventType::Down => self.set_interaction(InteractionState::Active),
            MouseEventType::Up => {
                self.toggled = !self.toggled;
                self.set_interaction(InteractionState::Normal);
                log::trace!("toggle {:?} -> {}", self.text, self.toggled);
                let toggled = self.toggled;
                self.on_toggled.emit(&toggled);
            }
            MouseEventType::Move => return EventResult::Ignored,
        }
        EventResult::Consumed
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

    use halcyon_engine::coords::RectOffset;
    use halcyon_engine::resources::MaterialKind;

    use super::*;
    use crate::style::GuiStateStyle;
    use crate::test_support::{filled, layout_at, mono_font, sprite_texture};

    /// Six distinct textures, each a different size so they can be told apart.
    fn style() -> GuiElementStyle {
        let state = |w: u32| GuiStateStyle { texture: Some(sprite_texture(w, 16)), ..Default::default() };
        GuiElementStyle {
            normal: state(20),
            hover: state(21),
            active: state(22),
            normal_on: state(30),
            hover_on: state(31),
            active_on: state(32),
            font: Some(mono_font()),
            ..Default::default()
        }
    }

    fn skin() -> GuiSkin {
        GuiSkin::new().with_style("Toggle", style())
    }

    fn texture_width(toggle: &GuiToggle) -> Option<f32> {
        toggle.current_texture().map(|t| t.width())
    }

    fn mouse(kind: MouseEventType) -> GuiMouseEvent {
        GuiMouseEvent::new(kind, Vec2::new(1.0, 1.0))
    }

    fn recorded(toggle: &GuiToggle) -> Rc<RefCell<Vec<bool>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        toggle.on_toggled.connect(move |v: &bool| sink.borrow_mut().push(*v));
        seen
    }

    #[test]
    fn select_texture_covers_all_six_states() {
        let style = style();
        let width = |toggled, i| select_texture(&style, toggled, i).map(|t| t.width());
        assert_eq!(width(false, InteractionState::Normal), Some(20.0));
        assert_eq!(width(false, InteractionState::Hover), Some(21.0));
        assert_eq!(width(false, InteractionState::Active), Some(22.0));
        assert_eq!(width(true, InteractionState::Normal), Some(30.0));
        assert_eq!(width(true, InteractionState::Hover), Some(31.0));
        assert_eq!(width(true, InteractionState::Active), Some(32.0));
    }

    #[test]
    fn press_then_release_flips_and_emits() {
        let mut toggle = GuiToggle::new(&skin(), "");
        let seen = recorded(&toggle);

        assert!(toggle.on_mouse_event(&mouse(MouseEventType::Down)).is_consumed());
        assert_eq!(texture_width(&toggle), Some(22.0));
        assert!(seen.borrow().is_empty());

        toggle.on_mouse_event(&mouse(MouseEventType::Up));
        assert!(toggle.is_toggled());
        assert_eq!(texture_width(&toggle), Some(30.0));

        toggle.on_mouse_event(&mouse(MouseEventType::Down));
        assert_eq!(texture_width(&toggle), Some(32.0));
        toggle.on_mouse_event(&mouse(MouseEventType::Up));
        assert!(!toggle.is_toggled());
        assert_eq!(texture_width(&toggle), Some(20.0));

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn hover_changes_texture_without_emitting() {
        let mut toggle = GuiToggle::new(&skin(), "");
        let seen = recorded(&toggle);

        toggle.on_mouse_event(&mouse(MouseEventType::Over));
        assert_eq!(texture_width(&toggle), Some(21.0));
        assert!(!toggle.is_toggled());
        toggle.on_mouse_event(&mouse(MouseEventType::Out));
        assert_eq!(texture_width(&toggle), Some(20.0));
        assert!(!toggle.is_toggled());

        toggle.set_toggled(true);
        toggle.on_mouse_event(&mouse(MouseEventType::Over));
        assert_eq!(texture_width(&toggle), Some(31.0));
        assert!(toggle.is_toggled());
        toggle.on_mouse_event(&mouse(MouseEventType::Out));
        assert_eq!(texture_width(&toggle), Some(30.0));
        assert!(toggle.is_toggled());

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn leaving_and_reentering_mid_press_keeps_value() {
        for initial in [false, true] {
            let mut toggle = GuiToggle::new(&skin(), "").toggled(initial);
            let seen = recorded(&toggle);

            toggle.on_mouse_event(&mouse(MouseEventType::Down));
            toggle.on_mouse_event(&mouse(MouseEventType::Out));
            assert_eq!(toggle.interaction(), InteractionState::Normal);
            toggle.on_mouse_event(&mouse(MouseEventType::Over));
            assert_eq!(toggle.interaction(), InteractionState::Hover);

            assert_eq!(toggle.is_toggled(), initial);
            assert!(seen.borrow().is_empty());
        }
    }

    #[test]
    fn move_is_ignored() {
        let mut toggle = GuiToggle::new(&skin(), "");
        toggle.update_render_elements();
        assert_eq!(toggle.on_mouse_event(&mouse(MouseEventType::Move)), EventResult::Ignored);
        assert!(!toggle.is_content_dirty());
    }

    #[test]
    fn set_toggled_is_silent() {
        let mut toggle = GuiToggle::new(&skin(), "");
        let seen = recorded(&toggle);
        toggle.set_toggled(true);
        assert!(toggle.is_toggled());
        assert_eq!(texture_width(&toggle), Some(30.0));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn geometry_is_rebuilt_lazily() {
        let mut toggle = GuiToggle::new(&skin(), "");
        layout_at(&mut toggle, Vec2::zero());
        toggle.update_render_elements();
        let before = toggle.material(0).map(|m| m.texture.width());
        assert_eq!(before, Some(20));

        toggle.on_mouse_event(&mouse(MouseEventType::Over));
        assert!(toggle.is_content_dirty());
        assert_eq!(toggle.material(0).map(|m| m.texture.width()), Some(20));

        toggle.update_render_elements();
        assert!(!toggle.is_content_dirty());
        assert_eq!(toggle.material(0).map(|m| m.texture.width()), Some(21));
    }

    #[test]
    fn optimal_size_follows_texture() {
        let toggle = GuiToggle::new(&skin(), "");
        assert_eq!(toggle.measure(Constraints::unbounded()), Vec2::new(20.0, 16.0));

        let bare = GuiToggle::new(&GuiSkin::new(), "");
        assert_eq!(bare.measure(Constraints::unbounded()), Vec2::zero());
        assert!(bare.current_texture().is_none());
    }

    #[test]
    fn caption_follows_image_with_one_step_less_depth() {
        let mut toggle = GuiToggle::new(&skin(), "On");
        let area = Rect::new(5.0, 5.0, 40.0, 16.0);
        toggle.layout(area, Rect::unbounded(), 2);
        toggle.update_render_elements();

        assert_eq!(toggle.num_render_elements(), 2);
        assert_eq!(toggle.material(0).map(|m| m.kind), Some(MaterialKind::Image));
        assert_eq!(toggle.material(1).map(|m| m.kind), Some(MaterialKind::Text));
        assert_eq!(toggle.num_quads(1), 2);
        assert_eq!(toggle.render_element_depth(0), 3);
        assert_eq!(toggle.render_element_depth(1), 2);

        let text = filled(&toggle, 1);
        assert_eq!(text.positions[0].x, 5.0);
    }

    #[test]
    fn nine_slice_border_comes_from_style() {
        let skin = GuiSkin::new().with_style("Toggle", GuiElementStyle { border: RectOffset::all(4.0), ..style() });
        let mut toggle = GuiToggle::new(&skin, "");
        toggle.layout(Rect::new(0.0, 0.0, 60.0, 20.0), Rect::unbounded(), 0);
        toggle.update_render_elements();
        assert_eq!(toggle.num_quads(0), 9);
    }

    #[test]
    fn tint_reaches_image_material() {
        let mut toggle = GuiToggle::new(&skin(), "");
        layout_at(&mut toggle, Vec2::zero());
        let half = Color::from_straight(1.0, 1.0, 1.0, 0.5);
        toggle.set_tint(half);
        toggle.update_render_elements();
        assert_eq!(toggle.tint(), half);
        assert_eq!(toggle.material(0).map(|m| m.tint), Some(half));
    }
}
