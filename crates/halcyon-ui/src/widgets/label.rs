use halcyon_engine::coords::{Rect, Vec2};
use halcyon_engine::paint::Color;
use halcyon_engine::resources::SpriteMaterial;
use halcyon_engine::sprite::{QuadBuffers, Sprite, TextSprite, TextSpriteDesc};

use crate::constraints::Constraints;
use crate::event::{EventResult, GuiMouseEvent};
use crate::style::{ElementState, GuiLayoutOptions, GuiSkin};
use crate::widget::{ElementBase, Widget};

/// A static line of text.
///
/// # Example
/// ```rust,ignore
/// let label = GuiLabel::new(&skin, "Position");
/// ```
#[derive(Debug)]
pub struct GuiLabel {
    base: ElementBase,
    text: String,
    desc: TextSpriteDesc,
    sprite: TextSprite,
}

impl GuiLabel {
    pub const fn gui_type_name() -> &'static str {
        "Label"
    }

    pub fn new(skin: &GuiSkin, text: impl Into<String>) -> Self {
        Self::with_style(skin, text, Self::gui_type_name())
    }

    pub fn with_style(skin: &GuiSkin, text: impl Into<String>, style: &str) -> Self {
        Self {
            base: ElementBase::new(skin, style),
            text: text.into(),
            desc: TextSpriteDesc::default(),
            sprite: TextSprite::new(),
        }
    }

    pub fn layout_options(mut self, v: GuiLayoutOptions) -> Self { self.base.set_layout_options(v); self }

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

    pub fn style_name(&self) -> &str {
        self.base.style_name()
    }

    /// Switches to another style and re-resolves it.
    pub fn set_style(&mut self, skin: &GuiSkin, style: &str) {
        self.base.set_style_name(skin, style);
    }

    /// Natural size of the text plus the style's content offset.
    fn optimal_size(&self) -> Vec2 {
        let style = self.base.style();
        let text = style
            .font
            .as_ref()
            .map(|f| f.measure(&self.text, style.font_size))
            .unwrap_or_else(Vec2::zero);
        text + Vec2::new(style.content_offset.h(), style.content_offset.v())
    }
}

impl Widget for GuiLabel {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        self.base.measure(self.optimal_size(), constraints)
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

        let content = self.base.content_bounds();
        let style = self.base.style();
        self.desc.text.clone_from(&self.text);
        self.desc.font = style.font.clone();
        self.desc.font_size = style.font_size;
        self.desc.width = content.size.x;
        self.desc.height = content.size.y;
        self.desc.horz_align = style.text_horz_align;
        self.desc.vert_align = style.text_vert_align;
        self.desc.tint = self.base.text_color(ElementState::Normal);
        self.sprite.update(&self.desc);
    }

    fn is_content_dirty(&self) -> bool {
        self.base.is_content_dirty()
    }

    fn num_render_elements(&self) -> usize {
        self.sprite.num_render_elements()
    }

    fn material(&self, idx: usize) -> Option<&SpriteMaterial> {
        self.sprite.material(idx)
    }

    fn num_quads(&self, idx: usize) -> usize {
        self.sprite.num_quads(idx)
    }

    fn render_element_depth(&self, _idx: usize) -> u32 {
        self.base.depth()
    }

    fn fill_buffer(&self, buffers: &mut QuadBuffers<'_>, start_quad: usize, max_quads: usize, idx: usize) -> usize {
        self.sprite.fill_buffer(
            buffers,
            start_quad,
            max_quads,
            idx,
            self.base.content_bounds().origin,
            self.base.content_clip(),
        )
    }

    fn on_mouse_event(&mut self, _event: &GuiMouseEvent) -> EventResult {
        EventResult::Ignored
    }

    fn set_tint(&mut self, color: Color) {
        self.base.set_tint(color);
    }

    fn tint(&self) -> Color {
        self.base.tint()
    }

    fn style_updated(&mut self, skin: &GuiSkin) {
        self.base.refresh_style(skin);
    }
}
