use halcyon_engine::resources::SpriteMaterial;
use halcyon_engine::sprite::{ImageSprite, ImageSpriteDesc, QuadBuffers, Sprite, TextSprite, TextSpriteDesc};

use crate::widget::ElementBase;

/// Which sprite a flat render-element index belongs to, with the index
/// local to that sprite.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Layer {
    Image(usize),
    Text(usize),
}

/// A background image with a text layer on top, exposed as one flat list:
/// image elements first, then text elements.
///
/// The image is drawn one depth step behind the text. It is positioned on
/// the element area; the text on the content bounds.
#[derive(Debug, Default)]
pub(crate) struct ImageTextLayers {
    image: ImageSprite,
    text: TextSprite,
}

impl ImageTextLayers {
    pub fn update(&mut self, image: &ImageSpriteDesc, text: &TextSpriteDesc) {
        self.image.update(image);
        self.text.update(text);
    }

    pub fn num_render_elements(&self) -> usize {
        self.image.num_render_elements() + self.text.num_render_elements()
    }

    pub fn locate(&self, idx: usize) -> Option<Layer> {
        let num_image = self.image.num_render_elements();
        if idx < num_image {
            return Some(Layer::Image(idx));
        }
        let local = idx - num_image;
        (local < self.text.num_render_elements()).then_some(Layer::Text(local))
    }

    pub fn material(&self, idx: usize) -> Option<&SpriteMaterial> {
        match self.locate(idx)? {
            Layer::Image(i) => self.image.material(i),
            Layer::Text(i) => self.text.material(i),
        }
    }

    pub fn num_quads(&self, idx: usize) -> usize {
        match self.locate(idx) {
            Some(Layer::Image(i)) => self.image.num_quads(i),
            Some(Layer::Text(i)) => self.text.num_quads(i),
            None => 0,
        }
    }

    pub fn depth(&self, idx: usize, depth: u32) -> u32 {
        match self.locate(idx) {
            Some(Layer::Image(_)) => depth.saturating_add(1),
            _ => depth,
        }
    }

    pub fn fill_buffer(
        &self,
        buffers: &mut QuadBuffers<'_>,
        start_quad: usize,
        max_quads: usize,
        idx: usize,
        base: &ElementBase,
    ) -> usize {
        match self.locate(idx) {
            Some(Layer::Image(i)) => {
                self.image.fill_buffer(buffers, start_quad, max_quads, i, base.area().origin, base.clip())
            }
            Some(Layer::Text(i)) => {
                self.text.fill_buffer(buffers, start_quad, max_quads, i, base.content_bounds().origin, base.content_clip())
            }
            None => {
                log::warn!("render element index {idx} out of range");
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use halcyon_engine::coords::{Rect, Vec2};
    use halcyon_engine::paint::Color;
    use halcyon_engine::resources::Texture;
    use halcyon_engine::text::{BitmapFontBuilder, Glyph};

    use super::*;
    use crate::test_support::{mono_font, sprite_texture};

    fn two_page_font() -> halcyon_engine::text::HFont {
        let glyph = |page| Glyph {
            page,
            uv: Rect::new(0.0, 0.0, 8.0, 10.0),
            size: Vec2::new(8.0, 10.0),
            bearing: Vec2::zero(),
            advance: 8.0,
        };
        Rc::new(
            BitmapFontBuilder::new(10.0, 12.0)
                .page(Rc::new(Texture::solid(16, 16, Color::white())))
                .page(Rc::new(Texture::solid(16, 16, Color::white())))
                .glyph('a', glyph(0))
                .glyph('b', glyph(1))
                .build(),
        )
    }

    fn layers(with_image: bool, text: &str, font: halcyon_engine::text::HFont) -> ImageTextLayers {
        let mut layers = ImageTextLayers::default();
        let image = ImageSpriteDesc {
            width: 20.0,
            height: 20.0,
            texture: with_image.then(|| sprite_texture(4, 4)),
            ..Default::default()
        };
        let text = TextSpriteDesc { text: text.into(), font: Some(font), ..Default::default() };
        layers.update(&image, &text);
        layers
    }

    #[test]
    fn text_elements_follow_image_elements() {
        let layers = layers(true, "ab", two_page_font());
        assert_eq!(layers.num_render_elements(), 3);
        assert_eq!(layers.locate(0), Some(Layer::Image(0)));
        assert_eq!(layers.locate(1), Some(Layer::Text(0)));
        assert_eq!(layers.locate(2), Some(Layer::Text(1)));
        assert_eq!(layers.locate(3), None);
    }

    #[test]
    fn without_image_text_starts_at_zero() {
        let layers = layers(false, "ab", two_page_font());
        assert_eq!(layers.locate(0), Some(Layer::Text(0)));
        assert_eq!(layers.locate(1), Some(Layer::Text(1)));
        assert_eq!(layers.num_quads(1), 1);
    }

    #[test]
    fn image_sits_one_step_behind_text() {
        let layers = layers(true, "hi", mono_font());
        assert_eq!(layers.depth(0, 4), 5);
        assert_eq!(layers.depth(1, 4), 4);
    }

    #[test]
    fn quad_counts_per_layer() {
        let layers = layers(true, "hey", mono_font());
        assert_eq!(layers.num_quads(0), 1);
        assert_eq!(layers.num_quads(1), 3);
        assert_eq!(layers.num_quads(9), 0);
        assert!(layers.material(9).is_none());
    }
}
