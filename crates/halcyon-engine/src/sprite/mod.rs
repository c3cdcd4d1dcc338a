//! Sprites: geometry descriptors turned into quad buffers.
//!
//! A sprite is rebuilt from a descriptor with `update`, after which it
//! exposes one or more *render elements* (one material + a batch of quads
//! each). Geometry is stored in sprite-local space; `fill_buffer` applies the
//! caller's offset and clip rect while writing into caller-owned buffers.
//!
//! Extending:
//! - add a sprite type holding a `Vec<SpriteRenderElement>`
//! - implement [`Sprite::render_elements`]; the rest of the trait is provided

mod buffers;
mod image_sprite;
mod quad;
mod text_sprite;

pub use buffers::{QuadBufferSet, QuadBuffers, INDICES_PER_QUAD, VERTICES_PER_QUAD};
pub use image_sprite::{ImageSprite, ImageSpriteDesc};
pub use quad::Quad;
pub use text_sprite::{TextHorzAlign, TextSprite, TextSpriteDesc, TextVertAlign};

use crate::coords::{Rect, Vec2};
use crate::resources::SpriteMaterial;

/// One material plus the quads drawn with it, in sprite-local coordinates.
#[derive(Debug, Clone)]
pub struct SpriteRenderElement {
    pub material: SpriteMaterial,
    pub quads: Vec<Quad>,
}

/// The rendering-service contract widgets build on.
pub trait Sprite {
    /// Render elements produced by the last `update`.
    fn render_elements(&self) -> &[SpriteRenderElement];

    #[inline]
    fn num_render_elements(&self) -> usize {
        self.render_elements().len()
    }

    #[inline]
    fn material(&self, idx: usize) -> Option<&SpriteMaterial> {
        self.render_elements().get(idx).map(|e| &e.material)
    }

    #[inline]
    fn num_quads(&self, idx: usize) -> usize {
        self.render_elements().get(idx).map_or(0, |e| e.quads.len())
    }

    /// Area covered by all quads once moved to `offset`, clipped to `clip`.
    fn bounds(&self, offset: Vec2, clip: Rect) -> Rect {
        let covered = self
            .render_elements()
            .iter()
            .flat_map(|e| e.quads.iter())
            .map(|q| q.rect)
            .reduce(Rect::union);

        covered
            .and_then(|r| r.translate(offset).intersect(clip))
            .unwrap_or(Rect::from_origin_size(offset, Vec2::zero()))
    }

    /// Writes the quads of render element `idx` starting at quad slot
    /// `start_quad`.
    ///
    /// `max_quads` is the number of quad slots the caller reserved in
    /// `buffers`. Returns the number of quads written; a request that does not
    /// fit is truncated and logged.
    fn fill_buffer(
        &self,
        buffers: &mut QuadBuffers<'_>,
        start_quad: usize,
        max_quads: usize,
        idx: usize,
        offset: Vec2,
        clip: Rect,
    ) -> usize {
        let Some(element) = self.render_elements().get(idx) else {
            log::warn!("fill_buffer: render element {idx} out of range");
            return 0;
        };

        let capacity = max_quads.min(buffers.capacity());
        let available = capacity.saturating_sub(start_quad);
        let count = element.quads.len().min(available);
        if count < element.quads.len() {
            log::warn!(
                "fill_buffer: element {idx} needs {} quads at slot {start_quad}, only {available} fit",
                element.quads.len()
            );
        }

        for (i, quad) in element.quads.iter().take(count).enumerate() {
            let placed = quad.translate(offset).clipped(clip);
            buffers.write_quad(start_quad + i, &placed);
        }
        count
    }
}
