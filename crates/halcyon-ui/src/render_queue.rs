use core::cmp::Ordering;

use halcyon_engine::resources::SpriteMaterial;
use halcyon_engine::sprite::QuadBufferSet;

use crate::widget::Widget;

/// Stable paint-order key for collected render elements.
///
/// Ordering rules:
/// 1) `depth`: descending (deeper elements are painted first)
/// 2) `order`: ascending (collection order for equal depth)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SortKey {
    pub depth: u32,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(depth: u32, order: u32) -> Self {
        Self { depth, order }
    }
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        other.depth.cmp(&self.depth).then(self.order.cmp(&other.order))
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One render element's filled buffers, ready for an external renderer.
#[derive(Debug, Clone)]
pub struct DrawBatch {
    pub key: SortKey,
    pub material: SpriteMaterial,
    pub buffers: QuadBufferSet,
}

/// Collects the render elements of widget trees for one frame.
///
/// This is the hand-off point to the renderer: it owns no GPU state, it just
/// asks each widget to update and fill per-element buffers, and keeps them
/// in paint order.
#[derive(Debug, Default)]
pub struct RenderQueue {
    batches: Vec<DrawBatch>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl RenderQueue {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops collected batches. Keeps allocated capacity for reuse.
    pub fn clear(&mut self) {
        self.batches.clear();
        self.next_order = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    /// Brings `widget` up to date and records every render element it has.
    pub fn collect(&mut self, widget: &mut dyn Widget) {
        widget.update_render_elements();

        for idx in 0..widget.num_render_elements() {
            let Some(material) = widget.material(idx).cloned() else {
                continue;
            };
            let quads = widget.num_quads(idx);
            let mut buffers = QuadBufferSet::with_quads(quads);
            let written = widget.fill_buffer(&mut buffers.as_buffers(), 0, quads, idx);
            if written != quads {
                log::warn!("render element {idx} reported {quads} quads but wrote {written}");
            }

            let order = self.next_order;
            self.next_order = self.next_order.wrapping_add(1);
            self.batches.push(DrawBatch {
                key: SortKey::new(widget.render_element_depth(idx), order),
                material,
                buffers,
            });
            self.sorted_dirty = true;
        }
    }

    /// Batches in collection order.
    #[inline]
    pub fn batches(&self) -> &[DrawBatch] {
        &self.batches
    }

    /// Iterates batches back-to-front.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawBatch> {
        if self.sorted_dirty {
            self.sorted_indices.clear();
            self.sorted_indices.extend(0..self.batches.len());
            let batches = &self.batches;
            self.sorted_indices.sort_by(|&a, &b| batches[a].key.cmp(&batches[b].key));
            self.sorted_dirty = false;
        }

        self.sorted_indices.iter().map(|&i| &self.batches[i])
    }

    pub fn total_quads(&self) -> usize {
        self.batches.iter().map(|b| b.buffers.num_quads()).sum()
    }
}
