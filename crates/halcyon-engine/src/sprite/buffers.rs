use crate::coords::Vec2;

use super::Quad;

pub const VERTICES_PER_QUAD: usize = 4;
pub const INDICES_PER_QUAD: usize = 6;

/// Caller-owned output buffers for [`super::Sprite::fill_buffer`].
///
/// Quad slot `n` occupies vertices `4n..4n+4` and indices `6n..6n+6`. Vertex
/// order is top-left, top-right, bottom-left, bottom-right; the two
/// triangles are `(0, 1, 2)` and `(1, 3, 2)`.
pub struct QuadBuffers<'a> {
    pub positions: &'a mut [Vec2],
    pub uvs: &'a mut [Vec2],
    pub indices: &'a mut [u32],
}

impl QuadBuffers<'_> {
    /// Number of whole quad slots every buffer can hold.
    pub fn capacity(&self) -> usize {
        (self.positions.len() / VERTICES_PER_QUAD)
            .min(self.uvs.len() / VERTICES_PER_QUAD)
            .min(self.indices.len() / INDICES_PER_QUAD)
    }

    pub(crate) fn write_quad(&mut self, slot: usize, quad: &Quad) {
        let v = slot * VERTICES_PER_QUAD;
        let min = quad.rect.min();
        let max = quad.rect.max();

        self.positions[v] = min;
        self.positions[v + 1] = Vec2::new(max.x, min.y);
        self.positions[v + 2] = Vec2::new(min.x, max.y);
        self.positions[v + 3] = max;

        self.uvs[v] = quad.uv_min;
        self.uvs[v + 1] = Vec2::new(quad.uv_max.x, quad.uv_min.y);
        self.uvs[v + 2] = Vec2::new(quad.uv_min.x, quad.uv_max.y);
        self.uvs[v + 3] = quad.uv_max;

        let i = slot * INDICES_PER_QUAD;
        let base = v as u32;
        self.indices[i..i + INDICES_PER_QUAD]
            .copy_from_slice(&[base, base + 1, base + 2, base + 1, base + 3, base + 2]);
    }
}

/// Owned storage for a fixed number of quads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuadBufferSet {
    pub positions: Vec<Vec2>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
}

impl QuadBufferSet {
    pub fn with_quads(quads: usize) -> Self {
        Self {
            positions: vec![Vec2::zero(); quads * VERTICES_PER_QUAD],
            uvs: vec![Vec2::zero(); quads * VERTICES_PER_QUAD],
            indices: vec![0; quads * INDICES_PER_QUAD],
        }
    }

    #[inline]
    pub fn num_quads(&self) -> usize {
        self.indices.len() / INDICES_PER_QUAD
    }

    /// Borrowed view for `fill_buffer`.
    pub fn as_buffers(&mut self) -> QuadBuffers<'_> {
        QuadBuffers {
            positions: &mut self.positions,
            uvs: &mut self.uvs,
            indices: &mut self.indices,
        }
    }

    /// Raw vertex bytes (`[f32; 2]` per vertex) ready for upload.
    #[inline]
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    #[inline]
    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    #[inline]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;

    #[test]
    fn write_quad_uses_slot_offsets() {
        let mut set = QuadBufferSet::with_quads(2);
        let quad = Quad::new(Rect::new(1.0, 2.0, 3.0, 4.0), Vec2::zero(), Vec2::one());
        set.as_buffers().write_quad(1, &quad);

        assert_eq!(set.positions[4], Vec2::new(1.0, 2.0));
        assert_eq!(set.positions[7], Vec2::new(4.0, 6.0));
        assert_eq!(set.uvs[5], Vec2::new(1.0, 0.0));
        assert_eq!(&set.indices[6..12], &[4, 5, 6, 5, 7, 6]);
    }

    #[test]
    fn capacity_is_limited_by_smallest_buffer() {
        let mut positions = [Vec2::zero(); 8];
        let mut uvs = [Vec2::zero(); 8];
        let mut indices = [0u32; 6];
        let buffers = QuadBuffers { positions: &mut positions, uvs: &mut uvs, indices: &mut indices };
        assert_eq!(buffers.capacity(), 1);
    }

    #[test]
    fn byte_views_match_lengths() {
        let set = QuadBufferSet::with_quads(3);
        assert_eq!(set.position_bytes().len(), 12 * 8);
        assert_eq!(set.index_bytes().len(), 18 * 4);
    }
}
