/// Flat render buffers for one chunk, consumed as an indexed triangle mesh.
///
/// Per vertex: position `xyz`, uv `(u, v, layer)` where `layer` selects the
/// texture-array slice, and an `rgb` tint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChunkMesh {
    pub positions: Vec<f32>,
    pub uvs: Vec<f32>,
    pub colors: Vec<f32>,
    pub indices: Vec<u32>,
}

impl ChunkMesh {
    /// Appends one quad from unit-cell tables, offset to `origin`.
    pub fn push_quad(
        &mut self,
        origin: [f32; 3],
        corners: &[[f32; 3]; 4],
        uvs: &[[f32; 2]; 4],
        winding: &[u32; 6],
        layer: f32,
        tint: f32,
    ) {
        // Indices refer to the vertices about to be appended.
        let base = self.vertex_count() as u32;
        self.indices.extend(winding.iter().map(|i| base + i));
        for (c, uv) in corners.iter().zip(uvs) {
            self.positions
                .extend_from_slice(&[origin[0] + c[0], origin[1] + c[1], origin[2] + c[2]]);
            self.uvs.extend_from_slice(&[uv[0], uv[1], layer]);
            self.colors.extend_from_slice(&[tint, tint, tint]);
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.indices.len() / 6
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Releases the buffers entirely (capacity included).
    pub fn clear(&mut self) {
        *self = ChunkMesh::default();
    }
}
