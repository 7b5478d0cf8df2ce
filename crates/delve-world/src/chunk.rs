use delve_blocks::{AIR, BlockId};
use delve_mesh_cpu::ChunkMesh;

use crate::coords::{ChunkCoord, local_index};
use crate::generation::{GenCtx, generate_chunk};

/// Fixed-size cube of blocks plus its cached render mesh.
#[derive(Clone, Debug)]
pub struct Chunk {
    pub coord: ChunkCoord,
    size: usize,
    blocks: Vec<BlockId>,
    shade: Vec<f32>,
    mesh: ChunkMesh,
    dirty: bool,
}

impl Chunk {
    /// An all-air chunk. Starts dirty so its first update builds a mesh.
    pub fn new(coord: ChunkCoord, size: usize) -> Self {
        let n = size * size * size;
        Self {
            coord,
            size,
            blocks: vec![AIR; n],
            shade: vec![0.0; n],
            mesh: ChunkMesh::default(),
            dirty: true,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn local(&self, lx: i32, ly: i32, lz: i32) -> Option<usize> {
        let s = self.size as i32;
        if lx < 0 || ly < 0 || lz < 0 || lx >= s || ly >= s || lz >= s {
            return None;
        }
        Some(local_index(lx as usize, ly as usize, lz as usize, self.size))
    }

    /// Block at local coordinates; [`AIR`] outside the chunk.
    #[inline]
    pub fn get_block(&self, lx: i32, ly: i32, lz: i32) -> BlockId {
        self.local(lx, ly, lz).map_or(AIR, |i| self.blocks[i])
    }

    /// Writes a block and marks the chunk dirty. Returns false (no change) out of bounds.
    pub fn set_block(&mut self, lx: i32, ly: i32, lz: i32, id: BlockId) -> bool {
        debug_assert_eq!(self.blocks.len(), self.size.pow(3));
        let Some(i) = self.local(lx, ly, lz) else {
            return false;
        };
        self.blocks[i] = id;
        self.dirty = true;
        true
    }

    #[inline]
    pub fn shade(&self, lx: i32, ly: i32, lz: i32) -> f32 {
        self.local(lx, ly, lz).map_or(0.0, |i| self.shade[i])
    }

    pub(crate) fn set_shade(&mut self, lx: usize, ly: usize, lz: usize, v: f32) {
        let i = local_index(lx, ly, lz, self.size);
        self.shade[i] = v;
    }

    pub fn blocks(&self) -> &[BlockId] {
        &self.blocks
    }

    /// Fills the chunk from the density field, replacing any previous contents.
    pub fn generate(&mut self, ctx: &GenCtx<'_>, rng: &mut fastrand::Rng) {
        self.blocks.fill(AIR);
        self.shade.fill(0.0);
        generate_chunk(self, ctx, rng);
        self.dirty = true;
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mesh(&self) -> &ChunkMesh {
        &self.mesh
    }

    /// Replaces the cached mesh and clears the dirty flag.
    pub fn install_mesh(&mut self, mesh: ChunkMesh) {
        self.mesh = mesh;
        self.dirty = false;
    }

    pub fn release_mesh(&mut self) {
        self.mesh.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_reads_air_and_rejects_writes() {
        let mut c = Chunk::new(ChunkCoord::new(0, 0, 0), 4);
        assert!(c.set_block(3, 3, 3, 0));
        assert_eq!(c.get_block(3, 3, 3), 0);
        assert_eq!(c.get_block(4, 0, 0), AIR);
        assert_eq!(c.get_block(-1, 0, 0), AIR);
        assert!(!c.set_block(0, 4, 0, 0));
        assert!(!c.set_block(0, 0, -1, 0));
        assert_eq!(c.blocks().len(), 64);
    }

    #[test]
    fn install_clears_dirty_and_edit_sets_it() {
        let mut c = Chunk::new(ChunkCoord::new(1, 2, 3), 4);
        assert!(c.is_dirty());
        c.install_mesh(ChunkMesh::default());
        assert!(!c.is_dirty());
        c.set_block(0, 0, 0, 1);
        assert!(c.is_dirty());
    }
}
