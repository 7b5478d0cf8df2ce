use std::sync::Arc;

use delve_blocks::{AIR, BlockId, BlockRegistry, Palette};
use delve_geom::Vec3;
use delve_mesh_cpu::{ChunkMesh, build_chunk_mesh};
use hashbrown::HashMap;
use rayon::prelude::*;

use crate::chunk::Chunk;
use crate::coords::{BlockPos, ChunkCoord, spatial_hash, world_to_local};
use crate::generation::{DensityField, GenCtx, GenParams};

/// Sparse map of chunks covering a cubic play volume.
pub struct World {
    chunk_size: usize,
    map_size_chunks: usize,
    registry: Arc<BlockRegistry>,
    chunks: HashMap<ChunkCoord, Chunk>,
}

impl World {
    pub fn new(chunk_size: usize, map_size_chunks: usize, registry: Arc<BlockRegistry>) -> Self {
        Self {
            chunk_size,
            map_size_chunks,
            registry,
            chunks: HashMap::new(),
        }
    }

    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    #[inline]
    pub fn map_size_chunks(&self) -> usize {
        self.map_size_chunks
    }

    /// Edge length of the map in blocks.
    #[inline]
    pub fn map_size(&self) -> usize {
        self.chunk_size * self.map_size_chunks
    }

    #[inline]
    pub fn registry(&self) -> &Arc<BlockRegistry> {
        &self.registry
    }

    /// Every chunk coordinate of the map, x outermost.
    pub fn grid_coords(&self) -> Vec<ChunkCoord> {
        let n = self.map_size_chunks as i32;
        let mut out = Vec::with_capacity(self.map_size_chunks.pow(3));
        for cx in 0..n {
            for cy in 0..n {
                for cz in 0..n {
                    out.push(ChunkCoord::new(cx, cy, cz));
                }
            }
        }
        out
    }

    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    pub fn chunk_mut(&mut self, coord: ChunkCoord) -> Option<&mut Chunk> {
        self.chunks.get_mut(&coord)
    }

    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    pub fn insert_chunk(&mut self, chunk: Chunk) -> Option<Chunk> {
        debug_assert_eq!(chunk.size(), self.chunk_size);
        self.chunks.insert(chunk.coord, chunk)
    }

    #[inline]
    fn locate(&self, x: i32, y: i32, z: i32) -> (ChunkCoord, i32, i32, i32) {
        let s = self.chunk_size;
        (
            ChunkCoord::containing(x, y, z, s),
            world_to_local(x, s) as i32,
            world_to_local(y, s) as i32,
            world_to_local(z, s) as i32,
        )
    }

    /// Block at world coordinates; [`AIR`] where no chunk is loaded.
    pub fn block(&self, x: i32, y: i32, z: i32) -> BlockId {
        let (coord, lx, ly, lz) = self.locate(x, y, z);
        self.chunks
            .get(&coord)
            .map_or(AIR, |c| c.get_block(lx, ly, lz))
    }

    #[inline]
    pub fn block_at(&self, pos: BlockPos) -> BlockId {
        self.block(pos.x, pos.y, pos.z)
    }

    pub fn shade(&self, x: i32, y: i32, z: i32) -> f32 {
        let (coord, lx, ly, lz) = self.locate(x, y, z);
        self.chunks.get(&coord).map_or(0.0, |c| c.shade(lx, ly, lz))
    }

    /// Writes a block; edits on a chunk face also dirty the chunk across that face.
    /// Writes outside every loaded chunk are ignored and return false.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, id: BlockId) -> bool {
        let (coord, lx, ly, lz) = self.locate(x, y, z);
        let Some(chunk) = self.chunks.get_mut(&coord) else {
            return false;
        };
        if !chunk.set_block(lx, ly, lz, id) {
            return false;
        }
        let max = self.chunk_size as i32 - 1;
        if lx == 0 {
            self.mark_dirty(coord.offset(-1, 0, 0));
        }
        if lx == max {
            self.mark_dirty(coord.offset(1, 0, 0));
        }
        if ly == 0 {
            self.mark_dirty(coord.offset(0, -1, 0));
        }
        if ly == max {
            self.mark_dirty(coord.offset(0, 1, 0));
        }
        if lz == 0 {
            self.mark_dirty(coord.offset(0, 0, -1));
        }
        if lz == max {
            self.mark_dirty(coord.offset(0, 0, 1));
        }
        true
    }

    #[inline]
    pub fn set_block_at(&mut self, pos: BlockPos, id: BlockId) -> bool {
        self.set_block(pos.x, pos.y, pos.z, id)
    }

    pub fn mark_dirty(&mut self, coord: ChunkCoord) {
        if let Some(c) = self.chunks.get_mut(&coord) {
            c.mark_dirty();
        }
    }

    pub fn is_block_occupied(&self, x: i32, y: i32, z: i32, include_transparent: bool) -> bool {
        self.registry
            .occupies(self.block(x, y, z), include_transparent)
    }

    /// True when any of the six face neighbors holds a non-air block.
    pub fn is_block_supported(&self, x: i32, y: i32, z: i32) -> bool {
        [
            (1, 0, 0),
            (-1, 0, 0),
            (0, 1, 0),
            (0, -1, 0),
            (0, 0, 1),
            (0, 0, -1),
        ]
        .iter()
        .any(|&(dx, dy, dz)| self.block(x + dx, y + dy, z + dz) != AIR)
    }

    /// Centre of the first air cell of a chunk in storage order.
    ///
    /// With `force`, a chunk without air gets its middle cell carved out. Without
    /// it, a full chunk yields `None` and the world is left untouched.
    pub fn spawn_pos(&mut self, coord: ChunkCoord, force: bool) -> Option<Vec3> {
        let s = self.chunk_size;
        let chunk = self.chunks.get(&coord)?;
        let (bx, by, bz) = coord.origin(s);
        if let Some(i) = chunk.blocks().iter().position(|&b| b == AIR) {
            let (lx, ly, lz) = (i % s, (i / s) % s, i / (s * s));
            let cell = BlockPos::new(bx + lx as i32, by + ly as i32, bz + lz as i32);
            return Some(cell.center());
        }
        if !force {
            return None;
        }
        let mid = (s / 2) as i32;
        let cell = BlockPos::new(bx + mid, by + mid, bz + mid);
        self.set_block_at(cell, AIR);
        Some(cell.center())
    }

    /// One forced spawn position per grid chunk, in [`World::grid_coords`] order.
    pub fn spawn_points(&mut self) -> Vec<Vec3> {
        self.grid_coords()
            .into_iter()
            .filter_map(|c| self.spawn_pos(c, true))
            .collect()
    }

    /// Replaces every chunk of the grid with freshly generated terrain.
    ///
    /// Chunks draw from independent random streams seeded from `rng`, so the
    /// result depends only on `rng`'s state and the field.
    pub fn generate(
        &mut self,
        field: &dyn DensityField,
        rng: &mut fastrand::Rng,
        palette: &Palette,
        params: &GenParams,
    ) {
        let base = rng.u64(..);
        let ctx = GenCtx {
            field,
            params,
            palette,
            barrier: self.registry.barrier(),
            map_size: self.map_size() as i32,
        };
        let size = self.chunk_size;
        let built: Vec<Chunk> = self
            .grid_coords()
            .into_par_iter()
            .map(|coord| {
                let mut chunk = Chunk::new(coord, size);
                let mut crng =
                    fastrand::Rng::with_seed(base ^ spatial_hash(coord.cx, coord.cy, coord.cz));
                chunk.generate(&ctx, &mut crng);
                chunk
            })
            .collect();
        log::info!(
            "generated {} chunks ({}^3 blocks, palette '{}')",
            built.len(),
            self.map_size(),
            palette.name
        );
        for chunk in built {
            self.insert_chunk(chunk);
        }
    }

    /// Meshes one chunk from scratch through the world, so seam faces see neighbors.
    pub fn build_mesh(&self, coord: ChunkCoord) -> ChunkMesh {
        build_chunk_mesh(
            coord.origin(self.chunk_size),
            self.chunk_size,
            &self.registry,
            |x, y, z| self.block(x, y, z),
            |x, y, z| self.shade(x, y, z),
        )
    }

    /// Rebuilds the chunk's mesh if it is dirty. Returns whether work was done.
    pub fn update_chunk(&mut self, coord: ChunkCoord) -> bool {
        match self.chunks.get(&coord) {
            Some(c) if c.is_dirty() => {}
            _ => return false,
        }
        let mesh = self.build_mesh(coord);
        if let Some(c) = self.chunks.get_mut(&coord) {
            c.install_mesh(mesh);
        }
        true
    }

    /// Rebuilds every dirty chunk (in parallel) and returns the rebuilt coordinates, sorted.
    pub fn update_meshes(&mut self) -> Vec<ChunkCoord> {
        let mut dirty: Vec<ChunkCoord> = self
            .chunks
            .values()
            .filter(|c| c.is_dirty())
            .map(|c| c.coord)
            .collect();
        if dirty.is_empty() {
            return dirty;
        }
        dirty.sort_unstable();
        let this = &*self;
        let built: Vec<(ChunkCoord, ChunkMesh)> = dirty
            .par_iter()
            .map(|&coord| (coord, this.build_mesh(coord)))
            .collect();
        for (coord, mesh) in built {
            if let Some(c) = self.chunks.get_mut(&coord) {
                c.install_mesh(mesh);
            }
        }
        log::debug!("rebuilt {} chunk meshes", dirty.len());
        dirty
    }

    /// Releases every mesh and drops all chunks.
    pub fn destroy(&mut self) {
        for chunk in self.chunks.values_mut() {
            chunk.release_mesh();
        }
        self.chunks.clear();
        log::info!("world destroyed");
    }
}
