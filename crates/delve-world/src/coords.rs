use delve_geom::Vec3;

/// Chunk-grid coordinate; the key of the world's chunk map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cy: i32,
    pub cz: i32,
}

impl ChunkCoord {
    #[inline]
    pub const fn new(cx: i32, cy: i32, cz: i32) -> Self {
        Self { cx, cy, cz }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            cx: self.cx + dx,
            cy: self.cy + dy,
            cz: self.cz + dz,
        }
    }

    /// Chunk containing world block `(x, y, z)`.
    #[inline]
    pub fn containing(x: i32, y: i32, z: i32, size: usize) -> Self {
        Self {
            cx: world_to_chunk(x, size),
            cy: world_to_chunk(y, size),
            cz: world_to_chunk(z, size),
        }
    }

    /// World block coordinate of the chunk's minimum corner.
    #[inline]
    pub fn origin(self, size: usize) -> (i32, i32, i32) {
        let s = size as i32;
        (self.cx * s, self.cy * s, self.cz * s)
    }
}

impl From<(i32, i32, i32)> for ChunkCoord {
    fn from(value: (i32, i32, i32)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

/// Integer block coordinate in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Cell containing a world-space point.
    #[inline]
    pub fn containing(p: Vec3) -> Self {
        Self {
            x: p.x.floor() as i32,
            y: p.y.floor() as i32,
            z: p.z.floor() as i32,
        }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Minimum corner as a float point.
    #[inline]
    pub fn min_corner(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    #[inline]
    pub fn center(self) -> Vec3 {
        self.min_corner() + Vec3::splat(0.5)
    }
}

#[inline]
pub fn world_to_chunk(c: i32, size: usize) -> i32 {
    c.div_euclid(size as i32)
}

/// Floored modulo: negative world coordinates land in `0..size`.
#[inline]
pub fn world_to_local(c: i32, size: usize) -> usize {
    c.rem_euclid(size as i32) as usize
}

#[inline]
pub fn local_index(lx: usize, ly: usize, lz: usize, size: usize) -> usize {
    lx + ly * size + lz * size * size
}

/// Multiply-XOR combine of three integers.
///
/// Not collision free; only used to derive per-chunk random seeds.
#[inline]
pub fn spatial_hash(x: i32, y: i32, z: i32) -> u64 {
    let h = x.wrapping_mul(73_856_093) ^ y.wrapping_mul(19_349_663) ^ z.wrapping_mul(83_492_791);
    h as u32 as u64
}
