use delve_blocks::BlockId;
use delve_geom::Vec3;
use delve_world::{BlockPos, World};

/// Longest ray the traversal will walk, whatever range is requested.
const MAX_RAY_RANGE: f32 = 1024.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub hit: bool,
    /// Block in the final cell (the hit block when `hit`).
    pub block: BlockId,
    /// Ray parameter at which the final cell was entered.
    pub distance: f32,
    pub pos: BlockPos,
    /// Last cell traversed before `pos`; where a placed block goes.
    pub last_empty: BlockPos,
}

#[inline]
fn axis_setup(origin: f32, dir: f32) -> (i32, f32, f32) {
    if dir > 0.0 {
        let step = 1.0 / dir;
        (1, step, (origin.floor() + 1.0 - origin) * step)
    } else if dir < 0.0 {
        let step = -1.0 / dir;
        (-1, step, (origin - origin.floor()) * step)
    } else {
        // Never the nearest boundary.
        (0, f32::INFINITY, f32::INFINITY)
    }
}

/// Walks the grid cells pierced by the ray until one is occupied or `max_range` is passed.
///
/// `include_transparent` decides whether decorations stop the ray. The
/// direction need not be normalized; a zero direction or a non-finite origin
/// misses at distance 0.
pub fn raycast(
    world: &World,
    origin: Vec3,
    dir: Vec3,
    max_range: f32,
    include_transparent: bool,
) -> RayHit {
    let range = max_range.min(MAX_RAY_RANGE);
    let mut cell = BlockPos::containing(origin);
    let mut last = cell;
    let mut distance = 0.0f32;
    let occupied = |c: BlockPos| world.is_block_occupied(c.x, c.y, c.z, include_transparent);

    let d = dir.normalized();
    if d == Vec3::ZERO || !d.is_finite() || !origin.is_finite() {
        return RayHit {
            hit: false,
            block: world.block_at(cell),
            distance,
            pos: cell,
            last_empty: last,
        };
    }

    let (sx, step_x, mut next_x) = axis_setup(origin.x, d.x);
    let (sy, step_y, mut next_y) = axis_setup(origin.y, d.y);
    let (sz, step_z, mut next_z) = axis_setup(origin.z, d.z);

    let mut hit = occupied(cell);
    while !hit {
        last = cell;
        // Ties go to x, then y.
        if next_x <= next_y && next_x <= next_z {
            distance = next_x;
            next_x += step_x;
            cell.x += sx;
        } else if next_y <= next_z {
            distance = next_y;
            next_y += step_y;
            cell.y += sy;
        } else {
            distance = next_z;
            next_z += step_z;
            cell.z += sz;
        }
        if distance > range {
            break;
        }
        hit = occupied(cell);
    }

    RayHit {
        hit,
        block: world.block_at(cell),
        distance,
        pos: cell,
        last_empty: last,
    }
}
