use delve_geom::{Aabb, Vec3};
use delve_world::{BlockPos, World};

/// Height of the thin box tested under an actor's feet.
pub const FEET_BAND: f32 = 0.1;

/// Cells under the eight corners of a box. Coarse: a box wider than one block
/// can straddle an occupied cell without any corner landing in it.
#[inline]
fn corner_cells(center: Vec3, size: Vec3) -> impl Iterator<Item = BlockPos> {
    Aabb::from_center_size(center, size)
        .corners()
        .into_iter()
        .map(BlockPos::containing)
}

/// True if any corner of the box sits in a solid cell. Decorations never collide.
pub fn is_colliding_with_block(world: &World, center: Vec3, size: Vec3) -> bool {
    block_collision(world, center, size, false).is_some()
}

/// First corner cell (in corner order) that is occupied.
pub fn block_collision(
    world: &World,
    center: Vec3,
    size: Vec3,
    include_transparent: bool,
) -> Option<BlockPos> {
    corner_cells(center, size).find(|c| world.is_block_occupied(c.x, c.y, c.z, include_transparent))
}

/// Continuous overlap against the unit cell `[b, b+1)` on each axis.
pub fn overlaps_block(center: Vec3, size: Vec3, block: BlockPos) -> bool {
    let cell = Aabb::new(block.min_corner(), block.min_corner() + Vec3::splat(1.0));
    Aabb::from_center_size(center, size).intersects(&cell)
}

pub fn is_on_ground(world: &World, center: Vec3, size: Vec3) -> bool {
    is_on_ground_with(world, center, size, FEET_BAND)
}

/// Tests a slab of height `epsilon` directly under the box.
pub fn is_on_ground_with(world: &World, center: Vec3, size: Vec3, epsilon: f32) -> bool {
    let feet_center = Vec3::new(center.x, center.y - (size.y + epsilon) * 0.5, center.z);
    let feet_size = Vec3::new(size.x, epsilon, size.z);
    is_colliding_with_block(world, feet_center, feet_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_half_open() {
        let unit = Vec3::splat(1.0);
        let origin = BlockPos::new(0, 0, 0);
        assert!(overlaps_block(Vec3::splat(0.5), unit, origin));
        assert!(!overlaps_block(Vec3::new(1.5, 0.5, 0.5), unit, origin));
        assert!(!overlaps_block(Vec3::new(-0.5, 0.5, 0.5), unit, origin));
        assert!(overlaps_block(Vec3::new(1.49, 0.5, 0.5), unit, origin));
    }
}
