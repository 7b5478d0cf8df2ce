//! Box-vs-voxel collision queries and voxel raycasts against a [`delve_world::World`].
#![forbid(unsafe_code)]

pub mod collision;
pub mod raycast;

pub use collision::{
    FEET_BAND, block_collision, is_colliding_with_block, is_on_ground, is_on_ground_with,
    overlaps_block,
};
pub use raycast::{RayHit, raycast};

/// Downward acceleration applied to walking actors, in blocks/s².
pub const GRAVITY: f32 = 30.0;
/// Vertical velocity set by a jump.
pub const JUMP_FORCE: f32 = 10.0;
