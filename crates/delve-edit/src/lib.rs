//! Block mining and placement shared by every actor.
#![forbid(unsafe_code)]

use delve_blocks::BlockId;
use delve_world::{BlockPos, World};

pub mod provider;
pub mod sound;

pub use provider::{BREAK_STAGES, BreakingBlock, BreakingDecal, InteractionProvider, MAX_OVERLAYS};
pub use sound::{Sound, SoundCue};

/// Result of one frame of mining at a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MineOutcome {
    /// Break time is negative; no session was started.
    Unbreakable,
    InProgress,
    /// The caller finished the block; the world cell is now air.
    Broken(BlockId),
    /// The tracked block was changed by someone else; carries the id it had.
    Vanished(BlockId),
}

impl MineOutcome {
    /// The block id the mining produced, if any.
    #[inline]
    pub fn produced(self) -> Option<BlockId> {
        match self {
            MineOutcome::Broken(id) | MineOutcome::Vanished(id) => Some(id),
            MineOutcome::Unbreakable | MineOutcome::InProgress => None,
        }
    }
}

/// Frame-bracketed mining and placement.
///
/// Call [`pre_update`](Self::pre_update) before actors run and
/// [`post_update`](Self::post_update) after; a session not mined in between is dropped.
pub trait BlockInteraction {
    fn mine_block(&mut self, world: &mut World, pos: BlockPos, dt: f32) -> MineOutcome;
    fn place_block(&mut self, world: &mut World, pos: BlockPos, id: BlockId);
    fn pre_update(&mut self);
    fn post_update(&mut self);
}
