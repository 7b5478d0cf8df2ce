use delve_blocks::BlockId;
use delve_geom::Vec3;
use delve_world::{BlockPos, World};
use hashbrown::HashMap;

use crate::sound::{Sound, SoundCue};
use crate::{BlockInteraction, MineOutcome};

/// Number of crack textures in the breaking overlay.
pub const BREAK_STAGES: u8 = 4;
/// Default cap on overlay instances.
pub const MAX_OVERLAYS: usize = 100;

/// One in-flight mining session.
#[derive(Clone, Debug, PartialEq)]
pub struct BreakingBlock {
    pub pos: BlockPos,
    pub block: BlockId,
    /// Seconds mined so far.
    pub progress: f32,
    pub break_time: f32,
    pub touched: bool,
}

/// Crack overlay instance for the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BreakingDecal {
    pub center: Vec3,
    /// Texture layer, `0..BREAK_STAGES`.
    pub stage: u8,
}

pub struct InteractionProvider {
    sessions: HashMap<BlockPos, BreakingBlock>,
    decals: Vec<BreakingDecal>,
    max_overlays: usize,
    sounds: Vec<SoundCue>,
}

impl Default for InteractionProvider {
    fn default() -> Self {
        Self::new(MAX_OVERLAYS)
    }
}

impl InteractionProvider {
    pub fn new(max_overlays: usize) -> Self {
        Self {
            sessions: HashMap::new(),
            decals: Vec::with_capacity(max_overlays),
            max_overlays,
            sounds: Vec::new(),
        }
    }

    pub fn session(&self, pos: BlockPos) -> Option<&BreakingBlock> {
        self.sessions.get(&pos)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Overlay instances rebuilt by the last `post_update`.
    pub fn decals(&self) -> &[BreakingDecal] {
        &self.decals
    }

    /// Hands queued sound cues to the caller.
    pub fn drain_sounds(&mut self) -> std::vec::Drain<'_, SoundCue> {
        self.sounds.drain(..)
    }

    /// Drops every session and pending cue, e.g. when the world is replaced.
    pub fn reset(&mut self) {
        self.sessions.clear();
        self.decals.clear();
        self.sounds.clear();
    }

    fn cue(&mut self, sound: Sound, pos: BlockPos) {
        self.sounds.push(SoundCue {
            sound,
            pos: pos.center(),
        });
    }
}

fn break_stage(progress: f32, break_time: f32) -> u8 {
    let last = BREAK_STAGES - 1;
    if break_time <= 0.0 {
        return last;
    }
    let stage = (progress / break_time * f32::from(BREAK_STAGES)).floor();
    stage.clamp(0.0, f32::from(last)) as u8
}

impl BlockInteraction for InteractionProvider {
    fn mine_block(&mut self, world: &mut World, pos: BlockPos, dt: f32) -> MineOutcome {
        let current = world.block_at(pos);
        let break_time = world.registry().lookup(current).break_time;
        if break_time < 0.0 {
            return MineOutcome::Unbreakable;
        }

        let session = self.sessions.entry(pos).or_insert_with(|| {
            log::trace!("mining session opened at {pos:?}");
            BreakingBlock {
                pos,
                block: current,
                progress: 0.0,
                break_time,
                touched: true,
            }
        });
        session.touched = true;
        if session.block != current {
            let previous = session.block;
            self.sessions.remove(&pos);
            log::trace!("mining target at {pos:?} changed underneath");
            return MineOutcome::Vanished(previous);
        }

        session.progress += dt;
        if session.progress < break_time {
            return MineOutcome::InProgress;
        }
        self.sessions.remove(&pos);
        world.set_block_at(pos, delve_blocks::AIR);
        self.cue(Sound::Break, pos);
        MineOutcome::Broken(current)
    }

    fn place_block(&mut self, world: &mut World, pos: BlockPos, id: BlockId) {
        world.set_block_at(pos, id);
        self.cue(Sound::Place, pos);
    }

    fn pre_update(&mut self) {
        for s in self.sessions.values_mut() {
            s.touched = false;
        }
    }

    fn post_update(&mut self) {
        let before = self.sessions.len();
        self.sessions.retain(|_, s| s.touched);
        if self.sessions.len() != before {
            log::trace!("dropped {} abandoned mining sessions", before - self.sessions.len());
        }
        self.decals.clear();
        let mut live: Vec<&BreakingBlock> = self.sessions.values().collect();
        live.sort_by_key(|s| (s.pos.x, s.pos.y, s.pos.z));
        for s in live.into_iter().take(self.max_overlays) {
            self.decals.push(BreakingDecal {
                center: s.pos.center(),
                stage: break_stage(s.progress, s.break_time),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_span_the_crack_textures() {
        assert_eq!(break_stage(0.0, 1.0), 0);
        assert_eq!(break_stage(0.24, 1.0), 0);
        assert_eq!(break_stage(0.25, 1.0), 1);
        assert_eq!(break_stage(0.99, 1.0), 3);
        assert_eq!(break_stage(5.0, 1.0), 3);
        assert_eq!(break_stage(0.0, 0.0), 3);
    }
}
