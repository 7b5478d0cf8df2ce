use std::f32::consts::{FRAC_PI_4, PI};

use delve_blocks::AIR;
use delve_edit::{BlockInteraction, MineOutcome, Sound, SoundCue};
use delve_geom::Vec3;
use delve_physics::{GRAVITY, JUMP_FORCE, block_collision, is_on_ground, overlaps_block, raycast};
use delve_world::{BlockPos, World};
use serde::Deserialize;

use crate::player::Player;

/// Height difference that counts as the player being above or below.
const CLIMB_THRESHOLD: f32 = 0.2;
/// Peak leg rotation of the walk cycle, radians.
pub const LEG_SWING: f32 = FRAC_PI_4;

#[derive(Clone, Debug, Deserialize)]
pub struct EnemyConfig {
    #[serde(default = "default_speed")]
    pub speed: f32,
    #[serde(default = "default_size")]
    pub size: f32,
    #[serde(default = "default_detection_range")]
    pub detection_range: f32,
    #[serde(default = "default_attack_distance")]
    pub attack_distance: f32,
    #[serde(default = "default_attack_cooldown")]
    pub attack_cooldown: f32,
    #[serde(default = "default_attack_damage")]
    pub attack_damage: u32,
    #[serde(default = "default_gravity")]
    pub gravity: f32,
    #[serde(default = "default_jump_force")]
    pub jump_force: f32,
    #[serde(default = "default_animation_speed")]
    pub animation_speed: f32,
    /// Seconds between ambient hum cues.
    #[serde(default = "default_ambient_interval")]
    pub ambient_interval: f32,
}

fn default_speed() -> f32 {
    4.0
}
fn default_size() -> f32 {
    0.8
}
fn default_detection_range() -> f32 {
    10.0
}
fn default_attack_distance() -> f32 {
    0.8
}
fn default_attack_cooldown() -> f32 {
    0.5
}
fn default_attack_damage() -> u32 {
    10
}
fn default_gravity() -> f32 {
    GRAVITY
}
fn default_jump_force() -> f32 {
    JUMP_FORCE
}
fn default_animation_speed() -> f32 {
    3.0
}
fn default_ambient_interval() -> f32 {
    3.0
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            size: default_size(),
            detection_range: default_detection_range(),
            attack_distance: default_attack_distance(),
            attack_cooldown: default_attack_cooldown(),
            attack_damage: default_attack_damage(),
            gravity: default_gravity(),
            jump_force: default_jump_force(),
            animation_speed: default_animation_speed(),
            ambient_interval: default_ambient_interval(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MinerState {
    /// Idle until the player is in range and in sight.
    Resting,
    Chasing,
    /// Jumping and scaffolding up toward a higher player.
    Jumping,
    /// Digging through whatever blocked the path.
    Mining { target: BlockPos },
}

/// Enemy that digs and builds its way to the player instead of pathfinding.
#[derive(Clone, Debug)]
pub struct EnemyMiner {
    pub pos: Vec3,
    pub velocity_y: f32,
    pub state: MinerState,
    /// Yaw toward the player, `atan2(dx, dz)`.
    pub facing: f32,
    /// Left and right leg rotation for the renderer.
    pub legs: (f32, f32),
    anim: f32,
    attack_timer: f32,
    ambient_timer: f32,
    cfg: EnemyConfig,
}

impl EnemyMiner {
    pub fn new(pos: Vec3, facing: f32, cfg: EnemyConfig) -> Self {
        Self {
            pos,
            velocity_y: 0.0,
            state: MinerState::Resting,
            facing,
            legs: (0.0, 0.0),
            anim: 0.0,
            attack_timer: cfg.attack_cooldown,
            ambient_timer: 0.0,
            cfg,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        Vec3::splat(self.cfg.size)
    }

    pub fn config(&self) -> &EnemyConfig {
        &self.cfg
    }

    fn set_state(&mut self, state: MinerState) {
        if self.state != state {
            log::trace!("miner at {:?}: {:?} -> {:?}", BlockPos::containing(self.pos), self.state, state);
            self.state = state;
        }
    }

    pub fn update(
        &mut self,
        dt: f32,
        world: &mut World,
        player: &mut Player,
        edit: &mut dyn BlockInteraction,
        cues: &mut Vec<SoundCue>,
    ) {
        let mut next = self.pos;

        match self.state {
            MinerState::Resting => self.update_resting(world, player),
            MinerState::Chasing => self.update_chasing(dt, player, &mut next),
            MinerState::Jumping => self.update_jumping(world, player, edit),
            MinerState::Mining { target } => self.update_mining(dt, world, edit, target),
        }

        self.attack_timer -= dt;
        self.velocity_y -= self.cfg.gravity * dt;
        next.y += self.velocity_y * dt;

        let size = self.size();
        let old = self.pos;

        if let Some(hit) = block_collision(world, Vec3::new(old.x, next.y, old.z), size, false) {
            self.velocity_y = 0.0;
            next.y = old.y;
            let hit_y = hit.y as f32;
            let dig = match self.state {
                MinerState::Jumping => hit_y > old.y,
                MinerState::Chasing => hit_y < old.y && old.y - player.pos.y > CLIMB_THRESHOLD,
                _ => false,
            };
            if dig {
                self.begin_mining(hit);
            }
        }

        if let Some(hit) = block_collision(world, Vec3::new(next.x, old.y, old.z), size, false) {
            next.x = old.x;
            if self.state != MinerState::Resting {
                self.begin_mining(hit);
            }
        }

        if let Some(hit) = block_collision(world, Vec3::new(old.x, old.y, next.z), size, false) {
            next.z = old.z;
            if self.state != MinerState::Resting {
                self.begin_mining(hit);
            }
        }

        self.pos = next;

        self.ambient_timer += dt;
        if self.ambient_timer >= self.cfg.ambient_interval {
            self.ambient_timer = 0.0;
            cues.push(SoundCue {
                sound: Sound::Ambient,
                pos: self.pos,
            });
        }
    }

    fn begin_mining(&mut self, target: BlockPos) {
        self.set_state(MinerState::Mining { target });
    }

    fn update_resting(&mut self, world: &World, player: &Player) {
        let to_player = player.pos - self.pos;
        let dist = to_player.length();
        if dist >= self.cfg.detection_range {
            return;
        }
        if dist == 0.0 {
            self.set_state(MinerState::Chasing);
            return;
        }
        let sight = raycast(world, self.pos, to_player / dist, self.cfg.detection_range, false);
        if sight.distance > dist {
            log::debug!("miner at {:?} spotted the player", BlockPos::containing(self.pos));
            self.set_state(MinerState::Chasing);
        }
    }

    fn update_chasing(&mut self, dt: f32, player: &mut Player, next: &mut Vec3) {
        let to_player = player.pos - self.pos;
        let (hx, hz) = (to_player.x, to_player.z);
        if hx == 0.0 && hz == 0.0 {
            return;
        }
        self.facing = hx.atan2(hz);

        if to_player.length() <= self.cfg.attack_distance {
            self.attack(player);
            return;
        }

        let h = (hx * hx + hz * hz).sqrt();
        next.x += hx / h * dt * self.cfg.speed;
        next.z += hz / h * dt * self.cfg.speed;

        if to_player.y > CLIMB_THRESHOLD {
            self.set_state(MinerState::Jumping);
        }

        self.anim += dt * self.cfg.animation_speed * self.cfg.speed;
        self.legs = (self.anim.sin() * LEG_SWING, (self.anim + PI).sin() * LEG_SWING);
    }

    fn update_jumping(&mut self, world: &mut World, player: &Player, edit: &mut dyn BlockInteraction) {
        if is_on_ground(world, self.pos, self.size()) {
            self.velocity_y = self.cfg.jump_force;
        } else {
            let below = BlockPos::new(
                self.pos.x.floor() as i32,
                (self.pos.y - 1.0).floor() as i32,
                self.pos.z.floor() as i32,
            );
            if !overlaps_block(self.pos, self.size(), below)
                && world.block_at(below) == AIR
                && world.is_block_supported(below.x, below.y, below.z)
            {
                let scaffold = world.registry().enemy_scaffold();
                edit.place_block(world, below, scaffold);
            }
        }

        if self.pos.y >= player.pos.y {
            self.set_state(MinerState::Chasing);
        }
    }

    fn update_mining(&mut self, dt: f32, world: &mut World, edit: &mut dyn BlockInteraction, target: BlockPos) {
        let outcome = edit.mine_block(world, target, dt);
        let cleared = world.block_at(target) == AIR;
        // Barrier never clears.
        if cleared || outcome.produced().is_some() || outcome == MineOutcome::Unbreakable {
            self.set_state(MinerState::Chasing);
        }
    }

    fn attack(&mut self, player: &mut Player) {
        if self.attack_timer <= 0.0 {
            self.attack_timer = self.cfg.attack_cooldown;
            player.damage(self.cfg.attack_damage);
        }
    }
}
