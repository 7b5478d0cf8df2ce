use std::f32::consts::FRAC_PI_2;

use delve_blocks::AIR;
use delve_edit::{BlockInteraction, MineOutcome, Sound, SoundCue};
use delve_geom::Vec3;
use delve_physics::{GRAVITY, JUMP_FORCE, is_colliding_with_block, is_on_ground, overlaps_block, raycast};
use delve_world::{BlockPos, World};
use serde::Deserialize;

use crate::input::{InputSource, Key, MOUSE_MINE, MOUSE_PLACE};

#[derive(Clone, Debug, Deserialize)]
pub struct PlayerConfig {
    #[serde(default = "default_speed")]
    pub speed: f32,
    /// Edge length of the cubic collision box.
    #[serde(default = "default_size")]
    pub size: f32,
    #[serde(default = "default_reach")]
    pub reach: f32,
    #[serde(default = "default_scaffold_cost")]
    pub scaffold_cost: u32,
    #[serde(default = "default_gravity")]
    pub gravity: f32,
    #[serde(default = "default_jump_force")]
    pub jump_force: f32,
    /// Radians per pixel of mouse motion.
    #[serde(default = "default_mouse_sensitivity")]
    pub mouse_sensitivity: f32,
    #[serde(default = "default_max_health")]
    pub max_health: u32,
    #[serde(default = "default_footstep_interval")]
    pub footstep_interval: f32,
}

fn default_speed() -> f32 {
    6.0
}
fn default_size() -> f32 {
    0.8
}
fn default_reach() -> f32 {
    4.0
}
fn default_scaffold_cost() -> u32 {
    5
}
fn default_gravity() -> f32 {
    GRAVITY
}
fn default_jump_force() -> f32 {
    JUMP_FORCE
}
fn default_mouse_sensitivity() -> f32 {
    0.002
}
fn default_max_health() -> u32 {
    100
}
fn default_footstep_interval() -> f32 {
    0.4
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            size: default_size(),
            reach: default_reach(),
            scaffold_cost: default_scaffold_cost(),
            gravity: default_gravity(),
            jump_force: default_jump_force(),
            mouse_sensitivity: default_mouse_sensitivity(),
            max_health: default_max_health(),
            footstep_interval: default_footstep_interval(),
        }
    }
}

/// Looking just short of straight up or down.
pub const MAX_PITCH: f32 = FRAC_PI_2 * 0.99;

#[derive(Clone, Debug)]
pub struct Player {
    pub pos: Vec3,
    /// Radians; zero looks down -Z.
    pub yaw: f32,
    pub pitch: f32,
    pub velocity_y: f32,
    pub flying: bool,
    pub money: u32,
    pub health: u32,
    footstep_timer: f32,
    cfg: PlayerConfig,
}

impl Player {
    pub fn new(pos: Vec3, cfg: PlayerConfig) -> Self {
        Self {
            pos,
            yaw: 0.0,
            pitch: 0.0,
            velocity_y: 0.0,
            flying: false,
            money: 0,
            health: cfg.max_health,
            footstep_timer: 0.0,
            cfg,
        }
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.cfg
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        Vec3::splat(self.cfg.size)
    }

    /// Unit view direction.
    pub fn look_dir(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(-sy * cp, sp, -cy * cp)
    }

    /// Horizontal unit vector `W` walks along.
    pub fn forward(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        Vec3::new(-sy, 0.0, -cy)
    }

    /// Horizontal unit vector `D` strafes along.
    pub fn right(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        Vec3::new(cy, 0.0, -sy)
    }

    pub fn apply_mouse(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * self.cfg.mouse_sensitivity;
        self.pitch = (self.pitch - dy * self.cfg.mouse_sensitivity).clamp(-MAX_PITCH, MAX_PITCH);
    }

    pub fn damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
        log::debug!("player hit for {amount}, health {}", self.health);
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Puts the player at `pos` at rest, keeping money and health.
    pub fn respawn(&mut self, pos: Vec3) {
        self.pos = pos;
        self.velocity_y = 0.0;
        self.footstep_timer = 0.0;
    }

    pub fn update(
        &mut self,
        dt: f32,
        world: &mut World,
        input: &mut dyn InputSource,
        edit: &mut dyn BlockInteraction,
        cues: &mut Vec<SoundCue>,
    ) {
        let (dx, dy) = input.take_mouse_motion();
        if dx != 0.0 || dy != 0.0 {
            self.apply_mouse(dx, dy);
        }

        self.interact(dt, world, &*input, edit);

        if input.was_key_pressed(Key::F) {
            self.flying = !self.flying;
            log::debug!("flight {}", if self.flying { "on" } else { "off" });
        }

        self.step(dt, world, &*input, cues);
    }

    fn interact(
        &mut self,
        dt: f32,
        world: &mut World,
        input: &dyn InputSource,
        edit: &mut dyn BlockInteraction,
    ) {
        if input.is_mouse_down(MOUSE_MINE) {
            let hit = raycast(world, self.pos, self.look_dir(), self.cfg.reach, true);
            if !hit.hit {
                return;
            }
            if let MineOutcome::Broken(id) = edit.mine_block(world, hit.pos, dt) {
                self.money += world.registry().lookup(id).value;
            }
        } else if input.was_mouse_pressed(MOUSE_PLACE) && self.money >= self.cfg.scaffold_cost {
            let hit = raycast(world, self.pos, self.look_dir(), self.cfg.reach, true);
            if !hit.hit || world.block_at(hit.last_empty) != AIR {
                return;
            }
            if overlaps_block(self.pos, self.size(), hit.last_empty) {
                return;
            }
            self.money -= self.cfg.scaffold_cost;
            let scaffold = world.registry().scaffold();
            edit.place_block(world, hit.last_empty, scaffold);
        }
    }

    fn step(&mut self, dt: f32, world: &World, input: &dyn InputSource, cues: &mut Vec<SoundCue>) {
        let size = self.size();
        let grounded = is_on_ground(world, self.pos, size);
        let sneaking = !self.flying && grounded && input.is_key_down(Key::ShiftLeft);

        let mut forward = 0.0f32;
        let mut right = 0.0f32;
        let mut up = 0.0f32;
        if input.is_key_down(Key::W) {
            forward += 1.0;
        }
        if input.is_key_down(Key::S) {
            forward -= 1.0;
        }
        if input.is_key_down(Key::D) {
            right += 1.0;
        }
        if input.is_key_down(Key::A) {
            right -= 1.0;
        }
        if self.flying {
            if input.is_key_down(Key::Space) {
                up += 1.0;
            }
            if input.is_key_down(Key::ShiftLeft) {
                up -= 1.0;
            }
        } else if grounded && input.is_key_down(Key::Space) {
            self.velocity_y = self.cfg.jump_force;
        }

        let mag = (forward * forward + right * right).sqrt();
        if mag > 0.0 {
            forward /= mag;
            right /= mag;
        }
        let wish = (self.forward() * forward + self.right() * right) * (self.cfg.speed * dt);

        let old = self.pos;
        let mut next = old;

        next.x += wish.x;
        if self.blocked(world, next, sneaking) {
            next.x = old.x;
        }
        next.z += wish.z;
        if self.blocked(world, next, sneaking) {
            next.z = old.z;
        }

        if self.flying {
            self.velocity_y = 0.0;
            next.y += up * self.cfg.speed * dt;
        } else {
            self.velocity_y -= self.cfg.gravity * dt;
            next.y += self.velocity_y * dt;
        }
        if is_colliding_with_block(world, next, size) {
            self.velocity_y = 0.0;
            next.y = old.y;
        }

        self.pos = next;
        self.footsteps(dt, world, old, cues);
    }

    /// A horizontal move is refused on collision, or when sneaking and it
    /// would leave solid ground.
    fn blocked(&self, world: &World, at: Vec3, sneaking: bool) -> bool {
        let size = self.size();
        is_colliding_with_block(world, at, size) || (sneaking && !is_on_ground(world, at, size))
    }

    fn footsteps(&mut self, dt: f32, world: &World, old: Vec3, cues: &mut Vec<SoundCue>) {
        let moved = (self.pos - old).horizontal_length() > 0.0;
        if self.flying || !moved || !is_on_ground(world, self.pos, self.size()) {
            return;
        }
        self.footstep_timer += dt;
        if self.footstep_timer >= self.cfg.footstep_interval {
            self.footstep_timer -= self.cfg.footstep_interval;
            cues.push(SoundCue {
                sound: Sound::Footstep,
                pos: self.pos,
            });
        }
    }

    /// Cell the player is standing in.
    pub fn cell(&self) -> BlockPos {
        BlockPos::containing(self.pos)
    }
}
