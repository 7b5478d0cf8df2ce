use std::error::Error;
use std::f32::consts::TAU;
use std::sync::Arc;

use delve_blocks::BlockRegistry;
use delve_edit::{BlockInteraction, InteractionProvider, SoundCue};
use delve_geom::Vec3;
use delve_world::{DensityField, NoiseField, World};

use crate::audio::AudioSink;
use crate::config::GameConfig;
use crate::enemy::EnemyMiner;
use crate::hatch::Hatch;
use crate::input::InputSource;
use crate::player::Player;

/// Builds the density field for a level from a noise seed.
pub type FieldFactory = Box<dyn Fn(i32) -> Box<dyn DensityField>>;

/// Values the HUD displays; compared frame to frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hud {
    pub money: u32,
    pub health: u32,
    pub level: u32,
}

struct Layout {
    player: Vec3,
    hatch: Hatch,
    enemies: Vec<EnemyMiner>,
}

/// Owns everything a running game mutates.
pub struct Simulation {
    cfg: GameConfig,
    registry: Arc<BlockRegistry>,
    fields: FieldFactory,
    rng: fastrand::Rng,
    seed: u64,
    world: World,
    provider: InteractionProvider,
    player: Player,
    enemies: Vec<EnemyMiner>,
    hatch: Hatch,
    level: u32,
    hud: Hud,
    cues: Vec<SoundCue>,
}

impl Simulation {
    /// Loads the block catalog and generates the first level with noise terrain.
    pub fn new(cfg: GameConfig) -> Result<Self, Box<dyn Error>> {
        let registry = match &cfg.world.blocks {
            Some(path) => BlockRegistry::load_from_path(path)?,
            None => BlockRegistry::builtin(),
        };
        let seed = cfg.world.seed.unwrap_or_else(|| fastrand::u64(..));
        let params = cfg.generation.clone();
        let fields: FieldFactory =
            Box::new(move |s: i32| Box::new(NoiseField::new(s, &params)) as Box<dyn DensityField>);
        Self::with_fields(cfg, Arc::new(registry), fields, seed)
    }

    pub fn with_fields(
        cfg: GameConfig,
        registry: Arc<BlockRegistry>,
        fields: FieldFactory,
        seed: u64,
    ) -> Result<Self, Box<dyn Error>> {
        cfg.validate()?;
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut world = World::new(cfg.world.chunk_size, cfg.world.map_size_chunks, registry.clone());
        let layout = generate_level(&mut world, &mut rng, &registry, &fields, &cfg, 0);
        let player = Player::new(layout.player, cfg.player.clone());
        let hud = Hud {
            money: player.money,
            health: player.health,
            level: 0,
        };
        log::info!("session seed {seed}");
        Ok(Self {
            cfg,
            registry,
            fields,
            rng,
            seed,
            world,
            provider: InteractionProvider::default(),
            player,
            enemies: layout.enemies,
            hatch: layout.hatch,
            level: 0,
            hud,
            cues: Vec::new(),
        })
    }

    /// Runs one frame. Returns the HUD when any of its values changed.
    pub fn update(
        &mut self,
        dt: f32,
        input: &mut dyn InputSource,
        audio: &mut dyn AudioSink,
    ) -> Option<Hud> {
        self.provider.pre_update();

        self.player
            .update(dt, &mut self.world, input, &mut self.provider, &mut self.cues);

        self.world.update_meshes();

        for enemy in &mut self.enemies {
            enemy.update(dt, &mut self.world, &mut self.player, &mut self.provider, &mut self.cues);
        }

        input.end_frame();
        self.provider.post_update();

        for cue in self.provider.drain_sounds().chain(self.cues.drain(..)) {
            audio.play_at(cue.sound, cue.pos);
        }

        if self.hatch.reached_by(self.player.pos, self.player.size()) {
            self.advance_level();
        }

        let hud = Hud {
            money: self.player.money,
            health: self.player.health,
            level: self.level,
        };
        if hud == self.hud {
            return None;
        }
        log::debug!("hud {hud:?}");
        self.hud = hud;
        Some(hud)
    }

    /// Tears the level down and builds the next one with the next palette.
    /// The player keeps money and health.
    pub fn advance_level(&mut self) {
        self.level += 1;
        self.world.destroy();
        self.provider.reset();
        self.cues.clear();
        let layout = generate_level(
            &mut self.world,
            &mut self.rng,
            &self.registry,
            &self.fields,
            &self.cfg,
            self.level,
        );
        self.player.respawn(layout.player);
        self.hatch = layout.hatch;
        self.enemies = layout.enemies;
        log::info!("entered level {}", self.level);
    }

    pub fn hud(&self) -> Hud {
        self.hud
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.cfg
    }

    pub fn registry(&self) -> &Arc<BlockRegistry> {
        &self.registry
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn enemies(&self) -> &[EnemyMiner] {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut Vec<EnemyMiner> {
        &mut self.enemies
    }

    pub fn hatch(&self) -> Hatch {
        self.hatch
    }

    /// Breaking overlays and live sessions, for the renderer.
    pub fn interaction(&self) -> &InteractionProvider {
        &self.provider
    }
}

/// Regenerates `world` for `level` and picks spawn spots.
///
/// The player and the hatch get different random chunks; every other chunk
/// holds an enemy with probability `avg_enemies / chunk_count`.
fn generate_level(
    world: &mut World,
    rng: &mut fastrand::Rng,
    registry: &BlockRegistry,
    fields: &FieldFactory,
    cfg: &GameConfig,
    level: u32,
) -> Layout {
    let field = fields(rng.i32(..));
    let palette = registry.palette_for_level(level);
    world.generate(field.as_ref(), rng, palette, &cfg.generation);

    let coords = world.grid_coords();
    let n = coords.len();
    let player_i = rng.usize(..n);
    let mut hatch_i = rng.usize(..n - 1);
    if hatch_i >= player_i {
        hatch_i += 1;
    }

    // Enemies only take chunks that already have air; this runs before any carving.
    let chance = cfg.world.avg_enemies / n as f32;
    let mut enemies = Vec::new();
    for (i, &coord) in coords.iter().enumerate() {
        if i == player_i || i == hatch_i {
            continue;
        }
        if rng.f32() >= chance {
            continue;
        }
        if let Some(pos) = world.spawn_pos(coord, false) {
            enemies.push(EnemyMiner::new(pos, rng.f32() * TAU, cfg.enemy.clone()));
        }
    }

    let spawns = world.spawn_points();
    let player = spawns[player_i];
    let hatch = Hatch::at(spawns[hatch_i]);

    world.update_meshes();
    log::info!(
        "level {level}: palette '{}', {} enemies, hatch at {:?}",
        palette.name,
        enemies.len(),
        hatch.cell
    );
    Layout {
        player,
        hatch,
        enemies,
    }
}
