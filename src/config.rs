use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use delve_world::{CHUNK_SIZE, GenParams, MAP_SIZE_CHUNKS};
use serde::Deserialize;

use crate::enemy::EnemyConfig;
use crate::player::PlayerConfig;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub generation: GenParams,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub enemy: EnemyConfig,
    #[serde(default)]
    pub frame: FrameConfig,
}

impl GameConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: GameConfig = toml::from_str(toml_str)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub(crate) fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.world.chunk_size < 3 {
            return Err(format!("world.chunk_size must be at least 3, got {}", self.world.chunk_size).into());
        }
        if self.world.map_size_chunks < 2 {
            return Err(format!(
                "world.map_size_chunks must be at least 2 (player and hatch need separate chunks), got {}",
                self.world.map_size_chunks
            )
            .into());
        }
        if !(self.frame.max_dt > 0.0) {
            return Err("frame.max_dt must be positive".into());
        }
        self.generation.validate()?;
        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct WorldConfig {
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "default_map_size_chunks")]
    pub map_size_chunks: usize,
    /// Fixed session seed; random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Block catalog override; the built-in catalog is used when absent.
    #[serde(default)]
    pub blocks: Option<PathBuf>,
    /// Expected number of enemy miners per level.
    #[serde(default = "default_avg_enemies")]
    pub avg_enemies: f32,
}

fn default_chunk_size() -> usize {
    CHUNK_SIZE
}
fn default_map_size_chunks() -> usize {
    MAP_SIZE_CHUNKS
}
fn default_avg_enemies() -> f32 {
    10.0
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            map_size_chunks: default_map_size_chunks(),
            seed: None,
            blocks: None,
            avg_enemies: default_avg_enemies(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct FrameConfig {
    /// Frame deltas above this many seconds are discarded.
    #[serde(default = "default_max_dt")]
    pub max_dt: f32,
}

fn default_max_dt() -> f32 {
    0.1
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_dt: default_max_dt(),
        }
    }
}
