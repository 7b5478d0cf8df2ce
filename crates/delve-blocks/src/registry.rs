use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use super::config::{BlocksConfig, PaletteDef};
use super::palette::Palette;
use super::types::{AIR, BlockId, BlockType};

const BUILTIN_BLOCKS: &str = include_str!("blocks.toml");

/// Immutable catalog of block types and biome palettes.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it afterwards.
#[derive(Clone, Debug)]
pub struct BlockRegistry {
    // Indexed by `id + 1` so air (-1) sits at slot 0.
    blocks: Vec<BlockType>,
    by_name: HashMap<String, BlockId>,
    palettes: Vec<Palette>,
    barrier: BlockId,
    scaffold: BlockId,
    enemy_scaffold: BlockId,
}

impl BlockRegistry {
    /// The catalog shipped with the game.
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_BLOCKS).expect("built-in block catalog must be valid")
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: BlocksConfig = toml::from_str(toml_str)?;
        Self::from_config(cfg)
    }

    pub fn from_config(cfg: BlocksConfig) -> Result<Self, Box<dyn Error>> {
        let mut defs = cfg.blocks;
        defs.sort_by_key(|d| d.id);

        let mut blocks = Vec::with_capacity(defs.len());
        let mut by_name = HashMap::with_capacity(defs.len());
        for (slot, def) in defs.into_iter().enumerate() {
            let expected = slot as i32 + i32::from(AIR);
            if i32::from(def.id) != expected {
                return Err(format!(
                    "block ids must be contiguous from {AIR}: expected {expected}, found {} ({})",
                    def.id, def.name
                )
                .into());
            }
            if by_name.insert(def.name.clone(), def.id).is_some() {
                return Err(format!("duplicate block name '{}'", def.name).into());
            }
            let texture_layer = def.texture.unwrap_or(def.id.max(0) as u16);
            blocks.push(BlockType {
                id: def.id,
                name: def.name,
                value: def.value,
                break_time: def.break_time,
                transparent: def.transparent,
                texture_layer,
            });
        }
        if blocks.first().map(|b| b.id) != Some(AIR) {
            return Err("block catalog must define air with id -1".into());
        }

        let resolve = |name: &str| -> Result<BlockId, Box<dyn Error>> {
            by_name
                .get(name)
                .copied()
                .ok_or_else(|| format!("unknown block '{name}'").into())
        };
        let barrier = resolve(&cfg.barrier)?;
        let scaffold = resolve(&cfg.scaffold)?;
        let enemy_scaffold = resolve(&cfg.enemy_scaffold)?;

        let mut palettes = Vec::with_capacity(cfg.palettes.len());
        for def in &cfg.palettes {
            palettes.push(compile_palette(def, &resolve)?);
        }
        if palettes.is_empty() {
            return Err("block catalog must define at least one palette".into());
        }

        Ok(Self {
            blocks,
            by_name,
            palettes,
            barrier,
            scaffold,
            enemy_scaffold,
        })
    }

    #[inline]
    pub fn get(&self, id: BlockId) -> Option<&BlockType> {
        let slot = i32::from(id) - i32::from(AIR);
        usize::try_from(slot).ok().and_then(|i| self.blocks.get(i))
    }

    /// Looks up a registered block.
    ///
    /// # Panics
    /// On ids outside the catalog; world data only ever holds registered ids.
    #[inline]
    pub fn lookup(&self, id: BlockId) -> &BlockType {
        match self.get(id) {
            Some(ty) => ty,
            None => panic!("unknown block id {id}"),
        }
    }

    pub fn id_by_name(&self, name: &str) -> Option<BlockId> {
        self.by_name.get(name).copied()
    }

    /// Occupancy rule shared by collision, meshing, and raycasts: air never
    /// occupies, decorations only when `include_transparent` is set.
    #[inline]
    pub fn occupies(&self, id: BlockId, include_transparent: bool) -> bool {
        id != AIR && (include_transparent || !self.lookup(id).transparent)
    }

    pub fn blocks(&self) -> impl Iterator<Item = &BlockType> {
        self.blocks.iter()
    }

    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    /// Levels cycle through the palettes in catalog order.
    pub fn palette_for_level(&self, level: u32) -> &Palette {
        &self.palettes[level as usize % self.palettes.len()]
    }

    #[inline]
    pub fn barrier(&self) -> BlockId {
        self.barrier
    }

    #[inline]
    pub fn scaffold(&self) -> BlockId {
        self.scaffold
    }

    #[inline]
    pub fn enemy_scaffold(&self) -> BlockId {
        self.enemy_scaffold
    }
}

fn compile_palette(
    def: &PaletteDef,
    resolve: &impl Fn(&str) -> Result<BlockId, Box<dyn Error>>,
) -> Result<Palette, Box<dyn Error>> {
    Ok(Palette {
        name: def.name.clone(),
        ground: resolve(&def.ground)?,
        ore0: resolve(&def.ore0)?,
        ore1: resolve(&def.ore1)?,
        ore2: resolve(&def.ore2)?,
        ground_decor: resolve(&def.ground_decor)?,
        ceiling_decor: resolve(&def.ceiling_decor)?,
    })
}
