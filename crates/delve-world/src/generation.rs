//! Cave generation: one density field carves the rock, a second tints it.

use std::error::Error;
use std::fs;
use std::path::Path;

use delve_blocks::{BlockId, Palette};
use fastnoise_lite::{FastNoiseLite, NoiseType};
use serde::Deserialize;

use crate::chunk::Chunk;

/// Coherent 3D noise sampled at world block coordinates.
pub trait DensityField: Send + Sync {
    /// Roughly `[-1, 1]`; cells below the solidity threshold are rock.
    fn density(&self, x: i32, y: i32, z: i32) -> f32;
    /// Roughly `[-1, 1]`; purely cosmetic.
    fn shade(&self, x: i32, y: i32, z: i32) -> f32;
}

/// OpenSimplex2 fields for caves and shading, seeded independently.
pub struct NoiseField {
    cave: FastNoiseLite,
    shade: FastNoiseLite,
}

impl NoiseField {
    pub fn new(seed: i32, params: &GenParams) -> Self {
        let mut cave = FastNoiseLite::with_seed(seed);
        cave.set_noise_type(Some(NoiseType::OpenSimplex2));
        cave.set_frequency(Some(params.cave_frequency));
        let mut shade = FastNoiseLite::with_seed(seed ^ 0x5A1E_D0C5);
        shade.set_noise_type(Some(NoiseType::OpenSimplex2));
        shade.set_frequency(Some(params.shade_frequency));
        Self { cave, shade }
    }
}

impl DensityField for NoiseField {
    #[inline]
    fn density(&self, x: i32, y: i32, z: i32) -> f32 {
        self.cave.get_noise_3d(x as f32, y as f32, z as f32)
    }

    #[inline]
    fn shade(&self, x: i32, y: i32, z: i32) -> f32 {
        self.shade.get_noise_3d(x as f32, y as f32, z as f32)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GenParams {
    #[serde(default = "default_cave_frequency")]
    pub cave_frequency: f32,
    #[serde(default = "default_shade_frequency")]
    pub shade_frequency: f32,
    /// Density below which a cell is rock.
    #[serde(default = "default_solidity")]
    pub solidity: f32,
    /// Width of the density band above `solidity` where decorations may grow.
    #[serde(default = "default_decor_band")]
    pub decor_band: f32,
    #[serde(default = "default_decor_chance")]
    pub decor_chance: f32,
    /// Nested ore thresholds; each rarer band overrides the more common one.
    #[serde(default = "default_ore_rare")]
    pub ore_rare: f32,
    #[serde(default = "default_ore_mid")]
    pub ore_mid: f32,
    #[serde(default = "default_ore_common")]
    pub ore_common: f32,
}

fn default_cave_frequency() -> f32 {
    0.1
}
fn default_shade_frequency() -> f32 {
    0.25
}
fn default_solidity() -> f32 {
    0.4
}
fn default_decor_band() -> f32 {
    0.1
}
fn default_decor_chance() -> f32 {
    0.15
}
fn default_ore_rare() -> f32 {
    0.002
}
fn default_ore_mid() -> f32 {
    0.03
}
fn default_ore_common() -> f32 {
    0.07
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            cave_frequency: default_cave_frequency(),
            shade_frequency: default_shade_frequency(),
            solidity: default_solidity(),
            decor_band: default_decor_band(),
            decor_chance: default_decor_chance(),
            ore_rare: default_ore_rare(),
            ore_mid: default_ore_mid(),
            ore_common: default_ore_common(),
        }
    }
}

impl GenParams {
    /// Ore bands nest, so the thresholds must be ordered rarest first.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if !(self.ore_rare <= self.ore_mid && self.ore_mid <= self.ore_common) {
            return Err("ore thresholds must satisfy ore_rare <= ore_mid <= ore_common".into());
        }
        Ok(())
    }
}

/// Reads a standalone generation file; missing keys keep their defaults.
pub fn load_params_from_path(path: &Path) -> Result<GenParams, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let params: GenParams = toml::from_str(&s)?;
    params.validate()?;
    Ok(params)
}

/// Everything a chunk needs to fill itself, shared read-only across generation jobs.
#[derive(Clone, Copy)]
pub struct GenCtx<'a> {
    pub field: &'a dyn DensityField,
    pub params: &'a GenParams,
    pub palette: &'a Palette,
    pub barrier: BlockId,
    /// Edge length of the whole map in blocks.
    pub map_size: i32,
}

impl GenCtx<'_> {
    #[inline]
    pub fn is_boundary(&self, x: i32, y: i32, z: i32) -> bool {
        let last = self.map_size - 1;
        x == 0 || x == last || y == 0 || y == last || z == 0 || z == last
    }

    /// Solidity judged from the field alone, so neighbors in chunks not yet
    /// generated answer the same way they will once generated.
    #[inline]
    pub fn field_solid(&self, x: i32, y: i32, z: i32) -> bool {
        self.is_boundary(x, y, z) || self.field.density(x, y, z) < self.params.solidity
    }

    fn ground(&self, rng: &mut fastrand::Rng) -> BlockId {
        let p = rng.f32();
        let pal = self.palette;
        if p < self.params.ore_rare {
            pal.ore2
        } else if p < self.params.ore_mid {
            pal.ore1
        } else if p < self.params.ore_common {
            pal.ore0
        } else {
            pal.ground
        }
    }

    fn decoration(&self, x: i32, y: i32, z: i32, rng: &mut fastrand::Rng) -> Option<BlockId> {
        if rng.f32() >= self.params.decor_chance {
            return None;
        }
        if self.field_solid(x, y - 1, z) {
            Some(self.palette.ground_decor)
        } else if self.field_solid(x, y + 1, z) {
            Some(self.palette.ceiling_decor)
        } else {
            None
        }
    }
}

pub(crate) fn generate_chunk(chunk: &mut Chunk, ctx: &GenCtx<'_>, rng: &mut fastrand::Rng) {
    let s = chunk.size();
    let (bx, by, bz) = chunk.coord.origin(s);
    let solidity = ctx.params.solidity;
    for lz in 0..s {
        for ly in 0..s {
            for lx in 0..s {
                let (x, y, z) = (bx + lx as i32, by + ly as i32, bz + lz as i32);
                let shade = ((ctx.field.shade(x, y, z) + 1.0) * 0.5).clamp(0.0, 1.0);
                chunk.set_shade(lx, ly, lz, shade);

                let block = if ctx.is_boundary(x, y, z) {
                    Some(ctx.barrier)
                } else {
                    let d = ctx.field.density(x, y, z);
                    if d < solidity {
                        Some(ctx.ground(rng))
                    } else if d < solidity + ctx.params.decor_band {
                        ctx.decoration(x, y, z, rng)
                    } else {
                        None
                    }
                };
                if let Some(id) = block {
                    chunk.set_block(lx as i32, ly as i32, lz as i32, id);
                }
            }
        }
    }
}
