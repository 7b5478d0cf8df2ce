use serde::Deserialize;

use crate::types::BlockId;

#[derive(Clone, Debug, Deserialize)]
pub struct BlocksConfig {
    pub blocks: Vec<BlockDef>,
    #[serde(default)]
    pub palettes: Vec<PaletteDef>,
    /// Indestructible block sealing the map boundary.
    #[serde(default = "default_barrier")]
    pub barrier: String,
    /// Block the player places when building.
    #[serde(default = "default_scaffold")]
    pub scaffold: String,
    /// Block enemy miners stack beneath themselves when climbing.
    #[serde(default = "default_enemy_scaffold")]
    pub enemy_scaffold: String,
}

fn default_barrier() -> String {
    "barrier".into()
}
fn default_scaffold() -> String {
    "metal".into()
}
fn default_enemy_scaffold() -> String {
    "wood".into()
}

#[derive(Clone, Debug, Deserialize)]
pub struct BlockDef {
    pub name: String,
    pub id: BlockId,
    #[serde(default)]
    pub value: u32,
    #[serde(default = "default_break_time")]
    pub break_time: f32,
    #[serde(default)]
    pub transparent: bool,
    /// Texture layer override; defaults to the block id.
    #[serde(default)]
    pub texture: Option<u16>,
}

fn default_break_time() -> f32 {
    0.5
}

#[derive(Clone, Debug, Deserialize)]
pub struct PaletteDef {
    pub name: String,
    pub ground: String,
    pub ore0: String,
    pub ore1: String,
    pub ore2: String,
    pub ground_decor: String,
    pub ceiling_decor: String,
}
