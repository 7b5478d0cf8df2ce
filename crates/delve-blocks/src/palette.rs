use crate::types::BlockId;

/// Semantic slot a palette fills during generation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PaletteRole {
    Ground,
    /// Most common ore.
    Ore0,
    Ore1,
    /// Rarest ore.
    Ore2,
    GroundDecor,
    CeilingDecor,
}

/// Biome block set: which concrete block fills each generation role.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub name: String,
    pub ground: BlockId,
    pub ore0: BlockId,
    pub ore1: BlockId,
    pub ore2: BlockId,
    pub ground_decor: BlockId,
    pub ceiling_decor: BlockId,
}

impl Palette {
    #[inline]
    pub fn block(&self, role: PaletteRole) -> BlockId {
        match role {
            PaletteRole::Ground => self.ground,
            PaletteRole::Ore0 => self.ore0,
            PaletteRole::Ore1 => self.ore1,
            PaletteRole::Ore2 => self.ore2,
            PaletteRole::GroundDecor => self.ground_decor,
            PaletteRole::CeilingDecor => self.ceiling_decor,
        }
    }
}
