use serde::{Deserialize, Serialize};

/// Runtime block identifier. Negative ids other than [`AIR`] are never registered.
pub type BlockId = i16;

/// Empty space. Never occupied, never meshed, never mined.
pub const AIR: BlockId = -1;

// Geometry family used by the mesher
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Cube,
    Cross,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlockType {
    pub id: BlockId,
    pub name: String,
    /// Currency awarded when an actor breaks the block.
    pub value: u32,
    /// Seconds of continuous mining needed; negative means unbreakable.
    pub break_time: f32,
    /// Transparent blocks are decorations: walked through, still targetable.
    pub transparent: bool,
    /// Texture-array layer used by the renderer.
    pub texture_layer: u16,
}

impl BlockType {
    #[inline]
    pub fn is_air(&self) -> bool {
        self.id == AIR
    }

    #[inline]
    pub fn is_breakable(&self) -> bool {
        self.break_time >= 0.0
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        if self.transparent {
            Shape::Cross
        } else {
            Shape::Cube
        }
    }
}
