//! Block catalog, palettes, and registry crate.
#![forbid(unsafe_code)]

pub mod config;
pub mod palette;
pub mod registry;
pub mod types;

pub use palette::{Palette, PaletteRole};
pub use registry::BlockRegistry;
pub use types::{AIR, BlockId, BlockType, Shape};
