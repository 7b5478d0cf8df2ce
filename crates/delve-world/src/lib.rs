//! Chunked voxel storage, cave generation, and the world map that routes edits across chunks.
#![forbid(unsafe_code)]

pub mod chunk;
pub mod coords;
pub mod generation;
pub mod world;

pub use chunk::Chunk;
pub use coords::{BlockPos, ChunkCoord, spatial_hash};
pub use generation::{DensityField, GenParams, NoiseField, load_params_from_path};
pub use world::World;

/// Default edge length of a chunk, in blocks.
pub const CHUNK_SIZE: usize = 16;
/// Default edge length of the map, in chunks.
pub const MAP_SIZE_CHUNKS: usize = 4;
