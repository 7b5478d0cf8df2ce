//! CPU meshing crate: static shape tables and the per-chunk mesh builder.
#![forbid(unsafe_code)]

pub mod build;
pub mod cross;
pub mod face;
pub mod mesh;

pub use build::build_chunk_mesh;
pub use face::Face;
pub use mesh::ChunkMesh;
