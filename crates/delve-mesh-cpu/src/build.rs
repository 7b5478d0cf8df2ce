use delve_blocks::{AIR, BlockId, BlockRegistry, Shape};

use crate::cross::{CROSS_INDICES, CROSS_QUADS, CROSS_SHADES, CROSS_UVS, CROSS_VERTICES};
use crate::face::Face;
use crate::mesh::ChunkMesh;

#[inline]
fn tint(base: f32, shade: f32) -> f32 {
    base * 0.9 + 0.1 * shade
}

/// Rebuilds the full mesh of one `size³` chunk whose minimum corner sits at `origin`.
///
/// `block_at` and `shade_at` take world block coordinates; `block_at` must also
/// answer for cells outside the chunk so seam faces cull against neighbors.
/// Cube faces are dropped when the neighbor occupies its cell (decorations do not
/// count). Decorations are never culled.
pub fn build_chunk_mesh<B, S>(
    origin: (i32, i32, i32),
    size: usize,
    reg: &BlockRegistry,
    block_at: B,
    shade_at: S,
) -> ChunkMesh
where
    B: Fn(i32, i32, i32) -> BlockId,
    S: Fn(i32, i32, i32) -> f32,
{
    let mut mesh = ChunkMesh::default();
    let s = size as i32;
    for lz in 0..s {
        for ly in 0..s {
            for lx in 0..s {
                let (x, y, z) = (origin.0 + lx, origin.1 + ly, origin.2 + lz);
                let id = block_at(x, y, z);
                if id == AIR {
                    continue;
                }
                let ty = reg.lookup(id);
                let layer = f32::from(ty.texture_layer);
                let shade = shade_at(x, y, z);
                let at = [x as f32, y as f32, z as f32];
                match ty.shape() {
                    Shape::Cube => {
                        for face in Face::ALL {
                            let (dx, dy, dz) = face.delta();
                            if reg.occupies(block_at(x + dx, y + dy, z + dz), false) {
                                continue;
                            }
                            mesh.push_quad(
                                at,
                                face.vertices(),
                                face.uvs(),
                                face.indices(),
                                layer,
                                tint(face.base_shade(), shade),
                            );
                        }
                    }
                    Shape::Cross => {
                        for q in 0..CROSS_QUADS {
                            mesh.push_quad(
                                at,
                                &CROSS_VERTICES[q],
                                &CROSS_UVS[q],
                                &CROSS_INDICES[q],
                                layer,
                                tint(CROSS_SHADES[q], shade),
                            );
                        }
                    }
                }
            }
        }
    }
    log::trace!(
        "meshed chunk at {:?}: {} quads",
        origin,
        mesh.quad_count()
    );
    mesh
}
