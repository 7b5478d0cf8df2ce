use std::sync::Arc;

use delve_blocks::{AIR, BlockRegistry};
use delve_geom::Vec3;
use delve_world::{Chunk, ChunkCoord, DensityField, GenParams, NoiseField, World, spatial_hash};

struct ConstantField {
    density: f32,
    shade: f32,
}

impl DensityField for ConstantField {
    fn density(&self, _: i32, _: i32, _: i32) -> f32 {
        self.density
    }
    fn shade(&self, _: i32, _: i32, _: i32) -> f32 {
        self.shade
    }
}

/// Open everywhere above `floor_y`, rock at and below it.
struct FloorField {
    floor_y: i32,
}

impl DensityField for FloorField {
    fn density(&self, _: i32, y: i32, _: i32) -> f32 {
        if y <= self.floor_y { -1.0 } else { 1.0 }
    }
    fn shade(&self, _: i32, _: i32, _: i32) -> f32 {
        0.0
    }
}

fn registry() -> Arc<BlockRegistry> {
    Arc::new(BlockRegistry::builtin())
}

fn no_ore_params() -> GenParams {
    GenParams {
        ore_rare: 0.0,
        ore_mid: 0.0,
        ore_common: 0.0,
        ..GenParams::default()
    }
}

#[test]
fn constant_zero_field_fills_ground_inside_barrier_shell() {
    let reg = registry();
    let mut world = World::new(16, 1, reg.clone());
    let palette = reg.palette_for_level(0).clone();
    let field = ConstantField { density: 0.0, shade: 0.0 };
    let mut rng = fastrand::Rng::with_seed(7);
    world.generate(&field, &mut rng, &palette, &no_ore_params());

    for z in 0..16 {
        for y in 0..16 {
            for x in 0..16 {
                let edge = [x, y, z].iter().any(|&c| c == 0 || c == 15);
                let expect = if edge { reg.barrier() } else { palette.ground };
                assert_eq!(world.block(x, y, z), expect, "at {x},{y},{z}");
            }
        }
    }

    // Solid cube: only the outer shell faces survive culling.
    world.update_meshes();
    let mesh = world.chunk(ChunkCoord::new(0, 0, 0)).unwrap().mesh();
    assert_eq!(mesh.quad_count(), 6 * 16 * 16);
}

#[test]
fn shade_is_mapped_into_unit_range() {
    let reg = registry();
    let mut world = World::new(8, 1, reg.clone());
    let field = ConstantField { density: 1.0, shade: -1.0 };
    let mut rng = fastrand::Rng::with_seed(1);
    world.generate(&field, &mut rng, reg.palette_for_level(0), &GenParams::default());
    assert_eq!(world.shade(3, 3, 3), 0.0);

    let field = ConstantField { density: 1.0, shade: 0.5 };
    world.generate(&field, &mut rng, reg.palette_for_level(0), &GenParams::default());
    assert!((world.shade(3, 3, 3) - 0.75).abs() < 1e-6);
}

#[test]
fn decorations_attach_to_floor() {
    let reg = registry();
    let mut world = World::new(8, 1, reg.clone());
    let palette = reg.palette_for_level(0).clone();
    let params = GenParams {
        decor_band: 10.0,
        decor_chance: 1.0,
        ..no_ore_params()
    };
    world.generate(&FloorField { floor_y: 2 }, &mut fastrand::Rng::with_seed(3), &palette, &params);
    assert_eq!(world.block(3, 2, 3), palette.ground);
    assert_eq!(world.block(3, 3, 3), palette.ground_decor);
    // Directly under the barrier ceiling.
    assert_eq!(world.block(3, 6, 3), palette.ceiling_decor);
    assert_eq!(world.block(3, 4, 3), AIR);
}

#[test]
fn generation_is_deterministic_for_a_seed() {
    let reg = registry();
    let params = GenParams::default();
    let palette = reg.palette_for_level(1).clone();
    let field = NoiseField::new(42, &params);
    let mut a = World::new(8, 2, reg.clone());
    let mut b = World::new(8, 2, reg.clone());
    a.generate(&field, &mut fastrand::Rng::with_seed(9), &palette, &params);
    b.generate(&field, &mut fastrand::Rng::with_seed(9), &palette, &params);
    for coord in a.grid_coords() {
        assert_eq!(a.chunk(coord).unwrap().blocks(), b.chunk(coord).unwrap().blocks());
    }
}

#[test]
fn missing_chunks_read_air_and_ignore_writes() {
    let mut world = World::new(16, 2, registry());
    assert_eq!(world.block(5, 5, 5), AIR);
    assert!(!world.set_block(5, 5, 5, 0));
    assert_eq!(world.block(5, 5, 5), AIR);
}

#[test]
fn negative_coordinates_route_to_negative_chunks() {
    let mut world = World::new(16, 1, registry());
    world.insert_chunk(Chunk::new(ChunkCoord::new(-1, -1, -1), 16));
    assert!(world.set_block(-1, -16, -5, 3));
    assert_eq!(world.block(-1, -16, -5), 3);
    let chunk = world.chunk(ChunkCoord::new(-1, -1, -1)).unwrap();
    assert_eq!(chunk.get_block(15, 0, 11), 3);
}

#[test]
fn seam_edits_dirty_neighbors() {
    let mut world = World::new(4, 2, registry());
    for c in world.grid_coords() {
        world.insert_chunk(Chunk::new(c, 4));
    }
    world.update_meshes();
    assert!(world.chunks().all(|c| !c.is_dirty()));

    // Local (3, 1, 0) touches +X and -Z faces of chunk (0,0,0).
    world.set_block(3, 1, 0, 0);
    let dirty: Vec<ChunkCoord> = world.update_meshes();
    assert_eq!(dirty, vec![ChunkCoord::new(0, 0, 0), ChunkCoord::new(1, 0, 0)]);

    // Interior edits touch only their own chunk.
    world.set_block(1, 1, 1, 0);
    assert_eq!(world.update_meshes(), vec![ChunkCoord::new(0, 0, 0)]);
}

#[test]
fn update_chunk_is_gated_by_dirty_flag() {
    let mut world = World::new(4, 1, registry());
    let coord = ChunkCoord::new(0, 0, 0);
    world.insert_chunk(Chunk::new(coord, 4));
    world.set_block(1, 1, 1, 0);
    assert!(world.update_chunk(coord));
    assert!(!world.update_chunk(coord));
    assert_eq!(world.chunk(coord).unwrap().mesh().quad_count(), 6);
    assert!(!world.update_chunk(ChunkCoord::new(9, 9, 9)));
}

#[test]
fn occupancy_and_support() {
    let reg = registry();
    let mushroom = reg.id_by_name("mushroom").unwrap();
    let mut world = World::new(8, 1, reg);
    world.insert_chunk(Chunk::new(ChunkCoord::new(0, 0, 0), 8));
    world.set_block(2, 2, 2, 0);
    world.set_block(4, 4, 4, mushroom);

    assert!(world.is_block_occupied(2, 2, 2, false));
    assert!(!world.is_block_occupied(4, 4, 4, false));
    assert!(world.is_block_occupied(4, 4, 4, true));
    assert!(!world.is_block_occupied(3, 3, 3, true));

    assert!(world.is_block_supported(2, 3, 2));
    assert!(world.is_block_supported(5, 4, 4));
    assert!(!world.is_block_supported(6, 6, 6));
}

#[test]
fn spawn_pos_scans_then_forces() {
    let reg = registry();
    let mut world = World::new(4, 1, reg);
    let coord = ChunkCoord::new(0, 0, 0);
    let mut chunk = Chunk::new(coord, 4);
    for z in 0..4 {
        for y in 0..4 {
            for x in 0..4 {
                chunk.set_block(x, y, z, 0);
            }
        }
    }
    chunk.set_block(1, 2, 3, AIR);
    world.insert_chunk(chunk);

    assert_eq!(world.spawn_pos(coord, false), Some(Vec3::new(1.5, 2.5, 3.5)));
    world.set_block(1, 2, 3, 0);

    assert_eq!(world.spawn_pos(coord, false), None);
    assert_eq!(world.block(2, 2, 2), 0, "non-forced spawn must not carve");

    assert_eq!(world.spawn_pos(coord, true), Some(Vec3::new(2.5, 2.5, 2.5)));
    assert_eq!(world.block(2, 2, 2), AIR);

    assert_eq!(world.spawn_pos(ChunkCoord::new(3, 3, 3), true), None);
}

#[test]
fn spawn_points_cover_every_chunk() {
    let reg = registry();
    let mut world = World::new(8, 2, reg.clone());
    let field = ConstantField { density: 0.0, shade: 0.0 };
    world.generate(&field, &mut fastrand::Rng::with_seed(5), reg.palette_for_level(0), &GenParams::default());
    let points = world.spawn_points();
    assert_eq!(points.len(), 8);
    for p in points {
        assert_eq!(world.block(p.x.floor() as i32, p.y.floor() as i32, p.z.floor() as i32), AIR);
    }
}

#[test]
fn destroy_drops_everything() {
    let reg = registry();
    let mut world = World::new(8, 2, reg.clone());
    let field = NoiseField::new(1, &GenParams::default());
    world.generate(&field, &mut fastrand::Rng::with_seed(2), reg.palette_for_level(0), &GenParams::default());
    world.update_meshes();
    assert_eq!(world.chunk_count(), 8);
    world.destroy();
    assert_eq!(world.chunk_count(), 0);
    assert_eq!(world.block(4, 4, 4), AIR);
}

#[test]
fn spatial_hash_has_no_collisions_on_default_grid() {
    let n = delve_world::MAP_SIZE_CHUNKS as i32;
    let mut seen = std::collections::HashSet::new();
    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                assert!(seen.insert(spatial_hash(x, y, z)), "collision at {x},{y},{z}");
            }
        }
    }
}

#[test]
fn generation_params_load_from_toml() {
    let dir = std::env::temp_dir().join(format!("delve-gen-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let good = dir.join("gen.toml");
    std::fs::write(&good, "solidity = 0.25\nore_common = 0.5\n").unwrap();
    let p = delve_world::load_params_from_path(&good).unwrap();
    assert_eq!(p.solidity, 0.25);
    assert_eq!(p.ore_common, 0.5);
    assert_eq!(p.cave_frequency, GenParams::default().cave_frequency);

    let bad = dir.join("bad.toml");
    std::fs::write(&bad, "ore_rare = 0.9\n").unwrap();
    assert!(delve_world::load_params_from_path(&bad).is_err());
    assert!(delve_world::load_params_from_path(&dir.join("missing.toml")).is_err());
    std::fs::remove_dir_all(&dir).unwrap();
}
