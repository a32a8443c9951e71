//! Property tests for the directive stream over generated terrain.

use pennyvox_render::{emit_chunk_directives, exposed_faces, BlockFace, ChunkGrid};
use pennyvox_testkit::{raw_for_height, uniform_field};
use pennyvox_world::{blocks, ChunkPos, HeightField, TerrainGenerator, CHUNK_SIZE};
use proptest::prelude::*;

fn field_strategy() -> impl Strategy<Value = HeightField> {
    proptest::collection::vec(any::<u8>(), CHUNK_SIZE * CHUNK_SIZE)
        .prop_map(|samples| HeightField::from_raw(CHUNK_SIZE, CHUNK_SIZE, samples).unwrap())
}

proptest! {
    /// Air voxels never appear in the stream, whatever the terrain.
    #[test]
    fn no_directive_carries_air(field in field_strategy()) {
        let gen = TerrainGenerator::new(&field);
        let chunk = gen.generate_chunk(ChunkPos::new(0, 0)).unwrap();
        for d in emit_chunk_directives(&chunk) {
            prop_assert_ne!(d.block, blocks::AIR);
        }
    }

    /// The stream agrees with per-voxel visibility: exactly one directive
    /// per exposed face, none for hidden ones.
    #[test]
    fn stream_matches_face_visibility(field in field_strategy()) {
        let gen = TerrainGenerator::new(&field);
        let chunk = gen.generate_chunk(ChunkPos::new(0, 0)).unwrap();
        let directives = emit_chunk_directives(&chunk);

        let mut expected = 0;
        for y in 0..CHUNK_SIZE {
            for z in 0..CHUNK_SIZE {
                for x in 0..CHUNK_SIZE {
                    expected += exposed_faces(&chunk, x, y, z).count();
                }
            }
        }
        prop_assert_eq!(directives.len(), expected);
    }

    /// Every leaves voxel contributes all six faces.
    #[test]
    fn leaves_always_emit_six_faces(field in field_strategy()) {
        let gen = TerrainGenerator::new(&field);
        let chunk = gen.generate_chunk(ChunkPos::new(0, 0)).unwrap();
        let directives = emit_chunk_directives(&chunk);

        for y in 0..CHUNK_SIZE {
            for z in 0..CHUNK_SIZE {
                for x in 0..CHUNK_SIZE {
                    if chunk.block(x, y, z) != blocks::LEAVES {
                        continue;
                    }
                    let at = |f: BlockFace| {
                        directives
                            .iter()
                            .filter(|d| {
                                d.face == f
                                    && d.position.x == x as f32
                                    && d.position.y == y as f32
                                    && d.position.z == z as f32
                            })
                            .count()
                    };
                    for face in BlockFace::all() {
                        prop_assert_eq!(at(face), 1);
                    }
                }
            }
        }
    }

    /// Directive count is bounded by six faces per voxel.
    #[test]
    fn stream_never_exceeds_six_faces_per_voxel(field in field_strategy()) {
        let gen = TerrainGenerator::new(&field);
        let chunk = gen.generate_chunk(ChunkPos::new(0, 0)).unwrap();
        let solid = chunk.voxels().iter().filter(|&&id| id != blocks::AIR).count();
        prop_assert!(emit_chunk_directives(&chunk).len() <= solid * 6);
    }
}

#[test]
fn grid_stream_is_stable_until_edited() {
    let field = uniform_field(48, 48, raw_for_height(10));
    let gen = TerrainGenerator::new(&field);
    let mut grid = ChunkGrid::generate(&gen, 3, 3).unwrap();

    let first = grid.directives();
    let second = grid.directives();
    assert_eq!(first, second);

    grid.chunk_mut(1, 1).set_block(8, 14, 8, blocks::STONE);
    let third = grid.directives();
    assert_eq!(third.len(), first.len() + 6);
}

#[test]
fn flat_terrain_top_layer_is_grass_directives() {
    let field = uniform_field(CHUNK_SIZE, CHUNK_SIZE, raw_for_height(8));
    let gen = TerrainGenerator::new(&field);
    let chunk = gen.generate_chunk(ChunkPos::new(0, 0)).unwrap();
    let directives = emit_chunk_directives(&chunk);

    // Column (0, 0) carries no tree; its surface cap faces straight up.
    let up = directives
        .iter()
        .find(|d| {
            d.face == BlockFace::Up
                && d.position.x == 0.0
                && d.position.z == 0.0
                && d.position.y == 7.0
        })
        .expect("surface cap emits an up face");
    assert_eq!(up.block, blocks::GRASS);
    assert_eq!(up.texture, "grass_block");
}
