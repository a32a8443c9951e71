//! Deterministic tree decoration placed above the terrain surface.

use crate::chunk::{blocks, BlockId, Chunk, CHUNK_SIZE};

/// Highest terrain surface that still receives trees; taller columns would
/// push the canopy against the chunk ceiling.
pub const MAX_TREE_SURFACE: usize = 12;

/// Trunk height in blocks, counted from the surface upward.
pub const TRUNK_HEIGHT: usize = 4;

/// Half-extent of the square leaf plate stamped at the trunk top.
pub const CANOPY_RADIUS: i32 = 2;

/// Arithmetic placement predicate over chunk-local column coordinates.
///
/// Not a spatial hash: the predicate only sees local (x, z), so every chunk
/// in a grid repeats the same tree layout.
#[inline]
pub fn wants_tree(x: usize, z: usize) -> bool {
    (x * z * z * z) % 31 == 7
}

/// Decorate one column whose terrain surface height is `surface`.
///
/// Places a trunk of LOG at y in [surface, surface + 3], then stamps a 5x5
/// LEAVES plate at the trunk-top level, overwriting the top trunk block.
/// Writes that fall outside the volume are skipped, never wrapped.
pub fn decorate_column(chunk: &mut Chunk, x: usize, z: usize, surface: usize) {
    if surface > MAX_TREE_SURFACE || !wants_tree(x, z) {
        return;
    }

    for y in surface..surface + TRUNK_HEIGHT {
        place(chunk, x as i32, y as i32, z as i32, blocks::LOG);
    }

    let plate_y = (surface + TRUNK_HEIGHT - 1) as i32;
    for dz in -CANOPY_RADIUS..=CANOPY_RADIUS {
        for dx in -CANOPY_RADIUS..=CANOPY_RADIUS {
            place(chunk, x as i32 + dx, plate_y, z as i32 + dz, blocks::LEAVES);
        }
    }
}

/// Write a block if the coordinate lies inside the chunk volume.
fn place(chunk: &mut Chunk, x: i32, y: i32, z: i32, id: BlockId) {
    let limit = CHUNK_SIZE as i32;
    if (0..limit).contains(&x) && (0..limit).contains(&y) && (0..limit).contains(&z) {
        chunk.set_block(x as usize, y as usize, z as usize, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::ChunkPos;

    #[test]
    fn predicate_is_deterministic_and_sparse() {
        let first: Vec<_> = (0..CHUNK_SIZE)
            .flat_map(|x| (0..CHUNK_SIZE).map(move |z| wants_tree(x, z)))
            .collect();
        let second: Vec<_> = (0..CHUNK_SIZE)
            .flat_map(|x| (0..CHUNK_SIZE).map(move |z| wants_tree(x, z)))
            .collect();
        assert_eq!(first, second);

        let hits = first.iter().filter(|&&t| t).count();
        assert!(hits > 0, "predicate should fire somewhere in a 16x16 grid");
        assert!(hits < 64, "predicate should stay sparse, got {hits}");
    }

    #[test]
    fn trunk_and_plate_shape() {
        // Find a column the predicate accepts.
        let (x, z) = (0..CHUNK_SIZE)
            .flat_map(|x| (0..CHUNK_SIZE).map(move |z| (x, z)))
            .find(|&(x, z)| wants_tree(x, z))
            .expect("some column wants a tree");

        let surface = 10;
        let mut chunk = Chunk::new(ChunkPos::new(0, 0));
        decorate_column(&mut chunk, x, z, surface);

        // Trunk below the plate is LOG; the plate overwrites the trunk top.
        for y in surface..surface + TRUNK_HEIGHT - 1 {
            assert_eq!(chunk.block(x, y, z), blocks::LOG, "trunk at y={y}");
        }
        let plate_y = surface + TRUNK_HEIGHT - 1;
        assert_eq!(chunk.block(x, plate_y, z), blocks::LEAVES);

        // Plate cells inside bounds are LEAVES.
        for dz in -CANOPY_RADIUS..=CANOPY_RADIUS {
            for dx in -CANOPY_RADIUS..=CANOPY_RADIUS {
                let px = x as i32 + dx;
                let pz = z as i32 + dz;
                if (0..CHUNK_SIZE as i32).contains(&px) && (0..CHUNK_SIZE as i32).contains(&pz) {
                    assert_eq!(
                        chunk.block(px as usize, plate_y, pz as usize),
                        blocks::LEAVES
                    );
                }
            }
        }
    }

    #[test]
    fn no_tree_above_height_limit() {
        let (x, z) = (0..CHUNK_SIZE)
            .flat_map(|x| (0..CHUNK_SIZE).map(move |z| (x, z)))
            .find(|&(x, z)| wants_tree(x, z))
            .expect("some column wants a tree");

        let mut chunk = Chunk::new(ChunkPos::new(0, 0));
        decorate_column(&mut chunk, x, z, MAX_TREE_SURFACE + 1);
        assert!(chunk.voxels().iter().all(|&id| id == blocks::AIR));
    }

    #[test]
    fn edge_plate_is_clipped_not_wrapped() {
        // Force decoration at the chunk edge regardless of the predicate by
        // checking clipping behavior through place() + a real accepted column
        // near the boundary if one exists; otherwise exercise place directly.
        let mut chunk = Chunk::new(ChunkPos::new(0, 0));
        super::place(&mut chunk, -1, 5, 0, blocks::LEAVES);
        super::place(&mut chunk, 16, 5, 0, blocks::LEAVES);
        super::place(&mut chunk, 0, 16, 0, blocks::LEAVES);
        assert!(
            chunk.voxels().iter().all(|&id| id == blocks::AIR),
            "out-of-volume writes must be skipped"
        );

        super::place(&mut chunk, 0, 5, 15, blocks::LEAVES);
        assert_eq!(chunk.block(0, 5, 15), blocks::LEAVES);
    }
}
