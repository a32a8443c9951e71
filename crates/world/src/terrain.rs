//! Terrain generation driven by a grayscale height field.
//!
//! Fills chunks column by column with the stone/dirt/grass layering, then
//! runs the tree decoration pass.

use crate::chunk::{blocks, Chunk, ChunkPos, CHUNK_SIZE};
use crate::heightfield::{HeightField, HeightFieldError};
use crate::trees;
use tracing::{debug, instrument};

/// Blocks of dirt-or-grass soil above the stone core of a column.
const SOIL_DEPTH: usize = 5;
/// Blocks of dirt below the top-soil band.
const DIRT_DEPTH: usize = 3;

/// Terrain generator borrowing a height field for the lifetime of a world
/// build. Generation is a pure function of (chunk position, field).
pub struct TerrainGenerator<'a> {
    field: &'a HeightField,
}

impl<'a> TerrainGenerator<'a> {
    /// Create a generator over the given sample field.
    pub fn new(field: &'a HeightField) -> Self {
        Self { field }
    }

    /// The field this generator samples from.
    pub fn field(&self) -> &HeightField {
        self.field
    }

    /// Generate a fully populated chunk at the given grid position.
    ///
    /// Heights are sampled at world coordinates (chunk origin + local), so
    /// the field must cover the whole grid; a column outside the field
    /// aborts generation for the chunk rather than guessing a height.
    #[instrument(skip(self), fields(chunk_pos = %chunk_pos))]
    pub fn generate_chunk(&self, chunk_pos: ChunkPos) -> Result<Chunk, HeightFieldError> {
        debug!("starting terrain generation");
        let mut chunk = Chunk::new(chunk_pos);
        let (origin_x, origin_z) = chunk_pos.world_origin();

        for z in 0..CHUNK_SIZE {
            for x in 0..CHUNK_SIZE {
                let world_x = origin_x + x as i32;
                let world_z = origin_z + z as i32;
                let surface = self.field.terrain_height(world_x, world_z)? as usize;

                self.generate_column(&mut chunk, x, z, surface);
                trees::decorate_column(&mut chunk, x, z, surface);
            }
        }

        debug!("terrain generation complete");
        Ok(chunk)
    }

    /// Fill one vertical column: stone core, dirt band, single grass cap.
    ///
    /// For small surface heights the ranges degenerate to empty without
    /// error; a height of zero produces a fully empty column.
    fn generate_column(&self, chunk: &mut Chunk, x: usize, z: usize, surface: usize) {
        let stone_top = surface.saturating_sub(SOIL_DEPTH);
        let dirt_top = surface.saturating_sub(SOIL_DEPTH - DIRT_DEPTH);

        for y in 0..stone_top {
            chunk.set_block(x, y, z, blocks::STONE);
        }
        for y in stone_top..dirt_top {
            chunk.set_block(x, y, z, blocks::DIRT);
        }
        if surface > 0 {
            chunk.set_block(x, surface - 1, z, blocks::GRASS);
        }
    }
}
