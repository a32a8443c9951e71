//! The chunk grid: a fixed rectangle of chunks plus a per-chunk directive
//! cache keyed off the chunks' dirty flags.

use crate::directive::{emit_chunk_directives, DrawDirective};
use pennyvox_world::{Chunk, ChunkPos, DirtyFlags, HeightFieldError, TerrainGenerator};
use tracing::debug;

/// A `width` x `depth` arrangement of chunks in row-major order.
///
/// Chunk index `i` sits at column `i % width`, row `i / width`, which places
/// its world origin at `(col * 16, 0, row * 16)`. Directives are cached per
/// chunk and rebuilt only when the chunk reports mesh-dirty.
#[derive(Debug)]
pub struct ChunkGrid {
    width: usize,
    depth: usize,
    chunks: Vec<Chunk>,
    cache: Vec<Option<Vec<DrawDirective>>>,
}

impl ChunkGrid {
    /// Generate every chunk of a `width` x `depth` grid from the terrain
    /// generator. Fails if the generator's height field does not cover the
    /// full grid footprint.
    pub fn generate(
        generator: &TerrainGenerator<'_>,
        width: usize,
        depth: usize,
    ) -> Result<Self, HeightFieldError> {
        let mut chunks = Vec::with_capacity(width * depth);
        for i in 0..width * depth {
            let position = ChunkPos::new((i % width) as i32, (i / width) as i32);
            chunks.push(generator.generate_chunk(position)?);
        }
        debug!(width, depth, "generated chunk grid");
        Ok(Self {
            width,
            depth,
            cache: vec![None; chunks.len()],
            chunks,
        })
    }

    /// Grid width in chunks.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid depth in chunks.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Total number of chunks in the grid.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Borrow the chunk at grid cell (col, row).
    pub fn chunk(&self, col: usize, row: usize) -> &Chunk {
        debug_assert!(col < self.width && row < self.depth);
        &self.chunks[row * self.width + col]
    }

    /// Mutably borrow the chunk at grid cell (col, row). Edits set the
    /// chunk's dirty flags and so invalidate its cached directives.
    pub fn chunk_mut(&mut self, col: usize, row: usize) -> &mut Chunk {
        debug_assert!(col < self.width && row < self.depth);
        &mut self.chunks[row * self.width + col]
    }

    /// The full draw-directive stream for the grid, in chunk index order.
    ///
    /// Chunks whose mesh-dirty flag is set (or that have never been emitted)
    /// are re-resolved; clean chunks are served from cache.
    pub fn directives(&mut self) -> Vec<DrawDirective> {
        for (i, chunk) in self.chunks.iter_mut().enumerate() {
            let dirty = chunk.take_dirty_flags().contains(DirtyFlags::MESH);
            if dirty || self.cache[i].is_none() {
                let directives = emit_chunk_directives(chunk);
                debug!(
                    chunk_pos = %chunk.position(),
                    count = directives.len(),
                    "rebuilt chunk directives"
                );
                self.cache[i] = Some(directives);
            }
        }
        self.cache
            .iter()
            .flat_map(|entry| entry.as_deref().unwrap_or(&[]).iter().cloned())
            .collect()
    }
}
