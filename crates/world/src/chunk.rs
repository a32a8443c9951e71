use std::fmt;

/// Chunk edge length in voxels (all three axes).
pub const CHUNK_SIZE: usize = 16;
/// Voxel count of one horizontal layer (fixed Y slab).
pub const CHUNK_SLAB: usize = CHUNK_SIZE * CHUNK_SIZE;
/// Total voxel count per chunk.
pub const CHUNK_VOLUME: usize = CHUNK_SLAB * CHUNK_SIZE;

/// Block type code stored per voxel.
pub type BlockId = u8;

/// The fixed block palette.
pub mod blocks {
    use super::BlockId;

    pub const AIR: BlockId = 0;
    pub const GRASS: BlockId = 1;
    pub const DIRT: BlockId = 2;
    pub const STONE: BlockId = 3;
    pub const LOG: BlockId = 4;
    pub const LEAVES: BlockId = 5;

    /// Whether a block occludes the faces of its neighbors.
    ///
    /// Air occludes nothing, and leaves are treated as transparent: a face
    /// behind foliage must still be drawn or holes appear in the terrain.
    #[inline]
    pub fn is_opaque(id: BlockId) -> bool {
        id != AIR && id != LEAVES
    }
}

/// Chunk-local position (X, Y, Z), each in [0, 16).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalPos {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl LocalPos {
    /// Convert to a linear index within the voxel array.
    ///
    /// Layout is Y-major: one full 16x16 slab per Y level, rows along Z.
    pub fn index(self) -> usize {
        debug_assert!(self.x < CHUNK_SIZE);
        debug_assert!(self.y < CHUNK_SIZE);
        debug_assert!(self.z < CHUNK_SIZE);
        self.y * CHUNK_SLAB + self.z * CHUNK_SIZE + self.x
    }
}

/// Chunk coordinate (column, row) in the world grid.
///
/// The world-space XZ offset of a chunk is its coordinate times the chunk
/// edge length; chunks are laid out only horizontally, never stacked along Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkPos {
    pub col: i32,
    pub row: i32,
}

impl ChunkPos {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// World-space (X, Z) origin of this chunk.
    pub fn world_origin(self) -> (i32, i32) {
        (self.col * CHUNK_SIZE as i32, self.row * CHUNK_SIZE as i32)
    }
}

impl fmt::Display for ChunkPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    /// Dirty flags set whenever chunk data changes.
    pub struct DirtyFlags: u8 {
        const MESH = 0b0000_0001;
    }
}

impl Default for DirtyFlags {
    fn default() -> Self {
        DirtyFlags::empty()
    }
}

/// A 16x16x16 voxel volume plus its grid coordinate.
///
/// Each chunk exclusively owns its voxel storage; neighbors are never
/// consulted across chunk boundaries.
#[derive(Debug)]
pub struct Chunk {
    position: ChunkPos,
    voxels: Vec<BlockId>,
    dirty: DirtyFlags,
}

impl Chunk {
    /// Allocate a fresh chunk filled with air.
    pub fn new(position: ChunkPos) -> Self {
        Self {
            position,
            voxels: vec![blocks::AIR; CHUNK_VOLUME],
            dirty: DirtyFlags::all(),
        }
    }

    #[inline]
    pub fn position(&self) -> ChunkPos {
        self.position
    }

    fn index(x: usize, y: usize, z: usize) -> usize {
        LocalPos { x, y, z }.index()
    }

    /// Fetch the block code at a local coordinate.
    pub fn block(&self, x: usize, y: usize, z: usize) -> BlockId {
        self.voxels[Self::index(x, y, z)]
    }

    /// Set a block and mark the chunk dirty if the value changed.
    pub fn set_block(&mut self, x: usize, y: usize, z: usize, id: BlockId) {
        let idx = Self::index(x, y, z);
        if self.voxels[idx] != id {
            self.voxels[idx] = id;
            self.dirty.insert(DirtyFlags::MESH);
        }
    }

    /// Borrow the 16x16 horizontal layer at the given Y level.
    ///
    /// Rows run along Z; a voxel sits at `z * CHUNK_SIZE + x` within the
    /// slab. Face-visibility resolution uses this view for the four
    /// horizontal neighbor checks.
    pub fn layer(&self, y: usize) -> &[BlockId] {
        debug_assert!(y < CHUNK_SIZE);
        &self.voxels[y * CHUNK_SLAB..(y + 1) * CHUNK_SLAB]
    }

    /// Borrow raw voxel storage (byte-for-byte comparisons in tests).
    pub fn voxels(&self) -> &[BlockId] {
        &self.voxels
    }

    /// Whether any dirty flag is currently set.
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Consume and return the current dirty flags.
    pub fn take_dirty_flags(&mut self) -> DirtyFlags {
        let flags = self.dirty;
        self.dirty = DirtyFlags::empty();
        flags
    }
}
