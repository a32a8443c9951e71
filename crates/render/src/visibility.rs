//! Face-visibility resolution for voxels within a single chunk.
//!
//! A face is occluded when the neighboring voxel exists and is opaque;
//! volume-boundary faces are always exposed. Chunks never consult their
//! grid neighbors, so faces on chunk seams are emitted on both sides.

use crate::face::BlockFace;
use pennyvox_world::{blocks, Chunk, CHUNK_SIZE};

/// Which of the six faces of a voxel should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceSet([bool; 6]);

impl FaceSet {
    /// No face exposed (air voxels).
    pub const NONE: FaceSet = FaceSet([false; 6]);
    /// All faces exposed (transparent voxels, fully isolated voxels).
    pub const ALL: FaceSet = FaceSet([true; 6]);

    /// Whether the given face should be drawn.
    #[inline]
    pub fn exposed(&self, face: BlockFace) -> bool {
        self.0[face.index()]
    }

    /// Number of exposed faces.
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&e| e).count()
    }

    /// Whether any face is exposed.
    pub fn any(&self) -> bool {
        self.0.iter().any(|&e| e)
    }
}

/// Resolve which faces of the voxel at (x, y, z) are exposed.
///
/// Air yields no faces. Leaves yield all six and are never tested for
/// occlusion; symmetrically, a leaves neighbor never occludes (see
/// [`blocks::is_opaque`]). The four horizontal checks read the voxel's
/// 16x16 layer; the vertical checks read the voxel directly above/below,
/// with exposure forced at the volume top and bottom.
pub fn exposed_faces(chunk: &Chunk, x: usize, y: usize, z: usize) -> FaceSet {
    let id = chunk.block(x, y, z);
    if id == blocks::AIR {
        return FaceSet::NONE;
    }
    if id == blocks::LEAVES {
        return FaceSet::ALL;
    }

    let layer = chunk.layer(y);
    let cell = z * CHUNK_SIZE + x;
    let east = x == CHUNK_SIZE - 1 || !blocks::is_opaque(layer[cell + 1]);
    let west = x == 0 || !blocks::is_opaque(layer[cell - 1]);
    let south = z == CHUNK_SIZE - 1 || !blocks::is_opaque(layer[cell + CHUNK_SIZE]);
    let north = z == 0 || !blocks::is_opaque(layer[cell - CHUNK_SIZE]);

    let up = y == CHUNK_SIZE - 1 || !blocks::is_opaque(chunk.block(x, y + 1, z));
    let down = y == 0 || !blocks::is_opaque(chunk.block(x, y - 1, z));

    // Order matches BlockFace discriminants.
    FaceSet([up, down, north, south, east, west])
}
