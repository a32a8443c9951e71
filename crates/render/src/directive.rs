//! Draw directives: one record per exposed face of every solid voxel.

use crate::appearance::texture_for;
use crate::face::BlockFace;
use crate::visibility::exposed_faces;
use glam::Vec3;
use pennyvox_world::{blocks, BlockId, Chunk, CHUNK_SIZE};
use serde::Serialize;

/// One face of one voxel, ready for the rasterization side to draw against
/// a unit cube mesh with the matching texture bound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawDirective {
    /// World-space position of the voxel center (chunk origin + local).
    pub position: Vec3,
    /// Which cube face to draw.
    pub face: BlockFace,
    /// Block type the face belongs to.
    pub block: BlockId,
    /// Texture selected for this (block, face) pair.
    pub texture: &'static str,
}

/// Emit the draw directives for every exposed face in a chunk.
///
/// Air voxels yield nothing. Ordering is deterministic: Y-major over the
/// volume, then faces in discriminant order.
pub fn emit_chunk_directives(chunk: &Chunk) -> Vec<DrawDirective> {
    let (origin_x, origin_z) = chunk.position().world_origin();
    let mut directives = Vec::new();

    for y in 0..CHUNK_SIZE {
        for z in 0..CHUNK_SIZE {
            for x in 0..CHUNK_SIZE {
                let id = chunk.block(x, y, z);
                if id == blocks::AIR {
                    continue;
                }
                let faces = exposed_faces(chunk, x, y, z);
                if !faces.any() {
                    continue;
                }
                let position = Vec3::new(
                    (origin_x + x as i32) as f32,
                    y as f32,
                    (origin_z + z as i32) as f32,
                );
                for face in BlockFace::all() {
                    if faces.exposed(face) {
                        directives.push(DrawDirective {
                            position,
                            face,
                            block: id,
                            texture: texture_for(id, face),
                        });
                    }
                }
            }
        }
    }

    directives
}
