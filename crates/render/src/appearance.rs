//! Texture selection per (block type, face direction).

use crate::face::BlockFace;
use pennyvox_world::{blocks, BlockId};

/// Texture name for a block face, keyed into whatever atlas or texture set
/// the rasterization side has bound.
///
/// Grass is the three-texture case (distinct top, side, and dirt bottom);
/// logs carry end-grain caps; everything else is uniform.
pub fn texture_for(block: BlockId, face: BlockFace) -> &'static str {
    debug_assert_ne!(block, blocks::AIR, "air has no appearance");
    match block {
        blocks::GRASS => match face {
            BlockFace::Up => "grass_block",
            BlockFace::Down => "dirt_block",
            _ => "grass_block_side",
        },
        blocks::DIRT => "dirt_block",
        blocks::STONE => "stone_block",
        blocks::LOG => match face {
            BlockFace::Up | BlockFace::Down => "oak_log_top",
            _ => "oak_log",
        },
        blocks::LEAVES => "oak_leaves",
        _ => "missing_texture",
    }
}
