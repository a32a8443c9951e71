//! Cube face directions and the per-face unit-cube geometry table.

use serde::Serialize;

/// The six faces of a unit cube, named by world direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BlockFace {
    /// Positive Y / top face.
    Up = 0,
    /// Negative Y / bottom face.
    Down = 1,
    /// Negative Z face.
    North = 2,
    /// Positive Z face.
    South = 3,
    /// Positive X face.
    East = 4,
    /// Negative X face.
    West = 5,
}

impl BlockFace {
    /// All faces, in discriminant order.
    pub fn all() -> [BlockFace; 6] {
        [
            BlockFace::Up,
            BlockFace::Down,
            BlockFace::North,
            BlockFace::South,
            BlockFace::East,
            BlockFace::West,
        ]
    }

    /// Outward unit normal as integer axis steps.
    pub fn normal(self) -> [i32; 3] {
        match self {
            BlockFace::Up => [0, 1, 0],
            BlockFace::Down => [0, -1, 0],
            BlockFace::North => [0, 0, -1],
            BlockFace::South => [0, 0, 1],
            BlockFace::East => [1, 0, 0],
            BlockFace::West => [-1, 0, 0],
        }
    }

    /// Stable index used by [`FaceSet`](crate::FaceSet) and the quad table.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One face of the unit cube: four corner positions and their UVs,
/// wound counter-clockwise seen from outside.
#[derive(Debug, Clone, Copy)]
pub struct FaceQuad {
    /// Corner positions relative to the cube center.
    pub corners: [[f32; 3]; 4],
    /// Texture coordinates per corner.
    pub uvs: [[f32; 2]; 4],
}

/// Index pattern turning a [`FaceQuad`] into two triangles.
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 2, 3, 0];

const QUAD_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Geometry for each face, keyed by [`BlockFace`] index.
///
/// Replaces positional vertex-buffer offsets: a consumer selects the quad by
/// face direction instead of assuming a fixed face order in a flat buffer.
pub const FACE_QUADS: [FaceQuad; 6] = [
    // Up (y = +0.5)
    FaceQuad {
        corners: [
            [-0.5, 0.5, 0.5],
            [0.5, 0.5, 0.5],
            [0.5, 0.5, -0.5],
            [-0.5, 0.5, -0.5],
        ],
        uvs: QUAD_UVS,
    },
    // Down (y = -0.5)
    FaceQuad {
        corners: [
            [-0.5, -0.5, -0.5],
            [0.5, -0.5, -0.5],
            [0.5, -0.5, 0.5],
            [-0.5, -0.5, 0.5],
        ],
        uvs: QUAD_UVS,
    },
    // North (z = -0.5)
    FaceQuad {
        corners: [
            [0.5, -0.5, -0.5],
            [-0.5, -0.5, -0.5],
            [-0.5, 0.5, -0.5],
            [0.5, 0.5, -0.5],
        ],
        uvs: QUAD_UVS,
    },
    // South (z = +0.5)
    FaceQuad {
        corners: [
            [-0.5, -0.5, 0.5],
            [0.5, -0.5, 0.5],
            [0.5, 0.5, 0.5],
            [-0.5, 0.5, 0.5],
        ],
        uvs: QUAD_UVS,
    },
    // East (x = +0.5)
    FaceQuad {
        corners: [
            [0.5, -0.5, 0.5],
            [0.5, -0.5, -0.5],
            [0.5, 0.5, -0.5],
            [0.5, 0.5, 0.5],
        ],
        uvs: QUAD_UVS,
    },
    // West (x = -0.5)
    FaceQuad {
        corners: [
            [-0.5, -0.5, -0.5],
            [-0.5, -0.5, 0.5],
            [-0.5, 0.5, 0.5],
            [-0.5, 0.5, -0.5],
        ],
        uvs: QUAD_UVS,
    },
];

/// Look up the quad for a face.
pub fn face_quad(face: BlockFace) -> &'static FaceQuad {
    &FACE_QUADS[face.index()]
}
