//! Headless voxel rendering front half: face visibility, texture selection,
//! and draw-directive emission for a grid of chunks.
//!
//! Nothing here touches a GPU. The output of this crate is an ordered stream
//! of [`DrawDirective`] records that a rasterization layer can consume.

#![warn(missing_docs)]

mod appearance;
mod directive;
mod face;
mod grid;
mod visibility;

pub use appearance::texture_for;
pub use directive::{emit_chunk_directives, DrawDirective};
pub use face::{face_quad, BlockFace, FaceQuad, FACE_QUADS, QUAD_INDICES};
pub use grid::ChunkGrid;
pub use visibility::{exposed_faces, FaceSet};
