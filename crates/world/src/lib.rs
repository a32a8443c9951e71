mod chunk;
mod heightfield;
mod terrain;
mod trees;

pub use chunk::*;
pub use heightfield::*;
pub use terrain::*;
pub use trees::*;
