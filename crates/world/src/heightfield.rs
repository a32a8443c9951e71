//! Grayscale sample field backing terrain generation.
//!
//! The field is a decoded 8-bit image; intensity at (x, z) determines the
//! terrain surface elevation at that column.

use thiserror::Error;

/// Divisor quantizing raw 0-255 samples into the 16 usable height bands.
pub const HEIGHT_DIVISOR: u8 = 16;

/// Errors raised by height field construction and sampling.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeightFieldError {
    /// The field has a zero dimension.
    #[error("height field is empty ({width}x{depth})")]
    Empty {
        /// Field width in samples.
        width: usize,
        /// Field depth in samples.
        depth: usize,
    },
    /// The sample buffer does not match the declared dimensions.
    #[error("sample buffer holds {len} bytes, expected {width}x{depth}")]
    LengthMismatch {
        /// Declared width.
        width: usize,
        /// Declared depth.
        depth: usize,
        /// Actual buffer length.
        len: usize,
    },
    /// A sample was requested outside the field bounds.
    #[error("sample ({x}, {z}) lies outside the {width}x{depth} field")]
    OutOfBounds {
        /// Requested X coordinate.
        x: i32,
        /// Requested Z coordinate.
        z: i32,
        /// Field width in samples.
        width: usize,
        /// Field depth in samples.
        depth: usize,
    },
}

/// 2D grid of 8-bit intensity samples, row-major with rows along Z.
///
/// A sample at (x, z) lives at `z * width + x`, matching the byte layout of
/// a decoded grayscale image.
#[derive(Debug, PartialEq)]
pub struct HeightField {
    width: usize,
    depth: usize,
    samples: Vec<u8>,
}

impl HeightField {
    /// Build a field from raw intensity bytes.
    ///
    /// Rejects empty dimensions and buffers that do not match them; a field
    /// that cannot be validated here would otherwise surface as silently
    /// corrupted terrain later.
    pub fn from_raw(width: usize, depth: usize, samples: Vec<u8>) -> Result<Self, HeightFieldError> {
        if width == 0 || depth == 0 {
            return Err(HeightFieldError::Empty { width, depth });
        }
        if samples.len() != width * depth {
            return Err(HeightFieldError::LengthMismatch {
                width,
                depth,
                len: samples.len(),
            });
        }
        Ok(Self {
            width,
            depth,
            samples,
        })
    }

    /// Field width in samples (X axis).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field depth in samples (Z axis).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether the field covers a `width x depth` region starting at origin.
    pub fn covers(&self, width: usize, depth: usize) -> bool {
        self.width >= width && self.depth >= depth
    }

    /// Raw intensity at (x, z), bounds-checked.
    pub fn sample(&self, x: i32, z: i32) -> Result<u8, HeightFieldError> {
        if x < 0 || z < 0 || x as usize >= self.width || z as usize >= self.depth {
            return Err(HeightFieldError::OutOfBounds {
                x,
                z,
                width: self.width,
                depth: self.depth,
            });
        }
        Ok(self.samples[z as usize * self.width + x as usize])
    }

    /// Terrain height at (x, z): the raw sample quantized into [0, 15].
    pub fn terrain_height(&self, x: i32, z: i32) -> Result<u8, HeightFieldError> {
        Ok(self.sample(x, z)? / HEIGHT_DIVISOR)
    }
}
