//! Synthetic height fields for deterministic generation tests.

use pennyvox_world::{HeightField, HEIGHT_DIVISOR};

/// Raw sample byte that quantizes to the given terrain height.
///
/// # Panics
/// Panics if `height` exceeds the 15 usable bands.
pub fn raw_for_height(height: u8) -> u8 {
    assert!(height <= 15, "terrain heights live in [0, 15]");
    height * HEIGHT_DIVISOR
}

/// A field of uniform intensity.
pub fn uniform_field(width: usize, depth: usize, raw: u8) -> HeightField {
    HeightField::from_raw(width, depth, vec![raw; width * depth])
        .expect("uniform fixture dimensions are valid")
}

/// A uniform field with a single overridden column at (x, z).
pub fn field_with_column(
    width: usize,
    depth: usize,
    base_raw: u8,
    x: usize,
    z: usize,
    raw: u8,
) -> HeightField {
    assert!(x < width && z < depth, "override column must lie in field");
    let mut samples = vec![base_raw; width * depth];
    samples[z * width + x] = raw;
    HeightField::from_raw(width, depth, samples).expect("fixture dimensions are valid")
}
