//! Threshold-based binarization
//!
//! Converts 8-bit intensity values into binary digits. The comparison
//! is inclusive at the boundary, so a value equal to the threshold
//! maps to "1".

use crate::pattern::grid::IntensityMatrix;

/// Convert one intensity value into a binary digit
///
/// # Arguments
/// * `value` - Intensity value in the 0-255 range
/// * `threshold` - Cut-off value in the 0-255 range
///
/// # Returns
/// `"1"` if `value >= threshold`, `"0"` otherwise
pub fn binarize(value: u8, threshold: u8) -> &'static str {
    if value >= threshold {
        "1"
    } else {
        "0"
    }
}

/// Binarize a whole intensity matrix into a row-major digit string
///
/// Rows are concatenated top to bottom, pixels left to right, yielding
/// the flat pattern form a pattern-matching consumer feeds on.
///
/// # Arguments
/// * `matrix` - Intensity matrix to binarize
/// * `threshold` - Cut-off value applied to every cell
///
/// # Returns
/// A string of exactly width * height binary digits
pub fn binarize_matrix(matrix: &IntensityMatrix, threshold: u8) -> String {
    let mut pattern = String::with_capacity(matrix.iter().map(Vec::len).sum());
    for row in matrix {
        for &value in row {
            pattern.push_str(binarize(value, threshold));
        }
    }
    pattern
}
