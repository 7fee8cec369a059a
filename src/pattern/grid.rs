//! Intensity matrix extraction
//!
//! Walks a verified grayscale raster row by row and collects the red
//! channel of every pixel. Equal channels are guaranteed by the
//! `GrayscaleRaster` tag, so the red channel stands in for intensity
//! without a luminance computation.

use crate::pattern::grayscale::GrayscaleRaster;
use crate::raster::Raster;

/// Row-major matrix of 8-bit intensity values
///
/// Row count equals the source height, every row length equals the
/// source width, and cell (y, x) holds the intensity at coordinate
/// (x, y) of the raster.
pub type IntensityMatrix = Vec<Vec<u8>>;

/// Extract the intensity matrix of a verified grayscale raster
///
/// Traverses rows top to bottom and columns left to right, matching
/// the raster's coordinate system.
///
/// # Arguments
/// * `verified` - A raster that passed grayscale verification
///
/// # Returns
/// A matrix whose shape exactly matches the raster's dimensions
pub fn pixel_grid<R: Raster>(verified: &GrayscaleRaster<'_, R>) -> IntensityMatrix {
    let raster = verified.raster();
    let (width, height) = (raster.width(), raster.height());

    let mut matrix = Vec::with_capacity(height as usize);
    for y in 0..height {
        let mut row = Vec::with_capacity(width as usize);
        for x in 0..width {
            let (red, _, _, _) = raster.rgba_at(x, y);
            row.push(red);
        }
        matrix.push(row);
    }
    matrix
}
