//! Batch validation
//!
//! Gates a collection of rasters before extraction: every image must
//! be grayscale and all images must share one size. Checks run in that
//! order and stop at the first offender, so diagnostics always name a
//! concrete image.

use log::debug;

use crate::pattern::errors::{PatternError, PatternResult};
use crate::pattern::grayscale::is_grayscale;
use crate::raster::{dimensions, Raster};

/// Validate a batch of rasters for pattern extraction
///
/// Applies the grayscale check to every raster first, then compares
/// every raster's dimensions against the first raster's. An empty
/// batch is trivially valid.
///
/// # Arguments
/// * `rasters` - The batch, in caller order
///
/// # Returns
/// Ok if the whole batch is consistent, otherwise the first failure:
/// `NonGrayscaleImage` with the offending index, or `SizeMismatch`
/// with the offending index and both sizes
pub fn check_batch<R: Raster>(rasters: &[R]) -> PatternResult<()> {
    for (index, raster) in rasters.iter().enumerate() {
        if !is_grayscale(raster) {
            return Err(PatternError::NonGrayscaleImage(index));
        }
    }

    let first = match rasters.first() {
        Some(raster) => raster,
        None => return Ok(()),
    };

    let expected = dimensions(first);
    debug!("Batch reference size: {}", expected);

    for (index, raster) in rasters.iter().enumerate().skip(1) {
        let actual = dimensions(raster);
        if actual != expected {
            return Err(PatternError::SizeMismatch { index, expected, actual });
        }
    }

    Ok(())
}
