//! Grayscale classification
//!
//! An image counts as grayscale when every pixel carries equal red,
//! green and blue channel values; alpha plays no part. Classification
//! is a pure function of the pixel content at call time and is never
//! cached.

use crate::pattern::errors::{PatternError, PatternResult};
use crate::raster::Raster;

/// Check whether a raster is grayscale
///
/// Scans every coordinate within the declared bounds and returns false
/// as soon as one pixel's red, green and blue values diverge. A raster
/// without pixels trivially passes.
///
/// # Arguments
/// * `raster` - The raster to classify
///
/// # Returns
/// `true` if every pixel has equal red, green and blue channels
pub fn is_grayscale<R: Raster>(raster: &R) -> bool {
    for y in 0..raster.height() {
        for x in 0..raster.width() {
            let (red, green, blue, _alpha) = raster.rgba_at(x, y);
            if red != green || green != blue {
                return false;
            }
        }
    }
    true
}

/// A raster verified to be grayscale
///
/// Produced only by a successful classification scan, this tag is what
/// makes the red-channel-as-intensity shortcut in the grid extractor
/// sound: equal channels are guaranteed by construction rather than by
/// caller discipline.
pub struct GrayscaleRaster<'a, R: Raster> {
    raster: &'a R,
}

impl<'a, R: Raster> GrayscaleRaster<'a, R> {
    /// Verify a raster and wrap it on success
    ///
    /// # Arguments
    /// * `raster` - The raster to verify
    ///
    /// # Returns
    /// The wrapped raster, or `NonGrayscaleImage` if any pixel has
    /// diverging channels (reported at batch index 0 for a lone raster)
    pub fn verify(raster: &'a R) -> PatternResult<Self> {
        Self::verify_at(raster, 0)
    }

    /// Verify a raster sitting at a known batch position
    ///
    /// Same scan as `verify`, but failures carry the given index so the
    /// batch validator can point at the offending image.
    pub fn verify_at(raster: &'a R, index: usize) -> PatternResult<Self> {
        if is_grayscale(raster) {
            Ok(GrayscaleRaster { raster })
        } else {
            Err(PatternError::NonGrayscaleImage(index))
        }
    }

    /// Access the underlying raster
    pub fn raster(&self) -> &R {
        self.raster
    }
}
