//! Image file loading
//!
//! Thin glue over the image crate: opens files, decodes them into
//! in-memory rasters and maps failures into the crate error type. The
//! core itself never touches the filesystem.

use image::DynamicImage;
use log::debug;

use crate::pattern::errors::PatternResult;

/// Load and decode a single image file
///
/// Format detection is left to the image crate, which inspects both
/// the file extension and the content.
///
/// # Arguments
/// * `path` - Path to the image file
///
/// # Returns
/// The decoded image, or a `DecodeError`/`IoError` describing what
/// went wrong
pub fn load_image(path: &str) -> PatternResult<DynamicImage> {
    debug!("Loading image: {}", path);
    let img = image::open(path)?;
    Ok(img)
}

/// Load and decode a list of image files, preserving order
///
/// Stops at the first file that fails to load.
///
/// # Arguments
/// * `paths` - Paths to the image files, in batch order
pub fn load_images(paths: &[String]) -> PatternResult<Vec<DynamicImage>> {
    let mut images = Vec::with_capacity(paths.len());
    for path in paths {
        images.push(load_image(path)?);
    }
    Ok(images)
}
