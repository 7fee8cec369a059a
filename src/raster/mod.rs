//! Raster abstraction over decoded images
//!
//! This module defines the narrow capability interface the core works
//! against: anything exposing integer bounds and per-coordinate 8-bit
//! channel reads counts as a raster. Decoded buffers from the image
//! crate satisfy it out of the box.

use image::{GenericImageView, Pixel};
use std::fmt;

/// Capability interface for a decoded in-memory image
///
/// The core never mutates or retains a raster; it only reads the
/// declared bounds and individual pixel channels. Channel values are
/// normalized to the 8-bit scale regardless of the source bit depth.
pub trait Raster {
    /// Width of the raster in pixels
    fn width(&self) -> u32;

    /// Height of the raster in pixels
    fn height(&self) -> u32;

    /// Red, green, blue and alpha channel values at a coordinate
    ///
    /// # Arguments
    /// * `x` - Column, counted from the left edge
    /// * `y` - Row, counted from the top edge
    ///
    /// Coordinates must lie within the declared bounds; behaviour
    /// outside them follows the underlying buffer.
    fn rgba_at(&self, x: u32, y: u32) -> (u8, u8, u8, u8);
}

// Any image-crate view with 8-bit subpixels is a raster. This covers
// DynamicImage as well as the concrete buffer types (RgbImage,
// RgbaImage, GrayImage).
impl<I> Raster for I
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn rgba_at(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let pixel = self.get_pixel(x, y).to_rgba();
        (pixel[0], pixel[1], pixel[2], pixel[3])
    }
}

/// Image dimensions in pixels
///
/// An ordered (width, height) pair read from a raster's declared
/// bounds. The upstream decoder never produces zero-sized images, so
/// both components are at least 1 in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,
}

impl Dimensions {
    /// Create a new dimensions pair
    pub fn new(width: u32, height: u32) -> Self {
        Dimensions { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Read the dimensions of a raster
///
/// # Arguments
/// * `raster` - The raster to measure
///
/// # Returns
/// The (width, height) pair exactly as declared by the raster
pub fn dimensions<R: Raster>(raster: &R) -> Dimensions {
    Dimensions::new(raster.width(), raster.height())
}
