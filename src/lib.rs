pub mod io;
pub mod raster;
pub mod pattern;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::PatternKit;

pub use raster::{dimensions, Dimensions, Raster};
pub use pattern::{
    binarize, binarize_matrix, check_batch, is_grayscale, pixel_grid,
    GrayscaleRaster, IntensityMatrix, PatternError, PatternResult,
};
