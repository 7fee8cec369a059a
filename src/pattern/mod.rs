//! Core pattern preprocessing
//!
//! Grayscale classification, batch validation, intensity matrix
//! extraction and threshold binarization. Everything here is a pure
//! function over caller-supplied rasters; there is no session state.

pub mod errors;
pub mod grayscale;
pub mod grid;
pub mod threshold;
pub mod validator;

pub use errors::{PatternError, PatternResult};
pub use grayscale::{is_grayscale, GrayscaleRaster};
pub use grid::{pixel_grid, IntensityMatrix};
pub use threshold::{binarize, binarize_matrix};
pub use validator::check_batch;
