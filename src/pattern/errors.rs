//! Custom error types for pattern preprocessing

use crate::raster::Dimensions;
use std::fmt;
use std::io;

/// Pattern preprocessing error types
#[derive(Debug)]
pub enum PatternError {
    /// A batch image whose pixels are not all channel-equal
    NonGrayscaleImage(usize),
    /// A batch image whose size differs from the first image's
    SizeMismatch {
        /// Index of the offending image in the batch
        index: usize,
        /// Dimensions of the first image in the batch
        expected: Dimensions,
        /// Dimensions of the offending image
        actual: Dimensions,
    },
    /// I/O error while reading an image file
    IoError(io::Error),
    /// Decoding error from the image codec
    DecodeError(image::ImageError),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::NonGrayscaleImage(index) => {
                write!(f, "Image #{} is not in grayscale", index)
            }
            PatternError::SizeMismatch { index, expected, actual } => {
                write!(f, "Image #{} has size {} but the batch expects {}",
                       index, actual, expected)
            }
            PatternError::IoError(e) => write!(f, "I/O error: {}", e),
            PatternError::DecodeError(e) => write!(f, "Image decoding error: {}", e),
            PatternError::GenericError(msg) => write!(f, "Pattern error: {}", msg),
        }
    }
}

impl std::error::Error for PatternError {}

impl From<io::Error> for PatternError {
    fn from(error: io::Error) -> Self {
        PatternError::IoError(error)
    }
}

impl From<image::ImageError> for PatternError {
    fn from(error: image::ImageError) -> Self {
        PatternError::DecodeError(error)
    }
}

impl From<String> for PatternError {
    fn from(msg: String) -> Self {
        PatternError::GenericError(msg)
    }
}

/// Result type for pattern preprocessing operations
pub type PatternResult<T> = Result<T, PatternError>;
