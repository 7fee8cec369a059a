//! File loading glue around the image codec

pub mod loader;

pub use loader::{load_image, load_images};
