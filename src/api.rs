use log::info;

use crate::io::loader;
use crate::pattern::errors::PatternResult;
use crate::pattern::grayscale::{is_grayscale, GrayscaleRaster};
use crate::pattern::grid::pixel_grid;
use crate::pattern::threshold::binarize_matrix;
use crate::pattern::validator::check_batch;
use crate::raster::dimensions;
use crate::utils::logger::Logger;

/// Main interface to the PatternKit library
pub struct PatternKit {
    logger: Logger,
}

impl PatternKit {
    /// Create a new PatternKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "patternkit.log"
    ///
    /// # Returns
    /// A PatternKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> PatternResult<Self> {
        let log_path = log_file.unwrap_or("patternkit.log");
        let logger = Logger::new(log_path)?;
        Ok(PatternKit { logger })
    }

    /// Analyze an image file and return information about it
    ///
    /// Reports the image's dimensions and whether it qualifies as
    /// grayscale, without judging it against a batch.
    ///
    /// # Arguments
    /// * `input_path` - Path to the image file to analyze
    ///
    /// # Returns
    /// String containing analysis information or an error
    pub fn analyze(&self, input_path: &str) -> PatternResult<String> {
        let img = loader::load_image(input_path)?;

        let dims = dimensions(&img);
        let grayscale = is_grayscale(&img);

        let mut result = format!("Image Analysis Results: {}\n", input_path);
        result.push_str(&format!("  Dimensions: {}\n", dims));
        result.push_str(&format!("  Grayscale: {}\n", if grayscale { "yes" } else { "no" }));

        self.logger.log(&result)?;
        Ok(result)
    }

    /// Validate a batch of image files for pattern extraction
    ///
    /// Loads every file and checks the batch for the grayscale-only
    /// and uniform-size constraints, in that order.
    ///
    /// # Arguments
    /// * `input_paths` - Paths to the image files, in batch order
    ///
    /// # Returns
    /// Ok when the whole batch is consistent, otherwise the first
    /// validation failure
    pub fn validate(&self, input_paths: &[String]) -> PatternResult<()> {
        info!("Validating batch of {} image(s)", input_paths.len());
        let images = loader::load_images(input_paths)?;
        check_batch(&images)?;
        info!("Batch is valid");
        Ok(())
    }

    /// Binarize one image file into a pattern string
    ///
    /// Verifies the image is grayscale, extracts its intensity matrix
    /// and thresholds every cell into a binary digit, concatenated in
    /// row-major order.
    ///
    /// # Arguments
    /// * `input_path` - Path to the image file
    /// * `threshold` - Cut-off intensity; values at or above it map to "1"
    ///
    /// # Returns
    /// The flat digit string, or an error if the file cannot be loaded
    /// or is not grayscale
    pub fn binarize(&self, input_path: &str, threshold: u8) -> PatternResult<String> {
        let img = loader::load_image(input_path)?;

        let verified = GrayscaleRaster::verify(&img)?;
        let matrix = pixel_grid(&verified);
        let pattern = binarize_matrix(&matrix, threshold);

        info!("Binarized {} ({} digits, threshold {})",
              input_path, pattern.len(), threshold);
        Ok(pattern)
    }
}
