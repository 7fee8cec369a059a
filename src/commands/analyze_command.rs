//! Batch analysis command
//!
//! This module implements the default CLI command: analyze each input
//! image and report whether the inputs form a valid pattern batch.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::io::loader;
use crate::pattern::errors::{PatternError, PatternResult};
use crate::pattern::grayscale::is_grayscale;
use crate::pattern::validator::check_batch;
use crate::raster::dimensions;
use crate::utils::logger::Logger;

/// Command for analyzing and validating a batch of images
pub struct AnalyzeCommand<'a> {
    /// Paths to the input files, in batch order
    input_files: Vec<String>,
    /// Whether to enable verbose output
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> AnalyzeCommand<'a> {
    /// Create a new analyze command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new AnalyzeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> PatternResult<Self> {
        let input_files: Vec<String> = args.get_many::<String>("inputs")
            .ok_or_else(|| PatternError::GenericError("Missing input files".to_string()))?
            .cloned()
            .collect();

        let verbose = args.get_flag("verbose");

        Ok(AnalyzeCommand {
            input_files,
            verbose,
            logger,
        })
    }

    /// Display per-image information
    ///
    /// Shows each image's dimensions and grayscale classification.
    fn display_image_summaries(&self, images: &[image::DynamicImage]) {
        for (index, img) in images.iter().enumerate() {
            info!("Image #{}: {}", index, self.input_files[index]);
            info!("  Dimensions: {}", dimensions(img));
            info!("  Grayscale: {}", if is_grayscale(img) { "yes" } else { "no" });
        }
    }
}

impl<'a> Command for AnalyzeCommand<'a> {
    fn execute(&self) -> PatternResult<()> {
        debug!("Analyzing {} input file(s)", self.input_files.len());
        self.logger.log(&format!("Analyze: {:?}", self.input_files))?;

        let images = loader::load_images(&self.input_files)?;

        if self.verbose {
            self.display_image_summaries(&images);
        }

        check_batch(&images)?;
        info!("Batch of {} image(s) is valid for pattern extraction", images.len());
        Ok(())
    }
}
