//! Batch binarization command
//!
//! This module implements the command that turns a validated batch of
//! grayscale images into flat binary pattern strings, one per image.

use std::fs::File;
use std::io::Write;

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::io::loader;
use crate::pattern::errors::{PatternError, PatternResult};
use crate::pattern::grayscale::GrayscaleRaster;
use crate::pattern::grid::pixel_grid;
use crate::pattern::threshold::binarize_matrix;
use crate::pattern::validator::check_batch;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Command for binarizing a batch of images into pattern strings
pub struct BinarizeCommand<'a> {
    /// Paths to the input files, in batch order
    input_files: Vec<String>,
    /// Cut-off intensity for binarization
    threshold: u8,
    /// Optional output file for the pattern strings
    output_file: Option<String>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> BinarizeCommand<'a> {
    /// Create a new binarize command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new BinarizeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> PatternResult<Self> {
        let input_files: Vec<String> = args.get_many::<String>("inputs")
            .ok_or_else(|| PatternError::GenericError("Missing input files".to_string()))?
            .cloned()
            .collect();

        let threshold = args.get_one::<String>("threshold")
            .map(|s| s.parse::<u8>())
            .transpose()
            .map_err(|e| PatternError::GenericError(
                format!("Invalid threshold value: {}", e)))?
            .unwrap_or(128);

        let output_file = args.get_one::<String>("output").cloned();

        Ok(BinarizeCommand {
            input_files,
            threshold,
            output_file,
            logger,
        })
    }

    /// Write pattern strings to the output target
    ///
    /// Patterns go to the output file when one was given, one line per
    /// image, otherwise to the log.
    fn write_patterns(&self, patterns: &[String]) -> PatternResult<()> {
        match &self.output_file {
            Some(path) => {
                let mut file = File::create(path)?;
                for pattern in patterns {
                    writeln!(file, "{}", pattern)?;
                }
                info!("Wrote {} pattern(s) to {}", patterns.len(), path);
            }
            None => {
                for (index, pattern) in patterns.iter().enumerate() {
                    self.logger.log(&format!("{}: {}", self.input_files[index], pattern))?;
                }
            }
        }
        Ok(())
    }
}

impl<'a> Command for BinarizeCommand<'a> {
    fn execute(&self) -> PatternResult<()> {
        debug!("Binarizing {} input file(s) with threshold {}",
               self.input_files.len(), self.threshold);

        let images = loader::load_images(&self.input_files)?;

        // The batch must be consistent before any extraction happens
        check_batch(&images)?;

        let progress = ProgressTracker::new(images.len() as u64, "Binarizing images");
        let mut patterns = Vec::with_capacity(images.len());

        for (index, img) in images.iter().enumerate() {
            progress.set_message(&self.input_files[index]);

            // check_batch already proved every image grayscale
            let verified = GrayscaleRaster::verify_at(img, index)?;
            let matrix = pixel_grid(&verified);
            patterns.push(binarize_matrix(&matrix, self.threshold));

            progress.increment(1);
        }
        progress.finish();

        self.write_patterns(&patterns)
    }
}
