//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod analyze_command;
pub mod binarize_command;

pub use command_traits::{Command, CommandFactory};
pub use analyze_command::AnalyzeCommand;
pub use binarize_command::BinarizeCommand;

use clap::ArgMatches;
use crate::pattern::errors::PatternResult;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct PatternkitCommandFactory;

impl PatternkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        PatternkitCommandFactory
    }
}

impl<'a> CommandFactory<'a> for PatternkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> PatternResult<Box<dyn Command + 'a>> {
        // Determine which command to run based on args
        if args.get_flag("binarize") {
            Ok(Box::new(BinarizeCommand::new(args, logger)?))
        } else {
            // Default to analyze command
            Ok(Box::new(AnalyzeCommand::new(args, logger)?))
        }
    }
}
