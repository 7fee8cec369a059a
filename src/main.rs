use clap::{Arg, ArgAction, Command as ClapCommand};
use log::error;
use std::process;

use patternkit::commands::{CommandFactory, PatternkitCommandFactory};
use patternkit::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("PatternKit")
        .version("0.1")
        .about("Validate and binarize image batches for pattern-based processing")
        .arg(
            Arg::new("inputs")
                .help("Input image files, in batch order")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("binarize")
                .short('b')
                .long("binarize")
                .help("Binarize the batch into pattern strings")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("threshold")
                .short('t')
                .long("threshold")
                .help("Intensity cut-off for binarization (0-255)")
                .value_name("VALUE")
                .default_value("128")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file for pattern strings, one line per image")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    let log_file = "patternkit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("patternkit-global.log") {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = PatternkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
