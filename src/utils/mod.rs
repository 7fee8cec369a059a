//! Shared utilities
//!
//! Logging and progress reporting helpers used by the facade and the
//! CLI commands.

pub mod logger;
pub mod progress;

pub use logger::Logger;
pub use progress::ProgressTracker;
