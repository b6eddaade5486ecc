/// Command-line parsing and run orchestration
pub mod cli;
/// Compiled-in field parameters and process constants
pub mod configuration;
/// Error types and exit codes
pub mod error;
/// Text matrix serialization
pub mod matrix;
/// Row progress display
pub mod progress;
