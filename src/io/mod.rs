//! Input/output operations for grids, solutions and the command line

/// Command-line interface and batch file processing
pub mod cli;
/// Solver constants and runtime configuration defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// PNG grid loading and solution export
pub mod image;
/// Batch progress display
pub mod progress;
/// Plain-text grid parsing and solution rendering
pub mod text;
