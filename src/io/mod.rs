/// Command-line parsing and render orchestration
pub mod cli;
/// Hex color parsing
pub mod color;
/// Reference parameters and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export
pub mod image;
/// Progress display
pub mod progress;
