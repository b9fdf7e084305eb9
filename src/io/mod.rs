//! Documents, images, terminal interaction and error handling

/// Command-line arguments and the batch renderer
pub mod cli;
/// Tolerances, defaults and limits
pub mod configuration;
/// Error type shared by the crate
pub mod error;
/// JSON and YAML formula documents
pub mod format;
/// Colour sampling from the source image and PNG export
pub mod image;
/// Progress bars for batch renders
pub mod progress;
