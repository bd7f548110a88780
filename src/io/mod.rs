//! Input/output, configuration and error handling

/// Command-line front end
pub mod cli;
/// Defaults, constants and runtime parameters
pub mod configuration;
/// Explicit diagnostics channel
pub mod diagnostics;
/// Error types
pub mod error;
/// Image decoding and PNG export
pub mod image;
/// Terminal progress display
pub mod progress;
