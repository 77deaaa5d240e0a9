/// Command-line interface and run orchestration
pub mod cli;
/// Default parameters and fixed limits
pub mod configuration;
/// Error types and helpers
pub mod error;
/// Canvas persistence
pub mod image;
/// Progress display
pub mod progress;
