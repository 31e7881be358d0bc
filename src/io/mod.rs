/// JSON catalog loading
pub mod catalog;
/// Command-line interface and batch runner
pub mod cli;
/// Default values and generation parameters
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Placement collaborator trait and built-in placers
pub mod placement;
/// Progress display for batch runs
pub mod progress;
