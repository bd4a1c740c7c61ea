/// Command-line interface and interactive session
pub mod cli;
/// Map constants and rendering defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Box-drawing rendering of cells and maps
pub mod render;
