//! Format option resolution and argument processing for the argmap CLI.
//!
//! This module turns the binary's own flags into [`ArgumentFormatOptions`]
//! and parses the trailing arguments with them:
//! - **Style presets**: `--style posix|windows|platform`
//! - **Overrides**: explicit `--prefix`, `--separator` and `--short-prefix`
//! - **Declarations**: an optional YAML file restricting the accepted names
//!
//! [`ArgumentFormatOptions`]: argmap_core::format_options::ArgumentFormatOptions

// Export public items from submodules
pub mod processing;
pub mod style;

// Re-exports for convenience
pub use processing::{load_declarations, process_command_line};
pub use style::determine;
pub use style::Provider;
