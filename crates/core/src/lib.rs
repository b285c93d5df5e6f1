//! Argmap Core Library
//!
//! This crate parses command-line arguments written in configurable conventions:
//! POSIX `--name=value`, Windows `/name:value`, or any allowed prefix/separator
//! pair. The result is a validated name/value map with a parse status and a
//! diagnostic message.
//!
//! # Key Features
//!
//! - **Format Options**: Validated prefix and separator rules with Posix, Windows
//!   and platform presets (overridable with `ARGMAP_STYLE`)
//! - **Declarations**: Declare valid arguments in code or in a YAML file, or derive
//!   them from the input itself
//! - **Best-Effort Parsing**: A bad token marks the parse as failed without
//!   discarding the arguments that did parse
//! - **Error Handling**: Post-parse assertions for required arguments and values
//!
//! # Examples
//!
//! ```
//! use argmap_core::argument_info::ArgumentInfo;
//! use argmap_core::format_options::ArgumentFormatOptions;
//! use argmap_core::parsed_arguments::{ArgumentParseStatus, ParsedArguments};
//!
//! let parsed = ParsedArguments::parse(
//!     &ArgumentFormatOptions::POSIX,
//!     &["--host=localhost", "--verbose"],
//!     &[ArgumentInfo::new("host", false), ArgumentInfo::new("verbose", true)],
//! );
//!
//! assert_eq!(parsed.status(), ArgumentParseStatus::Success);
//! parsed.ensure_argument_value("host", None)?;
//! # Ok::<(), argmap_core::error::Error>(())
//! ```

pub mod argument_info;
pub mod config;
pub mod error;
pub mod file_handling;
pub mod format_options;
pub mod parsed_arguments;
pub mod parser;
