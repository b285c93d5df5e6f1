//! Argmap CLI Library
//!
//! This crate provides the `argmap` command-line tool, which parses arguments
//! written in a chosen convention with `argmap-core`, reports the result, and can
//! run registered switches named by the parsed arguments.
//!
//! # Architecture
//!
//! - [`cli_args`]: The tool's own flags, parsed with `clap`
//! - [`arguments`]: Format option resolution and parsing of the trailing arguments
//! - [`switches`]: Registration table and dispatch of named switches
//! - [`report`]: Text and YAML rendering of a parse
//!
//! # Examples
//!
//! ```bash
//! # Parse with the platform convention
//! argmap -- --host=localhost --verbose
//!
//! # Windows convention, YAML output
//! argmap --style windows --format yaml -- /host:localhost /verbose
//!
//! # Only accept names declared in ~/.argmap/arguments.yml
//! argmap --declarations -- --host=localhost
//!
//! # Run the `echo` switch
//! argmap --run -- --echo=hello
//! ```

pub mod arguments;
pub mod cli_args;
pub mod report;
pub mod switches;
