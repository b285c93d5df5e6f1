//! Command-line argument parsing for the `argmap` binary itself.
//!
//! The binary's own flags are handled with `clap`; everything after `--` is
//! handed to the argmap parser.

use crate::arguments::{determine, Provider};
use argmap_core::error::Result;
use argmap_core::format_options::{ArgumentFormatOptions, ArgumentStyle};
use clap::{Parser, ValueEnum};

/// Argument convention selectable with `--style`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StyleChoice {
    /// `--name=value`
    Posix,
    /// `/name:value`
    Windows,
    /// Detected from the OS, or `ARGMAP_STYLE`
    #[default]
    Platform,
}

impl From<StyleChoice> for ArgumentStyle {
    fn from(value: StyleChoice) -> Self {
        match value {
            StyleChoice::Posix => ArgumentStyle::Posix,
            StyleChoice::Windows => ArgumentStyle::Windows,
            StyleChoice::Platform => ArgumentStyle::Platform,
        }
    }
}

/// How the parse result is printed.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Yaml,
}

/// Command-line arguments for the argmap CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use argmap_cli::cli_args::Args;
///
/// let args = Args::parse_from(["argmap", "--style", "windows", "--", "/name:value"]);
/// assert_eq!(args.arguments, ["/name:value"]);
/// ```
#[derive(Parser, Debug)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Argument convention to parse with.
    #[arg(long, short = 's', value_enum, default_value_t = StyleChoice::Platform)]
    pub style: StyleChoice,

    /// Prefix introducing argument names, overriding the style's prefix.
    ///
    /// One of `--`, `-` or `/`.
    #[arg(long, short = 'p', allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Separator between name and value, overriding the style's separator.
    ///
    /// One of `=` or `:`.
    #[arg(long = "separator", short = 'S')]
    pub separator: Option<char>,

    /// Prefix for abbreviated names. Defaults to `-`.
    #[arg(long, allow_hyphen_values = true)]
    pub short_prefix: Option<String>,

    /// Only accept arguments declared in a YAML declarations file.
    ///
    /// Without a path, `~/.argmap/arguments.yml` is used. Without this flag,
    /// every name appearing in the arguments is accepted.
    #[arg(long, short = 'd')]
    #[allow(clippy::option_option)]
    pub declarations: Option<Option<String>>,

    /// Output format for the parse report.
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Run the built-in switches matching the parsed argument names.
    #[arg(long, short = 'r', action)]
    pub run: bool,

    /// Arguments to parse, given after `--`.
    ///
    /// # Examples
    /// ```bash
    /// argmap --style posix -- --host=localhost --verbose
    /// ```
    #[arg(last = true)]
    pub arguments: Vec<String>,
}

impl Provider for Args {
    /// Builds the format options from `--style` and the explicit overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an override is not in the allowed set.
    fn get_format_options(&self) -> Result<ArgumentFormatOptions> {
        determine(
            self.style.into(),
            self.prefix.as_deref(),
            self.separator,
            self.short_prefix.as_deref(),
        )
    }
}
