//! Parsing raw argument tokens into a validated name/value map.
//!
//! [`ParsedArguments::parse`] is total over its input: malformed tokens, unknown
//! names and missing values never abort the parse. They set the status to
//! [`ArgumentParseStatus::Error`] and overwrite the message, and the scan carries
//! on with the remaining tokens. Only the explicit `ensure_*` assertions return
//! errors.

use std::env;
use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use log::debug;
use once_cell::sync::Lazy;

use crate::argument_info::{ArgumentInfo, ArgumentInfoHash};
use crate::error::{Error, Result};
use crate::format_options::ArgumentFormatOptions;

const NO_ARGUMENTS: &str = "No arguments";
const REQUIRED_ARGUMENT: &str = "Required argument not specified";
const REQUIRED_ARGUMENT_VALUE: &str = "Required argument value not specified";

static CURRENT: Lazy<ParsedArguments> = Lazy::new(|| {
    let args: Vec<String> = env::args().skip(1).collect();
    ParsedArguments::from_args(&ArgumentFormatOptions::default(), &args)
});

/// Outcome of a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArgumentParseStatus {
    /// Not yet parsed. A finished parse never reports this.
    #[default]
    Invalid,
    Success,
    Error,
}

impl Display for ArgumentParseStatus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            Self::Invalid => "Invalid",
            Self::Success => "Success",
            Self::Error => "Error",
        };
        formatter.write_str(status)
    }
}

/// Read/write view over parsed arguments.
///
/// This is the surface consumers such as switch dispatch work against.
pub trait Arguments {
    /// The value recorded for `name`. An empty string means the argument was
    /// present without a value.
    fn get(&self, name: &str) -> Option<&str>;

    fn set(&mut self, name: &str, value: String);

    fn keys(&self) -> Vec<&str>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn message(&self) -> Option<&str>;

    fn set_message(&mut self, message: String);

    fn original_strings(&self) -> &[String];

    fn status(&self) -> ArgumentParseStatus;

    fn set_status(&mut self, status: ArgumentParseStatus);

    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// Named values parsed from a command line.
///
/// A parse always looks at every token. Any unrecognized token, undeclared
/// `name=value` or declared name missing its required value sets the status to
/// [`ArgumentParseStatus::Error`], and `message` holds the most recent failure.
/// Otherwise the status is [`ArgumentParseStatus::Success`]; an empty input
/// also succeeds, with the message `No arguments`.
#[derive(Debug, Clone, Default)]
pub struct ParsedArguments {
    original_strings: Vec<String>,
    arguments: IndexMap<String, String>,
    status: ArgumentParseStatus,
    message: Option<String>,
}

impl ParsedArguments {
    /// Parses `args` against the declared `valid_arguments`.
    ///
    /// # Examples
    ///
    /// ```
    /// use argmap_core::argument_info::ArgumentInfo;
    /// use argmap_core::format_options::ArgumentFormatOptions;
    /// use argmap_core::parsed_arguments::{ArgumentParseStatus, ParsedArguments};
    ///
    /// let parsed = ParsedArguments::parse(
    ///     &ArgumentFormatOptions::POSIX,
    ///     &["--url=http://x=y", "--verbose"],
    ///     &[ArgumentInfo::new("url", false), ArgumentInfo::new("verbose", true)],
    /// );
    ///
    /// assert_eq!(parsed.status(), ArgumentParseStatus::Success);
    /// assert_eq!(parsed.get("url"), Some("http://x=y"));
    /// assert_eq!(parsed.get("verbose"), Some(""));
    /// ```
    pub fn parse<S: AsRef<str>>(
        options: &ArgumentFormatOptions,
        args: &[S],
        valid_arguments: &[ArgumentInfo],
    ) -> Self {
        let mut parsed = Self {
            original_strings: args.iter().map(|arg| arg.as_ref().to_string()).collect(),
            ..Self::default()
        };

        if args.is_empty() {
            parsed.status = ArgumentParseStatus::Success;
            parsed.message = Some(NO_ARGUMENTS.to_string());
            return parsed;
        }

        let valid_arguments = ArgumentInfoHash::new(valid_arguments);
        let separator = options.value_separator();

        for arg in args {
            let arg = arg.as_ref().trim();

            let Some(prefix) = options.match_prefix(arg, true) else {
                let message = format!(
                    "Unrecognized argument format: {arg}\n\nAll Args:\n{}",
                    parsed.original_strings.join("\n")
                );
                parsed.fail(message);
                continue;
            };

            let remainder = &arg[prefix.len()..];
            let fragments: Vec<&str> = remainder
                .split(separator)
                .filter(|fragment| !fragment.is_empty())
                .collect();

            match fragments.as_slice() {
                [] => debug!("Ignoring `{arg}`: no name after the prefix"),
                [name] => parsed.record_flag(&valid_arguments, name),
                [name, value] => parsed.record_value(&valid_arguments, name, value),
                // The value itself contains the separator, keep everything after the first one
                [name, ..] => {
                    let value = remainder
                        .split_once(separator)
                        .map_or("", |(_, value)| value);
                    parsed.record_value(&valid_arguments, name, value);
                }
            }
        }

        if parsed.status != ArgumentParseStatus::Error {
            parsed.status = ArgumentParseStatus::Success;
        }

        parsed
    }

    /// Parses with the platform default options.
    pub fn with_declarations<S: AsRef<str>>(args: &[S], valid_arguments: &[ArgumentInfo]) -> Self {
        Self::parse(&ArgumentFormatOptions::default(), args, valid_arguments)
    }

    /// Parses with the platform default options, declaring `valid_names` as
    /// arguments that require a value.
    pub fn from_names<S: AsRef<str>, N: AsRef<str>>(args: &[S], valid_names: &[N]) -> Self {
        Self::with_declarations(args, &ArgumentInfo::from_names(valid_names))
    }

    /// Parses `args`, treating every name that appears in them as declared.
    pub fn from_args<S: AsRef<str>>(options: &ArgumentFormatOptions, args: &[S]) -> Self {
        Self::parse(options, args, &ArgumentInfo::from_args(options, args, true))
    }

    /// The process arguments (without the program name), parsed once with the
    /// platform default options.
    pub fn current() -> &'static Self {
        &CURRENT
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).map(String::as_str)
    }

    /// Records or replaces a value after parsing.
    pub fn set(&mut self, name: &str, value: String) {
        self.arguments.insert(name.to_string(), value);
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.arguments.contains_key(name)
    }

    /// Parsed names, in the order they were first recorded.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.arguments.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    #[must_use]
    pub fn status(&self) -> ArgumentParseStatus {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn original_strings(&self) -> &[String] {
        &self.original_strings
    }

    /// Iterates parsed name/value pairs in recording order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.arguments
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Fails unless `name` was parsed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingArgument`] carrying `message`, or a default message
    /// when `None`.
    pub fn ensure_argument(&self, name: &str, message: Option<&str>) -> Result<()> {
        if self.contains(name) {
            return Ok(());
        }

        Err(Error::missing_argument(
            name,
            message.unwrap_or(REQUIRED_ARGUMENT),
        ))
    }

    /// Fails unless `name` was parsed with a non-empty value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingArgument`] if the argument is absent, or
    /// [`Error::MissingArgumentValue`] carrying `message` if it has no value.
    pub fn ensure_argument_value(&self, name: &str, message: Option<&str>) -> Result<()> {
        self.ensure_argument(name, None)?;

        match self.get(name) {
            Some(value) if !value.is_empty() => Ok(()),
            _ => Err(Error::missing_argument_value(
                name,
                message.unwrap_or(REQUIRED_ARGUMENT_VALUE),
            )),
        }
    }

    /// Converts an unsuccessful parse into an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parsing`] with the parse message unless the status is
    /// [`ArgumentParseStatus::Success`].
    pub fn into_result(self) -> Result<Self> {
        if self.status == ArgumentParseStatus::Success {
            return Ok(self);
        }

        let message = self
            .message
            .unwrap_or_else(|| format!("Argument parse status: {}", self.status));
        Err(Error::Parsing { message })
    }

    fn record_flag(&mut self, valid_arguments: &ArgumentInfoHash, name: &str) {
        // Undeclared bare flags are skipped without an error
        let Some(info) = valid_arguments.get(name) else {
            debug!("Ignoring undeclared flag `{name}`");
            return;
        };

        if info.allow_null_value {
            self.arguments.insert(name.to_string(), String::new());
        } else {
            self.fail(format!("No value specified for {name}"));
        }
    }

    fn record_value(&mut self, valid_arguments: &ArgumentInfoHash, name: &str, value: &str) {
        if !valid_arguments.contains(name) {
            self.fail(format!("Invalid argument name specified: {name}"));
            return;
        }

        self.arguments.insert(name.to_string(), value.to_string());
    }

    fn fail(&mut self, message: String) {
        debug!("{message}");
        self.message = Some(message);
        self.status = ArgumentParseStatus::Error;
    }
}

impl Arguments for ParsedArguments {
    fn get(&self, name: &str) -> Option<&str> {
        ParsedArguments::get(self, name)
    }

    fn set(&mut self, name: &str, value: String) {
        ParsedArguments::set(self, name, value);
    }

    fn keys(&self) -> Vec<&str> {
        ParsedArguments::keys(self)
    }

    fn len(&self) -> usize {
        ParsedArguments::len(self)
    }

    fn message(&self) -> Option<&str> {
        ParsedArguments::message(self)
    }

    fn set_message(&mut self, message: String) {
        self.message = Some(message);
    }

    fn original_strings(&self) -> &[String] {
        ParsedArguments::original_strings(self)
    }

    fn status(&self) -> ArgumentParseStatus {
        self.status
    }

    fn set_status(&mut self, status: ArgumentParseStatus) {
        self.status = status;
    }
}
