//! Argument formatting conventions.
//!
//! An [`ArgumentFormatOptions`] value describes how a named argument is written
//! on the command line: the prefix that introduces the name, the short prefix used
//! for abbreviated names, and the character dividing the name from its value.
//!
//! Prefixes and separators are restricted to closed allow-lists and are validated
//! when an options value is constructed.

use std::env;
use std::fmt::{Display, Formatter};

use log::debug;
use once_cell::sync::Lazy;

use crate::config::STYLE_ENV_VAR;
use crate::error::{Error, Result};

/// Prefixes accepted in front of an argument name.
pub const ALLOWED_PREFIXES: [&str; 3] = ["--", "-", "/"];

/// Characters accepted between an argument name and its value.
pub const ALLOWED_SEPARATORS: [char; 2] = ['=', ':'];

/// Short prefix used unless one is set explicitly.
pub const DEFAULT_SHORT_PREFIX: &str = "-";

static PLATFORM: Lazy<ArgumentFormatOptions> = Lazy::new(|| {
    let env_override = env::var(STYLE_ENV_VAR).ok();
    resolve_platform_style(env_override.as_deref(), cfg!(windows))
});

/// Named argument conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArgumentStyle {
    /// GNU/POSIX style: `--name=value`.
    Posix,
    /// Windows style: `/name:value`.
    Windows,
    /// Whatever the current platform uses, see [`ArgumentFormatOptions::platform`].
    #[default]
    Platform,
}

impl ArgumentStyle {
    /// Reads a style override value.
    ///
    /// Only `posix` and `windows` are recognized (case-insensitive, no
    /// surrounding whitespace); anything else yields `None`.
    #[must_use]
    pub fn from_override(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("posix") {
            Some(Self::Posix)
        } else if value.eq_ignore_ascii_case("windows") {
            Some(Self::Windows)
        } else {
            None
        }
    }
}

/// Prefix and separator rules for named arguments.
///
/// Values are immutable; [`with_short_prefix`](Self::with_short_prefix) returns a
/// new value rather than changing the receiver.
///
/// # Examples
///
/// ```
/// use argmap_core::format_options::ArgumentFormatOptions;
///
/// let options = ArgumentFormatOptions::new("/", ':')?;
/// assert_eq!(options.prefix(), "/");
/// assert_eq!(options.value_separator(), ':');
///
/// assert!(ArgumentFormatOptions::new("##", '=').is_err());
/// # Ok::<(), argmap_core::error::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentFormatOptions {
    prefix: &'static str,
    short_prefix: &'static str,
    value_separator: char,
}

impl ArgumentFormatOptions {
    /// GNU/POSIX style: `--name=value` (long), `-n` (short).
    pub const POSIX: Self = Self {
        prefix: "--",
        short_prefix: DEFAULT_SHORT_PREFIX,
        value_separator: '=',
    };

    /// Windows style: `/name:value`.
    pub const WINDOWS: Self = Self {
        prefix: "/",
        short_prefix: DEFAULT_SHORT_PREFIX,
        value_separator: ':',
    };

    /// Creates options from a prefix and a value separator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrefix`] if `prefix` is not one of
    /// [`ALLOWED_PREFIXES`], or [`Error::InvalidSeparator`] if `value_separator` is
    /// not one of [`ALLOWED_SEPARATORS`].
    pub fn new(prefix: &str, value_separator: char) -> Result<Self> {
        let prefix = allowed_prefix(prefix)?;

        if !ALLOWED_SEPARATORS.contains(&value_separator) {
            return Err(Error::InvalidSeparator {
                separator: value_separator,
                allowed: ALLOWED_SEPARATORS
                    .iter()
                    .map(char::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }

        Ok(Self {
            prefix,
            short_prefix: DEFAULT_SHORT_PREFIX,
            value_separator,
        })
    }

    /// Returns a copy of these options with a different short prefix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrefix`] if `short_prefix` is not one of
    /// [`ALLOWED_PREFIXES`].
    pub fn with_short_prefix(self, short_prefix: &str) -> Result<Self> {
        Ok(Self {
            short_prefix: allowed_prefix(short_prefix)?,
            ..self
        })
    }

    /// The platform style, resolved once per process.
    ///
    /// The `ARGMAP_STYLE` environment variable (`posix` or `windows`) takes
    /// precedence over the detected operating system.
    #[must_use]
    pub fn platform() -> Self {
        *PLATFORM
    }

    /// Maps a style to its preset.
    #[must_use]
    pub fn for_style(style: ArgumentStyle) -> Self {
        match style {
            ArgumentStyle::Posix => Self::POSIX,
            ArgumentStyle::Windows => Self::WINDOWS,
            ArgumentStyle::Platform => Self::platform(),
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    #[must_use]
    pub fn short_prefix(&self) -> &'static str {
        self.short_prefix
    }

    #[must_use]
    pub fn value_separator(&self) -> char {
        self.value_separator
    }

    /// Every prefix a token may start with, longest first.
    ///
    /// This is the union of [`ALLOWED_PREFIXES`] and the short prefix, so `--foo`
    /// is matched by `--` before `-` gets a chance.
    #[must_use]
    pub fn candidate_prefixes(&self) -> Vec<&'static str> {
        let mut prefixes: Vec<&'static str> = ALLOWED_PREFIXES.to_vec();
        if !prefixes.contains(&self.short_prefix) {
            prefixes.push(self.short_prefix);
        }
        prefixes.sort_by(|a, b| b.len().cmp(&a.len()));
        prefixes
    }

    /// Finds the longest candidate prefix of `token`.
    ///
    /// With `require_remainder`, a prefix only matches when something follows it.
    pub(crate) fn match_prefix(&self, token: &str, require_remainder: bool) -> Option<&'static str> {
        self.candidate_prefixes()
            .into_iter()
            .find(|prefix| token.starts_with(prefix) && (!require_remainder || token.len() > prefix.len()))
    }
}

impl Default for ArgumentFormatOptions {
    fn default() -> Self {
        Self::platform()
    }
}

impl Display for ArgumentFormatOptions {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}name{}value", self.prefix, self.value_separator)
    }
}

/// Picks the platform preset.
///
/// A recognized `env_override` wins; otherwise Windows gets
/// [`ArgumentFormatOptions::WINDOWS`] and everything else
/// [`ArgumentFormatOptions::POSIX`].
#[must_use]
pub fn resolve_platform_style(env_override: Option<&str>, is_windows: bool) -> ArgumentFormatOptions {
    match env_override.and_then(ArgumentStyle::from_override) {
        Some(ArgumentStyle::Windows) => {
            debug!("Argument style overridden by {STYLE_ENV_VAR}: Windows");
            ArgumentFormatOptions::WINDOWS
        }
        Some(_) => {
            debug!("Argument style overridden by {STYLE_ENV_VAR}: Posix");
            ArgumentFormatOptions::POSIX
        }
        None if is_windows => ArgumentFormatOptions::WINDOWS,
        None => ArgumentFormatOptions::POSIX,
    }
}

fn allowed_prefix(prefix: &str) -> Result<&'static str> {
    ALLOWED_PREFIXES
        .iter()
        .copied()
        .find(|allowed| *allowed == prefix)
        .ok_or_else(|| Error::InvalidPrefix {
            prefix: prefix.to_string(),
            allowed: ALLOWED_PREFIXES.join(", "),
        })
}
