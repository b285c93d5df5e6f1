//! Format option determination.
//!
//! A style preset supplies the prefix and separator; explicit overrides replace
//! either one and are validated like any other options value.

use argmap_core::error::Result;
use argmap_core::format_options::{ArgumentFormatOptions, ArgumentStyle};
use log::debug;

/// Trait for objects that can determine the format options to parse with.
pub trait Provider {
    /// Returns the validated [`ArgumentFormatOptions`].
    ///
    /// # Errors
    ///
    /// Returns an error if any configured prefix or separator is not allowed.
    fn get_format_options(&self) -> Result<ArgumentFormatOptions>;
}

/// Determines format options from a style and optional overrides.
///
/// # Arguments
///
/// * `style` - Preset to start from
/// * `prefix` - Replaces the preset's prefix
/// * `separator` - Replaces the preset's value separator
/// * `short_prefix` - Replaces the default short prefix
///
/// # Errors
///
/// Returns [`InvalidPrefix`] or [`InvalidSeparator`] if an override is not in
/// the allowed set.
///
/// [`InvalidPrefix`]: argmap_core::error::Error::InvalidPrefix
/// [`InvalidSeparator`]: argmap_core::error::Error::InvalidSeparator
///
/// # Examples
///
/// ```rust
/// use argmap_cli::arguments::determine;
/// use argmap_core::format_options::{ArgumentFormatOptions, ArgumentStyle};
///
/// let options = determine(ArgumentStyle::Posix, None, None, None).unwrap();
/// assert_eq!(options, ArgumentFormatOptions::POSIX);
///
/// let options = determine(ArgumentStyle::Posix, Some("/"), None, None).unwrap();
/// assert_eq!(options.prefix(), "/");
/// assert_eq!(options.value_separator(), '=');
/// ```
pub fn determine(
    style: ArgumentStyle,
    prefix: Option<&str>,
    separator: Option<char>,
    short_prefix: Option<&str>,
) -> Result<ArgumentFormatOptions> {
    let preset = ArgumentFormatOptions::for_style(style);

    let options = match (prefix, separator) {
        (None, None) => preset,
        (prefix, separator) => ArgumentFormatOptions::new(
            prefix.unwrap_or(preset.prefix()),
            separator.unwrap_or(preset.value_separator()),
        )?,
    };

    let options = match short_prefix {
        Some(short_prefix) => options.with_short_prefix(short_prefix)?,
        None => options,
    };

    debug!("Parsing with {style:?} style as `{options}`");

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use argmap_core::error::Error;

    #[test]
    fn test_determine_presets() {
        assert_eq!(
            determine(ArgumentStyle::Posix, None, None, None).unwrap(),
            ArgumentFormatOptions::POSIX
        );
        assert_eq!(
            determine(ArgumentStyle::Windows, None, None, None).unwrap(),
            ArgumentFormatOptions::WINDOWS
        );
        assert_eq!(
            determine(ArgumentStyle::Platform, None, None, None).unwrap(),
            ArgumentFormatOptions::platform()
        );
    }

    #[test]
    fn test_determine_separator_override() {
        let options = determine(ArgumentStyle::Posix, None, Some(':'), None).unwrap();
        assert_eq!(options.prefix(), "--");
        assert_eq!(options.value_separator(), ':');
    }

    #[test]
    fn test_determine_short_prefix() {
        let options = determine(ArgumentStyle::Windows, None, None, Some("/")).unwrap();
        assert_eq!(options.prefix(), "/");
        assert_eq!(options.short_prefix(), "/");
    }

    #[test]
    fn test_determine_invalid_prefix() {
        let result = determine(ArgumentStyle::Posix, Some("+"), None, None);
        assert!(matches!(result, Err(Error::InvalidPrefix { .. })));
    }

    #[test]
    fn test_determine_invalid_separator() {
        let result = determine(ArgumentStyle::Windows, None, Some('#'), None);
        assert!(matches!(result, Err(Error::InvalidSeparator { .. })));
    }

    #[test]
    fn test_determine_invalid_short_prefix() {
        let result = determine(ArgumentStyle::Posix, None, None, Some("~"));
        assert!(matches!(result, Err(Error::InvalidPrefix { .. })));
    }
}
