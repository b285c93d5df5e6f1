//! Declarations of valid arguments.
//!
//! An [`ArgumentInfo`] says "this argument name is acceptable" and whether the
//! argument may appear without a value. Declarations are either written by the
//! caller, loaded from a file, or derived from the raw tokens themselves with
//! [`ArgumentInfo::from_args`].

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::format_options::ArgumentFormatOptions;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ArgumentInfo {
    pub name: String,
    #[serde(default)]
    pub allow_null_value: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_example: Option<String>,
}

impl ArgumentInfo {
    pub fn new(name: impl Into<String>, allow_null_value: bool) -> Self {
        Self {
            name: name.into(),
            allow_null_value,
            description: None,
            value_example: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_value_example(mut self, value_example: impl Into<String>) -> Self {
        self.value_example = Some(value_example.into());
        self
    }

    /// One declaration per name, none of which accept a missing value.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Vec<Self> {
        Self::from_names_allowing(names, false)
    }

    /// One declaration per name, all sharing the same `allow_null_value`.
    pub fn from_names_allowing<S: AsRef<str>>(names: &[S], allow_null_value: bool) -> Vec<Self> {
        names
            .iter()
            .map(|name| Self::new(name.as_ref(), allow_null_value))
            .collect()
    }

    /// Derives declarations from raw argument tokens.
    ///
    /// Each token is matched against the longest candidate prefix of `options`; the
    /// name is whatever follows the prefix up to the first value separator. Tokens
    /// without a recognized prefix are logged and left out.
    ///
    /// # Examples
    ///
    /// ```
    /// use argmap_core::argument_info::ArgumentInfo;
    /// use argmap_core::format_options::ArgumentFormatOptions;
    ///
    /// let infos = ArgumentInfo::from_args(
    ///     &ArgumentFormatOptions::POSIX,
    ///     &["--name=value", "--flag", "stray"],
    ///     true,
    /// );
    /// let names: Vec<&str> = infos.iter().map(|info| info.name.as_str()).collect();
    /// assert_eq!(names, ["name", "flag"]);
    /// ```
    pub fn from_args<S: AsRef<str>>(
        options: &ArgumentFormatOptions,
        args: &[S],
        allow_null_value: bool,
    ) -> Vec<Self> {
        let mut infos = Vec::with_capacity(args.len());

        for arg in args {
            let arg = arg.as_ref();
            let Some(prefix) = options.match_prefix(arg, false) else {
                warn!("Unrecognized argument: {arg}");
                continue;
            };

            let remainder = &arg[prefix.len()..];
            let name = match remainder.split_once(options.value_separator()) {
                Some((name, _)) => name,
                None => remainder,
            };

            infos.push(Self::new(name, allow_null_value));
        }

        infos
    }

    /// [`from_args`](Self::from_args) with the platform default options, allowing
    /// missing values.
    pub fn from_default_args<S: AsRef<str>>(args: &[S]) -> Vec<Self> {
        Self::from_args(&ArgumentFormatOptions::default(), args, true)
    }
}

impl Display for ArgumentInfo {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}({})",
            self.name,
            self.description.as_deref().unwrap_or_default()
        )
    }
}

/// Name-keyed lookup of declarations.
///
/// When the same name is declared more than once the later declaration replaces
/// the earlier one entirely.
#[derive(Debug, Clone, Default)]
pub struct ArgumentInfoHash {
    infos: IndexMap<String, ArgumentInfo>,
}

impl ArgumentInfoHash {
    pub fn new(infos: &[ArgumentInfo]) -> Self {
        infos.iter().cloned().collect()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ArgumentInfo> {
        self.infos.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.infos.contains_key(name)
    }

    /// Declared names in first-declaration order.
    #[must_use]
    pub fn argument_names(&self) -> Vec<&str> {
        self.infos.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.infos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }
}

impl FromIterator<ArgumentInfo> for ArgumentInfoHash {
    fn from_iter<I: IntoIterator<Item = ArgumentInfo>>(iter: I) -> Self {
        let mut infos = IndexMap::new();
        for info in iter {
            infos.insert(info.name.clone(), info);
        }
        Self { infos }
    }
}
