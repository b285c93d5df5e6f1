//! Explicit registration table of switches.

use std::fmt::{Debug, Formatter};

use argmap_core::error::{Error, Result};
use argmap_core::parsed_arguments::Arguments;
use indexmap::IndexMap;

/// Called with the switch's value (empty for bare flags) and all parsed arguments.
pub type Handler = Box<dyn Fn(&str, &dyn Arguments) -> Result<()>>;

/// A named command runnable from the command line.
pub struct Switch {
    name: String,
    short_name: String,
    description: Option<String>,
    handler: Handler,
}

impl Switch {
    /// Creates a switch whose short name is the acronym of `name`.
    pub fn new<F>(name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&str, &dyn Arguments) -> Result<()> + 'static,
    {
        let name = name.into();
        Self {
            short_name: acronym(&name),
            name,
            description: None,
            handler: Box::new(handler),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = short_name.into();
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether a parsed argument name selects this switch.
    ///
    /// Matches the full name exactly, the acronym of the name, or the short name
    /// ignoring case.
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        key == self.name || key == acronym(&self.name) || key.eq_ignore_ascii_case(&self.short_name)
    }

    /// Runs the handler.
    ///
    /// # Errors
    ///
    /// Returns whatever error the handler returns.
    pub fn run(&self, value: &str, arguments: &dyn Arguments) -> Result<()> {
        (self.handler)(value, arguments)
    }
}

impl Debug for Switch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Switch")
            .field("name", &self.name)
            .field("short_name", &self.short_name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Switches keyed by name, in registration order.
#[derive(Debug, Default)]
pub struct SwitchRegistry {
    switches: IndexMap<String, Switch>,
}

impl SwitchRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a switch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonUniqueSwitch`] if a switch with the same name is
    /// already registered.
    pub fn register(&mut self, switch: Switch) -> Result<()> {
        if self.switches.contains_key(switch.name()) {
            return Err(Error::NonUniqueSwitch(switch.name().to_string()));
        }

        self.switches.insert(switch.name().to_string(), switch);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Switch> {
        self.switches.get(name)
    }

    /// Every switch selected by `key`.
    pub fn find_matches(&self, key: &str) -> Vec<&Switch> {
        self.switches
            .values()
            .filter(|switch| switch.matches(key))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Switch> {
        self.switches.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.switches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.switches.is_empty()
    }
}

/// Lowercase initials of the words in `name`.
///
/// Words are separated by non-alphanumeric characters or start at a
/// lowercase-to-uppercase transition, so `list-keys`, `list_keys` and `listKeys`
/// all give `lk`.
#[must_use]
pub fn acronym(name: &str) -> String {
    let mut initials = String::new();
    let mut previous: Option<char> = None;

    for c in name.chars() {
        let starts_word = c.is_alphanumeric()
            && match previous {
                None => true,
                Some(p) => !p.is_alphanumeric() || (p.is_lowercase() && c.is_uppercase()),
            };

        if starts_word {
            initials.extend(c.to_lowercase());
        }
        previous = Some(c);
    }

    initials
}
