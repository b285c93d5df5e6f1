//! Rendering of parse results.

use std::fmt::{Display, Formatter};

use argmap_core::error::{Error, Result};
use argmap_core::format_options::ArgumentFormatOptions;
use argmap_core::parsed_arguments::ParsedArguments;
use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;

use crate::cli_args::OutputFormat;

/// Serializable summary of one parse.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ParseReport {
    pub format: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub arguments: IndexMap<String, String>,
    pub original: Vec<String>,
}

impl ParseReport {
    pub fn new(options: &ArgumentFormatOptions, parsed: &ParsedArguments) -> Self {
        Self {
            format: options.to_string(),
            status: parsed.status().to_string(),
            message: parsed.message().map(ToString::to_string),
            arguments: parsed
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            original: parsed.original_strings().to_vec(),
        }
    }

    /// Renders the report in the requested format.
    ///
    /// # Errors
    ///
    /// Returns an error if YAML serialization fails.
    pub fn render(&self, output_format: OutputFormat) -> Result<String> {
        match output_format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Yaml => serde_yaml::to_string(self).map_err(|e| {
                Error::yaml_error(
                    "writing".to_string(),
                    "report".to_string(),
                    "<stdout>".to_string(),
                    e,
                )
            }),
        }
    }
}

impl Display for ParseReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Format: {}", self.format)?;
        writeln!(f, "Status: {}", self.status)?;

        if let Some(message) = &self.message {
            writeln!(f, "Message: {message}")?;
        }

        if self.arguments.is_empty() {
            return Ok(());
        }

        writeln!(f, "Arguments:")?;
        for (name, value) in self.arguments.iter().sorted() {
            writeln!(f, "\t\"{name}\": \"{value}\"")?;
        }

        Ok(())
    }
}
