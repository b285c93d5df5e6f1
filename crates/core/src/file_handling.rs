//! Reading and writing argument declaration files.
//!
//! A declarations file is a YAML list of [`ArgumentInfo`] entries:
//!
//! ```yaml
//! - name: host
//!   description: Host to connect to
//!   value_example: localhost
//! - name: verbose
//!   allow_null_value: true
//! ```

use std::fs::File;

use crate::argument_info::ArgumentInfo;
use crate::error::Error::{EmptyName, NameWithSeparator, NameWithSpace};
use crate::error::{Error, Result};
use crate::format_options::ALLOWED_SEPARATORS;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(EmptyName);
    }

    if name.contains(' ') {
        return Err(NameWithSpace(name.to_string()));
    }

    if let Some(separator) = ALLOWED_SEPARATORS.iter().find(|s| name.contains(**s)) {
        return Err(NameWithSeparator(name.to_string(), *separator));
    }

    Ok(())
}

fn validate_declarations(declarations: &[ArgumentInfo]) -> Result<()> {
    for declaration in declarations {
        validate_name(&declaration.name)?;
    }

    Ok(())
}

/// Loads and validates argument declarations from a YAML file.
///
/// Repeated names are kept; when the declarations are hashed the later entry wins.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - The file declares no arguments
/// - A name is empty or contains a space or a value separator
///
/// # Examples
///
/// ```no_run
/// use argmap_core::file_handling::get_declarations;
///
/// let declarations = get_declarations("/etc/argmap/arguments.yml")?;
/// println!("Loaded {} declarations", declarations.len());
/// # Ok::<(), argmap_core::error::Error>(())
/// ```
pub fn get_declarations(path: &str) -> Result<Vec<ArgumentInfo>> {
    let reader = get_reader("declarations", path)?;

    let declarations: Vec<ArgumentInfo> = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "declarations".to_string(),
            path.to_string(),
            e,
        )
    })?;

    if declarations.is_empty() {
        return Err(Error::EmptyDeclarations {
            path: path.to_string(),
        });
    }

    validate_declarations(&declarations)?;

    Ok(declarations)
}

/// Writes argument declarations to a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or serialization fails.
pub fn write_declarations(path: &str, declarations: &[ArgumentInfo]) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| Error::io_error("declarations".to_string(), path.to_string(), e))?;

    serde_yaml::to_writer(file, declarations).map_err(|e| {
        Error::yaml_error(
            "writing".to_string(),
            "declarations".to_string(),
            path.to_string(),
            e,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{content}").unwrap();
        temp_file
    }

    #[test]
    fn test_validate_name_valid() {
        assert!(validate_name("host").is_ok());
        assert!(validate_name("dry-run").is_ok());
        assert!(validate_name("log_level").is_ok());
    }

    #[test]
    fn test_validate_name_empty() {
        assert!(matches!(validate_name(""), Err(EmptyName)));
    }

    #[test]
    fn test_validate_name_with_space() {
        assert!(matches!(validate_name("has space"), Err(NameWithSpace(_))));
    }

    #[test]
    fn test_validate_name_with_separator() {
        assert!(matches!(
            validate_name("a=b"),
            Err(NameWithSeparator(_, '='))
        ));
        assert!(matches!(
            validate_name("a:b"),
            Err(NameWithSeparator(_, ':'))
        ));
    }

    #[test]
    fn test_get_declarations_valid_yaml() {
        let temp_file = write_temp(
            r#"
- name: host
  description: "Host to connect to"
  value_example: localhost
- name: verbose
  allow_null_value: true
"#,
        );
        let path = temp_file.path().to_str().unwrap();

        let declarations = get_declarations(path).unwrap();
        assert_eq!(declarations.len(), 2);
        assert_eq!(declarations[0].name, "host");
        assert!(!declarations[0].allow_null_value);
        assert_eq!(declarations[0].value_example.as_deref(), Some("localhost"));
        assert_eq!(declarations[1].name, "verbose");
        assert!(declarations[1].allow_null_value);
    }

    #[test]
    fn test_get_declarations_empty_file() {
        let temp_file = write_temp("[]");
        let result = get_declarations(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::EmptyDeclarations { .. })));
    }

    #[test]
    fn test_get_declarations_invalid_yaml() {
        let temp_file = write_temp("invalid: yaml: content: [");
        let result = get_declarations(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::Yaml { .. })));
    }

    #[test]
    fn test_get_declarations_file_not_found() {
        let result = get_declarations("/this/path/does/not/exist.yml");
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_get_declarations_invalid_name() {
        let temp_file = write_temp("- name: \"bad name\"\n");
        let result = get_declarations(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(NameWithSpace(_))));
    }

    #[test]
    fn test_write_and_read_declarations() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        let declarations = vec![
            ArgumentInfo::new("host", false).with_description("Host to connect to"),
            ArgumentInfo::new("verbose", true),
        ];

        write_declarations(path, &declarations).unwrap();
        let read_back = get_declarations(path).unwrap();
        assert_eq!(read_back, declarations);
    }
}
