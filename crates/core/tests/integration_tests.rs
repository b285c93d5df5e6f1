//! Integration tests for argmap-core
//!
//! These tests verify that the core functionality works together correctly
//! by testing complete workflows end-to-end.

use argmap_core::{
    argument_info::{ArgumentInfo, ArgumentInfoHash},
    config::get_declarations_path,
    error::Error,
    file_handling::get_declarations,
    format_options::{resolve_platform_style, ArgumentFormatOptions, ArgumentStyle},
    parsed_arguments::{ArgumentParseStatus, Arguments, ParsedArguments},
    parser::{ArgumentParser, DefaultArgumentParser},
};
use std::io::Write;
use tempfile::NamedTempFile;

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(ToString::to_string).collect()
}

/// Test declaring arguments in a file and parsing against them
#[test]
fn test_declarations_file_workflow() {
    let yaml_content = r#"
- name: host
  description: "Host to connect to"
  value_example: "localhost"
- name: port
  description: "Port to connect to"
- name: verbose
  allow_null_value: true
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{yaml_content}").unwrap();
    let temp_path = get_declarations_path(&Some(temp_file.path().to_str().unwrap().to_string()));

    let declarations = get_declarations(&temp_path).unwrap();
    assert_eq!(declarations.len(), 3);

    let parsed = ParsedArguments::parse(
        &ArgumentFormatOptions::POSIX,
        &["--host=example.com", "--port=8080", "--verbose"],
        &declarations,
    );

    assert_eq!(parsed.status(), ArgumentParseStatus::Success);
    assert_eq!(parsed.get("host"), Some("example.com"));
    assert_eq!(parsed.get("port"), Some("8080"));
    assert_eq!(parsed.get("verbose"), Some(""));
    assert!(parsed.ensure_argument_value("host", None).is_ok());
    assert!(parsed.ensure_argument_value("verbose", None).is_err());
}

/// Test that a rejected value for one argument keeps the rest of the parse
#[test]
fn test_partial_failure_workflow() {
    let declarations = vec![
        ArgumentInfo::new("host", false),
        ArgumentInfo::new("port", false),
    ];

    let parsed = ParsedArguments::parse(
        &ArgumentFormatOptions::POSIX,
        &["--host=a", "--port", "--host=b"],
        &declarations,
    );

    assert_eq!(parsed.status(), ArgumentParseStatus::Error);
    assert_eq!(parsed.message(), Some("No value specified for port"));
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed.get("host"), Some("b"));

    let error = parsed.into_result().unwrap_err();
    assert!(matches!(error, Error::Parsing { .. }));
    assert!(error.to_string().contains("No value specified for port"));
}

/// Test the same input under each style
#[test]
fn test_styles_workflow() {
    let windows = ArgumentFormatOptions::for_style(ArgumentStyle::Windows);
    let parsed = DefaultArgumentParser::new(windows)
        .parse_arguments(&strings(&["/out:C:\\build", "/quiet"]));
    assert_eq!(parsed.status(), ArgumentParseStatus::Success);
    assert_eq!(parsed.get("out"), Some("C:\\build"));
    assert_eq!(parsed.get("quiet"), Some(""));

    let posix = ArgumentFormatOptions::for_style(ArgumentStyle::Posix);
    let parsed = DefaultArgumentParser::new(posix)
        .parse_arguments(&strings(&["--out=/tmp/build", "-q"]));
    assert_eq!(parsed.status(), ArgumentParseStatus::Success);
    assert_eq!(parsed.get("out"), Some("/tmp/build"));
    assert_eq!(parsed.get("q"), Some(""));
}

/// Test that declarations derived from input and a hash built from them agree
#[test]
fn test_derived_declarations_workflow() {
    let args = ["--a=1", "--b", "--a=2"];
    let infos = ArgumentInfo::from_args(&ArgumentFormatOptions::POSIX, &args, true);
    assert_eq!(infos.len(), 3);

    let hash = ArgumentInfoHash::new(&infos);
    assert_eq!(hash.argument_names(), ["a", "b"]);

    let parsed = ParsedArguments::parse(&ArgumentFormatOptions::POSIX, &args, &infos);
    let arguments: &dyn Arguments = &parsed;
    assert_eq!(arguments.get("a"), Some("2"));
    assert!(arguments.contains("b"));
}

/// Test platform resolution honours the override regardless of OS
#[test]
fn test_platform_resolution() {
    let native = resolve_platform_style(None, cfg!(windows));
    if cfg!(windows) {
        assert_eq!(native, ArgumentFormatOptions::WINDOWS);
    } else {
        assert_eq!(native, ArgumentFormatOptions::POSIX);
    }

    let opposite = if cfg!(windows) { "posix" } else { "windows" };
    assert_ne!(resolve_platform_style(Some(opposite), cfg!(windows)), native);
}
