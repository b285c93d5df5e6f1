use argmap_core::argument_info::ArgumentInfo;
use argmap_core::config;
use argmap_core::error::Result;
use argmap_core::file_handling;
use argmap_core::format_options::ArgumentFormatOptions;
use argmap_core::parsed_arguments::ParsedArguments;
use argmap_core::parser::{ArgumentParser, DefaultArgumentParser};
use log::debug;

/// Loads declarations when `--declarations` was given.
///
/// `Some(None)` means the flag was given without a path, so the default
/// declarations path is used.
///
/// # Errors
///
/// Returns an error if the declarations file cannot be read or is invalid.
#[allow(clippy::option_option)]
pub fn load_declarations(declarations_arg: &Option<Option<String>>) -> Result<Option<Vec<ArgumentInfo>>> {
    let Some(declarations_path) = declarations_arg else {
        return Ok(None);
    };

    let declarations_path = config::get_declarations_path(declarations_path);
    debug!("Declarations path: `{}`", declarations_path);

    file_handling::get_declarations(&declarations_path).map(Some)
}

/// Parses the command line arguments.
///
/// With declarations, only declared names are accepted. Without them, every
/// name appearing in `arguments` is accepted.
pub fn process_command_line(
    options: &ArgumentFormatOptions,
    declarations: Option<&[ArgumentInfo]>,
    arguments: &[String],
) -> ParsedArguments {
    match declarations {
        Some(declarations) => ParsedArguments::parse(options, arguments, declarations),
        None => DefaultArgumentParser::new(*options).parse_arguments(arguments),
    }
}
