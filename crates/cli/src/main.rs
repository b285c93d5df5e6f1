use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use argmap_cli::arguments::{load_declarations, process_command_line, Provider};
use argmap_cli::cli_args::Args;
use argmap_cli::report::ParseReport;
use argmap_cli::switches::{builtin_switches, dispatch};
use argmap_core::error::Result;
use argmap_core::parsed_arguments::ArgumentParseStatus;

/// Parses, reports and optionally dispatches. Returns whether the parse succeeded.
fn execute() -> Result<bool> {
    let args = Args::parse();
    let options = args.get_format_options()?;

    let declarations = load_declarations(&args.declarations)?;
    let parsed = process_command_line(&options, declarations.as_deref(), &args.arguments);
    debug!("Parsed {} argument(s) with status {}", parsed.len(), parsed.status());

    let report = ParseReport::new(&options, &parsed);
    print!("{}", report.render(args.format)?);

    if parsed.status() != ArgumentParseStatus::Success {
        return Ok(false);
    }

    if args.run {
        let registry = builtin_switches(declarations.unwrap_or_default())?;
        let summary = dispatch(&registry, &parsed)?;

        if !summary.ran_any() {
            info!("No switches matched the parsed arguments.");
        }

        if let Some(failure) = summary.failed.into_iter().next() {
            return Err(failure);
        }
    }

    Ok(true)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
