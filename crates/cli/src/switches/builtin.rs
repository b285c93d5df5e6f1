use argmap_core::argument_info::ArgumentInfo;
use argmap_core::error::Result;
use itertools::Itertools;

use super::registry::{Switch, SwitchRegistry};

/// The switches `argmap --run` knows about.
///
/// - `echo` prints its value
/// - `keys` prints every parsed argument name, sorted
/// - `describe` prints the declarations in use
///
/// # Errors
///
/// Returns an error if two built-ins share a name.
pub fn builtin_switches(declarations: Vec<ArgumentInfo>) -> Result<SwitchRegistry> {
    let mut registry = SwitchRegistry::new();

    registry.register(
        Switch::new("echo", |value, _| {
            println!("{value}");
            Ok(())
        })
        .with_description("Print the switch value"),
    )?;

    registry.register(
        Switch::new("keys", |_, arguments| {
            for key in arguments.keys().into_iter().sorted() {
                println!("{key}");
            }
            Ok(())
        })
        .with_description("Print the parsed argument names"),
    )?;

    registry.register(
        Switch::new("describe", move |_, _| {
            if declarations.is_empty() {
                println!("No declarations; every name in the input is accepted.");
            }
            for declaration in &declarations {
                match &declaration.value_example {
                    Some(example) => println!("{declaration} e.g. `{example}`"),
                    None => println!("{declaration}"),
                }
            }
            Ok(())
        })
        .with_description("Print the argument declarations"),
    )?;

    Ok(registry)
}
