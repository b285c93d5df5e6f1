use argmap_core::error::{Error, Result};
use argmap_core::parsed_arguments::Arguments;
use log::{error, info};

use super::registry::SwitchRegistry;

/// What a dispatch run did.
#[derive(Debug, Default)]
pub struct DispatchSummary {
    /// Names of switches whose handlers succeeded, in run order.
    pub executed: Vec<String>,
    /// One [`Error::SwitchFailed`] per handler that returned an error.
    pub failed: Vec<Error>,
}

impl DispatchSummary {
    #[must_use]
    pub fn ran_any(&self) -> bool {
        !self.executed.is_empty() || !self.failed.is_empty()
    }
}

/// Runs the switch selected by each parsed argument name.
///
/// Keys are visited in parse order. A key selecting no switch is ignored; a
/// failing handler is logged and recorded without stopping the others.
///
/// # Errors
///
/// Returns [`Error::AmbiguousSwitch`] before running anything for that key if
/// it selects more than one switch.
pub fn dispatch(registry: &SwitchRegistry, arguments: &dyn Arguments) -> Result<DispatchSummary> {
    let mut summary = DispatchSummary::default();

    for key in arguments.keys() {
        let matches = registry.find_matches(key);
        if matches.len() > 1 {
            return Err(Error::AmbiguousSwitch(key.to_string()));
        }

        let Some(switch) = matches.first() else {
            continue;
        };

        let value = arguments.get(key).unwrap_or_default();
        match switch.run(value, arguments) {
            Ok(()) => {
                info!("Executed {}: {}", key, switch.description().unwrap_or(switch.name()));
                summary.executed.push(switch.name().to_string());
            }
            Err(e) => {
                error!("Exception executing switch ({key}): {e}");
                summary
                    .failed
                    .push(Error::SwitchFailed(switch.name().to_string(), e.to_string()));
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::switches::registry::Switch;
    use argmap_core::format_options::ArgumentFormatOptions;
    use argmap_core::parsed_arguments::ParsedArguments;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn parsed(args: &[&str]) -> ParsedArguments {
        ParsedArguments::from_args(&ArgumentFormatOptions::POSIX, args)
    }

    fn recording_registry(calls: &Rc<RefCell<Vec<String>>>) -> SwitchRegistry {
        let mut registry = SwitchRegistry::new();
        for name in ["echo", "list-keys"] {
            let calls = Rc::clone(calls);
            registry
                .register(Switch::new(name, move |value, _| {
                    calls.borrow_mut().push(format!("{name}:{value}"));
                    Ok(())
                }))
                .unwrap();
        }
        registry
    }

    #[test]
    fn test_dispatch_runs_matching_switches_in_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let registry = recording_registry(&calls);

        let summary = dispatch(&registry, &parsed(&["--lk", "--other=1", "--echo=hi"])).unwrap();

        assert_eq!(summary.executed, ["list-keys", "echo"]);
        assert!(summary.failed.is_empty());
        assert_eq!(*calls.borrow(), ["list-keys:", "echo:hi"]);
    }

    #[test]
    fn test_dispatch_nothing_matched() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let registry = recording_registry(&calls);

        let summary = dispatch(&registry, &parsed(&["--unrelated=1"])).unwrap();
        assert!(!summary.ran_any());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_dispatch_failure_does_not_stop_others() {
        let mut registry = SwitchRegistry::new();
        registry
            .register(Switch::new("fail", |_, _| Err(Error::Misc("boom".to_string()))))
            .unwrap();
        registry.register(Switch::new("ok", |_, _| Ok(()))).unwrap();

        let summary = dispatch(&registry, &parsed(&["--fail", "--ok"])).unwrap();
        assert_eq!(summary.executed, ["ok"]);
        assert_eq!(summary.failed.len(), 1);
        assert!(matches!(&summary.failed[0], Error::SwitchFailed(name, _) if name == "fail"));
    }

    #[test]
    fn test_dispatch_ambiguous() {
        let mut registry = SwitchRegistry::new();
        registry.register(Switch::new("echo", |_, _| Ok(()))).unwrap();
        registry.register(Switch::new("export", |_, _| Ok(()))).unwrap();

        let result = dispatch(&registry, &parsed(&["--e"]));
        assert!(matches!(result, Err(Error::AmbiguousSwitch(key)) if key == "e"));
    }

    #[test]
    fn test_handler_sees_all_arguments() {
        let seen = Rc::new(RefCell::new(None));
        let mut registry = SwitchRegistry::new();
        {
            let seen = Rc::clone(&seen);
            registry
                .register(Switch::new("greet", move |_, arguments| {
                    *seen.borrow_mut() = arguments.get("name").map(ToString::to_string);
                    Ok(())
                }))
                .unwrap();
        }

        dispatch(&registry, &parsed(&["--greet", "--name=World"])).unwrap();
        assert_eq!(seen.borrow().as_deref(), Some("World"));
    }
}
