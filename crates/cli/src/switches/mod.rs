//! Switch dispatch for the argmap CLI.
//!
//! Switches are commands registered by name in a [`SwitchRegistry`]. After a
//! successful parse, each parsed argument name selects at most one switch,
//! whose handler receives the argument's value.

pub mod builtin;
pub mod dispatch;
pub mod registry;

pub use builtin::builtin_switches;
pub use dispatch::{dispatch, DispatchSummary};
pub use registry::{Switch, SwitchRegistry};
