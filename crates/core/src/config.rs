//! Configuration surface for argmap.
//!
//! This module names the environment variable that overrides the platform
//! argument style and resolves the path of the argument declarations file.

/// Environment variable selecting `posix` or `windows` argument style.
pub const STYLE_ENV_VAR: &str = "ARGMAP_STYLE";

/// Default path for the argument declarations file
const DEFAULT_DECLARATIONS_PATH: &str = "~/.argmap/arguments.yml";

/// Resolves the argument declarations file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// declarations path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use argmap_core::config::get_declarations_path;
///
/// let default_path = get_declarations_path(&None);
/// assert!(default_path.ends_with("arguments.yml"));
///
/// let custom_path = get_declarations_path(&Some("/path/to/arguments.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/arguments.yml");
/// ```
pub fn get_declarations_path(declarations_path_arg: &Option<String>) -> String {
    let declarations_path = match declarations_path_arg {
        Some(declarations_path) => declarations_path,
        None => DEFAULT_DECLARATIONS_PATH,
    };

    shellexpand::tilde(declarations_path).to_string()
}
