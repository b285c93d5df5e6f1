use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid prefix `{}`. Allowed: {}", .prefix, .allowed)]
    InvalidPrefix { prefix: String, allowed: String },

    #[error("Invalid separator `{}`. Allowed: {}", .separator, .allowed)]
    InvalidSeparator { separator: char, allowed: String },

    #[error("{} (`{}`)", .message, .name)]
    MissingArgument { name: String, message: String },

    #[error("{} (`{}`)", .message, .name)]
    MissingArgumentValue { name: String, message: String },

    #[error("Argument parsing failed: {}", .message)]
    Parsing { message: String },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("No arguments were declared in `{}`. Is it empty?", .path)]
    EmptyDeclarations { path: String },

    #[error("Invalid argument name: name may not be empty")]
    EmptyName,

    #[error("Invalid argument name `{}`: name may not contain spaces", .0)]
    NameWithSpace(String),

    #[error("Invalid argument name `{}`: name may not contain the separator `{}`", .0, .1)]
    NameWithSeparator(String, char),

    #[error("Found a non-unique switch name: `{}`", .0)]
    NonUniqueSwitch(String),

    #[error("Multiple switches match the command line switch: `{}`", .0)]
    AmbiguousSwitch(String),

    #[error("Switch `{}` failed: {}", .0, .1)]
    SwitchFailed(String, String),

    #[error("Misc error: {}", .0)]
    Misc(String),
}

impl Error {
    pub fn missing_argument(name: &str, message: &str) -> Self {
        Self::MissingArgument {
            name: name.to_string(),
            message: message.to_string(),
        }
    }

    pub fn missing_argument_value(name: &str, message: &str) -> Self {
        Self::MissingArgumentValue {
            name: name.to_string(),
            message: message.to_string(),
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
