//! Name validation and greeting formatting.

use thiserror::Error;
use toml::Value;

/// Category of a greeting failure, used by the entry point to pick a log prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreetErrorKind {
    Type,
    Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GreetError {
    /// The name was not text.
    #[error("Expected string for name, got {0}")]
    Type(&'static str),
    /// The name was empty or whitespace-only.
    #[error("Name cannot be empty or contain only whitespace")]
    Value,
}

impl GreetError {
    pub fn kind(&self) -> GreetErrorKind {
        match self {
            GreetError::Type(_) => GreetErrorKind::Type,
            GreetError::Value => GreetErrorKind::Value,
        }
    }
}

/// Format the greeting for `name`.
///
/// Rejects names that are empty or consist only of whitespace (tabs and
/// newlines included).
pub fn greet(name: &str) -> Result<String, GreetError> {
    if name.trim().is_empty() {
        return Err(GreetError::Value);
    }
    Ok(format!("Hello, {name}! Welcome to the template repository."))
}

/// Format the greeting for a dynamically typed name, as read from a config file.
///
/// Non-string values fail with [`GreetError::Type`] naming the TOML type
/// that was received.
pub fn greet_value(name: &Value) -> Result<String, GreetError> {
    match name {
        Value::String(name) => greet(name),
        other => Err(GreetError::Type(other.type_str())),
    }
}
