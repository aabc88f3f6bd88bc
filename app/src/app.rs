//! Entry point logic: resolve the name, greet, and map the outcome to an exit code.

use thiserror::Error;
use toml::Value;
use tracing::{error, info};

use crate::cancel::Cancellation;
use crate::cli::{Cli, DEFAULT_NAME};
use crate::core::greeting::{GreetError, GreetErrorKind, greet_value};
use crate::exit_codes;
use crate::io::config::{ConfigError, load_config};

/// Failure of the greeting step.
#[derive(Debug, Error)]
pub enum StepError {
    #[error(transparent)]
    Greet(#[from] GreetError),
    #[error("operation cancelled")]
    Cancelled,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Produces the greeting for a resolved name.
pub trait Greeter {
    fn greet(&self, name: &Value) -> Result<String, StepError>;
}

/// Validates the name and formats the standard greeting.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultGreeter;

impl Greeter for DefaultGreeter {
    fn greet(&self, name: &Value) -> Result<String, StepError> {
        Ok(greet_value(name)?)
    }
}

impl<F> Greeter for F
where
    F: Fn(&Value) -> Result<String, StepError>,
{
    fn greet(&self, name: &Value) -> Result<String, StepError> {
        self(name)
    }
}

/// Run the application and return the process exit code.
///
/// Greeting failures exit with [`exit_codes::FAILURE`]; cancellation is a
/// clean exit.
pub fn run<G: Greeter + ?Sized>(cli: &Cli, greeter: &G, cancel: &Cancellation) -> i32 {
    let name = match resolve_name(cli) {
        Ok(name) => name,
        Err(err) => {
            error!("Configuration error: {err}");
            return exit_codes::FAILURE;
        }
    };
    if cancel.is_cancelled() {
        info!("Operation cancelled by user");
        return exit_codes::OK;
    }

    match cancel.cooperative(|| greet_step(greeter, &name, cancel)) {
        Ok(message) => {
            info!("{message}");
            exit_codes::OK
        }
        Err(StepError::Greet(err)) => {
            match err.kind() {
                GreetErrorKind::Value => error!("Invalid input value: {err}"),
                GreetErrorKind::Type => error!("Type error: {err}"),
            }
            exit_codes::FAILURE
        }
        Err(StepError::Cancelled) => {
            info!("Operation cancelled by user");
            exit_codes::OK
        }
        Err(StepError::Other(err)) => {
            error!("An unexpected error occurred: {err:#}");
            exit_codes::FAILURE
        }
    }
}

/// Pick the name to greet: `--name`, then the config's `name`, then [`DEFAULT_NAME`].
///
/// A config passed with `--config` is always loaded, so a broken file fails
/// the run even when `--name` is given.
pub fn resolve_name(cli: &Cli) -> Result<Value, ConfigError> {
    let configured = match &cli.config {
        Some(path) => load_config(path)?.name,
        None => None,
    };
    let name = cli
        .name
        .clone()
        .map(Value::String)
        .or(configured)
        .unwrap_or_else(|| Value::String(DEFAULT_NAME.to_string()));
    Ok(name)
}

fn greet_step<G: Greeter + ?Sized>(
    greeter: &G,
    name: &Value,
    cancel: &Cancellation,
) -> Result<String, StepError> {
    if cancel.is_cancelled() {
        return Err(StepError::Cancelled);
    }
    let message = greeter.greet(name)?;
    if cancel.is_cancelled() {
        return Err(StepError::Cancelled);
    }
    Ok(message)
}
