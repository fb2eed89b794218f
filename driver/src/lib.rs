use crate::error::DriverError;
use error_stack::Report;

pub mod database;
pub mod error;

/// Reads `key` from the environment (or `.env`), falling back to `default` when unset.
pub fn env_or(key: &str, default: &str) -> Result<String, Report<DriverError>> {
    match dotenvy::var(key) {
        Ok(value) => Ok(value),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(default.to_string()),
        Err(error) => Err(Report::new(error)
            .change_context(DriverError::Env)
            .attach_printable(format!("Env {key} could not be read"))),
    }
}
