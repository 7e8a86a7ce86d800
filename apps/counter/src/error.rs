//! # App Error Type
//!
//! Unified error type for the counter's commands and startup.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Hearth Counter                         │
//! │                                                                         │
//! │  Rejected input (ValidationError)                                      │
//! │     └── never reaches here: Prompter::ask_until prints and re-asks     │
//! │                                                                         │
//! │  Recoverable core errors (CapacityExceeded, AddOnLimitReached)         │
//! │     └── handled in commands: told to the user, session continues       │
//! │                                                                         │
//! │  Everything else ──► AppError ──► run() ──► anyhow in main ──► stderr  │
//! │     • stdin closed mid-session                                         │
//! │     • bad configuration / catalog file                                 │
//! │     • OutOfRange (a caller defect)                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use hearth_core::{CoreError, ValidationError};
use thiserror::Error;

use crate::state::ConfigError;

/// Errors that end a counter session.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading the terminal or writing prompts failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input reached end-of-file while a prompt was waiting.
    #[error("Input closed before the session finished")]
    InputClosed,

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The configured catalog file could not be read.
    #[error("Could not read catalog file {}: {source}", .path.display())]
    CatalogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(CoreError::Validation(err))
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_wraps_into_core() {
        let err: AppError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Core(CoreError::Validation(_))));
    }

    #[test]
    fn test_catalog_file_message_names_path() {
        let err = AppError::CatalogFile {
            path: PathBuf::from("/etc/hearth/menu.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            err.to_string(),
            "Could not read catalog file /etc/hearth/menu.json: missing"
        );
    }
}
