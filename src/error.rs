//! Error types for the shell
//!
//! Provides structured error handling with context and proper error chains.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the shell
#[derive(Error, Debug)]
pub enum ShellError {
    /// The interactive line editor could not be acquired
    #[error("Line editor error: {message}")]
    Editor {
        message: String,
        #[source]
        source: rustyline::error::ReadlineError,
    },

    /// Reading or writing the history file failed
    #[error("History error: {operation} failed on {path}")]
    History {
        operation: String,
        path: PathBuf,
        #[source]
        source: rustyline::error::ReadlineError,
    },

    /// Querying the network inventory failed
    #[error("Inventory error: {message}")]
    Inventory {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl ShellError {
    /// Create a new line editor error
    pub fn editor(
        message: impl Into<String>,
        source: rustyline::error::ReadlineError,
    ) -> Self {
        Self::Editor {
            message: message.into(),
            source,
        }
    }

    /// Create a new history file error
    pub fn history<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: rustyline::error::ReadlineError,
    ) -> Self {
        Self::History {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new inventory error caused by `source`
    pub fn inventory<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Inventory {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ShellError>;
