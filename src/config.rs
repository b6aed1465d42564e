//! Configuration management for the shell
//!
//! Centralizes configuration options and provides validation.

use crate::{cli::Args, error::ShellError};
use std::path::PathBuf;

/// File name of the history file inside the home directory
pub const HISTORY_FILE_NAME: &str = ".netshell_history";

/// Main configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Prompt shown in front of every input line
    pub prompt: String,
    /// History file configuration
    pub history: HistoryConfig,
}

/// History file configuration
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Whether history is loaded at startup and saved on exit
    pub enabled: bool,
    /// History file location, `None` when no home directory is known
    pub path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            prompt: "netshell> ".to_string(),
            history: HistoryConfig::default(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: dirs::home_dir().map(|home| home.join(HISTORY_FILE_NAME)),
        }
    }
}

impl HistoryConfig {
    /// The history file to use, if history is active
    pub fn active_path(&self) -> Option<&PathBuf> {
        if self.enabled { self.path.as_ref() } else { None }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, ShellError> {
        let mut config = Self {
            debug: args.debug,
            ..Self::default()
        };

        if args.no_history {
            config.history.enabled = false;
        }
        if let Some(path) = &args.history_file {
            config.history.path = Some(path.clone());
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ShellError> {
        if self.prompt.is_empty() {
            return Err(ShellError::validation("Prompt must not be empty"));
        }

        if let Some(path) = self.history.active_path() {
            if path.is_dir() {
                return Err(ShellError::validation(format!(
                    "History file is a directory: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }
}
