//! Command-line interface module
//!
//! Provides argument parsing, command dispatch and the interactive loop.

pub mod args;
pub mod commands;
pub mod editor;
pub mod shell;

pub use args::{Args, parse_args};
pub use commands::{Flow, ShellCommand, execute_command};
pub use editor::{CompletionHelper, InteractiveInput, LineSource};
pub use shell::{Shell, run_shell};
