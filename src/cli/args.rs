//! Command-line argument parsing and validation

use clap::Parser;
use std::path::PathBuf;

/// NetShell - an interactive shell for inspecting network interfaces
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "netshell")]
pub struct Args {
    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Location of the line history file
    #[arg(long = "history-file", value_name = "PATH")]
    pub history_file: Option<PathBuf>,

    /// Do not read or write a history file
    #[arg(long = "no-history", conflicts_with = "history_file")]
    pub no_history: bool,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
