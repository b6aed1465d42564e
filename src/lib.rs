//! # NetShell
//!
//! A minimal interactive shell for inspecting local network interfaces.
//! It lists link state and assigned IP addresses and completes commands
//! as you type.
//!
//! ## Features
//!
//! - Hierarchical command completion mixing fixed words with live interface names
//! - Tab-aligned link and address reports
//! - Netlink-backed interface inventory on Linux
//! - Persistent line history
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use netshell::core::{CommandTree, complete};
//!
//! let tree = CommandTree::standard(Arc::new(|| vec!["eth0".to_string()]));
//! let completion = complete(&tree, "show li", 7);
//! assert_eq!(completion.texts(), vec!["link"]);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod inventory;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `--debug` is not given
///
/// netlink-packet-route warns about attribute size mismatches on every link
/// dump, so only its errors are let through.
pub const DEFAULT_LOG_FILTER: &str = "warn,netlink_packet_route=error";

/// Log filter for the requested verbosity
pub fn log_filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(DEFAULT_LOG_FILTER)
    }
}

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = log_filter(debug);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
