//! Command implementations for the shell

use crate::{
    core::report::{address_table, link_table},
    inventory::InventoryProvider,
};
use std::io::Write;
use tracing::{debug, instrument};

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    ShowLink,
    ShowAddress,
    Exit,
    /// Anything else, trimmed
    Unknown(String),
}

impl ShellCommand {
    /// Parse a whole input line
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "show link" => Self::ShowLink,
            "show address" => Self::ShowAddress,
            "exit" | "quit" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// What the loop should do after a command ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Execute one command, writing its output to `out`
#[instrument(skip(inventory, out))]
pub fn execute_command(
    command: &ShellCommand,
    inventory: &dyn InventoryProvider,
    out: &mut dyn Write,
) -> anyhow::Result<Flow> {
    match command {
        ShellCommand::ShowLink => {
            execute_show_link(inventory, out)?;
            Ok(Flow::Continue)
        }
        ShellCommand::ShowAddress => {
            execute_show_address(inventory, out)?;
            Ok(Flow::Continue)
        }
        ShellCommand::Exit => {
            writeln!(out, "Bye!")?;
            Ok(Flow::Exit)
        }
        ShellCommand::Unknown(raw) => {
            writeln!(out, "Unknown command: {raw}")?;
            Ok(Flow::Continue)
        }
    }
}

/// Execute the link listing
fn execute_show_link(inventory: &dyn InventoryProvider, out: &mut dyn Write) -> anyhow::Result<()> {
    let interfaces = inventory.list_interfaces();
    debug!("Listing {} interfaces", interfaces.len());

    write!(out, "{}", link_table(&interfaces))?;
    Ok(())
}

/// Execute the address listing
fn execute_show_address(
    inventory: &dyn InventoryProvider,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let entries: Vec<_> = inventory
        .list_interfaces()
        .into_iter()
        .map(|iface| {
            let addresses = inventory.list_addresses(&iface);
            (iface, addresses)
        })
        .collect();

    let table = address_table(&entries);
    debug!("Listing {} addresses", table.body_len());

    write!(out, "{table}")?;
    Ok(())
}
