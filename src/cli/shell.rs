//! The read-eval loop

use crate::{
    cli::{
        commands::{Flow, ShellCommand, execute_command},
        editor::{InteractiveInput, LineSource},
    },
    config::Config,
    core::CommandTree,
    inventory::{InterfaceNames, InventoryProvider, system_inventory},
};
use anyhow::Context;
use std::{io::Write, sync::Arc};
use tracing::{info, warn};

/// Greeting printed when the shell starts
pub const BANNER: &str = "Welcome to NetShell!";

/// Reads lines, runs them and writes the results to `out`
pub struct Shell<W: Write> {
    inventory: Arc<dyn InventoryProvider>,
    prompt: String,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(inventory: Arc<dyn InventoryProvider>, prompt: impl Into<String>, out: W) -> Self {
        Self {
            inventory,
            prompt: prompt.into(),
            out,
        }
    }

    /// Run until an exit command or the end of input
    pub fn run(&mut self, input: &mut dyn LineSource) -> anyhow::Result<()> {
        writeln!(self.out, "{BANNER}")?;

        while let Some(line) = input.read_line(&self.prompt) {
            let command = ShellCommand::parse(&line);
            let flow = execute_command(&command, self.inventory.as_ref(), &mut self.out)?;
            self.out.flush()?;

            if flow == Flow::Exit {
                return Ok(());
            }
        }

        writeln!(self.out, "Bye!")?;
        Ok(())
    }

    /// Consume the shell, returning the output sink
    pub fn into_output(self) -> W {
        self.out
    }
}

/// Run the interactive shell on the terminal
pub fn run_shell(config: &Config) -> anyhow::Result<()> {
    let inventory = system_inventory();
    let tree = CommandTree::standard(Arc::new(InterfaceNames::new(Arc::clone(&inventory))));

    let mut input =
        InteractiveInput::new(config, tree).context("Failed to start the line editor")?;

    info!("Starting shell");
    let mut shell = Shell::new(inventory, config.prompt.clone(), std::io::stdout());
    let result = shell.run(&mut input);

    if let Err(e) = input.save_history() {
        warn!("{}", e);
    }

    result
}
