use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use crate::domain::Ledger;
use crate::logging;

mod menu;
mod render;

pub use menu::{Choice, MenuLoop};
pub use render::*;

/// Finance Manager - Personal income and expense tracker
#[derive(Parser)]
#[command(name = "finance-manager")]
#[command(about = "An interactive tracker for income, expenses and the resulting balance")]
#[command(version)]
pub struct Cli {
    /// Enable verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Run one interactive session on the process's stdin and stdout.
    /// The ledger lives only for the duration of the session.
    pub fn run(self) -> Result<()> {
        logging::init(self.verbose);
        tracing::info!("Starting session");

        let mut ledger = Ledger::new();
        let stdin = io::stdin();
        let stdout = io::stdout();

        MenuLoop::new(stdin.lock(), stdout.lock())
            .run(&mut ledger)
            .context("Failed to talk to the terminal")?;

        tracing::info!(transactions = ledger.len(), "Session ended");
        Ok(())
    }
}
