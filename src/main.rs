use anyhow::Result;
use clap::Parser;
use finance_manager::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
