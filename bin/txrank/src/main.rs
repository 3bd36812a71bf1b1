//! txrank - keep the highest-fee transactions from a transaction file.

use clap::Parser;
use eyre::Result;

mod cli;

fn main() -> Result<()> {
    txrank_cli::Backtracing::enable();

    let cli = cli::Cli::parse();
    txrank_cli::init_tracing(cli.verbose);

    cli.run()
}
