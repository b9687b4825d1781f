//! CLI entry point for the symbol frequency and weight ranking jobs

use clap::Parser;
use symrank::io::cli::{Cli, CommandRunner};
use symrank::io::logging;

fn main() -> symrank::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let mut runner = CommandRunner::new(cli);
    runner.run()
}
