//! parbatch CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, generate one
//! sbatch script per stack of input files, and submit (or print) each one.
//! For programmatic use, prefer the library API (`parbatch::api`).

use clap::{CommandFactory, Parser};

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Bare invocation prints usage and exits cleanly instead of
    // complaining about the missing --call.
    if std::env::args().len() < 2 {
        cli::CliArgs::command().print_help()?;
        return Ok(());
    }

    let args = cli::CliArgs::parse();
    cli::run(args)
}
