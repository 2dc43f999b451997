//! Command-line interface for Waypath route solving.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod input;
mod solve;

pub use error::CliError;
pub use input::ParseError;

/// Run the Waypath CLI with the current process arguments.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Solve(args) => solve::run_solve(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "waypath",
    about = "Minimum-time route solving over gridded waypoint courses",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve every test case in an input file.
    Solve(solve::SolveArgs),
}

#[cfg(test)]
mod tests;
