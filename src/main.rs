//! # checkout-semaphoreci2 CLI
//!
//! This is the binary entry point for the `checkout-semaphoreci2` tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the selected command, or the checkout when none is given.
//! - Turning errors returned by a command into a non-zero exit status.
//!
//! The checkout logic itself lives in the library crate. The binary only
//! wires it to the process environment, the working directory, the real
//! GitHub client and the system `git`.

mod cli;
mod commands;

use anyhow::Result;

fn main() -> Result<()> {
    let cli = cli::Cli::parse_checked();
    cli.execute()
}
