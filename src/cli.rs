//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};

use crate::commands;

/// Checkout SemaphoreCI
#[derive(Parser, Debug)]
#[command(name = "checkout-semaphoreci2")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute; without one the repository is checked out
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    checkout: commands::ConfigArgs,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check if PR has label
    HasLabel(commands::has_label::HasLabelArgs),

    /// Check if its a PR
    IsPr(commands::is_pr::IsPrArgs),

    /// Display the version.
    Version,
}

impl Cli {
    /// Parse the command line, exiting with a usage error on conflicts
    pub fn parse_checked() -> Self {
        let cli = Self::parse();
        if let Err(e) = cli.check_conflicts() {
            e.exit();
        }
        cli
    }

    /// Checkout options belong after the subcommand they configure.
    fn check_conflicts(&self) -> Result<(), clap::Error> {
        if self.command.is_some() && self.checkout.is_given() {
            return Err(Self::command().error(
                ErrorKind::ArgumentConflict,
                "checkout options must be given after the subcommand",
            ));
        }
        Ok(())
    }

    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        match self.command {
            None => commands::checkout::execute(self.checkout),
            Some(Commands::HasLabel(args)) => commands::has_label::execute(args),
            Some(Commands::IsPr(args)) => commands::is_pr::execute(args),
            Some(Commands::Version) => commands::version::execute(),
        }
    }
}

/// `RUST_LOG`, when set, takes precedence over `--log-level`.
fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
