//! # Is-PR Command Implementation
//!
//! Logs `yes` when the configured branch resolves to a pull request, and
//! "It's not a PR" otherwise. Both outcomes succeed; only invalid options
//! make the command fail.

use anyhow::Result;
use clap::Args;
use log::info;

use checkout_semaphoreci2::github::{resolve_pull_request, GitHubClient};

use super::{environment, ConfigArgs};

/// Check if its a PR
#[derive(Args, Debug)]
pub struct IsPrArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Execute the `is-pr` command.
pub fn execute(args: IsPrArgs) -> Result<()> {
    let config = args.config.resolve(&environment());
    config.validate()?;

    let client = GitHubClient::new(&config.api_url, &config.github_token)?;
    match resolve_pull_request(&config, &client) {
        Ok(_) => info!("yes"),
        Err(e) if e.is_not_a_pull_request() => info!("{}", e),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
