//! # Checkout Command Implementation
//!
//! The default command. It resolves the configured branch to a checkout
//! target and clones it into `directory` under the current working
//! directory.
//!
//! A `pull-request-<N>` branch that cannot be resolved is logged as
//! "It's not a PR" and the command succeeds without cloning anything.

use anyhow::Result;
use log::info;

use checkout_semaphoreci2::checkout;
use checkout_semaphoreci2::git::SystemGit;
use checkout_semaphoreci2::github::GitHubClient;

use super::{environment, ConfigArgs};

/// Execute the checkout.
pub fn execute(args: ConfigArgs) -> Result<()> {
    let config = args.resolve(&environment());
    config.validate()?;

    let base_dir = std::env::current_dir()?;
    let client = GitHubClient::new(&config.api_url, &config.github_token)?;

    match checkout::checkout(&config, &base_dir, &client, &SystemGit) {
        Err(e) if e.is_not_a_pull_request() => {
            info!("{}", e);
            Ok(())
        }
        result => Ok(result?),
    }
}
