//! # Has-Label Command Implementation
//!
//! Succeeds when the pull request behind the configured branch carries
//! `--label`, and fails with "PR has no label <label>" when it does not.
//! A branch that is not a resolvable pull request is logged and succeeds,
//! so pipelines can gate PR-only steps on this command.

use anyhow::Result;
use clap::Args;
use log::info;

use checkout_semaphoreci2::config::HasLabelConfig;
use checkout_semaphoreci2::github::{require_label, resolve_pull_request, GitHubClient};

use super::{environment, ConfigArgs};

/// Check if PR has label
#[derive(Args, Debug)]
pub struct HasLabelArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Required label
    #[arg(long, value_name = "LABEL")]
    pub label: Option<String>,
}

/// Execute the `has-label` command.
pub fn execute(args: HasLabelArgs) -> Result<()> {
    let env = environment();
    let options = HasLabelConfig {
        config: args.config.resolve(&env),
        label: args.label.unwrap_or_default(),
    };
    options.validate()?;

    let client = GitHubClient::new(&options.config.api_url, &options.config.github_token)?;
    let pr = match resolve_pull_request(&options.config, &client) {
        Ok(pr) => pr,
        Err(e) if e.is_not_a_pull_request() => {
            info!("{}", e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    require_label(&pr, &options.label)?;
    info!("yes");
    Ok(())
}
