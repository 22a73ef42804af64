//! # CLI Command Implementations
//!
//! Each subcommand lives in its own file with an `Args` struct derived
//! using `clap` and an `execute` function. The default command (no
//! subcommand) is the checkout itself.
//!
//! All commands except `version` share [`ConfigArgs`]. Options left out on
//! the command line are filled from the job environment by
//! `Config::resolve`, which receives a snapshot taken by [`environment`].

pub mod checkout;
pub mod has_label;
pub mod is_pr;
pub mod version;

use clap::Args;

use checkout_semaphoreci2::config::{Config, Environment};

// Options shared by the checkout, `is-pr` and `has-label` commands
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Repository owner
    #[arg(long, value_name = "OWNER")]
    pub owner: Option<String>,

    /// Repository name
    #[arg(long, value_name = "REPO")]
    pub repo: Option<String>,

    /// Github Token [fallback: GITHUB_TOKEN]
    #[arg(long, alias = "githubtoken", value_name = "TOKEN")]
    pub github_token: Option<String>,

    /// The URL of the GitHub repository used in the current Semaphore 2.0 project [fallback: SEMAPHORE_GIT_BRANCH]
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// The name of the GitHub branch that is used in the current job [fallback: SEMAPHORE_GIT_BRANCH]
    #[arg(long, value_name = "BRANCH")]
    pub branch: Option<String>,

    /// The current revision of code that the pipeline is using [fallback: SEMAPHORE_GIT_SHA]
    #[arg(long, value_name = "SHA")]
    pub sha: Option<String>,

    /// Name of the directory that contains the files of the GitHub repository of the current Semaphore 2.0 project [fallback: SEMAPHORE_GIT_DIR]
    #[arg(long, value_name = "DIR")]
    pub directory: Option<String>,

    /// Base URL of the GitHub API [fallback: GITHUB_API_URL, default: https://api.github.com]
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,
}

impl ConfigArgs {
    /// True when any option was passed on the command line.
    pub fn is_given(&self) -> bool {
        [
            &self.owner,
            &self.repo,
            &self.github_token,
            &self.url,
            &self.branch,
            &self.sha,
            &self.directory,
            &self.api_url,
        ]
        .iter()
        .any(|value| value.is_some())
    }

    /// Converts the parsed flags into a config resolved against `env`.
    pub fn resolve(self, env: &Environment) -> Config {
        Config {
            owner: self.owner.unwrap_or_default(),
            repo: self.repo.unwrap_or_default(),
            github_token: self.github_token.unwrap_or_default(),
            url: self.url.unwrap_or_default(),
            branch: self.branch.unwrap_or_default(),
            sha: self.sha.unwrap_or_default(),
            directory: self.directory.unwrap_or_default(),
            api_url: self.api_url.unwrap_or_default(),
        }
        .resolve(env)
    }
}

/// Snapshot of the process environment. Non-UTF-8 entries are skipped.
pub fn environment() -> Environment {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}
