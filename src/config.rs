//! # Configuration Resolution
//!
//! A checkout run is driven by a handful of plain string options. Any option
//! left empty on the command line falls back to a variable from the
//! Semaphore 2.0 job environment:
//!
//! | Option         | Environment fallback     |
//! |----------------|--------------------------|
//! | `url`          | `SEMAPHORE_GIT_BRANCH`   |
//! | `branch`       | `SEMAPHORE_GIT_BRANCH`   |
//! | `directory`    | `SEMAPHORE_GIT_DIR`      |
//! | `sha`          | `SEMAPHORE_GIT_SHA`      |
//! | `github_token` | `GITHUB_TOKEN`           |
//! | `api_url`      | `GITHUB_API_URL`         |
//!
//! `url` reads the branch variable rather than a URL variable. Existing
//! pipelines depend on that, so it stays.
//!
//! Resolution never reads the process environment directly. Callers pass an
//! [`Environment`] snapshot, which keeps resolution deterministic under test.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// A snapshot of environment variables, keyed by name.
pub type Environment = HashMap<String, String>;

pub const ENV_GIT_BRANCH: &str = "SEMAPHORE_GIT_BRANCH";
pub const ENV_GIT_DIR: &str = "SEMAPHORE_GIT_DIR";
pub const ENV_GIT_SHA: &str = "SEMAPHORE_GIT_SHA";
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_GITHUB_API_URL: &str = "GITHUB_API_URL";

/// Public GitHub REST endpoint, used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Options shared by every checkout command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// GitHub token used for the API and injected into clone URLs
    pub github_token: String,
    /// The URL of the GitHub repository used in the current Semaphore 2.0 project
    pub url: String,
    /// The name of the GitHub branch that is used in the current job
    pub branch: String,
    /// The current revision of code that the pipeline is using
    pub sha: String,
    /// Directory, relative to the working directory, that receives the checkout
    pub directory: String,
    /// Base URL of the GitHub REST API
    pub api_url: String,
}

impl Config {
    /// Fills every empty option from `env`, returning the resolved config.
    pub fn resolve(mut self, env: &Environment) -> Self {
        fallback(&mut self.url, env, ENV_GIT_BRANCH);
        fallback(&mut self.branch, env, ENV_GIT_BRANCH);
        fallback(&mut self.directory, env, ENV_GIT_DIR);
        fallback(&mut self.sha, env, ENV_GIT_SHA);
        fallback(&mut self.github_token, env, ENV_GITHUB_TOKEN);
        fallback(&mut self.api_url, env, ENV_GITHUB_API_URL);
        if self.api_url.is_empty() {
            self.api_url = DEFAULT_API_URL.to_string();
        }
        self
    }

    /// Checks mandatory options, reporting the first one that is empty.
    pub fn validate(&self) -> Result<()> {
        required(&self.owner, "owner")?;
        required(&self.repo, "repo")?;
        required(&self.url, "url")?;
        required(&self.branch, "branch")?;
        required(&self.sha, "sha")?;
        required(&self.directory, "directory")?;
        required(&self.github_token, "githubtoken")
    }
}

/// Options for the `has-label` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HasLabelConfig {
    pub config: Config,
    /// Required label
    pub label: String,
}

impl HasLabelConfig {
    pub fn validate(&self) -> Result<()> {
        self.config.validate()?;
        required(&self.label, "label")
    }
}

/// Fails with "option `name` is mandatory" when `value` is empty.
pub fn required(value: &str, name: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::MissingOption {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn fallback(field: &mut String, env: &Environment, key: &str) {
    if field.is_empty() {
        if let Some(value) = env.get(key) {
            *field = value.clone();
        }
    }
}
