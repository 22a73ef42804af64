//! # Checkout
//!
//! Turns a resolved [`Config`] into a [`CheckoutRequest`] and carries it out.
//!
//! ## Resolution
//!
//! - A branch named `pull-request-<N>` is looked up through the GitHub API.
//!   The request targets the PR's head repository (its `git://` URL
//!   rewritten to HTTPS with the token) and the PR's head ref.
//! - Any other branch targets the configured `url` and the branch itself.
//!
//! In both cases the request resets to the configured `sha`.
//!
//! ## Execution
//!
//! 1. Remove the target directory if anything exists at that path.
//! 2. `git clone` the repository URL into it.
//! 3. `git checkout` the ref.
//! 4. `git reset --hard` to the commit.
//!
//! The first failing step aborts the run. Whatever was already written to
//! disk stays there.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::branch::CheckoutMode;
use crate::config::Config;
use crate::error::Result;
use crate::git::{redact_credentials, GitOperations};
use crate::github::{make_repository_url, resolve_pull_request, PullRequestSource};

/// A fully resolved checkout target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub repository_url: String,
    /// Absolute path of the working copy.
    pub directory: PathBuf,
    pub r#ref: String,
    pub commit: String,
}

impl CheckoutRequest {
    /// Creates a request whose directory is `directory` resolved against `base_dir`.
    pub fn new(
        repository_url: impl Into<String>,
        base_dir: &Path,
        directory: &str,
        r#ref: impl Into<String>,
        commit: impl Into<String>,
    ) -> Self {
        Self {
            repository_url: repository_url.into(),
            directory: base_dir.join(directory),
            r#ref: r#ref.into(),
            commit: commit.into(),
        }
    }
}

/// Works out what to check out for `config`.
///
/// Only PR branches touch `source`.
pub fn resolve_request(
    config: &Config,
    base_dir: &Path,
    source: &dyn PullRequestSource,
) -> Result<CheckoutRequest> {
    match CheckoutMode::from_branch(&config.branch) {
        CheckoutMode::PullRequest(number) => {
            let pr = resolve_pull_request(config, source)?;
            let (git_url, head_ref) = pr.head_target()?;
            info!("Checking out PR #{} ({})", number, head_ref);
            Ok(CheckoutRequest::new(
                make_repository_url(git_url, &config.github_token),
                base_dir,
                &config.directory,
                head_ref,
                &config.sha,
            ))
        }
        CheckoutMode::Branch(branch) => Ok(CheckoutRequest::new(
            &config.url,
            base_dir,
            &config.directory,
            branch,
            &config.sha,
        )),
    }
}

/// Clones, checks out and hard-resets according to `request`.
pub fn execute(git: &dyn GitOperations, request: &CheckoutRequest) -> Result<()> {
    remove_existing(&request.directory)?;

    info!(
        "Cloning {} into {}",
        redact_credentials(&request.repository_url),
        request.directory.display()
    );
    log_output(&git.clone_repository(&request.repository_url, &request.directory)?);
    log_output(&git.checkout_ref(&request.directory, &request.r#ref)?);
    log_output(&git.hard_reset(&request.directory, &request.commit)?);

    Ok(())
}

/// Resolves and executes a checkout in one go.
pub fn checkout(
    config: &Config,
    base_dir: &Path,
    source: &dyn PullRequestSource,
    git: &dyn GitOperations,
) -> Result<()> {
    let request = resolve_request(config, base_dir, source)?;
    execute(git, &request)
}

fn remove_existing(path: &Path) -> Result<()> {
    // symlink_metadata: a dangling link still counts as something to remove
    let Ok(metadata) = fs::symlink_metadata(path) else {
        return Ok(());
    };

    info!("Removing existing {}", path.display());
    if metadata.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(())
}

fn log_output(output: &str) {
    let output = output.trim_end();
    if !output.is_empty() {
        info!("{}", output);
    }
}
