//! Branch name classification.
//!
//! Semaphore 2.0 names the branch of a pull request build `pull-request-<N>`,
//! where `N` is the pull request number. Everything else is an ordinary
//! branch.

use std::sync::LazyLock;

use regex::Regex;

static PULL_REQUEST_BRANCH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^pull-request-([0-9]+)$").expect("valid regex"));

/// What a job should check out, as decided from its branch name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutMode {
    /// Resolve the pull request head through the GitHub API.
    PullRequest(u64),
    /// Check out the branch directly.
    Branch(String),
}

impl CheckoutMode {
    pub fn from_branch(branch: &str) -> Self {
        match parse_pull_request_number(branch) {
            Some(number) => CheckoutMode::PullRequest(number),
            None => CheckoutMode::Branch(branch.to_string()),
        }
    }
}

/// Extracts `N` from `pull-request-<N>`.
///
/// Returns `None` unless `N` is a positive integer that fits in a `u64`.
pub fn parse_pull_request_number(branch: &str) -> Option<u64> {
    let captures = PULL_REQUEST_BRANCH.captures(branch)?;
    let number: u64 = captures[1].parse().ok()?;
    (number > 0).then_some(number)
}
