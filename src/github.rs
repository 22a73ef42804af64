//! # GitHub Pull Request Lookup
//!
//! Pull request builds only know the PR number. Checking one out means
//! asking the GitHub REST API where the head of that PR lives, since the
//! head may sit on a fork rather than on the project repository.
//!
//! The lookup is hidden behind [`PullRequestSource`] so the rest of the
//! crate can be exercised without a network. [`GitHubClient`] is the real
//! implementation, a blocking `reqwest` client issuing a single
//! `GET /repos/{owner}/{repo}/pulls/{number}` per run.

use log::debug;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use url::Url;

use crate::branch::parse_pull_request_number;
use crate::config::Config;
use crate::error::{Error, Result};

const USER_AGENT: &str = concat!("checkout-semaphoreci2/", env!("CARGO_PKG_VERSION"));
const GITHUB_JSON: &str = "application/vnd.github+json";

/// The subset of the GitHub pull request payload this tool reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    #[serde(default)]
    pub head: Option<PullRequestHead>,
    #[serde(default)]
    pub labels: Vec<Label>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PullRequestHead {
    #[serde(rename = "ref")]
    pub ref_name: String,
    /// `None` when the source repository of the PR has been deleted.
    #[serde(default)]
    pub repo: Option<HeadRepository>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HeadRepository {
    #[serde(default)]
    pub git_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Label {
    pub name: String,
}

impl PullRequest {
    /// Returns the head repository URL and head ref of the PR.
    pub fn head_target(&self) -> Result<(&str, &str)> {
        match &self.head {
            Some(PullRequestHead {
                ref_name,
                repo: Some(repo),
            }) => Ok((repo.git_url.as_str(), ref_name.as_str())),
            _ => Err(Error::MissingPullRequestHead {
                number: self.number,
            }),
        }
    }
}

/// Trait for pull request lookups - allows mocking in tests
pub trait PullRequestSource {
    fn fetch(&self, owner: &str, repo: &str, number: u64) -> Result<PullRequest>;
}

/// Blocking GitHub REST client authenticated with a token.
pub struct GitHubClient {
    client: reqwest::blocking::Client,
    /// Parsed on first use, so a bad value only matters for PR lookups.
    api_url: String,
    token: String,
}

impl GitHubClient {
    pub fn new(api_url: &str, token: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.to_string(),
            token: token.to_string(),
        })
    }

    /// Builds `{api_url}/repos/{owner}/{repo}/pulls/{number}`.
    fn pull_request_url(&self, owner: &str, repo: &str, number: u64) -> Result<Url> {
        let mut endpoint = Url::parse(&self.api_url)?;
        endpoint
            .path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(["repos", owner, repo, "pulls", &number.to_string()]);
        Ok(endpoint)
    }
}

impl PullRequestSource for GitHubClient {
    fn fetch(&self, owner: &str, repo: &str, number: u64) -> Result<PullRequest> {
        let endpoint = self.pull_request_url(owner, repo, number)?;
        debug!("Fetching PR #{} from {}", number, endpoint);

        let pull_request = self
            .client
            .get(endpoint)
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_JSON)
            .send()?
            .error_for_status()?
            .json()?;

        Ok(pull_request)
    }
}

/// Resolves the job's branch to a pull request.
///
/// Any failure, whether the branch is not PR-shaped or the API call fails for
/// whatever reason, is reported as [`Error::NotAPullRequest`].
pub fn resolve_pull_request(config: &Config, source: &dyn PullRequestSource) -> Result<PullRequest> {
    let not_a_pr = |reason: String| Error::NotAPullRequest {
        branch: config.branch.clone(),
        reason,
    };

    let number = parse_pull_request_number(&config.branch).ok_or_else(|| {
        not_a_pr(format!(
            "unable to get PR number for branch {}",
            config.branch
        ))
    })?;

    source
        .fetch(&config.owner, &config.repo, number)
        .map_err(|e| not_a_pr(format!("unable to fetch PR {}: {}", number, e)))
}

/// Case-sensitive exact match against the PR's label names.
pub fn has_label(pr: &PullRequest, label: &str) -> bool {
    pr.labels.iter().any(|l| l.name == label)
}

/// Fails with [`Error::MissingLabel`] unless the PR carries `label`.
pub fn require_label(pr: &PullRequest, label: &str) -> Result<()> {
    if has_label(pr, label) {
        Ok(())
    } else {
        Err(Error::MissingLabel {
            label: label.to_string(),
        })
    }
}

/// Rewrites `git://` URLs to HTTPS, embedding `token` as the credential
/// when one is given. URLs in any other scheme come back unchanged.
pub fn make_repository_url(url: &str, token: &str) -> String {
    let prefix = if token.is_empty() {
        "https://".to_string()
    } else {
        format!("https://{}@", token)
    };
    url.replace("git://", &prefix)
}
