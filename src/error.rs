//! # Error Handling
//!
//! This module defines the error type shared by every part of the
//! `checkout-semaphoreci2` library. It uses `thiserror` to derive a single
//! `Error` enum whose variants map onto the failure modes of a checkout run:
//!
//! - Missing mandatory options (`MissingOption`).
//! - A branch that does not resolve to a pull request (`NotAPullRequest`).
//!   This one is deliberately coarse: an unparsable branch name, a network
//!   failure and a 404 from the API all end up here.
//! - A pull request without a head repository (`MissingPullRequestHead`).
//! - A pull request lacking the requested label (`MissingLabel`).
//! - A failed `git` invocation (`GitCommand`), carrying the tool's output
//!   verbatim.
//! - I/O and HTTP client errors.
//!
//! The `Result<T>` alias is used throughout the library.

use thiserror::Error;

/// Main error type for checkout operations
#[derive(Error, Debug)]
pub enum Error {
    /// A required option was empty after environment fallbacks were applied.
    #[error("option {name} is mandatory")]
    MissingOption { name: String },

    /// The branch does not designate a pull request that could be resolved.
    ///
    /// Commands treat this as a non-fatal outcome.
    #[error("It's not a PR: {reason}")]
    NotAPullRequest { branch: String, reason: String },

    /// The pull request was fetched but carries no head repository.
    #[error("unable to get head of PR {number}")]
    MissingPullRequestHead { number: u64 },

    /// The pull request does not carry the requested label.
    #[error("PR has no label {label}")]
    MissingLabel { label: String },

    /// A `git` subcommand exited unsuccessfully.
    ///
    /// `output` is whatever git printed, untouched.
    #[error("failed to {action}: {output}")]
    GitCommand { action: String, output: String },

    /// The configured API endpoint is not a valid URL.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// An HTTP client error, wrapped from `reqwest::Error`.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true for the "not a PR" outcome that commands log and swallow.
    pub fn is_not_a_pull_request(&self) -> bool {
        matches!(self, Error::NotAPullRequest { .. })
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
