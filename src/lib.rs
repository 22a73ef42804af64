//! # checkout-semaphoreci2
//!
//! Source checkout for Semaphore 2.0 jobs that knows about GitHub pull
//! requests.
//!
//! Semaphore names pull request builds `pull-request-<N>`. A plain
//! `git clone` of that name is useless, because the code lives on the PR's
//! head branch, often in a fork. This library resolves such branch names
//! through the GitHub API and checks out the head repository instead.
//! Every other branch is checked out directly.
//!
//! ## Quick Example
//!
//! ```
//! use checkout_semaphoreci2::branch::{CheckoutMode, parse_pull_request_number};
//! use checkout_semaphoreci2::github::make_repository_url;
//!
//! assert_eq!(parse_pull_request_number("pull-request-12"), Some(12));
//! assert_eq!(CheckoutMode::from_branch("main"), CheckoutMode::Branch("main".into()));
//! assert_eq!(
//!     make_repository_url("git://github.com/o/r.git", "TOKEN"),
//!     "https://TOKEN@github.com/o/r.git"
//! );
//! ```
//!
//! ## Modules
//!
//! - **`config`**: Options and their Semaphore environment fallbacks.
//! - **`branch`**: Decides whether a branch designates a pull request.
//! - **`github`**: Pull request lookup, label checks and clone URL rewriting.
//! - **`git`**: The `git` subprocess wrapper behind the `GitOperations` trait.
//! - **`checkout`**: Resolves a `CheckoutRequest` and executes it.
//! - **`version`**: Build information.

pub mod branch;
pub mod checkout;
pub mod config;
pub mod error;
pub mod git;
pub mod github;
pub mod version;
