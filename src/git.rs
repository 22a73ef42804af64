//! # Git Invocation
//!
//! Checkout shells out to the system `git` binary, which brings along
//! whatever credential helpers, SSH keys and `~/.gitconfig` the CI image
//! has configured.
//!
//! Every operation takes the directory it acts on explicitly and runs git
//! with that directory as the child's working directory, so the tool never
//! changes its own.

use std::path::Path;
use std::process::Command;

use log::debug;
use url::Url;

use crate::error::{Error, Result};

/// Trait for git operations - allows mocking in tests
///
/// Each method returns git's output on success. On failure the output is
/// carried in [`Error::GitCommand`].
pub trait GitOperations {
    /// Clones `url` into `target_dir`.
    fn clone_repository(&self, url: &str, target_dir: &Path) -> Result<String>;

    /// Checks out `ref_name` inside the clone at `repo_dir`.
    fn checkout_ref(&self, repo_dir: &Path, ref_name: &str) -> Result<String>;

    /// Hard-resets the clone at `repo_dir` to `commit`.
    fn hard_reset(&self, repo_dir: &Path, commit: &str) -> Result<String>;
}

/// `GitOperations` backed by the `git` executable on `PATH`.
pub struct SystemGit;

impl GitOperations for SystemGit {
    fn clone_repository(&self, url: &str, target_dir: &Path) -> Result<String> {
        let mut command = Command::new("git");
        command.arg("clone").arg(url).arg(target_dir);
        run(
            command,
            format!(
                "clone url {} in {}",
                redact_credentials(url),
                target_dir.display()
            ),
        )
    }

    fn checkout_ref(&self, repo_dir: &Path, ref_name: &str) -> Result<String> {
        let mut command = Command::new("git");
        command.current_dir(repo_dir).args(["checkout", ref_name]);
        run(command, format!("checkout {}", ref_name))
    }

    fn hard_reset(&self, repo_dir: &Path, commit: &str) -> Result<String> {
        let mut command = Command::new("git");
        command.current_dir(repo_dir).args(["reset", "--hard", commit]);
        run(command, format!("reset to SHA {}", commit))
    }
}

/// Runs a prepared git command, merging stdout and stderr into one string.
fn run(mut command: Command, action: String) -> Result<String> {
    debug!("git {}", action);

    let output = command.output()?;

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    if !output.status.success() {
        return Err(Error::GitCommand {
            action,
            output: text,
        });
    }

    Ok(text)
}

/// Masks the userinfo part of a URL so tokens do not reach the logs.
pub fn redact_credentials(url: &str) -> String {
    match Url::parse(url) {
        Ok(mut parsed) if !parsed.username().is_empty() || parsed.password().is_some() => {
            // Only fails for URLs that cannot carry credentials at all.
            let _ = parsed.set_username("***");
            let _ = parsed.set_password(None);
            parsed.to_string()
        }
        _ => url.to_string(),
    }
}
