//! Shared test utilities for the CLI E2E tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new();
//!     fixture.command().arg("version").assert().success();
//! }
//! ```

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::Command as StdCommand;
use std::thread::{self, JoinHandle};

use assert_fs::prelude::*;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::{
        options, options_with_api, pull_request_json, ApiServer, GitFixture, TestFixture,
        UNREACHABLE_API,
    };
}

/// An API endpoint nothing listens on, so PR lookups fail fast.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:1";

/// All mandatory options, pointing the API at [`UNREACHABLE_API`].
pub fn options(branch: &str) -> Vec<String> {
    options_with_api(branch, UNREACHABLE_API)
}

/// All mandatory options with the GitHub API at `api_url`.
pub fn options_with_api(branch: &str, api_url: &str) -> Vec<String> {
    [
        ("--owner", "containous"),
        ("--repo", "traefik"),
        ("--github-token", "token"),
        ("--url", "https://github.com/containous/traefik.git"),
        ("--branch", branch),
        ("--sha", "0000000000000000000000000000000000000000"),
        ("--directory", "checkout"),
        ("--api-url", api_url),
    ]
    .iter()
    .flat_map(|(flag, value)| [flag.to_string(), value.to_string()])
    .collect()
}

/// A GitHub pull request payload with the given head and labels.
#[allow(dead_code)]
pub fn pull_request_json(number: u64, git_url: &str, head_ref: &str, labels: &[&str]) -> String {
    let labels: Vec<serde_json::Value> = labels
        .iter()
        .map(|name| serde_json::json!({ "id": 1, "name": name, "color": "ededed" }))
        .collect();
    serde_json::json!({
        "id": 900 + number,
        "number": number,
        "state": "open",
        "labels": labels,
        "head": {
            "ref": head_ref,
            "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
            "repo": { "full_name": "fork/traefik", "git_url": git_url }
        }
    })
    .to_string()
}

/// A GitHub API stand-in answering exactly one request with a canned
/// response. The raw request head is kept for assertions.
#[allow(dead_code)]
pub struct ApiServer {
    url: String,
    handle: JoinHandle<String>,
}

#[allow(dead_code)]
impl ApiServer {
    /// Serve `body` as JSON with the given status line, e.g. `"200 OK"`.
    pub fn respond(status: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test server");
        let url = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("No request received");
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut head = String::new();
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
                head.push_str(&line);
            }
            stream.write_all(response.as_bytes()).unwrap();
            head
        });

        Self { url, handle }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The request head that was received, lowercased for header matching.
    pub fn received(self) -> String {
        self.handle
            .join()
            .expect("Test server panicked")
            .to_lowercase()
    }
}

/// A temporary working directory for running the binary in.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a command running in this fixture's directory with a clean
    /// environment, so no Semaphore or GitHub variables leak in.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("checkout-semaphoreci2");
        cmd.current_dir(self.path()).env_clear();
        if let Some(path) = std::env::var_os("PATH") {
            cmd.env("PATH", path);
        }
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A local git repository with two commits: `first.txt` on `main` and
/// `second.txt` on top of it on branch `topic`.
#[allow(dead_code)]
pub struct GitFixture {
    temp_dir: assert_fs::TempDir,
    pub first_commit: String,
    pub second_commit: String,
}

#[allow(dead_code)]
impl GitFixture {
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        let repo = temp_dir.path();

        git(repo, &["init", "--quiet"]);
        git(repo, &["symbolic-ref", "HEAD", "refs/heads/main"]);
        temp_dir.child("first.txt").write_str("first").unwrap();
        git(repo, &["add", "first.txt"]);
        git(repo, &["commit", "--quiet", "-m", "first"]);
        let first_commit = git(repo, &["rev-parse", "HEAD"]);

        git(repo, &["checkout", "--quiet", "-b", "topic"]);
        temp_dir.child("second.txt").write_str("second").unwrap();
        git(repo, &["add", "second.txt"]);
        git(repo, &["commit", "--quiet", "-m", "second"]);
        let second_commit = git(repo, &["rev-parse", "HEAD"]);

        Self {
            temp_dir,
            first_commit,
            second_commit,
        }
    }

    pub fn url(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }
}

fn git(dir: &Path, args: &[&str]) -> String {
    let output = StdCommand::new("git")
        .current_dir(dir)
        .args([
            "-c",
            "user.name=Test",
            "-c",
            "user.email=test@example.com",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_options_cover_every_mandatory_flag() {
        let opts = options("master");
        for flag in [
            "--owner",
            "--repo",
            "--github-token",
            "--url",
            "--branch",
            "--sha",
            "--directory",
        ] {
            assert!(opts.iter().any(|o| o == flag), "missing {}", flag);
        }
    }
}
