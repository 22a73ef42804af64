//! Build information shown by the `version` command.
//!
//! `GIT_COMMIT` and `BUILD_DATE` are read from the build environment, so a
//! release pipeline can stamp them with
//! `GIT_COMMIT=$(git rev-parse HEAD) BUILD_DATE=$(date -u) cargo build --release`.

use std::fmt;

const UNKNOWN: &str = "I don't remember exactly";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: &'static str,
    pub date: &'static str,
    pub os: &'static str,
    pub arch: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            commit: option_env!("GIT_COMMIT").unwrap_or(UNKNOWN),
            date: option_env!("BUILD_DATE").unwrap_or(UNKNOWN),
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "checkout-semaphoreci2:")?;
        writeln!(f, " version     : {}", self.version)?;
        writeln!(f, " commit      : {}", self.commit)?;
        writeln!(f, " build date  : {}", self.date)?;
        writeln!(f, " platform    : {}/{}", self.os, self.arch)
    }
}
