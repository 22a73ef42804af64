//! # Version Command Implementation
//!
//! Prints the build banner. `--version` prints only the package version.

use anyhow::Result;

use checkout_semaphoreci2::version::BuildInfo;

/// Execute the `version` command.
pub fn execute() -> Result<()> {
    print!("{}", BuildInfo::current());
    Ok(())
}
