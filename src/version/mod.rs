// src/version/mod.rs

//! Version derivation for VCS packages
//!
//! The version of a `-git` package is derived from the repository history:
//! the nearest tag plus commit distance and short hash when a tag is
//! reachable, `r<commit-count>.<short-hash>` otherwise. The same shell
//! pipeline is embedded in the generated `pkgver()` function, so the
//! version written now and the one makepkg computes later agree.
//!
//! Fetching runs on a background thread while the user answers prompts:
//!
//! ```text
//! spawn_version_fetch(fetcher, root) ──> VersionFetch
//!        |                                   |
//!   (prompting)                              |
//!        v                                   v
//!   VersionFetch::wait() <── Result<String> (consumed once)
//! ```

mod git;

pub use git::GitVersionFetcher;

use crate::error::{Error, Result};
use crate::resolver::RepoRoot;
use std::thread::{self, JoinHandle};
use tracing::debug;

/// Shell pipeline that prints the package version of the repository in the
/// current directory
pub const VERSION_SCRIPT: &str = r#"set -o pipefail
git describe --long --tags 2>/dev/null | sed 's/\([^-]*-g\)/r\1/;s/-/./g' ||
printf "r%s.%s" "$(git rev-list --count HEAD)" "$(git rev-parse --short HEAD)""#;

/// Something that can compute the version of a repository
pub trait VersionFetcher {
    fn fetch(&self, root: &RepoRoot) -> Result<String>;
}

/// Handle to a version fetch running on a background thread
pub struct VersionFetch {
    handle: JoinHandle<Result<String>>,
}

impl VersionFetch {
    /// Block until the fetch finishes and take its result
    pub fn wait(self) -> Result<String> {
        match self.handle.join() {
            Ok(result) => result,
            Err(_) => Err(Error::VersionCommand {
                stderr: "version fetch thread panicked".to_string(),
            }),
        }
    }
}

/// Start fetching the version of `root` on a background thread
pub fn spawn_version_fetch<F>(fetcher: F, root: RepoRoot) -> Result<VersionFetch>
where
    F: VersionFetcher + Send + 'static,
{
    let handle = thread::Builder::new()
        .name("version-fetch".to_string())
        .spawn(move || {
            debug!("Version fetch started for {}", root.repo);
            let result = fetcher.fetch(&root);
            debug!("Version fetch finished for {}", root.repo);
            result
        })?;

    Ok(VersionFetch { handle })
}
