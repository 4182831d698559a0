// src/resolver/mod.rs

//! Repository root resolution for Go import paths
//!
//! Maps an import path such as `golang.org/x/tools/cmd/godoc` to the
//! repository that hosts it:
//!
//! ```text
//! import path ──> known host table ──> match ──> RepoRoot
//!      |                 |
//!      |            prefix matched but malformed ──> Error::Resolution
//!      v
//! go-get discovery (https://<path>?go-get=1, <meta name="go-import">)
//! ```
//!
//! Only git repositories can be turned into a PKGBUILD; `resolve_git_root`
//! enforces that on top of any `RootResolver`.

mod discovery;
mod hosts;

pub use discovery::{parse_go_import_metas, GoImport};
pub use hosts::match_known_host;

use crate::error::{Error, Result};
use reqwest::blocking::Client;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Version control system reported for a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VcsKind {
    Git,
    Mercurial,
    Subversion,
    Bazaar,
    Fossil,
}

impl VcsKind {
    /// The short command name used in import paths and go-import tags
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Git => "git",
            Self::Mercurial => "hg",
            Self::Subversion => "svn",
            Self::Bazaar => "bzr",
            Self::Fossil => "fossil",
        }
    }
}

impl fmt::Display for VcsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VcsKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "git" => Ok(Self::Git),
            "hg" => Ok(Self::Mercurial),
            "svn" => Ok(Self::Subversion),
            "bzr" => Ok(Self::Bazaar),
            "fossil" => Ok(Self::Fossil),
            other => Err(Error::UnsupportedVcs(other.to_string())),
        }
    }
}

/// A resolved repository root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRoot {
    /// URL to clone from
    pub repo: String,
    /// Version control system of the repository
    pub vcs: VcsKind,
    /// Import path corresponding to the root of the repository
    pub root: String,
}

impl RepoRoot {
    /// Last element of the root import path, used as the clone directory name
    pub fn base_name(&self) -> &str {
        base_name(&self.root)
    }

    /// Import path of `import_path` relative to the repository root
    ///
    /// Empty when `import_path` is the root itself.
    pub fn relative_path(&self, import_path: &str) -> Result<String> {
        if import_path == self.root {
            return Ok(String::new());
        }
        import_path
            .strip_prefix(self.root.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
            .map(|rest| rest.trim_end_matches('/').to_string())
            .ok_or_else(|| {
                Error::resolution(
                    import_path,
                    format!("not inside repository root {}", self.root),
                )
            })
    }
}

/// Something that can map an import path to its repository root
pub trait RootResolver {
    fn resolve(&self, import_path: &str) -> Result<RepoRoot>;
}

/// Resolve an import path and require the repository to be git
pub fn resolve_git_root<R: RootResolver + ?Sized>(
    resolver: &R,
    import_path: &str,
) -> Result<RepoRoot> {
    let root = resolver.resolve(import_path)?;
    if root.vcs != VcsKind::Git {
        return Err(Error::UnsupportedVcs(root.vcs.to_string()));
    }
    info!("Resolved {} to {} ({})", import_path, root.repo, root.root);
    Ok(root)
}

/// Resolver backed by the known host table and go-get discovery
pub struct GoImportResolver {
    client: Client,
}

impl GoImportResolver {
    /// Create a resolver whose discovery requests time out after `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("genpkgbuild/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::resolution("", format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    fn discover(&self, import_path: &str) -> Result<RepoRoot> {
        let url = format!("https://{}?go-get=1", import_path);
        debug!("Fetching go-import metadata from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| Error::resolution(import_path, format!("http fetch failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| Error::resolution(import_path, format!("failed to read {}: {}", url, e)))?;

        // Subpackage pages are often served as 404 with valid meta tags
        if !status.is_success() {
            debug!("{} returned {}", url, status);
        }

        discovery::select_import(import_path, &parse_go_import_metas(&body))
    }
}

impl RootResolver for GoImportResolver {
    fn resolve(&self, import_path: &str) -> Result<RepoRoot> {
        validate_import_path(import_path)?;

        if let Some(root) = match_known_host(import_path)? {
            debug!("{} matched a known host", import_path);
            return Ok(root);
        }

        self.discover(import_path)
    }
}

/// Reject import paths that cannot name a remote repository
pub fn validate_import_path(import_path: &str) -> Result<()> {
    if import_path.is_empty() {
        return Err(Error::resolution(import_path, "empty import path"));
    }
    if import_path.contains("://") {
        return Err(Error::resolution(
            import_path,
            "import path must not contain a URL scheme",
        ));
    }
    if import_path.starts_with('/') || import_path.ends_with('/') {
        return Err(Error::resolution(
            import_path,
            "import path must not start or end with a slash",
        ));
    }
    if import_path.split('/').any(|elem| elem.is_empty() || elem == "." || elem == "..") {
        return Err(Error::resolution(
            import_path,
            "import path contains an invalid path element",
        ));
    }
    let host = import_path.split('/').next().unwrap_or_default();
    if !host.contains('.') {
        return Err(Error::resolution(
            import_path,
            "import path does not begin with a hostname",
        ));
    }
    Ok(())
}

/// Last slash-separated element of an import path
pub fn base_name(import_path: &str) -> &str {
    import_path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(import_path)
}
