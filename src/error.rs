// src/error.rs

//! Error types for genpkgbuild
//!
//! Every failure in the pipeline is terminal for the run, so there is a single
//! error enum and nothing recovers locally. `Usage` is kept as a distinct
//! variant so the binary can decide whether to print the usage text.

use thiserror::Error;

/// Result type for genpkgbuild operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The command line was missing a required argument
    #[error("{0}")]
    Usage(String),

    /// The controlling terminal could not be opened
    #[error("could not open TTY {path}: {source}")]
    TerminalUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The output file already exists or could not be created
    #[error("could not create output file {path}: {source}")]
    Destination {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The import path could not be mapped to a repository
    #[error("can't get root repo for the import path {import_path}: {reason}")]
    Resolution { import_path: String, reason: String },

    /// The repository uses a version control system other than git
    #[error("sorry, repositories other than git are not supported yet: {0}")]
    UnsupportedVcs(String),

    /// `git clone` exited unsuccessfully
    #[error("could not clone the repo {repo}: {stderr}")]
    Clone { repo: String, stderr: String },

    /// The version derivation command exited unsuccessfully
    #[error("version command failed: {stderr}")]
    VersionCommand { stderr: String },

    /// Reading an answer from the terminal failed
    #[error("input error: {0}")]
    Input(String),

    /// Rendering or writing the PKGBUILD failed
    #[error("could not render PKGBUILD: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a resolution error for an import path
    pub fn resolution(import_path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Resolution {
            import_path: import_path.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error should be followed by the usage text
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}
