// src/config.rs

//! Runtime configuration for a generation run
//!
//! There are no config files; the CLI fills in a `GenerateConfig` and the
//! rest of the pipeline reads from it.

use std::path::PathBuf;
use std::time::Duration;

/// Output path meaning "write to standard output"
pub const STDOUT_MARKER: &str = "-";

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "PKGBUILD";

/// Default controlling terminal device
pub const DEFAULT_TTY: &str = "/dev/tty";

/// Default timeout for go-get discovery requests (30 seconds)
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Tunables for a single generation run
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Output path, or `-` for stdout
    pub output: String,
    /// Terminal device used for prompts
    pub tty: PathBuf,
    /// git executable used to clone the repository
    pub git: String,
    /// Shell used to run the version script
    pub shell: String,
    /// Timeout for HTTP requests made while resolving the import path
    pub http_timeout: Duration,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output: DEFAULT_OUTPUT.to_string(),
            tty: PathBuf::from(DEFAULT_TTY),
            git: "git".to_string(),
            shell: "bash".to_string(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

impl GenerateConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output path
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    /// Set the terminal device
    pub fn with_tty(mut self, tty: impl Into<PathBuf>) -> Self {
        self.tty = tty.into();
        self
    }

    /// Set the git executable
    pub fn with_git(mut self, git: impl Into<String>) -> Self {
        self.git = git.into();
        self
    }

    /// Set the shell used for the version script
    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    /// Set the HTTP timeout
    pub fn with_http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }
}
