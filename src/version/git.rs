// src/version/git.rs

//! Version fetcher that clones the repository with git

use super::{VERSION_SCRIPT, VersionFetcher};
use crate::config::GenerateConfig;
use crate::error::{Error, Result};
use crate::resolver::RepoRoot;
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Clones into a temporary directory and runs the version script there
#[derive(Debug, Clone)]
pub struct GitVersionFetcher {
    git: String,
    shell: String,
    script: String,
}

impl GitVersionFetcher {
    pub fn new(config: &GenerateConfig) -> Self {
        Self {
            git: config.git.clone(),
            shell: config.shell.clone(),
            script: VERSION_SCRIPT.to_string(),
        }
    }

    /// Replace the version script
    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = script.into();
        self
    }
}

impl VersionFetcher for GitVersionFetcher {
    fn fetch(&self, root: &RepoRoot) -> Result<String> {
        // Removed when dropped, whichever way this function returns
        let temp_dir = tempfile::Builder::new().prefix("genpkgbuild").tempdir()?;
        debug!("Cloning {} into {}", root.repo, temp_dir.path().display());

        let output = Command::new(&self.git)
            .args(["clone", "--quiet", "--", &root.repo])
            .arg(temp_dir.path())
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::Clone {
                repo: root.repo.clone(),
                stderr: format!("failed to run {}: {}", self.git, e),
            })?;

        if !output.status.success() {
            return Err(Error::Clone {
                repo: root.repo.clone(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(&self.script)
            .current_dir(temp_dir.path())
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::VersionCommand {
                stderr: format!("failed to run {}: {}", self.shell, e),
            })?;

        if !output.status.success() {
            return Err(Error::VersionCommand {
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if version.is_empty() {
            return Err(Error::VersionCommand {
                stderr: "version command printed nothing".to_string(),
            });
        }

        info!("Derived version {} for {}", version, root.root);
        Ok(version)
    }
}
