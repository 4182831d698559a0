// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use genpkgbuild::{Error, Prompter, RepoRoot, Result, RootResolver, VcsKind, VersionFetcher};
use std::io::Cursor;

/// Resolver that always answers with the same repository root
pub struct FakeResolver {
    pub root: RepoRoot,
}

impl FakeResolver {
    pub fn git(root: &str) -> Self {
        Self::with_vcs(root, VcsKind::Git)
    }

    pub fn with_vcs(root: &str, vcs: VcsKind) -> Self {
        Self {
            root: RepoRoot {
                repo: format!("https://{}", root),
                vcs,
                root: root.to_string(),
            },
        }
    }
}

impl RootResolver for FakeResolver {
    fn resolve(&self, _import_path: &str) -> Result<RepoRoot> {
        Ok(self.root.clone())
    }
}

/// Resolver that always fails
pub struct FailingResolver;

impl RootResolver for FailingResolver {
    fn resolve(&self, import_path: &str) -> Result<RepoRoot> {
        Err(Error::resolution(import_path, "unrecognized import path"))
    }
}

/// Fetcher that returns a fixed version or a fixed error message
pub struct FakeFetcher {
    pub outcome: std::result::Result<String, String>,
}

impl FakeFetcher {
    pub fn version(version: &str) -> Self {
        Self {
            outcome: Ok(version.to_string()),
        }
    }

    pub fn failing(stderr: &str) -> Self {
        Self {
            outcome: Err(stderr.to_string()),
        }
    }
}

impl VersionFetcher for FakeFetcher {
    fn fetch(&self, _root: &RepoRoot) -> Result<String> {
        match &self.outcome {
            Ok(version) => Ok(version.clone()),
            Err(stderr) => Err(Error::VersionCommand {
                stderr: stderr.clone(),
            }),
        }
    }
}

/// In-memory prompter fed with the given terminal input
pub type MemoryPrompter = Prompter<Cursor<Vec<u8>>, Vec<u8>>;

pub fn prompter(input: &str) -> MemoryPrompter {
    Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

/// Everything written to the fake terminal
pub fn terminal_output(prompter: MemoryPrompter) -> String {
    let (_, out) = prompter.into_parts();
    String::from_utf8(out).unwrap()
}
