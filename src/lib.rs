// src/lib.rs

//! genpkgbuild
//!
//! Generates Arch Linux PKGBUILDs for Go applications hosted in git, starting
//! from nothing but the import path.
//!
//! # Architecture
//!
//! - Resolver: import path to repository URL and root import path
//! - Version: clone on a background thread, derive `r<N>.<hash>` style versions
//! - Prompt: ask naming questions on the controlling terminal
//! - Recipe: render the fixed PKGBUILD template

pub mod config;
mod error;
pub mod generate;
pub mod output;
pub mod prompt;
pub mod recipe;
pub mod resolver;
pub mod version;

pub use config::GenerateConfig;
pub use error::{Error, Result};
pub use generate::generate;
pub use output::Destination;
pub use prompt::{Prompter, TtyPrompter};
pub use recipe::PkgbuildData;
pub use resolver::{GoImportResolver, RepoRoot, RootResolver, VcsKind};
pub use version::{GitVersionFetcher, VersionFetcher};
