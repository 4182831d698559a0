// src/generate.rs

//! The generation pipeline
//!
//! ```text
//! resolve import path ──> spawn version fetch ─────────────┐
//!                              |                           |
//!                    prompt: package name                  |
//!                    prompt: dependencies                  | (background)
//!                    relative sub-path                     |
//!                    prompt: binary name                   |
//!                              |                           |
//!                         wait for fetch <─────────────────┘
//!                              |
//!                         render PKGBUILD
//! ```
//!
//! Any failure ends the run. A fetch failure only surfaces once prompting is
//! done, since that is when the result is collected.
//!
//! When prompting fails the fetch thread is left running and is not joined.
//! If the process exits before the clone finishes, its temporary directory is
//! not removed.

use crate::error::Result;
use crate::prompt::Prompter;
use crate::recipe::{self, PkgbuildData};
use crate::resolver::{self, RootResolver};
use crate::version::{self, VersionFetcher};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Printed to the terminal before the PKGBUILD goes to stdout
pub const STDOUT_SEPARATOR: &str = "===========================";

/// Run the pipeline for `import_path` and write the PKGBUILD to `out`
///
/// `writes_stdout` tells whether `out` shares the screen with the prompts,
/// in which case a separator is printed before the PKGBUILD.
pub fn generate<R, F, PR, PW, W>(
    import_path: &str,
    resolver: &R,
    fetcher: F,
    prompter: &mut Prompter<PR, PW>,
    out: &mut W,
    writes_stdout: bool,
) -> Result<PkgbuildData>
where
    R: RootResolver + ?Sized,
    F: VersionFetcher + Send + 'static,
    PR: BufRead,
    PW: Write,
    W: Write,
{
    let root = resolver::resolve_git_root(resolver, import_path)?;
    let fetch = version::spawn_version_fetch(fetcher, root.clone())?;

    let dir = root.base_name().to_string();
    let pkgname = prompter.ask("Package Name", &format!("{}-git", dir))?;
    let depends = prompter.ask_list("Dependent Packages(split by space)")?;
    let path = root.relative_path(import_path)?;
    let bin_name = prompter.ask(
        "Binary name to be installed",
        resolver::base_name(import_path),
    )?;

    prompter.status("Please wait...")?;
    let pkgver = fetch.wait()?;
    debug!("Version fetch joined: {}", pkgver);

    if writes_stdout {
        prompter.status_line(STDOUT_SEPARATOR)?;
    }
    prompter.status_line("")?;

    let data = PkgbuildData {
        pkgname,
        dir,
        pkgver,
        repo: root.repo,
        root: root.root,
        depends,
        path,
        bin_name,
    };

    recipe::render(&data, out)?;
    info!("Generated PKGBUILD for {} {}", data.pkgname, data.pkgver);
    Ok(data)
}
