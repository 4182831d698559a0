// src/commands/generate.rs

//! Generate a PKGBUILD for an import path

use crate::cli::Cli;
use anyhow::Result;
use std::time::Duration;
use genpkgbuild::{
    Destination, Error, GenerateConfig, GitVersionFetcher, GoImportResolver, TtyPrompter,
};
use tracing::info;

/// Generate a PKGBUILD from parsed command line arguments
///
/// Arguments are checked before anything is created on disk, so a usage
/// error never leaves an empty output file behind.
pub fn cmd_generate(cli: Cli) -> Result<()> {
    let import_path = cli
        .import_path
        .ok_or_else(|| Error::Usage("specify import path".to_string()))?;

    let config = GenerateConfig::new()
        .with_output(cli.output)
        .with_tty(cli.tty)
        .with_http_timeout(Duration::from_secs(cli.timeout));

    let mut prompter = TtyPrompter::open_tty(&config.tty)?;
    let mut destination = Destination::open(&config.output)?;
    let writes_stdout = destination.is_stdout();

    let resolver = GoImportResolver::new(config.http_timeout)?;
    let fetcher = GitVersionFetcher::new(&config);

    let data = genpkgbuild::generate(
        &import_path,
        &resolver,
        fetcher,
        &mut prompter,
        &mut destination,
        writes_stdout,
    )?;

    if let Some(path) = destination.path() {
        info!("Wrote {} to {}", data.pkgname, path.display());
    }

    Ok(())
}
