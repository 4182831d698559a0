// src/cli.rs
//! CLI definitions for genpkgbuild
//!
//! The generation itself lives in the `commands` module.

use clap::Parser;

/// Usage text printed after a usage error
pub const USAGE: &str = r#"Usage: genpkgbuild <import-path> [-o <output>]

Specify Go import path as the argument.

e.g. genpkgbuild golang.org/x/tools/godoc

The output filename can be specified with -o flag. The default is PKGBUILD.
Specify "-" to write STDOUT instead of an actual file."#;

#[derive(Parser)]
#[command(name = "genpkgbuild")]
#[command(author = "genpkgbuild Contributors")]
#[command(version)]
#[command(about = "Generate a PKGBUILD for a Go application from its import path", long_about = None)]
pub struct Cli {
    /// Go import path of the application (e.g. golang.org/x/tools/cmd/godoc)
    pub import_path: Option<String>,

    /// Output file, "-" for stdout
    #[arg(short, long, default_value = genpkgbuild::config::DEFAULT_OUTPUT)]
    pub output: String,

    /// Terminal device used for prompts
    #[arg(long, default_value = genpkgbuild::config::DEFAULT_TTY)]
    pub tty: String,

    /// Timeout in seconds for go-get discovery requests
    #[arg(long, value_name = "SECS", default_value_t = genpkgbuild::config::DEFAULT_HTTP_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter used when RUST_LOG is not set
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
