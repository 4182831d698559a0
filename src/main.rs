// src/main.rs

use clap::error::ErrorKind;
use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;

use cli::{Cli, USAGE};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // Every failure exits with 1, including a rejected command line
            eprint!("{}", err.render());
            eprintln!();
            eprintln!("{}", USAGE);
            eprintln!();
            return ExitCode::FAILURE;
        }
    };

    // Logs go to stderr so `-o -` keeps stdout clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_filter())),
        )
        .init();

    match commands::cmd_generate(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            let is_usage = err
                .downcast_ref::<genpkgbuild::Error>()
                .is_some_and(genpkgbuild::Error::is_usage);
            if is_usage {
                eprintln!();
                eprintln!("{}", USAGE);
                eprintln!();
            }
            ExitCode::FAILURE
        }
    }
}
