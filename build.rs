// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

fn build_cli() -> Command {
    Command::new("genpkgbuild")
        .version(env!("CARGO_PKG_VERSION"))
        .author("genpkgbuild Contributors")
        .about("Generate a PKGBUILD for a Go application from its import path")
        .arg(
            Arg::new("import_path")
                .value_name("IMPORT_PATH")
                .help("Go import path of the application (e.g. golang.org/x/tools/cmd/godoc)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .default_value("PKGBUILD")
                .help("Output file, \"-\" for stdout"),
        )
        .arg(
            Arg::new("tty")
                .long("tty")
                .default_value("/dev/tty")
                .help("Terminal device used for prompts"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECS")
                .default_value("30")
                .help("Timeout in seconds for go-get discovery requests"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v info, -vv debug)"),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // CARGO_MANIFEST_DIR is always set by cargo
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("genpkgbuild.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
