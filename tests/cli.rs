// tests/cli.rs

//! Binary-level tests for argument handling and exit codes.
//!
//! None of these reach the network: each run fails before resolution.

use std::fs;
use std::process::Command;

fn genpkgbuild() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_genpkgbuild"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_import_path_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    let output = genpkgbuild().current_dir(dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("specify import path\n"), "stderr: {}", stderr);
    assert!(stderr.contains("Usage: genpkgbuild <import-path> [-o <output>]"));

    // Arguments are validated before the default output file is created
    assert!(!dir.path().join("PKGBUILD").exists());
}

#[test]
fn test_extra_positional_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = genpkgbuild()
        .current_dir(dir.path())
        .args(["github.com/a/b", "github.com/c/d", "--tty", "/dev/null"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("github.com/c/d"), "stderr: {}", stderr);
    assert!(stderr.contains("Usage: genpkgbuild <import-path> [-o <output>]"));
    assert!(!dir.path().join("PKGBUILD").exists());
}

#[test]
fn test_unknown_flag_exits_with_one() {
    let output = genpkgbuild()
        .args(["--bogus", "github.com/a/b"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_help_exits_with_zero() {
    let output = genpkgbuild().arg("--help").output().unwrap();
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_existing_output_is_not_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("PKGBUILD");
    fs::write(&path, "pkgname=keep-me\n").unwrap();

    let output = genpkgbuild()
        .args(["github.com/user/repo", "--tty", "/dev/null", "-o"])
        .arg(&path)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not create output file"), "stderr: {}", stderr);
    assert!(!stderr.contains("Usage:"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "pkgname=keep-me\n");
}

#[test]
fn test_missing_terminal() {
    let dir = tempfile::tempdir().unwrap();
    let output = genpkgbuild()
        .current_dir(dir.path())
        .args(["github.com/user/repo", "--tty", "/nonexistent/tty"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not open TTY"), "stderr: {}", stderr);
    assert!(!dir.path().join("PKGBUILD").exists());
}
