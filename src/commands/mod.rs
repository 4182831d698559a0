// src/commands/mod.rs
//! Command handlers for the genpkgbuild CLI

mod generate;

pub use generate::cmd_generate;
