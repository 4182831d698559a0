// src/recipe/mod.rs

//! Build recipe generation
//!
//! The recipe produced here is an Arch Linux PKGBUILD for a Go binary built
//! straight from its git repository. The template is fixed: the only inputs
//! are the fields of [`PkgbuildData`].

pub mod pkgbuild;

pub use pkgbuild::{render, render_to_string, PkgbuildData};
