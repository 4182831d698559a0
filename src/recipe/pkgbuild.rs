// src/recipe/pkgbuild.rs

//! PKGBUILD renderer for Go VCS packages
//!
//! # Output
//!
//! ```bash
//! pkgname=godoc-git
//! _pkgname=tools
//! pkgver=r3512.5b5bc2d
//! pkgrel=1
//! arch=('i686' 'x86_64')
//! url='https://go.googlesource.com/tools'
//! source=('git+https://golang.org/x/tools')
//! depends=()
//! makedepends=('go')
//! sha1sums=('SKIP')
//!
//! pkgver() { ... }
//! build() { ... }
//! package() { ... }
//! ```
//!
//! `pkgver()` runs the same pipeline as the version fetcher, so makepkg keeps
//! the version up to date on later builds.

use crate::error::{Error, Result};
use crate::version::VERSION_SCRIPT;
use serde::Serialize;
use std::io::Write;
use tera::{Context, Tera};

const TEMPLATE_NAME: &str = "PKGBUILD";

/// The source is fetched with `git+https://`; hosts no longer serve `git://`
const TEMPLATE: &str = r#"pkgname={{ pkgname }}
_pkgname={{ dir }}
pkgver={{ pkgver }}
pkgrel=1
arch=('i686' 'x86_64')
url='{{ repo }}'
source=('git+https://{{ root }}')
depends=({% for dep in depends %}{% if not loop.first %} {% endif %}'{{ dep }}'{% endfor %})
makedepends=('go')
sha1sums=('SKIP')

pkgver() {
  cd "$srcdir/$_pkgname"
  ( set -o pipefail
{{ version_pipeline }}
  )
}

build(){
  cd "$srcdir/$_pkgname{% if path %}/{{ path }}{% endif %}"
  GO111MODULE=on go build -o "$srcdir/bin/{{ bin_name }}"
}

package() {
  cd "$srcdir/bin"
  install -Dm755 '{{ bin_name }}' "$pkgdir/usr/bin/{{ bin_name }}"
}
"#;

/// Everything that goes into a generated PKGBUILD
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PkgbuildData {
    /// Package name
    pub pkgname: String,
    /// Directory makepkg clones the source into
    pub dir: String,
    /// Version at generation time
    pub pkgver: String,
    /// Repository URL
    pub repo: String,
    /// Import path of the repository root
    pub root: String,
    /// Runtime dependencies
    pub depends: Vec<String>,
    /// Import path relative to the root; empty for the root itself
    pub path: String,
    /// Name of the installed binary
    pub bin_name: String,
}

impl PkgbuildData {
    /// Check that every required field is filled in
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("pkgname", &self.pkgname),
            ("dir", &self.dir),
            ("pkgver", &self.pkgver),
            ("repo", &self.repo),
            ("root", &self.root),
            ("bin_name", &self.bin_name),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(Error::Render(format!("{} must not be empty", name)));
            }
        }

        Ok(())
    }
}

/// The version pipeline as it appears inside `pkgver()`
fn version_pipeline() -> String {
    VERSION_SCRIPT
        .lines()
        .skip(1)
        .map(|line| format!("    {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a PKGBUILD to a string
pub fn render_to_string(data: &PkgbuildData) -> Result<String> {
    data.validate()?;

    let mut tera = Tera::default();
    tera.autoescape_on(Vec::new());
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)
        .map_err(|e| Error::Render(e.to_string()))?;

    let mut context = Context::from_serialize(data).map_err(|e| Error::Render(e.to_string()))?;
    context.insert("version_pipeline", &version_pipeline());

    tera.render(TEMPLATE_NAME, &context)
        .map_err(|e| Error::Render(e.to_string()))
}

/// Render a PKGBUILD and write it out
pub fn render<W: Write>(data: &PkgbuildData, out: &mut W) -> Result<()> {
    let rendered = render_to_string(data)?;
    out.write_all(rendered.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| Error::Render(format!("failed to write PKGBUILD: {}", e)))
}
