// src/resolver/discovery.rs

//! go-get discovery
//!
//! Hosts that are not in the known host table advertise their repositories
//! with a meta tag in the HTML served at `https://<import-path>?go-get=1`:
//!
//! ```html
//! <meta name="go-import" content="golang.org/x/tools git https://go.googlesource.com/tools">
//! ```

use super::{RepoRoot, VcsKind};
use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static META_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\s[^>]*>").expect("meta pattern must compile"));

static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)([a-z\-]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("attribute pattern must compile")
});

/// One `go-import` meta tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoImport {
    pub prefix: String,
    pub vcs: String,
    pub repo: String,
}

/// Parse all `go-import` meta tags from an HTML document
///
/// Only the head is considered; parsing stops at the opening `<body`.
pub fn parse_go_import_metas(html: &str) -> Vec<GoImport> {
    let head_end = html.to_ascii_lowercase().find("<body").unwrap_or(html.len());
    let head = &html[..head_end];

    META_RE
        .find_iter(head)
        .filter_map(|tag| {
            let mut name = None;
            let mut content = None;
            for caps in ATTR_RE.captures_iter(tag.as_str()) {
                let value = caps
                    .get(2)
                    .or_else(|| caps.get(3))
                    .map(|m| m.as_str())
                    .unwrap_or_default();
                match caps[1].to_ascii_lowercase().as_str() {
                    "name" => name = Some(value),
                    "content" => content = Some(value),
                    _ => {}
                }
            }

            if name != Some("go-import") {
                return None;
            }

            let fields: Vec<&str> = content?.split_whitespace().collect();
            match fields.as_slice() {
                [prefix, vcs, repo] => Some(GoImport {
                    prefix: prefix.to_string(),
                    vcs: vcs.to_string(),
                    repo: repo.to_string(),
                }),
                _ => {
                    debug!("Ignoring malformed go-import tag: {}", tag.as_str());
                    None
                }
            }
        })
        .collect()
}

/// Pick the single meta tag whose prefix covers `import_path`
pub(super) fn select_import(import_path: &str, imports: &[GoImport]) -> Result<RepoRoot> {
    let matching: Vec<&GoImport> = imports
        .iter()
        .filter(|imp| {
            import_path == imp.prefix
                || import_path
                    .strip_prefix(imp.prefix.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
        })
        .collect();

    let import = match matching.as_slice() {
        [] => {
            return Err(Error::resolution(
                import_path,
                "no go-import meta tags found",
            ));
        }
        [single] => *single,
        _ => {
            return Err(Error::resolution(
                import_path,
                "multiple go-import meta tags match the import path",
            ));
        }
    };

    let vcs: VcsKind = import.vcs.parse()?;

    if !import.repo.contains("://") {
        return Err(Error::resolution(
            import_path,
            format!("repo URL {} has no scheme", import.repo),
        ));
    }

    Ok(RepoRoot {
        repo: import.repo.clone(),
        vcs,
        root: import.prefix.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOOLS_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta http-equiv="Content-Type" content="text/html; charset=utf-8"/>
<meta name="go-import" content="golang.org/x/tools git https://go.googlesource.com/tools">
<meta name="go-source" content="golang.org/x/tools https://github.com/golang/tools/ https://github.com/golang/tools/tree/master{/dir} https://github.com/golang/tools/blob/master{/dir}/{file}#L{line}">
</head>
<body>
<meta name="go-import" content="golang.org/x/evil git https://evil.example.com/repo">
</body>
</html>"#;

    #[test]
    fn test_parse_go_import_metas() {
        let imports = parse_go_import_metas(TOOLS_PAGE);
        assert_eq!(
            imports,
            vec![GoImport {
                prefix: "golang.org/x/tools".to_string(),
                vcs: "git".to_string(),
                repo: "https://go.googlesource.com/tools".to_string(),
            }]
        );
    }

    #[test]
    fn test_single_quoted_attributes() {
        let imports = parse_go_import_metas(
            "<head><meta content='example.org/pkg hg https://hg.example.org/pkg' name='go-import'></head>",
        );
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].vcs, "hg");
    }

    #[test]
    fn test_select_subpackage() {
        let imports = parse_go_import_metas(TOOLS_PAGE);
        let root = select_import("golang.org/x/tools/cmd/godoc", &imports).unwrap();
        assert_eq!(root.root, "golang.org/x/tools");
        assert_eq!(root.repo, "https://go.googlesource.com/tools");
        assert_eq!(root.vcs, VcsKind::Git);
    }

    #[test]
    fn test_select_requires_path_boundary() {
        let imports = parse_go_import_metas(TOOLS_PAGE);
        assert!(select_import("golang.org/x/toolsextra", &imports).is_err());
    }

    #[test]
    fn test_select_none_or_many() {
        assert!(matches!(
            select_import("example.com/a", &[]),
            Err(Error::Resolution { .. })
        ));

        let dup = GoImport {
            prefix: "example.com/a".to_string(),
            vcs: "git".to_string(),
            repo: "https://example.com/a".to_string(),
        };
        let imports = vec![dup.clone(), dup];
        assert!(matches!(
            select_import("example.com/a", &imports),
            Err(Error::Resolution { .. })
        ));
    }

    #[test]
    fn test_select_mod_is_unsupported() {
        let imports = vec![GoImport {
            prefix: "example.com/a".to_string(),
            vcs: "mod".to_string(),
            repo: "https://proxy.example.com".to_string(),
        }];
        assert!(matches!(
            select_import("example.com/a", &imports),
            Err(Error::UnsupportedVcs(_))
        ));
    }
}
