// src/resolver/hosts.rs

//! Known code hosting sites
//!
//! Import paths on these hosts can be resolved without any network access.

use super::{RepoRoot, VcsKind};
use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// How a host entry decides the version control system
#[derive(Debug, Clone, Copy)]
enum HostVcs {
    /// The host only serves one kind
    Fixed(VcsKind),
    /// The kind is spelled out in the path (`example.com/repo.git`)
    FromSuffix,
}

struct KnownHost {
    /// Path prefix that routes an import path to this entry; empty for the
    /// generic suffix form
    prefix: &'static str,
    pattern: Regex,
    vcs: HostVcs,
}

static KNOWN_HOSTS: LazyLock<Vec<KnownHost>> = LazyLock::new(|| {
    let host = |prefix: &'static str, pattern: &str, vcs: HostVcs| KnownHost {
        prefix,
        pattern: Regex::new(pattern).expect("known host pattern must compile"),
        vcs,
    };

    vec![
        host(
            "github.com/",
            r"^(?P<root>github\.com/[A-Za-z0-9_.\-]+/[A-Za-z0-9_.\-]+)(/[\p{L}0-9_.\-]+)*$",
            HostVcs::Fixed(VcsKind::Git),
        ),
        host(
            "bitbucket.org/",
            r"^(?P<root>bitbucket\.org/[A-Za-z0-9_.\-]+/[A-Za-z0-9_.\-]+)(/[A-Za-z0-9_.\-]+)*$",
            HostVcs::Fixed(VcsKind::Git),
        ),
        host(
            "launchpad.net/",
            r"^(?P<root>launchpad\.net/(([A-Za-z0-9_.\-]+)(/[A-Za-z0-9_.\-]+)?|~[A-Za-z0-9_.\-]+/(\+junk|[A-Za-z0-9_.\-]+)/[A-Za-z0-9_.\-]+))(/[A-Za-z0-9_.\-]+)*$",
            HostVcs::Fixed(VcsKind::Bazaar),
        ),
        host(
            "git.apache.org/",
            r"^(?P<root>git\.apache\.org/[a-z0-9_.\-]+\.git)(/[A-Za-z0-9_.\-]+)*$",
            HostVcs::Fixed(VcsKind::Git),
        ),
        host(
            "git.openstack.org/",
            r"^(?P<root>git\.openstack\.org/[A-Za-z0-9_.\-]+/[A-Za-z0-9_.\-]+)(\.git)?(/[A-Za-z0-9_.\-]+)*$",
            HostVcs::Fixed(VcsKind::Git),
        ),
        host(
            "",
            r"^(?P<root>([a-z0-9.\-]+\.)+[a-z0-9.\-]+(:[0-9]+)?(/~?[A-Za-z0-9_.\-]+)+?\.(?P<vcs>bzr|fossil|git|hg|svn))(/~?[A-Za-z0-9_.\-]+)*$",
            HostVcs::FromSuffix,
        ),
    ]
});

/// Match an import path against the known host table
///
/// Returns `Ok(None)` when no entry applies and discovery should be tried.
/// A path on a known host that does not fit that host's layout is an error.
pub fn match_known_host(import_path: &str) -> Result<Option<RepoRoot>> {
    for host in KNOWN_HOSTS.iter() {
        if !import_path.starts_with(host.prefix) {
            continue;
        }

        let Some(caps) = host.pattern.captures(import_path) else {
            if host.prefix.is_empty() {
                continue;
            }
            return Err(Error::resolution(
                import_path,
                format!("invalid {} import path", host.prefix.trim_end_matches('/')),
            ));
        };

        let root = caps["root"].to_string();
        let vcs = match host.vcs {
            HostVcs::Fixed(kind) => kind,
            HostVcs::FromSuffix => caps["vcs"].parse()?,
        };

        return Ok(Some(RepoRoot {
            repo: format!("https://{}", root),
            vcs,
            root,
        }));
    }

    Ok(None)
}
