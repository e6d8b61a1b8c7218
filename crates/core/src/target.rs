// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Target reference parsing.
//!
//! A target is written as an issue URL, `owner/repo#123`, `#123`, or `123`.
//! The last two forms carry no namespace; the caller supplies one, usually
//! inferred from the `origin` remote via [`parse_remote_url`].

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::error::{Error, Result};

// Pre-compiled regexes for target and remote parsing.
// These are compile-time constant patterns that are verified at test time.
static URL_TARGET_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"^(https?://[^/\s]+)/([^/\s]+)/([^/\s]+)/issues/(\d+)(?:[/?#].*)?$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});
static COMPACT_TARGET_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"^([^/\s]+)/([^#\s]+)#(\d+)$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });
static BARE_TARGET_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^#?(\d+)$") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

// Remote URL shapes, tried in order: SSH shorthand, http(s), ssh://, git://
static REMOTE_RES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        r"^[\w.-]+@[^:/\s]+:([^/\s]+)/(.+?)(?:\.git)?$",
        r"^https?://[^/\s]+/([^/\s]+)/(.+?)(?:\.git)?$",
        r"^ssh://[^/\s]+/([^/\s]+)/(.+?)(?:\.git)?$",
        r"^git://[^/\s]+/([^/\s]+)/(.+?)(?:\.git)?$",
    ]
    .map(|pattern| match Regex::new(pattern) {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    })
});

/// Web base used when neither the target nor the configuration names one.
pub const DEFAULT_WEB_BASE: &str = "https://github.com";

/// An `owner/repo` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace {
    pub owner: String,
    pub repo: String,
}

impl Namespace {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Namespace {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Result of parsing a raw target reference, before namespace inference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTarget {
    /// Present for the URL and `owner/repo#N` forms.
    pub namespace: Option<Namespace>,
    pub issue_number: u64,
    /// Scheme and host of the input URL, for the URL form only.
    pub web_base: Option<String>,
}

impl ParsedTarget {
    /// Completes the target, calling `infer` only when the reference had no
    /// namespace of its own.
    pub fn resolve<F>(self, raw: &str, default_web_base: &str, infer: F) -> Result<Target>
    where
        F: FnOnce() -> Option<Namespace>,
    {
        let namespace = match self.namespace {
            Some(ns) => ns,
            None => infer().ok_or(Error::NamespaceUnresolved)?,
        };
        let web_base = self.web_base.as_deref().unwrap_or(default_web_base);
        Ok(Target::new(raw, namespace, self.issue_number, web_base))
    }
}

/// The resolved issue a snapshot is built for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// The reference exactly as the user wrote it.
    pub raw: String,
    pub owner: String,
    pub repo: String,
    pub issue_number: u64,
    pub url: String,
}

impl Target {
    pub fn new(raw: &str, namespace: Namespace, issue_number: u64, web_base: &str) -> Self {
        let url = issue_url(web_base, &namespace.owner, &namespace.repo, issue_number);
        Target {
            raw: raw.to_string(),
            owner: namespace.owner,
            repo: namespace.repo,
            issue_number,
            url,
        }
    }

    /// Directory name used for this target under the context directory.
    pub fn dir_name(&self) -> String {
        format!("{}-{}#{}", self.owner, self.repo, self.issue_number)
    }
}

/// Builds the human-facing URL of an issue.
pub fn issue_url(web_base: &str, owner: &str, repo: &str, number: u64) -> String {
    format!(
        "{}/{}/{}/issues/{}",
        web_base.trim_end_matches('/'),
        owner,
        repo,
        number
    )
}

/// Parse a target reference.
///
/// Accepted forms, in priority order:
/// 1. `https://{host}/{owner}/{repo}/issues/{n}` with an optional trailing path or query
/// 2. `{owner}/{repo}#{n}`
/// 3. `#{n}` or `{n}` (no namespace)
pub fn parse_target(raw: &str) -> Result<ParsedTarget> {
    let text = raw.trim();
    let unsupported = || Error::UnsupportedFormat(raw.to_string());

    if let Some(caps) = URL_TARGET_RE.captures(text) {
        let number = caps[4].parse().map_err(|_| unsupported())?;
        return Ok(ParsedTarget {
            namespace: Some(Namespace::new(&caps[2], &caps[3])),
            issue_number: number,
            web_base: Some(caps[1].to_string()),
        });
    }

    if let Some(caps) = COMPACT_TARGET_RE.captures(text) {
        let number = caps[3].parse().map_err(|_| unsupported())?;
        return Ok(ParsedTarget {
            namespace: Some(Namespace::new(&caps[1], &caps[2])),
            issue_number: number,
            web_base: None,
        });
    }

    if let Some(caps) = BARE_TARGET_RE.captures(text) {
        let number = caps[1].parse().map_err(|_| unsupported())?;
        return Ok(ParsedTarget {
            namespace: None,
            issue_number: number,
            web_base: None,
        });
    }

    Err(unsupported())
}

/// Extract `owner/repo` from a git remote URL.
///
/// Supports `git@host:owner/repo`, `https://host/owner/repo`,
/// `ssh://host/owner/repo` and `git://host/owner/repo`, each with or without
/// a trailing `.git`.
pub fn parse_remote_url(url: &str) -> Option<Namespace> {
    let url = url.trim();
    REMOTE_RES
        .iter()
        .find_map(|re| re.captures(url))
        .map(|caps| Namespace::new(&caps[1], &caps[2]))
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
