// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Namespace inference from the local git `origin` remote.

use std::path::Path;

use ictx_core::{parse_remote_url, Namespace};

use crate::api::Runner;

/// Read `remote.origin.url` in `repo_dir`.
///
/// Returns `None` when git is missing, the directory is not a repository, or
/// no origin remote is configured.
pub fn origin_url<R: Runner>(runner: &R, repo_dir: &Path) -> Option<String> {
    let args = [
        "-C".to_string(),
        repo_dir.to_string_lossy().into_owned(),
        "config".to_string(),
        "--get".to_string(),
        "remote.origin.url".to_string(),
    ];
    match runner.run("git", &args) {
        Ok(output) if output.success() => {
            let url = output.stdout.trim();
            (!url.is_empty()).then(|| url.to_string())
        }
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(error = %e, "failed to run git");
            None
        }
    }
}

/// Infer `owner/repo` from the origin remote of `repo_dir`.
pub fn infer_namespace<R: Runner>(runner: &R, repo_dir: &Path) -> Option<Namespace> {
    let url = origin_url(runner, repo_dir)?;
    let namespace = parse_remote_url(&url);
    if namespace.is_none() {
        tracing::debug!(%url, "origin remote has an unrecognized shape");
    }
    namespace
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
