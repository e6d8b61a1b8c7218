// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;
use std::path::{Path, PathBuf};

use ictx_core::{parse_target, ContextSnapshot, Mode, Related, Scope, Target};

use crate::api::{ApiClient, ProcessRunner, Runner};
use crate::config::{Config, Overrides, Settings};
use crate::error::Result;
use crate::git::infer_namespace;
use crate::neighbors::heuristic_neighbors;
use crate::relations::{
    fetch_dependencies, fetch_issue, fetch_parent, fetch_siblings, fetch_sub_issues, filter_scope,
};

/// File name of the snapshot inside its target directory.
pub const CONTEXT_FILE_NAME: &str = "context.json";

pub fn run(
    raw: &str,
    scope: Option<Scope>,
    context_dir: Option<PathBuf>,
    work_dir: &Path,
) -> Result<()> {
    let config = Config::load(work_dir)?;
    let settings = Settings::resolve(work_dir, config, Overrides::from_env(scope, context_dir));
    let path = run_impl(ProcessRunner, raw, &settings, work_dir)?;
    println!("{}", path.display());
    Ok(())
}

/// Internal implementation that accepts a runner for testing.
pub(crate) fn run_impl<R: Runner>(
    runner: R,
    raw: &str,
    settings: &Settings,
    work_dir: &Path,
) -> Result<PathBuf> {
    let target = resolve_target(&runner, raw, &settings.web_base, work_dir)?;
    let client = ApiClient::new(&runner, settings.gh.as_str());
    let snapshot = build_snapshot(&client, &target, settings.scope)?;
    write_snapshot(&settings.context_dir, &snapshot)
}

/// Parse `raw`, inferring the namespace from `work_dir`'s origin remote
/// when the reference carries none.
pub fn resolve_target<R: Runner>(
    runner: &R,
    raw: &str,
    web_base: &str,
    work_dir: &Path,
) -> Result<Target> {
    let target = parse_target(raw)?.resolve(raw, web_base, || infer_namespace(runner, work_dir))?;
    tracing::debug!(
        owner = %target.owner,
        repo = %target.repo,
        number = target.issue_number,
        "resolved target"
    );
    Ok(target)
}

/// Assemble the full snapshot for `target`.
///
/// Mode comes from the sub-issues before scope filtering, so an epic whose
/// children are all closed stays an epic. Heuristic neighbors are only
/// searched for an issue with no parent and no sub-issues in scope.
pub fn build_snapshot<R: Runner>(
    client: &ApiClient<R>,
    target: &Target,
    scope: Scope,
) -> Result<ContextSnapshot> {
    let (owner, repo, number) = (&target.owner, &target.repo, target.issue_number);

    let issue = fetch_issue(client, owner, repo, number)?;
    let parent = fetch_parent(client, owner, repo, number)?;

    let children = fetch_sub_issues(client, owner, repo, number)?;
    let mode = Mode::from_sub_issues(&children);
    let sub_issues = filter_scope(children, scope);

    let siblings = match &parent {
        Some(parent) => fetch_siblings(client, parent, &issue, scope)?,
        None => Vec::new(),
    };

    let dependencies = fetch_dependencies(client, owner, repo, number)?;

    let related = if parent.is_none() && sub_issues.is_empty() {
        Related {
            heuristic_neighbors: heuristic_neighbors(client, owner, repo, &issue),
        }
    } else {
        Related::default()
    };

    Ok(ContextSnapshot {
        target: target.clone(),
        mode,
        issue,
        parent,
        sub_issues,
        siblings,
        dependencies,
        related,
    })
}

/// Write `snapshot` to `{context_dir}/{owner}-{repo}#{n}/context.json`.
pub fn write_snapshot(context_dir: &Path, snapshot: &ContextSnapshot) -> Result<PathBuf> {
    let dir = context_dir.join(snapshot.target.dir_name());
    fs::create_dir_all(&dir)?;

    let path = dir.join(CONTEXT_FILE_NAME);
    let json = snapshot.to_json_pretty()?;
    crate::time_phase!("snapshot::write", { fs::write(&path, json) })?;

    tracing::info!(path = %path.display(), mode = %snapshot.mode, "wrote context snapshot");
    Ok(path)
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod tests;
