// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Explicit relations of an issue: parent, sub-issues, siblings, dependencies.
//!
//! Every lookup takes the owner/repo/number it works on as arguments. Records
//! built from a response carry the repository named in the response, which
//! can differ from the one queried.

use serde_json::Value;

use ictx_core::normalize::issue_number;
use ictx_core::{
    extract_dependency_items, normalize_issue, normalize_issue_ref, resolve_namespace,
    Dependencies, Issue, IssueRef, Namespace, Scope,
};

use crate::api::{ApiClient, Runner};
use crate::error::{Error, Result};

/// Page size for list endpoints. Only the first page is read.
pub const PAGE_SIZE: &str = "100";

fn issue_path(owner: &str, repo: &str, number: u64) -> String {
    format!("/repos/{}/{}/issues/{}", owner, repo, number)
}

/// Fetch one issue. The issue must exist.
pub fn fetch_issue<R: Runner>(
    client: &ApiClient<R>,
    owner: &str,
    repo: &str,
    number: u64,
) -> Result<Issue> {
    match client.get_json(&issue_path(owner, repo, number), &[], false)? {
        Some(raw) if raw.is_object() => Ok(normalize_issue(owner, repo, &raw)?),
        _ => Err(Error::UnexpectedPayload {
            what: format!("issue payload for {}/{}#{}", owner, repo, number),
        }),
    }
}

/// Fetch the parent of an issue, if it has one.
pub fn fetch_parent<R: Runner>(
    client: &ApiClient<R>,
    owner: &str,
    repo: &str,
    number: u64,
) -> Result<Option<Issue>> {
    let path = format!("{}/parent", issue_path(owner, repo, number));
    let Some(raw) = client.get_json(&path, &[], true)? else {
        return Ok(None);
    };

    let raw = match raw.get("issue") {
        Some(inner) if inner.is_object() => inner,
        _ => &raw,
    };
    if !raw.is_object() {
        return Ok(None);
    }
    Ok(Some(normalize_issue(owner, repo, raw)?))
}

/// Fetch the sub-issues of an issue, unfiltered.
///
/// The listing is only used for references; each sub-issue is then fetched
/// from the repository its reference names.
pub fn fetch_sub_issues<R: Runner>(
    client: &ApiClient<R>,
    owner: &str,
    repo: &str,
    number: u64,
) -> Result<Vec<Issue>> {
    let path = format!("{}/sub_issues", issue_path(owner, repo, number));
    let raw = client.get_json(&path, &[("per_page", PAGE_SIZE)], true)?;
    let Some(Value::Array(items)) = raw else {
        return Ok(Vec::new());
    };

    let mut refs: Vec<(Namespace, u64)> = Vec::new();
    for item in items.iter().filter(|item| item.is_object()) {
        let Some(n) = issue_number(item) else {
            continue;
        };
        let entry = (resolve_namespace(owner, repo, item), n);
        if !refs.contains(&entry) {
            refs.push(entry);
        }
    }

    refs.iter()
        .map(|(ns, n)| fetch_issue(client, &ns.owner, &ns.repo, *n))
        .collect()
}

/// Keep only the issues `scope` admits.
pub fn filter_scope(issues: Vec<Issue>, scope: Scope) -> Vec<Issue> {
    issues
        .into_iter()
        .filter(|issue| scope.keeps(&issue.state))
        .collect()
}

/// Fetch the other sub-issues of `parent`, excluding `issue` itself.
pub fn fetch_siblings<R: Runner>(
    client: &ApiClient<R>,
    parent: &Issue,
    issue: &Issue,
    scope: Scope,
) -> Result<Vec<IssueRef>> {
    let children = fetch_sub_issues(client, &parent.owner, &parent.repo, parent.issue_number)?;
    Ok(filter_scope(children, scope)
        .iter()
        .filter(|sibling| !sibling.is_at(&issue.owner, &issue.repo, issue.issue_number))
        .map(Issue::to_ref)
        .collect())
}

/// Fetch both dependency directions of an issue.
///
/// A tracker without dependency support answers 404, which yields empty lists.
pub fn fetch_dependencies<R: Runner>(
    client: &ApiClient<R>,
    owner: &str,
    repo: &str,
    number: u64,
) -> Result<Dependencies> {
    let blocked_by = fetch_dependency_edge(client, owner, repo, number, "blocked_by")?;
    let blocking = fetch_dependency_edge(client, owner, repo, number, "blocking")?;
    Ok(Dependencies {
        blocked_by,
        blocking,
    })
}

fn fetch_dependency_edge<R: Runner>(
    client: &ApiClient<R>,
    owner: &str,
    repo: &str,
    number: u64,
    edge: &str,
) -> Result<Vec<IssueRef>> {
    let path = format!("{}/dependencies/{}", issue_path(owner, repo, number), edge);
    let Some(raw) = client.get_json(&path, &[("per_page", PAGE_SIZE)], true)? else {
        return Ok(Vec::new());
    };

    Ok(extract_dependency_items(&raw)
        .into_iter()
        .filter_map(|item| match normalize_issue_ref(owner, repo, item) {
            Ok(r) => Some(r),
            Err(e) => {
                tracing::debug!(edge, error = %e, "skipping dependency entry");
                None
            }
        })
        .collect())
}

#[cfg(test)]
#[path = "relations_tests.rs"]
mod tests;
