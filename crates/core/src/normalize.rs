// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Normalization of raw tracker payloads into [`Issue`] and [`IssueRef`].
//!
//! The owning repository is always read from the payload itself
//! (`repository_url`, then `html_url`). The caller's owner/repo is only a
//! fallback, since sub-issues and dependencies may live in other repositories.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::issue::{Issue, IssueRef, IssueState};
use crate::target::{issue_url, Namespace, DEFAULT_WEB_BASE};

static REPOSITORY_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"^https?://[^/\s]+/(?:\S*/)?repos/([^/\s]+)/([^/\s]+?)/?$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});
static HTML_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"^https?://[^/\s]+/([^/\s]+)/([^/\s]+)/issues/\d+") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});

/// Determine which repository a payload belongs to.
///
/// Tries the API `repository_url` first, then the web `html_url`, and falls
/// back to `default_owner/default_repo`.
pub fn resolve_namespace(default_owner: &str, default_repo: &str, raw: &Value) -> Namespace {
    let from_field = |field: &str, re: &Regex| {
        raw.get(field)
            .and_then(Value::as_str)
            .and_then(|url| re.captures(url))
            .map(|caps| Namespace::new(&caps[1], &caps[2]))
    };

    from_field("repository_url", &REPOSITORY_URL_RE)
        .or_else(|| from_field("html_url", &HTML_URL_RE))
        .unwrap_or_else(|| Namespace::new(default_owner, default_repo))
}

/// Read the `number` field of a payload.
///
/// Accepts a JSON integer or a string holding one.
pub fn issue_number(raw: &Value) -> Option<u64> {
    match raw.get("number")? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Build a full [`Issue`] from a raw payload.
pub fn normalize_issue(default_owner: &str, default_repo: &str, raw: &Value) -> Result<Issue> {
    let fields = Fields::read(default_owner, default_repo, raw)?;
    let obj = fields.obj;

    let labels = array(obj, "labels")
        .filter_map(|label| match label {
            Value::Object(o) => non_empty_str(o, "name"),
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        })
        .collect();

    let assignees = array(obj, "assignees")
        .filter_map(|assignee| assignee.as_object().and_then(|o| non_empty_str(o, "login")))
        .collect();

    let milestone = obj
        .get("milestone")
        .and_then(Value::as_object)
        .and_then(|m| m.get("title"))
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(Issue {
        owner: fields.namespace.owner,
        repo: fields.namespace.repo,
        issue_number: fields.number,
        url: fields.url,
        title: fields.title,
        state: fields.state,
        labels,
        milestone,
        assignees,
        body: string_or_empty(obj, "body"),
    })
}

/// Build a lightweight [`IssueRef`] from a raw payload.
pub fn normalize_issue_ref(
    default_owner: &str,
    default_repo: &str,
    raw: &Value,
) -> Result<IssueRef> {
    let fields = Fields::read(default_owner, default_repo, raw)?;
    Ok(IssueRef {
        owner: fields.namespace.owner,
        repo: fields.namespace.repo,
        issue_number: fields.number,
        url: fields.url,
        title: fields.title,
        state: fields.state,
    })
}

/// Identity fields shared by both record shapes.
struct Fields<'a> {
    obj: &'a Map<String, Value>,
    namespace: Namespace,
    number: u64,
    url: String,
    title: String,
    state: IssueState,
}

impl<'a> Fields<'a> {
    fn read(default_owner: &str, default_repo: &str, raw: &'a Value) -> Result<Self> {
        let obj = raw
            .as_object()
            .ok_or_else(|| Error::MalformedPayload("issue payload is not an object".to_string()))?;
        let number = issue_number(raw)
            .ok_or_else(|| Error::MalformedPayload("issue payload has no number".to_string()))?;
        let namespace = resolve_namespace(default_owner, default_repo, raw);
        let url = non_empty_str(obj, "html_url").unwrap_or_else(|| {
            issue_url(DEFAULT_WEB_BASE, &namespace.owner, &namespace.repo, number)
        });

        Ok(Fields {
            obj,
            number,
            url,
            title: string_or_empty(obj, "title"),
            state: IssueState::from(string_or_empty(obj, "state")),
            namespace,
        })
    }
}

fn array<'a>(obj: &'a Map<String, Value>, key: &str) -> impl Iterator<Item = &'a Value> {
    obj.get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}

fn non_empty_str(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn string_or_empty(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
