// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Heuristic neighbors for issues with no explicit relations.
//!
//! An issue with neither a parent nor sub-issues gets a handful of open issues
//! from the same repository that share its labels. Among the search hits, the
//! neighbors are the ones closest to the target in numeric order: up to
//! [`WINDOW_BEFORE`] below it and up to [`WINDOW_AFTER`] above it.

use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

use crate::issue::IssueRef;
use crate::normalize::{issue_number, normalize_issue_ref};

/// Labels too generic to say anything about topic.
pub const GENERIC_LABELS: [&str; 4] = ["bug", "enhancement", "chore", "docs"];

/// Maximum number of topical labels added to the search query.
pub const MAX_QUERY_LABELS: usize = 2;

/// Page size of the neighbor search.
pub const SEARCH_PAGE_SIZE: u32 = 30;

pub const WINDOW_BEFORE: usize = 2;
pub const WINDOW_AFTER: usize = 2;

fn is_generic(label: &str) -> bool {
    GENERIC_LABELS
        .iter()
        .any(|generic| generic.eq_ignore_ascii_case(label))
}

/// Quote a search token, escaping embedded double quotes.
pub fn quote_query_token(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\\\""))
}

/// Build the issue search query for neighbors of an issue with `labels`.
///
/// The query is always scoped to open issues of `owner/repo`. Up to two
/// non-generic labels narrow it; with none left, a `bug` label falls back to
/// `label:bug`.
pub fn build_search_query(owner: &str, repo: &str, labels: &[String]) -> String {
    let mut parts = vec![
        format!("repo:{}/{}", owner, repo),
        "is:issue".to_string(),
        "state:open".to_string(),
    ];

    let topical: Vec<&String> = labels.iter().filter(|l| !is_generic(l)).collect();
    if !topical.is_empty() {
        parts.extend(
            topical
                .iter()
                .take(MAX_QUERY_LABELS)
                .map(|label| format!("label:{}", quote_query_token(label))),
        );
    } else if labels.iter().any(|l| l.eq_ignore_ascii_case("bug")) {
        parts.push("label:bug".to_string());
    }

    parts.join(" ")
}

/// Select the neighbor window around `target` from a list of issue numbers.
///
/// The numbers are deduplicated, sorted ascending, and the target itself is
/// dropped. The window is centered on the target's insertion point: up to two
/// numbers strictly below it and up to two above it.
pub fn window_neighbors(numbers: &[u64], target: u64) -> Vec<u64> {
    let ordered: Vec<u64> = numbers
        .iter()
        .copied()
        .filter(|&n| n != target)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let idx = ordered.partition_point(|&n| n < target);
    let start = idx.saturating_sub(WINDOW_BEFORE);
    let end = (idx + WINDOW_AFTER).min(ordered.len());
    ordered[start..end].to_vec()
}

/// Turn a search response into the neighbor references of `target`.
///
/// Anything that is not an object with an `items` list yields no neighbors.
pub fn select_neighbors(owner: &str, repo: &str, response: &Value, target: u64) -> Vec<IssueRef> {
    let Some(items) = response.get("items").and_then(Value::as_array) else {
        return Vec::new();
    };

    // Last hit wins when the same number shows up twice
    let by_number: BTreeMap<u64, &Value> = items
        .iter()
        .filter_map(|item| issue_number(item).map(|n| (n, item)))
        .collect();
    let numbers: Vec<u64> = by_number.keys().copied().collect();

    window_neighbors(&numbers, target)
        .into_iter()
        .filter_map(|n| by_number.get(&n))
        .filter_map(|item| normalize_issue_ref(owner, repo, item).ok())
        .collect()
}

#[cfg(test)]
#[path = "neighbors_tests.rs"]
mod tests;
