// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::api::testing::{client, ScriptedRunner};
use ictx_core::normalize_issue;
use serde_json::json;

fn target(labels: &[&str]) -> Issue {
    normalize_issue(
        "acme",
        "widgets",
        &json!({"number": 10, "state": "open", "labels": labels}),
    )
    .unwrap()
}

fn hits(numbers: &[u64]) -> serde_json::Value {
    let items: Vec<_> = numbers
        .iter()
        .map(|n| json!({"number": n, "title": format!("Hit {}", n), "state": "open"}))
        .collect();
    json!({"total_count": items.len(), "items": items})
}

#[test]
fn test_heuristic_neighbors_windows_hits() {
    let api = client(ScriptedRunner::new().json(SEARCH_PATH, hits(&[3, 8, 9, 10, 11, 12, 13, 40])));
    let found = heuristic_neighbors(&api, "acme", "widgets", &target(&["area:ui"]));
    assert_eq!(
        found.iter().map(|r| r.issue_number).collect::<Vec<_>>(),
        vec![8, 9, 11, 12]
    );
    assert!(found.iter().all(|r| r.owner == "acme" && r.repo == "widgets"));
}

#[test]
fn test_heuristic_neighbors_sends_query_and_page_size() {
    let api = client(ScriptedRunner::new().json(SEARCH_PATH, hits(&[])));
    heuristic_neighbors(&api, "acme", "widgets", &target(&["bug", "area:ui"]));
    let call = &api.runner().calls()[0];
    assert!(call.contains(&"q=repo:acme/widgets is:issue state:open label:\"area:ui\"".to_string()));
    assert!(call.contains(&"per_page=30".to_string()));
}

#[test]
fn test_heuristic_neighbors_failure_is_empty() {
    let api = client(ScriptedRunner::new().fail(SEARCH_PATH, 1, "gh: API rate limit exceeded (HTTP 403)"));
    assert!(heuristic_neighbors(&api, "acme", "widgets", &target(&[])).is_empty());
}

#[test]
fn test_heuristic_neighbors_missing_program_is_empty() {
    let api = client(ScriptedRunner::missing_program());
    assert!(heuristic_neighbors(&api, "acme", "widgets", &target(&[])).is_empty());
}

#[test]
fn test_heuristic_neighbors_unexpected_shape_is_empty() {
    let api = client(ScriptedRunner::new().json(SEARCH_PATH, json!([1, 2, 3])));
    assert!(heuristic_neighbors(&api, "acme", "widgets", &target(&[])).is_empty());
}
