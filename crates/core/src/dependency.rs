// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Extraction of issue references from dependency payloads.
//!
//! The dependency endpoints have answered in several shapes over time:
//!
//! - a bare list of issue objects
//! - a list of wrappers, each holding the issue under `issue`
//! - an object holding one of those lists under `items`, `blocked_by`,
//!   `blocking` or `dependencies`
//!
//! Extraction is total: unknown shapes yield nothing.

use serde_json::Value;

/// Container keys searched, in order, when the payload is an object.
const CONTAINER_KEYS: [&str; 4] = ["items", "blocked_by", "blocking", "dependencies"];

/// Collect the issue objects referenced by a dependency payload.
pub fn extract_dependency_items(payload: &Value) -> Vec<&Value> {
    match payload {
        Value::Array(items) => items.iter().filter_map(issue_object).collect(),
        Value::Object(obj) => CONTAINER_KEYS
            .iter()
            .find_map(|key| obj.get(*key).filter(|v| v.is_array()))
            .map(extract_dependency_items)
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

fn issue_object(item: &Value) -> Option<&Value> {
    if has_number(item) {
        return Some(item);
    }
    item.get("issue").filter(|nested| has_number(nested))
}

fn has_number(value: &Value) -> bool {
    value.as_object().is_some_and(|o| o.contains_key("number"))
}

#[cfg(test)]
#[path = "dependency_tests.rs"]
mod tests;
