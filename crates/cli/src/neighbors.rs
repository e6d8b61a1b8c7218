// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Heuristic neighbor lookup through the issue search endpoint.

use ictx_core::neighbors::{select_neighbors, SEARCH_PAGE_SIZE};
use ictx_core::{build_search_query, Issue, IssueRef};

use crate::api::{ApiClient, Runner};

/// Search path used for neighbor lookups.
pub const SEARCH_PATH: &str = "/search/issues";

/// Find open issues near `issue` in `owner/repo` that share its labels.
///
/// Neighbors are best effort: any failure is logged and yields no neighbors.
pub fn heuristic_neighbors<R: Runner>(
    client: &ApiClient<R>,
    owner: &str,
    repo: &str,
    issue: &Issue,
) -> Vec<IssueRef> {
    let query = build_search_query(owner, repo, &issue.labels);
    let per_page = SEARCH_PAGE_SIZE.to_string();

    let fields = [("q", query.as_str()), ("per_page", per_page.as_str())];

    match client.get_json(SEARCH_PATH, &fields, true) {
        Ok(Some(response)) => {
            if !response.get("items").is_some_and(|items| items.is_array()) {
                tracing::debug!(%query, "search response has no items list");
            }
            select_neighbors(owner, repo, &response, issue.issue_number)
        }
        Ok(None) => Vec::new(),
        Err(e) => {
            tracing::warn!(%query, error = %e, "neighbor search failed");
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "neighbors_tests.rs"]
mod tests;
