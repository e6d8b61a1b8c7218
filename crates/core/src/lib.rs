// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ictx-core: Shared library for the issuectx context fetcher
//!
//! This crate holds the pure half of issuectx: the snapshot data model,
//! target and remote URL parsing, payload normalization, and the
//! heuristic-neighbor query and windowing rules. Nothing here spawns a
//! process or touches the filesystem.

pub mod dependency;
pub mod error;
pub mod issue;
pub mod neighbors;
pub mod normalize;
pub mod snapshot;
pub mod target;

pub use dependency::extract_dependency_items;
pub use error::{Error, Result};
pub use issue::{Issue, IssueRef, IssueState};
pub use neighbors::{build_search_query, window_neighbors};
pub use normalize::{normalize_issue, normalize_issue_ref, resolve_namespace};
pub use snapshot::{ContextSnapshot, Dependencies, Mode, Related, Scope};
pub use target::{
    issue_url, parse_remote_url, parse_target, Namespace, ParsedTarget, Target, DEFAULT_WEB_BASE,
};
