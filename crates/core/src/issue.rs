// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue records carried in a context snapshot.
//!
//! [`IssueRef`] is the identity-only shape used for siblings, dependencies and
//! heuristic neighbors. [`Issue`] adds labels, assignees, milestone and body and
//! is used for the target, its parent, and its sub-issues.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tracker state of an issue.
///
/// The tracker only reports `open` and `closed` today; anything else is kept
/// verbatim so a snapshot never loses information on a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IssueState {
    Open,
    Closed,
    Other(String),
}

impl IssueState {
    /// Returns the string representation used in payloads and display.
    pub fn as_str(&self) -> &str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
            IssueState::Other(s) => s,
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, IssueState::Closed)
    }
}

impl From<String> for IssueState {
    fn from(s: String) -> Self {
        match s.as_str() {
            "open" => IssueState::Open,
            "closed" => IssueState::Closed,
            _ => IssueState::Other(s),
        }
    }
}

impl From<&str> for IssueState {
    fn from(s: &str) -> Self {
        IssueState::from(s.to_string())
    }
}

impl From<IssueState> for String {
    fn from(state: IssueState) -> Self {
        match state {
            IssueState::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Minimal identity of an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRef {
    /// Owner of the repository actually hosting the issue.
    pub owner: String,
    /// Repository actually hosting the issue.
    pub repo: String,
    pub issue_number: u64,
    pub url: String,
    pub title: String,
    pub state: IssueState,
}

/// Full issue record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Owner of the repository actually hosting the issue.
    pub owner: String,
    /// Repository actually hosting the issue.
    pub repo: String,
    pub issue_number: u64,
    pub url: String,
    pub title: String,
    pub state: IssueState,
    /// Label names in payload order.
    pub labels: Vec<String>,
    /// Milestone title, if the issue belongs to one.
    pub milestone: Option<String>,
    /// Assignee logins in payload order.
    pub assignees: Vec<String>,
    pub body: String,
}

impl Issue {
    /// Returns the identity-only view of this issue.
    pub fn to_ref(&self) -> IssueRef {
        IssueRef {
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            issue_number: self.issue_number,
            url: self.url.clone(),
            title: self.title.clone(),
            state: self.state.clone(),
        }
    }

    /// True when this issue lives at exactly `owner/repo#number`.
    pub fn is_at(&self, owner: &str, repo: &str, number: u64) -> bool {
        self.owner == owner && self.repo == repo && self.issue_number == number
    }
}

impl From<&Issue> for IssueRef {
    fn from(issue: &Issue) -> Self {
        issue.to_ref()
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
