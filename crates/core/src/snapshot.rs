// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The context snapshot written for a target issue.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::issue::{Issue, IssueRef, IssueState};
use crate::target::Target;

/// Whether the target is an epic (has sub-issues) or a plain issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Epic,
    Issue,
}

impl Mode {
    /// Derive the mode from the sub-issues found before any scope filtering.
    pub fn from_sub_issues(unfiltered: &[Issue]) -> Self {
        if unfiltered.is_empty() {
            Mode::Issue
        } else {
            Mode::Epic
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Epic => "epic",
            Mode::Issue => "issue",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which sub-issues and siblings are kept in the snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Drop closed sub-issues and siblings.
    #[default]
    Open,
    /// Keep everything.
    All,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Open => "open",
            Scope::All => "all",
        }
    }

    /// True when an issue in `state` stays in the snapshot.
    pub fn keeps(&self, state: &IssueState) -> bool {
        match self {
            Scope::Open => !state.is_closed(),
            Scope::All => true,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Scope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Scope::Open),
            "all" => Ok(Scope::All),
            _ => Err(Error::InvalidScope(s.to_string())),
        }
    }
}

/// Explicit dependency edges. The two directions are fetched independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependencies {
    #[serde(default)]
    pub blocked_by: Vec<IssueRef>,
    #[serde(default)]
    pub blocking: Vec<IssueRef>,
}

/// Related issues found without an explicit relation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Related {
    /// Only filled when the target has no parent and no sub-issues.
    #[serde(default)]
    pub heuristic_neighbors: Vec<IssueRef>,
}

/// Everything known about a target issue's surroundings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSnapshot {
    pub target: Target,
    pub mode: Mode,
    pub issue: Issue,
    pub parent: Option<Issue>,
    #[serde(default)]
    pub sub_issues: Vec<Issue>,
    #[serde(default)]
    pub siblings: Vec<IssueRef>,
    #[serde(default)]
    pub dependencies: Dependencies,
    #[serde(default)]
    pub related: Related,
}

impl ContextSnapshot {
    /// Serialize as pretty JSON with a two-space indent.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
