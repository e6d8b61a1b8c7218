// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for ictx-core operations.

use thiserror::Error;

/// All possible errors that can occur in ictx-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported target format: {0}\n  hint: use an issue URL, owner/repo#123, #123, or 123")]
    UnsupportedFormat(String),

    #[error("cannot infer owner/repo\n  hint: use owner/repo#123 or run inside a git repository with an origin remote")]
    NamespaceUnresolved,

    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("invalid scope: '{0}'\n  hint: valid scopes are: open, all")]
    InvalidScope(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for ictx-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
