// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the ictx library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported target format: {0}\n  hint: use an issue URL, owner/repo#123, #123, or 123")]
    UnsupportedFormat(String),

    #[error("cannot infer owner/repo\n  hint: use owner/repo#123 or run inside a git repository with an origin remote")]
    NamespaceUnresolved,

    #[error("command not found: {command}\n  hint: install the GitHub CLI or set ISSUECTX_GH")]
    CommandUnavailable { command: String },

    #[error("command failed ({status}): {command}{}", stderr_suffix(.stderr))]
    ApiFailure {
        command: String,
        status: i32,
        stderr: String,
    },

    #[error("failed to decode JSON from gh api response for path: {path}")]
    Decode { path: String },

    #[error("unexpected {what}")]
    UnexpectedPayload { what: String },

    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("invalid scope: '{0}'\n  hint: valid scopes are: open, all")]
    InvalidScope(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!("\n{}", stderr)
    }
}

/// A specialized Result type for ictx operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<ictx_core::Error> for Error {
    fn from(e: ictx_core::Error) -> Self {
        match e {
            ictx_core::Error::UnsupportedFormat(raw) => Error::UnsupportedFormat(raw),
            ictx_core::Error::NamespaceUnresolved => Error::NamespaceUnresolved,
            ictx_core::Error::MalformedPayload(reason) => Error::MalformedPayload(reason),
            ictx_core::Error::InvalidScope(s) => Error::InvalidScope(s),
            ictx_core::Error::Json(e) => Error::Json(e),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
