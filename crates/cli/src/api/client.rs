// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;
use std::io;

use serde_json::Value;

use crate::error::{Error, Result};

use super::runner::Runner;

/// REST API version pinned on every request.
pub const API_VERSION: &str = "2022-11-28";
const ACCEPT: &str = "application/vnd.github+json";

/// Lower-cased tokens of a permission failure. Checked before the missing
/// tokens: a 403 never counts as missing.
const PERMISSION_TOKENS: [&str; 2] = ["resource not accessible", "http 403"];
const MISSING_TOKENS: [&str; 4] = ["http 404", "http 410", "not found", "gone"];

/// HTTP method passed to `gh api -X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a failed call's stderr says about the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// The resource does not exist (404/410).
    Missing,
    /// The resource exists but the credentials cannot read it.
    Permission,
    Other,
}

/// Classify a failed call from its stderr text.
pub fn classify_failure(stderr: &str) -> FailureClass {
    let normalized = stderr.to_lowercase();

    if contains_any(&normalized, &PERMISSION_TOKENS) {
        FailureClass::Permission
    } else if contains_any(&normalized, &MISSING_TOKENS) {
        FailureClass::Missing
    } else {
        FailureClass::Other
    }
}

fn contains_any(haystack: &str, tokens: &[&str]) -> bool {
    tokens.iter().any(|t| haystack.contains(t))
}

/// Client for `gh api` requests returning JSON.
pub struct ApiClient<R> {
    runner: R,
    program: String,
}

impl<R: Runner> ApiClient<R> {
    pub fn new(runner: R, program: impl Into<String>) -> Self {
        ApiClient {
            runner,
            program: program.into(),
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Issue a GET request. See [`ApiClient::api_json`].
    pub fn get_json(
        &self,
        path: &str,
        fields: &[(&str, &str)],
        allow_missing: bool,
    ) -> Result<Option<Value>> {
        self.api_json(path, Method::Get, fields, allow_missing)
    }

    /// Perform one API call and decode its JSON body.
    ///
    /// Returns `Ok(None)` for an empty body, and for a missing resource when
    /// `allow_missing` is set. Permission failures are always errors.
    pub fn api_json(
        &self,
        path: &str,
        method: Method,
        fields: &[(&str, &str)],
        allow_missing: bool,
    ) -> Result<Option<Value>> {
        let args = request_args(path, method, fields);
        tracing::debug!(%method, path, "gh api");

        let output = crate::time_phase!("gh::api", { self.runner.run(&self.program, &args) })
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => Error::CommandUnavailable {
                    command: self.program.clone(),
                },
                _ => Error::Io(e),
            })?;

        if !output.success() {
            let class = classify_failure(&output.stderr);
            if allow_missing && class == FailureClass::Missing {
                tracing::debug!(path, "resource missing, treated as absent");
                return Ok(None);
            }
            return Err(Error::ApiFailure {
                command: format!("{} {}", self.program, args.join(" ")),
                status: output.status,
                stderr: output.stderr.trim().to_string(),
            });
        }

        let payload = output.stdout.trim();
        if payload.is_empty() {
            return Ok(None);
        }
        serde_json::from_str(payload)
            .map(Some)
            .map_err(|_| Error::Decode {
                path: path.to_string(),
            })
    }
}

/// Arguments after the program name for one request.
fn request_args(path: &str, method: Method, fields: &[(&str, &str)]) -> Vec<String> {
    let mut args = vec![
        "api".to_string(),
        path.to_string(),
        "-X".to_string(),
        method.as_str().to_string(),
        "-H".to_string(),
        format!("Accept: {}", ACCEPT),
        "-H".to_string(),
        format!("X-GitHub-Api-Version: {}", API_VERSION),
    ];
    for (key, value) in fields {
        args.push("-f".to_string());
        args.push(format!("{}={}", key, value));
    }
    args
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
