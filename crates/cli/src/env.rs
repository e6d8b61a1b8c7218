// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns the tracker client program from `ISSUECTX_GH`, if set and non-empty.
pub fn gh_program() -> Option<String> {
    std::env::var(vars::ISSUECTX_GH)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Returns the value of `ISSUECTX_CONTEXT_DIR` if set and non-empty.
pub fn context_dir() -> Option<PathBuf> {
    std::env::var(vars::ISSUECTX_CONTEXT_DIR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

/// Returns the log filter directive from `ISSUECTX_LOG`, if set.
pub fn log_filter() -> Option<String> {
    std::env::var(vars::ISSUECTX_LOG).ok()
}

/// Returns `true` if `ISSUECTX_TIMINGS` is set (any value).
pub fn timings() -> bool {
    std::env::var(vars::ISSUECTX_TIMINGS).is_ok()
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
