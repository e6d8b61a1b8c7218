// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted runner shared by the API, relation and fetch tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;

use serde_json::Value;

use super::{ApiClient, RunOutput, Runner};

/// Stderr `gh` prints for an unknown resource.
pub const NOT_FOUND: &str = "gh: Not Found (HTTP 404)";

/// Answers `gh api <path>` calls from a table keyed by path.
///
/// Unscripted paths answer like a 404. Every call is recorded.
#[derive(Default)]
pub struct ScriptedRunner {
    responses: HashMap<String, RunOutput>,
    calls: RefCell<Vec<Vec<String>>>,
    missing_program: bool,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// A runner whose program does not exist.
    pub fn missing_program() -> Self {
        ScriptedRunner {
            missing_program: true,
            ..Self::default()
        }
    }

    pub fn json(self, path: &str, body: Value) -> Self {
        self.stdout(path, &body.to_string())
    }

    pub fn stdout(mut self, path: &str, stdout: &str) -> Self {
        self.responses.insert(
            path.to_string(),
            RunOutput {
                status: 0,
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
        );
        self
    }

    pub fn fail(mut self, path: &str, status: i32, stderr: &str) -> Self {
        self.responses.insert(
            path.to_string(),
            RunOutput {
                status,
                stdout: String::new(),
                stderr: stderr.to_string(),
            },
        );
        self
    }

    /// Full argument lists of every call, in order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// Requested paths, in order.
    pub fn paths(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|args| args.get(1).cloned())
            .collect()
    }
}

impl Runner for ScriptedRunner {
    fn run(&self, _program: &str, args: &[String]) -> io::Result<RunOutput> {
        if self.missing_program {
            return Err(io::Error::new(io::ErrorKind::NotFound, "No such file"));
        }
        self.calls.borrow_mut().push(args.to_vec());
        let path = args.get(1).map(String::as_str).unwrap_or_default();
        Ok(self.responses.get(path).cloned().unwrap_or(RunOutput {
            status: 1,
            stdout: String::new(),
            stderr: NOT_FOUND.to_string(),
        }))
    }
}

/// A client over `runner` using the default program name.
pub fn client(runner: ScriptedRunner) -> ApiClient<ScriptedRunner> {
    ApiClient::new(runner, "gh")
}
