// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::{json, Value};

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn issuectx() -> Command {
    let mut cmd = cargo_bin_cmd!("issuectx");
    cmd.env_remove("ISSUECTX_CONTEXT_DIR")
        .env_remove("ISSUECTX_LOG")
        .env_remove("ISSUECTX_TIMINGS")
        .env("NO_COLOR", "1");
    cmd
}

/// A stand-in for the `gh` client backed by JSON fixture files.
///
/// `gh api <path> ...` prints the fixture registered for `<path>` or fails
/// like a 404. Registered failures print their stderr and exit 1.
pub struct FakeGh {
    pub dir: TempDir,
}

impl FakeGh {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("responses")).unwrap();
        fs::create_dir_all(dir.path().join("failures")).unwrap();
        let script = format!(
            r#"#!/bin/sh
key=$(printf '%s' "$2" | tr '/' '_')
echo "$*" >> "{root}/calls.log"
if [ -f "{root}/failures/$key" ]; then
  cat "{root}/failures/$key" >&2
  exit 1
fi
if [ -f "{root}/responses/$key" ]; then
  cat "{root}/responses/$key"
  exit 0
fi
echo "gh: Not Found (HTTP 404)" >&2
exit 1
"#,
            root = dir.path().display()
        );
        let program = dir.path().join("gh");
        fs::write(&program, script).unwrap();
        make_executable(&program);
        FakeGh { dir }
    }

    pub fn program(&self) -> PathBuf {
        self.dir.path().join("gh")
    }

    fn key(path: &str) -> String {
        path.replace('/', "_")
    }

    pub fn json(self, path: &str, body: Value) -> Self {
        fs::write(
            self.dir.path().join("responses").join(Self::key(path)),
            body.to_string(),
        )
        .unwrap();
        self
    }

    pub fn fail(self, path: &str, stderr: &str) -> Self {
        fs::write(
            self.dir.path().join("failures").join(Self::key(path)),
            stderr,
        )
        .unwrap();
        self
    }

    /// Command lines the fake client received.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}

/// An issue payload as the tracker returns it.
pub fn issue_json(owner: &str, repo: &str, number: u64, state: &str, labels: &[&str]) -> Value {
    json!({
        "number": number,
        "repository_url": format!("https://api.github.com/repos/{}/{}", owner, repo),
        "html_url": format!("https://github.com/{}/{}/issues/{}", owner, repo, number),
        "title": format!("Issue {}", number),
        "state": state,
        "labels": labels.iter().map(|l| json!({"name": l})).collect::<Vec<_>>(),
        "assignees": [{"login": "octocat"}],
        "milestone": null,
        "body": "Details here"
    })
}

/// Run `issuectx fetch` against `gh` in `work`, returning the snapshot path.
pub fn fetch(gh: &FakeGh, work: &TempDir, target: &str, extra: &[&str]) -> PathBuf {
    let output = issuectx()
        .env("ISSUECTX_GH", gh.program())
        .arg("fetch")
        .arg(target)
        .args(extra)
        .current_dir(work.path())
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "fetch failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1, "stdout: {stdout}");
    PathBuf::from(stdout.trim_end())
}

pub fn read_snapshot(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}
