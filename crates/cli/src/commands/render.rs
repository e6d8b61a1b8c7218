// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;
use std::path::Path;

use ictx_core::ContextSnapshot;

use crate::error::Result;
use crate::render::render_markdown;

pub fn run(path: &Path) -> Result<()> {
    print!("{}", run_impl(path)?);
    Ok(())
}

/// Read a snapshot file and render it as Markdown.
pub(crate) fn run_impl(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)?;
    let snapshot = ContextSnapshot::from_json(&content)?;
    Ok(render_markdown(&snapshot))
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
