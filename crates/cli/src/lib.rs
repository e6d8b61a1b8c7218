// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ictx - Context snapshots for tracker issues.
//!
//! This crate provides the `issuectx` CLI: it resolves an issue reference,
//! reads the issue and its surroundings through the `gh` client, and writes
//! a [`ContextSnapshot`](ictx_core::ContextSnapshot) as JSON.
//!
//! # Main Components
//!
//! - [`api`] - `gh api` client with missing/permission failure classification
//! - [`relations`] - parent, sub-issues, siblings and dependencies
//! - [`neighbors`] - best-effort heuristic neighbor search
//! - [`config`] - layered settings (`issuectx.toml`, environment, flags)
//! - [`render`] - Markdown summary of a snapshot
//!
//! ```rust,ignore
//! use ictx::{run, Command};
//!
//! run(
//!     Command::Fetch {
//!         target: "acme/widgets#42".to_string(),
//!         scope: None,
//!         context_dir: None,
//!     },
//!     Path::new("."),
//! )?;
//! ```

mod cli;
pub mod colors;
mod commands;
pub mod env;
pub mod help;
pub mod timings;

pub mod api;
pub mod config;
pub mod error;
pub mod git;
pub mod neighbors;
pub mod relations;
pub mod render;

pub use cli::{Cli, Command};
pub use commands::fetch::{build_snapshot, resolve_target, write_snapshot, CONTEXT_FILE_NAME};
pub use config::{Config, Settings};
pub use error::{Error, Result};

use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command with `work_dir` as the working directory.
pub fn run(command: Command, work_dir: &Path) -> Result<()> {
    match command {
        Command::Fetch {
            target,
            scope,
            context_dir,
        } => commands::fetch::run(&target, scope, context_dir, work_dir),
        Command::Render { path } => commands::render::run(&work_dir.join(path)),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "issuectx", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
