// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use ictx_core::Scope;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

fn parse_scope(s: &str) -> Result<Scope, String> {
    s.parse::<Scope>().map_err(|_| "expected 'open' or 'all'".to_string())
}

#[derive(Parser)]
#[command(name = "issuectx")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Collect the context around a tracker issue into a JSON snapshot")]
#[command(
    long_about = "Collect the context around a tracker issue into a JSON snapshot.\n\n\
    Gathers the issue, its parent, sub-issues, siblings, dependencies and nearby issues \
    through the gh client, read-only."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Run as if issuectx was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch an issue's context into a snapshot file
    #[command(after_help = colors::examples("\
Examples:
  issuectx fetch 42                                   Use the origin remote's repository
  issuectx fetch '#42'                                Same, with a leading #
  issuectx fetch acme/widgets#42                      Explicit repository
  issuectx fetch https://github.com/acme/widgets/issues/42   From an issue URL
  issuectx fetch 42 --scope all                       Keep closed sub-issues and siblings
  issuectx fetch 42 --context-dir /tmp/ctx            Write somewhere else"))]
    Fetch {
        /// Issue URL, owner/repo#N, #N or N
        #[arg(value_parser = non_empty_string, value_name = "TARGET")]
        target: String,

        /// Which sub-issues and siblings to keep: open or all [default: open]
        #[arg(long, value_parser = parse_scope)]
        scope: Option<Scope>,

        /// Directory snapshots are written under [default: .work-items]
        #[arg(long, value_name = "DIR")]
        context_dir: Option<PathBuf>,
    },

    /// Render a snapshot file as Markdown
    Render {
        /// Path to a context.json snapshot
        #[arg(value_name = "CONTEXT_JSON")]
        path: PathBuf,
    },

    /// Generate shell completions
    #[command(after_help = colors::examples("\
Examples:
  issuectx completion bash > ~/.local/share/bash-completion/completions/issuectx
  issuectx completion zsh > ~/.zfunc/_issuectx"))]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
