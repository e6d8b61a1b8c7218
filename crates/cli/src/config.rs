// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fetch configuration.
//!
//! Settings come from four layers, later ones winning:
//! built-in defaults, an optional `issuectx.toml` in the working directory,
//! the `ISSUECTX_GH` / `ISSUECTX_CONTEXT_DIR` environment variables, and
//! command-line flags. Everything is resolved once here and passed down.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use ictx_core::{Scope, DEFAULT_WEB_BASE};

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "issuectx.toml";
pub const DEFAULT_CONTEXT_DIR: &str = ".work-items";
pub const DEFAULT_GH_PROGRAM: &str = "gh";

/// Optional settings file stored as `issuectx.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory snapshots are written under (relative to the working directory or absolute).
    pub context_dir: Option<String>,
    /// Default scope for sub-issues and siblings.
    pub scope: Option<Scope>,
    /// Tracker client program.
    pub gh: Option<String>,
    /// Web base used for URLs of bare-number and compact targets.
    pub web_base: Option<String>,
}

impl Config {
    /// Load `issuectx.toml` from `work_dir`. A missing file is an empty config.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        if !config_path.is_file() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }
}

/// Values that override the config file, highest layer last.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub env_gh: Option<String>,
    pub env_context_dir: Option<PathBuf>,
    pub scope: Option<Scope>,
    pub context_dir: Option<PathBuf>,
}

impl Overrides {
    /// Overrides from the process environment plus the given flags.
    pub fn from_env(scope: Option<Scope>, context_dir: Option<PathBuf>) -> Self {
        Overrides {
            env_gh: crate::env::gh_program(),
            env_context_dir: crate::env::context_dir(),
            scope,
            context_dir,
        }
    }
}

/// Fully resolved settings for one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub context_dir: PathBuf,
    pub scope: Scope,
    pub gh: String,
    pub web_base: String,
}

impl Settings {
    /// Merge defaults, `config` and `overrides`. Relative context dirs are
    /// anchored at `work_dir`.
    pub fn resolve(work_dir: &Path, config: Config, overrides: Overrides) -> Self {
        let context_dir = overrides
            .context_dir
            .or(overrides.env_context_dir)
            .or_else(|| config.context_dir.map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTEXT_DIR));

        Settings {
            context_dir: work_dir.join(context_dir),
            scope: overrides.scope.or(config.scope).unwrap_or_default(),
            gh: overrides
                .env_gh
                .or(config.gh)
                .unwrap_or_else(|| DEFAULT_GH_PROGRAM.to_string()),
            web_base: config
                .web_base
                .unwrap_or_else(|| DEFAULT_WEB_BASE.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
