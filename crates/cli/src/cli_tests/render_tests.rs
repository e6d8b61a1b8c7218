// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use clap::Parser;

#[test]
fn parse_render_path() {
    let cli = Cli::try_parse_from(["issuectx", "render", "ctx/acme-widgets#1/context.json"])
        .unwrap();
    match cli.command {
        Command::Render { path } => {
            assert_eq!(path, PathBuf::from("ctx/acme-widgets#1/context.json"));
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn parse_render_requires_path() {
    assert!(Cli::try_parse_from(["issuectx", "render"]).is_err());
}
