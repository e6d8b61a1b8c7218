// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::path::PathBuf;

use clap::Parser;
use ictx::Cli;

fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = ictx::env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    setup_logging();
    let cli = Cli::parse();

    let work_dir = match cli.directory {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => std::env::current_dir(),
    };
    let result = work_dir
        .map_err(ictx::Error::from)
        .and_then(|dir| ictx::run(cli.command, &dir));

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
