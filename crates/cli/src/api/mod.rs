// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only access to the tracker API through the `gh` client program.
//!
//! The program itself sits behind the [`Runner`] trait so the classification
//! and decoding rules can be exercised without spawning processes.

mod client;
mod runner;
#[cfg(test)]
pub(crate) mod testing;

pub use client::{classify_failure, ApiClient, FailureClass, Method};
pub use runner::{ProcessRunner, RunOutput, Runner};
