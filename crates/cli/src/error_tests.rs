// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;

#[test]
fn test_error_command_unavailable_display() {
    let err = Error::CommandUnavailable {
        command: "gh".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("command not found: gh"));
    assert!(msg.contains("ISSUECTX_GH"));
}

#[test]
fn test_error_api_failure_display_with_stderr() {
    let err = Error::ApiFailure {
        command: "gh api /repos/acme/widgets/issues/1".to_string(),
        status: 1,
        stderr: "gh: HTTP 403: Resource not accessible by integration".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "command failed (1): gh api /repos/acme/widgets/issues/1\n\
         gh: HTTP 403: Resource not accessible by integration"
    );
}

#[test]
fn test_error_api_failure_display_without_stderr() {
    let err = Error::ApiFailure {
        command: "gh api /x".to_string(),
        status: 2,
        stderr: String::new(),
    };
    assert_eq!(err.to_string(), "command failed (2): gh api /x");
}

#[test]
fn test_error_decode_names_path() {
    let err = Error::Decode {
        path: "/repos/acme/widgets/issues/1".to_string(),
    };
    assert!(err.to_string().contains("/repos/acme/widgets/issues/1"));
}

#[test]
fn test_error_from_core_keeps_variant() {
    let err: Error = ictx_core::Error::UnsupportedFormat("nope".to_string()).into();
    assert!(matches!(err, Error::UnsupportedFormat(ref raw) if raw == "nope"));

    let err: Error = ictx_core::Error::NamespaceUnresolved.into();
    assert!(matches!(err, Error::NamespaceUnresolved));
    assert!(err.to_string().contains("cannot infer owner/repo"));
}

#[test]
fn test_error_config_display() {
    let err = Error::Config("missing field".to_string());
    assert!(err.to_string().contains("config error"));
    assert!(err.to_string().contains("missing field"));
}

#[test]
fn test_error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: Error = io_err.into();
    assert!(err.to_string().contains("io error"));
}
