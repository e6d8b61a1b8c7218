// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    url = { "https://tracker.example/acme/widgets/issues/42" },
    url_github = { "https://github.com/acme/widgets/issues/42" },
    url_http = { "http://tracker.example/acme/widgets/issues/42" },
    url_trailing_path = { "https://github.com/acme/widgets/issues/42/timeline" },
    url_query = { "https://github.com/acme/widgets/issues/42?foo=bar" },
    url_fragment = { "https://github.com/acme/widgets/issues/42#issuecomment-1" },
    compact = { "acme/widgets#42" },
    compact_padded = { "  acme/widgets#42\n" },
)]
fn test_parse_target_with_namespace(input: &str) {
    let parsed = parse_target(input).unwrap();
    assert_eq!(parsed.namespace, Some(Namespace::new("acme", "widgets")));
    assert_eq!(parsed.issue_number, 42);
}

#[parameterized(
    bare = { "42" },
    hash = { "#42" },
    padded = { "  #42  " },
)]
fn test_parse_target_without_namespace(input: &str) {
    let parsed = parse_target(input).unwrap();
    assert_eq!(parsed.namespace, None);
    assert_eq!(parsed.issue_number, 42);
    assert_eq!(parsed.web_base, None);
}

#[parameterized(
    empty = { "" },
    words = { "fix the bug" },
    pull_url = { "https://github.com/acme/widgets/pull/42" },
    missing_number = { "acme/widgets#" },
    negative = { "-42" },
    no_repo = { "acme#42" },
    double_hash = { "##42" },
    overflow = { "99999999999999999999999" },
)]
fn test_parse_target_unsupported(input: &str) {
    let err = parse_target(input).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(raw) if raw == input));
}

#[test]
fn test_parse_target_url_keeps_web_base() {
    let parsed = parse_target("https://tracker.example/acme/widgets/issues/42").unwrap();
    assert_eq!(parsed.web_base.as_deref(), Some("https://tracker.example"));
}

#[test]
fn test_resolve_uses_own_namespace_without_inferring() {
    let parsed = parse_target("acme/widgets#7").unwrap();
    let target = parsed
        .resolve("acme/widgets#7", "https://github.com", || {
            panic!("inference must not run when a namespace was given")
        })
        .unwrap();
    assert_eq!(target.owner, "acme");
    assert_eq!(target.repo, "widgets");
    assert_eq!(target.issue_number, 7);
    assert_eq!(target.url, "https://github.com/acme/widgets/issues/7");
    assert_eq!(target.raw, "acme/widgets#7");
}

#[test]
fn test_resolve_bare_number_uses_inferred_namespace() {
    let target = parse_target("#7")
        .unwrap()
        .resolve("#7", "https://github.com", || {
            Some(Namespace::new("acme", "main"))
        })
        .unwrap();
    assert_eq!(target.owner, "acme");
    assert_eq!(target.repo, "main");
    assert_eq!(target.url, "https://github.com/acme/main/issues/7");
}

#[test]
fn test_resolve_bare_number_without_remote_fails() {
    let err = parse_target("7")
        .unwrap()
        .resolve("7", "https://github.com", || None)
        .unwrap_err();
    assert!(matches!(err, Error::NamespaceUnresolved));
}

#[test]
fn test_resolve_url_form_keeps_input_host() {
    let raw = "https://tracker.example/acme/widgets/issues/42/";
    let target = parse_target(raw)
        .unwrap()
        .resolve(raw, "https://github.com", || None)
        .unwrap();
    assert_eq!(target.url, "https://tracker.example/acme/widgets/issues/42");
}

#[test]
fn test_target_dir_name() {
    let target = Target::new("42", Namespace::new("acme", "widgets"), 42, "https://github.com");
    assert_eq!(target.dir_name(), "acme-widgets#42");
}

#[parameterized(
    slash = { "https://github.com/" },
    no_slash = { "https://github.com" },
)]
fn test_issue_url_trims_trailing_slash(base: &str) {
    assert_eq!(
        issue_url(base, "acme", "widgets", 3),
        "https://github.com/acme/widgets/issues/3"
    );
}

#[parameterized(
    ssh_shorthand = { "git@github.com:acme/widgets" },
    ssh_shorthand_git = { "git@github.com:acme/widgets.git" },
    https = { "https://github.com/acme/widgets" },
    https_git = { "https://github.com/acme/widgets.git" },
    http = { "http://git.example/acme/widgets.git" },
    ssh_scheme = { "ssh://git@github.com/acme/widgets" },
    ssh_scheme_git = { "ssh://git@github.com/acme/widgets.git" },
    git_scheme = { "git://github.com/acme/widgets" },
    git_scheme_git = { "git://github.com/acme/widgets.git" },
    trailing_newline = { "git@github.com:acme/widgets.git\n" },
)]
fn test_parse_remote_url(url: &str) {
    assert_eq!(
        parse_remote_url(url),
        Some(Namespace::new("acme", "widgets"))
    );
}

#[parameterized(
    empty = { "" },
    local_path = { "/srv/git/widgets.git" },
    file_scheme = { "file:///srv/git/acme/widgets" },
    host_only = { "https://github.com/acme" },
)]
fn test_parse_remote_url_unknown_shape(url: &str) {
    assert_eq!(parse_remote_url(url), None);
}

#[test]
fn test_namespace_display() {
    assert_eq!(Namespace::new("acme", "widgets").to_string(), "acme/widgets");
}
