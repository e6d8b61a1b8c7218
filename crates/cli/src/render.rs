// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Markdown summary of a context snapshot.
//!
//! The layout is stable so summaries of the same snapshot diff cleanly.

use ictx_core::{ContextSnapshot, Issue, IssueRef};

/// Format a full issue as a two-line list entry.
///
/// ```text
/// - #12 **Title** (open) [area:ui, bug] / milestone: v1
///   https://github.com/acme/widgets/issues/12
/// ```
pub fn format_issue(issue: &Issue) -> Vec<String> {
    let mut head = format!(
        "- #{} **{}** ({})",
        issue.issue_number, issue.title, issue.state
    );
    if !issue.labels.is_empty() {
        head.push_str(&format!(" [{}]", issue.labels.join(", ")));
    }
    if let Some(milestone) = issue.milestone.as_deref().filter(|m| !m.is_empty()) {
        head.push_str(&format!(" / milestone: {}", milestone));
    }
    vec![head, format!("  {}", issue.url)]
}

/// Format a reference as a two-line list entry without labels or milestone.
pub fn format_issue_ref(issue: &IssueRef) -> Vec<String> {
    vec![
        format!(
            "- #{} **{}** ({})",
            issue.issue_number, issue.title, issue.state
        ),
        format!("  {}", issue.url),
    ]
}

fn section<T>(lines: &mut Vec<String>, heading: &str, items: &[T], fmt: fn(&T) -> Vec<String>) {
    if items.is_empty() {
        return;
    }
    lines.push(heading.to_string());
    lines.push(String::new());
    lines.extend(items.iter().flat_map(fmt));
    lines.push(String::new());
}

fn refs_or_none(lines: &mut Vec<String>, refs: &[IssueRef]) {
    if refs.is_empty() {
        lines.push("- (none)".to_string());
    } else {
        lines.extend(refs.iter().flat_map(format_issue_ref));
    }
}

/// Render `snapshot` as Markdown.
pub fn render_markdown(snapshot: &ContextSnapshot) -> String {
    let target = &snapshot.target;
    let mut lines = vec![
        format!(
            "# Work Item Context: {}/{}#{}",
            target.owner, target.repo, target.issue_number
        ),
        String::new(),
        format!("- URL: {}", target.url),
        format!("- Mode: {}", snapshot.mode),
        String::new(),
        "## Target Issue".to_string(),
        String::new(),
    ];
    lines.extend(format_issue(&snapshot.issue));

    let body = snapshot.issue.body.trim();
    if !body.is_empty() {
        lines.extend([
            String::new(),
            "<details><summary>Body</summary>".to_string(),
            String::new(),
            "```md".to_string(),
            body.to_string(),
            "```".to_string(),
            String::new(),
            "</details>".to_string(),
            String::new(),
        ]);
    }

    if let Some(parent) = &snapshot.parent {
        section(
            &mut lines,
            "## Parent (Epic)",
            std::slice::from_ref(parent),
            format_issue,
        );
    }
    section(
        &mut lines,
        "## Sub-issues (Implementation scope)",
        &snapshot.sub_issues,
        format_issue,
    );
    section(
        &mut lines,
        "## Siblings (Context only)",
        &snapshot.siblings,
        format_issue_ref,
    );

    lines.extend(["## Dependencies".to_string(), String::new()]);
    lines.extend(["### Blocked by".to_string(), String::new()]);
    refs_or_none(&mut lines, &snapshot.dependencies.blocked_by);
    lines.extend([String::new(), "### Blocking".to_string(), String::new()]);
    refs_or_none(&mut lines, &snapshot.dependencies.blocking);
    lines.push(String::new());

    section(
        &mut lines,
        "## Heuristic neighbors (standalone context)",
        &snapshot.related.heuristic_neighbors,
        format_issue_ref,
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
