// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let color = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = color(colors::codes::HEADER);
    let literal = color(colors::codes::LITERAL);
    let context = color(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header}
  {fetch}       Fetch an issue's context into a snapshot file
  {render}      Render a snapshot file as Markdown
  {completion}  Generate shell completions
",
        header = colors::header("Commands:"),
        fetch = colors::literal("fetch"),
        render = colors::literal("render"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  issuectx fetch 42                                 Issue 42 of the origin repository
  issuectx fetch acme/widgets#42                    Issue 42 of acme/widgets
  issuectx render .work-items/acme-widgets#42/context.json   Summarize a snapshot",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
