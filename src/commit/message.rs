// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.
//!
//! Parsing never fails: a message that does not follow the conventional
//! shape simply yields empty parts, which the linter then reports on.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for the header of a conventional commit message.
    static ref HEADER_REGEX: Regex = Regex::new(
        r"^(?P<type>\w*)(?:\((?P<scope>[^()\r\n]*)\))?!?: (?P<subject>.*)$"
    ).unwrap();

    /// Regex for a footer token line (`Refs: #1`, `Closes #2`, `BREAKING CHANGE: x`).
    static ref FOOTER_REGEX: Regex = Regex::new(
        r"^(?:BREAKING[ -]CHANGE|[\w-]+)(?:: | #)"
    ).unwrap();

    /// Regex for a non-empty scope immediately preceding the first colon.
    static ref SCOPE_REGEX: Regex = Regex::new(
        r"^[^:(]*\((?P<scope>[^():]+)\)!?:"
    ).unwrap();
}

/// A commit message split into its conventional parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// First line.
    pub header: String,
    /// Type token, if the header has the conventional shape.
    pub commit_type: Option<String>,
    /// Scope between parentheses; may be empty (`chore(): x`).
    pub scope: Option<String>,
    /// Subject after `": "`, if the header has the conventional shape.
    pub subject: Option<String>,
    /// Body lines between the header and the footer.
    pub body: Option<String>,
    /// Footer lines.
    pub footer: Option<String>,
    /// Whether the line after the header is blank (or absent).
    pub body_leading_blank: bool,
    /// Whether the footer is separated from the body by a blank line.
    pub footer_leading_blank: bool,
}

impl CommitMessage {
    /// Parse a commit message from a string.
    pub fn parse(message: &str) -> Self {
        let message = message.trim_end();
        let lines: Vec<&str> = message.lines().collect();
        let header = lines.first().copied().unwrap_or("").to_string();

        let (commit_type, scope, subject) = match HEADER_REGEX.captures(&header) {
            Some(captures) => (
                captures.name("type").map(|m| m.as_str().to_string()),
                captures.name("scope").map(|m| m.as_str().to_string()),
                captures.name("subject").map(|m| m.as_str().to_string()),
            ),
            None => (None, None, None),
        };

        let rest = if lines.len() > 1 { &lines[1..] } else { &[][..] };
        let body_leading_blank = rest.first().map_or(true, |l| l.trim().is_empty());

        let footer_start = rest
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, line)| FOOTER_REGEX.is_match(line))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());

        let footer_leading_blank =
            footer_start == rest.len() || rest[footer_start - 1].trim().is_empty();

        let body = join_trimmed(&rest[..footer_start]);
        let footer = join_trimmed(&rest[footer_start..]);

        Self {
            header,
            commit_type,
            scope,
            subject,
            body,
            footer,
            body_leading_blank,
            footer_leading_blank,
        }
    }

    /// Whether the header has the `type(scope): subject` shape.
    pub fn is_conventional(&self) -> bool {
        self.commit_type.is_some()
    }
}

/// Join lines, dropping leading and trailing blank lines.
fn join_trimmed(lines: &[&str]) -> Option<String> {
    let joined = lines.join("\n");
    let trimmed = joined.trim_matches('\n').trim_end();
    if trimmed.trim().is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Extract a non-empty scope sitting right before the first `:` of `text`.
pub fn extract_scope(text: &str) -> Option<&str> {
    SCOPE_REGEX
        .captures(text)
        .and_then(|c| c.name("scope"))
        .map(|m| m.as_str())
}

/// Text after the first `:` of `text`, trimmed.
pub fn extract_description(text: &str) -> Option<&str> {
    text.split_once(':').map(|(_, description)| description.trim())
}
