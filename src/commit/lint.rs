// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Conventional commit grammar linting.

use console::{style, Style};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::config::{LintRules, RuleLevel};
use crate::error::{LintError, Result};

use super::message::CommitMessage;

lazy_static! {
    /// Messages generated by tooling rather than written by hand.
    static ref IGNORED_MESSAGES: Vec<Regex> = [
        r"^Merge pull request #\d+",
        r"^Merge branch ",
        r"^Merge tag ",
        r"^Merge remote-tracking branch ",
        r"^Merge .+ into .+",
        r"^Merged .+ (?:in|into) .+",
        r"^[Rr]evert ",
        r"^(?:fixup|squash)! ",
        r"^Automatic merge",
        r"^Auto-merged .+ into .+",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect();
}

/// A single grammar issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintIssue {
    /// Name of the rule that produced the issue.
    pub rule: String,
    /// Human-readable message.
    pub message: String,
    /// Whether this is an error (true) or warning (false).
    pub is_error: bool,
}

impl LintIssue {
    /// Format the issue for terminal output.
    pub fn format(&self) -> String {
        let (prefix, rule_style) = if self.is_error {
            (style("✗").red().bold(), Style::new().red())
        } else {
            (style("⚠").yellow().bold(), Style::new().yellow())
        };

        format!(
            "{} {} {}",
            prefix,
            self.message,
            rule_style.apply_to(format!("[{}]", self.rule))
        )
    }
}

impl std::fmt::Display for LintIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.message, self.rule)
    }
}

/// Result of linting one message.
#[derive(Debug, Clone, Serialize)]
pub struct LintOutcome {
    /// The message as given.
    pub input: String,
    /// Issues at error level.
    pub errors: Vec<LintIssue>,
    /// Issues at warning level.
    pub warnings: Vec<LintIssue>,
}

impl LintOutcome {
    /// Create an outcome with no issues.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the message passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            if self.warnings.is_empty() {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", self.warnings.len())
            }
        } else {
            format!(
                "Invalid ({} errors, {} warnings)",
                self.errors.len(),
                self.warnings.len()
            )
        }
    }
}

/// A grammar checker for commit messages.
///
/// `Err` means the linter itself could not run; an invalid message is an
/// `Ok` outcome carrying errors.
pub trait CommitLinter: std::fmt::Debug {
    fn lint(&self, message: &str, rules: &LintRules) -> Result<LintOutcome>;
}

/// Built-in conventional commit linter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConventionalLinter;

impl ConventionalLinter {
    pub fn new() -> Self {
        Self
    }
}

impl CommitLinter for ConventionalLinter {
    fn lint(&self, message: &str, rules: &LintRules) -> Result<LintOutcome> {
        check_rules(rules)?;

        let mut outcome = LintOutcome::new(message);
        if rules.default_ignores && is_ignored(message) {
            tracing::debug!("Ignoring generated message: {:?}", message);
            return Ok(outcome);
        }

        let parsed = CommitMessage::parse(message);
        for issue in apply_rules(&parsed, rules) {
            if issue.is_error {
                outcome.errors.push(issue);
            } else {
                outcome.warnings.push(issue);
            }
        }

        Ok(outcome)
    }
}

/// Reject rule tables the linter cannot apply.
fn check_rules(rules: &LintRules) -> Result<()> {
    if rules.type_enum.level != RuleLevel::Off && rules.type_enum.value.is_empty() {
        return Err(LintError::InvalidRule {
            rule: "type-enum".to_string(),
            message: "no commit types configured".to_string(),
        }
        .into());
    }
    Ok(())
}

fn is_ignored(message: &str) -> bool {
    IGNORED_MESSAGES.iter().any(|re| re.is_match(message))
}

/// Build an issue for `rule` unless the rule is switched off.
fn issue(level: RuleLevel, rule: &str, message: impl Into<String>) -> Option<LintIssue> {
    match level {
        RuleLevel::Off => None,
        RuleLevel::Warn | RuleLevel::Error => Some(LintIssue {
            rule: rule.to_string(),
            message: message.into(),
            is_error: level == RuleLevel::Error,
        }),
    }
}

/// Apply every grammar rule, in header-to-footer order.
fn apply_rules(message: &CommitMessage, rules: &LintRules) -> Vec<LintIssue> {
    [
        check_header_max_length(message, rules),
        check_type_empty(message, rules),
        check_type_case(message, rules),
        check_type_enum(message, rules),
        check_scope_case(message, rules),
        check_subject_empty(message, rules),
        check_subject_case(message, rules),
        check_subject_full_stop(message, rules),
        check_body_leading_blank(message, rules),
        check_body_max_line_length(message, rules),
        check_footer_leading_blank(message, rules),
        check_footer_max_line_length(message, rules),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn check_header_max_length(message: &CommitMessage, rules: &LintRules) -> Option<LintIssue> {
    let max = rules.header_max_length.value;
    let len = message.header.chars().count();
    if len > max {
        issue(
            rules.header_max_length.level,
            "header-max-length",
            format!(
                "header must not be longer than {} characters, current length is {}",
                max, len
            ),
        )
    } else {
        None
    }
}

fn check_type_empty(message: &CommitMessage, rules: &LintRules) -> Option<LintIssue> {
    if non_empty(&message.commit_type).is_none() {
        issue(rules.type_empty, "type-empty", "type may not be empty")
    } else {
        None
    }
}

fn check_type_case(message: &CommitMessage, rules: &LintRules) -> Option<LintIssue> {
    let commit_type = non_empty(&message.commit_type)?;
    if commit_type != commit_type.to_lowercase() {
        issue(rules.type_case, "type-case", "type must be lower-case")
    } else {
        None
    }
}

fn check_type_enum(message: &CommitMessage, rules: &LintRules) -> Option<LintIssue> {
    let commit_type = non_empty(&message.commit_type)?;
    let allowed = &rules.type_enum.value;
    if !allowed.iter().any(|t| t == commit_type) {
        issue(
            rules.type_enum.level,
            "type-enum",
            format!("type must be one of [{}]", allowed.join(", ")),
        )
    } else {
        None
    }
}

fn check_scope_case(message: &CommitMessage, rules: &LintRules) -> Option<LintIssue> {
    let scope = non_empty(&message.scope)?;
    if scope != scope.to_lowercase() {
        issue(rules.scope_case, "scope-case", "scope must be lower-case")
    } else {
        None
    }
}

fn check_subject_empty(message: &CommitMessage, rules: &LintRules) -> Option<LintIssue> {
    if non_empty(&message.subject).is_none() {
        issue(rules.subject_empty, "subject-empty", "subject may not be empty")
    } else {
        None
    }
}

fn check_subject_case(message: &CommitMessage, rules: &LintRules) -> Option<LintIssue> {
    let subject = non_empty(&message.subject)?;
    // Sentence, start, pascal and upper case all open with a capital.
    if subject.chars().next().map_or(false, char::is_uppercase) {
        issue(
            rules.subject_case,
            "subject-case",
            "subject must not be sentence-case, start-case, pascal-case, upper-case",
        )
    } else {
        None
    }
}

fn check_subject_full_stop(message: &CommitMessage, rules: &LintRules) -> Option<LintIssue> {
    let subject = non_empty(&message.subject)?;
    if subject.trim_end().ends_with('.') {
        issue(
            rules.subject_full_stop,
            "subject-full-stop",
            "subject may not end with full stop",
        )
    } else {
        None
    }
}

fn check_body_leading_blank(message: &CommitMessage, rules: &LintRules) -> Option<LintIssue> {
    if !message.body_leading_blank {
        issue(
            rules.body_leading_blank,
            "body-leading-blank",
            "body must have leading blank line",
        )
    } else {
        None
    }
}

fn check_body_max_line_length(message: &CommitMessage, rules: &LintRules) -> Option<LintIssue> {
    let max = rules.body_max_line_length.value;
    let body = message.body.as_deref()?;
    if body.lines().any(|line| line.chars().count() > max) {
        issue(
            rules.body_max_line_length.level,
            "body-max-line-length",
            format!("body's lines must not be longer than {} characters", max),
        )
    } else {
        None
    }
}

fn check_footer_leading_blank(message: &CommitMessage, rules: &LintRules) -> Option<LintIssue> {
    if message.footer.is_some() && !message.footer_leading_blank {
        issue(
            rules.footer_leading_blank,
            "footer-leading-blank",
            "footer must have leading blank line",
        )
    } else {
        None
    }
}

fn check_footer_max_line_length(message: &CommitMessage, rules: &LintRules) -> Option<LintIssue> {
    let max = rules.footer_max_line_length.value;
    let footer = message.footer.as_deref()?;
    if footer.lines().any(|line| line.chars().count() > max) {
        issue(
            rules.footer_max_line_length.level,
            "footer-max-line-length",
            format!("footer's lines must not be longer than {} characters", max),
        )
    } else {
        None
    }
}
