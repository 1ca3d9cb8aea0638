// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from kirinus.toml.
//! Every section and every field is optional; missing values fall back to
//! the defaults documented on each field.

use serde::{Deserialize, Serialize};

use crate::commit::CommitType;

/// The main configuration structure for kirinus.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Pull request description and title checks.
    pub pr_lint: PrLintConfig,

    /// Branch size thresholds.
    pub branch_size: BranchSizeConfig,

    /// Conventional commit grammar checks.
    pub conventional: ConventionalConfig,

    /// Issue key reference check.
    pub jira: JiraConfig,

    /// Markdown summary settings.
    pub markdown: MarkdownConfig,
}

impl Config {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Routing of a rule group's findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocking failure.
    Fail,
    /// Advisory warning.
    Warn,
    /// Informational message.
    Message,
    /// Suppressed entirely.
    Disable,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Fail => write!(f, "fail"),
            Severity::Warn => write!(f, "warn"),
            Severity::Message => write!(f, "message"),
            Severity::Disable => write!(f, "disable"),
        }
    }
}

/// Pull request description and title checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PrLintConfig {
    /// Minimum length of the PR body.
    pub min_body_length: usize,

    /// Severity of description and title findings.
    pub severity: Severity,

    /// Whether the PR title must carry a scope.
    pub scoped: bool,
}

impl Default for PrLintConfig {
    fn default() -> Self {
        Self {
            min_body_length: 10,
            severity: Severity::Fail,
            scoped: true,
        }
    }
}

/// Branch size thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BranchSizeConfig {
    /// Maximum number of commits.
    pub max_commits: usize,

    /// Maximum number of added plus deleted lines.
    pub max_lines: u64,

    /// Maximum number of modified files.
    pub max_files: usize,

    /// Severity of size findings.
    pub severity: Severity,
}

impl Default for BranchSizeConfig {
    fn default() -> Self {
        Self {
            max_commits: 10,
            max_lines: 2000,
            max_files: 100,
            severity: Severity::Warn,
        }
    }
}

/// Conventional commit grammar checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConventionalConfig {
    /// Severity of grammar findings.
    pub severity: Severity,

    /// Grammar rule table.
    pub rules: LintRules,
}

impl Default for ConventionalConfig {
    fn default() -> Self {
        Self {
            severity: Severity::Fail,
            rules: LintRules::default(),
        }
    }
}

/// Issue key reference check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct JiraConfig {
    /// Severity of a missing reference.
    pub severity: Severity,
}

impl Default for JiraConfig {
    fn default() -> Self {
        Self {
            severity: Severity::Warn,
        }
    }
}

/// Markdown summary settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Number of modified files listed before truncating.
    pub file_limit: usize,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self { file_limit: 50 }
    }
}

/// How strictly a single grammar rule is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Off,
    Warn,
    Error,
}

/// A grammar rule that carries a value, such as a length or a list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleSetting<T> {
    pub level: RuleLevel,
    pub value: T,
}

impl<T> RuleSetting<T> {
    pub fn new(level: RuleLevel, value: T) -> Self {
        Self { level, value }
    }
}

/// Conventional commit grammar rule table.
///
/// The defaults mirror the widely used conventional configuration: lower-case
/// known types, a non-empty subject that does not start with a capital letter
/// and headers, bodies and footers capped at 100 columns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LintRules {
    /// Skip merge, revert, fixup and squash messages.
    pub default_ignores: bool,
    pub type_case: RuleLevel,
    pub type_empty: RuleLevel,
    pub scope_case: RuleLevel,
    pub subject_case: RuleLevel,
    pub subject_empty: RuleLevel,
    pub subject_full_stop: RuleLevel,
    pub body_leading_blank: RuleLevel,
    pub footer_leading_blank: RuleLevel,
    pub type_enum: RuleSetting<Vec<String>>,
    pub header_max_length: RuleSetting<usize>,
    pub body_max_line_length: RuleSetting<usize>,
    pub footer_max_line_length: RuleSetting<usize>,
}

impl Default for LintRules {
    fn default() -> Self {
        Self {
            default_ignores: true,
            type_case: RuleLevel::Error,
            type_empty: RuleLevel::Error,
            scope_case: RuleLevel::Error,
            subject_case: RuleLevel::Error,
            subject_empty: RuleLevel::Error,
            subject_full_stop: RuleLevel::Error,
            body_leading_blank: RuleLevel::Warn,
            footer_leading_blank: RuleLevel::Warn,
            type_enum: RuleSetting::new(
                RuleLevel::Error,
                CommitType::all()
                    .iter()
                    .map(|t| t.as_str().to_string())
                    .collect(),
            ),
            header_max_length: RuleSetting::new(RuleLevel::Error, 100),
            body_max_line_length: RuleSetting::new(RuleLevel::Error, 100),
            footer_max_line_length: RuleSetting::new(RuleLevel::Error, 100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.pr_lint.min_body_length, 10);
        assert_eq!(config.pr_lint.severity, Severity::Fail);
        assert!(config.pr_lint.scoped);
        assert_eq!(config.branch_size.max_commits, 10);
        assert_eq!(config.branch_size.max_lines, 2000);
        assert_eq!(config.branch_size.max_files, 100);
        assert_eq!(config.branch_size.severity, Severity::Warn);
        assert_eq!(config.conventional.severity, Severity::Fail);
        assert_eq!(config.jira.severity, Severity::Warn);
        assert_eq!(config.markdown.file_limit, 50);
    }

    #[test]
    fn test_default_type_enum_order() {
        let rules = LintRules::default();
        assert_eq!(
            rules.type_enum.value,
            vec![
                "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert",
                "style", "test"
            ]
        );
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Disable.to_string(), "disable");
        assert_eq!(Severity::Message.to_string(), "message");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("min_body_length"));
        assert!(toml_str.contains("header_max_length"));
    }
}
