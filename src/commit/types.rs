// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Conventional commit types.

/// Commit type definition.
///
/// Variants are declared in the order used wherever the first matching
/// type wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitType {
    Build,
    Chore,
    Ci,
    Docs,
    Feat,
    Fix,
    Perf,
    Refactor,
    Revert,
    Style,
    Test,
}

impl CommitType {
    /// Get the string representation of the commit type.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Build => "build",
            CommitType::Chore => "chore",
            CommitType::Ci => "ci",
            CommitType::Docs => "docs",
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Perf => "perf",
            CommitType::Refactor => "refactor",
            CommitType::Revert => "revert",
            CommitType::Style => "style",
            CommitType::Test => "test",
        }
    }

    /// Heading used for this type in the changes summary.
    pub fn display_name(&self) -> &'static str {
        match self {
            CommitType::Build => "Build",
            CommitType::Chore => "Maintenance",
            CommitType::Ci => "CI",
            CommitType::Docs => "Documentation",
            CommitType::Feat => "Features",
            CommitType::Fix => "Fixes",
            CommitType::Perf => "Performance",
            CommitType::Refactor => "Refactor",
            CommitType::Revert => "Revert",
            CommitType::Style => "Style",
            CommitType::Test => "Test",
        }
    }

    /// Emoji shortcode rendered next to the heading.
    pub fn icon(&self) -> &'static str {
        match self {
            CommitType::Build | CommitType::Chore => "construction_worker",
            CommitType::Ci => "runner",
            CommitType::Docs => "books",
            CommitType::Feat => "zap",
            CommitType::Fix => "wrench",
            CommitType::Perf => "bar_chart",
            CommitType::Refactor => "mountain",
            CommitType::Revert => "leftwards_arrow_with_hook",
            CommitType::Style => "nail_care",
            CommitType::Test => "traffic_light",
        }
    }

    /// Get all commit types in declaration order.
    pub fn all() -> &'static [CommitType] {
        &[
            CommitType::Build,
            CommitType::Chore,
            CommitType::Ci,
            CommitType::Docs,
            CommitType::Feat,
            CommitType::Fix,
            CommitType::Perf,
            CommitType::Refactor,
            CommitType::Revert,
            CommitType::Style,
            CommitType::Test,
        ]
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Return the first known type whose token is a prefix of `text`.
///
/// This is a literal prefix test: `"feature: x"` classifies as `feat`.
pub fn classify(known_types: &[CommitType], text: &str) -> Option<CommitType> {
    known_types
        .iter()
        .copied()
        .find(|t| text.starts_with(t.as_str()))
}
