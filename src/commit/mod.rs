// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit module: conventional types, message parsing and grammar linting.

mod lint;
mod message;
mod types;

pub use lint::{CommitLinter, ConventionalLinter, LintIssue, LintOutcome};
pub use message::{extract_description, extract_scope, CommitMessage};
pub use types::{classify, CommitType};
