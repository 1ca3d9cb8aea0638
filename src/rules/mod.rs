// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for pull request review.
//!
//! Each rule group reads the snapshot on its own and reports findings
//! through the severity dispatcher. No group depends on another group's
//! output.

mod branch_size;
mod conventional;
mod dispatch;
mod engine;
mod jira;
mod markdown;
mod pr_lint;

pub use branch_size::BranchSize;
pub use conventional::ConventionalCommits;
pub use dispatch::{channel_for, dispatch};
pub use engine::RuleEngine;
pub use jira::{has_issue_reference, JiraReference};
pub use markdown::{ChangeGroup, MarkdownReport};
pub use pr_lint::{PrLint, MAX_TITLE_LENGTH};

use crate::error::Result;
use crate::pr::PrSnapshot;
use crate::report::Reporter;

/// A group of checks over a snapshot.
pub trait Rule: std::fmt::Debug {
    /// Get the rule name.
    fn name(&self) -> &str;

    /// Check the snapshot and report findings.
    fn evaluate(&self, snapshot: &PrSnapshot, reporter: &mut dyn Reporter) -> Result<()>;
}
