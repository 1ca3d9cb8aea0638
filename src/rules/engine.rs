// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for pull request review.

use crate::commit::{CommitLinter, ConventionalLinter};
use crate::config::Config;
use crate::error::Result;
use crate::pr::PrSnapshot;
use crate::report::Reporter;

use super::{BranchSize, ConventionalCommits, JiraReference, MarkdownReport, PrLint, Rule};

/// Runs every rule group over a snapshot, in a fixed order.
#[derive(Debug)]
pub struct RuleEngine<L: CommitLinter = ConventionalLinter> {
    config: Config,
    linter: L,
    custom_rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine<ConventionalLinter> {
    /// Create a new rule engine with the built-in grammar linter.
    pub fn new(config: Config) -> Self {
        Self::with_linter(config, ConventionalLinter::new())
    }
}

impl<L: CommitLinter> RuleEngine<L> {
    /// Create a rule engine with a custom grammar linter.
    pub fn with_linter(config: Config, linter: L) -> Self {
        Self {
            config,
            linter,
            custom_rules: Vec::new(),
        }
    }

    /// Add a rule group, evaluated after the built-in ones.
    pub fn add_rule(&mut self, rule: Box<dyn Rule>) {
        self.custom_rules.push(rule);
    }

    /// Get the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Evaluate every rule group.
    ///
    /// Order: markdown, PR lint, branch size, conventional commits, issue
    /// reference, then custom groups. The first error stops the run; groups
    /// after it are not evaluated.
    pub fn run(&self, snapshot: &PrSnapshot, reporter: &mut dyn Reporter) -> Result<()> {
        let config = &self.config;
        let markdown = MarkdownReport::new(config.markdown.file_limit);
        let pr_lint = PrLint::new(&config.pr_lint);
        let branch_size = BranchSize::new(&config.branch_size);
        let conventional = ConventionalCommits::new(&config.conventional, &self.linter);
        let jira = JiraReference::new(&config.jira);

        let builtin: [&dyn Rule; 5] = [&markdown, &pr_lint, &branch_size, &conventional, &jira];
        for rule in builtin {
            evaluate(rule, snapshot, reporter)?;
        }
        for rule in &self.custom_rules {
            evaluate(rule.as_ref(), snapshot, reporter)?;
        }

        Ok(())
    }
}

fn evaluate(rule: &dyn Rule, snapshot: &PrSnapshot, reporter: &mut dyn Reporter) -> Result<()> {
    tracing::debug!(rule = rule.name(), "Evaluating rule group");
    rule.evaluate(snapshot, reporter).map_err(|e| {
        tracing::debug!(rule = rule.name(), error = %e, "Rule group aborted the run");
        e
    })
}
