// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Conventional commit grammar checks over commits and the PR title.

use crate::commit::{CommitLinter, LintOutcome};
use crate::config::ConventionalConfig;
use crate::error::Result;
use crate::pr::PrSnapshot;
use crate::report::Reporter;

use super::dispatch::dispatch;
use super::Rule;

/// What a linted message is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subject {
    Commit,
    Title,
}

/// Lints every commit, then the PR title.
#[derive(Debug)]
pub struct ConventionalCommits<'a> {
    options: &'a ConventionalConfig,
    linter: &'a dyn CommitLinter,
}

impl<'a> ConventionalCommits<'a> {
    pub fn new(options: &'a ConventionalConfig, linter: &'a dyn CommitLinter) -> Self {
        Self { options, linter }
    }
}

/// Finding text for an invalid message.
fn render_finding(subject: Subject, outcome: &LintOutcome) -> String {
    let header = outcome.input.lines().next().unwrap_or("");
    let what = match subject {
        Subject::Commit => "The commit message",
        Subject::Title => "The PR title",
    };

    let mut text = format!(
        "{} `{}` is not compliant with the \
         [Conventional Commits Standard](https://conventionalcommits.org):",
        what, header
    );
    for error in &outcome.errors {
        text.push_str("\n- ");
        text.push_str(&error.to_string());
    }
    text
}

impl Rule for ConventionalCommits<'_> {
    fn name(&self) -> &str {
        "conventional-commits"
    }

    fn evaluate(&self, snapshot: &PrSnapshot, reporter: &mut dyn Reporter) -> Result<()> {
        let messages = snapshot
            .commits
            .iter()
            .map(|c| (Subject::Commit, c.message.as_str()))
            .chain(std::iter::once((Subject::Title, snapshot.pr.title.as_str())));

        for (subject, message) in messages {
            let outcome = self.linter.lint(message, &self.options.rules)?;
            for warning in &outcome.warnings {
                tracing::debug!("{:?}: {}", message, warning);
            }
            if !outcome.is_valid() {
                dispatch(
                    reporter,
                    &render_finding(subject, &outcome),
                    self.options.severity,
                    false,
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commit::{ConventionalLinter, LintIssue};
    use crate::config::{LintRules, Severity};
    use crate::error::{KirinusError, LintError};
    use crate::report::Recorder;
    use std::cell::RefCell;

    fn run(options: &ConventionalConfig, snapshot: &PrSnapshot) -> Recorder {
        let linter = ConventionalLinter::new();
        let mut recorder = Recorder::new();
        ConventionalCommits::new(options, &linter)
            .evaluate(snapshot, &mut recorder)
            .unwrap();
        recorder
    }

    /// Records the order of lint calls and rejects everything.
    #[derive(Debug, Default)]
    struct RejectAll {
        seen: RefCell<Vec<String>>,
    }

    impl CommitLinter for RejectAll {
        fn lint(&self, message: &str, _rules: &LintRules) -> Result<LintOutcome> {
            self.seen.borrow_mut().push(message.to_string());
            let mut outcome = LintOutcome::new(message);
            outcome.errors.push(LintIssue {
                rule: "always".to_string(),
                message: "rejected".to_string(),
                is_error: true,
            });
            Ok(outcome)
        }
    }

    /// Fails on the message "boom".
    #[derive(Debug)]
    struct Explodes;

    impl CommitLinter for Explodes {
        fn lint(&self, message: &str, _rules: &LintRules) -> Result<LintOutcome> {
            if message == "boom" {
                return Err(LintError::LinterFailed {
                    subject: message.to_string(),
                    message: "linter crashed".to_string(),
                }
                .into());
            }
            Ok(LintOutcome::new(message))
        }
    }

    #[test]
    fn test_valid_commits_and_title() {
        let snapshot = PrSnapshot::new("feat(my-app): my description [MHP-1234]", "body")
            .with_commits(["feat: commit 1", "fix(my-app1): commit 2", "chore(): commit 3"]);
        assert_eq!(run(&ConventionalConfig::default(), &snapshot), Recorder::new());
    }

    #[test]
    fn test_invalid_commit() {
        let snapshot = PrSnapshot::new("feat(my-app): ok", "body")
            .with_commits(["feat: fine", "Updated stuff."]);
        let recorder = run(&ConventionalConfig::default(), &snapshot);
        assert_eq!(recorder.fails.len(), 1);
        assert_eq!(
            recorder.fails[0],
            "The commit message `Updated stuff.` is not compliant with the \
             [Conventional Commits Standard](https://conventionalcommits.org):\n\
             - type may not be empty [type-empty]\n\
             - subject may not be empty [subject-empty]"
        );
    }

    #[test]
    fn test_invalid_title() {
        let snapshot = PrSnapshot::new("non-conventional(my-app): my description", "body");
        let recorder = run(&ConventionalConfig::default(), &snapshot);
        assert_eq!(recorder.fails.len(), 1);
        assert!(recorder.fails[0].starts_with("The PR title `non-conventional(my-app)"));
    }

    #[test]
    fn test_commits_then_title_without_short_circuit() {
        let snapshot = PrSnapshot::new("title", "body").with_commits(["one", "two", "three"]);
        let linter = RejectAll::default();
        let options = ConventionalConfig {
            severity: Severity::Warn,
            ..ConventionalConfig::default()
        };
        let mut recorder = Recorder::new();
        ConventionalCommits::new(&options, &linter)
            .evaluate(&snapshot, &mut recorder)
            .unwrap();

        assert_eq!(*linter.seen.borrow(), vec!["one", "two", "three", "title"]);
        assert_eq!(recorder.warnings.len(), 4);
        assert!(recorder.warnings[0].contains("`one`"));
        assert!(recorder.warnings[3].starts_with("The PR title `title`"));
    }

    #[test]
    fn test_linter_error_aborts() {
        let snapshot = PrSnapshot::new("feat: x", "body").with_commits(["boom", "feat: y"]);
        let options = ConventionalConfig::default();
        let mut recorder = Recorder::new();
        let result = ConventionalCommits::new(&options, &Explodes).evaluate(&snapshot, &mut recorder);
        assert!(matches!(
            result,
            Err(KirinusError::Lint(LintError::LinterFailed { .. }))
        ));
    }

    #[test]
    fn test_disabled() {
        let options = ConventionalConfig {
            severity: Severity::Disable,
            ..ConventionalConfig::default()
        };
        let snapshot = PrSnapshot::new("bad title", "body").with_commits(["bad commit"]);
        assert_eq!(run(&options, &snapshot), Recorder::new());
    }
}
