// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Branch size thresholds.

use crate::config::BranchSizeConfig;
use crate::error::Result;
use crate::pr::PrSnapshot;
use crate::report::Reporter;

use super::dispatch::dispatch;
use super::Rule;

/// Flags pull requests with too many commits, lines or files.
#[derive(Debug)]
pub struct BranchSize<'a> {
    options: &'a BranchSizeConfig,
}

impl<'a> BranchSize<'a> {
    pub fn new(options: &'a BranchSizeConfig) -> Self {
        Self { options }
    }
}

impl Rule for BranchSize<'_> {
    fn name(&self) -> &str {
        "branch-size"
    }

    fn evaluate(&self, snapshot: &PrSnapshot, reporter: &mut dyn Reporter) -> Result<()> {
        let severity = self.options.severity;

        let commits = snapshot.commits.len();
        if commits > self.options.max_commits {
            let text = format!(
                ":exclamation: This PR could be big! There are {} commits (limit {}), \
                 which is a sign that changes can get out of hand.",
                commits, self.options.max_commits
            );
            dispatch(reporter, &text, severity, false)?;
        }

        let lines = snapshot.changed_lines();
        if lines > self.options.max_lines {
            let text = format!(
                ":exclamation: This PR is huge! It changes {} lines ({} additions, {} deletions), \
                 more than the limit of {}. You should split it in smaller PRs.",
                lines, snapshot.pr.additions, snapshot.pr.deletions, self.options.max_lines
            );
            dispatch(reporter, &text, severity, false)?;
        }

        let files = snapshot.modified_files.len();
        if files > self.options.max_files {
            let text = format!(
                "There are a lot of modified files ({}, limit {}). Unless you are updating \
                 packages, consider splitting this in smaller PRs.",
                files, self.options.max_files
            );
            dispatch(reporter, &text, severity, false)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Severity;
    use crate::report::Recorder;

    fn run(options: &BranchSizeConfig, snapshot: &PrSnapshot) -> Recorder {
        let mut recorder = Recorder::new();
        BranchSize::new(options).evaluate(snapshot, &mut recorder).unwrap();
        recorder
    }

    fn commits(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("feat: commit {}", i)).collect()
    }

    #[test]
    fn test_commit_threshold_is_strict() {
        let options = BranchSizeConfig::default();
        let at_limit = PrSnapshot::new("feat: x", "body").with_commits(commits(10));
        assert!(run(&options, &at_limit).warnings.is_empty());

        let over = PrSnapshot::new("feat: x", "body").with_commits(commits(11));
        let recorder = run(&options, &over);
        assert_eq!(recorder.warnings.len(), 1);
        assert!(recorder.warnings[0].starts_with(":exclamation: This PR could be big!"));
    }

    #[test]
    fn test_line_threshold() {
        let options = BranchSizeConfig {
            max_lines: 100,
            ..BranchSizeConfig::default()
        };
        let at_limit = PrSnapshot::new("feat: x", "body").with_lines(60, 40);
        assert!(run(&options, &at_limit).warnings.is_empty());

        let over = PrSnapshot::new("feat: x", "body").with_lines(200, 100);
        let recorder = run(&options, &over);
        assert_eq!(recorder.warnings.len(), 1);
        assert!(recorder.warnings[0].starts_with(":exclamation: This PR is huge!"));
        assert!(recorder.warnings[0].contains("300 lines (200 additions, 100 deletions)"));
    }

    #[test]
    fn test_line_count_saturates() {
        let options = BranchSizeConfig::default();
        let snapshot = PrSnapshot::new("feat: x", "body").with_lines(u64::MAX, 1);
        assert_eq!(snapshot.changed_lines(), u64::MAX);

        let recorder = run(&options, &snapshot);
        assert_eq!(recorder.warnings.len(), 1);
        assert!(recorder.warnings[0].starts_with(":exclamation: This PR is huge!"));
    }

    #[test]
    fn test_file_threshold() {
        let options = BranchSizeConfig {
            max_files: 1,
            ..BranchSizeConfig::default()
        };
        let at_limit = PrSnapshot::new("feat: x", "body").with_files(["file1.md"]);
        assert!(run(&options, &at_limit).warnings.is_empty());

        let snapshot = PrSnapshot::new("feat: x", "body").with_files(["file1.md", "file2.js"]);
        let recorder = run(&options, &snapshot);
        assert_eq!(recorder.warnings.len(), 1);
        assert!(recorder.warnings[0].starts_with("There are a lot of modified files"));
    }

    #[test]
    fn test_all_checks_fire_independently() {
        let options = BranchSizeConfig {
            max_commits: 1,
            max_lines: 1,
            max_files: 1,
            severity: Severity::Fail,
        };
        let snapshot = PrSnapshot::new("feat: x", "body")
            .with_commits(commits(2))
            .with_lines(1, 1)
            .with_files(["a", "b"]);
        let recorder = run(&options, &snapshot);
        assert_eq!(recorder.fails.len(), 3);
        assert!(recorder.warnings.is_empty());
    }

    #[test]
    fn test_disabled() {
        let options = BranchSizeConfig {
            max_commits: 0,
            severity: Severity::Disable,
            ..BranchSizeConfig::default()
        };
        let snapshot = PrSnapshot::new("feat: x", "body").with_commits(commits(3));
        assert_eq!(run(&options, &snapshot), Recorder::new());
    }
}
