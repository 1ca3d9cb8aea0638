// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Markdown summary of the changes and modified files.
//!
//! Commits are grouped by conventional type in the order the groups are
//! first met. The report is always emitted, whatever the severities say.

use crate::commit::{classify, extract_description, extract_scope, CommitType};
use crate::error::Result;
use crate::pr::PrSnapshot;
use crate::report::Reporter;

use super::Rule;

const UNCATEGORIZED_NOTE: &str = "I was unable to render the category of these changes.\n\
     Consider using a scope for more grained results.";

/// Heading a commit is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeGroup {
    Typed(CommitType),
    Uncategorized,
}

/// Renders the changes summary.
#[derive(Debug)]
pub struct MarkdownReport<'a> {
    known_types: &'a [CommitType],
    file_limit: usize,
}

impl MarkdownReport<'static> {
    /// Classify against every known commit type.
    pub fn new(file_limit: usize) -> Self {
        Self {
            known_types: CommitType::all(),
            file_limit,
        }
    }
}

impl<'a> MarkdownReport<'a> {
    /// Restrict classification to `known_types`.
    pub fn with_known_types(known_types: &'a [CommitType], file_limit: usize) -> Self {
        Self {
            known_types,
            file_limit,
        }
    }

    /// Group commit messages, keeping first-seen order of groups and entries.
    pub fn group_changes(&self, snapshot: &PrSnapshot) -> Vec<(ChangeGroup, Vec<String>)> {
        let mut groups: Vec<(ChangeGroup, Vec<String>)> = Vec::new();

        for commit in &snapshot.commits {
            let message = commit.message.as_str();
            let header = message.lines().next().unwrap_or("");
            let (group, entry) = match classify(self.known_types, message) {
                Some(commit_type) if header.contains(':') => {
                    (ChangeGroup::Typed(commit_type), describe(header))
                }
                _ => (ChangeGroup::Uncategorized, message.to_string()),
            };

            match groups.iter_mut().find(|(g, _)| *g == group) {
                Some((_, entries)) => {
                    if !entries.contains(&entry) {
                        entries.push(entry);
                    }
                }
                None => groups.push((group, vec![entry])),
            }
        }

        groups
    }

    /// Render the full markdown block.
    pub fn render(&self, snapshot: &PrSnapshot) -> String {
        let mut out = String::from("## Changes\n\n");

        let groups = self.group_changes(snapshot);
        if groups.is_empty() {
            out.push_str("_No commits._");
        } else {
            let blocks: Vec<String> = groups
                .iter()
                .map(|(group, entries)| render_group(*group, entries))
                .collect();
            out.push_str(&blocks.join("\n\n"));
        }

        out.push_str("\n\n## Files\n\n");

        let files = &snapshot.modified_files;
        if files.is_empty() {
            out.push_str("_No modified files._\n");
            return out;
        }
        if files.len() > self.file_limit {
            out.push_str(&format!(
                ":warning: Showing only first {} out of {}\n\n",
                self.file_limit,
                files.len()
            ));
        }
        // One entry past the limit is listed; existing reports rely on it.
        for file in files.iter().take(self.file_limit + 1) {
            out.push_str(&format!("- `{}`\n", file));
        }

        out
    }
}

/// `scope: description` or just `description`, from a header line.
fn describe(header: &str) -> String {
    let description = extract_description(header).unwrap_or("");
    match extract_scope(header) {
        Some(scope) => format!("{}: {}", scope, description),
        None => description.to_string(),
    }
}

fn render_group(group: ChangeGroup, entries: &[String]) -> String {
    let list = entries
        .iter()
        .map(|entry| format!("- `{}`", entry))
        .collect::<Vec<_>>()
        .join("\n");

    match group {
        ChangeGroup::Typed(commit_type) => format!(
            "### :{}: {}\n\n{}",
            commit_type.icon(),
            commit_type.display_name(),
            list
        ),
        ChangeGroup::Uncategorized => format!(
            "### :question: Uncategorized\n\n{}\n\n{}",
            UNCATEGORIZED_NOTE, list
        ),
    }
}

impl Rule for MarkdownReport<'_> {
    fn name(&self) -> &str {
        "markdown"
    }

    fn evaluate(&self, snapshot: &PrSnapshot, reporter: &mut dyn Reporter) -> Result<()> {
        reporter.markdown(&self.render(snapshot))
    }
}
