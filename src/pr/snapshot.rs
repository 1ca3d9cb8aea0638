// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Snapshot document types and loading.
//!
//! The host materializes everything the rules look at before a run: the
//! pull request fields, the ordered commit list and the ordered list of
//! modified paths. Nothing here talks to a forge.

use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

use crate::error::{KirinusError, Result, SnapshotError};

/// Pull request metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PullRequest {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub deletions: u64,
}

/// A single commit on the pull request branch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "CommitRepr")]
pub struct Commit {
    pub message: String,
}

impl Commit {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Accepted shapes for a commit entry.
#[derive(Deserialize)]
#[serde(untagged)]
enum CommitRepr {
    Plain(String),
    Flat { message: String },
    Forge { commit: ForgeCommit },
}

#[derive(Deserialize)]
struct ForgeCommit {
    message: String,
}

impl From<CommitRepr> for Commit {
    fn from(repr: CommitRepr) -> Self {
        match repr {
            CommitRepr::Plain(message) | CommitRepr::Flat { message } => Commit { message },
            CommitRepr::Forge { commit } => Commit {
                message: commit.message,
            },
        }
    }
}

/// Everything a run inspects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrSnapshot {
    pub pr: PullRequest,
    #[serde(default)]
    pub commits: Vec<Commit>,
    #[serde(default, alias = "modifiedFiles")]
    pub modified_files: Vec<String>,
}

impl PrSnapshot {
    /// Create a snapshot with no commits, files or line changes.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            pr: PullRequest {
                title: title.into(),
                body: body.into(),
                additions: 0,
                deletions: 0,
            },
            commits: Vec::new(),
            modified_files: Vec::new(),
        }
    }

    /// Set the line counts.
    pub fn with_lines(mut self, additions: u64, deletions: u64) -> Self {
        self.pr.additions = additions;
        self.pr.deletions = deletions;
        self
    }

    /// Set the commit messages.
    pub fn with_commits<I, S>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.commits = messages.into_iter().map(Commit::new).collect();
        self
    }

    /// Set the modified files.
    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modified_files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Total number of added and deleted lines.
    pub fn changed_lines(&self) -> u64 {
        self.pr.additions.saturating_add(self.pr.deletions)
    }

    /// Parse a snapshot from a JSON document.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            KirinusError::Snapshot(SnapshotError::ParseFailed {
                message: e.to_string(),
            })
        })
    }

    /// Load a snapshot from a file, or from stdin when `path` is `-`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = if path == Path::new("-") {
            tracing::debug!("Reading snapshot from stdin");
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content).map_err(|e| {
                KirinusError::Snapshot(SnapshotError::ReadFailed {
                    message: e.to_string(),
                })
            })?;
            content
        } else {
            tracing::debug!("Reading snapshot from: {:?}", path);
            if !path.exists() {
                return Err(KirinusError::Snapshot(SnapshotError::NotFound {
                    path: path.to_path_buf(),
                }));
            }
            std::fs::read_to_string(path).map_err(|e| {
                KirinusError::Snapshot(SnapshotError::ReadFailed {
                    message: e.to_string(),
                })
            })?
        };

        Self::from_json(&content)
    }
}
