// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! kirinus - pull request review rules
//!
//! A small rule engine that inspects a snapshot of a pull request and routes
//! its findings to a host through four channels: fail, warn, message and
//! markdown.
//!
//! # Features
//!
//! - **PR lint**: Description length, title length, title scope and screenshots
//! - **Branch size**: Commit, line and file count thresholds
//! - **Conventional commits**: Grammar checks on every commit and on the title
//! - **Issue references**: Look for a `ABC-1234` key in the title
//! - **Markdown report**: Changes grouped by commit type, plus modified files
//!
//! # Example
//!
//! ```no_run
//! use kirinus::{Config, PrSnapshot, Recorder, RuleEngine};
//!
//! let snapshot = PrSnapshot::new("feat(api): add endpoint [ABC-1234]", "Adds the endpoint.")
//!     .with_commits(["feat(api): add endpoint"])
//!     .with_files(["src/api.rs"]);
//!
//! let mut recorder = Recorder::new();
//! RuleEngine::new(Config::default()).run(&snapshot, &mut recorder).unwrap();
//! assert!(recorder.is_clean());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod pr;
pub mod report;
pub mod rules;

// Re-exports for convenience
pub use config::{Config, Severity};
pub use error::{KirinusError, Result};
pub use pr::PrSnapshot;
pub use report::{Recorder, Reporter};
pub use rules::{Rule, RuleEngine};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of kirinus.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
