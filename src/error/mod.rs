// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for kirinus.
//!
//! Rule violations are never errors: they are routed to a reporter as
//! findings. The types here cover everything that aborts a run instead,
//! from unreadable configuration to a reporter channel that went away.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for kirinus operations.
#[derive(Error, Debug)]
pub enum KirinusError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Snapshot loading errors
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    // Reporter channel errors
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    // Grammar linter errors
    #[error("Lint error: {0}")]
    Lint(#[from] LintError),

    // Findings that should fail the invoking process
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Errors raised while materializing a pull request snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Snapshot file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read snapshot: {message}")]
    ReadFailed { message: String },

    #[error("Failed to parse snapshot: {message}")]
    ParseFailed { message: String },
}

/// Errors raised by an output channel.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Channel '{channel}' is unavailable: {message}")]
    ChannelUnavailable { channel: String, message: String },
}

/// Errors raised by a commit grammar linter.
#[derive(Error, Debug)]
pub enum LintError {
    #[error("Invalid lint rule '{rule}': {message}")]
    InvalidRule { rule: String, message: String },

    #[error("Linter failed on '{subject}': {message}")]
    LinterFailed { subject: String, message: String },
}

/// Outcome errors for the command-line surface.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{failures} failure(s) and {warnings} warning(s) reported")]
    FindingsFailed { failures: usize, warnings: usize },

    #[error("Commit message is not compliant: {count} error(s) found")]
    InvalidMessage { count: usize },
}

/// Result type alias for kirinus operations.
pub type Result<T> = std::result::Result<T, KirinusError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| KirinusError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
