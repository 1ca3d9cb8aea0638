// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// kirinus - pull request review rules
///
/// Checks a pull request snapshot for description, size, conventional
/// commit and issue reference problems.
#[derive(Parser, Debug)]
#[command(name = "kirinus")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Pull request review rules for conventional commits", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "KIRINUS_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run every rule group over a pull request snapshot
    Check(CheckArgs),

    /// Lint a single commit message against the conventional grammar
    Lint(LintArgs),

    /// Initialize kirinus configuration
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Snapshot JSON document, or `-` for stdin
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Strict mode: treat warnings as failures
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the lint command.
#[derive(Parser, Debug, Clone)]
pub struct LintArgs {
    /// Message to lint (read from stdin when neither this nor --file is given)
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Read the message from a file, e.g. .git/COMMIT_EDITMSG
    #[arg(short, long, conflicts_with = "message")]
    pub file: Option<PathBuf>,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Configuration preset
    #[arg(long)]
    pub preset: Option<ConfigPreset>,
}

/// Configuration presets for init.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigPreset {
    /// No scope requirement, no issue key check
    Minimal,
    /// Every option with its default value (recommended)
    Standard,
    /// Block on every finding
    Strict,
}
