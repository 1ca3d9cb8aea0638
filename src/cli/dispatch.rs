// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use console::style;
use std::io::Read;
use std::path::Path;

use crate::commit::{CommitLinter, ConventionalLinter};
use crate::config::Config;
use crate::error::{ConfigError, Result, ResultExt, ValidationError};
use crate::pr::PrSnapshot;
use crate::report::{ConsoleReporter, Recorder};
use crate::rules::RuleEngine;

use super::args::{CheckArgs, Cli, Commands, ConfigPreset, InitArgs, LintArgs, OutputFormat};

/// Name of the file written by `kirinus init`.
const CONFIG_FILE_NAME: &str = "kirinus.toml";

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command.clone() {
        Commands::Check(args) => run_check(&cli, &load_config(&cli)?, args),
        Commands::Lint(args) => run_lint(&cli, &load_config(&cli)?, args),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(config_path) => Config::load_from(config_path),
        None => Config::load(),
    }
}

fn is_json(cli: &Cli) -> bool {
    cli.format == Some(OutputFormat::Json)
}

/// Run the check command.
fn run_check(cli: &Cli, config: &Config, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let snapshot = PrSnapshot::load(&args.snapshot)?;
    let engine = RuleEngine::new(config.clone());

    let (failures, warnings) = if is_json(cli) {
        let mut recorder = Recorder::new();
        engine.run(&snapshot, &mut recorder)?;
        println!("{}", recorder.to_json()?);
        (recorder.fails.len(), recorder.warnings.len())
    } else {
        let mut reporter = ConsoleReporter::stdout();
        engine.run(&snapshot, &mut reporter)?;
        let counts = (reporter.failures(), reporter.warnings());
        if counts == (0, 0) {
            println!("{}", style("✓ All checks passed").green().bold());
        }
        counts
    };

    if failures > 0 || (args.strict && warnings > 0) {
        return Err(ValidationError::FindingsFailed { failures, warnings }.into());
    }

    Ok(())
}

/// Run the lint command.
fn run_lint(cli: &Cli, config: &Config, args: LintArgs) -> Result<()> {
    tracing::debug!("Running lint command with args: {:?}", args);

    let message = match (args.message, args.file) {
        (Some(message), _) => message,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .context(format!("Failed to read {}", path.display()))?,
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let outcome = ConventionalLinter::new().lint(&message, &config.conventional.rules)?;

    if is_json(cli) {
        let json = serde_json::to_string_pretty(&outcome).context("Failed to render JSON")?;
        println!("{}", json);
    } else {
        let header = message.lines().next().unwrap_or("");
        println!("{}", style(header).bold());
        for issue in outcome.errors.iter().chain(&outcome.warnings) {
            println!("  {}", issue.format());
        }
        let summary = if outcome.is_valid() {
            style(outcome.summary()).green()
        } else {
            style(outcome.summary()).red()
        };
        println!("{}", summary);
    }

    if !outcome.is_valid() {
        return Err(ValidationError::InvalidMessage {
            count: outcome.errors.len(),
        }
        .into());
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("kirinus {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    use crate::config::default::{example_config, minimal_config, strict_config};

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() && !args.force {
        return Err(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }
        .into());
    }

    let config_content = match args.preset {
        Some(ConfigPreset::Minimal) => minimal_config(),
        Some(ConfigPreset::Strict) => strict_config(),
        Some(ConfigPreset::Standard) | None => example_config(),
    };

    std::fs::write(config_path, config_content).context("Failed to write configuration")?;

    println!("✓ Created {}", CONFIG_FILE_NAME);

    Ok(())
}
