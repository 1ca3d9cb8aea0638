// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Terminal reporter.

use console::{style, Term};

use crate::error::{ReportError, Result};

use super::{Channel, Reporter};

/// Prints each finding as it is routed and keeps a tally.
pub struct ConsoleReporter {
    term: Term,
    failures: usize,
    warnings: usize,
}

impl ConsoleReporter {
    /// Report to stdout.
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
            failures: 0,
            warnings: 0,
        }
    }

    pub fn failures(&self) -> usize {
        self.failures
    }

    pub fn warnings(&self) -> usize {
        self.warnings
    }

    fn write(&self, channel: Channel, text: &str) -> Result<()> {
        let prefix = match channel {
            Channel::Fail => style("✗ fail").red().bold(),
            Channel::Warn => style("⚠ warn").yellow().bold(),
            Channel::Message => style("ℹ info").cyan().bold(),
            Channel::Markdown => style("¶ markdown").dim(),
        };

        let mut lines = text.trim().lines();
        let first = lines.next().unwrap_or("");
        let mut output = format!("{} {}", prefix, first);
        for line in lines {
            output.push_str("\n  ");
            output.push_str(line);
        }

        self.term.write_line(&output).map_err(|e| {
            ReportError::ChannelUnavailable {
                channel: channel.to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }
}

impl Reporter for ConsoleReporter {
    fn fail(&mut self, text: &str) -> Result<()> {
        self.failures += 1;
        self.write(Channel::Fail, text)
    }

    fn warn(&mut self, text: &str) -> Result<()> {
        self.warnings += 1;
        self.write(Channel::Warn, text)
    }

    fn message(&mut self, text: &str) -> Result<()> {
        self.write(Channel::Message, text)
    }

    fn markdown(&mut self, text: &str) -> Result<()> {
        self.write(Channel::Markdown, text)
    }
}
