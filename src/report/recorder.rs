// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! In-memory reporter.

use serde::Serialize;

use crate::error::Result;

use super::{Channel, Reporter};

/// Collects every finding, grouped by channel.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Recorder {
    pub fails: Vec<String>,
    pub warnings: Vec<String>,
    pub messages: Vec<String>,
    pub markdowns: Vec<String>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Findings recorded on one channel.
    pub fn on(&self, channel: Channel) -> &[String] {
        match channel {
            Channel::Fail => &self.fails,
            Channel::Warn => &self.warnings,
            Channel::Message => &self.messages,
            Channel::Markdown => &self.markdowns,
        }
    }

    /// No failures and no warnings.
    pub fn is_clean(&self) -> bool {
        self.fails.is_empty() && self.warnings.is_empty()
    }

    /// Render as a JSON document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self).map_err(std::io::Error::from)?)
    }
}

impl Reporter for Recorder {
    fn fail(&mut self, text: &str) -> Result<()> {
        self.fails.push(text.to_string());
        Ok(())
    }

    fn warn(&mut self, text: &str) -> Result<()> {
        self.warnings.push(text.to_string());
        Ok(())
    }

    fn message(&mut self, text: &str) -> Result<()> {
        self.messages.push(text.to_string());
        Ok(())
    }

    fn markdown(&mut self, text: &str) -> Result<()> {
        self.markdowns.push(text.to_string());
        Ok(())
    }
}
