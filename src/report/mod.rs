// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Output channels.
//!
//! Rule groups never print anything themselves. Every finding goes through a
//! [`Reporter`] handed to the engine, so the host decides where the four
//! channels end up: a terminal, a JSON document, or a comment on the pull
//! request.

mod console;
mod recorder;

pub use console::ConsoleReporter;
pub use recorder::Recorder;

use crate::error::Result;

/// The four channels a host exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Fail,
    Warn,
    Message,
    Markdown,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::Fail => write!(f, "fail"),
            Channel::Warn => write!(f, "warn"),
            Channel::Message => write!(f, "message"),
            Channel::Markdown => write!(f, "markdown"),
        }
    }
}

/// Sink for findings. Errors propagate out of the run.
pub trait Reporter {
    /// Blocking failure.
    fn fail(&mut self, text: &str) -> Result<()>;

    /// Advisory warning.
    fn warn(&mut self, text: &str) -> Result<()>;

    /// Informational message.
    fn message(&mut self, text: &str) -> Result<()>;

    /// Markdown block appended to the review.
    fn markdown(&mut self, text: &str) -> Result<()>;

    /// Route `text` to `channel`.
    fn emit(&mut self, channel: Channel, text: &str) -> Result<()> {
        match channel {
            Channel::Fail => self.fail(text),
            Channel::Warn => self.warn(text),
            Channel::Message => self.message(text),
            Channel::Markdown => self.markdown(text),
        }
    }
}
