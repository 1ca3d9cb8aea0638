// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Severity dispatch.

use crate::config::Severity;
use crate::error::Result;
use crate::report::{Channel, Reporter};

/// Channel a finding lands on, or `None` when it is suppressed.
///
/// `soft_fail` downgrades a failure to a warning.
pub fn channel_for(severity: Severity, soft_fail: bool) -> Option<Channel> {
    match severity {
        Severity::Fail if soft_fail => Some(Channel::Warn),
        Severity::Fail => Some(Channel::Fail),
        Severity::Warn => Some(Channel::Warn),
        Severity::Message => Some(Channel::Message),
        Severity::Disable => None,
    }
}

/// Route a finding to the reporter according to its severity.
pub fn dispatch(
    reporter: &mut dyn Reporter,
    text: &str,
    severity: Severity,
    soft_fail: bool,
) -> Result<()> {
    match channel_for(severity, soft_fail) {
        Some(channel) => {
            tracing::debug!(%severity, %channel, soft_fail, "Reporting finding");
            reporter.emit(channel, text)
        }
        None => {
            tracing::trace!("Finding suppressed: {}", text);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Recorder;

    #[test]
    fn test_channel_for() {
        assert_eq!(channel_for(Severity::Fail, false), Some(Channel::Fail));
        assert_eq!(channel_for(Severity::Fail, true), Some(Channel::Warn));
        assert_eq!(channel_for(Severity::Warn, false), Some(Channel::Warn));
        assert_eq!(channel_for(Severity::Warn, true), Some(Channel::Warn));
        assert_eq!(channel_for(Severity::Message, true), Some(Channel::Message));
        assert_eq!(channel_for(Severity::Disable, false), None);
    }

    #[test]
    fn test_dispatch() {
        let mut recorder = Recorder::new();
        dispatch(&mut recorder, "hard", Severity::Fail, false).unwrap();
        dispatch(&mut recorder, "soft", Severity::Fail, true).unwrap();
        dispatch(&mut recorder, "info", Severity::Message, false).unwrap();
        dispatch(&mut recorder, "gone", Severity::Disable, false).unwrap();

        assert_eq!(recorder.fails, vec!["hard"]);
        assert_eq!(recorder.warnings, vec!["soft"]);
        assert_eq!(recorder.messages, vec!["info"]);
        assert!(recorder.markdowns.is_empty());
    }
}
