// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Issue key reference check.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::JiraConfig;
use crate::error::Result;
use crate::pr::PrSnapshot;
use crate::report::Reporter;

use super::dispatch::dispatch;
use super::Rule;

lazy_static! {
    /// Three upper-case letters, a dash and four digits, e.g. `MHP-1234`.
    static ref ISSUE_KEY_REGEX: Regex = Regex::new(r"[A-Z]{3}-[0-9]{4}").unwrap();
}

pub(crate) const MISSING_REFERENCE: &str = "Is this PR related to a JIRA issue?\n\
     If so, link it at the end of the PR title, e.g. `feat(my-app): my description [MHP-XXXX]`. \
     Therefore, the PR will be referenced in JIRA so everybody can see it.";

/// Whether `title` mentions an issue key.
pub fn has_issue_reference(title: &str) -> bool {
    ISSUE_KEY_REGEX.is_match(title)
}

/// Asks for an issue key in the PR title.
#[derive(Debug)]
pub struct JiraReference<'a> {
    options: &'a JiraConfig,
}

impl<'a> JiraReference<'a> {
    pub fn new(options: &'a JiraConfig) -> Self {
        Self { options }
    }
}

impl Rule for JiraReference<'_> {
    fn name(&self) -> &str {
        "jira"
    }

    fn evaluate(&self, snapshot: &PrSnapshot, reporter: &mut dyn Reporter) -> Result<()> {
        if !has_issue_reference(&snapshot.pr.title) {
            dispatch(reporter, MISSING_REFERENCE, self.options.severity, false)?;
        }
        Ok(())
    }
}
