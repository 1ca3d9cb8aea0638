// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Pull request description and title checks.

use crate::commit::extract_scope;
use crate::config::{PrLintConfig, Severity};
use crate::error::Result;
use crate::pr::PrSnapshot;
use crate::report::Reporter;

use super::dispatch::dispatch;
use super::Rule;

/// Longest title accepted, in characters.
pub const MAX_TITLE_LENGTH: usize = 72;

const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".gif"];

pub(crate) const NEEDS_DESCRIPTION: &str =
    "PR needs a proper description. Add a few sentences about what you want to change.";

pub(crate) const MISSING_SCOPE: &str = "This PR does not have a scope. This might be ok, if the \
     change is global and you do not want to have it in the Changelog. But it is not the normal \
     case. Are you sure a scope is not needed? Consider adding a scope to the PR title with the \
     `<type>(<scope>): <description>` format to avoid this issue. \
     See [Conventional Commits](https://conventionalcommits.org).";

pub(crate) const SCREENSHOTS: &str =
    "You have added screenshots, you are an AMAZING human being :star:!";

/// Checks the PR body and title.
#[derive(Debug)]
pub struct PrLint<'a> {
    options: &'a PrLintConfig,
}

impl<'a> PrLint<'a> {
    pub fn new(options: &'a PrLintConfig) -> Self {
        Self { options }
    }

    fn check_description(&self, body: &str, reporter: &mut dyn Reporter) -> Result<()> {
        if body.chars().count() < self.options.min_body_length {
            dispatch(reporter, NEEDS_DESCRIPTION, self.options.severity, false)?;
        }
        Ok(())
    }

    fn check_title_length(&self, title: &str, reporter: &mut dyn Reporter) -> Result<()> {
        let len = title.chars().count();
        if len > MAX_TITLE_LENGTH {
            let text = format!(
                "PR title is longer than {} characters ({}). It should adapt to the \
                 [Commit Message Guidelines](https://gist.github.com/robertpainsi/b632364184e70900af4ab688decf6f53) \
                 and [Conventional Commits](https://conventionalcommits.org).",
                MAX_TITLE_LENGTH, len
            );
            dispatch(reporter, &text, self.options.severity, false)?;
        }
        Ok(())
    }

    fn check_scope(&self, title: &str, reporter: &mut dyn Reporter) -> Result<()> {
        if self.options.scoped && extract_scope(title).is_none() {
            // A missing scope is stylistic: never block on it.
            dispatch(reporter, MISSING_SCOPE, self.options.severity, true)?;
        }
        Ok(())
    }

    fn check_screenshots(&self, body: &str, reporter: &mut dyn Reporter) -> Result<()> {
        if self.options.severity != Severity::Disable
            && IMAGE_EXTENSIONS.iter().any(|ext| body.contains(ext))
        {
            dispatch(reporter, SCREENSHOTS, Severity::Message, false)?;
        }
        Ok(())
    }
}

impl Rule for PrLint<'_> {
    fn name(&self) -> &str {
        "pr-lint"
    }

    fn evaluate(&self, snapshot: &PrSnapshot, reporter: &mut dyn Reporter) -> Result<()> {
        let pr = &snapshot.pr;
        self.check_description(&pr.body, reporter)?;
        self.check_title_length(&pr.title, reporter)?;
        self.check_scope(&pr.title, reporter)?;
        self.check_screenshots(&pr.body, reporter)
    }
}
