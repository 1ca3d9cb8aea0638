// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::Config;

/// Get the default configuration.
pub fn default_config() -> Config {
    Config::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# kirinus configuration file
# Author: Eshan Roy
# SPDX-License-Identifier: MIT
#
# Severities: "fail", "warn", "message", "disable"

# Description and title checks
[pr_lint]
min_body_length = 10
severity = "fail"
scoped = true

# Size thresholds
[branch_size]
max_commits = 10
max_lines = 2000
max_files = 100
severity = "warn"

# Issue key reference in the PR title (e.g. ABC-1234)
[jira]
severity = "warn"

# Markdown summary
[markdown]
file_limit = 50

# Conventional commit grammar, applied to every commit and to the PR title
[conventional]
severity = "fail"

# Rule levels: "off", "warn", "error"
[conventional.rules]
default_ignores = true
type_case = "error"
type_empty = "error"
scope_case = "error"
subject_case = "error"
subject_empty = "error"
subject_full_stop = "error"
body_leading_blank = "warn"
footer_leading_blank = "warn"

[conventional.rules.type_enum]
level = "error"
value = ["build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test"]

[conventional.rules.header_max_length]
level = "error"
value = 100

[conventional.rules.body_max_line_length]
level = "error"
value = 100

[conventional.rules.footer_max_line_length]
level = "error"
value = 100
"#
}

/// Configuration for repositories that only want the essentials.
pub fn minimal_config() -> &'static str {
    r#"# kirinus configuration (minimal)
[pr_lint]
scoped = false

[jira]
severity = "disable"
"#
}

/// Configuration that blocks on every finding.
pub fn strict_config() -> &'static str {
    r#"# kirinus configuration (strict)
[pr_lint]
min_body_length = 50
severity = "fail"
scoped = true

[branch_size]
max_commits = 5
max_lines = 1000
max_files = 50
severity = "fail"

[jira]
severity = "fail"

[conventional]
severity = "fail"
"#
}
