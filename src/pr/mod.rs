// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Pull request snapshot supplied by the host.

mod snapshot;

pub use snapshot::{Commit, PrSnapshot, PullRequest};
