// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for kirinus.
//!
//! The command line is one possible host: it reads a snapshot document,
//! runs the engine and maps the channels onto the terminal or JSON.

pub mod args;
mod dispatch;

pub use args::{Cli, Commands};
pub use dispatch::run;
