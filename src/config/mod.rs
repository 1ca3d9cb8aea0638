// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for kirinus.
//!
//! This module handles locating, parsing and defaulting the per-rule-group
//! options read from kirinus.toml.

pub mod default;
mod loader;
mod schema;

pub use default::default_config;
pub use loader::{
    find_config_file, find_config_file_from, load_config, load_config_from, parse_config,
};
pub use schema::*;
