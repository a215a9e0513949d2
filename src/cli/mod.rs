//! Command-line interface module
//!
//! Provides argument parsing and command execution.

pub mod args;
pub mod commands;

pub use args::{BumpArgs, CommonArgs, TagArgs, parse_bump_args, parse_tag_args};
pub use commands::{execute_bump, execute_tag};
