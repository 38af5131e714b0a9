//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the callsheet binary.

mod commands;
mod generate;
mod roster;
mod scan;

pub use commands::{Cli, Commands};
pub use generate::run_generate;
pub use roster::run_roster;
pub use scan::run_scan;
