//! cli
//!
//! Command-line interface layer for the `gw` operator utilities.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Does NOT talk to lock stores or VCS hosts; the utilities exercise
//!   only the pure functions and the configuration layer

pub mod args;
pub mod commands;

pub use args::{Cli, Command};

use anyhow::Result;
use std::path::PathBuf;
use std::process::ExitCode;

/// Execution context derived from global CLI flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Explicit config file path, if given.
    pub config: Option<PathBuf>,
    /// Minimal output.
    pub quiet: bool,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse_args();

    let ctx = Context {
        config: cli.config.clone(),
        quiet: cli.quiet,
    };

    commands::dispatch(cli.command, &ctx)
}
