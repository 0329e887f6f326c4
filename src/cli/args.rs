//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Use this config file
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Groundwork - operator utilities for the change-request automation service
#[derive(Parser, Debug)]
#[command(name = "gw")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether a repository is whitelisted for the service
    #[command(
        name = "allowed",
        long_about = "Check whether a repository is whitelisted for the service.\n\n\
            Evaluates the repo whitelist against <host>/<repo> exactly as the \
            service does when admitting webhook events. The whitelist comes from \
            the config file unless --whitelist is given.\n\n\
            Exit codes: 0 allowed, 2 not allowed, 1 error."
    )]
    Allowed {
        /// Repository full name, e.g. "owner/repo"
        repo: String,

        /// Hostname the repository lives on, e.g. "github.com"
        #[arg(long)]
        host: String,

        /// Whitelist spec to evaluate; overrides the config value
        #[arg(long)]
        whitelist: Option<String>,
    },

    /// Render the comment posted after a closed pull's locks are released
    #[command(
        name = "lock-comment",
        long_about = "Render the comment posted after a closed pull's locks are released.\n\n\
            Reads a JSON array of lock records (from stdin by default) and prints \
            the exact comment body the service would post to the pull request. \
            Useful for previewing output and debugging lock store dumps."
    )]
    LockComment {
        /// Read lock records from this JSON file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },
}
