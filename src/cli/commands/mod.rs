//! cli::commands
//!
//! Command handlers, one module per command.

pub mod allowed;
pub mod lock_comment;

use anyhow::Result;
use std::process::ExitCode;

use super::{Command, Context};

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<ExitCode> {
    match command {
        Command::Allowed {
            repo,
            host,
            whitelist,
        } => allowed::allowed(ctx, &repo, &host, whitelist.as_deref()),
        Command::LockComment { file } => lock_comment::lock_comment(ctx, file.as_deref()),
    }
}
