//! allowed command - Check a repository against the whitelist
//!
//! Evaluates the same predicate the service uses to admit webhook events,
//! so operators can verify a whitelist spec before deploying it.

use anyhow::{Context as _, Result};
use std::process::ExitCode;

use crate::cli::Context;
use crate::core::config::Config;
use crate::events::whitelist::RepoWhitelist;

/// Exit code when the repository is not whitelisted.
const EXIT_NOT_ALLOWED: u8 = 2;

/// Check whether `repo` on `host` is whitelisted.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `repo` - Repository full name, e.g. "owner/repo"
/// * `host` - Hostname, e.g. "github.com"
/// * `whitelist` - Spec to evaluate; falls back to the config value
pub fn allowed(
    ctx: &Context,
    repo: &str,
    host: &str,
    whitelist: Option<&str>,
) -> Result<ExitCode> {
    let spec = match whitelist {
        Some(s) => s.to_string(),
        None => {
            let config = Config::load(ctx.config.as_deref()).context("Failed to load config")?;
            config.repo_whitelist
        }
    };

    let w = RepoWhitelist::new(spec);
    if w.is_whitelisted(repo, host) {
        if !ctx.quiet {
            println!("allowed: {}/{}", host, repo);
        }
        Ok(ExitCode::SUCCESS)
    } else {
        if !ctx.quiet {
            println!("not allowed: {}/{}", host, repo);
        }
        Ok(ExitCode::from(EXIT_NOT_ALLOWED))
    }
}
