//! lock-comment command - Preview the lock-deletion comment
//!
//! Reads a JSON array of lock records and prints the exact comment body
//! the service would post after releasing them.
//!
//! # Input format
//!
//! ```json
//! [
//!   {
//!     "project": { "repo_full_name": "owner/repo", "path": "staging" },
//!     "workspace": "default",
//!     "pull_num": 4,
//!     "user": "alice",
//!     "time": "2024-01-01T00:00:00Z"
//!   }
//! ]
//! ```

use anyhow::{bail, Context as _, Result};
use std::fs;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use crate::cli::Context;
use crate::core::types::ProjectLock;
use crate::events::lock_comment::build_lock_comment;

/// Render the lock-deletion comment for the given records.
///
/// # Arguments
///
/// * `_ctx` - Execution context (the rendered comment is the output, so
///   `--quiet` does not apply)
/// * `file` - JSON file to read; stdin when absent
pub fn lock_comment(_ctx: &Context, file: Option<&Path>) -> Result<ExitCode> {
    let raw = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let locks: Vec<ProjectLock> =
        serde_json::from_str(&raw).context("Failed to parse lock records")?;
    if locks.is_empty() {
        bail!("no lock records in input; the service posts no comment for zero locks");
    }

    println!("{}", build_lock_comment(&locks));
    Ok(ExitCode::SUCCESS)
}
