//! events::lock_comment
//!
//! Pure formatting of the summary comment posted after a closed pull's
//! locks are released.
//!
//! # Design
//!
//! This module contains only pure functions: released lock records in,
//! comment text out. No side effects, no shared state, so output is
//! deterministic and freely testable.
//!
//! # Example Output
//!
//! ```markdown
//! Locks and plans deleted for the projects and workspaces modified in this pull request:
//!
//! - path: `owner/repo/staging` workspace: `default`
//! - path: `owner/repo/production` workspaces: `default`, `eu-west-1`
//! ```

use std::collections::BTreeMap;

use crate::core::types::ProjectLock;

/// Fixed header line of the lock-deletion comment.
pub const LOCKS_DELETED_HEADER: &str =
    "Locks and plans deleted for the projects and workspaces modified in this pull request:";

/// Build the comment body announcing which locks and plans were deleted.
///
/// Locks are grouped by their repo-qualified project path (exact string
/// equality). Paths appear in byte-wise ascending order so the output is
/// reproducible no matter what order the lock store released them in.
/// Within a path, workspace names keep their first-seen input order. A
/// path with a single workspace renders `workspace:`; two or more render
/// `workspaces:`.
///
/// Callers are expected to guard against an empty slice (the pull-closed
/// cleaner never formats zero locks); given one anyway, the result is the
/// header line and its trailing newline with no bullets.
///
/// # Example
///
/// ```
/// use groundwork::core::types::{Project, ProjectLock};
/// use groundwork::events::lock_comment::build_lock_comment;
///
/// let lock = ProjectLock {
///     project: Project::new("owner/repo", "staging"),
///     workspace: "default".to_string(),
///     pull_num: 4,
///     user: "alice".to_string(),
///     time: "2024-01-01T00:00:00Z".parse().unwrap(),
/// };
///
/// let comment = build_lock_comment(&[lock]);
/// assert!(comment.contains("- path: `owner/repo/staging` workspace: `default`"));
/// ```
pub fn build_lock_comment(locks: &[ProjectLock]) -> String {
    // BTreeMap iteration gives the byte-wise ascending path order the
    // output format requires.
    let mut workspaces_by_path: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for lock in locks {
        workspaces_by_path
            .entry(lock.project.joined_path())
            .or_default()
            .push(lock.workspace.as_str());
    }

    let mut out = String::from(LOCKS_DELETED_HEADER);
    out.push('\n');
    for (path, workspaces) in &workspaces_by_path {
        let label = if workspaces.len() == 1 {
            "workspace"
        } else {
            "workspaces"
        };
        let names = workspaces
            .iter()
            .map(|w| format!("`{}`", w))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("\n- path: `{}` {}: {}", path, label, names));
    }
    out
}
