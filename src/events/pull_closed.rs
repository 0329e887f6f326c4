//! events::pull_closed
//!
//! Cleanup for closed and merged pull requests.
//!
//! # Pipeline
//!
//! [`PullClosedCleaner::clean_up`] runs three stages strictly in order:
//!
//! 1. Delete the pull's working directories on disk
//! 2. Release every lock the pull held
//! 3. Post a summary comment listing what was released
//!
//! The first failing stage aborts the rest; nothing is rolled back.
//! Working directories are deleted before locks so that a retry after a
//! failed deletion can safely re-delete before touching the lock store.
//! If lock release then fails, the directories are already gone but the
//! locks remain for a future retry, which is a benign partial state.
//!
//! When the pull held no locks, no comment is posted at all; commenting
//! "nothing was released" on every closed pull would be noise.

use std::sync::Arc;

use thiserror::Error;

use crate::core::types::{PullRequest, Repo};
use crate::events::lock_comment::build_lock_comment;
use crate::locking::{LockError, Locker};
use crate::vcs::{Host, VcsClient, VcsError};
use crate::workspace::{WorkspaceError, WorkspaceManager};

/// The cleanup stage a failure occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupStage {
    /// Deleting the pull's working directories.
    Workspace,
    /// Releasing the pull's locks.
    Locks,
    /// Posting the summary comment.
    Comment,
}

impl std::fmt::Display for CleanupStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CleanupStage::Workspace => write!(f, "workspace"),
            CleanupStage::Locks => write!(f, "locks"),
            CleanupStage::Comment => write!(f, "comment"),
        }
    }
}

/// Errors from pull-closed cleanup, tagged by the stage that failed.
///
/// Exactly one variant per pipeline stage, carrying the collaborator's
/// failure, so callers can match on the stage instead of string-matching
/// wrapped messages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CleanupError {
    /// Deleting the working directories failed; locks were not touched.
    #[error("cleaning up workspace: {0}")]
    Workspace(#[from] WorkspaceError),

    /// Releasing locks failed; no comment was posted.
    #[error("cleaning up locks: {0}")]
    Locks(#[from] LockError),

    /// Posting the summary comment failed; directories and locks are
    /// already cleaned.
    #[error("commenting on pull request: {0}")]
    Comment(#[from] VcsError),
}

impl CleanupError {
    /// The pipeline stage this failure occurred in.
    pub fn stage(&self) -> CleanupStage {
        match self {
            CleanupError::Workspace(_) => CleanupStage::Workspace,
            CleanupError::Locks(_) => CleanupStage::Locks,
            CleanupError::Comment(_) => CleanupStage::Comment,
        }
    }
}

/// Cleans up after a closed or merged pull request.
///
/// Stateless apart from its collaborator handles; the upstream event
/// handler invokes [`clean_up`](Self::clean_up) once per closed pull and
/// is expected to serialize invocations for the same (repo, pull) pair.
/// There are no internal retries and no internal concurrency: the three
/// collaborator calls run sequentially per invocation.
///
/// The whole operation is idempotent as long as deleting absent
/// directories and releasing zero locks are successful no-ops, which both
/// collaborator contracts require.
pub struct PullClosedCleaner {
    workspace: Arc<dyn WorkspaceManager>,
    locker: Arc<dyn Locker>,
    vcs_client: Arc<dyn VcsClient>,
}

impl PullClosedCleaner {
    /// Create a cleaner over the given collaborators.
    pub fn new(
        workspace: Arc<dyn WorkspaceManager>,
        locker: Arc<dyn Locker>,
        vcs_client: Arc<dyn VcsClient>,
    ) -> Self {
        Self {
            workspace,
            locker,
            vcs_client,
        }
    }

    /// Clean up after a closed pull request.
    ///
    /// Deletes the pull's working directories, releases its locks, and
    /// posts a summary comment to the pull when at least one lock was
    /// released. The first failing stage aborts the rest and its error
    /// propagates unchanged, tagged with the stage via
    /// [`CleanupError::stage`].
    pub async fn clean_up(
        &self,
        repo: &Repo,
        pull: &PullRequest,
        host: Host,
    ) -> Result<(), CleanupError> {
        self.workspace.delete(repo, pull).await?;

        // Locks last: a manual unlock doesn't delete its plan, so plans
        // may be laying around with no lock. Releasing by pull cleans
        // both.
        let locks = self.locker.unlock_by_pull(&repo.full_name, pull.num).await?;

        // No locks released means nothing to announce.
        if locks.is_empty() {
            return Ok(());
        }

        let comment = build_lock_comment(&locks);
        self.vcs_client
            .create_comment(repo, pull.num, &comment, host)
            .await?;
        Ok(())
    }
}
