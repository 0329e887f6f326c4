//! locking
//!
//! Abstraction for the project lock store.
//!
//! # Design
//!
//! Locks assert an exclusive claim on a (project, workspace) pair for a
//! specific pull request. The store's persistence is an implementation
//! concern; this crate consumes it only through the `Locker` trait.
//!
//! Releasing locks through [`Locker::unlock_by_pull`] also removes the
//! pending plans those locks guarded. A manual single-project unlock (not
//! part of this trait) does not delete its plan, so plan files can outlive
//! their locks on disk.
//!
//! # Modules
//!
//! - [`mock`]: Mock implementation for deterministic testing

pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

use crate::core::types::ProjectLock;

/// Errors from lock store operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LockError {
    /// The backing store could not be reached or refused the operation.
    #[error("lock store unavailable: {0}")]
    Unavailable(String),

    /// A stored record could not be decoded.
    #[error("corrupt lock record: {0}")]
    Corrupt(String),
}

/// The project lock store.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait Locker: Send + Sync {
    /// Release every lock held by the given pull request and return the
    /// released records.
    ///
    /// A pull holding no locks yields an empty vec, not an error, so the
    /// call is an idempotent no-op on already-clean state.
    async fn unlock_by_pull(
        &self,
        repo_full_name: &str,
        pull_num: u64,
    ) -> Result<Vec<ProjectLock>, LockError>;
}
