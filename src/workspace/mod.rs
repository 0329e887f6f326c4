//! workspace
//!
//! Abstraction for the on-disk working directories the service keeps per
//! pull request.
//!
//! # Design
//!
//! The `WorkspaceManager` trait is async because deletion touches disk and
//! may be backed by remote storage. Implementations own their layout; this
//! crate only requires that deletion covers every workspace of a pull and
//! is an idempotent no-op when nothing is checked out.
//!
//! # Modules
//!
//! - [`mock`]: Mock implementation for deterministic testing

pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

use crate::core::types::{PullRequest, Repo};

/// Errors from workspace operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkspaceError {
    /// Deleting the pull's working directories failed.
    #[error("failed to delete working directories: {0}")]
    DeleteFailed(String),
}

/// Manages the working directories checked out per pull request.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait WorkspaceManager: Send + Sync {
    /// Delete all on-disk state for the pull request, across every
    /// workspace.
    ///
    /// Deleting state that was already removed (or never existed) is a
    /// successful no-op, so a retried cleanup can safely re-delete.
    async fn delete(&self, repo: &Repo, pull: &PullRequest) -> Result<(), WorkspaceError>;
}
