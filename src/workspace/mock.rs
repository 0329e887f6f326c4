//! workspace::mock
//!
//! Mock workspace manager for deterministic testing.
//!
//! # Example
//!
//! ```
//! use groundwork::core::types::{PullRequest, Repo};
//! use groundwork::workspace::mock::MockWorkspaceManager;
//! use groundwork::workspace::WorkspaceManager;
//!
//! # tokio_test::block_on(async {
//! let workspace = MockWorkspaceManager::new();
//! let repo = Repo::new("owner/repo", "github.com");
//!
//! workspace.delete(&repo, &PullRequest::new(3)).await.unwrap();
//! assert_eq!(workspace.deleted(), vec![("owner/repo".to_string(), 3)]);
//! # });
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{WorkspaceError, WorkspaceManager};
use crate::core::types::{PullRequest, Repo};

/// Mock workspace manager for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockWorkspaceManager {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    /// Recorded deletions as (repo full name, pull number).
    deleted: Vec<(String, u64)>,
    /// Error to return from the next calls, if configured.
    fail_with: Option<WorkspaceError>,
}

impl MockWorkspaceManager {
    /// Create a mock that succeeds on every call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure every subsequent `delete` to fail with `err`.
    pub fn fail_with(&self, err: WorkspaceError) {
        self.inner.lock().unwrap().fail_with = Some(err);
    }

    /// The deletions performed so far, as (repo full name, pull number).
    pub fn deleted(&self) -> Vec<(String, u64)> {
        self.inner.lock().unwrap().deleted.clone()
    }
}

#[async_trait]
impl WorkspaceManager for MockWorkspaceManager {
    async fn delete(&self, repo: &Repo, pull: &PullRequest) -> Result<(), WorkspaceError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(err) = inner.fail_with.clone() {
            return Err(err);
        }
        inner.deleted.push((repo.full_name.clone(), pull.num));
        Ok(())
    }
}
