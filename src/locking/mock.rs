//! locking::mock
//!
//! Mock lock store for deterministic testing.
//!
//! # Example
//!
//! ```
//! use groundwork::core::types::{Project, ProjectLock};
//! use groundwork::locking::mock::MockLocker;
//! use groundwork::locking::Locker;
//!
//! # tokio_test::block_on(async {
//! let lock = ProjectLock {
//!     project: Project::new("owner/repo", "staging"),
//!     workspace: "default".to_string(),
//!     pull_num: 5,
//!     user: "alice".to_string(),
//!     time: "2024-01-01T00:00:00Z".parse().unwrap(),
//! };
//! let locker = MockLocker::with_locks(vec![lock.clone()]);
//!
//! let released = locker.unlock_by_pull("owner/repo", 5).await.unwrap();
//! assert_eq!(released, vec![lock]);
//! assert!(locker.remaining().is_empty());
//! # });
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{LockError, Locker};
use crate::core::types::ProjectLock;

/// Mock lock store for testing.
///
/// Seeded with lock records; `unlock_by_pull` drains the records matching
/// the given (repo, pull) and returns them in seed order. Thread-safe via
/// internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockLocker {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    locks: Vec<ProjectLock>,
    /// Recorded calls as (repo full name, pull number).
    calls: Vec<(String, u64)>,
    /// Error to return from the next calls, if configured.
    fail_with: Option<LockError>,
}

impl MockLocker {
    /// Create an empty mock lock store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock lock store seeded with the given records.
    pub fn with_locks(locks: Vec<ProjectLock>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                locks,
                calls: Vec::new(),
                fail_with: None,
            })),
        }
    }

    /// Configure every subsequent `unlock_by_pull` to fail with `err`.
    pub fn fail_with(&self, err: LockError) {
        self.inner.lock().unwrap().fail_with = Some(err);
    }

    /// The lock records still held in the store.
    pub fn remaining(&self) -> Vec<ProjectLock> {
        self.inner.lock().unwrap().locks.clone()
    }

    /// The `unlock_by_pull` calls made so far, as (repo full name, pull
    /// number).
    pub fn calls(&self) -> Vec<(String, u64)> {
        self.inner.lock().unwrap().calls.clone()
    }
}

#[async_trait]
impl Locker for MockLocker {
    async fn unlock_by_pull(
        &self,
        repo_full_name: &str,
        pull_num: u64,
    ) -> Result<Vec<ProjectLock>, LockError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(err) = inner.fail_with.clone() {
            return Err(err);
        }
        inner.calls.push((repo_full_name.to_string(), pull_num));

        let (released, remaining): (Vec<_>, Vec<_>) = inner.locks.drain(..).partition(|lock| {
            lock.project.repo_full_name == repo_full_name && lock.pull_num == pull_num
        });
        inner.locks = remaining;
        Ok(released)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Project;

    fn lock(repo: &str, path: &str, pull_num: u64) -> ProjectLock {
        ProjectLock {
            project: Project::new(repo, path),
            workspace: "default".to_string(),
            pull_num,
            user: "tester".to_string(),
            time: "2024-01-01T00:00:00Z".parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn releases_only_matching_locks() {
        let locker = MockLocker::with_locks(vec![
            lock("owner/repo", "a", 1),
            lock("owner/repo", "b", 2),
            lock("other/repo", "a", 1),
        ]);

        let released = locker.unlock_by_pull("owner/repo", 1).await.unwrap();
        assert_eq!(released, vec![lock("owner/repo", "a", 1)]);
        assert_eq!(
            locker.remaining(),
            vec![lock("owner/repo", "b", 2), lock("other/repo", "a", 1)]
        );
    }

    #[tokio::test]
    async fn unlocking_a_pull_with_no_locks_is_a_successful_noop() {
        let locker = MockLocker::new();
        let released = locker.unlock_by_pull("owner/repo", 9).await.unwrap();
        assert!(released.is_empty());
        assert_eq!(locker.calls(), vec![("owner/repo".to_string(), 9)]);
    }

    #[tokio::test]
    async fn injected_failure_is_returned_and_store_untouched() {
        let locker = MockLocker::with_locks(vec![lock("owner/repo", "a", 1)]);
        locker.fail_with(LockError::Unavailable("connection refused".to_string()));

        let err = locker.unlock_by_pull("owner/repo", 1).await.unwrap_err();
        assert_eq!(
            err,
            LockError::Unavailable("connection refused".to_string())
        );
        assert_eq!(locker.remaining().len(), 1);
        assert!(locker.calls().is_empty());
    }
}
