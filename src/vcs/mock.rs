//! vcs::mock
//!
//! Mock VCS client for deterministic testing.
//!
//! # Example
//!
//! ```
//! use groundwork::core::types::Repo;
//! use groundwork::vcs::mock::MockVcsClient;
//! use groundwork::vcs::{Host, VcsClient};
//!
//! # tokio_test::block_on(async {
//! let client = MockVcsClient::new();
//! let repo = Repo::new("owner/repo", "github.com");
//!
//! client
//!     .create_comment(&repo, 8, "locks released", Host::Github)
//!     .await
//!     .unwrap();
//!
//! let comments = client.comments();
//! assert_eq!(comments.len(), 1);
//! assert_eq!(comments[0].pull_num, 8);
//! assert_eq!(comments[0].body, "locks released");
//! # });
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::traits::{Host, VcsClient, VcsError};
use crate::core::types::Repo;

/// A comment recorded by the mock client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedComment {
    /// Full name of the repository commented on.
    pub repo_full_name: String,
    /// Pull request number.
    pub pull_num: u64,
    /// Comment body.
    pub body: String,
    /// Host the comment was routed to.
    pub host: Host,
}

/// Mock VCS client for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockVcsClient {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    comments: Vec<PostedComment>,
    /// Error to return from the next calls, if configured.
    fail_with: Option<VcsError>,
}

impl MockVcsClient {
    /// Create a mock that succeeds on every call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure every subsequent `create_comment` to fail with `err`.
    pub fn fail_with(&self, err: VcsError) {
        self.inner.lock().unwrap().fail_with = Some(err);
    }

    /// The comments posted so far.
    pub fn comments(&self) -> Vec<PostedComment> {
        self.inner.lock().unwrap().comments.clone()
    }
}

#[async_trait]
impl VcsClient for MockVcsClient {
    async fn create_comment(
        &self,
        repo: &Repo,
        pull_num: u64,
        body: &str,
        host: Host,
    ) -> Result<(), VcsError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(err) = inner.fail_with.clone() {
            return Err(err);
        }
        inner.comments.push(PostedComment {
            repo_full_name: repo.full_name.clone(),
            pull_num,
            body: body.to_string(),
            host,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_comments_in_order() {
        let client = MockVcsClient::new();
        let repo = Repo::new("owner/repo", "github.com");

        client
            .create_comment(&repo, 1, "first", Host::Github)
            .await
            .unwrap();
        client
            .create_comment(&repo, 2, "second", Host::Gitlab)
            .await
            .unwrap();

        let comments = client.comments();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].body, "first");
        assert_eq!(comments[0].host, Host::Github);
        assert_eq!(comments[1].body, "second");
        assert_eq!(comments[1].host, Host::Gitlab);
    }

    #[tokio::test]
    async fn injected_failure_is_returned_and_nothing_recorded() {
        let client = MockVcsClient::new();
        client.fail_with(VcsError::ApiError {
            status: 502,
            message: "bad gateway".to_string(),
        });

        let repo = Repo::new("owner/repo", "github.com");
        let err = client
            .create_comment(&repo, 1, "body", Host::Github)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            VcsError::ApiError {
                status: 502,
                message: "bad gateway".to_string(),
            }
        );
        assert!(client.comments().is_empty());
    }
}
