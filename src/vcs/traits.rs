//! vcs::traits
//!
//! VcsClient trait definition for interacting with VCS hosting platforms.
//!
//! # Design
//!
//! The `VcsClient` trait is async because every operation involves network
//! I/O. Implementations wrap a platform's REST API; this crate consumes
//! only the comment surface and never implements the transport itself.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::Repo;

/// Errors from VCS hosting platform operations.
///
/// These map to common failure modes when talking to a platform's API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VcsError {
    /// Authentication failed (invalid token, expired, insufficient
    /// permissions).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The repository or pull request was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    NetworkError(String),
}

/// A VCS hosting platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Host {
    /// github.com or a GitHub Enterprise instance.
    Github,
    /// gitlab.com or a self-hosted GitLab instance.
    Gitlab,
}

impl std::fmt::Display for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Host::Github => write!(f, "github"),
            Host::Gitlab => write!(f, "gitlab"),
        }
    }
}

/// Client for a VCS hosting platform, routed by [`Host`].
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait VcsClient: Send + Sync {
    /// Append a comment to the pull request's discussion thread.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the repo or pull doesn't exist on the host
    /// - `AuthFailed` if lacking permission to comment
    /// - `ApiError` / `NetworkError` for transport-level failures
    async fn create_comment(
        &self,
        repo: &Repo,
        pull_num: u64,
        body: &str,
        host: Host,
    ) -> Result<(), VcsError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_display() {
        assert_eq!(format!("{}", Host::Github), "github");
        assert_eq!(format!("{}", Host::Gitlab), "gitlab");
    }

    #[test]
    fn vcs_error_display() {
        assert_eq!(
            format!("{}", VcsError::AuthFailed("expired token".into())),
            "authentication failed: expired token"
        );
        assert_eq!(
            format!("{}", VcsError::NotFound("pull #12".into())),
            "not found: pull #12"
        );
        assert_eq!(
            format!(
                "{}",
                VcsError::ApiError {
                    status: 422,
                    message: "Validation failed".into()
                }
            ),
            "API error: 422 - Validation failed"
        );
        assert_eq!(
            format!("{}", VcsError::NetworkError("connection refused".into())),
            "network error: connection refused"
        );
    }
}
