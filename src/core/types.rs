//! core::types
//!
//! Domain types for repositories, pull requests, projects, and locks.
//!
//! # Types
//!
//! - [`Repo`] - A repository on a VCS hosting platform
//! - [`PullRequest`] - A pull/merge request, identified by number
//! - [`Project`] - A project directory within a repository
//! - [`ProjectLock`] - A lock held on a (project, workspace) pair by a pull
//!
//! These are plain data carriers: the lock store and workspace manager
//! construct them, and the event layer consumes them. All derive serde so
//! lock records can cross process boundaries (and feed the `gw
//! lock-comment` utility) as JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository on a VCS hosting platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    /// Full name in `owner/name` form, e.g. `hashicorp/terraform`.
    pub full_name: String,
    /// Hostname of the platform the repository lives on, e.g. `github.com`.
    pub hostname: String,
}

impl Repo {
    /// Create a repo from its full name and hostname.
    pub fn new(full_name: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            hostname: hostname.into(),
        }
    }

    /// The owner (organization or user) portion of the full name.
    ///
    /// Returns the whole full name if it contains no `/`.
    pub fn owner(&self) -> &str {
        self.full_name
            .split_once('/')
            .map(|(owner, _)| owner)
            .unwrap_or(&self.full_name)
    }

    /// The repository name portion of the full name.
    pub fn name(&self) -> &str {
        self.full_name
            .split_once('/')
            .map(|(_, name)| name)
            .unwrap_or(&self.full_name)
    }
}

/// A pull (or merge) request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// Pull request number, unique within its repository.
    pub num: u64,
}

impl PullRequest {
    /// Create a pull request reference by number.
    pub fn new(num: u64) -> Self {
        Self { num }
    }
}

/// A project directory within a repository.
///
/// `path` is relative to the repository root; `.` denotes the root itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Full name of the repository the project belongs to.
    pub repo_full_name: String,
    /// Path of the project directory relative to the repository root.
    pub path: String,
}

impl Project {
    /// Create a project from its repository full name and relative path.
    pub fn new(repo_full_name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            repo_full_name: repo_full_name.into(),
            path: path.into(),
        }
    }

    /// The project path qualified by its repository, e.g.
    /// `owner/repo/terraform/staging`.
    ///
    /// Lock records for the same project always produce the same joined
    /// path; comment formatting groups on exact equality of this string.
    pub fn joined_path(&self) -> String {
        format!("{}/{}", self.repo_full_name, self.path)
    }
}

/// A lock asserting exclusive claim on a (project, workspace) pair for a
/// specific pull request.
///
/// Locks are created by the lock store when a plan or apply runs and
/// destroyed when the pull closes (or through a manual unlock). The
/// `workspace` field is never empty; the default workspace is named
/// `default`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLock {
    /// The locked project.
    pub project: Project,
    /// The named workspace the lock covers.
    pub workspace: String,
    /// Number of the pull request holding the lock.
    pub pull_num: u64,
    /// Username of whoever triggered the command that acquired the lock.
    pub user: String,
    /// When the lock was acquired.
    pub time: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_owner_and_name() {
        let repo = Repo::new("owner/repo", "github.com");
        assert_eq!(repo.owner(), "owner");
        assert_eq!(repo.name(), "repo");
    }

    #[test]
    fn repo_without_slash_degrades() {
        let repo = Repo::new("justaname", "github.com");
        assert_eq!(repo.owner(), "justaname");
        assert_eq!(repo.name(), "justaname");
    }

    #[test]
    fn joined_path_qualifies_by_repo() {
        let project = Project::new("owner/repo", "terraform/staging");
        assert_eq!(project.joined_path(), "owner/repo/terraform/staging");
    }

    #[test]
    fn joined_path_for_repo_root() {
        let project = Project::new("owner/repo", ".");
        assert_eq!(project.joined_path(), "owner/repo/.");
    }

    #[test]
    fn project_lock_serde_roundtrip() {
        let lock = ProjectLock {
            project: Project::new("owner/repo", "infra"),
            workspace: "default".to_string(),
            pull_num: 7,
            user: "alice".to_string(),
            time: "2024-01-01T00:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_string(&lock).unwrap();
        let parsed: ProjectLock = serde_json::from_str(&json).unwrap();
        assert_eq!(lock, parsed);
    }
}
