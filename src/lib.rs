//! Groundwork - change-request automation core
//!
//! Groundwork automates infrastructure change requests: when a pull request
//! closes or merges, the resources it held (working directories on disk,
//! project locks, pending plans) are reclaimed and a summary comment is
//! posted back to the pull request. A repo whitelist gates which
//! repositories may use the service at all.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer for the `gw` operator utilities
//! - [`events`] - Event handling: pull-closed cleanup, whitelist checks,
//!   comment formatting
//! - [`core`] - Domain types and configuration
//! - [`locking`] - Abstraction for the project lock store
//! - [`workspace`] - Abstraction for on-disk working directories
//! - [`vcs`] - Abstraction for VCS hosting platforms (GitHub, GitLab)
//!
//! # Correctness Invariants
//!
//! Groundwork maintains the following invariants:
//!
//! 1. Cleanup stages run strictly in order: working directories, then
//!    locks, then the summary comment
//! 2. The first failing stage aborts the pipeline; nothing is rolled back
//! 3. A summary comment is posted only when at least one lock was released
//! 4. Comment output is deterministic for a given set of released locks

pub mod cli;
pub mod core;
pub mod events;
pub mod locking;
pub mod vcs;
pub mod workspace;
