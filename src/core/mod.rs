//! core
//!
//! Core domain types and configuration for Groundwork.
//!
//! # Modules
//!
//! - [`types`] - Domain types: Repo, PullRequest, Project, ProjectLock
//! - [`config`] - Configuration schema and loading

pub mod config;
pub mod types;
