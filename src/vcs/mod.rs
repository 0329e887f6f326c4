//! vcs
//!
//! Abstraction for VCS hosting platforms (GitHub, GitLab).
//!
//! # Architecture
//!
//! The `VcsClient` trait defines the surface this crate needs from a
//! hosting platform: posting comments on pull requests. Implementing the
//! transport (REST clients, authentication) is out of scope here; callers
//! inject a client and the [`Host`] to route each call to.
//!
//! # Modules
//!
//! - `traits`: Core `VcsClient` trait, [`Host`], and [`VcsError`]
//! - [`mock`]: Mock implementation for deterministic testing

pub mod mock;
mod traits;

pub use traits::*;
