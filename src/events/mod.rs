//! events
//!
//! Event handling for the change-request automation service.
//!
//! # Modules
//!
//! - [`whitelist`] - Admission check: which repositories may use the
//!   service. Runs first in the request path, before any other processing.
//! - [`pull_closed`] - Cleanup pipeline invoked once per closed/merged
//!   pull request.
//! - [`lock_comment`] - Pure formatting of the summary comment the cleanup
//!   posts.

pub mod lock_comment;
pub mod pull_closed;
pub mod whitelist;

pub use lock_comment::build_lock_comment;
pub use pull_closed::{CleanupError, CleanupStage, PullClosedCleaner};
pub use whitelist::RepoWhitelist;
