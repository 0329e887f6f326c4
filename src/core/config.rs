//! core::config
//!
//! Configuration schema and loading.
//!
//! # Locations
//!
//! The config file is searched in order:
//! 1. An explicit path (the `--config` flag)
//! 2. `$GROUNDWORK_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/groundwork/config.toml` (platform config dir)
//!
//! Default locations whose file does not exist are skipped, so an env var
//! naming a missing file falls through to the platform config dir. When no
//! file is found anywhere, [`Config::default`] is returned. An explicitly
//! given path must exist.
//!
//! # Schema
//!
//! ```toml
//! # Comma-separated whitelist of host/repo patterns allowed to use the
//! # service. Empty (the default) rejects everything.
//! repo_whitelist = "github.com/myorg/*"
//!
//! # Where per-pull working directories and plans are kept.
//! data_dir = "/var/lib/groundwork"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::events::whitelist::RepoWhitelist;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "GROUNDWORK_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Service configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Comma-separated whitelist of host/repo patterns. The empty default
    /// rejects every repository; operators must opt repos in.
    #[serde(default)]
    pub repo_whitelist: String,

    /// Root directory for per-pull working directories and plans. Consumed
    /// by the workspace manager, not by this crate's core logic.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration.
    ///
    /// With `Some(path)` the file must exist and parse. With `None` the
    /// env var and platform default locations are tried; if no file is
    /// found there, defaults are returned.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            Some(p) => Self::read_file(p),
            None => match existing_default_path() {
                Some(p) => Self::read_file(&p),
                None => Ok(Config::default()),
            },
        }
    }

    /// The whitelist predicate configured for this service.
    pub fn whitelist(&self) -> RepoWhitelist {
        RepoWhitelist::new(self.repo_whitelist.clone())
    }

    fn read_file(path: &Path) -> Result<Config, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Resolve the default config file location.
///
/// Candidates are tried in order: `$GROUNDWORK_CONFIG`, then the platform
/// config directory. A candidate whose file does not exist is skipped.
/// Returns `None` when no candidate has a file.
fn existing_default_path() -> Option<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(p) = std::env::var(CONFIG_ENV_VAR) {
        if !p.is_empty() {
            candidates.push(PathBuf::from(p));
        }
    }
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("groundwork").join("config.toml"));
    }
    candidates.into_iter().find(|p| p.exists())
}
