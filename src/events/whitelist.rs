//! events::whitelist
//!
//! The repo whitelist gates which repositories may use the service. It is
//! checked on every incoming webhook event before any other processing.
//!
//! # Pattern language
//!
//! The whitelist is a single comma-separated string of tokens. Each token
//! is one of:
//!
//! - `*` - matches every repository on every host
//! - `<prefix>*` - matches candidates beginning with `<prefix>`
//! - anything else - matches by exact, full-string equality
//!
//! A candidate is `<hostname>/<owner>/<repo>`, e.g.
//! `github.com/hashicorp/terraform`. Matching is byte-wise and
//! case-sensitive, and tokens are compared literally: surrounding
//! whitespace is part of the token, so `"a, b"` contains the tokens `"a"`
//! and `" b"`.
//!
//! # Example
//!
//! ```
//! use groundwork::events::whitelist::RepoWhitelist;
//!
//! let whitelist = RepoWhitelist::new("github.com/myorg/*");
//! assert!(whitelist.is_whitelisted("myorg/infra", "github.com"));
//! assert!(!whitelist.is_whitelisted("otherorg/infra", "github.com"));
//! assert!(!whitelist.is_whitelisted("myorg/infra", "gitlab.com"));
//! ```

/// A whitelist of repositories permitted to use the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoWhitelist {
    /// Comma-separated pattern tokens. The empty string rejects everything.
    pub whitelist: String,
}

impl RepoWhitelist {
    /// Create a whitelist from its comma-separated spec string.
    pub fn new(whitelist: impl Into<String>) -> Self {
        Self {
            whitelist: whitelist.into(),
        }
    }

    /// Whether the repository is permitted to use the service.
    ///
    /// Tokens are tried in order; the first match wins. An exact token
    /// never matches a longer candidate, and a trailing-`*` token matches
    /// any candidate carrying its prefix.
    pub fn is_whitelisted(&self, repo_full_name: &str, hostname: &str) -> bool {
        let candidate = format!("{}/{}", hostname, repo_full_name);
        self.whitelist.split(',').any(|token| {
            if token == "*" {
                true
            } else if let Some(prefix) = token.strip_suffix('*') {
                candidate.starts_with(prefix)
            } else {
                candidate == token
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The full decision table, one case per observable behavior of the
    // pattern language.
    #[test]
    fn is_whitelisted_cases() {
        let cases: &[(&str, &str, &str, &str, bool)] = &[
            (
                "exact match",
                "github.com/owner/repo",
                "owner/repo",
                "github.com",
                true,
            ),
            (
                "exact match shouldn't match anything else",
                "github.com/owner/repo",
                "owner/rep",
                "github.com",
                false,
            ),
            ("* should match anything", "*", "owner/repo", "github.com", true),
            (
                "github.com* should match anything github",
                "github.com*",
                "owner/repo",
                "github.com",
                true,
            ),
            (
                "github.com* should not match gitlab",
                "github.com*",
                "owner/repo",
                "gitlab.com",
                false,
            ),
            (
                "github.com/o* should match",
                "github.com/o*",
                "owner/repo",
                "github.com",
                true,
            ),
            (
                "github.com/owner/rep* should not match",
                "github.com/owner/rep*",
                "owner/re",
                "github.com",
                false,
            ),
            (
                "github.com/owner/rep* should match",
                "github.com/owner/rep*",
                "owner/rep",
                "github.com",
                true,
            ),
            (
                "github.com/o* should not match",
                "github.com/o*",
                "somethingelse/repo",
                "github.com",
                false,
            ),
            (
                "github.com/owner/repo* should match exactly",
                "github.com/owner/repo*",
                "owner/repo",
                "github.com",
                true,
            ),
            (
                "github.com/owner/* should match anything in org",
                "github.com/owner/*",
                "owner/repo",
                "github.com",
                true,
            ),
            (
                "github.com/owner/* should not match anything not in org",
                "github.com/owner/*",
                "otherorg/repo",
                "github.com",
                false,
            ),
            (
                "if there's any * it should match",
                "github.com/owner/repo,*",
                "otherorg/repo",
                "github.com",
                true,
            ),
            (
                "any exact match should match",
                "github.com/owner/repo,github.com/otherorg/repo",
                "otherorg/repo",
                "github.com",
                true,
            ),
            (
                "longer shouldn't match on exact",
                "github.com/owner/repo",
                "owner/repo-longer",
                "github.com",
                false,
            ),
        ];

        for (description, whitelist, repo, hostname, expected) in cases {
            let w = RepoWhitelist::new(*whitelist);
            assert_eq!(
                w.is_whitelisted(repo, hostname),
                *expected,
                "case: {}",
                description
            );
        }
    }

    #[test]
    fn empty_whitelist_rejects_everything() {
        let w = RepoWhitelist::new("");
        assert!(!w.is_whitelisted("owner/repo", "github.com"));
        assert!(!w.is_whitelisted("", ""));
    }

    #[test]
    fn tokens_are_not_trimmed() {
        // " *" is a prefix pattern for candidates starting with a space,
        // not a universal wildcard.
        let w = RepoWhitelist::new("github.com/owner/repo, *");
        assert!(!w.is_whitelisted("otherorg/repo", "github.com"));
        assert!(w.is_whitelisted("owner/repo", "github.com"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let w = RepoWhitelist::new("github.com/Owner/Repo");
        assert!(!w.is_whitelisted("owner/repo", "github.com"));
        assert!(w.is_whitelisted("Owner/Repo", "github.com"));
    }
}
