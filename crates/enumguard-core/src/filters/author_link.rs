//! Author permalink rewriter.
//!
//! Pretty author permalinks embed the author slug, which is usually the login
//! name. The rewritten link identifies the author by numeric id only.

use std::fmt;

use serde::Deserialize;

use crate::error::{GuardError, Result};
use crate::hook::{Filter, HookPoint};

/// Site root URL, always ending in `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRoot(String);

impl SiteRoot {
    /// Validate and normalize a configured site root.
    ///
    /// Accepts absolute `http(s)://` URLs with a host, or a root-relative
    /// path; a missing trailing slash is appended.
    pub fn parse(raw: &str) -> Result<Self> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(GuardError::BadRequest("site root must not be empty".into()));
        }
        let after_scheme = s.strip_prefix("http://").or_else(|| s.strip_prefix("https://"));
        match after_scheme {
            Some(rest) => {
                let authority = rest.split('/').next().unwrap_or_default();
                if authority.is_empty() {
                    return Err(GuardError::BadRequest(format!("site root has no host: {s}")));
                }
            }
            None if !s.starts_with('/') => {
                return Err(GuardError::BadRequest(format!(
                    "site root must be an http(s) URL or start with '/': {s}"
                )));
            }
            None => {}
        }
        if s.contains('?') || s.contains('#') {
            return Err(GuardError::BadRequest(format!(
                "site root must not carry a query or fragment: {s}"
            )));
        }

        let mut root = s.to_string();
        if !root.ends_with('/') {
            root.push('/');
        }
        Ok(Self(root))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Arguments of author permalink generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthorLinkArgs {
    /// Link the host prepared (ignored).
    #[serde(default)]
    pub link: String,
    pub author_id: u64,
}

#[derive(Debug, Clone)]
pub struct AuthorLinkRewriter {
    root: SiteRoot,
}

impl AuthorLinkRewriter {
    pub fn new(root: SiteRoot) -> Self {
        Self { root }
    }

    /// `<root>?author=<id>`
    pub fn link_for(&self, author_id: u64) -> String {
        format!("{}?author={author_id}", self.root)
    }
}

impl Filter for AuthorLinkRewriter {
    type Input = AuthorLinkArgs;
    type Output = String;

    fn point(&self) -> HookPoint {
        HookPoint::AuthorLink
    }

    fn apply(&self, input: AuthorLinkArgs) -> String {
        self.link_for(input.author_id)
    }
}
