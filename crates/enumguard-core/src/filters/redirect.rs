//! Canonical redirect guard.
//!
//! With pretty permalinks the host redirects `/?author=1` to
//! `/author/<slug>/`, which hands out account names one id at a time. When the
//! requested URL asks for an author by id the redirect is cancelled so the
//! query-style URL stays what the client sees.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use crate::hook::{Filter, HookPoint};

/// Arguments of the canonical redirect decision.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedirectArgs {
    /// Redirect the host intends to issue (`None` = already no redirect).
    #[serde(default)]
    pub redirect_url: Option<String>,
    /// URL the client actually requested.
    pub requested_url: String,
}

// Literal pattern; compilation cannot fail at runtime.
#[allow(clippy::expect_used)]
fn author_query_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[?&]author=\d+").expect("author query pattern"))
}

/// True when `url` carries an `author=<digits>` query parameter.
///
/// Only the first occurrence matters and no full URL parsing is attempted, so
/// malformed or repeated parameters are still caught.
pub fn requests_author_by_id(url: &str) -> bool {
    author_query_regex().is_match(url)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RedirectGuard;

impl RedirectGuard {
    pub fn new() -> Self {
        Self
    }
}

impl Filter for RedirectGuard {
    type Input = RedirectArgs;
    type Output = Option<String>;

    fn point(&self) -> HookPoint {
        HookPoint::RedirectCanonical
    }

    fn apply(&self, input: RedirectArgs) -> Option<String> {
        if requests_author_by_id(&input.requested_url) {
            tracing::trace!(requested = %input.requested_url, "author redirect suppressed");
            return None;
        }
        input.redirect_url
    }
}
