//! Extension point names and the single-method filter capability.

use std::fmt;

use crate::error::{GuardError, Result};

/// Host extension points the guard binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HookPoint {
    /// Canonical redirect decision.
    RedirectCanonical,
    /// Author permalink generation.
    AuthorLink,
    /// Author feed link generation.
    AuthorFeedLink,
    /// Body class list assembly.
    BodyClass,
    /// REST user resource serialization.
    RestPrepareUser,
    /// Authentication attempt completion.
    Authenticate,
}

impl HookPoint {
    /// All hook points, in registration order.
    pub const ALL: [HookPoint; 6] = [
        HookPoint::RedirectCanonical,
        HookPoint::AuthorLink,
        HookPoint::AuthorFeedLink,
        HookPoint::BodyClass,
        HookPoint::RestPrepareUser,
        HookPoint::Authenticate,
    ];

    /// Wire name (path segment / config entry).
    pub fn as_str(self) -> &'static str {
        match self {
            HookPoint::RedirectCanonical => "redirect_canonical",
            HookPoint::AuthorLink => "author_link",
            HookPoint::AuthorFeedLink => "author_feed_link",
            HookPoint::BodyClass => "body_class",
            HookPoint::RestPrepareUser => "rest_prepare_user",
            HookPoint::Authenticate => "authenticate",
        }
    }

    /// Look up a hook by wire name.
    pub fn parse(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| GuardError::UnknownHook(s.to_string()))
    }
}

impl fmt::Display for HookPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stateless transformation bound to one extension point.
///
/// The host hands the filter the value it is about to use and replaces it
/// with whatever `apply` returns.
pub trait Filter: Send + Sync {
    type Input;
    type Output;

    fn point(&self) -> HookPoint;
    fn apply(&self, input: Self::Input) -> Self::Output;
}
