//! Author feed link rewriter.
//!
//! The host derives an author's feed link from the author link. Once author
//! links are query-style (`/?author=3`), the appended pretty feed path no
//! longer resolves, so the feed type is re-attached as a query parameter.
//!
//! The rewriter assumes its input starts with the leading `/<segment>` shape
//! the author link rewriter produces for a root-relative site. Anything else
//! (an absolute URL, an empty string) yields `None`, which callers must treat
//! as "no usable feed link" rather than an error.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use crate::hook::{Filter, HookPoint};

/// Arguments of author feed link generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeedLinkArgs {
    pub link: String,
    /// Feed type, e.g. `rss2`, `atom`.
    pub feed: String,
}

#[allow(clippy::expect_used)]
fn leading_segment_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^/[^/]+").expect("leading segment pattern"))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FeedLinkRewriter;

impl FeedLinkRewriter {
    pub fn new() -> Self {
        Self
    }
}

impl Filter for FeedLinkRewriter {
    type Input = FeedLinkArgs;
    type Output = Option<String>;

    fn point(&self) -> HookPoint {
        HookPoint::AuthorFeedLink
    }

    fn apply(&self, input: FeedLinkArgs) -> Option<String> {
        let Some(m) = leading_segment_regex().find(&input.link) else {
            tracing::debug!(link = %input.link, "feed link has no leading segment");
            return None;
        };
        Some(format!("{}&feed={}", m.as_str(), input.feed))
    }
}
