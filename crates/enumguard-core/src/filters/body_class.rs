//! Body class filter.
//!
//! On author archives the host adds both `author-<id>` and `author-<slug>`
//! to the body element. The slug class is dropped; the id class stays so a
//! specific author page can still be styled.

use serde::Deserialize;

use crate::hook::{Filter, HookPoint};

/// Arguments of body class assembly.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BodyClassArgs {
    pub classes: Vec<String>,
    /// Whether the page being rendered is an author archive.
    #[serde(default)]
    pub is_author_archive: bool,
}

/// `author-admin` -> true, `author-5` -> false, `author-` -> false.
fn is_author_slug_class(class: &str) -> bool {
    match class.strip_prefix("author-") {
        Some(suffix) => !suffix.is_empty() && !suffix.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BodyClassFilter;

impl BodyClassFilter {
    pub fn new() -> Self {
        Self
    }
}

impl Filter for BodyClassFilter {
    type Input = BodyClassArgs;
    type Output = Vec<String>;

    fn point(&self) -> HookPoint {
        HookPoint::BodyClass
    }

    fn apply(&self, input: BodyClassArgs) -> Vec<String> {
        let BodyClassArgs { mut classes, is_author_archive } = input;
        if !is_author_archive || !classes.iter().any(|c| c == "author") {
            return classes;
        }
        classes.retain(|c| !is_author_slug_class(c));
        classes
    }
}
