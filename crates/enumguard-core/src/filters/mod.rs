//! Anti-enumeration filters, one per host extension point.
//!
//! Each filter is a pure transformation of the value the host passes in:
//! - `redirect`: suppress canonical redirects of `?author=<id>` requests.
//! - `author_link`: author permalinks become `<root>?author=<id>`.
//! - `feed_link`: author feed links keep the query style and gain `&feed=`.
//! - `body_class`: drop `author-<slug>` body classes on author archives.
//! - `rest_user`: strip `slug` from REST user representations.
//! - `authenticate`: collapse "which part was wrong" login errors.
//!
//! Filters share no state and may be applied in any order.

pub mod authenticate;
pub mod author_link;
pub mod body_class;
pub mod feed_link;
pub mod redirect;
pub mod rest_user;

pub use authenticate::{AuthErrorNormalizer, AuthError, AuthOutcome, AuthenticateArgs, UserRecord};
pub use author_link::{AuthorLinkArgs, AuthorLinkRewriter, SiteRoot};
pub use body_class::{BodyClassArgs, BodyClassFilter};
pub use feed_link::{FeedLinkArgs, FeedLinkRewriter};
pub use redirect::{RedirectArgs, RedirectGuard};
pub use rest_user::{RestUserArgs, RestUserSanitizer};
