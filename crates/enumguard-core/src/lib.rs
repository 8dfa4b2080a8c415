//! enumguard core: transport-agnostic anti-enumeration filters, hook names, and errors.
//!
//! This crate defines the filter policy applied at each host extension point
//! and the error surface shared with the gateway. It intentionally carries no
//! transport or runtime dependencies so the filters can be embedded directly
//! in any host integration layer.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Filters are infallible: a pattern that does not match means "condition not
//! met" and yields the pass-through (or degenerate) value, never a crash in
//! the host's request cycle.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod filters;
pub mod hook;

/// Shared result type.
pub use error::{GuardError, Result};
pub use hook::{Filter, HookPoint};
