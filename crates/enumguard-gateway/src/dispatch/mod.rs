//! Dispatcher module exports.
//!
//! Re-exports the dispatcher and hook service trait so downstream consumers can
//! depend on this module directly.

pub mod dispatcher;

pub use dispatcher::{Dispatcher, FilterService, HookService};
