//! Hook policy (which extension points the guard binds).
//!
//! Compiles the configured hook list into a fixed set for app state to
//! register against the dispatcher.

pub mod allowlist;

pub use allowlist::{compile_hook_rules, HookRules};
