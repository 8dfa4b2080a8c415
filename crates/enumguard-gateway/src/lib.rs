//! enumguard gateway library entry.
//!
//! This crate wires config, the hook allowlist, the dispatcher, and the HTTP
//! transport into the service the host calls at each extension point. It is
//! intended to be consumed by the binary (`main.rs`) and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod app_state;
pub mod config;
pub mod dispatch;
pub mod obs;
pub mod ops;
pub mod policy;
pub mod router;
pub mod transport;
