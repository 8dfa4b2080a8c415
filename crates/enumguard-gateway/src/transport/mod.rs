//! Transport layer (HTTP).
//!
//! Exposes the hook invocation handler the host calls at each extension point,
//! and the JSON error mapping shared by HTTP handlers.

pub mod http;
