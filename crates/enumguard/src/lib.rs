//! Top-level facade crate for enumguard.
//!
//! Re-exports the filter core and the gateway library so users can depend on a single crate.

pub mod core {
    pub use enumguard_core::*;
}

pub mod gateway {
    pub use enumguard_gateway::*;
}
