//! Shared error type across enumguard crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed hook arguments.
    BadRequest,
    /// Request body over the configured limit.
    PayloadTooLarge,
    /// Hook name not known to the guard.
    UnknownHook,
    /// Hook known but switched off by configuration.
    HookDisabled,
    /// Unsupported config or envelope version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ClientCode::UnknownHook => "UNKNOWN_HOOK",
            ClientCode::HookDisabled => "HOOK_DISABLED",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, GuardError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum GuardError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
    #[error("unknown hook: {0}")]
    UnknownHook(String),
    #[error("hook disabled: {0}")]
    HookDisabled(String),
    #[error("unsupported version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl GuardError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            GuardError::BadRequest(_) => ClientCode::BadRequest,
            GuardError::PayloadTooLarge(_) => ClientCode::PayloadTooLarge,
            GuardError::UnknownHook(_) => ClientCode::UnknownHook,
            GuardError::HookDisabled(_) => ClientCode::HookDisabled,
            GuardError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            GuardError::Internal(_) => ClientCode::Internal,
        }
    }
}
