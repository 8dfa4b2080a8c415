//! Authentication error normalizer.
//!
//! By default the host tells a caller whether the account exists ("invalid
//! username") or only the password was wrong ("incorrect password"). Those
//! outcomes are collapsed to "no result", so the host reports a generic login
//! failure. Other error kinds keep their host-specific meaning.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::hook::{Filter, HookPoint};

/// Error codes that reveal whether an account exists.
pub const ENUMERATING_CODES: [&str; 3] = ["incorrect_password", "invalid_username", "invalid_email"];

/// Successfully authenticated account, kept opaque: the guard never reads it.
pub type UserRecord = Map<String, Value>;

/// Failed attempt: one or more codes, each with its messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthError {
    pub errors: BTreeMap<String, Vec<String>>,
    /// Anything else the host attached (e.g. `error_data`), passed back as is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AuthError {
    pub fn has_code(&self, code: &str) -> bool {
        self.errors.contains_key(code)
    }

    /// True when any carried code is one of [`ENUMERATING_CODES`].
    pub fn is_enumerating(&self) -> bool {
        ENUMERATING_CODES.iter().any(|c| self.has_code(c))
    }
}

/// What the host's authentication chain produced so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthOutcome {
    User(UserRecord),
    Error(AuthError),
}

/// Arguments of authentication completion. A `null` outcome means no
/// authenticator produced a result.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthenticateArgs {
    #[serde(default)]
    pub outcome: Option<AuthOutcome>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AuthErrorNormalizer;

impl AuthErrorNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Filter for AuthErrorNormalizer {
    type Input = AuthenticateArgs;
    type Output = Option<AuthOutcome>;

    fn point(&self) -> HookPoint {
        HookPoint::Authenticate
    }

    fn apply(&self, input: AuthenticateArgs) -> Option<AuthOutcome> {
        match input.outcome {
            Some(AuthOutcome::Error(e)) if e.is_enumerating() => {
                tracing::trace!("enumerating authentication error collapsed");
                None
            }
            other => other,
        }
    }
}
