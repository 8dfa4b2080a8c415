//! REST user response sanitizer.
//!
//! The host's users endpoint exposes `slug`, which is usually the login name.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::hook::{Filter, HookPoint};

/// Arguments of REST user serialization.
///
/// `user` and `request` are accepted for parity with the host's hook
/// signature but are not inspected.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RestUserArgs {
    pub response: Map<String, Value>,
    #[serde(default)]
    pub user: Option<Value>,
    #[serde(default)]
    pub request: Option<Value>,
}

/// Remove a set, non-empty `slug` from a user representation.
///
/// A `null` or empty-string slug is left alone. Applying twice equals
/// applying once.
pub fn strip_slug(data: &mut Map<String, Value>) {
    let set = match data.get("slug") {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    };
    if set {
        data.remove("slug");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RestUserSanitizer;

impl RestUserSanitizer {
    pub fn new() -> Self {
        Self
    }
}

impl Filter for RestUserSanitizer {
    type Input = RestUserArgs;
    type Output = Map<String, Value>;

    fn point(&self) -> HookPoint {
        HookPoint::RestPrepareUser
    }

    fn apply(&self, input: RestUserArgs) -> Map<String, Value> {
        let mut response = input.response;
        strip_slug(&mut response);
        response
    }
}
