//! Hook allowlist compilation and matching.
//!
//! Entries are hook wire names (`redirect_canonical`, `body_class`, ...) or
//! `*` for every hook.

use std::collections::BTreeSet;

use enumguard_core::error::{GuardError, Result};
use enumguard_core::HookPoint;

/// Compiled set of enabled hooks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookRules {
    enabled: BTreeSet<HookPoint>,
}

impl HookRules {
    pub fn is_enabled(&self, point: HookPoint) -> bool {
        self.enabled.contains(&point)
    }

    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    /// Enabled hooks in registration order.
    pub fn points(&self) -> impl Iterator<Item = HookPoint> + '_ {
        self.enabled.iter().copied()
    }
}

pub fn compile_hook_rules(raw: &[String]) -> Result<HookRules> {
    let mut enabled = BTreeSet::new();
    for s in raw {
        let s = s.trim();
        if s == "*" {
            enabled.extend(HookPoint::ALL);
            continue;
        }
        let point = HookPoint::parse(s).map_err(|_| {
            GuardError::BadRequest(format!("invalid hooks.enabled entry: {s}"))
        })?;
        enabled.insert(point);
    }
    Ok(HookRules { enabled })
}
