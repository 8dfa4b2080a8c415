use std::sync::Arc;

use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use enumguard_core::error::{GuardError, Result};
use enumguard_core::{Filter, HookPoint};

/// A filter bound to one interception point, speaking JSON at the boundary.
pub trait HookService: Send + Sync {
    fn point(&self) -> HookPoint;
    fn invoke(&self, args: Value) -> Result<Value>;
}

/// Adapts a typed [`Filter`] to [`HookService`].
pub struct FilterService<F> {
    filter: F,
}

impl<F> FilterService<F> {
    pub fn new(filter: F) -> Self {
        Self { filter }
    }
}

impl<F> HookService for FilterService<F>
where
    F: Filter,
    F::Input: DeserializeOwned,
    F::Output: Serialize,
{
    fn point(&self) -> HookPoint {
        self.filter.point()
    }

    fn invoke(&self, args: Value) -> Result<Value> {
        let point = self.filter.point();
        let input: F::Input = serde_json::from_value(args)
            .map_err(|e| GuardError::BadRequest(format!("invalid {point} args: {e}")))?;
        serde_json::to_value(self.filter.apply(input))
            .map_err(|e| GuardError::Internal(format!("encode {point} output failed: {e}")))
    }
}

/// Registry of hook services keyed by interception point.
#[derive(Default)]
pub struct Dispatcher {
    hooks: DashMap<HookPoint, Arc<dyn HookService>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            hooks: DashMap::new(),
        }
    }

    pub fn register(&self, svc: Arc<dyn HookService>) {
        self.hooks.insert(svc.point(), svc);
    }

    /// Convenience: wrap and register a typed filter.
    pub fn register_filter<F>(&self, filter: F)
    where
        F: Filter + 'static,
        F::Input: DeserializeOwned,
        F::Output: Serialize,
    {
        self.register(Arc::new(FilterService::new(filter)));
    }

    pub fn registered_points(&self) -> Vec<HookPoint> {
        let mut v: Vec<HookPoint> = self.hooks.iter().map(|e| *e.key()).collect();
        v.sort();
        v
    }

    pub fn dispatch(&self, point: HookPoint, args: Value) -> Result<Value> {
        let handler = self
            .hooks
            .get(&point)
            .ok_or_else(|| GuardError::HookDisabled(point.to_string()))?
            .value()
            .clone();
        handler.invoke(args)
    }
}
