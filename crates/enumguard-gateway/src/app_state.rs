//! Shared application state for the enumguard gateway.
//!
//! Compiles the hook allowlist, builds the filters from config, and registers
//! them with the dispatcher. Startup errors are returned, never panicked.

use std::sync::Arc;

use enumguard_core::error::Result;
use enumguard_core::filters::{
    AuthErrorNormalizer, AuthorLinkRewriter, BodyClassFilter, FeedLinkRewriter, RedirectGuard,
    RestUserSanitizer,
};
use enumguard_core::HookPoint;

use crate::config::GatewayConfig;
use crate::dispatch::Dispatcher;
use crate::obs::GatewayMetrics;
use crate::policy::compile_hook_rules;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    dispatcher: Arc<Dispatcher>,
    metrics: Arc<GatewayMetrics>,
}

struct AppStateInner {
    cfg: GatewayConfig,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        // 1) Compile hook allowlist + site root
        let rules = compile_hook_rules(&cfg.hooks.enabled)?;
        let root = cfg.site.site_root()?;

        if rules.is_empty() {
            tracing::warn!("hooks.enabled is empty; every hook will answer HOOK_DISABLED");
        }

        // 2) Register enabled filters
        let dispatcher = Dispatcher::new();
        for point in rules.points() {
            match point {
                HookPoint::RedirectCanonical => dispatcher.register_filter(RedirectGuard::new()),
                HookPoint::AuthorLink => {
                    dispatcher.register_filter(AuthorLinkRewriter::new(root.clone()))
                }
                HookPoint::AuthorFeedLink => dispatcher.register_filter(FeedLinkRewriter::new()),
                HookPoint::BodyClass => dispatcher.register_filter(BodyClassFilter::new()),
                HookPoint::RestPrepareUser => dispatcher.register_filter(RestUserSanitizer::new()),
                HookPoint::Authenticate => dispatcher.register_filter(AuthErrorNormalizer::new()),
            }
            tracing::debug!(hook = %point, "hook registered");
        }

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg }),
            dispatcher: Arc::new(dispatcher),
            metrics: Arc::new(GatewayMetrics::default()),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn dispatcher(&self) -> Arc<Dispatcher> {
        Arc::clone(&self.dispatcher)
    }

    pub fn metrics(&self) -> Arc<GatewayMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }

    /// Static lines appended to `/metrics`.
    pub fn metrics_extra(&self) -> Vec<(&'static str, u64)> {
        let enabled = self.dispatcher.registered_points().len();
        vec![(
            "enumguard_hooks_enabled",
            u64::try_from(enabled).unwrap_or(u64::MAX),
        )]
    }
}
