use std::net::SocketAddr;

use serde::Deserialize;

use enumguard_core::error::{GuardError, Result};
use enumguard_core::filters::SiteRoot;

use crate::policy::allowlist::compile_hook_rules;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    pub site: SiteSection,

    #[serde(default)]
    pub hooks: HooksSection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(GuardError::UnsupportedVersion);
        }

        self.gateway.validate()?;
        self.site.validate()?;
        self.hooks.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !(1024..=1_048_576).contains(&self.max_body_bytes) {
            return Err(GuardError::BadRequest(
                "gateway.max_body_bytes must be between 1024 and 1048576".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            GuardError::BadRequest(format!(
                "gateway.listen must be a valid socket address: {}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "127.0.0.1:8088".into()
}
fn default_max_body_bytes() -> usize {
    65536
}

/// The host site the guard fronts.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
    /// Home URL used to build `?author=<id>` links.
    pub root: String,
}

impl SiteSection {
    pub fn validate(&self) -> Result<()> {
        self.site_root().map(|_| ())
    }

    pub fn site_root(&self) -> Result<SiteRoot> {
        SiteRoot::parse(&self.root).map_err(|e| match e {
            GuardError::BadRequest(msg) => GuardError::BadRequest(format!("site.root: {msg}")),
            other => other,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HooksSection {
    /// Hook names to bind, `*` for all.
    #[serde(default = "default_enabled")]
    pub enabled: Vec<String>,
}

impl Default for HooksSection {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

impl HooksSection {
    pub fn validate(&self) -> Result<()> {
        compile_hook_rules(&self.enabled).map(|_| ())
    }
}

fn default_enabled() -> Vec<String> {
    vec!["*".into()]
}
