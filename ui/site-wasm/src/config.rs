//! Site configuration.
//!
//! Defaults are compiled in. A deployment may ship `data/site-config.json`
//! to override any subset of keys (for example the EmailJS public key).

use crate::api;
use hmv_catalog::DEFAULT_CATALOG_URL;
use hmv_quote::RelayConfig;
use hmv_render::RenderConfig;
use serde::Deserialize;

pub const SITE_CONFIG_URL: &str = "data/site-config.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub catalog_url: String,
    pub render: RenderConfig,
    pub relay: RelayConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_owned(),
            render: RenderConfig::default(),
            relay: RelayConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Load the override file; non-critical, falls back to defaults.
pub async fn load_site_config() -> SiteConfig {
    match api::fetch_text(SITE_CONFIG_URL).await {
        Ok(resp) if resp.ok => match SiteConfig::from_json(&resp.body) {
            Ok(cfg) => cfg,
            Err(e) => {
                gloo_console::warn!(format!("ignoring {SITE_CONFIG_URL}: {e}"));
                SiteConfig::default()
            }
        },
        _ => SiteConfig::default(),
    }
}
