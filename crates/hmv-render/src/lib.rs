//! Content injection for the catalog-driven page regions.
//!
//! Everything here is a pure function of the catalog and `RenderConfig`;
//! the browser crate only inserts the results into the page.

pub mod countries;
pub mod dropdown;
pub mod html;
pub mod slider;

pub use countries::{COUNTRY_CODES, CountryCode, DEFAULT_DIALING_CODE, country_options};
pub use dropdown::{OptionGroup, product_groups};
pub use html::{category_block_html, category_summary, hero_slides_html, nav_link_selector, slider_wrapper_id};
pub use slider::{SlideCycle, translate_x};

use serde::{Deserialize, Serialize};

pub const HERO_SLIDE_COUNT: usize = 5;
pub const SUMMARY_PRODUCT_LIMIT: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub hero_slide_count: usize,
    pub hero_slide_dir: String,
    pub summary_product_limit: usize,
    pub hero_interval_ms: u32,
    pub product_interval_ms: u32,
    pub product_jitter_ms: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            hero_slide_count: HERO_SLIDE_COUNT,
            hero_slide_dir: "assets/slides".to_owned(),
            summary_product_limit: SUMMARY_PRODUCT_LIMIT,
            hero_interval_ms: 5_000,
            product_interval_ms: 4_000,
            product_jitter_ms: 1_000,
        }
    }
}

impl RenderConfig {
    /// Interval for one product slider; `jitter` is a sample in `[0, 1)`.
    pub fn product_interval(&self, jitter: f64) -> u32 {
        let extra = (jitter.clamp(0.0, 1.0) * f64::from(self.product_jitter_ms)) as u32;
        self.product_interval_ms.saturating_add(extra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg: RenderConfig = serde_json::from_str(r#"{ "hero_slide_count": 3 }"#).unwrap();
        assert_eq!(cfg.hero_slide_count, 3);
        assert_eq!(cfg.summary_product_limit, SUMMARY_PRODUCT_LIMIT);
        assert_eq!(cfg.hero_slide_dir, "assets/slides");
    }

    #[test]
    fn product_interval_is_staggered_within_jitter() {
        let cfg = RenderConfig::default();
        assert_eq!(cfg.product_interval(0.0), 4_000);
        assert_eq!(cfg.product_interval(0.5), 4_500);
        assert!(cfg.product_interval(0.999) < 5_000);
    }

    #[test]
    fn product_interval_saturates_on_large_config() {
        let cfg = RenderConfig {
            product_interval_ms: u32::MAX - 10,
            product_jitter_ms: u32::MAX,
            ..RenderConfig::default()
        };
        assert_eq!(cfg.product_interval(0.9), u32::MAX);
        assert_eq!(cfg.product_interval(0.0), u32::MAX - 10);
    }
}
