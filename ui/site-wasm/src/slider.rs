//! Auto-rotating sliders. Intervals run for the life of the page.

use crate::dom;
use gloo_timers::callback::Interval;
use hmv_render::{RenderConfig, SlideCycle, translate_x};

/// Hero strip: every slide sits side by side in `#hero-slider`.
pub fn start_hero_slider(cfg: &RenderConfig) {
    let Some(slider) = dom::by_id("hero-slider") else {
        return;
    };
    let total = dom::query_all_within(&slider, ".slide").len();
    let Some(mut cycle) = SlideCycle::new(total) else {
        return;
    };

    Interval::new(cfg.hero_interval_ms, move || {
        cycle.advance();
        dom::set_style(&slider, "transform", &translate_x(cycle.strip_offset_percent()));
    })
    .forget();
}

/// Per-category slider, staggered so the blocks do not flip in unison.
pub fn start_product_slider(wrapper_id: &str, cfg: &RenderConfig) {
    let Some(wrapper) = dom::by_id(wrapper_id) else {
        return;
    };
    let Some(strip) = dom::query_all_within(&wrapper, ".product-slider").into_iter().next() else {
        return;
    };
    let total = dom::query_all_within(&wrapper, ".product-slide").len();
    let Some(mut cycle) = SlideCycle::new(total) else {
        return;
    };

    let period = cfg.product_interval(js_sys::Math::random());
    Interval::new(period, move || {
        cycle.advance();
        dom::set_style(&strip, "transform", &translate_x(cycle.page_offset_percent()));
    })
    .forget();
}
