//! Active navigation highlighting.
//!
//! Marks the nav link of whichever `.page-section` is at least half visible.

use crate::dom;
use hmv_render::nav_link_selector;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const VISIBLE_THRESHOLD: f64 = 0.5;

pub fn init_nav_highlighting() -> Result<(), JsValue> {
    let sections = dom::query_all(".page-section");
    if sections.is_empty() {
        return Ok(());
    }

    let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            for link in dom::query_all(".nav-item") {
                dom::remove_class(&link, "active");
            }
            if let Some(active) = dom::query(&nav_link_selector(&entry.target().id())) {
                dom::add_class(&active, "active");
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let opts = IntersectionObserverInit::new();
    opts.set_root_margin("0px");
    opts.set_threshold(&JsValue::from_f64(VISIBLE_THRESHOLD));

    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts)?;
    for section in &sections {
        observer.observe(section);
    }
    cb.forget();
    Ok(())
}
