//! Inserts rendered catalog content into the page.

use crate::dom;
use crate::slider;
use hmv_catalog::Catalog;
use hmv_render::{RenderConfig, country_options, product_groups, slider_wrapper_id};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlOptGroupElement;

pub fn inject_hero_slides(cfg: &RenderConfig) {
    if let Some(slider) = dom::by_id("hero-slider") {
        slider.set_inner_html(&hmv_render::hero_slides_html(cfg));
    }
}

/// Append one block per category and start its image slider.
pub fn inject_products(catalog: &Catalog, cfg: &RenderConfig) -> Result<(), JsValue> {
    let Some(container) = dom::by_id("products-container") else {
        return Ok(());
    };

    for category in &catalog.categories {
        let html = hmv_render::category_block_html(category, cfg.summary_product_limit);
        container.insert_adjacent_html("beforeend", &html)?;
        slider::start_product_slider(&slider_wrapper_id(category), cfg);
    }
    Ok(())
}

pub fn inject_product_dropdown(catalog: &Catalog) -> Result<(), JsValue> {
    let Some(dropdown) = dom::by_id("productName") else {
        return Ok(());
    };

    for group in product_groups(catalog) {
        let optgroup: HtmlOptGroupElement = dom::create_element("optgroup")?.dyn_into()?;
        optgroup.set_label(&group.label);
        for name in &group.options {
            let opt = dom::create_option(name, name, false)?;
            optgroup.append_child(&opt)?;
        }
        dropdown.append_child(&optgroup)?;
    }
    Ok(())
}

pub fn inject_country_codes() -> Result<(), JsValue> {
    let Some(select) = dom::by_id("countryCode") else {
        return Ok(());
    };

    for (code, label, selected) in country_options() {
        let opt = dom::create_option(code, &label, selected)?;
        select.append_child(&opt)?;
    }
    Ok(())
}
