//! HMV World site front end, compiled to WASM.
//!
//! Loads the product catalog, injects it into the page, and wires the
//! quotation form. Each page concern lives in its own module.

pub mod api;
pub mod config;
pub mod dom;
pub mod events;
pub mod inject;
pub mod loader;
pub mod modal;
pub mod nav;
pub mod partners;
pub mod quote;
pub mod slider;
pub mod state;

use gloo_console as console;
use hmv_catalog::CatalogSource;
use state::App;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init().await
}

/// Report a section that failed to initialise without stopping the others.
fn report(section: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        console::error!(format!("{section} not initialised:"), e);
    }
}

async fn init() -> Result<(), JsValue> {
    let app = App::new(config::load_site_config().await);

    // Form handlers do not wait for the catalog
    match dom::QuoteElements::bind() {
        Ok(els) => report("quotation form", events::bind_quote_events(&app, &els)),
        Err(e) => console::error!("quotation form not initialised:", e),
    }
    report("terms modal", modal::init_modal("#terms-link", "#terms-modal"));
    report("navigation", nav::init_nav_highlighting());

    let source = loader::FetchSource::new(app.config.catalog_url.as_str());
    load_and_inject(&app, &source).await;
    Ok(())
}

/// Load the catalog, then fill every section that waits on it.
///
/// On a failed load the store stays empty and no section is touched.
pub async fn load_and_inject<S>(app: &App, source: &S)
where
    S: CatalogSource + ?Sized,
{
    let render = &app.config.render;
    if let Some(catalog) = loader::load(app, source).await {
        inject::inject_hero_slides(render);
        report("products", inject::inject_products(&catalog, render));
        report("product dropdown", inject::inject_product_dropdown(&catalog));
        report("country codes", inject::inject_country_codes());
        report("partner logos", partners::duplicate_partner_logos());
    }
    slider::start_hero_slider(render);
}
