//! Event binding for the quotation form.
//!
//! Registered once at startup, before the catalog has loaded. Async handlers
//! are spawned via `wasm_bindgen_futures::spawn_local`.

use crate::dom::QuoteElements;
use crate::quote;
use crate::state::App;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

pub fn bind_quote_events(app: &Rc<App>, els: &QuoteElements) -> Result<(), JsValue> {
    // ── Auto-fill ──
    {
        let app = app.clone();
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            quote::on_product_change(&app, &els2);
        }) as Box<dyn FnMut(_)>);
        els.product_name
            .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // ── Submission ──
    {
        let app = app.clone();
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
            e.prevent_default();
            let app = app.clone();
            let els3 = els2.clone();
            wasm_bindgen_futures::spawn_local(async move {
                quote::on_submit(&app, &els3).await;
            });
        }) as Box<dyn FnMut(_)>);
        els.form
            .add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    Ok(())
}
