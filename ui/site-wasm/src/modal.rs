//! Terms-and-conditions modal.

use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Open on `open_selector` click; close via `.close-button` or a click on the
/// backdrop (the modal element itself).
pub fn init_modal(open_selector: &str, modal_selector: &str) -> Result<(), JsValue> {
    let (Some(open_btn), Some(modal)) = (dom::query(open_selector), dom::query(modal_selector))
    else {
        return Ok(());
    };

    {
        let modal = modal.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            e.prevent_default();
            dom::set_display(&modal, "block");
        }) as Box<dyn FnMut(_)>);
        open_btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    if let Ok(Some(close_btn)) = modal.query_selector(".close-button") {
        let modal = modal.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            dom::set_display(&modal, "none");
        }) as Box<dyn FnMut(_)>);
        close_btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    let backdrop = modal.clone();
    let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
        let on_backdrop = e
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .is_some_and(|t| t == backdrop);
        if on_backdrop {
            dom::set_display(&backdrop, "none");
        }
    }) as Box<dyn FnMut(_)>);
    dom::window().add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();

    Ok(())
}
