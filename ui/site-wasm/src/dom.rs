//! DOM element bindings.
//!
//! The quotation form elements are resolved once at startup into
//! `QuoteElements`. Peripheral sections look themselves up and skip
//! initialisation when their markup is absent.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlOptionElement,
    HtmlSelectElement, HtmlTextAreaElement,
};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

fn collect(nl: web_sys::NodeList) -> Vec<Element> {
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .query_selector_all(selector)
        .map(collect)
        .unwrap_or_default()
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    parent
        .query_selector_all(selector)
        .map(collect)
        .unwrap_or_default()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn set_display(el: &Element, value: &str) {
    set_style(el, "display", value);
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document().create_element(tag)
}

pub fn create_option(value: &str, text: &str, selected: bool) -> Result<HtmlOptionElement, JsValue> {
    let opt: HtmlOptionElement = create_element("option")?.dyn_into()?;
    opt.set_value(value);
    opt.set_text_content(Some(text));
    opt.set_default_selected(selected);
    opt.set_selected(selected);
    Ok(opt)
}

// ── Quotation form ──

/// Everything the auto-fill and submission handlers touch.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct QuoteElements {
    pub form: HtmlFormElement,
    pub first_name: HtmlInputElement,
    pub last_name: HtmlInputElement,
    pub company: HtmlInputElement,
    pub website: HtmlInputElement,
    pub country_code: HtmlSelectElement,
    pub contact_num: HtmlInputElement,
    pub email: HtmlInputElement,
    pub product_name: HtmlSelectElement,
    pub hs_code: HtmlInputElement,
    pub hs_name: HtmlInputElement,
    pub description: HtmlTextAreaElement,
    pub requirement: HtmlTextAreaElement,
    pub success_modal: Element,
}

macro_rules! get_typed {
    ($ty:ty, $id:expr) => {
        by_id_typed::<$ty>($id).ok_or_else(|| {
            JsValue::from_str(&format!("missing {} #{}", stringify!($ty), $id))
        })?
    };
}

impl QuoteElements {
    /// Resolve all form references. Call once after the document is parsed.
    pub fn bind() -> Result<QuoteElements, JsValue> {
        Ok(QuoteElements {
            form: get_typed!(HtmlFormElement, "quotation-form"),
            first_name: get_typed!(HtmlInputElement, "firstName"),
            last_name: get_typed!(HtmlInputElement, "lastName"),
            company: get_typed!(HtmlInputElement, "company"),
            website: get_typed!(HtmlInputElement, "website"),
            country_code: get_typed!(HtmlSelectElement, "countryCode"),
            contact_num: get_typed!(HtmlInputElement, "contactNum"),
            email: get_typed!(HtmlInputElement, "email"),
            product_name: get_typed!(HtmlSelectElement, "productName"),
            hs_code: get_typed!(HtmlInputElement, "hsCode"),
            hs_name: get_typed!(HtmlInputElement, "hsName"),
            description: get_typed!(HtmlTextAreaElement, "description"),
            requirement: get_typed!(HtmlTextAreaElement, "requirement"),
            success_modal: get_typed!(Element, "success-modal"),
        })
    }
}
