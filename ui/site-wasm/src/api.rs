//! `fetch` wrappers.
//!
//! Both the catalog document and the email relay go through `send`, which
//! returns the status and body text and leaves status interpretation to the
//! caller.

use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

#[derive(Debug, Clone)]
pub struct FetchedText {
    pub status: u16,
    pub ok: bool,
    pub body: String,
}

async fn send(request: &Request) -> Result<FetchedText, String> {
    let resp_value = JsFuture::from(dom::window().fetch_with_request(request))
        .await
        .map_err(|e| format!("fetch error: {:?}", e))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "response is not a Response".to_string())?;

    let text = JsFuture::from(resp.text().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("text error: {:?}", e))?;

    Ok(FetchedText {
        status: resp.status(),
        ok: resp.ok(),
        body: text.as_string().unwrap_or_default(),
    })
}

/// GET a URL and return the body as a plain string.
pub async fn fetch_text(url: &str) -> Result<FetchedText, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{:?}", e))?;
    send(&request).await
}

/// POST a JSON body.
pub async fn post_json(url: &str, body: &str) -> Result<FetchedText, String> {
    let opts = RequestInit::new();
    opts.set_method("POST");

    let headers = Headers::new().map_err(|e| format!("{:?}", e))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{:?}", e))?;
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{:?}", e))?;
    send(&request).await
}
