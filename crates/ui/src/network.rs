use folio_core::CatalogError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Request, Response};

/// GET `url` and return the body as text
///
/// Non-2xx responses are reported as `Status`, everything the browser
/// rejects (offline, CORS, aborted body read) as `Network`.
pub async fn fetch_text(url: &str) -> Result<String, CatalogError> {
    let win = window().ok_or_else(|| CatalogError::Network("no window".to_string()))?;

    let req = Request::new_with_str(url).map_err(network_error)?;
    let resp_val = JsFuture::from(win.fetch_with_request(&req))
        .await
        .map_err(network_error)?;
    let resp: Response = resp_val.dyn_into().map_err(network_error)?;

    CatalogError::check_status(resp.status())?;

    let text = JsFuture::from(resp.text().map_err(network_error)?)
        .await
        .map_err(network_error)?;
    Ok(text.as_string().unwrap_or_default())
}

fn network_error(err: JsValue) -> CatalogError {
    CatalogError::Network(describe_js_error(&err))
}

/// Best-effort message for a thrown JS value
pub fn describe_js_error(err: &JsValue) -> String {
    if let Some(msg) = err.as_string() {
        return msg;
    }
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    format!("{err:?}")
}
