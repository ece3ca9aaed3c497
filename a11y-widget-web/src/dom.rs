use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Storage, Window};

/// Retrieve the global `window` object, if running in a browser.
///
/// Always `None` on native targets, where wasm-bindgen imports cannot be called.
#[must_use]
pub fn window() -> Option<Window> {
    if cfg!(target_arch = "wasm32") {
        web_sys::window()
    } else {
        None
    }
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// The page `<body>`.
#[must_use]
pub fn body() -> Option<HtmlElement> {
    document().and_then(|doc| doc.body())
}

/// The root `<html>` element as an `HtmlElement`, for inline style access.
#[must_use]
pub fn root_element() -> Option<HtmlElement> {
    document()
        .and_then(|doc| doc.document_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if `localStorage` access throws (for example when storage
/// is disabled by privacy settings).
pub fn local_storage() -> Result<Option<Storage>, JsValue> {
    match window() {
        Some(win) => win.local_storage(),
        None => Ok(None),
    }
}

/// Create an element and set its id.
///
/// # Errors
/// Returns an error if the element cannot be created.
pub fn create_with_id(doc: &Document, tag: &str, id: &str) -> Result<web_sys::Element, JsValue> {
    let el = doc.create_element(tag)?;
    el.set_id(id);
    Ok(el)
}
