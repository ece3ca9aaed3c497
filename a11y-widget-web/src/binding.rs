//! DOM implementation of the widget's output capability

use crate::dom;
use a11y_widget_core::controls::OVERLAY_ID;
use a11y_widget_core::{FontSize, UiBinding};
use wasm_bindgen::JsValue;

/// Inline style for the reading-guide overlay: a thin red bar pinned to the
/// top of the viewport that never intercepts pointer events.
pub const OVERLAY_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 2px; \
     background: #ff0000; z-index: 9999; pointer-events: none;";

/// Applies widget effects to the live document.
///
/// Every method is a silent no-op when the document is unavailable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomBinding;

fn report(op: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("{op} failed: {}", dom::js_error_message(&err));
    }
}

impl UiBinding for DomBinding {
    fn add_class(&self, class: &str) {
        if let Some(body) = dom::body() {
            report("add class", body.class_list().add_1(class));
        }
    }

    fn remove_class(&self, class: &str) {
        if let Some(body) = dom::body() {
            report("remove class", body.class_list().remove_1(class));
        }
    }

    fn set_root_font_size(&self, size: FontSize) {
        if let Some(root) = dom::root_element() {
            report(
                "set root font-size",
                root.style().set_property("font-size", &size.css()),
            );
        }
    }

    fn set_body_font_family(&self, stack: Option<&str>) {
        let Some(body) = dom::body() else {
            return;
        };
        let style = body.style();
        match stack {
            Some(stack) => report("set font-family", style.set_property("font-family", stack)),
            None => report(
                "clear font-family",
                style.remove_property("font-family").map(|_| ()),
            ),
        }
    }

    fn create_overlay(&self) {
        let (Some(doc), Some(body)) = (dom::document(), dom::body()) else {
            return;
        };
        if doc.get_element_by_id(OVERLAY_ID).is_some() {
            return;
        }
        let result = dom::create_with_id(&doc, "div", OVERLAY_ID).and_then(|guide| {
            guide.set_attribute("style", OVERLAY_STYLE)?;
            guide.set_attribute("aria-hidden", "true")?;
            body.append_child(&guide).map(|_| ())
        });
        report("create reading guide", result);
    }

    fn remove_overlay(&self) {
        if let Some(guide) = dom::document().and_then(|doc| doc.get_element_by_id(OVERLAY_ID)) {
            guide.remove();
        }
    }
}
