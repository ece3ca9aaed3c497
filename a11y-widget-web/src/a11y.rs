// Accessibility helpers

use crate::dom;

pub const STYLE_ID: &str = "accessibility-widget-style";

/// Get CSS the widget itself depends on
///
/// Focus rings for the widget's own buttons, the screen reader utility class
/// for the live region, and panel visibility. Effect classes such as
/// `accessibility-grayscale` are styled by the host page's stylesheet.
#[must_use]
pub const fn widget_css() -> &'static str {
    "#accessibility-widget button:focus,#accessibility-panel button:focus{outline:3px solid #00D9C0;outline-offset:2px} \
     #accessibility-panel:not(.active){display:none} \
     .accessibility-sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Inject [`widget_css`] into `<head>` once.
pub fn inject_widget_css() {
    let Some(doc) = dom::document() else {
        return;
    };
    if doc.get_element_by_id(STYLE_ID).is_some() {
        return;
    }
    let Some(head) = doc.head() else {
        return;
    };
    match dom::create_with_id(&doc, "style", STYLE_ID) {
        Ok(style) => {
            style.set_text_content(Some(widget_css()));
            if let Err(err) = head.append_child(&style) {
                log::warn!("could not inject widget css: {}", dom::js_error_message(&err));
            }
        }
        Err(err) => log::warn!("could not create style element: {}", dom::js_error_message(&err)),
    }
}
