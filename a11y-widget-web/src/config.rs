//! Reads the host page's widget configuration

use crate::dom;
use a11y_widget_core::WidgetConfig;
use wasm_bindgen::JsValue;

/// Name of the global the host page may define before the script loads:
///
/// ```js
/// window.AccessibilityWidgetConfig = { position: "bottom-left", theme: "dark" };
/// ```
pub const CONFIG_GLOBAL: &str = "AccessibilityWidgetConfig";

/// Load the configuration, falling back to defaults when it is absent or invalid.
#[must_use]
pub fn load_config() -> WidgetConfig {
    let Some(win) = dom::window() else {
        return WidgetConfig::default();
    };
    let raw = match js_sys::Reflect::get(&win, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(raw) => raw,
        Err(err) => {
            log::warn!("could not read {CONFIG_GLOBAL}: {}", dom::js_error_message(&err));
            return WidgetConfig::default();
        }
    };
    from_js(raw)
}

fn from_js(raw: JsValue) -> WidgetConfig {
    if raw.is_undefined() || raw.is_null() {
        return WidgetConfig::default();
    }
    if let Some(json) = raw.as_string() {
        return WidgetConfig::from_json(&json).unwrap_or_else(|err| {
            log::warn!("invalid {CONFIG_GLOBAL}: {err}");
            WidgetConfig::default()
        });
    }
    serde_wasm_bindgen::from_value(raw).unwrap_or_else(|err| {
        log::warn!("invalid {CONFIG_GLOBAL}: {err}");
        WidgetConfig::default()
    })
}
