#![forbid(unsafe_code)]
//! Floating accessibility control panel for arbitrary web pages.
//!
//! Loading the compiled module runs [`start`], which waits for the document
//! to be ready, appends the widget host to `<body>` and renders
//! [`components::AccessibilityWidget`] into it.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod binding;
pub mod components;
pub mod config;
pub mod dom;
pub mod storage;

use a11y_widget_core::WidgetConfig;
use a11y_widget_core::controls::WIDGET_ID;
use components::AccessibilityWidget;
use components::widget::Props;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);

    let Some(doc) = dom::document() else {
        return;
    };
    if doc.ready_state() == "loading" {
        let on_ready = Closure::once(move || {
            mount(config::load_config());
        });
        if let Err(err) = doc.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        ) {
            log::error!(
                "could not wait for DOMContentLoaded: {}",
                dom::js_error_message(&err)
            );
        }
        on_ready.forget();
    } else {
        mount(config::load_config());
    }
}

/// Append the widget host to `<body>` and render the widget into it.
///
/// Each call adds another widget; call it once per page.
pub fn mount(config: WidgetConfig) -> Option<yew::AppHandle<AccessibilityWidget>> {
    let doc = dom::document()?;
    let body = dom::body()?;
    a11y::inject_widget_css();

    let host = match dom::create_with_id(&doc, "div", WIDGET_ID) {
        Ok(host) => host,
        Err(err) => {
            log::error!("could not create widget host: {}", dom::js_error_message(&err));
            return None;
        }
    };
    for class in config.host_classes() {
        if let Err(err) = host.class_list().add_1(class) {
            log::warn!("could not add host class {class}: {}", dom::js_error_message(&err));
        }
    }
    if let Err(err) = body.append_child(&host) {
        log::error!("could not attach widget host: {}", dom::js_error_message(&err));
        return None;
    }

    log::info!("accessibility widget mounted");
    let props = Props {
        config: Rc::new(config),
    };
    Some(yew::Renderer::<AccessibilityWidget>::with_root_and_props(host, props).render())
}
