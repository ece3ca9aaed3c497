use a11y_widget_core::panel::tab_wrap;
use a11y_widget_core::{Features, PanelVisibility, focus_order};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};
use yew::hook;
use yew::prelude::*;

use crate::dom;

fn focusable(id: &str) -> Option<HtmlElement> {
    dom::document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn focus(el: &HtmlElement) {
    if let Err(err) = el.focus() {
        log::debug!("focus failed: {}", dom::js_error_message(&err));
    }
}

/// When the panel opens, remember the focused element and move focus to the
/// first control. Focus goes back when the panel hides or unmounts.
#[hook]
pub fn use_panel_focus(visibility: PanelVisibility, features: Features) {
    use_effect_with((visibility, features), |(visibility, features)| {
        let restore = if visibility.is_visible() && features.keyboard_navigation {
            let previous = dom::document()
                .and_then(|doc| doc.active_element())
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            let order = focus_order(features);
            // Close button only when every control is switched off.
            let first = order.get(1).or_else(|| order.first()).copied();
            if let Some(el) = first.and_then(focusable) {
                focus(&el);
            }
            previous
        } else {
            None
        };
        move || {
            if let Some(el) = restore {
                focus(&el);
            }
        }
    });
}

/// Keep Tab and Shift+Tab cycling through the panel's close button and controls.
pub fn tab_trap_handler(features: Features) -> Callback<KeyboardEvent> {
    Callback::from(move |e: KeyboardEvent| {
        if e.key() != "Tab" {
            return;
        }
        let order = focus_order(&features);
        let active_id = dom::document()
            .and_then(|doc| doc.active_element())
            .map(|el| el.id());
        let current = active_id.and_then(|id| order.iter().position(|known| *known == id));
        let Some(next) = tab_wrap(order.len(), current, e.shift_key()) else {
            return;
        };
        if let Some(el) = order.get(next).copied().and_then(focusable) {
            e.prevent_default();
            focus(&el);
        }
    })
}
