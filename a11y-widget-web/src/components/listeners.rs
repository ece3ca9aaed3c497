//! Document-wide listeners that dismiss the panel

use crate::dom;
use a11y_widget_core::controls::{PANEL_ID, WIDGET_ID};
use a11y_widget_core::panel::{PanelEvent, click_event, key_event};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget, KeyboardEvent, MouseEvent};
use yew::hook;
use yew::prelude::*;

/// Registered `keydown` and `click` listeners; removed on drop.
pub struct DismissListeners {
    document: Document,
    keydown: Closure<dyn FnMut(KeyboardEvent)>,
    click: Closure<dyn FnMut(MouseEvent)>,
}

impl Drop for DismissListeners {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.keydown.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("click", self.click.as_ref().unchecked_ref());
    }
}

fn inside(target: &Element, id: &str) -> bool {
    target
        .closest(&format!("#{id}"))
        .ok()
        .flatten()
        .is_some()
}

/// Decide whether a click on `target` should close the panel.
fn classify_click(target: Option<EventTarget>) -> Option<PanelEvent> {
    let element = target.and_then(|t| t.dyn_into::<Element>().ok());
    match element {
        Some(el) => click_event(inside(&el, WIDGET_ID), inside(&el, PANEL_ID)),
        None => click_event(false, false),
    }
}

/// Attach Escape and outside-click listeners to the document.
///
/// Returns `None` outside the browser or when registration fails.
pub fn register(on_event: &Callback<PanelEvent>) -> Option<DismissListeners> {
    if !cfg!(target_arch = "wasm32") {
        return None;
    }
    let document = dom::document()?;

    let keydown = {
        let on_event = on_event.clone();
        Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
            if let Some(event) = key_event(&e.key()) {
                on_event.emit(event);
            }
        })
    };
    let click = {
        let on_event = on_event.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
            if let Some(event) = classify_click(e.target()) {
                on_event.emit(event);
            }
        })
    };

    let registered = document
        .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
        .and_then(|()| {
            document.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())
        });
    if let Err(err) = registered {
        log::warn!("could not attach dismiss listeners: {}", dom::js_error_message(&err));
    }

    Some(DismissListeners {
        document,
        keydown,
        click,
    })
}

/// Keep document listeners alive for the lifetime of the calling component.
#[hook]
pub fn use_dismiss_listeners(on_event: Callback<PanelEvent>) {
    use_effect_with((), move |()| {
        let listeners = register(&on_event);
        move || drop(listeners)
    });
}
