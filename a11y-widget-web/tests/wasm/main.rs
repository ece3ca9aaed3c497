#![cfg(target_arch = "wasm32")]

use a11y_widget_core::{BooleanSetting, FontFamily, FontSize, UiBinding, Widget, WidgetConfig};
use a11y_widget_web::binding::DomBinding;
use a11y_widget_web::storage::LocalStorageStore;
use a11y_widget_web::{dom, mount};
use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{EventTarget, HtmlElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

async fn sleep_ms(duration_ms: i32) {
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });
    let resolve = resolve_slot.expect("resolve function should be set");
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });
    dom::window()
        .unwrap()
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            duration_ms,
        )
        .unwrap();
    closure.forget();
    JsFuture::from(promise).await.unwrap();
}

fn clean_page() {
    let storage = dom::local_storage().unwrap().unwrap();
    storage.clear().unwrap();
    let body = dom::body().unwrap();
    body.set_class_name("");
    let _ = body.style().remove_property("font-family");
    let _ = dom::root_element().unwrap().style().remove_property("font-size");
    for id in ["accessibility-widget", "accessibility-panel", "reading-guide"] {
        while let Some(el) = dom::document().unwrap().get_element_by_id(id) {
            el.remove();
        }
    }
}

fn overlay_count() -> u32 {
    dom::document()
        .unwrap()
        .query_selector_all("#reading-guide")
        .unwrap()
        .length()
}

fn click(id: &str) {
    dom::document()
        .unwrap()
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("#{id} missing"))
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

fn panel_active() -> bool {
    dom::document()
        .unwrap()
        .get_element_by_id("accessibility-panel")
        .expect("panel present")
        .class_list()
        .contains("active")
}

fn press_escape() {
    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    init.set_bubbles(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    let target: EventTarget = dom::body().unwrap().into();
    let _ = target.dispatch_event(&event);
}

fn press_tab(shift: bool) {
    let init = KeyboardEventInit::new();
    init.set_key("Tab");
    init.set_shift_key(shift);
    init.set_bubbles(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    let target: EventTarget = dom::document().unwrap().active_element().unwrap().into();
    let _ = target.dispatch_event(&event);
}

fn active_id() -> String {
    dom::document()
        .unwrap()
        .active_element()
        .map(|el| el.id())
        .unwrap_or_default()
}

fn focus_id(id: &str) {
    dom::document()
        .unwrap()
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .focus()
        .unwrap();
}

#[wasm_bindgen_test]
fn dom_binding_toggles_classes_and_storage() {
    clean_page();
    let mut widget = Widget::new(LocalStorageStore, DomBinding);
    widget.toggle(BooleanSetting::Grayscale);
    let body = dom::body().unwrap();
    assert!(body.class_list().contains("accessibility-grayscale"));
    let storage = dom::local_storage().unwrap().unwrap();
    assert_eq!(
        storage.get_item("accessibility-grayscale").unwrap().as_deref(),
        Some("true")
    );

    widget.toggle(BooleanSetting::Grayscale);
    assert!(!body.class_list().contains("accessibility-grayscale"));
    assert_eq!(
        storage.get_item("accessibility-grayscale").unwrap().as_deref(),
        Some("false")
    );
}

#[wasm_bindgen_test]
fn reading_guide_overlay_is_unique() {
    clean_page();
    let mut widget = Widget::new(LocalStorageStore, DomBinding);
    widget.toggle(BooleanSetting::ReadingGuide);
    assert_eq!(overlay_count(), 1);
    DomBinding.create_overlay();
    assert_eq!(overlay_count(), 1);
    widget.toggle(BooleanSetting::ReadingGuide);
    assert_eq!(overlay_count(), 0);
}

#[wasm_bindgen_test]
fn font_controls_write_inline_styles() {
    clean_page();
    let mut widget = Widget::new(LocalStorageStore, DomBinding);
    widget.change_font_size(3);
    let root = dom::root_element().unwrap();
    assert_eq!(root.style().get_property_value("font-size").unwrap(), "130%");

    widget.change_font_family(FontFamily::Serif);
    let body = dom::body().unwrap();
    assert!(
        body.style()
            .get_property_value("font-family")
            .unwrap()
            .contains("Georgia")
    );

    widget.reset_all();
    assert_eq!(root.style().get_property_value("font-size").unwrap(), "100%");
    assert_eq!(body.style().get_property_value("font-family").unwrap(), "");
    assert_eq!(dom::local_storage().unwrap().unwrap().length().unwrap(), 0);
}

#[wasm_bindgen_test]
fn rehydrate_restores_persisted_state() {
    clean_page();
    let storage = dom::local_storage().unwrap().unwrap();
    storage.set_item("accessibility-high-contrast", "true").unwrap();
    storage.set_item("accessibility-font-size", "130").unwrap();
    storage.set_item("accessibility-reading-guide", "true").unwrap();

    let widget = Widget::init(LocalStorageStore, DomBinding);
    assert_eq!(widget.state().font_size, Some(FontSize::clamped(130)));
    let body = dom::body().unwrap();
    assert!(body.class_list().contains("accessibility-high-contrast"));
    assert!(body.class_list().contains("accessibility-reading-guide"));
    assert_eq!(
        dom::root_element()
            .unwrap()
            .style()
            .get_property_value("font-size")
            .unwrap(),
        "130%"
    );
    assert_eq!(overlay_count(), 1);
}

#[wasm_bindgen_test]
async fn mounted_widget_opens_and_dismisses() {
    clean_page();
    let handle = mount(WidgetConfig::default()).expect("widget mounted");
    sleep_ms(20).await;

    let doc = dom::document().unwrap();
    let body = dom::body().unwrap();
    let host = doc.get_element_by_id("accessibility-widget").unwrap();
    assert!(host.parent_element().unwrap().is_same_node(Some(&body)));
    assert!(host.class_list().contains("accessibility-position-bottom-right"));
    assert!(host.class_list().contains("accessibility-theme-light"));
    assert!(doc.get_element_by_id("accessibility-toggle").is_some());
    assert!(!panel_active());

    click("accessibility-toggle");
    sleep_ms(20).await;
    assert!(panel_active());

    click("accessibility-toggle");
    sleep_ms(20).await;
    assert!(!panel_active());

    click("accessibility-toggle");
    sleep_ms(20).await;
    press_escape();
    sleep_ms(20).await;
    assert!(!panel_active());

    click("accessibility-toggle");
    sleep_ms(20).await;
    body.click();
    sleep_ms(20).await;
    assert!(!panel_active());

    click("accessibility-toggle");
    sleep_ms(20).await;
    click("close-panel");
    sleep_ms(20).await;
    assert!(!panel_active());

    handle.destroy();
}

#[wasm_bindgen_test]
async fn panel_buttons_drive_settings() {
    clean_page();
    let handle = mount(WidgetConfig::default()).expect("widget mounted");
    sleep_ms(20).await;

    click("accessibility-toggle");
    sleep_ms(20).await;
    click("high-contrast");
    sleep_ms(20).await;
    let body = dom::body().unwrap();
    assert!(body.class_list().contains("accessibility-high-contrast"));
    assert!(panel_active(), "clicks inside the panel keep it open");

    let status = dom::document()
        .unwrap()
        .get_element_by_id("accessibility-status")
        .unwrap();
    assert_eq!(status.text_content().unwrap_or_default().trim(), "High contrast on");

    click("reset-all");
    sleep_ms(20).await;
    assert!(!body.class_list().contains("accessibility-high-contrast"));

    handle.destroy();
}

#[wasm_bindgen_test]
async fn open_panel_traps_tab_focus() {
    clean_page();
    let handle = mount(WidgetConfig::default()).expect("widget mounted");
    sleep_ms(20).await;

    focus_id("accessibility-toggle");
    click("accessibility-toggle");
    sleep_ms(20).await;
    assert_eq!(active_id(), "decrease-font");

    focus_id("reset-all");
    press_tab(false);
    sleep_ms(20).await;
    assert_eq!(active_id(), "close-panel");

    press_tab(true);
    sleep_ms(20).await;
    assert_eq!(active_id(), "reset-all");

    focus_id("grayscale");
    press_tab(false);
    sleep_ms(20).await;
    assert_eq!(active_id(), "grayscale", "mid-list Tab is left to the browser");

    press_escape();
    sleep_ms(20).await;
    assert!(!panel_active());
    assert_eq!(active_id(), "accessibility-toggle");

    handle.destroy();
}
