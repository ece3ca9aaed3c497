use super::listeners::use_dismiss_listeners;
use super::panel::Panel;
use super::toggle_button::ToggleButton;
use crate::binding::DomBinding;
use crate::storage::LocalStorageStore;
use a11y_widget_core::{
    AccessibilityState, Action, PanelEvent, PanelVisibility, Widget, WidgetConfig, sections,
};
use std::rc::Rc;
use yew::prelude::*;

/// Core widget wired to the live page.
pub type PageWidget = Widget<LocalStorageStore, DomBinding>;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub config: Rc<WidgetConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelState(pub PanelVisibility);

impl Reducible for PanelState {
    type Action = PanelEvent;

    fn reduce(self: Rc<Self>, event: PanelEvent) -> Rc<Self> {
        let next = self.0.next(event);
        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

fn mount_panel(panel: Html) -> Html {
    #[cfg(target_arch = "wasm32")]
    if let Some(body) = crate::dom::body() {
        return yew::create_portal(panel, body.into());
    }
    panel
}

/// Toggle button plus panel. Persisted settings are restored once the
/// component has mounted.
#[function_component(AccessibilityWidget)]
pub fn accessibility_widget(p: &Props) -> Html {
    let core = use_mut_ref(|| PageWidget::new(LocalStorageStore, DomBinding));
    let snapshot = use_state(|| Rc::new(AccessibilityState::default()));
    let status = use_state(AttrValue::default);
    let panel = use_reducer(PanelState::default);
    let panel_sections = use_memo(p.config.features, sections);

    {
        let core = core.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |()| {
            let restored = core.borrow_mut().rehydrate().clone();
            snapshot.set(Rc::new(restored));
            || ()
        });
    }

    let on_panel_event = {
        let dispatcher = panel.dispatcher();
        Callback::from(move |event: PanelEvent| dispatcher.dispatch(event))
    };
    use_dismiss_listeners(on_panel_event.clone());

    let on_toggle = on_panel_event.reform(|()| PanelEvent::ToggleButton);
    let on_close = on_panel_event.reform(|()| PanelEvent::CloseButton);

    let on_action = {
        let core = core.clone();
        let snapshot = snapshot.clone();
        let status = status.clone();
        let announce = p.config.features.screen_reader;
        Callback::from(move |action: Action| {
            let message = core.borrow_mut().dispatch(action);
            snapshot.set(Rc::new(core.borrow().state().clone()));
            if announce {
                status.set(AttrValue::from(message));
            }
        })
    };

    let visible = panel.0.is_visible();
    let panel_html = html! {
      <Panel
        {visible}
        config={p.config.clone()}
        sections={panel_sections}
        state={(*snapshot).clone()}
        status={(*status).clone()}
        {on_action}
        {on_close}
      />
    };

    html! {
      <>
        <ToggleButton expanded={visible} {on_toggle} />
        { mount_panel(panel_html) }
      </>
    }
}
