use a11y_widget_core::controls::{PANEL_ID, TOGGLE_ID};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub expanded: bool,
    pub on_toggle: Callback<()>,
}

/// Floating button that opens and closes the panel.
#[function_component(ToggleButton)]
pub fn toggle_button(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_toggle.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let expanded = if p.expanded { "true" } else { "false" };

    html! {
      <button
        id={TOGGLE_ID}
        type="button"
        aria-label="Accessibility Menu"
        title="Accessibility Menu"
        aria-haspopup="dialog"
        aria-controls={PANEL_ID}
        aria-expanded={expanded}
        {onclick}
      >
        <svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true" focusable="false">
          <path d="M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 15l-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z" />
        </svg>
      </button>
    }
}
