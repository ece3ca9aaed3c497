use super::focus::{tab_trap_handler, use_panel_focus};
use a11y_widget_core::controls::{CLOSE_ID, PANEL_ID, STATUS_ID, TITLE_ID};
use a11y_widget_core::{AccessibilityState, Action, Control, PanelVisibility, Section, WidgetConfig};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub visible: bool,
    pub config: Rc<WidgetConfig>,
    pub sections: Rc<Vec<Section>>,
    pub state: Rc<AccessibilityState>,
    /// Latest screen-reader announcement.
    #[prop_or_default]
    pub status: AttrValue,
    pub on_action: Callback<Action>,
    pub on_close: Callback<()>,
}

fn control_button(control: &Control, state: &AccessibilityState, on_action: &Callback<Action>) -> Html {
    let onclick = {
        let on_action = on_action.clone();
        let action = control.action;
        Callback::from(move |_: MouseEvent| on_action.emit(action))
    };
    let pressed = control.pressed(state);
    let class = classes!(pressed.unwrap_or(false).then_some("active"));

    html! {
      <button
        id={control.id}
        type="button"
        {class}
        aria-label={control.aria_label}
        aria-pressed={pressed.map(|p| if p { "true" } else { "false" })}
        {onclick}
      >
        { control.label }
      </button>
    }
}

/// The settings panel: header with close button, one group per section,
/// and an optional polite live region.
#[function_component(Panel)]
pub fn panel(p: &Props) -> Html {
    let features = p.config.features;
    let visibility = if p.visible {
        PanelVisibility::Visible
    } else {
        PanelVisibility::Hidden
    };

    use_panel_focus(visibility, features);

    let on_keydown = if features.keyboard_navigation {
        tab_trap_handler(features)
    } else {
        Callback::noop()
    };

    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let [position, theme] = p.config.host_classes();
    let class = classes!(
        "accessibility-panel",
        position,
        theme,
        p.visible.then_some("active")
    );

    html! {
      <div
        id={PANEL_ID}
        {class}
        role="dialog"
        aria-labelledby={TITLE_ID}
        aria-hidden={if p.visible { "false" } else { "true" }}
        hidden={!p.visible}
        lang={p.config.language.clone()}
        onkeydown={on_keydown}
      >
        <div class="accessibility-header">
          <h3 id={TITLE_ID}>{ "Accessibility" }</h3>
          <button id={CLOSE_ID} type="button" aria-label="Close" onclick={close}>{ "\u{00d7}" }</button>
        </div>
        <div class="accessibility-content">
          { for p.sections.iter().map(|section| html! {
              <div class="accessibility-section" key={section.title}>
                <h4>{ section.title }</h4>
                <div class="control-group">
                  { for section.controls.iter().map(|control| control_button(control, &p.state, &p.on_action)) }
                </div>
              </div>
          }) }
        </div>
        if features.screen_reader {
          <div id={STATUS_ID} class="accessibility-sr-only" role="status" aria-live="polite">
            { p.status.clone() }
          </div>
        }
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use a11y_widget_core::{BooleanSetting, Features, FontFamily, sections};
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props(visible: bool, config: WidgetConfig, state: AccessibilityState) -> Props {
        Props {
            visible,
            sections: Rc::new(sections(&config.features)),
            config: Rc::new(config),
            state: Rc::new(state),
            status: AttrValue::default(),
            on_action: Callback::noop(),
            on_close: Callback::noop(),
        }
    }

    fn render(p: Props) -> String {
        block_on(LocalServerRenderer::<Panel>::with_props(p).render())
    }

    #[test]
    fn hidden_panel_is_marked_hidden() {
        let html = render(props(false, WidgetConfig::default(), AccessibilityState::default()));
        assert!(html.contains("id=\"accessibility-panel\""));
        assert!(html.contains("aria-hidden=\"true\""));
        assert!(!html.contains("accessibility-theme-light active"));
    }

    #[test]
    fn visible_panel_renders_every_control() {
        let html = render(props(true, WidgetConfig::default(), AccessibilityState::default()));
        assert!(html.contains("aria-hidden=\"false\""));
        for id in [
            "close-panel",
            "decrease-font",
            "reset-font",
            "increase-font",
            "high-contrast",
            "negative-contrast",
            "grayscale",
            "light-background",
            "highlight-links",
            "reading-guide-toggle",
            "big-cursor",
            "font-dyslexic",
            "font-sans",
            "font-serif",
            "reset-all",
        ] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing control {id}");
        }
        assert!(html.contains("id=\"accessibility-status\""));
        assert!(html.contains("lang=\"en\""));
    }

    #[test]
    fn pressed_state_reflects_settings() {
        let mut state = AccessibilityState::default();
        state.set_enabled(BooleanSetting::HighContrast, true);
        state.font_family = FontFamily::Serif;
        let html = render(props(true, WidgetConfig::default(), state));
        assert!(html.contains("aria-pressed=\"true\""));
        assert!(html.contains("aria-pressed=\"false\""));
        assert!(html.contains("Reset All"));
    }

    #[test]
    fn features_hide_controls_and_live_region() {
        let config = WidgetConfig {
            features: Features {
                reading_guide: false,
                screen_reader: false,
                font_family: false,
                ..Features::default()
            },
            language: "fr".to_string(),
            ..WidgetConfig::default()
        };
        let html = render(props(true, config, AccessibilityState::default()));
        assert!(!html.contains("reading-guide-toggle"));
        assert!(!html.contains("font-serif"));
        assert!(!html.contains("accessibility-status"));
        assert!(html.contains("lang=\"fr\""));
    }
}
