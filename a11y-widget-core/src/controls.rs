//! Panel layout: element ids, sections and the controls inside them
use crate::action::Action;
use crate::config::Features;
use crate::settings::{BooleanSetting, FontFamily};
use crate::state::AccessibilityState;

pub const WIDGET_ID: &str = "accessibility-widget";
pub const TOGGLE_ID: &str = "accessibility-toggle";
pub const PANEL_ID: &str = "accessibility-panel";
pub const CLOSE_ID: &str = "close-panel";
pub const OVERLAY_ID: &str = "reading-guide";
pub const STATUS_ID: &str = "accessibility-status";
pub const TITLE_ID: &str = "accessibility-title";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub id: &'static str,
    pub label: &'static str,
    pub aria_label: &'static str,
    pub action: Action,
}

impl Control {
    const fn new(id: &'static str, label: &'static str, aria_label: &'static str, action: Action) -> Self {
        Self {
            id,
            label,
            aria_label,
            action,
        }
    }

    /// `aria-pressed` value for stateful buttons; `None` for plain commands.
    #[must_use]
    pub fn pressed(&self, state: &AccessibilityState) -> Option<bool> {
        match self.action {
            Action::Toggle(setting) => Some(state.is_enabled(setting)),
            Action::FontFamily(family) => Some(state.font_family == family),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub controls: Vec<Control>,
}

/// Sections shown for `features`. Empty sections are dropped; reset is
/// always offered.
#[must_use]
pub fn sections(features: &Features) -> Vec<Section> {
    let mut out = Vec::new();

    if features.font_size {
        out.push(Section {
            title: "Text Size",
            controls: vec![
                Control::new("decrease-font", "A-", "Decrease font size", Action::DecreaseFontSize),
                Control::new("reset-font", "Reset", "Reset font size", Action::ResetFontSize),
                Control::new("increase-font", "A+", "Increase font size", Action::IncreaseFontSize),
            ],
        });
    }

    if features.contrast {
        let contrast = [
            (
                features.high_contrast,
                Control::new(
                    "high-contrast",
                    "High Contrast",
                    "High contrast",
                    Action::Toggle(BooleanSetting::HighContrast),
                ),
            ),
            (
                features.negative_contrast,
                Control::new(
                    "negative-contrast",
                    "Negative",
                    "Negative contrast",
                    Action::Toggle(BooleanSetting::NegativeContrast),
                ),
            ),
            (
                features.grayscale,
                Control::new(
                    "grayscale",
                    "Grayscale",
                    "Grayscale",
                    Action::Toggle(BooleanSetting::Grayscale),
                ),
            ),
            (
                features.light_background,
                Control::new(
                    "light-background",
                    "Light BG",
                    "Light background",
                    Action::Toggle(BooleanSetting::LightBackground),
                ),
            ),
        ];
        push_enabled(&mut out, "Contrast", contrast);
    }

    let navigation = [
        (
            features.links,
            Control::new(
                "highlight-links",
                "Highlight Links",
                "Highlight links",
                Action::Toggle(BooleanSetting::HighlightLinks),
            ),
        ),
        (
            features.reading_guide,
            Control::new(
                "reading-guide-toggle",
                "Reading Guide",
                "Reading guide",
                Action::Toggle(BooleanSetting::ReadingGuide),
            ),
        ),
        (
            features.cursor,
            Control::new(
                "big-cursor",
                "Big Cursor",
                "Big cursor",
                Action::Toggle(BooleanSetting::BigCursor),
            ),
        ),
    ];
    push_enabled(&mut out, "Navigation", navigation);

    if features.font_family {
        out.push(Section {
            title: "Font",
            controls: vec![
                Control::new(
                    "font-dyslexic",
                    "Dyslexic",
                    "Dyslexic friendly font",
                    Action::FontFamily(FontFamily::Dyslexic),
                ),
                Control::new(
                    "font-sans",
                    "Sans Serif",
                    "Sans serif font",
                    Action::FontFamily(FontFamily::Sans),
                ),
                Control::new(
                    "font-serif",
                    "Serif",
                    "Serif font",
                    Action::FontFamily(FontFamily::Serif),
                ),
            ],
        });
    }

    out.push(Section {
        title: "Reset",
        controls: vec![Control::new(
            "reset-all",
            "Reset All",
            "Reset all settings",
            Action::ResetAll,
        )],
    });

    out
}

fn push_enabled<const N: usize>(
    out: &mut Vec<Section>,
    title: &'static str,
    candidates: [(bool, Control); N],
) {
    let controls: Vec<Control> = candidates
        .into_iter()
        .filter_map(|(enabled, control)| enabled.then_some(control))
        .collect();
    if !controls.is_empty() {
        out.push(Section { title, controls });
    }
}

/// Ids of every focusable panel element in tab order: the close button,
/// then each shown control.
#[must_use]
pub fn focus_order(features: &Features) -> Vec<&'static str> {
    let mut order = vec![CLOSE_ID];
    order.extend(
        sections(features)
            .into_iter()
            .flat_map(|s| s.controls)
            .map(|c| c.id),
    );
    order
}
