//! User intents dispatched from the panel
use crate::settings::{BooleanSetting, FontFamily};
use crate::state::AccessibilityState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum Action {
    Toggle(BooleanSetting),
    IncreaseFontSize,
    DecreaseFontSize,
    ResetFontSize,
    FontFamily(FontFamily),
    ResetAll,
}

impl Action {
    /// Every distinct action, in panel order.
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut actions = vec![
            Self::DecreaseFontSize,
            Self::ResetFontSize,
            Self::IncreaseFontSize,
        ];
        actions.extend(BooleanSetting::ALL.into_iter().map(Self::Toggle));
        actions.extend(FontFamily::ALL.into_iter().map(Self::FontFamily));
        actions.push(Self::ResetAll);
        actions
    }

    /// Screen-reader message describing `state` after this action ran.
    #[must_use]
    pub fn announcement(self, state: &AccessibilityState) -> String {
        match self {
            Self::Toggle(setting) => {
                let status = if state.is_enabled(setting) { "on" } else { "off" };
                format!("{} {status}", setting.label())
            }
            Self::IncreaseFontSize | Self::DecreaseFontSize | Self::ResetFontSize => {
                format!("Text size {}", state.effective_font_size())
            }
            Self::FontFamily(FontFamily::Default) => "Default font restored".to_string(),
            Self::FontFamily(family) => format!("{} selected", family.label()),
            Self::ResetAll => "All accessibility settings reset".to_string(),
        }
    }
}
