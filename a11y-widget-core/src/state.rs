//! Accessibility state value object
use crate::binding::UiBinding;
use crate::settings::{BooleanSetting, FONT_FAMILY_KEY, FONT_SIZE_KEY, FontFamily, FontSize};
use crate::store::{SettingsStore, read_or_none};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccessibilityState {
    #[serde(default)]
    pub enabled: BTreeSet<BooleanSetting>,
    /// `None` until the user changes the size or a value is rehydrated.
    #[serde(default)]
    pub font_size: Option<FontSize>,
    #[serde(default)]
    pub font_family: FontFamily,
}

impl AccessibilityState {
    #[must_use]
    pub fn is_enabled(&self, setting: BooleanSetting) -> bool {
        self.enabled.contains(&setting)
    }

    pub fn set_enabled(&mut self, setting: BooleanSetting, enabled: bool) {
        if enabled {
            self.enabled.insert(setting);
        } else {
            self.enabled.remove(&setting);
        }
    }

    /// Effective root font-size, with the default substituted when unset.
    #[must_use]
    pub fn effective_font_size(&self) -> FontSize {
        self.font_size.unwrap_or_default()
    }

    /// True when nothing differs from a fresh page.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.enabled.is_empty()
            && self.font_size.is_none_or(|s| s == FontSize::DEFAULT)
            && self.font_family == FontFamily::Default
    }

    /// Read persisted settings. Corrupt or unknown values fall back to defaults.
    pub fn load<S: SettingsStore>(store: &S) -> Self {
        let font_size = read_or_none(store, FONT_SIZE_KEY).and_then(|raw| {
            let parsed = FontSize::parse(&raw);
            if parsed.is_none() {
                log::debug!("ignoring non-numeric font size {raw:?}");
            }
            parsed
        });

        let font_family = read_or_none(store, FONT_FAMILY_KEY)
            .and_then(|raw| {
                let parsed = FontFamily::from_token(&raw);
                if parsed.is_none() {
                    log::debug!("ignoring unknown font family {raw:?}");
                }
                parsed
            })
            .unwrap_or_default();

        let enabled = BooleanSetting::ALL
            .into_iter()
            .filter(|setting| {
                BooleanSetting::decode(read_or_none(store, setting.key()).as_deref())
            })
            .collect();

        Self {
            enabled,
            font_size,
            font_family,
        }
    }
}

/// Render `state` onto the page. Only non-default values touch the page,
/// so applying a default state to a fresh page is a no-op.
pub fn apply<B: UiBinding>(state: &AccessibilityState, ui: &B) {
    if let Some(size) = state.font_size {
        ui.set_root_font_size(size);
    }

    if let Some(stack) = state.font_family.stack() {
        ui.set_body_font_family(Some(stack));
    }

    for setting in &state.enabled {
        ui.add_class(setting.class_name());
        if *setting == BooleanSetting::ReadingGuide {
            ui.create_overlay();
        }
        log::debug!("restored {setting}");
    }
}
