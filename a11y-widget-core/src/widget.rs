//! Toggle, reset and rehydration logic
use crate::action::Action;
use crate::binding::UiBinding;
use crate::settings::{
    BooleanSetting, FONT_FAMILY_KEY, FONT_SIZE_KEY, FontFamily, FontSize, all_keys,
};
use crate::state::{AccessibilityState, apply};
use crate::store::{SettingsStore, delete_or_log, read_or_none, write_or_log};

/// Owns the current settings and mirrors every change into the store and
/// onto the page.
///
/// The in-memory [`AccessibilityState`] is the source of truth for what is
/// on; the page and the store are outputs.
pub struct Widget<S, B>
where
    S: SettingsStore,
    B: UiBinding,
{
    state: AccessibilityState,
    store: S,
    ui: B,
}

impl<S, B> Widget<S, B>
where
    S: SettingsStore,
    B: UiBinding,
{
    /// Create a widget with default state. Nothing is read or applied.
    pub fn new(store: S, ui: B) -> Self {
        Self {
            state: AccessibilityState::default(),
            store,
            ui,
        }
    }

    /// Create a widget and immediately restore persisted settings.
    pub fn init(store: S, ui: B) -> Self {
        let mut widget = Self::new(store, ui);
        widget.rehydrate();
        widget
    }

    #[must_use]
    pub const fn state(&self) -> &AccessibilityState {
        &self.state
    }

    /// Read persisted settings and reapply them to the page.
    pub fn rehydrate(&mut self) -> &AccessibilityState {
        self.state = AccessibilityState::load(&self.store);
        apply(&self.state, &self.ui);
        log::debug!("rehydrated accessibility settings: {:?}", self.state);
        &self.state
    }

    /// Flip `setting`, persist it and update the page. Returns the new value.
    pub fn toggle(&mut self, setting: BooleanSetting) -> bool {
        let enabled = !self.state.is_enabled(setting);
        self.state.set_enabled(setting, enabled);

        if enabled {
            self.ui.add_class(setting.class_name());
        } else {
            self.ui.remove_class(setting.class_name());
        }
        write_or_log(&self.store, setting.key(), BooleanSetting::encode(enabled));

        if setting == BooleanSetting::ReadingGuide {
            if enabled {
                self.ui.create_overlay();
            } else {
                self.ui.remove_overlay();
            }
        }
        enabled
    }

    /// Move the root font-size by `steps` increments of 10 points.
    ///
    /// The starting point is the stored value; a missing or non-numeric
    /// value counts as the default. The result is always in range.
    pub fn change_font_size(&mut self, steps: i32) -> FontSize {
        let current = read_or_none(&self.store, FONT_SIZE_KEY)
            .and_then(|raw| FontSize::parse_raw(&raw))
            .unwrap_or_else(|| i64::from(FontSize::DEFAULT.percent()));
        let next = FontSize::stepped(current, steps);

        write_or_log(&self.store, FONT_SIZE_KEY, &next.encode());
        self.ui.set_root_font_size(next);
        self.state.font_size = Some(next);
        next
    }

    pub fn reset_font_size(&mut self) {
        delete_or_log(&self.store, FONT_SIZE_KEY);
        self.ui.set_root_font_size(FontSize::DEFAULT);
        self.state.font_size = None;
    }

    /// Replace the body font-family. Persists the token, not the stack.
    pub fn change_font_family(&mut self, family: FontFamily) {
        self.ui.set_body_font_family(family.stack());
        if family == FontFamily::Default {
            delete_or_log(&self.store, FONT_FAMILY_KEY);
        } else {
            write_or_log(&self.store, FONT_FAMILY_KEY, family.token());
        }
        self.state.font_family = family;
    }

    /// Clear every effect and every persisted key.
    pub fn reset_all(&mut self) {
        for setting in BooleanSetting::ALL {
            self.ui.remove_class(setting.class_name());
        }
        self.ui.set_root_font_size(FontSize::DEFAULT);
        self.ui.set_body_font_family(None);

        for key in all_keys() {
            delete_or_log(&self.store, key);
        }

        self.ui.remove_overlay();
        self.state = AccessibilityState::default();
    }

    /// Run `action` and return the matching screen-reader announcement.
    pub fn dispatch(&mut self, action: Action) -> String {
        match action {
            Action::Toggle(setting) => {
                self.toggle(setting);
            }
            Action::IncreaseFontSize => {
                self.change_font_size(1);
            }
            Action::DecreaseFontSize => {
                self.change_font_size(-1);
            }
            Action::ResetFontSize => self.reset_font_size(),
            Action::FontFamily(family) => self.change_font_family(family),
            Action::ResetAll => self.reset_all(),
        }
        log::debug!("dispatched {action:?}");
        action.announcement(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{HeadlessPage, MemoryStore};

    fn fresh() -> (Widget<MemoryStore, HeadlessPage>, MemoryStore, HeadlessPage) {
        let store = MemoryStore::default();
        let page = HeadlessPage::default();
        (
            Widget::new(store.clone(), page.clone()),
            store,
            page,
        )
    }

    #[test]
    fn toggle_twice_restores_class_and_value() {
        let (mut widget, store, page) = fresh();
        for setting in BooleanSetting::ALL {
            assert!(widget.toggle(setting));
            assert!(page.snapshot().has_class(setting.class_name()));
            assert_eq!(store.value(setting.key()).as_deref(), Some("true"));

            assert!(!widget.toggle(setting));
            assert!(!page.snapshot().has_class(setting.class_name()));
            assert_eq!(store.value(setting.key()).as_deref(), Some("false"));
        }
        assert_eq!(page.snapshot().overlays, 0);
    }

    #[test]
    fn reading_guide_never_duplicates_overlay() {
        let (mut widget, _store, page) = fresh();
        widget.toggle(BooleanSetting::ReadingGuide);
        assert_eq!(page.snapshot().overlays, 1);
        widget.toggle(BooleanSetting::ReadingGuide);
        assert_eq!(page.snapshot().overlays, 0);
        widget.toggle(BooleanSetting::ReadingGuide);
        assert_eq!(page.snapshot().overlays, 1);
    }

    #[test]
    fn font_size_clamps_at_both_ends() {
        let (mut widget, store, page) = fresh();
        for _ in 0..20 {
            widget.change_font_size(1);
        }
        assert_eq!(store.value(FONT_SIZE_KEY).as_deref(), Some("200"));
        assert_eq!(page.snapshot().root_font_size.as_deref(), Some("200%"));
        for _ in 0..30 {
            widget.change_font_size(-1);
        }
        assert_eq!(widget.state().font_size, Some(FontSize::clamped(50)));
    }

    #[test]
    fn font_size_recovers_from_corrupt_store() {
        let (mut widget, store, _page) = fresh();
        store.insert_raw(FONT_SIZE_KEY, "not-a-number");
        assert_eq!(widget.change_font_size(1).percent(), 110);

        store.insert_raw(FONT_SIZE_KEY, "5000");
        assert_eq!(widget.change_font_size(-1).percent(), 200);

        store.insert_raw(FONT_SIZE_KEY, "-40");
        assert_eq!(widget.change_font_size(1).percent(), 50);
    }

    #[test]
    fn font_size_with_fraction_or_unit_keeps_leading_integer() {
        let (mut widget, store, page) = fresh();
        store.insert_raw(FONT_SIZE_KEY, "130.5");
        widget.rehydrate();
        assert_eq!(widget.state().font_size, Some(FontSize::clamped(130)));
        assert_eq!(page.snapshot().root_font_size.as_deref(), Some("130%"));
        assert_eq!(widget.change_font_size(1).percent(), 140);

        store.insert_raw(FONT_SIZE_KEY, "120px");
        assert_eq!(widget.change_font_size(-1).percent(), 110);
        assert_eq!(store.value(FONT_SIZE_KEY).as_deref(), Some("110"));
    }

    #[test]
    fn reset_font_size_deletes_key() {
        let (mut widget, store, page) = fresh();
        widget.change_font_size(3);
        widget.reset_font_size();
        assert!(store.value(FONT_SIZE_KEY).is_none());
        assert_eq!(page.snapshot().root_font_size.as_deref(), Some("100%"));
        assert_eq!(widget.state().font_size, None);
    }

    #[test]
    fn font_family_replaces_previous_choice() {
        let (mut widget, store, page) = fresh();
        widget.change_font_family(FontFamily::Dyslexic);
        widget.change_font_family(FontFamily::Serif);
        assert_eq!(store.value(FONT_FAMILY_KEY).as_deref(), Some("serif"));
        assert_eq!(
            page.snapshot().body_font_family.as_deref(),
            Some("Georgia, Times, serif")
        );

        widget.change_font_family(FontFamily::Default);
        assert!(store.value(FONT_FAMILY_KEY).is_none());
        assert_eq!(page.snapshot().body_font_family, None);
    }

    #[test]
    fn reset_all_clears_everything() {
        let (mut widget, store, page) = fresh();
        for setting in BooleanSetting::ALL {
            widget.toggle(setting);
        }
        widget.change_font_size(4);
        widget.change_font_family(FontFamily::Sans);
        store.insert_raw("unrelated", "kept");

        widget.reset_all();

        let snapshot = page.snapshot();
        assert!(snapshot.namespaced_classes().is_empty());
        assert_eq!(snapshot.root_font_size.as_deref(), Some("100%"));
        assert_eq!(snapshot.body_font_family, None);
        assert_eq!(snapshot.overlays, 0);
        assert!(store.namespaced_keys().is_empty());
        assert_eq!(store.value("unrelated").as_deref(), Some("kept"));
        assert!(widget.state().is_default());
    }

    #[test]
    fn store_failures_do_not_block_visual_changes() {
        let (mut widget, store, page) = fresh();
        store.set_read_only(true);
        widget.toggle(BooleanSetting::Grayscale);
        widget.change_font_size(2);
        assert!(page.snapshot().has_class("accessibility-grayscale"));
        assert_eq!(page.snapshot().root_font_size.as_deref(), Some("120%"));
        assert!(store.entries().is_empty());
    }

    #[test]
    fn dispatch_returns_announcement() {
        let (mut widget, _store, _page) = fresh();
        assert_eq!(
            widget.dispatch(Action::Toggle(BooleanSetting::HighContrast)),
            "High contrast on"
        );
        assert_eq!(widget.dispatch(Action::IncreaseFontSize), "Text size 110%");
        assert_eq!(
            widget.dispatch(Action::ResetAll),
            "All accessibility settings reset"
        );
    }
}
