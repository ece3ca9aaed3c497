use a11y_widget_core::{
    AccessibilityState, BooleanSetting, FONT_FAMILY_KEY, FONT_SIZE_KEY, FontFamily, HeadlessPage,
    MemoryStore, PageSnapshot, Widget,
};
use anyhow::{Result, ensure};

pub mod panel;
pub mod random;
pub mod settings;

#[derive(Debug, Clone, Copy)]
pub struct ScenarioCtx {
    pub seed: u64,
    pub iteration: usize,
    pub verbose: bool,
}

/// A named check that runs against a fresh headless page.
#[derive(Clone, Copy)]
pub struct Scenario {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    run: fn(&ScenarioCtx) -> Result<AccessibilityState>,
}

impl Scenario {
    const fn new(
        key: &'static str,
        name: &'static str,
        description: &'static str,
        run: fn(&ScenarioCtx) -> Result<AccessibilityState>,
    ) -> Self {
        Self {
            key,
            name,
            description,
            run,
        }
    }

    /// Run once and return the widget state the scenario ended with.
    pub fn run(&self, ctx: &ScenarioCtx) -> Result<AccessibilityState> {
        (self.run)(ctx)
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario").field("key", &self.key).finish()
    }
}

const CATALOG: [Scenario; 7] = [
    Scenario::new(
        "smoke",
        "Smoke",
        "Fresh page starts clean and a single toggle sticks",
        settings::smoke,
    ),
    Scenario::new(
        "toggles",
        "Boolean Toggles",
        "Every boolean setting adds, persists and removes its class",
        settings::toggles,
    ),
    Scenario::new(
        "font-size",
        "Font Size Bounds",
        "Font size steps by 10 and stays within 50..=200",
        settings::font_size,
    ),
    Scenario::new(
        "reset",
        "Reset All",
        "Reset clears every class, style, overlay and stored key",
        settings::reset,
    ),
    Scenario::new(
        "rehydrate",
        "Rehydration",
        "A reload restores the same page from storage, tolerating corrupt values",
        settings::rehydrate,
    ),
    Scenario::new(
        "panel",
        "Panel Visibility",
        "Toggle, close, Escape and outside clicks drive the panel",
        panel::visibility,
    ),
    Scenario::new(
        "random",
        "Random Actions",
        "Seeded random actions and reloads keep page, store and state in sync",
        random::random_actions,
    ),
];

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    CATALOG.iter().map(|s| (s.key, s.description)).collect()
}

pub fn all_keys() -> Vec<&'static str> {
    CATALOG.iter().map(|s| s.key).collect()
}

pub fn get_scenario(key: &str) -> Option<Scenario> {
    CATALOG.iter().copied().find(|s| s.key == key)
}

/// A widget on a headless page with handles kept for inspection.
pub struct Harness {
    pub store: MemoryStore,
    pub page: HeadlessPage,
    pub widget: Widget<MemoryStore, HeadlessPage>,
}

impl Harness {
    pub fn fresh() -> Self {
        Self::with_store(MemoryStore::default())
    }

    /// Load a new page over `store`, as a browser reload would.
    pub fn with_store(store: MemoryStore) -> Self {
        let page = HeadlessPage::default();
        let widget = Widget::init(store.clone(), page.clone());
        Self {
            store,
            page,
            widget,
        }
    }

    pub fn reload(&mut self) {
        *self = Self::with_store(self.store.clone());
    }

    pub fn state(&self) -> &AccessibilityState {
        self.widget.state()
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.page.snapshot()
    }

    pub fn ensure_consistent(&self) -> Result<()> {
        ensure_consistent(self.state(), &self.snapshot(), &self.store)
    }
}

/// Check that the page and the store both mirror `state`.
pub fn ensure_consistent(
    state: &AccessibilityState,
    page: &PageSnapshot,
    store: &MemoryStore,
) -> Result<()> {
    for setting in BooleanSetting::ALL {
        let enabled = state.is_enabled(setting);
        ensure!(
            page.has_class(setting.class_name()) == enabled,
            "class {} present != state ({enabled})",
            setting.class_name()
        );
        let stored = store.value(setting.key());
        ensure!(
            BooleanSetting::decode(stored.as_deref()) == enabled,
            "stored {} = {stored:?} disagrees with state ({enabled})",
            setting.key()
        );
    }

    let guides = usize::from(state.is_enabled(BooleanSetting::ReadingGuide));
    ensure!(
        page.overlays == guides,
        "expected {guides} reading guide overlay(s), found {}",
        page.overlays
    );

    match state.font_size {
        Some(size) => {
            ensure!(
                page.root_font_size.as_deref() == Some(size.css().as_str()),
                "root font-size {:?} != {}",
                page.root_font_size,
                size.css()
            );
            ensure!(
                store.value(FONT_SIZE_KEY) == Some(size.encode()),
                "stored font size {:?} != {}",
                store.value(FONT_SIZE_KEY),
                size.encode()
            );
        }
        None => {
            ensure!(
                matches!(page.root_font_size.as_deref(), None | Some("100%")),
                "root font-size {:?} without a stored size",
                page.root_font_size
            );
            ensure!(
                store.value(FONT_SIZE_KEY).is_none(),
                "font size stored without state"
            );
        }
    }

    ensure!(
        page.body_font_family.as_deref() == state.font_family.stack(),
        "body font-family {:?} != {:?}",
        page.body_font_family,
        state.font_family.stack()
    );
    let expected_token = (state.font_family != FontFamily::Default)
        .then(|| state.font_family.token().to_string());
    ensure!(
        store.value(FONT_FAMILY_KEY) == expected_token,
        "stored font family {:?} != {expected_token:?}",
        store.value(FONT_FAMILY_KEY)
    );
    Ok(())
}
