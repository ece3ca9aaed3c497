use a11y_widget_core::{
    AccessibilityState, BooleanSetting, FONT_FAMILY_KEY, FONT_SIZE_KEY, FontFamily, FontSize,
    MemoryStore,
};
use anyhow::{Result, ensure};

use super::{Harness, ScenarioCtx};

pub fn smoke(ctx: &ScenarioCtx) -> Result<AccessibilityState> {
    let mut harness = Harness::fresh();
    ensure!(harness.state().is_default(), "fresh state should be default");
    let page = harness.snapshot();
    ensure!(
        page.namespaced_classes().is_empty(),
        "fresh page carries classes: {:?}",
        page.namespaced_classes()
    );
    ensure!(page.root_font_size.is_none(), "fresh page has inline font-size");
    ensure!(harness.store.namespaced_keys().is_empty(), "fresh store is not empty");

    let enabled = harness.widget.toggle(BooleanSetting::HighContrast);
    ensure!(enabled, "first toggle should enable high contrast");
    ensure!(
        harness.store.value("accessibility-high-contrast").as_deref() == Some("true"),
        "high contrast not persisted"
    );
    harness.ensure_consistent()?;

    if ctx.verbose {
        println!("  ✨ smoke: {:?}", harness.snapshot().namespaced_classes());
    }
    Ok(harness.state().clone())
}

pub fn toggles(ctx: &ScenarioCtx) -> Result<AccessibilityState> {
    let mut harness = Harness::fresh();
    for setting in BooleanSetting::ALL {
        ensure!(harness.widget.toggle(setting), "{setting} did not turn on");
        ensure!(
            harness.snapshot().has_class(setting.class_name()),
            "{} missing after enabling",
            setting.class_name()
        );
        ensure!(
            harness.store.value(setting.key()).as_deref() == Some("true"),
            "{} not stored as true",
            setting.key()
        );
        harness.ensure_consistent()?;

        ensure!(!harness.widget.toggle(setting), "{setting} did not turn off");
        ensure!(
            !harness.snapshot().has_class(setting.class_name()),
            "{} left behind after disabling",
            setting.class_name()
        );
        ensure!(
            harness.store.value(setting.key()).as_deref() == Some("false"),
            "{} not stored as false",
            setting.key()
        );
        harness.ensure_consistent()?;

        if ctx.verbose {
            println!("  🔁 {setting} on/off");
        }
    }

    harness.widget.toggle(BooleanSetting::ReadingGuide);
    ensure!(harness.snapshot().overlays == 1, "reading guide overlay not created");
    harness.widget.toggle(BooleanSetting::ReadingGuide);
    ensure!(harness.snapshot().overlays == 0, "reading guide overlay not removed");
    Ok(harness.state().clone())
}

pub fn font_size(ctx: &ScenarioCtx) -> Result<AccessibilityState> {
    let mut harness = Harness::fresh();

    let up = harness.widget.change_font_size(1);
    ensure!(up.percent() == 110, "first increase gave {up}");
    ensure!(harness.store.value(FONT_SIZE_KEY).as_deref() == Some("110"), "110 not stored");

    for _ in 0..20 {
        harness.widget.change_font_size(1);
    }
    ensure!(
        harness.state().font_size == Some(FontSize::clamped(200)),
        "font size exceeded the maximum: {:?}",
        harness.state().font_size
    );
    ensure!(harness.snapshot().root_font_size.as_deref() == Some("200%"), "root not at 200%");

    for _ in 0..30 {
        harness.widget.change_font_size(-1);
    }
    ensure!(
        harness.state().font_size == Some(FontSize::clamped(50)),
        "font size fell below the minimum: {:?}",
        harness.state().font_size
    );
    harness.ensure_consistent()?;

    harness.widget.reset_font_size();
    ensure!(harness.store.value(FONT_SIZE_KEY).is_none(), "reset left a stored size");
    ensure!(harness.snapshot().root_font_size.as_deref() == Some("100%"), "reset did not restore 100%");
    harness.ensure_consistent()?;

    harness.store.insert_raw(FONT_SIZE_KEY, "abc");
    let recovered = harness.widget.change_font_size(1);
    ensure!(
        recovered.percent() == 110,
        "non-numeric stored size should count as 100, got {recovered}"
    );

    if ctx.verbose {
        println!("  🔠 font size bounds hold");
    }
    Ok(harness.state().clone())
}

pub fn reset(ctx: &ScenarioCtx) -> Result<AccessibilityState> {
    let mut harness = Harness::fresh();
    for setting in BooleanSetting::ALL {
        harness.widget.toggle(setting);
    }
    harness.widget.change_font_size(3);
    harness.widget.change_font_family(FontFamily::Serif);
    harness.ensure_consistent()?;

    harness.widget.reset_all();
    let page = harness.snapshot();
    ensure!(
        page.namespaced_classes().is_empty(),
        "classes survived reset: {:?}",
        page.namespaced_classes()
    );
    ensure!(page.root_font_size.as_deref() == Some("100%"), "root not back to 100%");
    ensure!(page.body_font_family.is_none(), "font family survived reset");
    ensure!(page.overlays == 0, "overlay survived reset");
    ensure!(
        harness.store.namespaced_keys().is_empty(),
        "keys survived reset: {:?}",
        harness.store.namespaced_keys()
    );
    ensure!(
        *harness.state() == AccessibilityState::default(),
        "state not default after reset"
    );

    harness.reload();
    ensure!(harness.state().is_default(), "reset did not survive a reload");

    if ctx.verbose {
        println!("  🧹 reset cleared everything");
    }
    Ok(harness.state().clone())
}

pub fn rehydrate(ctx: &ScenarioCtx) -> Result<AccessibilityState> {
    let mut harness = Harness::fresh();
    harness.widget.toggle(BooleanSetting::HighContrast);
    harness.widget.toggle(BooleanSetting::ReadingGuide);
    harness.widget.change_font_size(3);
    harness.widget.change_font_family(FontFamily::Dyslexic);
    let before_state = harness.state().clone();
    let before_page = harness.snapshot();

    harness.reload();
    ensure!(*harness.state() == before_state, "state changed across reload");
    ensure!(harness.snapshot() == before_page, "page changed across reload");
    harness.ensure_consistent()?;

    let corrupt = MemoryStore::from_pairs([
        ("accessibility-grayscale", "yes"),
        ("accessibility-big-cursor", "true"),
        (FONT_SIZE_KEY, "400"),
        (FONT_FAMILY_KEY, "comic-sans"),
    ]);
    let restored = Harness::with_store(corrupt);
    let state = restored.state();
    ensure!(
        !state.is_enabled(BooleanSetting::Grayscale),
        "only the exact string \"true\" enables a setting"
    );
    ensure!(state.is_enabled(BooleanSetting::BigCursor), "big cursor not restored");
    ensure!(
        restored.snapshot().root_font_size.as_deref() == Some("200%"),
        "out-of-range size not clamped on load"
    );
    ensure!(state.font_family == FontFamily::Default, "unknown font family accepted");

    if ctx.verbose {
        println!("  💾 reload restored {:?}", before_page.namespaced_classes());
    }
    Ok(restored.state().clone())
}
