use a11y_widget_core::controls::OVERLAY_ID;
use a11y_widget_core::panel::{click_event, key_event};
use a11y_widget_core::{AccessibilityState, Features, PanelEvent, PanelVisibility, sections};
use anyhow::{Result, ensure};
use std::collections::HashSet;

use super::{Harness, ScenarioCtx};

pub fn visibility(ctx: &ScenarioCtx) -> Result<AccessibilityState> {
    let harness = Harness::fresh();
    let stored_before = harness.store.entries();

    let mut panel = PanelVisibility::default();
    ensure!(!panel.is_visible(), "panel should start hidden");

    let script = [
        (PanelEvent::ToggleButton, true),
        (PanelEvent::ToggleButton, false),
        (PanelEvent::ToggleButton, true),
        (PanelEvent::CloseButton, false),
        (PanelEvent::CloseButton, false),
        (PanelEvent::ToggleButton, true),
        (PanelEvent::Escape, false),
        (PanelEvent::ToggleButton, true),
        (PanelEvent::OutsideClick, false),
        (PanelEvent::OutsideClick, false),
    ];
    for (step, (event, expect_visible)) in script.into_iter().enumerate() {
        panel = panel.next(event);
        ensure!(
            panel.is_visible() == expect_visible,
            "step {step}: {event:?} left panel visible={}",
            panel.is_visible()
        );
    }

    ensure!(key_event("Escape") == Some(PanelEvent::Escape), "Escape not mapped");
    ensure!(key_event("Esc") == Some(PanelEvent::Escape), "legacy Esc not mapped");
    ensure!(key_event("Enter").is_none(), "Enter should not close the panel");
    ensure!(click_event(true, false).is_none(), "click on widget closed the panel");
    ensure!(click_event(false, true).is_none(), "click in panel closed the panel");
    ensure!(
        click_event(false, false) == Some(PanelEvent::OutsideClick),
        "outside click not detected"
    );

    ensure!(
        harness.store.entries() == stored_before,
        "panel visibility touched the store"
    );

    let catalog = sections(&Features::default());
    let ids: Vec<&str> = catalog
        .iter()
        .flat_map(|s| s.controls.iter().map(|c| c.id))
        .collect();
    let unique: HashSet<&str> = ids.iter().copied().collect();
    ensure!(ids.len() == unique.len(), "duplicate control ids: {ids:?}");
    ensure!(!unique.contains(OVERLAY_ID), "a control reuses the overlay id");

    if ctx.verbose {
        println!("  🪟 panel: {} controls across {} sections", ids.len(), catalog.len());
    }
    Ok(harness.state().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_scenario_passes() {
        let ctx = ScenarioCtx {
            seed: 7,
            iteration: 0,
            verbose: false,
        };
        visibility(&ctx).unwrap();
    }
}
