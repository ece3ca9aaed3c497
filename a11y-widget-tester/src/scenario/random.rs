use a11y_widget_core::{AccessibilityState, Action, PanelEvent, PanelVisibility};
use anyhow::{Context, Result, ensure};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{Harness, ScenarioCtx};

const STEPS: usize = 200;
const PANEL_EVENTS: [PanelEvent; 4] = [
    PanelEvent::ToggleButton,
    PanelEvent::CloseButton,
    PanelEvent::Escape,
    PanelEvent::OutsideClick,
];

/// Stream seed for one iteration so repeated runs of a seed differ.
fn stream_seed(ctx: &ScenarioCtx) -> u64 {
    ctx.seed
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add(ctx.iteration as u64)
}

pub fn random_actions(ctx: &ScenarioCtx) -> Result<AccessibilityState> {
    let mut rng = ChaCha8Rng::seed_from_u64(stream_seed(ctx));
    let actions = Action::all();
    let mut harness = Harness::fresh();
    let mut panel = PanelVisibility::default();
    let mut reloads = 0usize;

    for step in 0..STEPS {
        let roll: u8 = rng.gen_range(0..100);
        if roll < 8 {
            let before = harness.state().clone();
            harness.reload();
            reloads += 1;
            panel = PanelVisibility::default();
            ensure!(
                *harness.state() == before,
                "step {step}: reload changed state from {before:?} to {:?}",
                harness.state()
            );
        } else if roll < 20 {
            let event = PANEL_EVENTS[rng.gen_range(0..PANEL_EVENTS.len())];
            panel = panel.next(event);
        } else {
            let action = actions[rng.gen_range(0..actions.len())];
            let message = harness.widget.dispatch(action);
            ensure!(!message.is_empty(), "step {step}: {action:?} announced nothing");
            log::debug!("step {step}: {action:?} -> {message}");
        }

        harness
            .ensure_consistent()
            .with_context(|| format!("step {step} (seed {})", ctx.seed))?;
    }

    if ctx.verbose {
        println!(
            "  🎲 seed {} iteration {}: {STEPS} steps, {reloads} reloads, panel visible={}",
            ctx.seed,
            ctx.iteration,
            panel.is_visible()
        );
    }
    Ok(harness.state().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_actions_hold_for_several_seeds() {
        for seed in [0, 1, 42, 1337, u64::MAX] {
            for iteration in 0..3 {
                let ctx = ScenarioCtx {
                    seed,
                    iteration,
                    verbose: false,
                };
                if let Err(err) = random_actions(&ctx) {
                    panic!("seed {seed} iteration {iteration}: {err:#}");
                }
            }
        }
    }

    #[test]
    fn iterations_use_distinct_streams() {
        let a = ScenarioCtx {
            seed: 5,
            iteration: 0,
            verbose: false,
        };
        let b = ScenarioCtx { iteration: 1, ..a };
        assert_ne!(stream_seed(&a), stream_seed(&b));
    }
}
