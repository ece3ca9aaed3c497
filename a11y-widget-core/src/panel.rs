//! Panel visibility state machine
//!
//! Visibility is session-only and never persisted.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PanelVisibility {
    #[default]
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelEvent {
    /// Floating toggle button clicked.
    ToggleButton,
    /// Close button inside the panel clicked.
    CloseButton,
    /// Escape pressed anywhere on the page.
    Escape,
    /// Click landed outside both the widget and the panel.
    OutsideClick,
}

impl PanelVisibility {
    #[must_use]
    pub const fn next(self, event: PanelEvent) -> Self {
        match event {
            PanelEvent::ToggleButton => match self {
                Self::Hidden => Self::Visible,
                Self::Visible => Self::Hidden,
            },
            PanelEvent::CloseButton | PanelEvent::Escape | PanelEvent::OutsideClick => {
                Self::Hidden
            }
        }
    }

    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Map a `KeyboardEvent.key` value to a panel event.
#[must_use]
pub fn key_event(key: &str) -> Option<PanelEvent> {
    match key {
        "Escape" | "Esc" => Some(PanelEvent::Escape),
        _ => None,
    }
}

/// Classify a page click by where it landed.
#[must_use]
pub const fn click_event(inside_widget: bool, inside_panel: bool) -> Option<PanelEvent> {
    if inside_widget || inside_panel {
        None
    } else {
        Some(PanelEvent::OutsideClick)
    }
}

/// Where Tab should move focus within a trapped list of `len` elements.
///
/// `current` is the focused element's position, or `None` when focus sits
/// outside the list. Returns `None` when the browser's default move already
/// stays inside.
#[must_use]
pub const fn tab_wrap(len: usize, current: Option<usize>, backwards: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        None => Some(0),
        Some(0) if backwards => Some(len - 1),
        Some(i) if !backwards && i + 1 >= len => Some(0),
        Some(_) => None,
    }
}
