//! Accessibility Widget Core
//!
//! Platform-agnostic settings model for the floating accessibility panel.
//! This crate owns toggle, reset and rehydration semantics without any
//! browser dependency; the page and the persistence layer are injected
//! through [`UiBinding`] and [`SettingsStore`].

pub mod action;
pub mod binding;
pub mod config;
pub mod controls;
pub mod headless;
pub mod panel;
pub mod settings;
pub mod state;
pub mod store;
pub mod widget;

// Re-export commonly used types
pub use action::Action;
pub use binding::UiBinding;
pub use config::{ConfigError, Features, Position, Theme, WidgetConfig};
pub use controls::{Control, Section, focus_order, sections};
pub use headless::{HeadlessPage, MemoryStore, PageSnapshot};
pub use panel::{PanelEvent, PanelVisibility};
pub use settings::{BooleanSetting, FONT_FAMILY_KEY, FONT_SIZE_KEY, FontFamily, FontSize, NAMESPACE};
pub use state::{AccessibilityState, apply};
pub use store::SettingsStore;
pub use widget::Widget;
