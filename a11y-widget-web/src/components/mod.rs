mod focus;
pub mod listeners;
pub mod panel;
pub mod toggle_button;
pub mod widget;

pub use panel::Panel;
pub use toggle_button::ToggleButton;
pub use widget::{AccessibilityWidget, PageWidget};
