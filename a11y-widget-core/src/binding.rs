//! Output capability for visual effects on the host page
use crate::settings::FontSize;

/// Trait for abstracting the DOM mutations the widget performs.
/// Implementations are expected to degrade silently when the page
/// cannot be touched; nothing here is reported back to the user.
pub trait UiBinding {
    /// Add `class` to `<body>`.
    fn add_class(&self, class: &str);

    /// Remove `class` from `<body>`.
    fn remove_class(&self, class: &str);

    /// Set the root element's inline font-size.
    fn set_root_font_size(&self, size: FontSize);

    /// Set or clear (`None`) the inline font-family on `<body>`.
    fn set_body_font_family(&self, stack: Option<&str>);

    /// Insert the reading-guide overlay.
    fn create_overlay(&self);

    /// Remove the reading-guide overlay if present.
    fn remove_overlay(&self);
}

impl<B: UiBinding + ?Sized> UiBinding for &B {
    fn add_class(&self, class: &str) {
        (**self).add_class(class);
    }

    fn remove_class(&self, class: &str) {
        (**self).remove_class(class);
    }

    fn set_root_font_size(&self, size: FontSize) {
        (**self).set_root_font_size(size);
    }

    fn set_body_font_family(&self, stack: Option<&str>) {
        (**self).set_body_font_family(stack);
    }

    fn create_overlay(&self) {
        (**self).create_overlay();
    }

    fn remove_overlay(&self) {
        (**self).remove_overlay();
    }
}
