//! Host-page configuration for the widget
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

impl Position {
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::BottomRight => "accessibility-position-bottom-right",
            Self::BottomLeft => "accessibility-position-bottom-left",
            Self::TopRight => "accessibility-position-top-right",
            Self::TopLeft => "accessibility-position-top-left",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Light => "accessibility-theme-light",
            Self::Dark => "accessibility-theme-dark",
        }
    }
}

/// Which panel controls are offered. Hiding a control never stops a
/// previously persisted value from being restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Features {
    pub font_size: bool,
    pub contrast: bool,
    pub grayscale: bool,
    pub high_contrast: bool,
    pub negative_contrast: bool,
    pub light_background: bool,
    pub links: bool,
    pub font_family: bool,
    pub cursor: bool,
    pub reading_guide: bool,
    pub screen_reader: bool,
    pub keyboard_navigation: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            font_size: true,
            contrast: true,
            grayscale: true,
            high_contrast: true,
            negative_contrast: true,
            light_background: true,
            links: true,
            font_family: true,
            cursor: true,
            reading_guide: true,
            screen_reader: true,
            keyboard_navigation: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    pub position: Position,
    pub theme: Theme,
    pub language: String,
    pub features: Features,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            position: Position::default(),
            theme: Theme::default(),
            language: "en".to_string(),
            features: Features::default(),
        }
    }
}

impl WidgetConfig {
    /// Parse configuration JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// CSS classes applied to both the widget host and the panel.
    #[must_use]
    pub fn host_classes(&self) -> [&'static str; 2] {
        [self.position.class_name(), self.theme.class_name()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let cfg = WidgetConfig::from_json("{}").unwrap();
        assert_eq!(cfg, WidgetConfig::default());
        assert!(cfg.features.reading_guide);
        assert_eq!(cfg.language, "en");
    }

    #[test]
    fn partial_config_overrides_named_fields() {
        let cfg = WidgetConfig::from_json(
            r#"{"position":"top-left","theme":"dark","features":{"readingGuide":false}}"#,
        )
        .unwrap();
        assert_eq!(cfg.position, Position::TopLeft);
        assert_eq!(cfg.theme, Theme::Dark);
        assert!(!cfg.features.reading_guide);
        assert!(cfg.features.font_size);
        assert_eq!(
            cfg.host_classes(),
            ["accessibility-position-top-left", "accessibility-theme-dark"]
        );
    }

    #[test]
    fn invalid_json_reports_error() {
        let err = WidgetConfig::from_json(r#"{"position":"middle"}"#).unwrap_err();
        assert!(err.to_string().contains("JSON parsing error"));
        assert!(WidgetConfig::from_json("not json").is_err());
    }
}
