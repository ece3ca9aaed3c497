//! Setting identifiers, storage keys and value types
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix shared by every storage key and body class the widget owns.
pub const NAMESPACE: &str = "accessibility-";

/// Storage key for the root font-size percentage.
pub const FONT_SIZE_KEY: &str = "accessibility-font-size";

/// Storage key for the font-family token.
pub const FONT_FAMILY_KEY: &str = "accessibility-font-family";

/// Two-state preferences, each mapped to exactly one class on `<body>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BooleanSetting {
    HighContrast,
    NegativeContrast,
    Grayscale,
    LightBackground,
    HighlightLinks,
    ReadingGuide,
    BigCursor,
}

impl BooleanSetting {
    pub const ALL: [Self; 7] = [
        Self::HighContrast,
        Self::NegativeContrast,
        Self::Grayscale,
        Self::LightBackground,
        Self::HighlightLinks,
        Self::ReadingGuide,
        Self::BigCursor,
    ];

    /// Storage key and body class for this setting. Both use the same token.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::HighContrast => "accessibility-high-contrast",
            Self::NegativeContrast => "accessibility-negative-contrast",
            Self::Grayscale => "accessibility-grayscale",
            Self::LightBackground => "accessibility-light-bg",
            Self::HighlightLinks => "accessibility-highlight-links",
            Self::ReadingGuide => "accessibility-reading-guide",
            Self::BigCursor => "accessibility-big-cursor",
        }
    }

    #[must_use]
    pub const fn class_name(self) -> &'static str {
        self.key()
    }

    /// Human readable name used in announcements.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighContrast => "High contrast",
            Self::NegativeContrast => "Negative contrast",
            Self::Grayscale => "Grayscale",
            Self::LightBackground => "Light background",
            Self::HighlightLinks => "Highlight links",
            Self::ReadingGuide => "Reading guide",
            Self::BigCursor => "Big cursor",
        }
    }

    /// Serialized form written to storage.
    #[must_use]
    pub const fn encode(enabled: bool) -> &'static str {
        if enabled { "true" } else { "false" }
    }

    /// Only the exact token `"true"` counts as enabled.
    #[must_use]
    pub fn decode(raw: Option<&str>) -> bool {
        raw == Some("true")
    }
}

impl fmt::Display for BooleanSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Root font-size as a whole percentage, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontSize(u16);

impl FontSize {
    pub const MIN: u16 = 50;
    pub const MAX: u16 = 200;
    pub const STEP: i32 = 10;
    pub const DEFAULT: Self = Self(100);

    /// Clamp an arbitrary percentage into the supported range.
    #[must_use]
    pub fn clamped(percent: i64) -> Self {
        let bounded = percent.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        Self(u16::try_from(bounded).unwrap_or(Self::DEFAULT.0))
    }

    /// Read the leading integer of a stored value, the way `parseInt` does:
    /// `"120px"` is 120 and `"130.5"` is 130. Input without leading digits
    /// yields `None`. The result is unclamped so callers decide how to bound it.
    #[must_use]
    pub fn parse_raw(raw: &str) -> Option<i64> {
        let trimmed = raw.trim_start();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if len == 0 {
            return None;
        }
        // All-digit overflow only; saturate like a huge JS number would clamp.
        let magnitude = rest[..len].parse::<i64>().unwrap_or(i64::MAX);
        Some(if negative { -magnitude } else { magnitude })
    }

    /// Parse a stored value into a clamped size.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::parse_raw(raw).map(Self::clamped)
    }

    /// Move `steps` increments of [`Self::STEP`] from `current`, then clamp.
    #[must_use]
    pub fn stepped(current: i64, steps: i32) -> Self {
        let delta = i64::from(steps).saturating_mul(i64::from(Self::STEP));
        Self::clamped(current.saturating_add(delta))
    }

    #[must_use]
    pub const fn percent(self) -> u16 {
        self.0
    }

    /// CSS value for `document.documentElement.style.fontSize`.
    #[must_use]
    pub fn css(self) -> String {
        format!("{}%", self.0)
    }

    #[must_use]
    pub fn encode(self) -> String {
        self.0.to_string()
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Body font-family override. `Default` means no override.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Default,
    Dyslexic,
    Sans,
    Serif,
}

impl FontFamily {
    pub const ALL: [Self; 4] = [Self::Default, Self::Dyslexic, Self::Sans, Self::Serif];

    /// Token persisted in storage.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dyslexic => "dyslexic",
            Self::Sans => "sans",
            Self::Serif => "serif",
        }
    }

    /// Unrecognised tokens map to `None` so callers fall back to the default.
    #[must_use]
    pub fn from_token(raw: &str) -> Option<Self> {
        match raw.trim() {
            "default" => Some(Self::Default),
            "dyslexic" => Some(Self::Dyslexic),
            "sans" => Some(Self::Sans),
            "serif" => Some(Self::Serif),
            _ => None,
        }
    }

    /// Concrete font stack applied to `<body>`, or `None` to clear the override.
    #[must_use]
    pub const fn stack(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Dyslexic => Some("OpenDyslexic, Arial, sans-serif"),
            Self::Sans => Some("Arial, Helvetica, sans-serif"),
            Self::Serif => Some("Georgia, Times, serif"),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "Default font",
            Self::Dyslexic => "Dyslexic friendly font",
            Self::Sans => "Sans serif font",
            Self::Serif => "Serif font",
        }
    }
}

/// Every storage key owned by the widget.
#[must_use]
pub fn all_keys() -> Vec<&'static str> {
    let mut keys = vec![FONT_SIZE_KEY];
    keys.extend(BooleanSetting::ALL.iter().map(|s| s.key()));
    keys.push(FONT_FAMILY_KEY);
    keys
}
