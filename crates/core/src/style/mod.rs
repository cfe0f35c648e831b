//! Style attribute resolution.
//!
//! A section's final colors and type classes come from four layers, highest
//! precedence first: the section's own overrides, the theme's per-section
//! colors, the theme's global values and a hard-coded default.

mod palette;
mod typography;

pub use palette::{resolve_color, ColorRule, ModeGate, OverrideField, Palette, PaletteRules, SectionField};
pub use typography::{BaseTypography, TypeClasses};

use serde::{Deserialize, Serialize};

use crate::serde::deserialize_optional_string;

key_enum! {
    /// Whether a section's color overrides take effect.
    pub enum ColorMode {
        Theme => "theme",
        Custom => "custom",
    }
}

impl Default for ColorMode {
    fn default() -> Self {
        ColorMode::Theme
    }
}

/// Style fields any section's content may carry next to its text.
///
/// Flattened into every typed section struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleOverrides {
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub color_mode: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub background_color: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub text_color: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub primary_color: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub title_size: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub subtitle_size: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub description_size: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub title_weight: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub description_weight: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub title_font: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub description_font: Option<String>,
    /// Hero only.
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub benefits_size: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub benefits_weight: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub benefits_font: Option<String>,
}

impl StyleOverrides {
    /// The parsed color mode. Missing or unknown modes mean `theme`.
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
            .as_deref()
            .and_then(ColorMode::from_key)
            .unwrap_or_default()
    }

    pub fn is_custom(&self) -> bool {
        self.color_mode() == ColorMode::Custom
    }
}
