use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ConfigError, Result};
use crate::i18n::Language;
use crate::serde::{deserialize_optional_string, lenient};

/// A global color slot of the theme palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    Primary,
    Secondary,
    Accent,
    Background,
    Text,
    Border,
    Muted,
    Destructive,
    Success,
    Warning,
    Error,
}

/// Global color palette. Every slot is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeColors {
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub primary: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub secondary: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub accent: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub background: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub text: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub border: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub muted: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub destructive: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub success: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub warning: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub error: Option<String>,
}

impl ThemeColors {
    pub fn get(&self, slot: ColorSlot) -> Option<&str> {
        let value = match slot {
            ColorSlot::Primary => &self.primary,
            ColorSlot::Secondary => &self.secondary,
            ColorSlot::Accent => &self.accent,
            ColorSlot::Background => &self.background,
            ColorSlot::Text => &self.text,
            ColorSlot::Border => &self.border,
            ColorSlot::Muted => &self.muted,
            ColorSlot::Destructive => &self.destructive,
            ColorSlot::Success => &self.success,
            ColorSlot::Warning => &self.warning,
            ColorSlot::Error => &self.error,
        };
        value.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeTypography {
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub font_family: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub font_size: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub heading_size: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub body_size: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub line_height: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub font_weight: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeLayout {
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub container_width: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub section_spacing: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub border_radius: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub max_width: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonStyle {
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub style: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub size: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub rounded: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardStyle {
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub shadow: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub border: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeComponents {
    #[serde(deserialize_with = "lenient")]
    pub button: ButtonStyle,
    #[serde(deserialize_with = "lenient")]
    pub card: CardStyle,
}

/// Per-section color overrides set at the theme level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionColors {
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub background_color: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub text_color: Option<String>,
}

/// The theme configuration driving a whole site.
///
/// Read-only for the lifetime of the process. Every field is optional and a
/// malformed sub-object degrades to its default instead of failing the load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    #[serde(deserialize_with = "lenient")]
    pub colors: ThemeColors,
    #[serde(deserialize_with = "lenient")]
    pub typography: ThemeTypography,
    #[serde(deserialize_with = "lenient")]
    pub layout: ThemeLayout,
    #[serde(deserialize_with = "lenient")]
    pub components: ThemeComponents,
    /// Section key to theme-level color overrides.
    #[serde(deserialize_with = "lenient")]
    pub sections: BTreeMap<String, SectionColors>,
    /// Section key to theme-level raw section content.
    #[serde(deserialize_with = "lenient")]
    pub content: Map<String, Value>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub project_language: Option<String>,
}

impl ThemeConfig {
    /// Parses a theme from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::InvalidTheme(e.to_string()))
    }

    /// The language the site is authored in. Unknown or missing tags fall
    /// back to the default language.
    pub fn language(&self) -> Language {
        Language::from_tag(self.project_language.as_deref().unwrap_or_default())
    }

    pub fn section_colors(&self, key: &str) -> Option<&SectionColors> {
        self.sections.get(key)
    }

    /// Theme-level raw content for a section, if it is present and not null.
    pub fn section_content(&self, key: &str) -> Option<&Value> {
        self.content.get(key).filter(|value| !value.is_null())
    }
}

/// A site document: the theme plus the page's own instance content.
///
/// ```json
/// { "theme": { "colors": { "primary": "#8B4513" } }, "pageContent": { "hero": { "title": "..." } } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    #[serde(deserialize_with = "lenient")]
    pub page_content: Map<String, Value>,
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::InvalidTheme(e.to_string()))
    }

    /// Instance-level raw content for a section, if present and not null.
    pub fn page_content(&self, key: &str) -> Option<&Value> {
        self.page_content.get(key).filter(|value| !value.is_null())
    }
}
