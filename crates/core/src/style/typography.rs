use super::StyleOverrides;
use crate::resolve::{non_blank, resolve_str};
use crate::theme::{BodySize, BorderRadius, FontFamily, FontWeight, HeadingSize, Shadow, ThemeConfig};

/// Utility classes for a section's title and description text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeClasses {
    pub title: String,
    pub subtitle: &'static str,
    pub description: String,
    pub radius: &'static str,
    pub shadow: &'static str,
}

impl TypeClasses {
    /// Resolves the section's type classes.
    ///
    /// Sizes follow `override || theme.typography || default key`, then the key
    /// is parsed. An unrecognized key at any level gets the fallback class, it
    /// does not fall through to the next level.
    pub fn resolve(overrides: &StyleOverrides, theme: &ThemeConfig) -> Self {
        Self::build(overrides, theme, "lg", HeadingSize::title_class, HeadingSize::FALLBACK_CLASS)
    }

    /// Like [`TypeClasses::resolve`], with the hero's larger display scale.
    pub fn hero(overrides: &StyleOverrides, theme: &ThemeConfig) -> Self {
        Self::build(
            overrides,
            theme,
            "2xl",
            HeadingSize::display_class,
            HeadingSize::DISPLAY_FALLBACK_CLASS,
        )
    }

    /// Classes for the hero's benefit list.
    ///
    /// Each attribute falls back to the theme's body typography, so a theme
    /// font weight like `400` lands on the `font-medium` default arm.
    pub fn hero_benefits(overrides: &StyleOverrides, theme: &ThemeConfig) -> String {
        let typography = &theme.typography;

        let size = resolve_str(
            [overrides.benefits_size.as_deref(), typography.body_size.as_deref()],
            "base",
        );
        let weight = resolve_str(
            [overrides.benefits_weight.as_deref(), typography.font_weight.as_deref()],
            "medium",
        );
        let font = resolve_str(
            [overrides.benefits_font.as_deref(), typography.font_family.as_deref()],
            "inter",
        );

        join([
            BodySize::from_key(&size)
                .map(BodySize::benefits_class)
                .unwrap_or("text-base"),
            weight_class(Some(weight.as_str()), "font-medium"),
            font_class(Some(font.as_str())),
        ])
    }

    fn build(
        overrides: &StyleOverrides,
        theme: &ThemeConfig,
        default_heading: &str,
        scale: fn(HeadingSize) -> &'static str,
        fallback: &'static str,
    ) -> Self {
        let typography = &theme.typography;

        let heading = resolve_str(
            [overrides.title_size.as_deref(), typography.heading_size.as_deref()],
            default_heading,
        );
        let title_size = HeadingSize::from_key(&heading).map(scale).unwrap_or(fallback);

        let subtitle = resolve_str(
            [overrides.subtitle_size.as_deref(), typography.body_size.as_deref()],
            "base",
        );
        let subtitle = BodySize::from_key(&subtitle)
            .map(BodySize::subtitle_class)
            .unwrap_or(BodySize::SUBTITLE_FALLBACK_CLASS);

        let body = resolve_str(
            [overrides.description_size.as_deref(), typography.body_size.as_deref()],
            "base",
        );
        let body_size = BodySize::from_key(&body)
            .map(BodySize::body_class)
            .unwrap_or(BodySize::BODY_FALLBACK_CLASS);

        let title = join([
            title_size,
            weight_class(overrides.title_weight.as_deref(), "font-bold"),
            font_class(overrides.title_font.as_deref()),
        ]);
        let description = join([
            body_size,
            weight_class(overrides.description_weight.as_deref(), "font-normal"),
            font_class(overrides.description_font.as_deref()),
        ]);

        Self {
            title,
            subtitle,
            description,
            radius: BorderRadius::class_for(theme.layout.border_radius.as_deref()),
            shadow: Shadow::class_for(theme.components.card.shadow.as_deref()),
        }
    }
}

/// Weight class for an optional key; unknown or missing keys get `default`.
pub(crate) fn weight_class(key: Option<&str>, default: &'static str) -> &'static str {
    key.and_then(FontWeight::from_key)
        .map(FontWeight::class)
        .unwrap_or(default)
}

/// Font class for an optional key. Missing means "inherit", so no class.
pub(crate) fn font_class(key: Option<&str>) -> &'static str {
    match non_blank(key) {
        Some(key) => FontFamily::from_key(key)
            .map(FontFamily::class)
            .unwrap_or(FontFamily::FALLBACK_CLASS),
        None => "",
    }
}

fn join<const N: usize>(classes: [&str; N]) -> String {
    classes
        .iter()
        .filter(|class| !class.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inline typography applied to a section's root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseTypography {
    pub font_family: String,
    pub font_size: String,
    pub line_height: String,
    pub font_weight: String,
    pub container_width: String,
}

impl BaseTypography {
    pub fn resolve(theme: &ThemeConfig) -> Self {
        let typography = &theme.typography;
        Self {
            font_family: resolve_str([typography.font_family.as_deref()], "Inter"),
            font_size: resolve_str([typography.font_size.as_deref()], "16px"),
            line_height: resolve_str([typography.line_height.as_deref()], "1.6"),
            font_weight: resolve_str([typography.font_weight.as_deref()], "400"),
            container_width: resolve_str(
                [
                    theme.layout.container_width.as_deref(),
                    theme.layout.max_width.as_deref(),
                ],
                "1200px",
            ),
        }
    }

    /// The `style` attribute value.
    pub fn css(&self) -> String {
        format!(
            "font-family: {}; font-size: {}; line-height: {}; font-weight: {};",
            self.font_family, self.font_size, self.line_height, self.font_weight
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(json: &str) -> ThemeConfig {
        ThemeConfig::from_json(json).unwrap()
    }

    #[test]
    fn test_defaults() {
        let classes = TypeClasses::resolve(&StyleOverrides::default(), &ThemeConfig::default());
        assert_eq!(classes.title, "text-4xl md:text-5xl font-bold");
        assert_eq!(classes.subtitle, "text-xl");
        assert_eq!(classes.description, "text-lg font-normal");
        assert_eq!(classes.radius, "rounded-md");
        assert_eq!(classes.shadow, "shadow-md");
    }

    #[test]
    fn test_override_beats_theme() {
        let theme = theme(r#"{ "typography": { "headingSize": "sm" } }"#);
        let overrides = StyleOverrides {
            title_size: Some("xl".to_string()),
            title_weight: Some("black".to_string()),
            title_font: Some("poppins".to_string()),
            ..Default::default()
        };
        let classes = TypeClasses::resolve(&overrides, &theme);
        assert_eq!(classes.title, "text-5xl md:text-6xl font-black font-poppins");
    }

    #[test]
    fn test_theme_heading_size() {
        let theme = theme(r#"{ "typography": { "headingSize": "sm", "bodySize": "xs" } }"#);
        let classes = TypeClasses::resolve(&StyleOverrides::default(), &theme);
        assert!(classes.title.starts_with("text-2xl md:text-3xl"));
        assert!(classes.description.starts_with("text-sm"));
    }

    #[test]
    fn test_unknown_key_gets_fallback_class() {
        let theme = theme(r#"{ "typography": { "headingSize": "sm" } }"#);
        let overrides = StyleOverrides {
            title_size: Some("huge".to_string()),
            description_size: Some("7xl".to_string()),
            title_font: Some("Comic Sans".to_string()),
            ..Default::default()
        };
        let classes = TypeClasses::resolve(&overrides, &theme);
        assert_eq!(classes.title, "text-4xl md:text-5xl font-bold font-inter");
        assert_eq!(classes.description, "text-lg font-normal");
    }

    #[test]
    fn test_hero_scale() {
        let classes = TypeClasses::hero(&StyleOverrides::default(), &ThemeConfig::default());
        assert!(classes.title.starts_with("text-6xl md:text-8xl"));
    }

    #[test]
    fn test_hero_benefits_classes() {
        let classes = TypeClasses::hero_benefits(&StyleOverrides::default(), &ThemeConfig::default());
        assert_eq!(classes, "text-base font-medium font-inter");

        let theme = theme(r#"{ "typography": { "bodySize": "xs", "fontWeight": "400", "fontFamily": "Poppins" } }"#);
        let classes = TypeClasses::hero_benefits(&StyleOverrides::default(), &theme);
        assert_eq!(classes, "text-sm font-medium font-inter");

        let overrides = StyleOverrides {
            benefits_size: Some("xl".to_string()),
            benefits_weight: Some("semibold".to_string()),
            benefits_font: Some("lato".to_string()),
            ..Default::default()
        };
        let classes = TypeClasses::hero_benefits(&overrides, &theme);
        assert_eq!(classes, "text-xl font-semibold font-lato");
    }

    #[test]
    fn test_base_typography() {
        let base = BaseTypography::resolve(&ThemeConfig::default());
        assert_eq!(
            base.css(),
            "font-family: Inter; font-size: 16px; line-height: 1.6; font-weight: 400;"
        );
        assert_eq!(base.container_width, "1200px");

        let base = BaseTypography::resolve(&theme(
            r#"{ "typography": { "fontFamily": "Poppins" }, "layout": { "maxWidth": "960px" } }"#,
        ));
        assert_eq!(base.font_family, "Poppins");
        assert_eq!(base.container_width, "960px");
    }
}
