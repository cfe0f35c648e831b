use std::iter;

use super::StyleOverrides;
use crate::content::{ProductSection, Section};
use crate::resolve::{non_blank, resolve};
use crate::theme::{Alpha, ColorSlot, ColorToken, SectionColors, ThemeConfig};

/// Whether an override needs `colorMode: custom` to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeGate {
    /// Only applies in custom color mode.
    Custom,
    /// Applies whatever the color mode.
    Always,
}

impl ModeGate {
    fn admits(self, overrides: &StyleOverrides) -> bool {
        match self {
            ModeGate::Custom => overrides.is_custom(),
            ModeGate::Always => true,
        }
    }
}

/// A color field a section may override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideField {
    Background,
    Text,
    Primary,
}

impl OverrideField {
    fn get(self, overrides: &StyleOverrides) -> Option<&str> {
        match self {
            OverrideField::Background => overrides.background_color.as_deref(),
            OverrideField::Text => overrides.text_color.as_deref(),
            OverrideField::Primary => overrides.primary_color.as_deref(),
        }
    }
}

/// A color field of the theme's per-section table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionField {
    Background,
    Text,
}

impl SectionField {
    fn get(self, colors: &SectionColors) -> Option<&str> {
        match self {
            SectionField::Background => colors.background_color.as_deref(),
            SectionField::Text => colors.text_color.as_deref(),
        }
    }
}

/// How one color attribute of a section is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRule {
    pub override_field: Option<OverrideField>,
    pub gate: ModeGate,
    /// Appended to the override value only.
    pub override_alpha: Option<Alpha>,
    pub section_field: Option<SectionField>,
    /// Global palette slots, tried in order.
    pub globals: &'static [ColorSlot],
    pub default: &'static str,
}

impl ColorRule {
    const fn new(
        override_field: OverrideField,
        gate: ModeGate,
        section_field: Option<SectionField>,
        globals: &'static [ColorSlot],
        default: &'static str,
    ) -> Self {
        Self {
            override_field: Some(override_field),
            gate,
            override_alpha: None,
            section_field,
            globals,
            default,
        }
    }

    const fn background(globals: &'static [ColorSlot], default: &'static str) -> Self {
        Self::new(
            OverrideField::Background,
            ModeGate::Custom,
            Some(SectionField::Background),
            globals,
            default,
        )
    }

    const fn text(default: &'static str) -> Self {
        Self::new(
            OverrideField::Text,
            ModeGate::Custom,
            Some(SectionField::Text),
            &[ColorSlot::Text],
            default,
        )
    }

    const fn without_section(self) -> Self {
        Self {
            section_field: None,
            ..self
        }
    }

    const fn ungated(self) -> Self {
        Self {
            gate: ModeGate::Always,
            ..self
        }
    }
}

/// Resolves one color attribute of a section.
///
/// Precedence: the section override (if the rule's gate admits it), the
/// theme's per-section color, the global slots in order, the rule default.
/// Blank values are absent at every level.
///
/// # Examples
///
/// ```
/// use vitrine_core::style::{resolve_color, PaletteRules, StyleOverrides};
/// use vitrine_core::theme::ThemeConfig;
///
/// let theme = ThemeConfig::from_json(r##"{ "colors": { "background": "#000000" } }"##).unwrap();
/// let overrides: StyleOverrides =
///     serde_json::from_str(r##"{ "colorMode": "theme", "backgroundColor": "#ABCDEF" }"##).unwrap();
///
/// let rules = PaletteRules::landing(vitrine_core::content::Section::Hero);
/// assert_eq!(resolve_color(&rules.background, "hero", &overrides, &theme).as_str(), "#000000");
/// ```
pub fn resolve_color(
    rule: &ColorRule,
    section: &str,
    overrides: &StyleOverrides,
    theme: &ThemeConfig,
) -> ColorToken {
    let overridden = rule
        .override_field
        .filter(|_| rule.gate.admits(overrides))
        .and_then(|field| non_blank(field.get(overrides)))
        .map(|value| {
            let token = ColorToken::new(value);
            match rule.override_alpha {
                Some(alpha) => token.with_alpha(alpha),
                None => token,
            }
        });

    let section_level = rule
        .section_field
        .and_then(|field| theme.section_colors(section).and_then(|colors| field.get(colors)));

    let theme_levels = iter::once(section_level)
        .chain(rule.globals.iter().map(|slot| theme.colors.get(*slot)))
        .map(|value| non_blank(value).map(ColorToken::from));

    resolve(iter::once(overridden).chain(theme_levels), ColorToken::new(rule.default))
}

/// The color rules of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteRules {
    pub background: ColorRule,
    pub text: ColorRule,
    pub muted: ColorRule,
    pub primary: ColorRule,
    pub accent: ColorRule,
    pub border: ColorRule,
}

const DEFAULT_TEXT: &str = "#2D3748";
const LIGHT_BACKGROUND: &str = "#F8F9FA";
const WHITE: &str = "#FFFFFF";

const MUTED: ColorRule = ColorRule {
    override_field: Some(OverrideField::Text),
    gate: ModeGate::Custom,
    override_alpha: Some(Alpha::DENSE),
    section_field: None,
    globals: &[ColorSlot::Muted],
    default: "#718096",
};

const PRIMARY: ColorRule = ColorRule::new(
    OverrideField::Primary,
    ModeGate::Custom,
    None,
    &[ColorSlot::Primary],
    "#8B4513",
);

const ACCENT: ColorRule = ColorRule::new(
    OverrideField::Primary,
    ModeGate::Custom,
    None,
    &[ColorSlot::Accent, ColorSlot::Primary],
    "#D2691E",
);

const BORDER: ColorRule = ColorRule::new(
    OverrideField::Primary,
    ModeGate::Custom,
    None,
    &[ColorSlot::Border, ColorSlot::Primary],
    "#E2E8F0",
);

impl PaletteRules {
    const fn with(background: ColorRule, text: ColorRule) -> Self {
        Self {
            background,
            text,
            muted: MUTED,
            primary: PRIMARY,
            accent: ACCENT,
            border: BORDER,
        }
    }

    /// Rules shared by every product page section.
    pub const PRODUCT: PaletteRules = PaletteRules::with(
        ColorRule::background(&[ColorSlot::Background], WHITE),
        ColorRule::text(DEFAULT_TEXT),
    );

    /// The rules of a landing section.
    ///
    /// The header's text override applies in either color mode.
    pub fn landing(section: Section) -> Self {
        let background = ColorRule::background(&[ColorSlot::Background], LIGHT_BACKGROUND);
        let text = ColorRule::text(DEFAULT_TEXT);

        match section {
            Section::Header => Self::with(
                ColorRule::background(&[ColorSlot::Secondary], WHITE),
                text.ungated(),
            ),
            Section::Hero => Self::with(
                ColorRule::background(&[ColorSlot::Background], WHITE),
                ColorRule::text(WHITE),
            ),
            Section::Cta => Self::with(
                ColorRule::new(
                    OverrideField::Primary,
                    ModeGate::Custom,
                    Some(SectionField::Background),
                    &[ColorSlot::Primary],
                    "#8B4513",
                ),
                ColorRule::text(WHITE).without_section(),
            ),
            Section::WhyChooseUs => Self::with(
                ColorRule::background(&[ColorSlot::Background], WHITE),
                text.without_section(),
            ),
            Section::LeadMagnet => Self::with(background.without_section(), text.without_section()),
            Section::Footer => Self::with(
                ColorRule::background(&[ColorSlot::Secondary], "#1F2937"),
                ColorRule::text("#F9FAFB"),
            ),
            Section::About
            | Section::Problems
            | Section::Solutions
            | Section::Products
            | Section::Testimonials => Self::with(background, text),
        }
    }

    pub fn product(_section: ProductSection) -> Self {
        Self::PRODUCT
    }
}

/// The resolved colors of one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub background: ColorToken,
    pub text: ColorToken,
    pub muted: ColorToken,
    pub primary: ColorToken,
    pub accent: ColorToken,
    pub border: ColorToken,
    /// The section's gradient: its primary override fading out in custom
    /// mode, primary to accent otherwise.
    pub gradient: String,
}

impl Palette {
    pub fn resolve(
        rules: &PaletteRules,
        section: &str,
        overrides: &StyleOverrides,
        theme: &ThemeConfig,
    ) -> Self {
        let color = |rule: &ColorRule| resolve_color(rule, section, overrides, theme);
        let primary = color(&rules.primary);
        let accent = color(&rules.accent);
        let gradient = match non_blank(overrides.primary_color.as_deref()) {
            Some(_) if overrides.is_custom() => primary.gradient_to(&primary.with_alpha(Alpha::HALF)),
            _ => primary.gradient_to(&accent),
        };

        Self {
            background: color(&rules.background),
            text: color(&rules.text),
            muted: color(&rules.muted),
            primary,
            accent,
            border: color(&rules.border),
            gradient,
        }
    }

    /// Palette of a landing section.
    pub fn landing(section: Section, overrides: &StyleOverrides, theme: &ThemeConfig) -> Self {
        Self::resolve(&PaletteRules::landing(section), section.key(), overrides, theme)
    }

    /// Palette of a product page section. Theme section colors are looked up
    /// under `product.<key>`.
    pub fn product(section: ProductSection, overrides: &StyleOverrides, theme: &ThemeConfig) -> Self {
        let key = format!("product.{}", section.key());
        Self::resolve(&PaletteRules::product(section), &key, overrides, theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(json: &str) -> ThemeConfig {
        ThemeConfig::from_json(json).unwrap()
    }

    fn overrides(json: &str) -> StyleOverrides {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_theme_mode_ignores_gated_override() {
        let theme = theme(r##"{ "colors": { "background": "#000000" } }"##);
        let overrides = overrides(r##"{ "colorMode": "theme", "backgroundColor": "#ABCDEF" }"##);
        let palette = Palette::landing(Section::Hero, &overrides, &theme);
        assert_eq!(palette.background.as_str(), "#000000");
    }

    #[test]
    fn test_custom_mode_primary_override_wins() {
        let theme = theme(r##"{ "colors": { "primary": "#8B4513", "accent": "#D2691E" } }"##);
        let overrides = overrides(r##"{ "colorMode": "custom", "primaryColor": "#112233" }"##);
        let palette = Palette::landing(Section::Hero, &overrides, &theme);
        assert_eq!(palette.primary.as_str(), "#112233");
        assert_eq!(palette.accent.as_str(), "#112233");
        assert_eq!(palette.gradient, "linear-gradient(135deg, #112233, #11223380)");
    }

    #[test]
    fn test_blank_override_is_absent() {
        let theme = theme(r##"{ "colors": { "primary": "#8B4513" } }"##);
        let overrides = StyleOverrides {
            color_mode: Some("custom".to_string()),
            primary_color: Some("   ".to_string()),
            ..Default::default()
        };
        let palette = Palette::landing(Section::Hero, &overrides, &theme);
        assert_eq!(palette.primary.as_str(), "#8B4513");
    }

    #[test]
    fn test_section_level_beats_global() {
        let theme = theme(
            r##"{ "colors": { "secondary": "#CD853F" }, "sections": { "header": { "backgroundColor": "#101010" } } }"##,
        );
        let palette = Palette::landing(Section::Header, &StyleOverrides::default(), &theme);
        assert_eq!(palette.background.as_str(), "#101010");
    }

    #[test]
    fn test_global_then_default() {
        let theme = theme(r##"{ "colors": { "secondary": "#CD853F" } }"##);
        let palette = Palette::landing(Section::Header, &StyleOverrides::default(), &theme);
        assert_eq!(palette.background.as_str(), "#CD853F");

        let palette = Palette::landing(Section::Testimonials, &StyleOverrides::default(), &ThemeConfig::default());
        assert_eq!(palette.background.as_str(), "#F8F9FA");
        assert_eq!(palette.text.as_str(), "#2D3748");
        assert_eq!(palette.muted.as_str(), "#718096");
    }

    #[test]
    fn test_header_text_override_is_ungated() {
        let overrides = overrides(r##"{ "textColor": "#FF0000" }"##);
        let header = Palette::landing(Section::Header, &overrides, &ThemeConfig::default());
        assert_eq!(header.text.as_str(), "#FF0000");

        let footer = Palette::landing(Section::Footer, &overrides, &ThemeConfig::default());
        assert_eq!(footer.text.as_str(), "#F9FAFB");
    }

    #[test]
    fn test_muted_uses_text_override_with_alpha() {
        let overrides = overrides(r##"{ "colorMode": "custom", "textColor": "#333333" }"##);
        let palette = Palette::landing(Section::Products, &overrides, &ThemeConfig::default());
        assert_eq!(palette.text.as_str(), "#333333");
        assert_eq!(palette.muted.as_str(), "#333333E6");
    }

    #[test]
    fn test_sections_without_section_lookup() {
        let theme = theme(r##"{ "sections": { "leadMagnet": { "backgroundColor": "#123456" } } }"##);
        let palette = Palette::landing(Section::LeadMagnet, &StyleOverrides::default(), &theme);
        assert_eq!(palette.background.as_str(), "#F8F9FA");
    }

    #[test]
    fn test_product_palette_uses_prefixed_key() {
        let theme = theme(r##"{ "sections": { "product.specs": { "backgroundColor": "#EEEEEE" } } }"##);
        let palette = Palette::product(ProductSection::Specs, &StyleOverrides::default(), &theme);
        assert_eq!(palette.background.as_str(), "#EEEEEE");
        let palette = Palette::product(ProductSection::Hero, &StyleOverrides::default(), &theme);
        assert_eq!(palette.background.as_str(), "#FFFFFF");
    }

    #[test]
    fn test_theme_gradient() {
        let theme = theme(r##"{ "colors": { "primary": "#8B4513", "accent": "#D2691E" } }"##);
        let palette = Palette::landing(Section::Cta, &StyleOverrides::default(), &theme);
        assert_eq!(palette.gradient, "linear-gradient(135deg, #8B4513, #D2691E)");
        assert_eq!(palette.background.as_str(), "#8B4513");
    }
}
