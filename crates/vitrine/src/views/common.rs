//! View models shared by every page.

use chrono::Datelike;
use serde::de::DeserializeOwned;
use vitrine_core::{
    content::{
        landing::{typed, FooterContent, HeaderContent, IconItem, Link, SocialLink, Stat},
        DefaultsRegistry, ProductSection, Section,
    },
    forms::FormError,
    gate::{visible, Renderable},
    i18n::{Bundle, Language, TextKey},
    icons::{icon_symbol, IconTable},
    image::{ImageOutcome, ImageRequest},
    resolve::resolve_str,
    style::{BaseTypography, Palette, StyleOverrides, TypeClasses},
    theme::{Alpha, SiteConfig, ThemeConfig},
};

/// Resolves landing sections for one render: instance content over the
/// theme's content over the registry defaults.
#[derive(Clone, Copy)]
pub struct SectionSource<'a> {
    pub site: &'a SiteConfig,
    pub registry: &'a DefaultsRegistry,
}

impl<'a> SectionSource<'a> {
    pub fn new(site: &'a SiteConfig, registry: &'a DefaultsRegistry) -> Self {
        Self { site, registry }
    }

    pub fn theme(&self) -> &'a ThemeConfig {
        &self.site.theme
    }

    pub fn get<T: DeserializeOwned + Default>(&self, section: Section) -> T {
        let key = section.key();
        let merged = self.registry.resolve(
            section,
            self.site.page_content(key),
            self.site.theme.section_content(key),
        );
        typed(&merged)
    }

    /// The header title, used for the document title.
    pub fn site_title(&self) -> String {
        let header: HeaderContent = self.get(Section::Header);
        header.title.unwrap_or_default()
    }
}

/// Resolved colors and type classes of one section.
#[derive(Debug, Clone)]
pub struct SectionStyle {
    pub background: String,
    pub text: String,
    pub muted: String,
    pub primary: String,
    pub accent: String,
    pub border: String,
    pub gradient: String,
    /// Primary at low alpha, for icon chips and badges.
    pub tint: String,
    /// Text color readable on the primary color.
    pub on_primary: String,
    pub title: String,
    pub subtitle: &'static str,
    pub description: String,
    pub radius: &'static str,
    pub shadow: &'static str,
}

impl SectionStyle {
    fn new(palette: Palette, classes: TypeClasses) -> Self {
        Self {
            tint: palette.primary.with_alpha(Alpha::FAINT).to_string(),
            on_primary: palette.primary.contrast().to_string(),
            background: palette.background.to_string(),
            text: palette.text.to_string(),
            muted: palette.muted.to_string(),
            primary: palette.primary.to_string(),
            accent: palette.accent.to_string(),
            border: palette.border.to_string(),
            gradient: palette.gradient,
            title: classes.title,
            subtitle: classes.subtitle,
            description: classes.description,
            radius: classes.radius,
            shadow: classes.shadow,
        }
    }

    pub fn landing(section: Section, overrides: &StyleOverrides, theme: &ThemeConfig) -> Self {
        Self::new(
            Palette::landing(section, overrides, theme),
            TypeClasses::resolve(overrides, theme),
        )
    }

    /// The hero's palette with the display type scale.
    pub fn hero(overrides: &StyleOverrides, theme: &ThemeConfig) -> Self {
        Self::new(
            Palette::landing(Section::Hero, overrides, theme),
            TypeClasses::hero(overrides, theme),
        )
    }

    pub fn product(section: ProductSection, overrides: &StyleOverrides, theme: &ThemeConfig) -> Self {
        let classes = match section {
            ProductSection::Hero => TypeClasses::hero(overrides, theme),
            _ => TypeClasses::resolve(overrides, theme),
        };
        Self::new(Palette::product(section, overrides, theme), classes)
    }

    /// Inline style for the section root.
    pub fn css(&self) -> String {
        format!("background-color: {}; color: {};", self.background, self.text)
    }

    /// Inline style for a primary button.
    pub fn button_css(&self) -> String {
        format!("background-color: {}; color: {};", self.primary, self.on_primary)
    }
}

/// Document-level values.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub lang: &'static str,
    pub title: String,
    pub body_style: String,
    pub container_width: String,
    /// `?lang=<tag>` when the visitor picked the language, else empty.
    pub lang_query: String,
    pub year: i32,
}

impl PageMeta {
    pub fn new(language: Language, requested: Option<&str>, title: &str, theme: &ThemeConfig) -> Self {
        let base = BaseTypography::resolve(theme);
        Self {
            lang: language.html_lang(),
            title: title.to_string(),
            body_style: base.css(),
            container_width: base.container_width,
            lang_query: match requested {
                Some(_) => format!("?lang={}", language.key()),
                None => String::new(),
            },
            year: chrono::Local::now().year(),
        }
    }

    /// `path` with the language query kept.
    pub fn link(&self, path: &str) -> String {
        format!("{path}{}", self.lang_query)
    }
}

#[derive(Debug, Clone)]
pub struct LinkView {
    pub name: String,
    pub href: String,
}

/// Links with a visible name. A missing href points at the page top.
pub fn links(items: &[Link]) -> Vec<LinkView> {
    items
        .iter()
        .filter_map(|link| {
            Some(LinkView {
                name: visible(link.name.as_deref())?,
                href: resolve_str([link.href.as_deref()], "#"),
            })
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct SocialView {
    pub platform: String,
    pub url: String,
}

pub fn socials(items: &[SocialLink]) -> Vec<SocialView> {
    items
        .iter()
        .filter_map(|link| {
            Some(SocialView {
                platform: visible(link.platform.as_deref())?,
                url: resolve_str([link.url.as_deref()], "#"),
            })
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct StatView {
    pub number: String,
    pub label: Option<String>,
    pub sublabel: Option<String>,
}

/// Stats with a visible number.
pub fn stats(items: &[Stat]) -> Vec<StatView> {
    items
        .iter()
        .filter_map(|stat| {
            Some(StatView {
                number: visible(stat.number.as_deref())?,
                label: visible(stat.label.as_deref()),
                sublabel: visible(stat.sublabel.as_deref()),
            })
        })
        .collect()
}

/// An icon card: symbol, title and description.
#[derive(Debug, Clone)]
pub struct CardView {
    pub icon: &'static str,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl CardView {
    pub fn new<T: IconTable>(icon: Option<&str>, title: Option<&str>, description: Option<&str>) -> Self {
        Self {
            icon: icon_symbol::<T>(icon),
            title: visible(title),
            description: visible(description),
        }
    }
}

/// Cards for items with a title or a description; icons from table `T`.
pub fn cards<T: IconTable>(items: &[IconItem]) -> Vec<CardView> {
    items
        .iter()
        .filter(|item| item.title.should_render() || item.description.should_render())
        .map(|item| {
            CardView::new::<T>(
                item.icon.as_deref(),
                item.title.as_deref(),
                item.description.as_deref(),
            )
        })
        .collect()
}

/// Non-blank strings of a list.
pub fn texts(items: &[String]) -> Vec<String> {
    items.iter().filter(|item| item.should_render()).cloned().collect()
}

/// A banner above a form.
#[derive(Debug, Clone)]
pub struct Alert {
    pub error: bool,
    pub title: Option<String>,
    pub message: String,
}

impl Alert {
    pub fn form_error(err: &FormError, bundle: &Bundle) -> Self {
        Self {
            error: true,
            title: Some(bundle.text(TextKey::FormErrorTitle).to_string()),
            message: err.message(bundle),
        }
    }

    pub fn success(message: &str) -> Self {
        Self {
            error: false,
            title: None,
            message: message.to_string(),
        }
    }
}

/// A form's values and the banner shown above it.
#[derive(Debug, Clone, Default)]
pub struct FormState<F> {
    pub values: F,
    pub alert: Option<Alert>,
}

impl<F: Default> FormState<F> {
    /// Emptied form with a confirmation banner.
    pub fn submitted(message: &str) -> Self {
        Self {
            values: F::default(),
            alert: Some(Alert::success(message)),
        }
    }

    /// The visitor's values kept, with the validation error.
    pub fn rejected(values: F, err: &FormError, bundle: &Bundle) -> Self {
        Self {
            values,
            alert: Some(Alert::form_error(err, bundle)),
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.alert.as_ref().is_some_and(|alert| alert.error)
    }
}

#[derive(Debug, Clone)]
pub struct HeaderView {
    pub style: SectionStyle,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub logo: Option<String>,
    pub logo_class: &'static str,
    pub navigation: Vec<LinkView>,
    pub social: Vec<SocialView>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub home: String,
    pub contact_label: &'static str,
}

impl HeaderView {
    pub fn build(source: SectionSource<'_>, meta: &PageMeta, bundle: &Bundle) -> Self {
        let content: HeaderContent = source.get(Section::Header);
        let logo = ImageOutcome::immediate(&ImageRequest::logo(content.logo.as_deref()));

        Self {
            style: SectionStyle::landing(Section::Header, &content.style, source.theme()),
            title: visible(content.title.as_deref()),
            subtitle: visible(content.subtitle.as_deref()),
            logo: logo.url,
            logo_class: content.logo_class(),
            navigation: links(&content.navigation),
            social: socials(&content.social_links),
            phone: visible(content.contact_info.phone.as_deref()),
            email: visible(content.contact_info.email.as_deref()),
            home: meta.link("/"),
            contact_label: bundle.text(TextKey::ContactUs),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FooterView {
    pub style: SectionStyle,
    pub company_name: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub business_hours: Option<String>,
    pub quick_links: Vec<LinkView>,
    pub resources: Vec<LinkView>,
    pub legal: Vec<LinkView>,
    pub social: Vec<SocialView>,
    pub quick_links_title: &'static str,
    pub resources_title: &'static str,
    pub connect_title: &'static str,
    pub copyright: String,
}

impl FooterView {
    pub fn build(source: SectionSource<'_>, meta: &PageMeta, bundle: &Bundle) -> Self {
        let content: FooterContent = source.get(Section::Footer);
        let company_name = visible(content.company_name.as_deref());
        let copyright = match &company_name {
            Some(name) => format!("© {} {}. {}", meta.year, name, bundle.text(TextKey::Copyright)),
            None => format!("© {} {}", meta.year, bundle.text(TextKey::Copyright)),
        };

        Self {
            style: SectionStyle::landing(Section::Footer, &content.style, source.theme()),
            company_name,
            description: visible(content.description.as_deref()),
            phone: visible(content.contact.phone.as_deref()),
            email: visible(content.contact.email.as_deref()),
            address: visible(content.contact.address.as_deref()),
            business_hours: visible(content.contact.business_hours.as_deref()),
            quick_links: links(&content.quick_links),
            resources: links(&content.resources),
            legal: links(&content.legal),
            social: socials(&content.social_links),
            quick_links_title: bundle.text(TextKey::QuickLinksTitle),
            resources_title: bundle.text(TextKey::ResourcesTitle),
            connect_title: bundle.text(TextKey::ConnectTitle),
            copyright,
        }
    }
}
