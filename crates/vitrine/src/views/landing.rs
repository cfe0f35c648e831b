//! The landing page.

use vitrine_core::{
    content::{
        landing::{
            AboutContent, CtaContent, HeroContent, ItemsContent, LeadMagnetContent,
            ProductsContent, Statement, TestimonialsContent, WhyChooseUsContent,
        },
        Section,
    },
    forms::LeadForm,
    gate::{visible, Renderable},
    i18n::{Bundle, TextKey},
    icons::{icon_symbol, LeadMagnetIcon, ProblemIcon, ServiceIcon, StrengthIcon},
    image::{ImageRequest, DEFAULT_QUERY},
    resolve::resolve_str,
    style::TypeClasses,
};

use super::common::{
    cards, stats, texts, CardView, FooterView, FormState, HeaderView, PageMeta, SectionSource,
    SectionStyle, StatView,
};
use crate::images::{ImageClient, ImageSlot};

#[derive(Debug, Clone)]
pub struct BenefitView {
    pub icon: String,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct HeroView {
    pub style: SectionStyle,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub cta_text: String,
    pub cta_secondary_text: Option<String>,
    pub background: Option<String>,
    pub overlay_style: String,
    pub benefits: Vec<BenefitView>,
    pub benefits_class: String,
    pub stats: Vec<StatView>,
    pub trust_indicators: Vec<StatView>,
}

impl HeroView {
    fn build(
        content: HeroContent,
        style: SectionStyle,
        benefits_class: String,
        background: Option<String>,
        bundle: &Bundle,
    ) -> Self {
        let overlay_color = resolve_str([content.overlay_color.as_deref()], "#000000");
        Self {
            title: visible(content.title.as_deref()),
            subtitle: visible(content.subtitle.as_deref()),
            description: visible(content.description.as_deref()),
            cta_text: resolve_str([content.cta_text.as_deref()], bundle.text(TextKey::LearnMore)),
            cta_secondary_text: visible(content.cta_secondary_text.as_deref()),
            overlay_style: format!(
                "background-color: {}; opacity: {};",
                overlay_color,
                content.overlay_opacity()
            ),
            benefits: content
                .benefits
                .iter()
                .filter_map(|benefit| {
                    Some(BenefitView {
                        text: visible(benefit.text.as_deref())?,
                        icon: benefit.icon.clone().unwrap_or_default(),
                    })
                })
                .collect(),
            benefits_class,
            stats: stats(&content.stats),
            trust_indicators: stats(&content.trust_indicators),
            background,
            style,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AboutView {
    pub style: SectionStyle,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub features: Vec<CardView>,
}

#[derive(Debug, Clone)]
pub struct ItemView {
    pub icon: &'static str,
    pub title: Option<String>,
    pub description: Option<String>,
    pub benefit: Option<String>,
}

/// Problems or solutions.
#[derive(Debug, Clone)]
pub struct ItemsView {
    pub style: SectionStyle,
    pub title: Option<String>,
    pub description: Option<String>,
    pub items: Vec<ItemView>,
}

impl ItemsView {
    fn build(section: Section, content: &ItemsContent, source: SectionSource<'_>) -> Self {
        Self {
            style: SectionStyle::landing(section, &content.style, source.theme()),
            title: visible(content.title.as_deref()),
            description: visible(content.description.as_deref()),
            items: content
                .items
                .iter()
                .filter(|item| item.title.should_render() || item.description.should_render())
                .map(|item| ItemView {
                    icon: icon_symbol::<ProblemIcon>(item.icon.as_deref()),
                    title: visible(item.title.as_deref()),
                    description: visible(item.description.as_deref()),
                    benefit: visible(item.benefit.as_deref()),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatPairView {
    pub value: String,
    pub label: Option<String>,
}

/// The call to action closing the problems and solutions block.
#[derive(Debug, Clone)]
pub struct SectionCtaView {
    pub title: String,
    pub description: Option<String>,
    pub button_text: String,
    pub stats: Vec<StatPairView>,
}

impl SectionCtaView {
    /// Text comes from the problems section, then solutions, then the main
    /// call to action. Each of the three stat positions resolves on its own.
    fn build(problems: &ItemsContent, solutions: &ItemsContent, cta: &CtaContent, bundle: &Bundle) -> Option<Self> {
        let (p, s) = (&problems.cta, &solutions.cta);
        let title = visible(Some(
            resolve_str(
                [p.title.as_deref(), s.title.as_deref()],
                cta.title.as_deref().unwrap_or_default(),
            )
            .as_str(),
        ))?;

        let stats = (0..3)
            .filter_map(|i| {
                let fallback = cta.stats.get(i);
                let (ps, ss) = (p.stats.get(i), s.stats.get(i));
                let value = resolve_str(
                    [
                        ps.and_then(|pair| pair.value.as_deref()),
                        ss.and_then(|pair| pair.value.as_deref()),
                    ],
                    fallback.and_then(|stat| stat.number.as_deref()).unwrap_or_default(),
                );
                let label = resolve_str(
                    [
                        ps.and_then(|pair| pair.label.as_deref()),
                        ss.and_then(|pair| pair.label.as_deref()),
                    ],
                    fallback.and_then(|stat| stat.label.as_deref()).unwrap_or_default(),
                );
                Some(StatPairView {
                    value: visible(Some(value.as_str()))?,
                    label: visible(Some(label.as_str())),
                })
            })
            .collect();

        Some(Self {
            title,
            description: visible(Some(
                resolve_str(
                    [p.description.as_deref(), s.description.as_deref()],
                    cta.description.as_deref().unwrap_or_default(),
                )
                .as_str(),
            )),
            button_text: resolve_str(
                [p.button_text.as_deref(), s.button_text.as_deref(), cta.button_text.as_deref()],
                bundle.text(TextKey::FreeConsultation),
            ),
            stats,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CtaView {
    pub style: SectionStyle,
    pub title: Option<String>,
    pub description: Option<String>,
    pub button_text: String,
    pub stats_title: &'static str,
    pub stats: Vec<StatView>,
}

#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub features: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ServiceView {
    pub icon: &'static str,
    pub name: Option<String>,
    pub description: Option<String>,
    pub features: Vec<String>,
    pub cta: String,
}

#[derive(Debug, Clone)]
pub struct ProductsView {
    pub style: SectionStyle,
    pub title: Option<String>,
    pub description: Option<String>,
    pub items: Vec<ProductCardView>,
    pub services: Vec<ServiceView>,
}

#[derive(Debug, Clone)]
pub struct StrengthView {
    pub icon: &'static str,
    pub title: Option<String>,
    pub description: Option<String>,
    pub highlight: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatementView {
    pub title: String,
    pub description: Option<String>,
    pub values: Vec<String>,
}

impl StatementView {
    fn build(statement: &Statement) -> Option<Self> {
        Some(Self {
            title: visible(statement.title.as_deref())?,
            description: visible(statement.description.as_deref()),
            values: texts(&statement.values),
        })
    }
}

#[derive(Debug, Clone)]
pub struct DualCtaView {
    pub title: String,
    pub description: Option<String>,
    pub button_text: String,
    pub secondary_button_text: Option<String>,
}

#[derive(Debug, Clone)]
pub struct WhyView {
    pub style: SectionStyle,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub strengths: Vec<StrengthView>,
    pub mission: Option<StatementView>,
    pub vision: Option<StatementView>,
    pub cta: Option<DualCtaView>,
}

#[derive(Debug, Clone)]
pub struct TestimonialView {
    pub name: String,
    pub role: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub stars: String,
    pub rating: u8,
}

#[derive(Debug, Clone)]
pub struct TestimonialsView {
    pub style: SectionStyle,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub testimonials: Vec<TestimonialView>,
    pub partners: Vec<String>,
    pub stats: Vec<StatView>,
}

/// Localized lead form labels.
#[derive(Debug, Clone)]
pub struct LeadLabels {
    pub name: &'static str,
    pub email: &'static str,
    pub company: &'static str,
    pub secure: &'static str,
    pub no_spam: &'static str,
    pub instant: &'static str,
    pub privacy: &'static str,
}

impl LeadLabels {
    fn new(bundle: &Bundle) -> Self {
        Self {
            name: bundle.text(TextKey::LeadNameLabel),
            email: bundle.text(TextKey::LeadEmailLabel),
            company: bundle.text(TextKey::LeadCompanyLabel),
            secure: bundle.text(TextKey::SecureText),
            no_spam: bundle.text(TextKey::NoSpamText),
            instant: bundle.text(TextKey::InstantText),
            privacy: bundle.text(TextKey::PrivacyText),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LeadMagnetView {
    pub style: SectionStyle,
    pub title: Option<String>,
    pub description: Option<String>,
    pub guide_title: Option<String>,
    pub guide_subtitle: Option<String>,
    pub form_title: Option<String>,
    pub form_description: Option<String>,
    pub button_text: String,
    pub badge_text: Option<String>,
    pub download_url: Option<String>,
    pub features: Vec<CardView>,
    pub trust_indicators: Vec<StatView>,
    pub labels: LeadLabels,
    pub form: FormState<LeadForm>,
    pub action: String,
}

/// Everything the landing template needs.
#[derive(Debug, Clone)]
pub struct LandingView {
    pub meta: PageMeta,
    pub header: HeaderView,
    pub hero: HeroView,
    pub about: AboutView,
    pub problems: ItemsView,
    pub solutions: ItemsView,
    pub section_cta: Option<SectionCtaView>,
    pub cta: CtaView,
    pub products: ProductsView,
    pub why: WhyView,
    pub testimonials: TestimonialsView,
    pub lead: LeadMagnetView,
    pub footer: FooterView,
}

impl LandingView {
    pub async fn build(
        source: SectionSource<'_>,
        meta: PageMeta,
        bundle: &Bundle,
        images: &ImageClient,
        form: FormState<LeadForm>,
    ) -> Self {
        let theme = source.theme();
        let deadline = images.deadline();

        let hero: HeroContent = source.get(Section::Hero);
        let about: AboutContent = source.get(Section::About);
        let products: ProductsContent = source.get(Section::Products);

        // Start every fetch before resolving the rest of the page.
        let hero_image = images.slot(ImageRequest::hero(
            hero.background_image.as_deref().or(hero.image.as_deref()),
            None,
        ));
        let about_image = images.slot(ImageRequest::new(about.image.as_deref(), DEFAULT_QUERY));
        let product_images: Vec<ImageSlot> = products
            .items
            .iter()
            .map(|item| images.slot(ImageRequest::product(item.image.as_deref(), item.name.as_deref())))
            .collect();

        let header = HeaderView::build(source, &meta, bundle);
        let footer = FooterView::build(source, &meta, bundle);

        let problems_content: ItemsContent = source.get(Section::Problems);
        let solutions_content: ItemsContent = source.get(Section::Solutions);
        let cta_content: CtaContent = source.get(Section::Cta);
        let why: WhyChooseUsContent = source.get(Section::WhyChooseUs);
        let testimonials: TestimonialsContent = source.get(Section::Testimonials);
        let lead: LeadMagnetContent = source.get(Section::LeadMagnet);

        let hero_style = SectionStyle::hero(&hero.style, theme);
        let hero_benefits = TypeClasses::hero_benefits(&hero.style, theme);
        let about_style = SectionStyle::landing(Section::About, &about.style, theme);
        let products_style = SectionStyle::landing(Section::Products, &products.style, theme);

        let section_cta =
            SectionCtaView::build(&problems_content, &solutions_content, &cta_content, bundle);
        let problems = ItemsView::build(Section::Problems, &problems_content, source);
        let solutions = ItemsView::build(Section::Solutions, &solutions_content, source);

        let cta = CtaView {
            style: SectionStyle::landing(Section::Cta, &cta_content.style, theme),
            title: visible(cta_content.title.as_deref()),
            description: visible(cta_content.description.as_deref()),
            button_text: resolve_str(
                [cta_content.button_text.as_deref()],
                bundle.text(TextKey::ContactNow),
            ),
            stats_title: bundle.text(TextKey::NumbersSpeak),
            stats: stats(&cta_content.stats),
        };

        let services = products
            .services
            .iter()
            .filter(|service| service.name.should_render())
            .map(|service| ServiceView {
                icon: icon_symbol::<ServiceIcon>(service.icon.as_deref()),
                name: visible(service.name.as_deref()),
                description: visible(service.description.as_deref()),
                features: texts(&service.features),
                cta: resolve_str([service.cta.as_deref()], bundle.text(TextKey::LearnMore)),
            })
            .collect();

        let why = WhyView {
            style: SectionStyle::landing(Section::WhyChooseUs, &why.style, theme),
            title: visible(why.title.as_deref()),
            subtitle: visible(why.subtitle.as_deref()),
            strengths: why
                .strengths
                .iter()
                .filter(|strength| strength.title.should_render())
                .map(|strength| StrengthView {
                    icon: icon_symbol::<StrengthIcon>(strength.icon.as_deref()),
                    title: visible(strength.title.as_deref()),
                    description: visible(strength.description.as_deref()),
                    highlight: visible(strength.highlight.as_deref()),
                })
                .collect(),
            mission: StatementView::build(&why.mission),
            vision: StatementView::build(&why.vision),
            cta: visible(why.cta.title.as_deref()).map(|title| DualCtaView {
                title,
                description: visible(why.cta.description.as_deref()),
                button_text: resolve_str(
                    [why.cta.button_text.as_deref()],
                    bundle.text(TextKey::ContactUs),
                ),
                secondary_button_text: visible(why.cta.secondary_button_text.as_deref()),
            }),
        };

        let testimonials = TestimonialsView {
            style: SectionStyle::landing(Section::Testimonials, &testimonials.style, theme),
            title: visible(testimonials.title.as_deref()),
            subtitle: visible(testimonials.subtitle.as_deref()),
            testimonials: testimonials
                .testimonials
                .iter()
                .filter_map(|t| {
                    let rating = t.rating();
                    let role = [t.title.as_deref(), t.company.as_deref()]
                        .into_iter()
                        .filter_map(visible)
                        .collect::<Vec<_>>()
                        .join(", ");
                    Some(TestimonialView {
                        name: visible(t.name.as_deref())?,
                        role: visible(Some(role.as_str())),
                        content: visible(t.content.as_deref()),
                        image: visible(t.image.as_deref()),
                        stars: format!(
                            "{}{}",
                            "★".repeat(usize::from(rating)),
                            "☆".repeat(usize::from(5 - rating))
                        ),
                        rating,
                    })
                })
                .collect(),
            partners: texts(&testimonials.partners),
            stats: stats(&testimonials.stats),
        };

        let lead = LeadMagnetView {
            style: SectionStyle::landing(Section::LeadMagnet, &lead.style, theme),
            title: visible(lead.title.as_deref()),
            description: visible(lead.description.as_deref()),
            guide_title: visible(lead.guide_title.as_deref()),
            guide_subtitle: visible(lead.guide_subtitle.as_deref()),
            form_title: visible(lead.form_title.as_deref()),
            form_description: visible(lead.form_description.as_deref()),
            button_text: resolve_str([lead.button_text.as_deref()], bundle.text(TextKey::DownloadNow)),
            badge_text: visible(lead.badge_text.as_deref()),
            download_url: visible(lead.download_url.as_deref()),
            features: cards::<LeadMagnetIcon>(&lead.guide_features),
            trust_indicators: stats(&lead.trust_indicators),
            labels: LeadLabels::new(bundle),
            form,
            action: meta.link("/lead"),
        };

        // Images last: whatever is not back by the deadline falls back.
        let mut items = Vec::with_capacity(products.items.len());
        for (item, slot) in products.items.iter().zip(product_images) {
            if !item.name.should_render() {
                continue;
            }
            items.push(ProductCardView {
                name: visible(item.name.as_deref()),
                description: visible(item.description.as_deref()),
                price: visible(item.price.as_deref()),
                category: visible(item.category.as_deref()),
                image: slot.url(deadline).await,
                features: texts(&item.features),
            });
        }

        Self {
            hero: HeroView::build(hero, hero_style, hero_benefits, hero_image.url(deadline).await, bundle),
            about: AboutView {
                style: about_style,
                title: visible(about.title.as_deref()),
                description: visible(about.description.as_deref()),
                image: about_image.url(deadline).await,
                features: cards::<StrengthIcon>(&about.features),
            },
            products: ProductsView {
                style: products_style,
                title: visible(products.title.as_deref()),
                description: visible(products.description.as_deref()),
                items,
                services,
            },
            meta,
            header,
            problems,
            solutions,
            section_cta,
            cta,
            why,
            testimonials,
            lead,
            footer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vitrine_core::{content::landing::typed, i18n::Language, style::StyleOverrides, theme::ThemeConfig};

    #[test]
    fn test_section_cta_positions_resolve_independently() {
        let problems: ItemsContent = typed(&json!({
            "cta": { "title": "Stop losing shipments", "stats": { "stat1": { "value": "98%" } } }
        }));
        let solutions: ItemsContent = typed(&json!({
            "cta": { "stats": { "stat2": { "value": "24h", "label": "Response" } } }
        }));
        let cta: CtaContent = typed(&json!({
            "title": "Talk to us",
            "description": "We reply fast",
            "stats": [
                { "number": "1", "label": "one" },
                { "number": "2", "label": "two" },
                { "number": "3", "label": "three" }
            ]
        }));
        let bundle = Language::English.bundle();

        let view = SectionCtaView::build(&problems, &solutions, &cta, &bundle).unwrap();
        assert_eq!(view.title, "Stop losing shipments");
        assert_eq!(view.description.as_deref(), Some("We reply fast"));
        assert_eq!(view.button_text, "Free Consultation");

        let values: Vec<_> = view.stats.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, ["98%", "24h", "3"]);
        assert_eq!(view.stats[0].label.as_deref(), Some("one"));
        assert_eq!(view.stats[1].label.as_deref(), Some("Response"));
    }

    #[test]
    fn test_section_cta_needs_a_title() {
        let empty = ItemsContent::default();
        let bundle = Language::English.bundle();
        assert!(SectionCtaView::build(&empty, &empty, &CtaContent::default(), &bundle).is_none());
    }

    #[test]
    fn test_hero_keeps_string_benefits() {
        let hero: HeroContent = typed(&json!({
            "benefits": [{ "icon": "", "text": "Organic" }, { "icon": "✅", "text": " " }]
        }));
        let bundle = Language::English.bundle();
        let style = SectionStyle::hero(&StyleOverrides::default(), &ThemeConfig::default());
        let view = HeroView::build(hero, style, "text-base".to_string(), None, &bundle);
        assert_eq!(view.benefits.len(), 1);
        assert_eq!(view.benefits[0].text, "Organic");
        assert_eq!(view.benefits_class, "text-base");
    }

    #[test]
    fn test_statement_gated_on_title() {
        let statement: Statement = typed(&json!({ "title": " ", "values": ["Trust"] }));
        assert!(StatementView::build(&statement).is_none());

        let statement: Statement = typed(&json!({ "title": "Mission", "values": ["Trust", ""] }));
        assert_eq!(StatementView::build(&statement).unwrap().values, ["Trust"]);
    }
}
