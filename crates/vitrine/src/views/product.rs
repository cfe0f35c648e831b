//! Product pages: the index, one product, and the not-found page.

use vitrine_core::{
    content::{landing::LeadMagnetContent, ProductSection, Section},
    forms::{LeadForm, RfqForm},
    gate::{visible, Renderable},
    i18n::{Bundle, TextKey},
    icons::{icon_symbol, ProductIcon},
    image::ImageRequest,
    product::{LabelValue, ProductPage, ProductRecord},
    resolve::resolve_str,
    style::StyleOverrides,
    theme::ThemeConfig,
};

use super::common::{
    cards, texts, CardView, FooterView, FormState, HeaderView, PageMeta, SectionSource,
    SectionStyle,
};
use crate::images::{ImageClient, ImageSlot};

/// A section title, falling back to the localized default.
fn title(value: Option<&str>, bundle: &Bundle, key: TextKey) -> String {
    resolve_str([value], bundle.text(key))
}

fn rows(items: &[LabelValue]) -> Vec<RowView> {
    items
        .iter()
        .filter_map(|row| {
            Some(RowView {
                label: visible(row.label.as_deref())?,
                value: visible(row.value.as_deref()).unwrap_or_default(),
            })
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct RowView {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct ProductHeroView {
    pub style: SectionStyle,
    pub title: String,
    pub subtitle: Option<String>,
    pub usps: Vec<String>,
    pub image: Option<String>,
    pub gallery: Vec<String>,
    pub export_ready: &'static str,
    pub oem_available: &'static str,
    pub verified: &'static str,
    pub request_quote: &'static str,
    pub get_catalog: &'static str,
}

#[derive(Debug, Clone)]
pub struct HighlightView {
    pub icon: &'static str,
    pub label: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OverviewView {
    pub style: SectionStyle,
    pub title: String,
    pub quick_overview: &'static str,
    pub description: Option<String>,
    pub highlights: Vec<HighlightView>,
}

/// A titled card grid: features or OEM capabilities.
#[derive(Debug, Clone)]
pub struct CardsView {
    pub style: SectionStyle,
    pub title: String,
    pub subtitle: String,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone)]
pub struct SpecsView {
    pub style: SectionStyle,
    pub title: String,
    pub subtitle: String,
    pub item_label: &'static str,
    pub details_label: &'static str,
    pub rows: Vec<RowView>,
    pub customization_title: &'static str,
    pub customization_options: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ApplicationView {
    pub icon: &'static str,
    pub industry: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApplicationsView {
    pub style: SectionStyle,
    pub title: String,
    pub subtitle: String,
    pub applications: Vec<ApplicationView>,
}

#[derive(Debug, Clone)]
pub struct CertificationView {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct QcStepView {
    pub step: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CertificationsView {
    pub style: SectionStyle,
    pub title: String,
    pub subtitle: String,
    pub certifications_title: &'static str,
    pub certifications: Vec<CertificationView>,
    pub qc_title: &'static str,
    pub qc_process: Vec<QcStepView>,
    pub third_party: &'static str,
}

#[derive(Debug, Clone)]
pub struct OemView {
    pub grid: CardsView,
    pub facility: &'static str,
    pub production_base: &'static str,
}

#[derive(Debug, Clone)]
pub struct ShippingView {
    pub icon: &'static str,
    pub method: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PackagingView {
    pub style: SectionStyle,
    pub title: String,
    pub subtitle: String,
    pub details_title: &'static str,
    pub specs: Vec<RowView>,
    pub shipping_title: &'static str,
    pub shipping: Vec<ShippingView>,
    pub incoterms_title: &'static str,
    pub incoterms: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct MetricView {
    pub icon: &'static str,
    pub value: String,
    pub label: Option<String>,
}

#[derive(Debug, Clone)]
pub struct QuoteView {
    pub quote: String,
    pub attribution: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ProductWhyView {
    pub style: SectionStyle,
    pub title: String,
    pub subtitle: String,
    pub metrics: Vec<MetricView>,
    pub strengths: Vec<String>,
    pub factory_image: Option<String>,
    pub testimonial: Option<QuoteView>,
}

#[derive(Debug, Clone)]
pub struct ProductCtaView {
    pub style: SectionStyle,
    pub title: String,
    pub subtitle: Option<String>,
    pub button_text: String,
    pub benefits: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ProductLeadView {
    pub style: SectionStyle,
    pub badge: &'static str,
    pub title: String,
    pub subtitle: String,
    pub benefits: Vec<String>,
    pub button_text: &'static str,
    pub name_label: &'static str,
    pub email_label: &'static str,
    pub company_label: &'static str,
    pub form: FormState<LeadForm>,
    pub action: String,
    pub product: String,
}

/// Localized RFQ form labels.
#[derive(Debug, Clone)]
pub struct RfqLabels {
    pub name: &'static str,
    pub company: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub quantity: &'static str,
    pub requirements: &'static str,
    pub submit: &'static str,
    pub perks: [&'static str; 3],
    pub response: &'static str,
}

impl RfqLabels {
    fn new(bundle: &Bundle) -> Self {
        Self {
            name: bundle.text(TextKey::NameRequired),
            company: bundle.text(TextKey::CompanyRequired),
            email: bundle.text(TextKey::EmailRequired),
            phone: bundle.text(TextKey::WhatsappPhone),
            quantity: bundle.text(TextKey::EstimatedOrderQuantity),
            requirements: bundle.text(TextKey::CustomRequirementsOptional),
            submit: bundle.text(TextKey::SubmitRfq),
            perks: [
                bundle.text(TextKey::FreeSamplesQualified),
                bundle.text(TextKey::CustomQuotation12to24),
                bundle.text(TextKey::DirectSalesEngineer),
            ],
            response: bundle.text(TextKey::ResponseGuaranteed),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RfqView {
    pub title: String,
    pub subtitle: String,
    pub labels: RfqLabels,
    pub form: FormState<RfqForm>,
    pub action: String,
}

#[derive(Debug, Clone)]
pub struct StickyCtaView {
    pub label: &'static str,
    pub button_text: &'static str,
}

/// Which form, if any, was just submitted on this page.
#[derive(Debug, Clone, Default)]
pub struct ProductForms {
    pub rfq: FormState<RfqForm>,
    pub lead: FormState<LeadForm>,
}

/// Everything the product template needs.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub meta: PageMeta,
    pub header: HeaderView,
    pub hero: ProductHeroView,
    pub overview: OverviewView,
    pub features: CardsView,
    pub specs: SpecsView,
    pub applications: ApplicationsView,
    pub certifications: CertificationsView,
    pub oem: OemView,
    pub packaging: PackagingView,
    pub why: ProductWhyView,
    pub lead: ProductLeadView,
    pub rfq: RfqView,
    pub cta: ProductCtaView,
    pub sticky: StickyCtaView,
    pub footer: FooterView,
}

impl ProductView {
    pub async fn build(
        slug: &str,
        record: &ProductRecord,
        source: SectionSource<'_>,
        meta: PageMeta,
        bundle: &Bundle,
        images: &ImageClient,
        forms: ProductForms,
    ) -> Self {
        let theme = source.theme();
        let deadline = images.deadline();
        let page: ProductPage = record.resolve(source.registry);

        let hero_image = images.slot(ImageRequest::product(
            page.hero.primary_image(),
            page.hero.title.as_deref(),
        ));
        let factory_image = images.slot(ImageRequest::new(
            page.why_choose.factory_image.as_deref(),
            "coffee factory",
        ));

        let header = HeaderView::build(source, &meta, bundle);
        let footer = FooterView::build(source, &meta, bundle);
        let style = |section: ProductSection, overrides: &StyleOverrides| {
            SectionStyle::product(section, overrides, theme)
        };

        let hero = &page.hero;
        let product_title = title(hero.title.as_deref(), bundle, TextKey::ProductOverview);
        let gallery = texts(&hero.images);

        let overview = OverviewView {
            style: style(ProductSection::Overview, &page.overview.style),
            title: title(page.overview.title.as_deref(), bundle, TextKey::ProductOverview),
            quick_overview: bundle.text(TextKey::QuickOverview),
            description: visible(page.overview.description.as_deref()),
            highlights: page
                .overview
                .highlights
                .iter()
                .filter_map(|highlight| {
                    Some(HighlightView {
                        icon: icon_symbol::<ProductIcon>(highlight.icon.as_deref()),
                        label: visible(highlight.label.as_deref())?,
                        value: visible(highlight.value.as_deref()),
                    })
                })
                .collect(),
        };

        let features = CardsView {
            style: style(ProductSection::Features, &page.features.style),
            title: title(page.features.title.as_deref(), bundle, TextKey::FeaturesAdvantages),
            subtitle: title(page.features.subtitle.as_deref(), bundle, TextKey::ProductFeaturesSubtitle),
            cards: cards::<ProductIcon>(&page.features.features),
        };

        let specs = SpecsView {
            style: style(ProductSection::Specs, &page.specs.style),
            title: title(page.specs.title.as_deref(), bundle, TextKey::TechnicalSpecs),
            subtitle: title(page.specs.subtitle.as_deref(), bundle, TextKey::TechnicalSpecsSubtitle),
            item_label: bundle.text(TextKey::ItemLabel),
            details_label: bundle.text(TextKey::DetailsLabel),
            rows: rows(&page.specs.specifications),
            customization_title: bundle.text(TextKey::CustomizationOptionsTitle),
            customization_options: texts(&page.specs.customization_options),
        };

        let applications = ApplicationsView {
            style: style(ProductSection::Applications, &page.applications.style),
            title: title(page.applications.title.as_deref(), bundle, TextKey::ApplicationsUseCases),
            subtitle: title(page.applications.subtitle.as_deref(), bundle, TextKey::ApplicationsSubtitle),
            applications: page
                .applications
                .applications
                .iter()
                .filter_map(|application| {
                    Some(ApplicationView {
                        icon: icon_symbol::<ProductIcon>(application.icon.as_deref()),
                        industry: visible(application.industry.as_deref())?,
                        description: visible(application.description.as_deref()),
                        image: visible(application.image.as_deref()),
                    })
                })
                .collect(),
        };

        let certifications = CertificationsView {
            style: style(ProductSection::Certifications, &page.certifications.style),
            title: title(
                page.certifications.title.as_deref(),
                bundle,
                TextKey::CertificationsQualityControl,
            ),
            subtitle: title(page.certifications.subtitle.as_deref(), bundle, TextKey::CertificationsSubtitle),
            certifications_title: bundle.text(TextKey::InternationalCertifications),
            certifications: page
                .certifications
                .certifications
                .iter()
                .filter_map(|cert| {
                    Some(CertificationView {
                        name: visible(cert.name.as_deref())?,
                        description: visible(cert.description.as_deref()),
                    })
                })
                .collect(),
            qc_title: bundle.text(TextKey::QualityControlProcessTitle),
            qc_process: page
                .certifications
                .qc_process
                .iter()
                .enumerate()
                .filter(|(_, step)| step.title.should_render())
                .map(|(i, step)| QcStepView {
                    step: resolve_str([step.step.as_deref()], &(i + 1).to_string()),
                    title: visible(step.title.as_deref()),
                    description: visible(step.description.as_deref()),
                })
                .collect(),
            third_party: bundle.text(TextKey::ThirdPartyInspection),
        };

        let oem = OemView {
            grid: CardsView {
                style: style(ProductSection::Oem, &page.oem.style),
                title: title(page.oem.title.as_deref(), bundle, TextKey::OemOdmCapabilities),
                subtitle: title(page.oem.subtitle.as_deref(), bundle, TextKey::OemCapabilitySubtitle),
                cards: cards::<ProductIcon>(&page.oem.capabilities),
            },
            facility: bundle.text(TextKey::ManufacturingFacility),
            production_base: bundle.text(TextKey::ProfessionalProductionBase),
        };

        let packaging = PackagingView {
            style: style(ProductSection::Packaging, &page.packaging.style),
            title: title(page.packaging.title.as_deref(), bundle, TextKey::PackagingShippingTitle),
            subtitle: title(page.packaging.subtitle.as_deref(), bundle, TextKey::PackagingShippingSubtitle),
            details_title: bundle.text(TextKey::PackagingDetails),
            specs: rows(&page.packaging.packaging_specs),
            shipping_title: bundle.text(TextKey::ShippingMethodsTitle),
            shipping: page
                .packaging
                .shipping_methods
                .iter()
                .filter_map(|method| {
                    Some(ShippingView {
                        icon: icon_symbol::<ProductIcon>(method.icon.as_deref()),
                        method: visible(method.method.as_deref())?,
                        description: visible(method.description.as_deref()),
                    })
                })
                .collect(),
            incoterms_title: bundle.text(TextKey::SupportedIncotermsTitle),
            incoterms: texts(&page.packaging.incoterms),
        };

        let why_choose = &page.why_choose;
        let testimonial = why_choose.testimonial.as_ref().and_then(|t| {
            let attribution = [t.author.as_deref(), t.company.as_deref(), t.country.as_deref()]
                .into_iter()
                .filter_map(visible)
                .collect::<Vec<_>>()
                .join(", ");
            Some(QuoteView {
                quote: visible(t.quote.as_deref())?,
                attribution: visible(Some(attribution.as_str())),
            })
        });

        let cta = ProductCtaView {
            style: style(ProductSection::Cta, &page.cta.style),
            title: title(page.cta.title.as_deref(), bundle, TextKey::RequestQuotation),
            subtitle: visible(page.cta.subtitle.as_deref()),
            button_text: title(page.cta.button_text.as_deref(), bundle, TextKey::ContactUs),
            benefits: texts(&page.cta.benefits),
        };

        let lead_style = style(ProductSection::LeadMagnet, &page.lead_magnet.style);
        let lead = lead_view(&page, source, lead_style, bundle, forms.lead, &meta, slug);

        let rfq = RfqView {
            title: title(page.rfq.title.as_deref(), bundle, TextKey::RequestQuotation),
            subtitle: title(page.rfq.subtitle.as_deref(), bundle, TextKey::RfqDescription),
            labels: RfqLabels::new(bundle),
            form: forms.rfq,
            action: meta.link(&format!("/products/{slug}/rfq")),
        };

        let why = ProductWhyView {
            style: style(ProductSection::WhyChoose, &why_choose.style),
            title: title(why_choose.title.as_deref(), bundle, TextKey::WhyChooseUs),
            subtitle: title(why_choose.subtitle.as_deref(), bundle, TextKey::WhyChooseUsSubtitle),
            metrics: why_choose
                .metrics
                .iter()
                .filter_map(|metric| {
                    Some(MetricView {
                        icon: icon_symbol::<ProductIcon>(metric.icon.as_deref()),
                        value: visible(metric.value.as_deref())?,
                        label: visible(metric.label.as_deref()),
                    })
                })
                .collect(),
            strengths: texts(&why_choose.strengths),
            factory_image: factory_image.url(deadline).await,
            testimonial,
        };

        let hero = ProductHeroView {
            style: style(ProductSection::Hero, &hero.style),
            title: product_title,
            subtitle: visible(hero.subtitle.as_deref()),
            usps: texts(&hero.usps),
            image: hero_image.url(deadline).await,
            gallery,
            export_ready: bundle.text(TextKey::ExportReady),
            oem_available: bundle.text(TextKey::OemAvailable),
            verified: bundle.text(TextKey::VerifiedManufacturer),
            request_quote: bundle.text(TextKey::RequestQuote),
            get_catalog: bundle.text(TextKey::GetFreeCatalog),
        };

        Self {
            meta,
            header,
            hero,
            overview,
            features,
            specs,
            applications,
            certifications,
            oem,
            packaging,
            why,
            lead,
            rfq,
            cta,
            sticky: StickyCtaView {
                label: bundle.text(TextKey::QuickContact),
                button_text: bundle.text(TextKey::InquireNow),
            },
            footer,
        }
    }
}

/// The product page's catalog download block. Its benefits come from the
/// product, then the localized catalog contents. The form heading reuses the
/// landing lead magnet's copy when the product sets none.
fn lead_view(
    page: &ProductPage,
    source: SectionSource<'_>,
    style: SectionStyle,
    bundle: &Bundle,
    form: FormState<LeadForm>,
    meta: &PageMeta,
    slug: &str,
) -> ProductLeadView {
    let content = &page.lead_magnet;
    let landing: LeadMagnetContent = source.get(Section::LeadMagnet);

    let mut benefits = texts(&content.benefits);
    if benefits.is_empty() {
        benefits = [
            TextKey::CompleteProductSpecs,
            TextKey::TechnicalDatasheets,
            TextKey::FactoryCapabilityOverview,
            TextKey::PriceIndicationMoq,
        ]
        .into_iter()
        .map(|key| bundle.text(key).to_string())
        .collect();
    }

    ProductLeadView {
        style,
        badge: bundle.text(TextKey::FreeDownload),
        title: resolve_str(
            [content.title.as_deref(), landing.form_title.as_deref()],
            bundle.text(TextKey::DownloadCatalog),
        ),
        subtitle: title(content.subtitle.as_deref(), bundle, TextKey::LeadMagnetDescription),
        benefits,
        button_text: bundle.text(TextKey::DownloadNow),
        name_label: bundle.text(TextKey::YourName),
        email_label: bundle.text(TextKey::YourEmail),
        company_label: bundle.text(TextKey::YourCompany),
        form,
        action: meta.link("/lead"),
        product: slug.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct ProductCard {
    pub href: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub image: Option<String>,
}

/// The product index.
#[derive(Debug, Clone)]
pub struct ProductIndexView {
    pub meta: PageMeta,
    pub header: HeaderView,
    pub style: SectionStyle,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub view_details: &'static str,
    pub products: Vec<ProductCard>,
    pub footer: FooterView,
}

impl ProductIndexView {
    pub async fn build<'a>(
        products: impl Iterator<Item = (&'a str, &'a ProductRecord)>,
        source: SectionSource<'_>,
        meta: PageMeta,
        bundle: &Bundle,
        images: &ImageClient,
    ) -> Self {
        let theme: &ThemeConfig = source.theme();
        let deadline = images.deadline();

        let pending: Vec<(String, ProductPage, ImageSlot)> = products
            .map(|(slug, record)| {
                let page = record.resolve(source.registry);
                let slot = images.slot(ImageRequest::product(
                    page.hero.primary_image(),
                    page.hero.title.as_deref(),
                ));
                (slug.to_string(), page, slot)
            })
            .collect();

        let mut cards = Vec::with_capacity(pending.len());
        for (slug, page, slot) in pending {
            cards.push(ProductCard {
                href: meta.link(&format!("/products/{slug}")),
                title: resolve_str([page.hero.title.as_deref()], &slug),
                subtitle: visible(page.hero.subtitle.as_deref()),
                image: slot.url(deadline).await,
            });
        }

        Self {
            header: HeaderView::build(source, &meta, bundle),
            footer: FooterView::build(source, &meta, bundle),
            style: SectionStyle::product(ProductSection::Overview, &Default::default(), theme),
            title: bundle.text(TextKey::OurProducts),
            subtitle: bundle.text(TextKey::OurProductsSubtitle),
            view_details: bundle.text(TextKey::ViewDetails),
            products: cards,
            meta,
        }
    }
}

/// Shown for unknown or disabled product slugs.
#[derive(Debug, Clone)]
pub struct NotFoundView {
    pub meta: PageMeta,
    pub header: HeaderView,
    pub message: &'static str,
    pub back: &'static str,
    pub home: String,
    pub footer: FooterView,
}

impl NotFoundView {
    pub fn build(source: SectionSource<'_>, meta: PageMeta, bundle: &Bundle) -> Self {
        Self {
            header: HeaderView::build(source, &meta, bundle),
            footer: FooterView::build(source, &meta, bundle),
            message: bundle.text(TextKey::ProductNotFound),
            back: bundle.text(TextKey::BackToHome),
            home: meta.link("/"),
            meta,
        }
    }
}
