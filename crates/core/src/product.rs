//! Product detail pages.
//!
//! A catalog maps URL slugs to product records. A record holds raw section
//! content, merged against the product section defaults when the page is
//! resolved.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::content::landing::{typed, IconItem};
use crate::content::{DefaultsRegistry, ProductSection};
use crate::error::{ConfigError, Result};
use crate::serde::{lenient, lenient_string, lenient_strings, lenient_vec};
use crate::style::StyleOverrides;

/// One product as authored: its raw sections keyed by section key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub enabled: Option<bool>,
    #[serde(flatten)]
    pub sections: Map<String, Value>,
}

impl ProductRecord {
    /// Disabled products are hidden from the site. Missing means enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// Raw content of one section, null treated as absent.
    ///
    /// `features` may be authored as a bare list; it is wrapped into the
    /// section object shape.
    pub fn section(&self, section: ProductSection) -> Option<Value> {
        let value = self.sections.get(section.key()).filter(|v| !v.is_null())?;
        match (section, value) {
            (ProductSection::Features, Value::Array(items)) => Some(json!({ "features": items })),
            _ => Some(value.clone()),
        }
    }

    /// Merges every section against the defaults and types the result.
    pub fn resolve(&self, defaults: &DefaultsRegistry) -> ProductPage {
        let merged = |section: ProductSection| {
            defaults.resolve_product(section, self.section(section).as_ref())
        };

        ProductPage {
            hero: typed(&merged(ProductSection::Hero)),
            overview: typed(&merged(ProductSection::Overview)),
            features: typed(&merged(ProductSection::Features)),
            specs: typed(&merged(ProductSection::Specs)),
            applications: typed(&merged(ProductSection::Applications)),
            certifications: typed(&merged(ProductSection::Certifications)),
            oem: typed(&merged(ProductSection::Oem)),
            packaging: typed(&merged(ProductSection::Packaging)),
            why_choose: typed(&merged(ProductSection::WhyChoose)),
            cta: typed(&merged(ProductSection::Cta)),
            lead_magnet: typed(&merged(ProductSection::LeadMagnet)),
            rfq: self.sections.get("rfq").map(typed::<RfqContent>).unwrap_or_default(),
        }
    }
}

/// All product records, keyed by slug.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCatalog {
    products: BTreeMap<String, ProductRecord>,
}

impl ProductCatalog {
    /// Parses `{ "<slug>": { ...sections } }`.
    ///
    /// The document must be an object of objects. Sections inside a record
    /// are not validated here; they degrade to defaults when resolved.
    pub fn from_json(json: &str) -> Result<Self> {
        let products: BTreeMap<String, ProductRecord> =
            serde_json::from_str(json).map_err(|e| ConfigError::InvalidProducts(e.to_string()))?;
        Ok(Self { products })
    }

    /// An enabled product by slug.
    pub fn get(&self, slug: &str) -> Option<&ProductRecord> {
        self.products.get(slug).filter(|record| record.is_enabled())
    }

    /// Enabled products in slug order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProductRecord)> {
        self.products
            .iter()
            .filter(|(_, record)| record.is_enabled())
            .map(|(slug, record)| (slug.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A fully resolved product page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPage {
    pub hero: ProductHero,
    pub overview: ProductOverview,
    pub features: ProductFeatures,
    pub specs: ProductSpecs,
    pub applications: ProductApplications,
    pub certifications: ProductCertifications,
    pub oem: ProductOem,
    pub packaging: ProductPackaging,
    pub why_choose: ProductWhyChoose,
    pub cta: ProductCta,
    pub lead_magnet: ProductLeadMagnet,
    pub rfq: RfqContent,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelValue {
    #[serde(deserialize_with = "lenient_string")]
    pub label: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Highlight {
    #[serde(deserialize_with = "lenient_string")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub label: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductHero {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub usps: Vec<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub images: Vec<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub main_image: Option<String>,
    #[serde(flatten)]
    pub style: StyleOverrides,
}

impl ProductHero {
    /// The main image, or the first gallery image.
    pub fn primary_image(&self) -> Option<&str> {
        self.main_image
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.images.first().map(String::as_str))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductOverview {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub highlights: Vec<Highlight>,
    #[serde(flatten)]
    pub style: StyleOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductFeatures {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub features: Vec<IconItem>,
    #[serde(flatten)]
    pub style: StyleOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductSpecs {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub specifications: Vec<LabelValue>,
    #[serde(deserialize_with = "lenient_strings")]
    pub customization_options: Vec<String>,
    #[serde(flatten)]
    pub style: StyleOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Application {
    #[serde(deserialize_with = "lenient_string")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub industry: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductApplications {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub applications: Vec<Application>,
    #[serde(flatten)]
    pub style: StyleOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QcStep {
    #[serde(deserialize_with = "lenient_string")]
    pub step: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductCertifications {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub certifications: Vec<Certification>,
    #[serde(deserialize_with = "lenient_vec")]
    pub qc_process: Vec<QcStep>,
    #[serde(flatten)]
    pub style: StyleOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductOem {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub capabilities: Vec<IconItem>,
    #[serde(flatten)]
    pub style: StyleOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingMethod {
    #[serde(deserialize_with = "lenient_string")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub method: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductPackaging {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub packaging_specs: Vec<LabelValue>,
    #[serde(deserialize_with = "lenient_vec")]
    pub shipping_methods: Vec<ShippingMethod>,
    #[serde(deserialize_with = "lenient_strings")]
    pub incoterms: Vec<String>,
    #[serde(flatten)]
    pub style: StyleOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metric {
    #[serde(deserialize_with = "lenient_string")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub value: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryTestimonial {
    #[serde(deserialize_with = "lenient_string")]
    pub quote: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub author: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductWhyChoose {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub metrics: Vec<Metric>,
    #[serde(deserialize_with = "lenient_strings")]
    pub strengths: Vec<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub factory_image: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub testimonial: Option<FactoryTestimonial>,
    #[serde(flatten)]
    pub style: StyleOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductCta {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub button_text: Option<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub benefits: Vec<String>,
    #[serde(flatten)]
    pub style: StyleOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductLeadMagnet {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub benefits: Vec<String>,
    #[serde(flatten)]
    pub style: StyleOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RfqContent {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub subtitle: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    const CATALOG: &str = r#"{
        "robusta-beans": {
            "hero": { "title": "Robusta Beans", "usps": "not a list" },
            "features": [{ "icon": "Leaf", "title": "Organic", "description": "Grown without pesticides" }],
            "packaging": { "incoterms": ["FOB", "CIF"] },
            "whyChoose": null
        },
        "hidden": { "enabled": false, "hero": { "title": "Secret" } }
    }"#;

    fn registry() -> DefaultsRegistry {
        DefaultsRegistry::load(Language::English).unwrap()
    }

    #[test]
    fn test_catalog_lookup_hides_disabled() {
        let catalog = ProductCatalog::from_json(CATALOG).unwrap();
        assert!(catalog.get("robusta-beans").is_some());
        assert!(catalog.get("hidden").is_none());
        assert!(catalog.get("nope").is_none());
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.iter().map(|(slug, _)| slug).collect::<Vec<_>>(), vec!["robusta-beans"]);
    }

    #[test]
    fn test_catalog_invalid_json() {
        let err = ProductCatalog::from_json(r#"["robusta"]"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidProducts(_)));
    }

    #[test]
    fn test_bare_features_list_is_wrapped() {
        let catalog = ProductCatalog::from_json(CATALOG).unwrap();
        let record = catalog.get("robusta-beans").unwrap();
        let page = record.resolve(&registry());
        assert_eq!(page.features.features.len(), 1);
        assert_eq!(page.features.features[0].title.as_deref(), Some("Organic"));
    }

    #[test]
    fn test_sections_merge_against_defaults() {
        let catalog = ProductCatalog::from_json(CATALOG).unwrap();
        let page = catalog.get("robusta-beans").unwrap().resolve(&registry());

        assert_eq!(page.hero.title.as_deref(), Some("Robusta Beans"));
        // Invalid list falls back to the default usps.
        assert_eq!(page.hero.usps.len(), 3);
        assert_eq!(page.packaging.incoterms, vec!["FOB", "CIF"]);
        assert_eq!(page.packaging.packaging_specs.len(), 7);
        // Null section counts as absent.
        assert_eq!(page.why_choose.metrics.len(), 6);
        assert_eq!(page.cta.button_text.as_deref(), Some("Contact Supplier"));
    }

    #[test]
    fn test_primary_image() {
        let hero = ProductHero {
            images: vec!["a.jpg".to_string(), "b.jpg".to_string()],
            ..Default::default()
        };
        assert_eq!(hero.primary_image(), Some("a.jpg"));

        let hero = ProductHero {
            main_image: Some("main.jpg".to_string()),
            ..hero
        };
        assert_eq!(hero.primary_image(), Some("main.jpg"));
        assert_eq!(ProductHero::default().primary_image(), None);
    }
}
