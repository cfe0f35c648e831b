//! Typed landing page sections.
//!
//! Built from merged section JSON with [`typed`]. Every field is optional and
//! deserialized leniently, so a wrong-typed field is simply absent.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::serde::{lenient, lenient_string, lenient_strings, lenient_vec};
use crate::style::StyleOverrides;

/// Converts merged section JSON into its typed form. Never fails.
pub fn typed<T: DeserializeOwned + Default>(value: &Value) -> T {
    serde_json::from_value(value.clone()).unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    #[serde(alias = "label", deserialize_with = "lenient_string")]
    pub platform: Option<String>,
    #[serde(alias = "href", deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub icon: Option<String>,
}

/// A figure with a caption, such as `500+ / Successful Orders`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    #[serde(deserialize_with = "lenient_string")]
    pub number: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub label: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub sublabel: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconItem {
    #[serde(deserialize_with = "lenient_string")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Benefit {
    #[serde(deserialize_with = "lenient_string")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    #[serde(deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderContent {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub logo: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub logo_size: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub navigation: Vec<Link>,
    #[serde(deserialize_with = "lenient_vec")]
    pub social_links: Vec<SocialLink>,
    #[serde(deserialize_with = "lenient")]
    pub contact_info: ContactInfo,
    #[serde(flatten)]
    pub style: StyleOverrides,
}

impl HeaderContent {
    /// Logo height class for the `logoSize` key.
    pub fn logo_class(&self) -> &'static str {
        match self.logo_size.as_deref() {
            Some("small") => "h-8",
            Some("large") => "h-16",
            _ => "h-12",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroContent {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub cta_text: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub cta_secondary_text: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub background_image: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub overlay_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub overlay_opacity: Option<f64>,
    #[serde(deserialize_with = "lenient_vec")]
    pub benefits: Vec<Benefit>,
    #[serde(deserialize_with = "lenient_vec")]
    pub stats: Vec<Stat>,
    #[serde(deserialize_with = "lenient_vec")]
    pub trust_indicators: Vec<Stat>,
    #[serde(flatten)]
    pub style: StyleOverrides,
}

impl HeroContent {
    /// Overlay opacity clamped to `0.0..=1.0`, 0.5 when unset.
    pub fn overlay_opacity(&self) -> f64 {
        self.overlay_opacity.unwrap_or(0.5).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutContent {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub features: Vec<IconItem>,
    #[serde(flatten)]
    pub style: StyleOverrides,
}

/// One `{value, label}` pair of a problems/solutions call to action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatPair {
    #[serde(deserialize_with = "lenient_string")]
    pub value: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaStatPairs {
    #[serde(deserialize_with = "lenient")]
    pub stat1: StatPair,
    #[serde(deserialize_with = "lenient")]
    pub stat2: StatPair,
    #[serde(deserialize_with = "lenient")]
    pub stat3: StatPair,
}

impl CtaStatPairs {
    pub fn get(&self, index: usize) -> Option<&StatPair> {
        match index {
            0 => Some(&self.stat1),
            1 => Some(&self.stat2),
            2 => Some(&self.stat3),
            _ => None,
        }
    }
}

/// Call-to-action text a problems or solutions section may carry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionCta {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub button_text: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub stats: CtaStatPairs,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemItem {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    /// Only set on solutions.
    #[serde(deserialize_with = "lenient_string")]
    pub benefit: Option<String>,
}

/// Problems and solutions share one shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemsContent {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub items: Vec<ProblemItem>,
    #[serde(deserialize_with = "lenient")]
    pub cta: SectionCta,
    #[serde(flatten)]
    pub style: StyleOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CtaContent {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub button_text: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub stats: Vec<Stat>,
    #[serde(flatten)]
    pub style: StyleOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductItem {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub price: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceItem {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub cta: Option<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductsContent {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub items: Vec<ProductItem>,
    #[serde(deserialize_with = "lenient_vec")]
    pub services: Vec<ServiceItem>,
    #[serde(flatten)]
    pub style: StyleOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Strength {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub highlight: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statement {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    /// `values` on the mission, `goals` on the vision.
    #[serde(alias = "goals", deserialize_with = "lenient_strings")]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DualCta {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub button_text: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub secondary_button_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WhyChooseUsContent {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub strengths: Vec<Strength>,
    #[serde(deserialize_with = "lenient")]
    pub mission: Statement,
    #[serde(deserialize_with = "lenient")]
    pub vision: Statement,
    #[serde(deserialize_with = "lenient")]
    pub cta: DualCta,
    #[serde(flatten)]
    pub style: StyleOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub content: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub rating: Option<u8>,
    #[serde(deserialize_with = "lenient_string")]
    pub image: Option<String>,
}

impl Testimonial {
    /// Star rating from 1 to 5. Missing ratings count as 5.
    pub fn rating(&self) -> u8 {
        self.rating.unwrap_or(5).clamp(1, 5)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestimonialsContent {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub testimonials: Vec<Testimonial>,
    #[serde(deserialize_with = "lenient_strings")]
    pub partners: Vec<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub stats: Vec<Stat>,
    #[serde(flatten)]
    pub style: StyleOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeadMagnetContent {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub guide_title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub guide_subtitle: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub form_title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub form_description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub button_text: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub download_url: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub badge_text: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub guide_features: Vec<IconItem>,
    #[serde(deserialize_with = "lenient_vec")]
    pub trust_indicators: Vec<Stat>,
    #[serde(flatten)]
    pub style: StyleOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterContact {
    #[serde(deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub address: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub business_hours: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterContent {
    #[serde(deserialize_with = "lenient_string")]
    pub company_name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub contact: FooterContact,
    #[serde(deserialize_with = "lenient_vec")]
    pub quick_links: Vec<Link>,
    #[serde(deserialize_with = "lenient_vec")]
    pub resources: Vec<Link>,
    #[serde(deserialize_with = "lenient_vec")]
    pub legal: Vec<Link>,
    #[serde(deserialize_with = "lenient_vec")]
    pub social_links: Vec<SocialLink>,
    #[serde(flatten)]
    pub style: StyleOverrides,
}
