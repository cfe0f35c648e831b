//! Section content: keys, array schemas, merging and the defaults registry.

mod defaults;
pub mod landing;
mod merge;

pub use defaults::DefaultsRegistry;
pub use merge::{cascade, merge_section, ArrayField, Coercion, SectionSchema};

use merge::Coercion::{Benefit, Stat, Testimonial};

key_enum! {
    /// A landing page section, selected by its content key.
    pub enum Section {
        Header => "header",
        Hero => "hero",
        About => "about",
        Problems => "problems",
        Solutions => "solutions",
        Cta => "cta",
        Products => "products",
        WhyChooseUs => "whyChooseUs",
        Testimonials => "testimonials",
        LeadMagnet => "leadMagnet",
        Footer => "footer",
    }
}

impl Section {
    /// The array fields of this section.
    pub fn schema(self) -> SectionSchema {
        const HEADER: &[ArrayField] = &[
            ArrayField::plain("navigation"),
            ArrayField::plain("socialLinks"),
        ];
        const HERO: &[ArrayField] = &[
            ArrayField::coerced("benefits", Benefit),
            ArrayField::coerced("stats", Stat),
            ArrayField::coerced("trustIndicators", Stat),
        ];
        const ABOUT: &[ArrayField] = &[ArrayField::plain("features")];
        const ITEMS: &[ArrayField] = &[ArrayField::plain("items")];
        const CTA: &[ArrayField] = &[ArrayField::coerced("stats", Stat)];
        const PRODUCTS: &[ArrayField] = &[
            ArrayField::plain("items"),
            ArrayField::plain("services"),
        ];
        const WHY_CHOOSE_US: &[ArrayField] = &[ArrayField::plain("strengths")];
        const TESTIMONIALS: &[ArrayField] = &[
            ArrayField::coerced("testimonials", Testimonial),
            ArrayField::plain("partners"),
            ArrayField::coerced("stats", Stat),
        ];
        const LEAD_MAGNET: &[ArrayField] = &[
            ArrayField::plain("guideFeatures"),
            ArrayField::coerced("trustIndicators", Stat),
        ];
        const FOOTER: &[ArrayField] = &[
            ArrayField::plain("quickLinks"),
            ArrayField::plain("resources"),
            ArrayField::plain("legal"),
            ArrayField::plain("socialLinks"),
        ];

        SectionSchema::new(match self {
            Section::Header => HEADER,
            Section::Hero => HERO,
            Section::About => ABOUT,
            Section::Problems | Section::Solutions => ITEMS,
            Section::Cta => CTA,
            Section::Products => PRODUCTS,
            Section::WhyChooseUs => WHY_CHOOSE_US,
            Section::Testimonials => TESTIMONIALS,
            Section::LeadMagnet => LEAD_MAGNET,
            Section::Footer => FOOTER,
        })
    }
}

key_enum! {
    /// A section of a product detail page, selected by its key in a product record.
    pub enum ProductSection {
        Hero => "hero",
        Overview => "overview",
        Features => "features",
        Specs => "specs",
        Applications => "applications",
        Certifications => "certifications",
        Oem => "oem",
        Packaging => "packaging",
        WhyChoose => "whyChoose",
        Cta => "cta",
        LeadMagnet => "leadMagnet",
    }
}

impl ProductSection {
    pub fn schema(self) -> SectionSchema {
        const HERO: &[ArrayField] = &[ArrayField::plain("usps"), ArrayField::plain("images")];
        const OVERVIEW: &[ArrayField] = &[ArrayField::plain("highlights")];
        const FEATURES: &[ArrayField] = &[ArrayField::plain("features")];
        const SPECS: &[ArrayField] = &[
            ArrayField::plain("specifications"),
            ArrayField::plain("customizationOptions"),
        ];
        const APPLICATIONS: &[ArrayField] = &[ArrayField::plain("applications")];
        const CERTIFICATIONS: &[ArrayField] = &[
            ArrayField::plain("certifications"),
            ArrayField::plain("qcProcess"),
        ];
        const OEM: &[ArrayField] = &[ArrayField::plain("capabilities")];
        const PACKAGING: &[ArrayField] = &[
            ArrayField::plain("packagingSpecs"),
            ArrayField::plain("shippingMethods"),
            ArrayField::plain("incoterms"),
        ];
        const WHY_CHOOSE: &[ArrayField] = &[
            ArrayField::plain("metrics"),
            ArrayField::plain("strengths"),
        ];
        const BENEFITS: &[ArrayField] = &[ArrayField::plain("benefits")];

        SectionSchema::new(match self {
            ProductSection::Hero => HERO,
            ProductSection::Overview => OVERVIEW,
            ProductSection::Features => FEATURES,
            ProductSection::Specs => SPECS,
            ProductSection::Applications => APPLICATIONS,
            ProductSection::Certifications => CERTIFICATIONS,
            ProductSection::Oem => OEM,
            ProductSection::Packaging => PACKAGING,
            ProductSection::WhyChoose => WHY_CHOOSE,
            ProductSection::Cta | ProductSection::LeadMagnet => BENEFITS,
        })
    }
}
