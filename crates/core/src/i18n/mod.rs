//! Localized UI strings.
//!
//! One bundle per supported language, each an exhaustive `match` over the
//! closed [`TextKey`] set, so a missing translation is a compile error.

mod chinese;
mod english;
mod japanese;
mod vietnamese;

key_enum! {
    /// A supported site language, selected by its lowercase tag.
    pub enum Language {
        Vietnamese => "vietnamese",
        English => "english",
        Chinese => "chinese",
        Japanese => "japanese",
    }
}

impl Language {
    /// Language used when a tag is missing or unknown.
    pub const DEFAULT: Language = Language::Vietnamese;

    /// Parses a language tag. Unknown tags select [`Language::DEFAULT`].
    ///
    /// Tags are matched case-insensitively after trimming.
    pub fn from_tag(tag: &str) -> Self {
        Self::from_key(&tag.trim().to_ascii_lowercase()).unwrap_or(Self::DEFAULT)
    }

    /// The value for the `lang` attribute of the HTML document.
    pub fn html_lang(self) -> &'static str {
        match self {
            Language::Vietnamese => "vi",
            Language::English => "en",
            Language::Chinese => "zh",
            Language::Japanese => "ja",
        }
    }

    pub fn bundle(self) -> Bundle {
        Bundle { language: self }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::DEFAULT
    }
}

key_enum! {
    /// Every localized UI string on the site.
    pub enum TextKey {
        // Product hero
        ExportReady => "exportReady",
        OemAvailable => "oemAvailable",
        RequestQuote => "requestQuote",
        GetFreeCatalog => "getFreeCatalog",
        VerifiedManufacturer => "verifiedManufacturer",
        // Product sections
        QuickOverview => "quickOverview",
        ProductOverview => "productOverview",
        FeaturesAdvantages => "featuresAdvantages",
        ProductFeaturesSubtitle => "productFeaturesSubtitle",
        TechnicalSpecs => "technicalSpecs",
        TechnicalSpecsSubtitle => "technicalSpecsSubtitle",
        CustomizationOptionsTitle => "customizationOptionsTitle",
        ItemLabel => "itemLabel",
        DetailsLabel => "detailsLabel",
        ApplicationsUseCases => "applicationsUseCases",
        ApplicationsSubtitle => "applicationsSubtitle",
        CertificationsQualityControl => "certificationsQualityControl",
        CertificationsSubtitle => "certificationsSubtitle",
        InternationalCertifications => "internationalCertifications",
        QualityControlProcessTitle => "qualityControlProcessTitle",
        ThirdPartyInspection => "thirdPartyInspection",
        OemOdmCapabilities => "oemOdmCapabilities",
        OemCapabilitySubtitle => "oemCapabilitySubtitle",
        ManufacturingFacility => "manufacturingFacility",
        ProfessionalProductionBase => "professionalProductionBase",
        PackagingShippingTitle => "packagingShippingTitle",
        PackagingShippingSubtitle => "packagingShippingSubtitle",
        PackagingDetails => "packagingDetails",
        ShippingMethodsTitle => "shippingMethodsTitle",
        SupportedIncotermsTitle => "supportedIncotermsTitle",
        WhyChooseUs => "whyChooseUs",
        WhyChooseUsSubtitle => "whyChooseUsSubtitle",
        // Product lead magnet
        DownloadCatalog => "downloadCatalog",
        LeadMagnetDescription => "leadMagnetDescription",
        DownloadNow => "downloadNow",
        FreeDownload => "freeDownload",
        CompleteProductSpecs => "completeProductSpecs",
        TechnicalDatasheets => "technicalDatasheets",
        FactoryCapabilityOverview => "factoryCapabilityOverview",
        PriceIndicationMoq => "priceIndicationMOQ",
        YourName => "yourName",
        YourEmail => "yourEmail",
        YourCompany => "yourCompany",
        // RFQ form
        RequestQuotation => "requestQuotation",
        RfqDescription => "rfqDescription",
        NameRequired => "nameRequired",
        CompanyRequired => "companyRequired",
        EmailRequired => "emailRequired",
        WhatsappPhone => "whatsappPhone",
        EstimatedOrderQuantity => "estimatedOrderQuantity",
        CustomRequirementsOptional => "customRequirementsOptional",
        SubmitRfq => "submitRFQ",
        FreeSamplesQualified => "freeSamplesQualified",
        CustomQuotation12to24 => "customQuotation12to24",
        DirectSalesEngineer => "directSalesEngineer",
        ResponseGuaranteed => "responseGuaranteed",
        // Calls to action
        ContactUs => "contactUs",
        QuickContact => "quickContact",
        InquireNow => "inquireNow",
        // Landing sections
        LearnMore => "learnMore",
        FreeConsultation => "freeConsultation",
        NumbersSpeak => "numbersSpeak",
        ContactNow => "contactNow",
        QuickLinksTitle => "quickLinksTitle",
        ResourcesTitle => "resourcesTitle",
        ConnectTitle => "connectTitle",
        Copyright => "copyright",
        LeadNameLabel => "leadNameLabel",
        LeadEmailLabel => "leadEmailLabel",
        LeadCompanyLabel => "leadCompanyLabel",
        SecureText => "secureText",
        NoSpamText => "noSpamText",
        InstantText => "instantText",
        PrivacyText => "privacyText",
        // Pages and form feedback
        OurProducts => "ourProducts",
        OurProductsSubtitle => "ourProductsSubtitle",
        ViewDetails => "viewDetails",
        ProductNotFound => "productNotFound",
        BackToHome => "backToHome",
        FormErrorTitle => "formErrorTitle",
        MissingFields => "missingFields",
        InvalidEmail => "invalidEmail",
        RfqSuccess => "rfqSuccess",
        LeadSuccess => "leadSuccess",
    }
}

/// The localized strings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bundle {
    language: Language,
}

impl Bundle {
    pub fn language(&self) -> Language {
        self.language
    }

    /// The string for `key` in this bundle's language.
    pub fn text(&self, key: TextKey) -> &'static str {
        match self.language {
            Language::Vietnamese => vietnamese::text(key),
            Language::English => english::text(key),
            Language::Chinese => chinese::text(key),
            Language::Japanese => japanese::text(key),
        }
    }
}

/// Selects the bundle for a language tag. Unknown tags get the default language.
///
/// # Examples
///
/// ```
/// use vitrine_core::i18n::{get_bundle, Language, TextKey};
///
/// let bundle = get_bundle("klingon");
/// assert_eq!(bundle.language(), Language::Vietnamese);
/// assert_eq!(bundle.text(TextKey::RequestQuote), "Yêu cầu Báo giá");
/// ```
pub fn get_bundle(tag: &str) -> Bundle {
    Language::from_tag(tag).bundle()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(Language::from_tag("english"), Language::English);
        assert_eq!(Language::from_tag(" Japanese "), Language::Japanese);
        assert_eq!(Language::from_tag("CHINESE"), Language::Chinese);
        assert_eq!(Language::from_tag("klingon"), Language::Vietnamese);
        assert_eq!(Language::from_tag(""), Language::Vietnamese);
    }

    #[test]
    fn test_unknown_tag_matches_vietnamese_bundle() {
        let fallback = get_bundle("klingon");
        let vietnamese = get_bundle("vietnamese");
        for key in TextKey::ALL {
            assert_eq!(fallback.text(*key), vietnamese.text(*key));
        }
    }

    #[test]
    fn test_every_key_is_translated() {
        for language in Language::ALL {
            let bundle = language.bundle();
            for key in TextKey::ALL {
                assert!(
                    !bundle.text(*key).trim().is_empty(),
                    "{:?} has no text for {:?}",
                    language,
                    key
                );
            }
        }
    }

    #[test]
    fn test_known_strings() {
        assert_eq!(get_bundle("english").text(TextKey::NameRequired), "Name *");
        assert_eq!(get_bundle("chinese").text(TextKey::RequestQuote), "索取报价");
        assert_eq!(get_bundle("japanese").text(TextKey::SubmitRfq), "見積もりを送信");
        assert_eq!(
            get_bundle("vietnamese").text(TextKey::NumbersSpeak),
            "Những Con Số Nói Lên Tất Cả"
        );
    }

    #[test]
    fn test_html_lang() {
        assert_eq!(Language::Vietnamese.html_lang(), "vi");
        assert_eq!(Language::Japanese.html_lang(), "ja");
    }
}
