use super::TextKey;

pub(super) fn text(key: TextKey) -> &'static str {
    match key {
        TextKey::ExportReady => "Export Ready",
        TextKey::OemAvailable => "OEM/ODM Available",
        TextKey::RequestQuote => "Request a Quote",
        TextKey::GetFreeCatalog => "Get Free Catalog",
        TextKey::VerifiedManufacturer => "Verified Manufacturer",
        TextKey::QuickOverview => "Quick Overview",
        TextKey::ProductOverview => "Product Overview",
        TextKey::FeaturesAdvantages => "Features & Advantages",
        TextKey::ProductFeaturesSubtitle => {
            "Key manufacturing and quality advantages that set our products apart"
        }
        TextKey::TechnicalSpecs => "Technical Specifications",
        TextKey::TechnicalSpecsSubtitle => "Detailed product specifications and standards",
        TextKey::CustomizationOptionsTitle => "Customization Options",
        TextKey::ItemLabel => "Item",
        TextKey::DetailsLabel => "Details",
        TextKey::ApplicationsUseCases => "Applications & Use Cases",
        TextKey::ApplicationsSubtitle => {
            "Industries and applications where our products are successfully deployed"
        }
        TextKey::CertificationsQualityControl => "Certifications & Quality Control",
        TextKey::CertificationsSubtitle => "International standards and rigorous quality processes",
        TextKey::InternationalCertifications => "International Certifications",
        TextKey::QualityControlProcessTitle => "Quality Control Process",
        TextKey::ThirdPartyInspection => "Third-party inspection available",
        TextKey::OemOdmCapabilities => "OEM/ODM Capabilities",
        TextKey::OemCapabilitySubtitle => {
            "Comprehensive customization services to meet your specific brand and product requirements"
        }
        TextKey::ManufacturingFacility => "Manufacturing Facility",
        TextKey::ProfessionalProductionBase => "Professional production base",
        TextKey::PackagingShippingTitle => "Packaging & Shipping",
        TextKey::PackagingShippingSubtitle => "Safe packaging and flexible delivery options",
        TextKey::PackagingDetails => "Packaging Details",
        TextKey::ShippingMethodsTitle => "Shipping Methods",
        TextKey::SupportedIncotermsTitle => "Supported Incoterms",
        TextKey::WhyChooseUs => "Why Choose Us",
        TextKey::WhyChooseUsSubtitle => {
            "Factory strength and capabilities that make us your reliable manufacturing partner"
        }
        TextKey::DownloadCatalog => "Download Catalog",
        TextKey::LeadMagnetDescription => {
            "Get instant access to our complete product catalog with detailed specifications, technical drawings, and factory capabilities."
        }
        TextKey::DownloadNow => "Download Now",
        TextKey::FreeDownload => "Free Download",
        TextKey::CompleteProductSpecs => "Complete product specifications",
        TextKey::TechnicalDatasheets => "Technical datasheets & drawings",
        TextKey::FactoryCapabilityOverview => "Factory capability overview",
        TextKey::PriceIndicationMoq => "Price indication & MOQ details",
        TextKey::YourName => "Your Name",
        TextKey::YourEmail => "Your Email",
        TextKey::YourCompany => "Your Company",
        TextKey::RequestQuotation => "Request for Quotation",
        TextKey::RfqDescription => {
            "Ready to discuss your project requirements? Our team provides personalized quotations based on your specific needs."
        }
        TextKey::NameRequired => "Name *",
        TextKey::CompanyRequired => "Company *",
        TextKey::EmailRequired => "Email *",
        TextKey::WhatsappPhone => "WhatsApp / Phone",
        TextKey::EstimatedOrderQuantity => "Estimated Order Quantity",
        TextKey::CustomRequirementsOptional => "Custom Requirements (Optional)",
        TextKey::SubmitRfq => "Submit RFQ",
        TextKey::FreeSamplesQualified => "Free samples for qualified buyers",
        TextKey::CustomQuotation12to24 => "Custom quotation within 12-24 hours",
        TextKey::DirectSalesEngineer => "Direct communication with sales engineer",
        TextKey::ResponseGuaranteed => "Response guaranteed",
        TextKey::ContactUs => "Contact Us",
        TextKey::QuickContact => "Quick Contact",
        TextKey::InquireNow => "Inquire Now",
        TextKey::LearnMore => "Learn More",
        TextKey::FreeConsultation => "Free Consultation",
        TextKey::NumbersSpeak => "The Numbers Speak for Themselves",
        TextKey::ContactNow => "Contact Now",
        TextKey::QuickLinksTitle => "Quick Links",
        TextKey::ResourcesTitle => "Resources",
        TextKey::ConnectTitle => "Connect",
        TextKey::Copyright => "All rights reserved.",
        TextKey::LeadNameLabel => "Full Name *",
        TextKey::LeadEmailLabel => "Business Email *",
        TextKey::LeadCompanyLabel => "Company Name (Optional)",
        TextKey::SecureText => "100% Secure",
        TextKey::NoSpamText => "No Spam",
        TextKey::InstantText => "Instant Download",
        TextKey::PrivacyText => {
            "By downloading, you agree to receive occasional emails about export opportunities. Unsubscribe anytime."
        }
        TextKey::OurProducts => "Our Products",
        TextKey::OurProductsSubtitle => "Explore our range of professional products",
        TextKey::ViewDetails => "View Details",
        TextKey::ProductNotFound => "Product not found",
        TextKey::BackToHome => "Back to home",
        TextKey::FormErrorTitle => "Please check the form",
        TextKey::MissingFields => "Please fill in the required fields:",
        TextKey::InvalidEmail => "Please enter a valid email address.",
        TextKey::RfqSuccess => "Thank you! Our sales team will contact you within 24 hours.",
        TextKey::LeadSuccess => "Thank you! Your catalog is on its way to your inbox.",
    }
}
