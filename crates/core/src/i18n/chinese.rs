use super::TextKey;

pub(super) fn text(key: TextKey) -> &'static str {
    match key {
        TextKey::ExportReady => "可出口",
        TextKey::OemAvailable => "提供OEM/ODM",
        TextKey::RequestQuote => "索取报价",
        TextKey::GetFreeCatalog => "获取免费目录",
        TextKey::VerifiedManufacturer => "认证制造商",
        TextKey::QuickOverview => "快速概览",
        TextKey::ProductOverview => "产品概览",
        TextKey::FeaturesAdvantages => "特性与优势",
        TextKey::ProductFeaturesSubtitle => "使我们产品脱颖而出的关键制造和质量优势",
        TextKey::TechnicalSpecs => "技术规格",
        TextKey::TechnicalSpecsSubtitle => "详细的产品规格和标准",
        TextKey::CustomizationOptionsTitle => "定制选项",
        TextKey::ItemLabel => "项目",
        TextKey::DetailsLabel => "详情",
        TextKey::ApplicationsUseCases => "应用与案例",
        TextKey::ApplicationsSubtitle => "我们产品成功部署的行业和应用",
        TextKey::CertificationsQualityControl => "认证与质量控制",
        TextKey::CertificationsSubtitle => "国际标准和严格的质量流程",
        TextKey::InternationalCertifications => "国际认证",
        TextKey::QualityControlProcessTitle => "质量控制流程",
        TextKey::ThirdPartyInspection => "提供第三方检验",
        TextKey::OemOdmCapabilities => "OEM/ODM能力",
        TextKey::OemCapabilitySubtitle => "全面的定制服务，满足您特定的品牌和产品要求",
        TextKey::ManufacturingFacility => "生产设施",
        TextKey::ProfessionalProductionBase => "专业生产基地",
        TextKey::PackagingShippingTitle => "包装与运输",
        TextKey::PackagingShippingSubtitle => "安全包装和灵活交付选项",
        TextKey::PackagingDetails => "包装详情",
        TextKey::ShippingMethodsTitle => "运输方式",
        TextKey::SupportedIncotermsTitle => "支持的贸易术语",
        TextKey::WhyChooseUs => "为什么选择我们",
        TextKey::WhyChooseUsSubtitle => "工厂实力和能力使我们成为您可靠的制造合作伙伴",
        TextKey::DownloadCatalog => "下载目录",
        TextKey::LeadMagnetDescription => "立即获取我们完整的产品目录，包含详细规格、技术图纸和工厂能力。",
        TextKey::DownloadNow => "立即下载",
        TextKey::FreeDownload => "免费下载",
        TextKey::CompleteProductSpecs => "完整的产品规格",
        TextKey::TechnicalDatasheets => "技术数据表和图纸",
        TextKey::FactoryCapabilityOverview => "工厂能力概述",
        TextKey::PriceIndicationMoq => "价格指示和MOQ详情",
        TextKey::YourName => "您的姓名",
        TextKey::YourEmail => "您的邮箱",
        TextKey::YourCompany => "您的公司",
        TextKey::RequestQuotation => "询价申请",
        TextKey::RfqDescription => "准备讨论您的项目需求？我们的团队根据您的具体需求提供个性化报价。",
        TextKey::NameRequired => "姓名 *",
        TextKey::CompanyRequired => "公司 *",
        TextKey::EmailRequired => "邮箱 *",
        TextKey::WhatsappPhone => "WhatsApp / 电话",
        TextKey::EstimatedOrderQuantity => "预计订单数量",
        TextKey::CustomRequirementsOptional => "定制需求（可选）",
        TextKey::SubmitRfq => "提交询价",
        TextKey::FreeSamplesQualified => "为合格买家提供免费样品",
        TextKey::CustomQuotation12to24 => "12-24小时内提供定制报价",
        TextKey::DirectSalesEngineer => "与销售工程师直接沟通",
        TextKey::ResponseGuaranteed => "保证回复",
        TextKey::ContactUs => "联系我们",
        TextKey::QuickContact => "快速联系",
        TextKey::InquireNow => "立即咨询",
        TextKey::LearnMore => "了解更多",
        TextKey::FreeConsultation => "免费咨询",
        TextKey::NumbersSpeak => "数据说明一切",
        TextKey::ContactNow => "立即联系",
        TextKey::QuickLinksTitle => "快速链接",
        TextKey::ResourcesTitle => "资源",
        TextKey::ConnectTitle => "关注我们",
        TextKey::Copyright => "版权所有。",
        TextKey::LeadNameLabel => "姓名 *",
        TextKey::LeadEmailLabel => "企业邮箱 *",
        TextKey::LeadCompanyLabel => "公司名称（可选）",
        TextKey::SecureText => "100% 安全",
        TextKey::NoSpamText => "无垃圾邮件",
        TextKey::InstantText => "即时下载",
        TextKey::PrivacyText => "下载即表示您同意偶尔接收有关出口机会的邮件，可随时退订。",
        TextKey::OurProducts => "我们的产品",
        TextKey::OurProductsSubtitle => "了解我们的专业产品系列",
        TextKey::ViewDetails => "查看详情",
        TextKey::ProductNotFound => "未找到该产品",
        TextKey::BackToHome => "返回首页",
        TextKey::FormErrorTitle => "请检查表单",
        TextKey::MissingFields => "请填写以下必填项：",
        TextKey::InvalidEmail => "请输入有效的邮箱地址。",
        TextKey::RfqSuccess => "谢谢！我们的销售团队将在24小时内与您联系。",
        TextKey::LeadSuccess => "谢谢！产品目录已发送至您的邮箱。",
    }
}
