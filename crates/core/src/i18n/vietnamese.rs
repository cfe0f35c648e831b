use super::TextKey;

pub(super) fn text(key: TextKey) -> &'static str {
    match key {
        TextKey::ExportReady => "Sẵn sàng Xuất khẩu",
        TextKey::OemAvailable => "Cung cấp OEM/ODM",
        TextKey::RequestQuote => "Yêu cầu Báo giá",
        TextKey::GetFreeCatalog => "Tải Catalogue Miễn phí",
        TextKey::VerifiedManufacturer => "Nhà sản xuất Đã xác minh",
        TextKey::QuickOverview => "Tổng quan Nhanh",
        TextKey::ProductOverview => "Tổng quan Sản phẩm",
        TextKey::FeaturesAdvantages => "Tính năng & Ưu điểm",
        TextKey::ProductFeaturesSubtitle => {
            "Ưu điểm sản xuất và chất lượng chính làm nên sự khác biệt của sản phẩm"
        }
        TextKey::TechnicalSpecs => "Thông số Kỹ thuật",
        TextKey::TechnicalSpecsSubtitle => "Thông số kỹ thuật và tiêu chuẩn chi tiết",
        TextKey::CustomizationOptionsTitle => "Tùy chọn Tùy chỉnh",
        TextKey::ItemLabel => "Mục",
        TextKey::DetailsLabel => "Chi tiết",
        TextKey::ApplicationsUseCases => "Ứng dụng & Trường hợp Sử dụng",
        TextKey::ApplicationsSubtitle => "Các ngành và ứng dụng triển khai sản phẩm thành công",
        TextKey::CertificationsQualityControl => "Chứng nhận & Kiểm soát Chất lượng",
        TextKey::CertificationsSubtitle => "Tiêu chuẩn quốc tế và quy trình chất lượng nghiêm ngặt",
        TextKey::InternationalCertifications => "Chứng nhận Quốc tế",
        TextKey::QualityControlProcessTitle => "Quy trình Kiểm soát Chất lượng",
        TextKey::ThirdPartyInspection => "Kiểm tra bên thứ ba có sẵn",
        TextKey::OemOdmCapabilities => "Khả năng OEM/ODM",
        TextKey::OemCapabilitySubtitle => {
            "Dịch vụ tùy chỉnh toàn diện để đáp ứng yêu cầu thương hiệu và sản phẩm cụ thể của bạn"
        }
        TextKey::ManufacturingFacility => "Cơ sở Sản xuất",
        TextKey::ProfessionalProductionBase => "Cơ sở sản xuất chuyên nghiệp",
        TextKey::PackagingShippingTitle => "Đóng gói & Vận chuyển",
        TextKey::PackagingShippingSubtitle => "Đóng gói an toàn và tùy chọn giao hàng linh hoạt",
        TextKey::PackagingDetails => "Chi tiết Đóng gói",
        TextKey::ShippingMethodsTitle => "Phương thức Vận chuyển",
        TextKey::SupportedIncotermsTitle => "Điều khoản Incoterms Hỗ trợ",
        TextKey::WhyChooseUs => "Tại sao Chọn Chúng tôi",
        TextKey::WhyChooseUsSubtitle => {
            "Năng lực và thế mạnh nhà máy giúp chúng tôi trở thành đối tác sản xuất đáng tin cậy của bạn"
        }
        TextKey::DownloadCatalog => "Tải Xuống Catalogue",
        TextKey::LeadMagnetDescription => {
            "Truy cập ngay vào catalogue sản phẩm đầy đủ với thông số chi tiết, bản vẽ kỹ thuật và năng lực nhà máy."
        }
        TextKey::DownloadNow => "Tải ngay",
        TextKey::FreeDownload => "Tải miễn phí",
        TextKey::CompleteProductSpecs => "Thông số sản phẩm đầy đủ",
        TextKey::TechnicalDatasheets => "Bảng dữ liệu & bản vẽ kỹ thuật",
        TextKey::FactoryCapabilityOverview => "Tổng quan năng lực nhà máy",
        TextKey::PriceIndicationMoq => "Chỉ dẫn giá & chi tiết MOQ",
        TextKey::YourName => "Tên của bạn",
        TextKey::YourEmail => "Email của bạn",
        TextKey::YourCompany => "Công ty của bạn",
        TextKey::RequestQuotation => "Yêu cầu Báo giá",
        TextKey::RfqDescription => {
            "Sẵn sàng thảo luận yêu cầu dự án của bạn? Đội ngũ chúng tôi cung cấp báo giá cá nhân hóa dựa trên nhu cầu cụ thể của bạn."
        }
        TextKey::NameRequired => "Tên *",
        TextKey::CompanyRequired => "Công ty *",
        TextKey::EmailRequired => "Email *",
        TextKey::WhatsappPhone => "WhatsApp / Điện thoại",
        TextKey::EstimatedOrderQuantity => "Số lượng Đơn hàng Dự kiến",
        TextKey::CustomRequirementsOptional => "Yêu cầu Tùy chỉnh (Tùy chọn)",
        TextKey::SubmitRfq => "Gửi Yêu cầu Báo giá",
        TextKey::FreeSamplesQualified => "Mẫu miễn phí cho khách hàng đủ điều kiện",
        TextKey::CustomQuotation12to24 => "Báo giá tùy chỉnh trong 12-24 giờ",
        TextKey::DirectSalesEngineer => "Liên lạc trực tiếp với kỹ sư bán hàng",
        TextKey::ResponseGuaranteed => "Đảm bảo Phản hồi",
        TextKey::ContactUs => "Liên hệ với Chúng tôi",
        TextKey::QuickContact => "Liên hệ Nhanh",
        TextKey::InquireNow => "Liên hệ Ngay",
        TextKey::LearnMore => "Tìm hiểu thêm",
        TextKey::FreeConsultation => "Tư vấn miễn phí",
        TextKey::NumbersSpeak => "Những Con Số Nói Lên Tất Cả",
        TextKey::ContactNow => "Liên hệ ngay",
        TextKey::QuickLinksTitle => "Liên Kết Nhanh",
        TextKey::ResourcesTitle => "Tài Nguyên",
        TextKey::ConnectTitle => "Kết Nối",
        TextKey::Copyright => "Tất cả quyền được bảo lưu.",
        TextKey::LeadNameLabel => "Họ và tên *",
        TextKey::LeadEmailLabel => "Email doanh nghiệp *",
        TextKey::LeadCompanyLabel => "Tên công ty (Tùy chọn)",
        TextKey::SecureText => "100% An toàn",
        TextKey::NoSpamText => "Không spam",
        TextKey::InstantText => "Tải về ngay",
        TextKey::PrivacyText => {
            "Bằng việc tải về, bạn đồng ý nhận email thỉnh thoảng về cơ hội xuất khẩu. Hủy đăng ký bất cứ lúc nào."
        }
        TextKey::OurProducts => "Sản phẩm của Chúng tôi",
        TextKey::OurProductsSubtitle => "Khám phá các sản phẩm chuyên nghiệp của chúng tôi",
        TextKey::ViewDetails => "Xem chi tiết",
        TextKey::ProductNotFound => "Không tìm thấy sản phẩm",
        TextKey::BackToHome => "Về trang chủ",
        TextKey::FormErrorTitle => "Vui lòng kiểm tra lại biểu mẫu",
        TextKey::MissingFields => "Vui lòng điền các trường bắt buộc:",
        TextKey::InvalidEmail => "Vui lòng nhập địa chỉ email hợp lệ.",
        TextKey::RfqSuccess => "Cảm ơn bạn! Đội ngũ bán hàng sẽ liên hệ trong vòng 24 giờ.",
        TextKey::LeadSuccess => "Cảm ơn bạn! Catalogue đang được gửi đến hộp thư của bạn.",
    }
}
