use super::TextKey;

pub(super) fn text(key: TextKey) -> &'static str {
    match key {
        TextKey::ExportReady => "輸出可能",
        TextKey::OemAvailable => "OEM/ODM対応",
        TextKey::RequestQuote => "見積もり依頼",
        TextKey::GetFreeCatalog => "無料カタログ取得",
        TextKey::VerifiedManufacturer => "認証済みメーカー",
        TextKey::QuickOverview => "クイック概要",
        TextKey::ProductOverview => "製品概要",
        TextKey::FeaturesAdvantages => "特徴と利点",
        TextKey::ProductFeaturesSubtitle => "当社製品を際立たせる主要な製造と品質の優位性",
        TextKey::TechnicalSpecs => "技術仕様",
        TextKey::TechnicalSpecsSubtitle => "詳細な製品仕様と基準",
        TextKey::CustomizationOptionsTitle => "カスタマイズオプション",
        TextKey::ItemLabel => "項目",
        TextKey::DetailsLabel => "詳細",
        TextKey::ApplicationsUseCases => "アプリケーションと使用例",
        TextKey::ApplicationsSubtitle => "当社製品が成功裏に展開されている業界とアプリケーション",
        TextKey::CertificationsQualityControl => "認証と品質管理",
        TextKey::CertificationsSubtitle => "国際基準と厳格な品質プロセス",
        TextKey::InternationalCertifications => "国際認証",
        TextKey::QualityControlProcessTitle => "品質管理プロセス",
        TextKey::ThirdPartyInspection => "第三者検査が可能",
        TextKey::OemOdmCapabilities => "OEM/ODM能力",
        TextKey::OemCapabilitySubtitle => {
            "お客様の特定のブランドと製品要件を満たす包括的なカスタマイズサービス"
        }
        TextKey::ManufacturingFacility => "製造施設",
        TextKey::ProfessionalProductionBase => "プロフェッショナルな生産拠点",
        TextKey::PackagingShippingTitle => "包装と配送",
        TextKey::PackagingShippingSubtitle => "安全な包装と柔軟な配送オプション",
        TextKey::PackagingDetails => "包装の詳細",
        TextKey::ShippingMethodsTitle => "配送方法",
        TextKey::SupportedIncotermsTitle => "対応インコタームズ",
        TextKey::WhyChooseUs => "当社を選ぶ理由",
        TextKey::WhyChooseUsSubtitle => "当社を信頼できる製造パートナーにする工場の強みと能力",
        TextKey::DownloadCatalog => "カタログダウンロード",
        TextKey::LeadMagnetDescription => {
            "詳細な仕様、技術図面、工場能力を含む完全な製品カタログに即座にアクセスできます。"
        }
        TextKey::DownloadNow => "今すぐダウンロード",
        TextKey::FreeDownload => "無料ダウンロード",
        TextKey::CompleteProductSpecs => "完全な製品仕様",
        TextKey::TechnicalDatasheets => "技術データシートと図面",
        TextKey::FactoryCapabilityOverview => "工場能力の概要",
        TextKey::PriceIndicationMoq => "価格目安とMOQの詳細",
        TextKey::YourName => "お名前",
        TextKey::YourEmail => "メールアドレス",
        TextKey::YourCompany => "会社名",
        TextKey::RequestQuotation => "見積もり依頼",
        TextKey::RfqDescription => {
            "プロジェクト要件について話し合う準備はできていますか？当社のチームは、お客様の特定のニーズに基づいてパーソナライズされた見積もりを提供します。"
        }
        TextKey::NameRequired => "名前 *",
        TextKey::CompanyRequired => "会社 *",
        TextKey::EmailRequired => "メール *",
        TextKey::WhatsappPhone => "WhatsApp / 電話",
        TextKey::EstimatedOrderQuantity => "推定注文数量",
        TextKey::CustomRequirementsOptional => "カスタム要件（オプション）",
        TextKey::SubmitRfq => "見積もりを送信",
        TextKey::FreeSamplesQualified => "適格なバイヤー向けの無料サンプル",
        TextKey::CustomQuotation12to24 => "12〜24時間以内のカスタム見積もり",
        TextKey::DirectSalesEngineer => "営業エンジニアとの直接コミュニケーション",
        TextKey::ResponseGuaranteed => "回答保証",
        TextKey::ContactUs => "お問い合わせ",
        TextKey::QuickContact => "クイック連絡",
        TextKey::InquireNow => "今すぐお問い合わせ",
        TextKey::LearnMore => "詳しく見る",
        TextKey::FreeConsultation => "無料相談",
        TextKey::NumbersSpeak => "数字が物語る実績",
        TextKey::ContactNow => "今すぐ連絡",
        TextKey::QuickLinksTitle => "クイックリンク",
        TextKey::ResourcesTitle => "リソース",
        TextKey::ConnectTitle => "フォローする",
        TextKey::Copyright => "無断転載を禁じます。",
        TextKey::LeadNameLabel => "氏名 *",
        TextKey::LeadEmailLabel => "ビジネスメール *",
        TextKey::LeadCompanyLabel => "会社名（任意）",
        TextKey::SecureText => "100% 安全",
        TextKey::NoSpamText => "スパムなし",
        TextKey::InstantText => "即時ダウンロード",
        TextKey::PrivacyText => {
            "ダウンロードすると、輸出機会に関するメールを時折受け取ることに同意したことになります。いつでも配信停止できます。"
        }
        TextKey::OurProducts => "製品一覧",
        TextKey::OurProductsSubtitle => "当社のプロフェッショナル製品をご覧ください",
        TextKey::ViewDetails => "詳細を見る",
        TextKey::ProductNotFound => "製品が見つかりません",
        TextKey::BackToHome => "ホームに戻る",
        TextKey::FormErrorTitle => "フォームを確認してください",
        TextKey::MissingFields => "必須項目を入力してください：",
        TextKey::InvalidEmail => "有効なメールアドレスを入力してください。",
        TextKey::RfqSuccess => "ありがとうございます。営業チームより24時間以内にご連絡いたします。",
        TextKey::LeadSuccess => "ありがとうございます。カタログをメールでお送りしました。",
    }
}
