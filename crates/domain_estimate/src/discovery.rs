//! How the customer heard about the product
//!
//! Collected with an order for reporting; it plays no part in rating.

use core_kernel::define_code_enum;

define_code_enum! {
    /// Discovery channel answered on the order form
    pub enum DiscoverySourceType {
        /// Internet search engine
        InternetSearch = 1 => "インターネット（検索エンジン）",
        /// The insurer's official website
        OfficialWebsite = 2 => "保険会社の公式ウェブサイト",
        /// Comparison or review site
        ComparisonSite = 3 => "比較サイト／口コミサイト",
        /// Television or radio advertisement
        TvRadioCm = 4 => "テレビCM・ラジオCM",
        /// Newspaper or magazine advertisement
        NewspaperMagazine = 5 => "新聞・雑誌広告",
        /// Social media
        Sns = 6 => "SNS（Twitter、Instagram、Facebookなど）",
        /// Video advertisement or video site
        YoutubeVideo = 7 => "YouTube広告／動画サイト",
        /// Introduced by a friend or family member
        IntroducedByPerson = 8 => "知人・家族の紹介",
        /// Insurance agent or sales representative
        Agent = 9 => "保険代理店・営業担当者",
        /// Notice from employer
        CompanyNotice = 10 => "会社・職場からの案内",
        /// Direct mail or flyer
        PostMail = 11 => "郵送チラシ・ダイレクトメール",
        /// In-store or event booth
        Event = 12 => "店頭・イベント（キャンペーンブース等）",
        /// Anything else
        Other = 13 => "その他",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::CodeEnum;

    #[test]
    fn test_thirteen_sources_with_sequential_codes() {
        let codes: Vec<i32> = DiscoverySourceType::variants().iter().map(|v| v.code()).collect();
        assert_eq!(codes, (1..=13).collect::<Vec<_>>());
    }

    #[test]
    fn test_lookup_from_form_value() {
        assert_eq!(DiscoverySourceType::from_code_str("9"), Some(DiscoverySourceType::Agent));
        assert_eq!(DiscoverySourceType::from_code_str("14"), None);
        assert_eq!(DiscoverySourceType::from_code_str("agent"), None);
    }

    #[test]
    fn test_first_and_last() {
        assert_eq!(DiscoverySourceType::variants().first(), Some(&DiscoverySourceType::InternetSearch));
        assert_eq!(DiscoverySourceType::variants().last(), Some(&DiscoverySourceType::Other));
    }
}
