//! `[seo]` and `[social]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[seo]` section in blogmeta.toml - title and link rules.
///
/// # Example
/// ```toml
/// [seo]
/// separator = " • "
/// min_title_len = 50
/// page_label = "Strona {n}"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SeoConfig {
    /// Joins title parts.
    #[serde(default = "defaults::seo::separator")]
    #[educe(Default = defaults::seo::separator())]
    pub separator: String,

    /// Titles shorter than this (in characters) get the short description appended.
    #[serde(default = "defaults::seo::min_title_len")]
    #[educe(Default = defaults::seo::min_title_len())]
    pub min_title_len: usize,

    /// Max characters of the `description` meta. `og:description` is never cut.
    #[serde(default = "defaults::seo::description_limit")]
    #[educe(Default = defaults::seo::description_limit())]
    pub description_limit: usize,

    /// Title part for paginated listings; `{n}` is the page number.
    #[serde(default = "defaults::seo::page_label")]
    #[educe(Default = defaults::seo::page_label())]
    pub page_label: String,

    /// Path segment before the page number (`/strona/2/`).
    #[serde(default = "defaults::seo::pagination_segment")]
    #[educe(Default = defaults::seo::pagination_segment())]
    pub pagination_segment: String,

    /// Policy for `robots`, `googlebot` and `bingbot`.
    #[serde(default = "defaults::seo::robots")]
    #[educe(Default = defaults::seo::robots())]
    pub robots: String,

    /// `<link rel="profile">` target.
    #[serde(default = "defaults::seo::profile")]
    #[educe(Default = defaults::seo::profile())]
    pub profile: String,

    /// Title of the `<link rel="index">` home link.
    #[serde(default = "defaults::seo::index_title")]
    #[educe(Default = defaults::seo::index_title())]
    pub index_title: String,
}

impl SeoConfig {
    /// Render the page label for page `n`.
    pub fn page_label_for(&self, n: u32) -> String {
        self.page_label.replace("{n}", &n.to_string())
    }
}

/// `[social]` section in blogmeta.toml - Open Graph, Twitter and Facebook identifiers.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SocialConfig {
    /// `article:publisher` value on article pages.
    #[serde(default = "defaults::social::publisher")]
    #[educe(Default = defaults::social::publisher())]
    pub publisher: String,

    #[serde(default = "defaults::social::fb_app_id")]
    #[educe(Default = defaults::social::fb_app_id())]
    pub fb_app_id: String,

    #[serde(default = "defaults::social::twitter_card")]
    #[educe(Default = defaults::social::twitter_card())]
    pub twitter_card: String,

    #[serde(default = "defaults::social::twitter_site")]
    #[educe(Default = defaults::social::twitter_site())]
    pub twitter_site: String,

    /// Profiles listed as `sameAs` of the organization.
    #[serde(default = "defaults::social::same_as")]
    #[educe(Default = defaults::social::same_as())]
    pub same_as: Vec<String>,
}

/// `[structured_data]` section in blogmeta.toml - organization logo.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct StructuredDataConfig {
    #[serde(default = "defaults::structured_data::logo_url")]
    #[educe(Default = defaults::structured_data::logo_url())]
    pub logo_url: String,

    #[serde(default = "defaults::structured_data::logo_width")]
    #[educe(Default = defaults::structured_data::logo_width())]
    pub logo_width: u32,

    #[serde(default = "defaults::structured_data::logo_height")]
    #[educe(Default = defaults::structured_data::logo_height())]
    pub logo_height: u32,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_seo_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.seo.separator, " • ");
        assert_eq!(config.seo.min_title_len, 50);
        assert_eq!(config.seo.description_limit, 177);
        assert_eq!(config.seo.pagination_segment, "strona");
        assert_eq!(config.seo.index_title, "Strona główna");
        assert!(config.seo.robots.starts_with("index, follow"));
    }

    #[test]
    fn test_page_label_for() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config.seo.page_label_for(3), "Strona 3");

        let config: SiteConfig = toml::from_str("[seo]\npage_label = \"Page {n} of the archive\"").unwrap();
        assert_eq!(config.seo.page_label_for(12), "Page 12 of the archive");
    }

    #[test]
    fn test_social_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.social.fb_app_id, "1709793622637583");
        assert_eq!(config.social.twitter_card, "summary_large_image");
        assert_eq!(config.social.twitter_site, "@mmiszy");
        assert_eq!(config.social.same_as.len(), 5);
        assert_eq!(config.social.same_as[0], "https://www.facebook.com/typeofweb");
    }

    #[test]
    fn test_social_same_as_override() {
        let config = r#"
            [social]
            same_as = ["https://github.com/example"]
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.social.same_as, vec!["https://github.com/example"]);
        assert_eq!(config.social.twitter_site, "@mmiszy");
    }

    #[test]
    fn test_structured_data_logo() {
        let config = r#"
            [structured_data]
            logo_width = 800
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.structured_data.logo_width, 800);
        assert_eq!(config.structured_data.logo_height, 627);
    }
}
