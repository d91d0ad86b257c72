//! `[site]` section configuration.
//!
//! Site identity shared by page titles, canonical links and structured data.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in blogmeta.toml - site identity.
///
/// # Example
/// ```toml
/// [site]
/// name = "Type of Web"
/// short_description = "Blog o programowaniu"
/// host = "https://typeofweb.com"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteInfo {
    /// Site name, the trailing part of every page title.
    #[serde(default = "defaults::site::name")]
    #[educe(Default = defaults::site::name())]
    pub name: String,

    /// Appended to titles that are too short to be informative.
    #[serde(default = "defaults::site::short_description")]
    #[educe(Default = defaults::site::short_description())]
    pub short_description: String,

    /// Description used when a page provides none.
    #[serde(default = "defaults::site::default_description")]
    #[educe(Default = defaults::site::default_description())]
    pub default_description: String,

    /// Absolute base URL without trailing slash (e.g., `https://example.com`).
    #[serde(default = "defaults::site::host")]
    #[educe(Default = defaults::site::host())]
    pub host: String,

    /// Open Graph locale (e.g., `pl_PL`).
    #[serde(default = "defaults::site::locale")]
    #[educe(Default = defaults::site::locale())]
    pub locale: String,

    /// BCP 47 language tag for structured data (e.g., `pl-PL`).
    #[serde(default = "defaults::site::language")]
    #[educe(Default = defaults::site::language())]
    pub language: String,
}

impl SiteInfo {
    /// Site root URL with a trailing slash.
    pub fn root_url(&self) -> String {
        format!("{}/", self.host)
    }
}
