//! Per-page SEO metadata.
//!
//! [`synthesize`] turns route state and page content into the ordered head
//! tags; [`render_head`] writes them as markup.
//!
//! # Tag Order
//!
//! ```text
//! title, description?, robots, googlebot, bingbot,
//! link profile, link canonical, link index, link next?, link prev?,
//! og:locale, og:type, og:title, og:description?, og:url, og:site_name,
//! article:publisher?, article:author?, fb:app_id,
//! twitter:card, twitter:site, json-ld
//! ```

mod jsonld;
mod links;
mod render;
mod tag;
mod title;

pub use jsonld::structured_data;
pub use links::{canonical_url, next_page, page_url, prev_page};
pub use render::render_head;
pub use tag::{Tag, TagSet};
pub use title::full_title;

use crate::config::SiteConfig;

/// Crawlers that get the same policy as `robots`.
const ROBOT_KEYS: [&str; 3] = ["robots", "googlebot", "bingbot"];

/// Current page context, rebuilt for every render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteState {
    /// Path as requested, e.g. `/strona/2/`.
    pub path: String,
    /// Listing page number, if the route is paginated.
    pub page_number: Option<u32>,
    /// Set for article pages.
    pub permalink: Option<String>,
}

/// Page-level content fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContent {
    pub title: Option<String>,
    /// `None` falls back to the site description; `Some("")` omits descriptions.
    pub description: Option<String>,
    /// Author profile URL for `article:author`.
    pub author: Option<String>,
}

/// Open Graph page type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageType {
    Article,
    Website,
}

impl PageType {
    pub fn of(route: &RouteState) -> Self {
        if route.permalink.is_some() {
            Self::Article
        } else {
            Self::Website
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Website => "website",
        }
    }
}

/// Synthesize the head tags for one page.
pub fn synthesize(route: &RouteState, content: &PageContent, config: &SiteConfig) -> TagSet {
    let site = &config.site;
    let seo = &config.seo;
    let social = &config.social;

    let title = full_title(content.title.as_deref(), route.page_number, config);
    let description = content
        .description
        .as_deref()
        .unwrap_or(&site.default_description);
    let canonical = canonical_url(route, config);
    let page_type = PageType::of(route);

    let mut tags = TagSet::default();

    tags.push(Tag::title(&title));
    if !description.is_empty() {
        tags.push(Tag::name(
            "description",
            truncate_chars(description, seo.description_limit),
        ));
    }
    for key in ROBOT_KEYS {
        tags.push(Tag::name(key, &seo.robots));
    }

    tags.push(Tag::link("profile", &seo.profile));
    tags.push(Tag::link("canonical", &canonical));
    tags.push(Tag::titled_link("index", &seo.index_title, site.root_url()));
    if let Some(next) = next_page(route.page_number) {
        tags.push(Tag::link("next", page_url(next, config)));
    }
    if let Some(prev) = prev_page(route.page_number) {
        tags.push(Tag::link("prev", page_url(prev, config)));
    }

    tags.push(Tag::property("og:locale", &site.locale));
    tags.push(Tag::property("og:type", page_type.as_str()));
    tags.push(Tag::property("og:title", title));
    if !description.is_empty() {
        tags.push(Tag::property("og:description", description));
    }
    tags.push(Tag::property("og:url", canonical));
    tags.push(Tag::property("og:site_name", &site.name));

    if page_type == PageType::Article {
        tags.push(Tag::property("article:publisher", &social.publisher));
        if let Some(author) = content.author.as_deref().filter(|a| !a.is_empty()) {
            tags.push(Tag::property("article:author", author));
        }
    }

    tags.push(Tag::property("fb:app_id", &social.fb_app_id));
    tags.push(Tag::name("twitter:card", &social.twitter_card));
    tags.push(Tag::name("twitter:site", &social.twitter_site));

    tags.push(Tag::JsonLd {
        json: structured_data(config),
    });

    tags
}

/// First `max` characters of `s`.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
