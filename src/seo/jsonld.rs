//! JSON-LD structured data.
//!
//! One static graph per site (Organization, WebSite, CollectionPage), emitted
//! unchanged on every page. Keys keep declaration order so the serialized
//! form is stable byte-for-byte.

use crate::config::SiteConfig;
use serde_json::{Value, json};

/// Build the structured data graph.
pub fn graph(config: &SiteConfig) -> Value {
    let site = &config.site;
    let root = site.root_url();
    let organization_id = format!("{root}#organization");
    let logo_id = format!("{root}#logo");
    let website_id = format!("{root}#website");

    json!({
        "@context": "https://schema.org",
        "@graph": [
            {
                "@type": "Organization",
                "@id": organization_id,
                "name": site.name,
                "url": root,
                "sameAs": config.social.same_as,
                "logo": {
                    "@type": "ImageObject",
                    "@id": logo_id,
                    "inLanguage": site.language,
                    "url": config.structured_data.logo_url,
                    "width": config.structured_data.logo_width,
                    "height": config.structured_data.logo_height,
                    "caption": site.name,
                },
                "image": { "@id": logo_id },
            },
            {
                "@type": "WebSite",
                "@id": website_id,
                "url": root,
                "name": site.name,
                "description": site.default_description,
                "publisher": { "@id": organization_id },
                "inLanguage": site.language,
            },
            {
                "@type": "CollectionPage",
                "@id": format!("{root}#webpage"),
                "url": root,
                "name": format!("{} &bull; {}", site.name, site.default_description),
                "isPartOf": { "@id": website_id },
                "about": { "@id": organization_id },
                "description": site.default_description,
                "inLanguage": site.language,
            },
        ],
    })
}

/// Compact serialization of [`graph`].
pub fn structured_data(config: &SiteConfig) -> String {
    graph(config).to_string()
}
