//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn name() -> String {
        "Type of Web".into()
    }

    pub fn short_description() -> String {
        "Blog o programowaniu".into()
    }

    pub fn default_description() -> String {
        "Blog o programowaniu. Dla front-end i back-end developerów. Trochę o urokach pracy \
         zdalnej, ale przede wszystkim o: JavaScript, React, Vue, Angular, node.js, TypeScript, \
         HapiJS…"
            .into()
    }

    pub fn host() -> String {
        "https://typeofweb.com".into()
    }

    pub fn locale() -> String {
        "pl_PL".into()
    }

    pub fn language() -> String {
        "pl-PL".into()
    }
}

// ============================================================================
// [seo] Section Defaults
// ============================================================================

pub mod seo {
    pub fn separator() -> String {
        " • ".into()
    }

    pub const fn min_title_len() -> usize {
        50
    }

    pub const fn description_limit() -> usize {
        177
    }

    pub fn page_label() -> String {
        "Strona {n}".into()
    }

    pub fn pagination_segment() -> String {
        "strona".into()
    }

    pub fn robots() -> String {
        "index, follow, max-snippet:-1, max-image-preview:large, max-video-preview:-1".into()
    }

    pub fn profile() -> String {
        "https://gmpg.org/xfn/11".into()
    }

    pub fn index_title() -> String {
        "Strona główna".into()
    }
}

// ============================================================================
// [social] Section Defaults
// ============================================================================

pub mod social {
    pub fn publisher() -> String {
        "https://www.facebook.com/typeofweb".into()
    }

    pub fn fb_app_id() -> String {
        "1709793622637583".into()
    }

    pub fn twitter_card() -> String {
        "summary_large_image".into()
    }

    pub fn twitter_site() -> String {
        "@mmiszy".into()
    }

    pub fn same_as() -> Vec<String> {
        [
            "https://www.facebook.com/typeofweb",
            "https://www.instagram.com/michal_typeofweb/",
            "https://linkedin.com/in/mmiszczyszyn",
            "https://www.youtube.com/typeofweb",
            "https://twitter.com/mmiszy",
        ]
        .into_iter()
        .map(Into::into)
        .collect()
    }
}

// ============================================================================
// [structured_data] Section Defaults
// ============================================================================

pub mod structured_data {
    pub fn logo_url() -> String {
        "https://typeofweb.com/wp-content/uploads/2018/12/typeofweb-facebook-image-sharer.png"
            .into()
    }

    pub const fn logo_width() -> u32 {
        1200
    }

    pub const fn logo_height() -> u32 {
        627
    }
}
