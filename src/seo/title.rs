//! Page title assembly.
//!
//! ```text
//! [title, "Strona 2", site name]  ──►  "Post • Strona 2 • Type of Web"
//! [site name, "Strona 2"]          ──►  "Type of Web • Strona 2 • Blog o programowaniu"
//!                                                      (too short, description appended)
//! ```

use crate::config::SiteConfig;
use regex::Regex;
use std::sync::LazyLock;

/// Placeholder tokens left over from imported titles (`%%sitename%%`, ...).
static RE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)%%(title|page|sep|sitename)%%").unwrap());

/// Build the full `<title>` text.
///
/// Titles shorter than `[seo.min_title_len]` characters get
/// `separator + short_description` appended.
pub fn full_title(title: Option<&str>, page: Option<u32>, config: &SiteConfig) -> String {
    let site_name = config.site.name.as_str();
    let page_label = page.map(|n| config.seo.page_label_for(n));
    let page_label = page_label.as_deref().unwrap_or_default();

    let parts = match title.filter(|title| !title.is_empty()) {
        Some(title) => vec![title, page_label, site_name],
        None => vec![site_name, page_label],
    };

    let mut full = parts
        .into_iter()
        .map(strip_placeholders)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(config.seo.separator.as_str());

    let short_description = config.site.short_description.trim();
    if full.chars().count() < config.seo.min_title_len && !short_description.is_empty() {
        full.push_str(&config.seo.separator);
        full.push_str(short_description);
    }
    full
}

/// Remove placeholder tokens and surrounding whitespace from a title part.
fn strip_placeholders(part: &str) -> String {
    RE_PLACEHOLDER.replace_all(part, "").trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig::default()
    }

    #[test]
    fn test_title_with_site_name() {
        let title = "Jak działa Event Loop w przeglądarce i w Node.js";
        let full = full_title(Some(title), None, &config());
        assert_eq!(full, format!("{title} • Type of Web"));
    }

    #[test]
    fn test_boundary_49_chars_appends_description() {
        // 35 + " • ".len() (3) + "Type of Web".len() (11) = 49
        let title = "a".repeat(35);
        let joined = format!("{title} • Type of Web");
        assert_eq!(joined.chars().count(), 49);

        let full = full_title(Some(&title), None, &config());
        assert_eq!(full, format!("{joined} • Blog o programowaniu"));
    }

    #[test]
    fn test_boundary_50_chars_keeps_title() {
        let title = "a".repeat(36);
        let full = full_title(Some(&title), None, &config());
        assert_eq!(full.chars().count(), 50);
        assert_eq!(full, format!("{title} • Type of Web"));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 36 two-byte characters still make a 50-character title
        let title = "ż".repeat(36);
        let full = full_title(Some(&title), None, &config());
        assert_eq!(full, format!("{title} • Type of Web"));
    }

    #[test]
    fn test_no_title_uses_site_name_first() {
        let full = full_title(None, None, &config());
        assert_eq!(full, "Type of Web • Blog o programowaniu");

        let full = full_title(Some(""), Some(3), &config());
        assert_eq!(full, "Type of Web • Strona 3 • Blog o programowaniu");
    }

    #[test]
    fn test_page_label_between_title_and_site_name() {
        let title = "Wszystkie wpisy z kategorii JavaScript";
        let full = full_title(Some(title), Some(2), &config());
        assert_eq!(full, format!("{title} • Strona 2 • Type of Web"));
    }

    #[test]
    fn test_placeholders_are_stripped() {
        let title = "%%TITLE%% Programowanie funkcyjne w praktyce na co dzień %%sep%% %%SiteName%%";
        let full = full_title(Some(title), None, &config());
        assert_eq!(full, "Programowanie funkcyjne w praktyce na co dzień • Type of Web");
    }

    #[test]
    fn test_placeholder_only_part_is_dropped() {
        // Stripped first, so the emptied title leaves no dangling separator
        let full = full_title(Some("%%page%%"), Some(4), &config());
        assert_eq!(full, "Strona 4 • Type of Web • Blog o programowaniu");
        assert!(!full.starts_with(' '));

        let full = full_title(Some(" %%title%% %%SEP%% "), Some(2), &config());
        assert_eq!(full, "Strona 2 • Type of Web • Blog o programowaniu");

        let full = full_title(Some("%%sitename%%"), None, &config());
        assert_eq!(full, "Type of Web • Blog o programowaniu");
    }

    #[test]
    fn test_blank_title_part_is_dropped() {
        let full = full_title(Some("   "), None, &config());
        assert_eq!(full, "Type of Web • Blog o programowaniu");
    }

    #[test]
    fn test_custom_separator_and_threshold() {
        let mut config = config();
        config.seo.separator = " | ".into();
        config.seo.min_title_len = 10;
        config.site.name = "Blog".into();

        assert_eq!(full_title(Some("Hi"), None, &config), "Hi | Blog | Blog o programowaniu");
        assert_eq!(full_title(Some("Hello"), None, &config), "Hello | Blog");
    }
}
