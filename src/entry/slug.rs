//! Permalink slugification.
//!
//! Converts entry titles to URL path segments the way heading anchors are
//! generated: lower-case, punctuation stripped, whitespace runs joined by `-`.
//! Letters outside ASCII are kept (`"Żółć"` → `"żółć"`).

use regex::Regex;
use std::{collections::HashMap, sync::LazyLock};

/// Anything that is not a letter, mark, number, connector, hyphen or whitespace.
static RE_NON_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{M}\p{N}\p{Pc}\s-]").unwrap());

/// Convert text to a slug without collision tracking.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = RE_NON_SLUG.replace_all(&lowered, "");
    stripped.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Slug generator that keeps slugs unique within one batch.
///
/// The second occurrence of `hello` becomes `hello-2`, the third `hello-3`.
/// Create one per batch; state never outlives the batch that owns it.
#[derive(Debug, Default)]
pub struct Slugger {
    /// Slugs handed out so far, mapped to the last suffix tried for them.
    occurrences: HashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slugify `text`, suffixing it if the result was already handed out.
    ///
    /// Empty slugs are returned as-is and never suffixed.
    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        if base.is_empty() {
            return base;
        }

        let mut slug = base.clone();
        while self.occurrences.contains_key(&slug) {
            let count = self.occurrences.entry(base.clone()).or_insert(1);
            *count += 1;
            slug = format!("{base}-{count}");
        }
        self.occurrences.insert(slug.clone(), 1);
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("TypeScript: typy generyczne"), "typescript-typy-generyczne");
    }

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("Co to jest React?!"), "co-to-jest-react");
        assert_eq!(slugify("node.js & npm (2020)"), "nodejs-npm-2020");
        assert_eq!(slugify("a/b\\c#d%e"), "abcde");
    }

    #[test]
    fn test_slugify_collapses_whitespace() {
        assert_eq!(slugify("  many   spaces\there \n "), "many-spaces-here");
    }

    #[test]
    fn test_slugify_keeps_hyphens_and_underscores() {
        assert_eq!(slugify("front-end vs back_end"), "front-end-vs-back_end");
    }

    #[test]
    fn test_slugify_keeps_unicode_letters() {
        assert_eq!(slugify("Żółta Łódź"), "żółta-łódź");
        assert_eq!(slugify("你好 世界"), "你好-世界");
    }

    #[test]
    fn test_slugify_empty_and_punctuation_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("?!..."), "");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        for title in ["Hello, World!", "Żółta Łódź", "Angular 2+ — co nowego?", "a - b"] {
            let once = slugify(title);
            assert_eq!(slugify(&once), once, "not idempotent for {title:?}");
        }
    }

    #[test]
    fn test_slugger_suffixes_duplicates() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Hello"), "hello");
        assert_eq!(slugger.slug("Hello"), "hello-2");
        assert_eq!(slugger.slug("hello!"), "hello-3");
        assert_eq!(slugger.slug("Other"), "other");
    }

    #[test]
    fn test_slugger_generated_suffix_counts_as_taken() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("a"), "a");
        assert_eq!(slugger.slug("a"), "a-2");
        // A title that naturally slugs to "a-2" must not reuse it
        assert_eq!(slugger.slug("A 2"), "a-2-2");
    }

    #[test]
    fn test_slugger_natural_suffix_then_duplicate() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("a 2"), "a-2");
        assert_eq!(slugger.slug("a"), "a");
        assert_eq!(slugger.slug("a"), "a-3");
    }

    #[test]
    fn test_slugger_empty_never_suffixed() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug(""), "");
        assert_eq!(slugger.slug("   "), "");
    }

    #[test]
    fn test_fresh_slugger_forgets_previous_batch() {
        let mut first = Slugger::new();
        assert_eq!(first.slug("Hello"), "hello");

        let mut second = Slugger::new();
        assert_eq!(second.slug("Hello"), "hello");
    }
}
