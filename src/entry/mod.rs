//! Editorial entries as sent by the CMS before save.
//!
//! # Wire Format
//!
//! ```json
//! {
//!   "collection": "posts",
//!   "slug": "hello-world",
//!   "data": { "title": "Hello, World!", "permalink": "hello-world" }
//! }
//! ```
//!
//! A batch is either a single entry object or an array of them; the output
//! keeps the same shape. Absent keys stay absent and `"slug": null` stays
//! `null`, so an entry no rule touches is written back unchanged.

mod slug;
mod transform;

pub use slug::Slugger;
pub use transform::transform_batch;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Field holding the derived permalink.
pub const PERMALINK: &str = "permalink";
/// Field holding the entry title.
pub const TITLE: &str = "title";
/// Field holding the author list of the `settings/authors` entry.
pub const AUTHORS: &str = "authors";
/// Derived author field.
pub const DISPLAY_NAME: &str = "displayName";

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum EntryError {
    #[error("invalid entry JSON")]
    Json(#[from] serde_json::Error),

    #[error("entry #{index} does not match the entry shape")]
    Shape {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

// ============================================================================
// Collection
// ============================================================================

/// CMS collection an entry belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Collection {
    Posts,
    Pages,
    LegacyPosts,
    Settings,
    /// Any collection without pre-save rules.
    Other(String),
}

impl Collection {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Posts => "posts",
            Self::Pages => "pages",
            Self::LegacyPosts => "legacy_posts",
            Self::Settings => "settings",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for Collection {
    fn from(name: String) -> Self {
        match name.as_str() {
            "posts" => Self::Posts,
            "pages" => Self::Pages,
            "legacy_posts" => Self::LegacyPosts,
            "settings" => Self::Settings,
            _ => Self::Other(name),
        }
    }
}

impl From<Collection> for String {
    fn from(collection: Collection) -> Self {
        match collection {
            Collection::Other(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

// ============================================================================
// Entry
// ============================================================================

/// Pre-save rule selected for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Derive `data.permalink` from `data.title`.
    Permalink,
    /// Derive `displayName` of every author in `data.authors`.
    AuthorNames,
    /// Leave the entry untouched.
    Identity,
}

/// One editorial content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub collection: Collection,

    /// Outer `None`: key absent. `Some(None)`: explicit `null`.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub slug: Option<Option<String>>,

    /// Editorial fields, in the order the CMS sent them.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<Map<String, Value>>,

    /// Other top-level keys (`path`, `raw`, `mediaFiles`, ...), carried through.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entry {
    #[cfg(test)]
    pub fn new(collection: Collection, slug: Option<&str>, data: Map<String, Value>) -> Self {
        Self {
            collection,
            slug: slug.map(|slug| Some(slug.into())),
            data: Some(data),
            extra: Map::new(),
        }
    }

    /// Select the pre-save rule. Exactly one applies to every entry.
    pub fn rule(&self) -> Rule {
        match &self.collection {
            Collection::Posts | Collection::Pages | Collection::LegacyPosts => Rule::Permalink,
            Collection::Settings if self.slug() == Some(AUTHORS) => Rule::AuthorNames,
            Collection::Settings | Collection::Other(_) => Rule::Identity,
        }
    }

    /// Slug, with absent and `null` both read as `None`.
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_ref().and_then(Option::as_deref)
    }

    /// Title as text; missing or non-string titles read as empty.
    pub fn title(&self) -> &str {
        self.data
            .as_ref()
            .and_then(|data| data.get(TITLE))
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

/// Deserialize a key that is present, so `null` is kept apart from absent.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

// ============================================================================
// Batch
// ============================================================================

/// Entries read from one input document.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryBatch {
    pub entries: Vec<Entry>,
    /// Input was a bare object rather than an array.
    single: bool,
}

impl EntryBatch {
    /// Parse an entry object or an array of entries.
    pub fn parse(input: &str) -> Result<Self, EntryError> {
        match serde_json::from_str::<Value>(input)? {
            Value::Array(items) => {
                let entries = items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| {
                        serde_json::from_value(item)
                            .map_err(|source| EntryError::Shape { index, source })
                    })
                    .collect::<Result<_, _>>()?;
                Ok(Self {
                    entries,
                    single: false,
                })
            }
            item => {
                let entry = serde_json::from_value(item)
                    .map_err(|source| EntryError::Shape { index: 0, source })?;
                Ok(Self {
                    entries: vec![entry],
                    single: true,
                })
            }
        }
    }

    /// Apply `f` to the entries, keeping the input shape.
    pub fn map(self, f: impl FnOnce(Vec<Entry>) -> Vec<Entry>) -> Self {
        Self {
            entries: f(self.entries),
            single: self.single,
        }
    }

    /// Serialize back in the shape the batch was read in.
    pub fn to_json(&self, pretty: bool) -> Result<String, EntryError> {
        let json = match (self.single, self.entries.as_slice()) {
            (true, [entry]) if pretty => serde_json::to_string_pretty(entry)?,
            (true, [entry]) => serde_json::to_string(entry)?,
            (_, entries) if pretty => serde_json::to_string_pretty(entries)?,
            (_, entries) => serde_json::to_string(entries)?,
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collection_from_name() {
        assert_eq!(Collection::from("posts".to_string()), Collection::Posts);
        assert_eq!(Collection::from("legacy_posts".to_string()), Collection::LegacyPosts);
        assert_eq!(
            Collection::from("authors".to_string()),
            Collection::Other("authors".into())
        );
        assert_eq!(String::from(Collection::Pages), "pages");
        assert_eq!(String::from(Collection::Other("tags".into())), "tags");
    }

    #[test]
    fn test_rule_selection() {
        let entry = |collection: &str, slug: Option<&str>| {
            Entry::new(collection.to_string().into(), slug, Map::new())
        };

        assert_eq!(entry("posts", None).rule(), Rule::Permalink);
        assert_eq!(entry("pages", Some("about")).rule(), Rule::Permalink);
        assert_eq!(entry("legacy_posts", None).rule(), Rule::Permalink);
        assert_eq!(entry("settings", Some("authors")).rule(), Rule::AuthorNames);
        assert_eq!(entry("settings", Some("general")).rule(), Rule::Identity);
        assert_eq!(entry("settings", None).rule(), Rule::Identity);
        assert_eq!(entry("authors", Some("authors")).rule(), Rule::Identity);
    }

    #[test]
    fn test_entry_title() {
        let entry: Entry = serde_json::from_value(json!({
            "collection": "posts",
            "data": { "title": "Hello" }
        }))
        .unwrap();
        assert_eq!(entry.title(), "Hello");

        let entry: Entry = serde_json::from_value(json!({
            "collection": "posts",
            "data": { "title": 42 }
        }))
        .unwrap();
        assert_eq!(entry.title(), "");
    }

    #[test]
    fn test_entry_keeps_extra_fields() {
        let input = json!({
            "collection": "posts",
            "slug": "hello",
            "path": "content/posts/hello.md",
            "partial": false,
            "data": { "title": "Hello" }
        });
        let entry: Entry = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(entry.extra["path"], "content/posts/hello.md");

        let output = serde_json::to_value(&entry).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_parse_single_and_array() {
        let single = EntryBatch::parse(r#"{"collection":"pages","data":{}}"#).unwrap();
        assert_eq!(single.entries.len(), 1);
        assert!(single.to_json(false).unwrap().starts_with('{'));

        let many = EntryBatch::parse(
            r#"[{"collection":"pages","data":{}},{"collection":"posts","data":{}}]"#,
        )
        .unwrap();
        assert_eq!(many.entries.len(), 2);
        assert!(many.to_json(false).unwrap().starts_with('['));
    }

    #[test]
    fn test_parse_missing_collection_fails() {
        let err = EntryBatch::parse(r#"[{"collection":"posts"},{"data":{}}]"#).unwrap_err();
        assert!(matches!(err, EntryError::Shape { index: 1, .. }));
        assert!(err.to_string().contains("#1"));
    }

    #[test]
    fn test_parse_invalid_json_fails() {
        let err = EntryBatch::parse("{not json").unwrap_err();
        assert!(matches!(err, EntryError::Json(_)));
    }

    #[test]
    fn test_untouched_entries_round_trip_unchanged() {
        let inputs = [
            json!({ "collection": "tags", "slug": null, "data": { "title": "React" } }),
            json!({ "collection": "tags", "slug": "react" }),
            json!({ "collection": "settings", "slug": null, "data": { "authors": [] } }),
            json!({ "collection": "settings", "slug": "authors" }),
            json!({ "collection": "media", "path": "static/img.png" }),
        ];
        for input in inputs {
            let batch = EntryBatch::parse(&input.to_string())
                .unwrap()
                .map(crate::entry::transform_batch);
            let output: Value = serde_json::from_str(&batch.to_json(false).unwrap()).unwrap();
            assert_eq!(output, input);
        }
    }

    #[test]
    fn test_null_and_absent_slug_are_distinct() {
        let null: Entry =
            serde_json::from_value(json!({ "collection": "pages", "slug": null })).unwrap();
        let absent: Entry = serde_json::from_value(json!({ "collection": "pages" })).unwrap();

        assert_eq!(null.slug, Some(None));
        assert_eq!(absent.slug, None);
        assert_eq!(null.slug(), None);
        assert_eq!(absent.slug(), None);
        assert_eq!(absent.data, None);
    }

    #[test]
    fn test_to_json_keeps_data_order() {
        let batch = EntryBatch::parse(
            r#"{"collection":"posts","data":{"title":"A","body":"x","date":"2020-01-01"}}"#,
        )
        .unwrap();
        assert_eq!(
            batch.to_json(false).unwrap(),
            r#"{"collection":"posts","data":{"title":"A","body":"x","date":"2020-01-01"}}"#
        );
    }
}
