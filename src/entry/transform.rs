//! Pre-save entry transforms.
//!
//! | Entry                          | Effect                                   |
//! |--------------------------------|------------------------------------------|
//! | `posts`, `pages`, `legacy_posts` | `data.permalink` = slug of `data.title` |
//! | `settings` with slug `authors` | every `data.authors[i].displayName` set  |
//! | anything else                  | unchanged                                |

use super::{AUTHORS, DISPLAY_NAME, Entry, PERMALINK, Rule, Slugger};
use serde_json::{Map, Value};

/// Transform one entry right before it is saved.
///
/// `slugger` tracks permalinks handed out earlier in the same batch.
/// An existing `permalink` is always overwritten.
pub fn transform(mut entry: Entry, slugger: &mut Slugger) -> Entry {
    match entry.rule() {
        Rule::Permalink => {
            let permalink = slugger.slug(entry.title());
            entry
                .data
                .get_or_insert_with(Map::new)
                .insert(PERMALINK.into(), Value::String(permalink));
        }
        Rule::AuthorNames => {
            if let Some(Value::Array(authors)) =
                entry.data.as_mut().and_then(|data| data.get_mut(AUTHORS))
            {
                for author in authors.iter_mut().filter_map(Value::as_object_mut) {
                    let display_name = AuthorName::from_record(author).display_name();
                    author.insert(DISPLAY_NAME.into(), Value::String(display_name));
                }
            }
        }
        Rule::Identity => {}
    }
    entry
}

/// Transform a batch with its own collision tracking.
pub fn transform_batch(entries: Vec<Entry>) -> Vec<Entry> {
    let mut slugger = Slugger::new();
    entries
        .into_iter()
        .map(|entry| transform(entry, &mut slugger))
        .collect()
}

/// Name parts of an author record (`meta.first_name`, `meta.last_name`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthorName<'a> {
    pub first: Option<&'a str>,
    pub last: Option<&'a str>,
}

impl<'a> AuthorName<'a> {
    /// Read name parts; missing `meta` or non-string parts read as absent.
    pub fn from_record(record: &'a Map<String, Value>) -> Self {
        let meta = record.get("meta").and_then(Value::as_object);
        let part = |key: &str| meta.and_then(|meta| meta.get(key)).and_then(Value::as_str);
        Self {
            first: part("first_name"),
            last: part("last_name"),
        }
    }

    /// Non-empty parts joined by a space, then trimmed as a whole.
    ///
    /// Inner whitespace is kept: `"Jan "` + `"Kowalski"` is `"Jan  Kowalski"`.
    pub fn display_name(&self) -> String {
        [self.first, self.last]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_owned()
    }
}
