//! Head tag descriptors.

use serde::Serialize;

/// Attribute a `<meta>` tag is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetaAttr {
    /// `<meta name="..." content="...">`
    Name,
    /// `<meta property="..." content="...">` (Open Graph, `article:*`, `fb:*`)
    Property,
}

impl MetaAttr {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

/// One element of the document head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tag", rename_all = "kebab-case")]
pub enum Tag {
    Title {
        text: String,
    },
    Meta {
        attr: MetaAttr,
        key: String,
        content: String,
    },
    Link {
        rel: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        href: String,
    },
    /// `<script type="application/ld+json">` with a serialized graph.
    JsonLd {
        json: String,
    },
}

impl Tag {
    pub fn title(text: impl Into<String>) -> Self {
        Self::Title { text: text.into() }
    }

    pub fn name(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Meta {
            attr: MetaAttr::Name,
            key: key.into(),
            content: content.into(),
        }
    }

    pub fn property(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Meta {
            attr: MetaAttr::Property,
            key: key.into(),
            content: content.into(),
        }
    }

    pub fn link(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            rel: rel.into(),
            title: None,
            href: href.into(),
        }
    }

    pub fn titled_link(
        rel: impl Into<String>,
        title: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        Self::Link {
            rel: rel.into(),
            title: Some(title.into()),
            href: href.into(),
        }
    }

    /// Dedup key the host uses: meta name/property, link rel, or the tag kind.
    pub fn key(&self) -> &str {
        match self {
            Self::Title { .. } => "title",
            Self::Meta { key, .. } => key,
            Self::Link { rel, .. } => rel,
            Self::JsonLd { .. } => "json-ld",
        }
    }

    /// `content` of a meta tag, `href` of a link, text of a title.
    pub fn value(&self) -> &str {
        match self {
            Self::Title { text } => text,
            Self::Meta { content, .. } => content,
            Self::Link { href, .. } => href,
            Self::JsonLd { json } => json,
        }
    }
}

/// Ordered head tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagSet(Vec<Tag>);

impl TagSet {
    pub fn push(&mut self, tag: Tag) {
        self.0.push(tag);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.0.iter()
    }

    /// First tag with the given key.
    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.0.iter().find(|tag| tag.key() == key)
    }

    /// Value of the first tag with the given key.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).map(Tag::value)
    }
}

#[cfg(test)]
impl TagSet {
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Tag keys in emission order.
    pub fn keys(&self) -> Vec<&str> {
        self.0.iter().map(Tag::key).collect()
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
