//! Head markup rendering.
//!
//! Writes a [`TagSet`] as a `<head>` fragment, one element per line:
//!
//! ```html
//! <title>Post • Type of Web</title>
//! <meta name="description" content="..."/>
//! <link rel="canonical" href="https://typeofweb.com/post/"/>
//! <script type="application/ld+json">{"@context":...}</script>
//! ```

use super::tag::{Tag, TagSet};
use anyhow::Result;
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::{Cursor, Write};

pub type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Render tags as head markup.
pub fn render_head(tags: &TagSet) -> Result<String> {
    if tags.is_empty() {
        return Ok(String::new());
    }

    let mut writer = Writer::new(Cursor::new(Vec::with_capacity(4096)));
    for tag in tags {
        write_tag(&mut writer, tag)?;
        writer.get_mut().write_all(b"\n")?;
    }
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

fn write_tag(writer: &mut XmlWriter, tag: &Tag) -> Result<()> {
    match tag {
        Tag::Title { text } => write_text_element(writer, "title", text),
        Tag::Meta { attr, key, content } => write_empty_elem(
            writer,
            "meta",
            &[(attr.as_str(), key.as_str()), ("content", content.as_str())],
        ),
        Tag::Link { rel, title, href } => {
            let mut attrs = vec![("rel", rel.as_str())];
            if let Some(title) = title {
                attrs.push(("title", title.as_str()));
            }
            attrs.push(("href", href.as_str()));
            write_empty_elem(writer, "link", &attrs)
        }
        Tag::JsonLd { json } => write_json_ld(writer, json),
    }
}

/// Write a text element: `<tag>text</tag>`.
#[inline]
fn write_text_element(writer: &mut XmlWriter, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Write an empty element with attributes: `<tag attr1="val1" ... />`.
#[inline]
fn write_empty_elem(writer: &mut XmlWriter, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

/// Write JSON-LD unescaped; only `</` is broken up so the script cannot close early.
fn write_json_ld(writer: &mut XmlWriter, json: &str) -> Result<()> {
    let mut elem = BytesStart::new("script");
    elem.push_attribute(("type", "application/ld+json"));
    writer.write_event(Event::Start(elem))?;
    writer.write_event(Event::Text(BytesText::from_escaped(json.replace("</", "<\\/"))))?;
    writer.write_event(Event::End(BytesEnd::new("script")))?;
    Ok(())
}
