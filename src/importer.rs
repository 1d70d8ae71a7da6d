//! Loader for the exported chat-history feed.
//!
//! The export is an RSS-like document:
//!
//! ```xml
//! <rss xmlns:content="http://purl.org/rss/1.0/modules/content/">
//!   <channel>
//!     <item>
//!       <title>Conversation title</title>
//!       <pubDate>Wed, 11 Feb 2026 14:50:38 +0900</pubDate>
//!       <content:encoded><![CDATA[<p>HTML body</p>]]></content:encoded>
//!     </item>
//!   </channel>
//! </rss>
//! ```
//!
//! Only the first `channel` directly under the root and `item` directly under
//! it are recognized. The body element is matched by its namespace URI, so any
//! prefix bound to the content module works. Each item is reduced to a
//! [`FeedEntry`]; its fields stay raw strings and are interpreted later by the
//! extractor.

use encoding_rs::SHIFT_JIS;
use eyre::{Context, Result, eyre};
use quick_xml::NsReader;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, QName, ResolveResult};
use std::fs;
use std::path::Path;

/// One `<item>` of the feed, untouched apart from XML unescaping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntry {
    /// `pubDate`, e.g. `"Wed, 11 Feb 2026 14:50:38 +0900"`.
    pub pub_date: Option<String>,
    pub title: Option<String>,
    /// `content:encoded`, usually an HTML fragment wrapped in CDATA.
    pub html_body: Option<String>,
}

impl FeedEntry {
    pub fn new(
        pub_date: impl Into<String>,
        title: impl Into<String>,
        html_body: impl Into<String>,
    ) -> Self {
        Self {
            pub_date: Some(pub_date.into()),
            title: Some(title.into()),
            html_body: Some(html_body.into()),
        }
    }
}

/// Read, decode and parse the feed at `path`.
pub fn load_feed(path: &Path) -> Result<Vec<FeedEntry>> {
    if !path.exists() {
        return Err(eyre!("File not found: {}", path.display()));
    }
    let raw = fs::read(path).wrap_err_with(|| format!("Failed to read: {}", path.display()))?;
    let text = decode_feed_bytes(&raw)
        .wrap_err_with(|| format!("Failed to decode: {}", path.display()))?;
    parse_feed(&text).wrap_err_with(|| format!("Failed to parse feed: {}", path.display()))
}

/// Decode raw feed bytes: UTF-8 (with or without BOM) first, then Shift_JIS.
pub fn decode_feed_bytes(raw: &[u8]) -> Result<String> {
    if let Ok(text) = std::str::from_utf8(strip_utf8_bom(raw)) {
        return Ok(text.to_string());
    }
    let (text, had_errors) = SHIFT_JIS.decode_without_bom_handling(raw);
    if had_errors {
        return Err(eyre!("Input is neither valid UTF-8 nor Shift_JIS"));
    }
    log::debug!("Feed decoded as Shift_JIS");
    Ok(text.into_owned())
}

fn strip_utf8_bom(raw: &[u8]) -> &[u8] {
    raw.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(raw)
}

/// Namespace of the RSS content module that carries `encoded`.
const CONTENT_NS: &[u8] = b"http://purl.org/rss/1.0/modules/content/";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Field {
    PubDate,
    Title,
    Body,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tag {
    Channel,
    Item,
    Field(Field),
    Other,
}

fn classify(reader: &NsReader<&[u8]>, name: QName) -> Tag {
    match reader.resolve_element(name) {
        (ResolveResult::Unbound, local) => match local.as_ref() {
            b"channel" => Tag::Channel,
            b"item" => Tag::Item,
            b"pubDate" => Tag::Field(Field::PubDate),
            b"title" => Tag::Field(Field::Title),
            _ => Tag::Other,
        },
        (ResolveResult::Bound(Namespace(ns)), local)
            if ns == CONTENT_NS && local.as_ref() == b"encoded" =>
        {
            Tag::Field(Field::Body)
        }
        _ => Tag::Other,
    }
}

/// Parse feed XML into entries, in document order.
///
/// Errors when the XML is malformed or has no `channel` under its root.
pub fn parse_feed(xml: &str) -> Result<Vec<FeedEntry>> {
    let mut reader = NsReader::from_str(xml);
    let mut entries = Vec::new();

    // Tags from the root down to the current element.
    let mut stack: Vec<Tag> = Vec::new();
    // Channels opened under the root. Items are read from the first only.
    let mut channels = 0usize;
    let mut current: Option<FeedEntry> = None;
    let mut field: Option<(Field, String)> = None;

    loop {
        match reader.read_event().wrap_err("Malformed XML")? {
            Event::Start(e) => {
                let tag = classify(&reader, e.name());
                match (stack.len(), tag) {
                    (1, Tag::Channel) => channels += 1,
                    (2, Tag::Item) if in_first_channel(&stack, channels) => {
                        current = Some(FeedEntry::default());
                    }
                    (3, Tag::Field(f)) if current.is_some() => field = Some((f, String::new())),
                    _ => {}
                }
                stack.push(tag);
            }
            Event::Empty(e) => {
                let tag = classify(&reader, e.name());
                match (stack.len(), tag) {
                    (1, Tag::Channel) => channels += 1,
                    (2, Tag::Item) if in_first_channel(&stack, channels) => {
                        entries.push(FeedEntry::default());
                    }
                    (3, Tag::Field(f)) => {
                        if let Some(entry) = current.as_mut() {
                            set_field(entry, f, String::new());
                        }
                    }
                    _ => {}
                }
            }
            // Only text directly inside a field element counts.
            Event::Text(e) if stack.len() == 4 => {
                if let Some((_, buf)) = field.as_mut() {
                    buf.push_str(&e.unescape().wrap_err("Invalid text content")?);
                }
            }
            Event::CData(e) if stack.len() == 4 => {
                if let Some((_, buf)) = field.as_mut() {
                    buf.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(_) => {
                stack.pop();
                match stack.len() {
                    3 => {
                        if let (Some(entry), Some((f, value))) = (current.as_mut(), field.take()) {
                            set_field(entry, f, value);
                        }
                    }
                    2 => {
                        if let Some(entry) = current.take() {
                            entries.push(entry);
                        }
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if channels == 0 {
        return Err(eyre!("No <channel> element found in XML."));
    }
    if channels > 1 {
        log::warn!("Feed has {channels} channels, only the first was read");
    }
    Ok(entries)
}

fn in_first_channel(stack: &[Tag], channels: usize) -> bool {
    channels == 1 && stack.get(1) == Some(&Tag::Channel)
}

fn set_field(entry: &mut FeedEntry, field: Field, value: String) {
    match field {
        Field::PubDate => entry.pub_date = Some(value),
        Field::Title => entry.title = Some(value),
        Field::Body => entry.html_body = Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/">
  <channel>
    <title>Gemini Apps Activity</title>
    <item>
      <title>First &amp; foremost</title>
      <pubDate>Wed, 11 Feb 2026 14:50:38 +0900</pubDate>
      <content:encoded><![CDATA[<p>Hello <b>world</b></p>]]></content:encoded>
    </item>
    <item>
      <pubDate>Thu, 12 Feb 2026 09:00:00 +0900</pubDate>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn parses_items_in_order() {
        let entries = parse_feed(FEED).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0],
            FeedEntry::new(
                "Wed, 11 Feb 2026 14:50:38 +0900",
                "First & foremost",
                "<p>Hello <b>world</b></p>"
            )
        );
        assert_eq!(
            entries[1],
            FeedEntry {
                pub_date: Some("Thu, 12 Feb 2026 09:00:00 +0900".into()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn channel_title_is_not_an_item_field() {
        let entries = parse_feed(FEED).unwrap();
        assert!(entries.iter().all(|e| e.title.as_deref() != Some("Gemini Apps Activity")));
    }

    #[test]
    fn missing_channel_is_an_error() {
        let err = parse_feed("<rss><item/></rss>").unwrap_err();
        assert!(format!("{err:#}").contains("No <channel>"));
    }

    #[test]
    fn empty_channel_yields_no_entries() {
        assert!(parse_feed("<rss><channel/></rss>").unwrap().is_empty());
        assert!(parse_feed("<rss><channel></channel></rss>").unwrap().is_empty());
    }

    #[test]
    fn malformed_xml_is_an_error() {
        assert!(parse_feed("<rss><channel><item></channel></rss>").is_err());
    }

    #[test]
    fn decodes_utf8_with_bom() {
        let text = decode_feed_bytes(b"\xEF\xBB\xBF<rss/>").unwrap();
        assert_eq!(text, "<rss/>");
    }

    #[test]
    fn falls_back_to_shift_jis() {
        // "日本" in Shift_JIS
        let text = decode_feed_bytes(b"\x93\xfa\x96\x7b").unwrap();
        assert_eq!(text, "日本");
    }

    #[test]
    fn body_is_found_under_any_prefix() {
        let xml = r#"<rss xmlns:c="http://purl.org/rss/1.0/modules/content/">
<channel><item><title>t</title><c:encoded>body</c:encoded></item></channel></rss>"#;
        let entries = parse_feed(xml).unwrap();
        assert_eq!(entries[0].html_body.as_deref(), Some("body"));
    }

    #[test]
    fn content_prefix_bound_elsewhere_is_not_the_body() {
        let xml = r#"<rss xmlns:content="urn:other">
<channel><item><content:encoded>body</content:encoded></item></channel></rss>"#;
        let entries = parse_feed(xml).unwrap();
        assert_eq!(entries, vec![FeedEntry::default()]);
    }

    #[test]
    fn only_first_channel_is_read() {
        let xml = "<rss><channel><item><title>a</title></item></channel>\
                   <channel><item><title>b</title></item><item/></channel></rss>";
        let entries = parse_feed(xml).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title.as_deref(), Some("a"));
    }
}
