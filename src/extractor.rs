use crate::importer::FeedEntry;
use crate::markdown::html_to_markdown;
use crate::watermark::Watermark;
use chrono::{DateTime, FixedOffset, Weekday};
use std::fmt::Write;

/// `pubDate` layout after the weekday, e.g. `11 Feb 2026 14:50:38 +0900`.
pub const PUB_DATE_FORMAT: &str = "%d %b %Y %H:%M:%S %z";

/// Heading layout for a rendered entry.
pub const HEADING_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Heading used when an entry has no `pubDate` at all.
pub const UNKNOWN_DATE: &str = "Unknown Date";

/// Closing line of every rendered block.
pub const SEPARATOR: &str = "---\n\n";

/// Result of running one feed entry through the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Dated at or before the watermark; nothing was rendered.
    Skipped { timestamp: DateTime<FixedOffset> },
    /// A finished Markdown block. `timestamp` is `None` when the date was
    /// missing or unparsable.
    Rendered {
        timestamp: Option<DateTime<FixedOffset>>,
        block: String,
    },
}

impl Extraction {
    pub fn block(&self) -> Option<&str> {
        match self {
            Extraction::Skipped { .. } => None,
            Extraction::Rendered { block, .. } => Some(block.as_str()),
        }
    }
}

/// Parse a feed `pubDate` such as `Wed, 11 Feb 2026 14:50:38 +0900`.
///
/// The leading weekday is optional and not checked against the date.
/// Surrounding whitespace is ignored.
pub fn parse_pub_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    let rest = match raw.split_once(',') {
        Some((day, rest)) if day.trim().parse::<Weekday>().is_ok() => rest.trim_start(),
        _ => raw,
    };
    DateTime::parse_from_str(rest, PUB_DATE_FORMAT).ok()
}

/// Decide whether `entry` is new relative to `watermark` and render it if so.
///
/// Only a successfully parsed date can be skipped. Entries with a missing or
/// malformed date are always rendered, headed by the raw string (or
/// [`UNKNOWN_DATE`]).
pub fn extract(entry: &FeedEntry, watermark: &Watermark) -> Extraction {
    let raw_date = entry.pub_date.as_deref().unwrap_or_default();
    let timestamp = parse_pub_date(raw_date);

    let heading = match timestamp {
        Some(ts) if !watermark.admits(&ts) => {
            return Extraction::Skipped { timestamp: ts };
        }
        Some(ts) => ts.format(HEADING_FORMAT).to_string(),
        None if raw_date.trim().is_empty() => UNKNOWN_DATE.to_string(),
        None => {
            log::debug!("Unparsable pubDate {raw_date:?}, rendering with raw heading");
            raw_date.to_string()
        }
    };

    Extraction::Rendered {
        timestamp,
        block: render_block(&heading, entry.title.as_deref(), entry.html_body.as_deref()),
    }
}

fn render_block(heading: &str, title: Option<&str>, html_body: Option<&str>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write!(out, "## {heading}\n\n");

    if let Some(title) = title.filter(|t| !t.is_empty()) {
        let _ = write!(out, "**Title**: {title}\n\n");
    }

    if let Some(html) = html_body.filter(|b| !b.is_empty()) {
        let converted = html_to_markdown(html);
        if !converted.trim().is_empty() {
            let _ = write!(out, "{converted}\n\n");
        }
    }

    out.push_str(SEPARATOR);
    out
}
