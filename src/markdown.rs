//! Best-effort HTML → Markdown normalization for entry bodies.
//!
//! This is a fixed sequence of regex rewrites, not an HTML parser. Only a small
//! set of tags is translated (headings, list items, paragraphs, divs, line
//! breaks, bold); every other tag is dropped while its text is kept.
//!
//! Known non-normalizations:
//! - A heading whose closing tag is a different level (`<h1>..</h2>`) is not
//!   treated as a heading. Its tags are stripped like any unknown tag.
//! - `</li>` has no rule of its own and is removed by the generic strip.
//! - Nested tags of the same kind are not paired correctly; the first closer wins.
//! - Heading and bold content does not span line breaks.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

/// Convert an HTML fragment into Markdown-ish plain text.
///
/// Returns an empty string for empty input.
pub fn html_to_markdown(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let text = decode_unicode_escapes(html);
    let text = decode_html_entities(&text);

    let text = replace_headings(&text);
    let text = list_item_re().replace_all(&text, "\n- ");
    let text = paragraph_close_re().replace_all(&text, "\n\n");
    let text = div_close_re().replace_all(&text, "\n");
    let text = line_break_re().replace_all(&text, "\n");
    let text = bold_re().replace_all(&text, "**$1**");
    let text = strong_re().replace_all(&text, "**$1**");
    let text = any_tag_re().replace_all(&text, "");
    let text = blank_run_re().replace_all(&text, "\n\n");

    text.trim().to_string()
}

/// Decode `\uXXXX` escape sequences into literal characters.
///
/// A high/low surrogate pair is combined into one scalar value. A lone
/// surrogate cannot be represented in a Rust string and is left as written.
pub fn decode_unicode_escapes(s: &str) -> Cow<'_, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"\\u([0-9a-fA-F]{4})(?:\\u([0-9a-fA-F]{4}))?").unwrap()
    });

    re.replace_all(s, |caps: &Captures| {
        let whole = &caps[0];
        let first = hex_unit(&caps[1]);
        let second = caps.get(2).map(|m| hex_unit(m.as_str()));

        if let Some(low) = second
            && (0xD800..0xDC00).contains(&first)
            && (0xDC00..0xE000).contains(&low)
        {
            let combined = 0x10000 + ((first - 0xD800) << 10) + (low - 0xDC00);
            return char::from_u32(combined)
                .map(String::from)
                .unwrap_or_else(|| whole.to_string());
        }

        let mut out = String::new();
        let (first_raw, second_raw) = whole.split_at(6);
        push_unit(&mut out, first, first_raw);
        if let Some(unit) = second {
            push_unit(&mut out, unit, second_raw);
        }
        out
    })
}

fn hex_unit(digits: &str) -> u32 {
    // The regex guarantees exactly four hex digits.
    u32::from_str_radix(digits, 16).unwrap_or(0)
}

fn push_unit(out: &mut String, unit: u32, raw: &str) {
    match char::from_u32(unit) {
        Some(c) => out.push(c),
        None => out.push_str(raw),
    }
}

/// Decode HTML character references (`&amp;`, `&#233;`, `&#x1F600;`, `&nbsp;`, ...).
///
/// Unknown or invalid references are kept verbatim.
pub fn decode_html_entities(s: &str) -> Cow<'_, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"&(?:#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[A-Za-z][A-Za-z0-9]{0,31});").unwrap()
    });

    re.replace_all(s, |caps: &Captures| {
        let reference = &caps[0];
        match quick_xml::escape::unescape(reference) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => reference.to_string(),
        }
    })
}

/// `<hN ...>content</hN>` → `\n**content**\n`, only when both tags share a level.
fn replace_headings(s: &str) -> Cow<'_, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        let alternatives: Vec<String> = (1..=6)
            .map(|level| format!(r"<h{level}[^>]*>(.*?)</h{level}>"))
            .collect();
        Regex::new(&format!("(?i){}", alternatives.join("|"))).unwrap()
    });

    re.replace_all(s, |caps: &Captures| {
        let content = caps
            .iter()
            .skip(1)
            .flatten()
            .next()
            .map(|m| m.as_str())
            .unwrap_or_default();
        format!("\n**{content}**\n")
    })
}

fn list_item_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<li(?:\s[^>]*)?>").unwrap())
}

fn paragraph_close_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)</p>").unwrap())
}

fn div_close_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)</div>").unwrap())
}

fn line_break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<br\s*/?>").unwrap())
}

// `regex` has no backreferences, so `<b>` and `<strong>` get one rule each.
// That also keeps `<b>..</strong>` from pairing up.
fn bold_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<b(?:\s[^>]*)?>(.*?)</b>").unwrap())
}

fn strong_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<strong(?:\s[^>]*)?>(.*?)</strong>").unwrap())
}

fn any_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").unwrap())
}

fn blank_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{3,}").unwrap())
}
