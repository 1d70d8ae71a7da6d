//! User-facing console messages.
//!
//! The pipeline never formats user text itself; it asks a [`MessageResolver`]
//! for it. [`Catalog`] is the built-in resolver backed by the tables in
//! `locales`. Tests can pass their own resolver to pin the wording.

use crate::locales;
use std::env;

pub use crate::locales::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    StartProcessing,
    ExtractedEntries,
    ConvertingMarkdown,
    AppendedToFile,
    WrittenToFile,
    ProcessingComplete,
    NoNewEntries,
    ErrorOccurred,
}

pub trait MessageResolver {
    fn resolve(&self, key: MessageKey, args: &[String]) -> String;
}

impl Language {
    /// Map a locale tag such as `ja_JP.UTF-8`, `zh-TW`, `Japanese_Japan.932` or
    /// `C` to a supported language. Anything unrecognized is English.
    pub fn from_locale(tag: &str) -> Self {
        let base = tag.split(['.', '@']).next().unwrap_or_default();
        let mut parts = base.split(['_', '-']);
        let primary = parts.next().unwrap_or_default().trim().to_ascii_lowercase();
        let region = parts.next().unwrap_or_default().trim().to_ascii_lowercase();

        if primary == "zh" || primary.starts_with("chinese") {
            return match region.as_str() {
                "tw" | "hk" | "mo" | "hant" | "taiwan" => Language::ChineseTraditional,
                _ => Language::ChineseSimplified,
            };
        }
        Self::ALL
            .into_iter()
            .find(|l| l.code() == primary || l.name().eq_ignore_ascii_case(&primary))
            .unwrap_or_default()
    }

    /// Detect from `LC_ALL`, `LC_MESSAGES` and `LANG`, in that order.
    pub fn detect() -> Self {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find(|v| !v.trim().is_empty())
            .map(|v| Self::from_locale(&v))
            .unwrap_or_default()
    }
}

/// Built-in message tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog {
    language: Language,
}

impl Catalog {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    fn template(&self, key: MessageKey) -> &'static str {
        locales::template(self.language, key)
            .or_else(|| locales::template(Language::English, key))
            .unwrap_or_default()
    }
}

impl MessageResolver for Catalog {
    fn resolve(&self, key: MessageKey, args: &[String]) -> String {
        fill(self.template(key), args)
    }
}

/// Substitute `{}` (sequential) and `{N}` (indexed) placeholders.
///
/// A placeholder without a matching argument is left as written.
pub fn fill(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut next = 0usize;
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let inner = &after[..close];
        let index = if inner.is_empty() {
            let i = next;
            next += 1;
            Some(i)
        } else {
            inner.parse::<usize>().ok()
        };
        match index.and_then(|i| args.get(i)) {
            Some(arg) => out.push_str(arg),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn fills_sequential_and_indexed() {
        assert_eq!(fill("a {} b {}", &args(&["1", "2"])), "a 1 b 2");
        assert_eq!(fill("{1}-{0}", &args(&["x", "y"])), "y-x");
    }

    #[test]
    fn missing_args_leave_placeholders() {
        assert_eq!(fill("{0} and {1}", &args(&["x"])), "x and {1}");
        assert_eq!(fill("open { brace", &[]), "open { brace");
        assert_eq!(fill("{name}", &args(&["x"])), "{name}");
    }

    #[test]
    fn locale_tags_map_to_languages() {
        assert_eq!(Language::from_locale("ja_JP.UTF-8"), Language::Japanese);
        assert_eq!(Language::from_locale("ja-JP"), Language::Japanese);
        assert_eq!(Language::from_locale("Japanese_Japan.932"), Language::Japanese);
        assert_eq!(Language::from_locale("en_US.UTF-8"), Language::English);
        assert_eq!(Language::from_locale("de_DE.UTF-8"), Language::German);
        assert_eq!(Language::from_locale("pt-BR"), Language::Portuguese);
        assert_eq!(Language::from_locale("C"), Language::English);
        assert_eq!(Language::from_locale(""), Language::English);
    }

    #[test]
    fn catalog_resolves_each_language() {
        let en = Catalog::new(Language::English);
        assert_eq!(
            en.resolve(MessageKey::WrittenToFile, &args(&["a.md"])),
            "Chat histories written to file: a.md"
        );
        let ja = Catalog::new(Language::Japanese);
        assert_eq!(
            ja.resolve(MessageKey::ProcessingComplete, &args(&["x", "y", "2"])),
            "✅ 完了しました: x より後の y までの履歴を延べ 2 ファイルに分割保存しました。"
        );
    }

    #[test]
    fn chinese_region_picks_script() {
        assert_eq!(Language::from_locale("zh_TW.UTF-8"), Language::ChineseTraditional);
        assert_eq!(Language::from_locale("zh-HK"), Language::ChineseTraditional);
        assert_eq!(Language::from_locale("Chinese_Taiwan.950"), Language::ChineseTraditional);
        assert_eq!(Language::from_locale("zh_CN.UTF-8"), Language::ChineseSimplified);
        assert_eq!(Language::from_locale("zh"), Language::ChineseSimplified);
    }

    #[test]
    fn every_language_resolves_shared_keys() {
        let written = args(&["a.md"]);
        for language in Language::ALL {
            let text = Catalog::new(language).resolve(MessageKey::WrittenToFile, &written);
            assert!(text.ends_with("a.md"), "{language:?}: {text}");
        }
        assert_eq!(
            Catalog::new(Language::German).resolve(MessageKey::WrittenToFile, &written),
            "Chatverläufe in Datei geschrieben: a.md"
        );
    }

    #[test]
    fn missing_key_falls_back_to_english() {
        let de = Catalog::new(Language::German);
        let en = Catalog::new(Language::English);
        let last = args(&["2026-02-11T10:00:00+09:00"]);
        assert_eq!(
            de.resolve(MessageKey::NoNewEntries, &last),
            en.resolve(MessageKey::NoNewEntries, &last)
        );
        assert!(!de.resolve(MessageKey::NoNewEntries, &last).is_empty());
    }
}
