use crate::extractor::{Extraction, extract};
use crate::importer::{FeedEntry, load_feed};
use crate::messages::{MessageKey, MessageResolver};
use crate::splitter::{SplitReport, SplitTarget, split_and_save};
use crate::utils::{ConvertConfig, split_extension};
use crate::watermark::Watermark;
use chrono::{DateTime, FixedOffset};
use eyre::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;

/// Blocks rendered from one feed, in feed order.
#[derive(Debug, Default)]
pub struct RenderedEntries {
    pub blocks: Vec<String>,
    /// Latest parsed timestamp among rendered entries.
    pub newest: Option<DateTime<FixedOffset>>,
    pub skipped: usize,
}

/// Outcome of one conversion run.
#[derive(Debug)]
pub struct RunSummary {
    pub total_entries: usize,
    pub rendered: usize,
    pub skipped: usize,
    pub previous_watermark: Watermark,
    pub new_watermark: Watermark,
    pub report: SplitReport,
}

/// Run every entry through the extractor against `watermark`.
///
/// The returned `newest` is the maximum timestamp seen, not the last one in
/// feed order. Undated entries are rendered but never contribute to it.
pub fn render_entries(
    entries: &[FeedEntry],
    watermark: &Watermark,
    pb: &ProgressBar,
) -> RenderedEntries {
    let mut rendered = RenderedEntries::default();
    for entry in entries {
        match extract(entry, watermark) {
            Extraction::Skipped { timestamp } => {
                log::trace!("Skipped entry dated {}", timestamp.to_rfc3339());
                rendered.skipped += 1;
            }
            Extraction::Rendered { timestamp, block } => {
                if let Some(ts) = timestamp {
                    rendered.newest = Some(rendered.newest.map_or(ts, |n| n.max(ts)));
                }
                rendered.blocks.push(block);
            }
        }
        pb.inc(1);
    }
    rendered
}

fn make_bar(len: u64, quiet: bool) -> ProgressBar {
    if quiet || len == 0 {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len);
    match ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        Ok(style) => bar.set_style(style.progress_chars("=>-")),
        Err(e) => log::debug!("Falling back to default progress style: {}", e),
    }
    bar
}

/// Run [`execute`] and report a failure through `messages` on stderr.
///
/// The error is still returned so the caller can set the exit status.
pub fn run(config: &ConvertConfig, messages: &dyn MessageResolver) -> Result<RunSummary> {
    execute(config, messages).inspect_err(|e| {
        eprintln!("{}", messages.resolve(MessageKey::ErrorOccurred, &[format!("{e:#}")]));
    })
}

/// The main entry point for a conversion: load the feed and watermark, render
/// new entries, split them into output files and advance the watermark.
///
/// Concurrent runs against the same output or state file are not guarded
/// against.
pub fn execute(config: &ConvertConfig, messages: &dyn MessageResolver) -> Result<RunSummary> {
    let say = |key: MessageKey, args: &[String]| {
        let line = messages.resolve(key, args);
        if !config.quiet {
            println!("{line}");
        }
    };

    say(
        MessageKey::StartProcessing,
        &[config.input.display().to_string()],
    );
    let entries = load_feed(&config.input)?;
    log::info!("Loaded {} entries from {}", entries.len(), config.input.display());
    // Every item in the export is a Gemini turn, so both counts are the same.
    let count = entries.len().to_string();
    say(MessageKey::ExtractedEntries, &[count.clone(), count]);

    let previous = Watermark::load(&config.state_file);
    log::info!("Watermark: {}", previous);

    say(MessageKey::ConvertingMarkdown, &[]);
    let pb = make_bar(entries.len() as u64, config.quiet);
    let rendered = render_entries(&entries, &previous, &pb);
    pb.finish_and_clear();
    log::info!(
        "{} new entries, {} already processed",
        rendered.blocks.len(),
        rendered.skipped
    );

    let (base, extension) = split_extension(&config.output);
    if !rendered.blocks.is_empty()
        && let Some(dir) = base.parent().filter(|d| !d.as_os_str().is_empty())
    {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    let target = SplitTarget {
        base,
        extension,
        state_file: config.state_file.clone(),
    };
    let report = split_and_save(&rendered.blocks, &target, config.byte_limit, rendered.newest)?;

    for file in &report.files {
        let key = if file.appended {
            MessageKey::AppendedToFile
        } else {
            MessageKey::WrittenToFile
        };
        say(key, &[file.path.display().to_string()]);
    }

    let new_watermark = previous.advance(report.saved_watermark);
    if report.count() == 0 {
        say(MessageKey::NoNewEntries, &[previous.to_string()]);
    } else {
        say(
            MessageKey::ProcessingComplete,
            &[
                previous.to_string(),
                new_watermark.to_string(),
                report.count().to_string(),
            ],
        );
    }

    Ok(RunSummary {
        total_entries: entries.len(),
        rendered: rendered.blocks.len(),
        skipped: rendered.skipped,
        previous_watermark: previous,
        new_watermark,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn newest_is_max_not_last() {
        let entries = vec![
            FeedEntry::new("Thu, 12 Feb 2026 10:00:00 +0900", "newest", ""),
            FeedEntry::new("Tue, 10 Feb 2026 10:00:00 +0900", "oldest", ""),
            FeedEntry::new("not a date", "undated", ""),
        ];
        let rendered = render_entries(&entries, &Watermark::minimum(), &ProgressBar::hidden());
        assert_eq!(rendered.blocks.len(), 3);
        assert_eq!(rendered.skipped, 0);
        assert_eq!(rendered.newest, Some(ts("2026-02-12T10:00:00+09:00")));
    }

    #[test]
    fn rerun_at_previous_max_renders_nothing_dated() {
        let entries = vec![
            FeedEntry::new("Tue, 10 Feb 2026 10:00:00 +0900", "a", "x"),
            FeedEntry::new("Wed, 11 Feb 2026 10:00:00 +0900", "b", "y"),
        ];
        let first = render_entries(&entries, &Watermark::minimum(), &ProgressBar::hidden());
        let mark = Watermark::minimum().advance(first.newest);

        let second = render_entries(&entries, &mark, &ProgressBar::hidden());
        assert!(second.blocks.is_empty());
        assert_eq!(second.skipped, 2);
        assert_eq!(second.newest, None);
    }
}
