use crate::watermark::Watermark;
use chrono::{DateTime, FixedOffset};
use eyre::{Context, Result, eyre};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Where split output goes and where the watermark is persisted.
#[derive(Debug, Clone)]
pub struct SplitTarget {
    /// Output path without extension, e.g. `notes/Notebook_Notes`.
    pub base: PathBuf,
    /// Extension including the dot, e.g. `.md`. May be empty.
    pub extension: String,
    pub state_file: PathBuf,
}

impl SplitTarget {
    /// Path of the `ordinal`-th output file (1-based).
    pub fn path_for(&self, ordinal: usize) -> PathBuf {
        numbered_path(&self.base, &self.extension, ordinal)
    }
}

/// `base + ext` for the first file, `base_N + ext` for the N-th after that.
pub fn numbered_path(base: &Path, extension: &str, ordinal: usize) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    if ordinal > 1 {
        name.push(format!("_{ordinal}"));
    }
    name.push(extension);
    PathBuf::from(name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub ordinal: usize,
    /// Bytes written by this run, not counting content already in the file.
    pub bytes: usize,
    /// The file existed and the blocks were appended to it.
    pub appended: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReport {
    pub files: Vec<WrittenFile>,
    /// The watermark written to the state file, if it was rewritten.
    pub saved_watermark: Option<DateTime<FixedOffset>>,
}

impl SplitReport {
    pub fn count(&self) -> usize {
        self.files.len()
    }
}

/// Greedily pack blocks into consecutive ranges whose UTF-8 size stays within
/// `byte_limit`.
///
/// A new range starts only when the current one is non-empty and adding the
/// next block would exceed the limit, so a block larger than the limit ends
/// up alone in its own range. Blocks are never divided.
pub fn plan_chunks<S: AsRef<str>>(blocks: &[S], byte_limit: usize) -> Vec<Range<usize>> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut size = 0usize;

    for (i, block) in blocks.iter().enumerate() {
        let len = block.as_ref().len();
        if i > start && size + len > byte_limit {
            chunks.push(start..i);
            start = i;
            size = 0;
        }
        size += len;
    }
    if start < blocks.len() {
        chunks.push(start..blocks.len());
    }
    chunks
}

/// Write `blocks` across one or more files under `target` and, when anything
/// was written, persist `candidate` as the new watermark.
///
/// The first file is appended to if it already exists so that incremental
/// runs accumulate into it; every later file is created fresh. Returns an
/// empty report without touching the disk when `blocks` is empty.
pub fn split_and_save<S: AsRef<str>>(
    blocks: &[S],
    target: &SplitTarget,
    byte_limit: usize,
    candidate: Option<DateTime<FixedOffset>>,
) -> Result<SplitReport> {
    if byte_limit == 0 {
        return Err(eyre!("Byte limit must be positive"));
    }

    let mut report = SplitReport::default();
    for (idx, range) in plan_chunks(blocks, byte_limit).into_iter().enumerate() {
        let ordinal = idx + 1;
        let path = target.path_for(ordinal);
        let written = write_chunk(&path, ordinal, &blocks[range])?;
        if written.bytes > byte_limit {
            log::warn!(
                "{} holds a single {}-byte entry above the {}-byte limit",
                path.display(),
                written.bytes,
                byte_limit
            );
        }
        report.files.push(written);
    }

    if let Some(ts) = candidate.filter(|_| report.count() > 0) {
        Watermark::store(&target.state_file, ts)?;
        report.saved_watermark = Some(ts);
    }

    Ok(report)
}

fn write_chunk<S: AsRef<str>>(path: &Path, ordinal: usize, blocks: &[S]) -> Result<WrittenFile> {
    let appended = ordinal == 1 && path.exists();
    let file = if appended {
        OpenOptions::new().append(true).open(path)
    } else {
        File::create(path)
    }
    .wrap_err_with(|| format!("Failed to open output: {}", path.display()))?;

    let mut writer = BufWriter::new(file);
    let mut bytes = 0usize;
    for block in blocks {
        let block = block.as_ref();
        writer
            .write_all(block.as_bytes())
            .wrap_err_with(|| format!("Failed to write: {}", path.display()))?;
        bytes += block.len();
    }
    writer
        .flush()
        .wrap_err_with(|| format!("Failed to flush: {}", path.display()))?;

    log::info!(
        "{} {} ({} entries, {} bytes)",
        if appended { "Appended to" } else { "Wrote" },
        path.display(),
        blocks.len(),
        bytes
    );

    Ok(WrittenFile {
        path: path.to_path_buf(),
        ordinal,
        bytes,
        appended,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sized(lens: &[usize]) -> Vec<String> {
        lens.iter().map(|&n| "x".repeat(n)).collect()
    }

    #[test]
    fn empty_input_plans_nothing() {
        assert!(plan_chunks::<String>(&[], 10).is_empty());
    }

    #[test]
    fn packs_greedily() {
        assert_eq!(plan_chunks(&sized(&[4, 4, 4]), 8), vec![0..2, 2..3]);
        assert_eq!(plan_chunks(&sized(&[4, 4, 4]), 12), vec![0..3]);
        assert_eq!(plan_chunks(&sized(&[5, 5, 5]), 4), vec![0..1, 1..2, 2..3]);
    }

    #[test]
    fn exact_fit_does_not_split() {
        assert_eq!(plan_chunks(&sized(&[3, 7]), 10), vec![0..2]);
        assert_eq!(plan_chunks(&sized(&[3, 8]), 10), vec![0..1, 1..2]);
    }

    #[test]
    fn oversized_block_gets_its_own_chunk() {
        assert_eq!(plan_chunks(&sized(&[2, 50, 2]), 10), vec![0..1, 1..2, 2..3]);
        assert_eq!(plan_chunks(&sized(&[50]), 10), vec![0..1]);
    }

    #[test]
    fn limit_counts_bytes_not_chars() {
        // Each "あ" is three bytes in UTF-8.
        let blocks = vec!["あ".repeat(2), "あ".repeat(2)];
        assert_eq!(plan_chunks(&blocks, 8), vec![0..1, 1..2]);
        assert_eq!(plan_chunks(&blocks, 12), vec![0..2]);
    }

    #[test]
    fn numbering_is_sequential() {
        let base = Path::new("out/Notebook_Notes");
        assert_eq!(numbered_path(base, ".md", 1), PathBuf::from("out/Notebook_Notes.md"));
        assert_eq!(numbered_path(base, ".md", 2), PathBuf::from("out/Notebook_Notes_2.md"));
        assert_eq!(numbered_path(base, "", 3), PathBuf::from("out/Notebook_Notes_3"));
    }
}
