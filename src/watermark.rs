use chrono::{DateTime, FixedOffset};
use eyre::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Default name of the state file that holds the watermark.
pub const STATE_FILE_NAME: &str = "last_entry_time.txt";

/// Timestamp of the newest entry handled by a previous run.
///
/// `None` stands for the minimum instant: nothing has been processed yet and
/// every dated entry is admitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Watermark(Option<DateTime<FixedOffset>>);

impl Watermark {
    pub fn minimum() -> Self {
        Self(None)
    }

    pub fn at(ts: DateTime<FixedOffset>) -> Self {
        Self(Some(ts))
    }

    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        self.0
    }

    /// True when `ts` is strictly newer than the watermark.
    pub fn admits(&self, ts: &DateTime<FixedOffset>) -> bool {
        self.0.is_none_or(|mark| *ts > mark)
    }

    /// Move forward to `candidate` if it is newer. Never moves backward.
    pub fn advance(self, candidate: Option<DateTime<FixedOffset>>) -> Self {
        match (self.0, candidate) {
            (Some(mark), Some(c)) if c <= mark => self,
            (_, Some(c)) => Self(Some(c)),
            (_, None) => self,
        }
    }

    /// Parse the state file contents. Accepts RFC 3339 and the space-separated
    /// ISO form.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        DateTime::parse_from_rfc3339(raw)
            .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z"))
            .ok()
            .map(Self::at)
    }

    /// Read the watermark from `path`.
    ///
    /// A missing, unreadable or malformed file yields [`Watermark::minimum`].
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                if path.exists() {
                    log::warn!("Could not read watermark {}: {}", path.display(), e);
                } else {
                    log::debug!("No watermark at {}, processing everything", path.display());
                }
                return Self::minimum();
            }
        };
        Self::parse(&content).unwrap_or_else(|| {
            log::warn!(
                "Ignoring malformed watermark {:?} in {}",
                content.trim(),
                path.display()
            );
            Self::minimum()
        })
    }

    /// Persist `ts` to `path` as RFC 3339 by writing a sibling temp file and
    /// renaming it over the target.
    pub fn store(path: &Path, ts: DateTime<FixedOffset>) -> Result<()> {
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)
            .wrap_err_with(|| format!("Failed to create temp file in {}", dir.display()))?;
        writeln!(tmp, "{}", ts.to_rfc3339()).wrap_err("Failed to write watermark")?;
        tmp.as_file_mut()
            .sync_all()
            .wrap_err("Failed to sync watermark")?;
        tmp.persist(path)
            .map_err(|e| e.error)
            .wrap_err_with(|| format!("Failed to save watermark: {}", path.display()))?;
        log::debug!("Watermark {} saved to {}", ts.to_rfc3339(), path.display());
        Ok(())
    }
}

impl std::fmt::Display for Watermark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(ts) => write!(f, "{}", ts.to_rfc3339()),
            None => write!(f, "(beginning)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn minimum_admits_everything() {
        assert!(Watermark::minimum().admits(&ts("0001-01-01T00:00:00+00:00")));
    }

    #[test]
    fn admits_is_strict_and_offset_aware() {
        let mark = Watermark::at(ts("2026-02-10T10:00:00+09:00"));
        assert!(!mark.admits(&ts("2026-02-10T10:00:00+09:00")));
        assert!(!mark.admits(&ts("2026-02-10T01:00:00+00:00")));
        assert!(mark.admits(&ts("2026-02-10T01:00:01+00:00")));
    }

    #[test]
    fn advance_never_goes_backward() {
        let mark = Watermark::at(ts("2026-02-10T10:00:00+09:00"));
        assert_eq!(mark.advance(None), mark);
        assert_eq!(mark.advance(Some(ts("2026-01-01T00:00:00+09:00"))), mark);
        let newer = ts("2026-02-11T10:00:00+09:00");
        assert_eq!(mark.advance(Some(newer)).timestamp(), Some(newer));
        assert_eq!(Watermark::minimum().advance(Some(newer)).timestamp(), Some(newer));
    }

    #[test]
    fn parses_both_iso_forms() {
        let expected = ts("2026-02-11T14:50:38+09:00");
        assert_eq!(Watermark::parse("2026-02-11T14:50:38+09:00\n"), Some(Watermark::at(expected)));
        assert_eq!(Watermark::parse("2026-02-11 14:50:38+09:00"), Some(Watermark::at(expected)));
        assert_eq!(Watermark::parse("not a date"), None);
    }

    #[test]
    fn load_falls_back_to_minimum() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.txt");
        assert_eq!(Watermark::load(&missing), Watermark::minimum());

        let garbage = dir.path().join("garbage.txt");
        fs::write(&garbage, "garbage").unwrap();
        assert_eq!(Watermark::load(&garbage), Watermark::minimum());
    }

    #[test]
    fn store_then_load_keeps_offset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STATE_FILE_NAME);
        let stamp = ts("2026-02-11T10:00:00+09:00");

        Watermark::store(&path, stamp).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "2026-02-11T10:00:00+09:00\n");

        let loaded = Watermark::load(&path).timestamp().unwrap();
        assert_eq!(loaded, stamp);
        assert_eq!(loaded.offset(), stamp.offset());
    }
}
