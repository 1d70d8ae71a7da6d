use crate::messages::Language;
use crate::watermark::STATE_FILE_NAME;
use std::path::{Path, PathBuf};

/// Default output file when neither CLI nor config names one.
pub const DEFAULT_OUTPUT: &str = "Notebook_Notes.md";

/// Default per-file size budget in bytes.
pub const DEFAULT_LIMIT: usize = 1_500_000;

/// Configuration required to run a conversion.
/// This decouples the logic from how the arguments were parsed (CLI/Config file).
#[derive(Clone, Debug)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub byte_limit: usize,
    pub state_file: PathBuf,
    pub language: Language,
    pub quiet: bool,
}

impl ConvertConfig {
    /// Config with defaults for everything but the input feed. The state file
    /// sits next to the output.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        let output = output.into();
        Self {
            input: input.into(),
            state_file: default_state_file(&output),
            output,
            byte_limit: DEFAULT_LIMIT,
            language: Language::English,
            quiet: true,
        }
    }
}

/// `last_entry_time.txt` in the same directory as `output`.
pub fn default_state_file(output: &Path) -> PathBuf {
    match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(STATE_FILE_NAME),
        _ => PathBuf::from(STATE_FILE_NAME),
    }
}

/// Split `notes/out.md` into (`notes/out`, `.md`). A path without an
/// extension yields an empty extension; dotfiles such as `.notes` are not
/// treated as extensions.
pub fn split_extension(path: &Path) -> (PathBuf, String) {
    match path.extension() {
        Some(ext) => {
            let base = path.with_extension("");
            (base, format!(".{}", ext.to_string_lossy()))
        }
        None => (path.to_path_buf(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_extension() {
        assert_eq!(
            split_extension(Path::new("notes/out.md")),
            (PathBuf::from("notes/out"), ".md".to_string())
        );
        assert_eq!(
            split_extension(Path::new("archive.tar.md")),
            (PathBuf::from("archive.tar"), ".md".to_string())
        );
        assert_eq!(
            split_extension(Path::new("notes/out")),
            (PathBuf::from("notes/out"), String::new())
        );
        assert_eq!(
            split_extension(Path::new(".notes")),
            (PathBuf::from(".notes"), String::new())
        );
    }

    #[test]
    fn state_file_follows_output_dir() {
        assert_eq!(
            default_state_file(Path::new("out/Notebook_Notes.md")),
            PathBuf::from("out/last_entry_time.txt")
        );
        assert_eq!(
            default_state_file(Path::new("Notebook_Notes.md")),
            PathBuf::from("last_entry_time.txt")
        );
    }
}
