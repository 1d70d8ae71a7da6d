use clap::Parser;
use eyre::{Context, Result, eyre};
use gemini_history_export::messages::{Catalog, Language};
use gemini_history_export::pipeline;
use gemini_history_export::utils::{self, ConvertConfig};
use serde::Deserialize;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::fs;
use std::path::{Path, PathBuf};

/// Convert an exported Gemini chat-history XML feed into size-bounded Markdown files.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Exported XML feed to convert.
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output Markdown file. Later parts get a `_2`, `_3`, ... suffix.
    /// Defaults to ./Notebook_Notes.md if not set in config.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Maximum size of each output file in bytes.
    /// Defaults to 1500000 if not set in config.
    #[arg(long, value_name = "BYTES")]
    limit: Option<usize>,

    /// File holding the timestamp of the last converted entry.
    /// Defaults to last_entry_time.txt next to the output.
    #[arg(long, value_name = "PATH")]
    state: Option<PathBuf>,

    /// Path to a specific configuration file.
    /// Defaults to $XDG_CONFIG_HOME/gemini-history-export/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Message language (e.g. "en", "ja"). Detected from the locale if omitted.
    #[arg(long, value_name = "LANG")]
    lang: Option<String>,

    /// Log each file written and each fallback taken.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress standard output (messages and progress bar).
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Deserialize, Default)]
struct FileConfig {
    output: Option<PathBuf>,
    limit: Option<usize>,
    state_file: Option<PathBuf>,
    lang: Option<String>,
}

fn load_file_config(explicit_path: Option<&Path>) -> Result<FileConfig> {
    let path = if let Some(p) = explicit_path {
        if !p.exists() {
            return Err(eyre!("Config file not found: {}", p.display()));
        }
        Some(p.to_path_buf())
    } else {
        // Search: XDG/OS config dir, then nothing
        dirs::config_dir()
            .map(|d| d.join("gemini-history-export/config.toml"))
            .filter(|p| p.exists())
    };

    match path {
        None => Ok(FileConfig::default()),
        Some(p) => {
            let content = fs::read_to_string(&p)
                .wrap_err_with(|| format!("Failed to read config: {}", p.display()))?;
            toml::from_str(&content)
                .wrap_err_with(|| format!("Failed to parse config: {}", p.display()))
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    // Ignore the error if a logger is already installed.
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    // 1. Load config file (CLI path > default path)
    let file_cfg = load_file_config(cli.config.as_deref())?;

    // 2. Resolve output (CLI > Config > Default)
    let output = cli
        .output
        .or(file_cfg.output)
        .unwrap_or_else(|| PathBuf::from(utils::DEFAULT_OUTPUT));

    // 3. Resolve limit (CLI > Config > Default)
    let byte_limit = cli
        .limit
        .or(file_cfg.limit)
        .unwrap_or(utils::DEFAULT_LIMIT);
    if byte_limit == 0 {
        return Err(eyre!("--limit must be a positive number of bytes"));
    }

    // 4. Resolve state file (CLI > Config > next to output)
    let state_file = cli
        .state
        .or(file_cfg.state_file)
        .unwrap_or_else(|| utils::default_state_file(&output));

    // 5. Resolve language (CLI > Config > Locale)
    let language = cli
        .lang
        .or(file_cfg.lang)
        .map(|tag| Language::from_locale(&tag))
        .unwrap_or_else(Language::detect);

    // 6. Build the Convert Config
    let config = ConvertConfig {
        input: cli.input,
        output,
        byte_limit,
        state_file,
        language,
        quiet: cli.quiet,
    };

    // 7. Run the Business Logic
    let catalog = Catalog::new(config.language);
    let summary = pipeline::run(&config, &catalog)?;
    log::debug!(
        "{} entries: {} converted, {} skipped",
        summary.total_entries,
        summary.rendered,
        summary.skipped
    );
    Ok(())
}
