//! # gemini-history-export
//!
//! A CLI tool that converts an exported Gemini chat-history feed into Markdown
//! files sized for NotebookLM and other LLM context windows.
//!
//! ## What it does
//!
//! The export is an RSS-like XML document with one `<item>` per conversation
//! turn. Each item becomes a Markdown block: a dated heading, the title, and
//! the HTML body flattened to Markdown. Blocks are written in feed order into
//! `Notebook_Notes.md`, spilling into `Notebook_Notes_2.md`,
//! `Notebook_Notes_3.md`, ... whenever the next block would push a file past
//! the byte limit. A block is never split across files.
//!
//! ## Incremental export
//!
//! The timestamp of the newest converted entry is saved in
//! `last_entry_time.txt` next to the output. On the next run anything dated
//! at or before it is skipped, and new blocks are appended to the first output
//! file. Entries without a parsable date are always converted.
//!
//! A run interrupted mid-write leaves the state file at its previous value, so
//! the next run appends those entries again. Two runs against the same output
//! at the same time are not protected against.
//!
//! ## Usage
//!
//! ```sh
//! gemini-history-export ~/Downloads/MyActivity.xml
//!
//! # Custom output and a 500 KB budget per file
//! gemini-history-export MyActivity.xml -o notes/gemini.md --limit 500000
//! ```
//!
//! Preferences can be persisted in `~/.config/gemini-history-export/config.toml`.
pub mod extractor;
pub mod importer;
mod locales;
pub mod markdown;
pub mod messages;
pub mod pipeline;
pub mod splitter;
pub mod utils;
pub mod watermark;
