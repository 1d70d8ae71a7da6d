use chrono::DateTime;
use gemini_history_export::splitter::{SplitTarget, split_and_save};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn target(temp: &TempDir) -> SplitTarget {
    SplitTarget {
        base: temp.path().join("notes"),
        extension: ".md".into(),
        state_file: temp.path().join("last_entry_time.txt"),
    }
}

fn stamp() -> chrono::DateTime<chrono::FixedOffset> {
    DateTime::parse_from_rfc3339("2026-02-11T10:00:00+09:00").unwrap()
}

#[test]
fn empty_input_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let t = target(&temp);
    let report = split_and_save::<String>(&[], &t, 100, Some(stamp())).unwrap();
    assert_eq!(report.count(), 0);
    assert_eq!(report.saved_watermark, None);
    assert!(!t.path_for(1).exists());
    assert!(!t.state_file.exists());
}

#[test]
fn oversized_block_gets_exactly_one_file() {
    let temp = TempDir::new().unwrap();
    let t = target(&temp);
    let big = "x".repeat(500);

    let report = split_and_save(&[big.clone()], &t, 10, Some(stamp())).unwrap();
    assert_eq!(report.count(), 1);
    assert_eq!(report.files[0].bytes, 500);
    assert_eq!(fs::read_to_string(t.path_for(1)).unwrap(), big);
    assert!(!t.path_for(2).exists());
}

#[test]
fn file_count_matches_greedy_packing() {
    let temp = TempDir::new().unwrap();
    let t = target(&temp);
    let blocks = ["aaaa", "bbbb", "cccc", "dd", "eeeeeeeeeeee", "f"];

    let report = split_and_save(&blocks, &t, 8, None).unwrap();
    // [aaaa bbbb] [cccc dd] [eeeeeeeeeeee] [f]
    assert_eq!(report.count(), 4);
    let contents: Vec<String> = (1..=4).map(|n| fs::read_to_string(t.path_for(n)).unwrap()).collect();
    assert_eq!(contents, vec!["aaaabbbb", "ccccdd", "eeeeeeeeeeee", "f"]);
    assert!(!t.state_file.exists());
}

#[test]
fn only_first_file_is_appended() {
    let temp = TempDir::new().unwrap();
    let t = target(&temp);
    fs::write(t.path_for(1), "old-first|").unwrap();
    fs::write(t.path_for(2), "stale second").unwrap();

    let report = split_and_save(&["12345", "67890"], &t, 5, Some(stamp())).unwrap();
    assert!(report.files[0].appended);
    assert!(!report.files[1].appended);
    assert_eq!(fs::read_to_string(t.path_for(1)).unwrap(), "old-first|12345");
    assert_eq!(fs::read_to_string(t.path_for(2)).unwrap(), "67890");
}

#[test]
fn watermark_saved_after_write() {
    let temp = TempDir::new().unwrap();
    let t = target(&temp);
    let report = split_and_save(&["block"], &t, 100, Some(stamp())).unwrap();
    assert_eq!(report.saved_watermark, Some(stamp()));
    assert_eq!(
        fs::read_to_string(&t.state_file).unwrap(),
        "2026-02-11T10:00:00+09:00\n"
    );
}

#[test]
fn zero_limit_is_rejected() {
    let temp = TempDir::new().unwrap();
    assert!(split_and_save(&["x"], &target(&temp), 0, None).is_err());
}
