//! Tests for batch files on disk.

use oxo::{BatchConfig, batch};
use std::io::Write;

#[test]
fn test_batch_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
[[position]]
name = "win now"
board = "XX./OO./..."

[[position]]
name = "finished"
board = "XXX/OO./..."
"#
    )
    .expect("write batch");

    let config = BatchConfig::from_file(file.path()).expect("valid batch");
    assert_eq!(config.positions().len(), 2);

    let mut out = Vec::new();
    batch(file.path(), &mut out).expect("batch succeeds");
    let text = String::from_utf8(out).expect("utf-8 output");
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("win now"));
    assert!(lines[0].contains("best (0, 2)"));
    assert!(lines[1].contains("best none"));
    assert!(lines[1].contains("nodes 1"));
}

#[test]
fn test_missing_batch_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = BatchConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read batch file"));
}

#[test]
fn test_bad_board_in_batch_fails() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[[position]]\nname = \"bad\"\nboard = \"XO?......\"").expect("write batch");

    let mut out = Vec::new();
    let err = batch(file.path(), &mut out).unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid cell character"));
}

#[test]
fn test_unreachable_board_in_batch_is_still_analysed() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[[position]]\nname = \"top row\"\nboard = \"XXX/.../...\"").expect("write batch");

    let mut out = Vec::new();
    batch(file.path(), &mut out).expect("unbalanced boards are analysed");
    let text = String::from_utf8(out).expect("utf-8 output");
    assert!(text.contains("best none"));
    assert!(text.contains("value +1"));
}
