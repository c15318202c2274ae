use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use tempfile::TempDir;

use super::*;

#[test]
fn splits_on_newlines_and_strips_crlf() {
    let lines = read_lines(Cursor::new("CHECK a.c\r\na.c:1:1: warning: x\nlast")).unwrap();
    assert_eq!(lines, vec!["CHECK a.c", "a.c:1:1: warning: x", "last"]);
}

#[test]
fn trailing_newline_does_not_add_empty_line() {
    let lines = read_lines(Cursor::new("one\ntwo\n")).unwrap();
    assert_eq!(lines, vec!["one", "two"]);
}

#[test]
fn blank_lines_are_kept() {
    let lines = read_lines(Cursor::new("one\n\ntwo\n")).unwrap();
    assert_eq!(lines, vec!["one", "", "two"]);
}

#[test]
fn empty_input_yields_no_lines() {
    let lines = read_lines(Cursor::new("")).unwrap();
    assert!(lines.is_empty());
}

#[test]
fn invalid_utf8_is_decoded_lossily() {
    let bytes: &[u8] = b"a.c:3:1: warning: bad \xff byte\nok\n";
    let lines = read_lines(Cursor::new(bytes)).unwrap();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("a.c:3:1: warning: bad "));
    assert!(lines[0].contains('\u{FFFD}'));
}

#[test]
fn dash_means_stdin() {
    assert_eq!(LogSource::from(PathBuf::from("-")), LogSource::Stdin);
    assert_eq!(
        LogSource::from(PathBuf::from("build.log")),
        LogSource::File(PathBuf::from("build.log"))
    );
}

#[test]
fn source_display() {
    assert_eq!(LogSource::Stdin.to_string(), "<stdin>");
    assert_eq!(
        LogSource::File(PathBuf::from("logs/build.log")).to_string(),
        "logs/build.log"
    );
}

#[test]
fn sources_are_concatenated_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.log");
    let second = temp_dir.path().join("second.log");
    fs::write(&first, "CHECK a.c\n").unwrap();
    fs::write(&second, "a.c:1:1: warning: x\n").unwrap();

    let lines = read_sources(&[LogSource::File(first), LogSource::File(second)]).unwrap();

    assert_eq!(lines, vec!["CHECK a.c", "a.c:1:1: warning: x"]);
}

#[test]
fn missing_file_is_a_file_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.log");

    let err = read_sources(&[LogSource::File(missing.clone())]).unwrap_err();

    match err {
        SmatchDigestError::FileRead { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other:?}"),
    }
}
