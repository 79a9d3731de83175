use std::fs;

use markup::{build_document, generate_file, MarkupConfig, CLOSING_TAG, PROLOGUE};

#[test]
fn default_fixture_is_exactly_one_mebibyte() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test-fixtures").join("valid").join("sample-1mb.svg");

    let size = generate_file(&path, &MarkupConfig::default()).unwrap();

    assert_eq!(size, 1_048_576);
    assert_eq!(fs::metadata(&path).unwrap().len(), 1_048_576);
}

#[test]
fn two_runs_produce_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.svg");
    let second = dir.path().join("second.svg");
    let config = MarkupConfig::default();

    generate_file(&first, &config).unwrap();
    generate_file(&second, &config).unwrap();

    let a = fs::read(&first).unwrap();
    let b = fs::read(&second).unwrap();
    assert_eq!(a.len(), 1_048_576);
    assert_eq!(a[..300], b[..300]);
    assert_eq!(a, b);
}

#[test]
fn file_begins_with_prologue_and_holds_every_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.svg");

    generate_file(&path, &MarkupConfig::default()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with(PROLOGUE));
    assert_eq!(text.matches("<path ").count(), 1000);
    assert_eq!(text.matches(CLOSING_TAG).count(), 1);
    assert!(text.contains("transform=\"rotate(359.64 1975 775)\" />"));
}

#[test]
fn overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.svg");
    fs::write(&path, vec![b'z'; 2 * 1024 * 1024]).unwrap();
    let config = MarkupConfig::for_testing();

    let size = generate_file(&path, &config).unwrap();

    assert_eq!(size, config.target_bytes as u64);
    assert_eq!(fs::read(&path).unwrap(), build_document(&config));
}

#[test]
fn unwritable_parent_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, b"file").unwrap();

    let result = generate_file(&blocker.join("sample.svg"), &MarkupConfig::for_testing());
    assert!(result.is_err());
}
