use super::*;
use std::fs;

#[test]
fn bootstrap_creates_missing_file_with_empty_frame() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.xml");
    let result = bootstrap(&path, DEFAULT_CREATE_MODE).unwrap();
    assert!(structure_check(&result.doc));
    assert_eq!(result.path, path);
    assert!(path.exists());
}

#[test]
fn bootstrap_parses_existing_well_formed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("existing.xml");
    fs::write(&path, crate::frame::EMPTY_FRAME).unwrap();
    let result = bootstrap(&path, DEFAULT_CREATE_MODE).unwrap();
    assert!(structure_check(&result.doc));
    assert_eq!(result.path, path);
}

#[test]
fn bootstrap_rewrites_empty_file_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.xml");
    fs::write(&path, "").unwrap();
    let result = bootstrap(&path, DEFAULT_CREATE_MODE).unwrap();
    assert!(structure_check(&result.doc));
    assert_eq!(result.path, path);
}

#[test]
fn bootstrap_quarantines_nonempty_malformed_file_without_overwriting() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.xml");
    fs::write(&path, "not even xml").unwrap();
    let result = bootstrap(&path, DEFAULT_CREATE_MODE).unwrap();

    assert!(structure_check(&result.doc));
    assert_ne!(result.path, path, "bootstrap must adopt a sibling path, not overwrite the original");
    assert_eq!(fs::read_to_string(&path).unwrap(), "not even xml", "original file must be preserved");
    assert!(result.path.to_string_lossy().starts_with(&*path.to_string_lossy()));
}

#[test]
fn bootstrap_quarantines_file_that_fails_structure_check() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("incomplete.xml");
    fs::write(
        &path,
        r#"<datastores xmlns="urn:cesnet:tmc:datastores:file"><running lock=""/></datastores>"#,
    )
    .unwrap();
    let result = bootstrap(&path, DEFAULT_CREATE_MODE).unwrap();
    assert!(structure_check(&result.doc));
    assert_ne!(result.path, path);
}
