//! Integration tests for writing file sets to disk

use repo_creator::error::ErrorKind;
use repo_creator::workspace::{FileSet, materialize};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_materialize_creates_nested_files() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("project");
    let files = FileSet::new()
        .with_file("a/b.txt", "x")
        .with_file("c.txt", "y");

    materialize(&target, &files).unwrap();

    assert_eq!(fs::read_to_string(target.join("a/b.txt")).unwrap(), "x");
    assert_eq!(fs::read_to_string(target.join("c.txt")).unwrap(), "y");
}

#[test]
fn test_materialize_leaves_unrelated_files_alone() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path();
    fs::write(target.join("keep.txt"), "untouched").unwrap();
    fs::write(target.join("c.txt"), "old").unwrap();

    materialize(target, &FileSet::new().with_file("c.txt", "new")).unwrap();

    assert_eq!(fs::read_to_string(target.join("keep.txt")).unwrap(), "untouched");
    assert_eq!(fs::read_to_string(target.join("c.txt")).unwrap(), "new");
}

#[test]
fn test_materialize_rejects_escaping_paths() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("project");

    for path in ["../outside.txt", "/etc/absolute.txt"] {
        let err = materialize(&target, &FileSet::new().with_file(path, "x")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InternalFailure, "{path}");
    }
    assert!(!temp_dir.path().join("outside.txt").exists());
}

#[test]
fn test_default_files_mention_repository() {
    let temp_dir = TempDir::new().unwrap();
    let files = FileSet::default_for("demo", "");

    materialize(temp_dir.path(), &files).unwrap();

    let readme = fs::read_to_string(temp_dir.path().join("README.md")).unwrap();
    assert!(readme.starts_with("# demo"));
    assert!(temp_dir.path().join(".gitignore").exists());
}

#[test]
fn test_file_set_from_json() {
    let files = FileSet::from_json(r##"{"README.md": "# hi\n", "src/lib.rs": ""}"##).unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files.get("src/lib.rs"), Some(""));

    let err = FileSet::from_json(r#"["not", "a", "map"]"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InternalFailure);
}
