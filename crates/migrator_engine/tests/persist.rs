use std::fs;

use migrator_engine::{AtomicFileWriter, PersistError};
use tempfile::TempDir;

#[test]
fn creates_missing_parent_dir() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("out").join("post.txt");

    let writer = AtomicFileWriter::new(&target);
    let written = writer.write("converted").unwrap();
    assert_eq!(written, target.as_path());
    assert_eq!(fs::read_to_string(&target).unwrap(), "converted");
}

#[test]
fn replaces_existing_output() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("post.txt");
    let writer = AtomicFileWriter::new(&target);

    writer.write("first").unwrap();
    writer.write("second").unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "second");
}

#[test]
fn no_partial_file_when_parent_is_a_file() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let writer = AtomicFileWriter::new(blocker.join("post.txt"));
    let result = writer.write("data");
    assert!(matches!(result, Err(PersistError::OutputDir(_))));
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "x");
}

#[test]
fn target_without_file_name_is_rejected() {
    let writer = AtomicFileWriter::new("..");
    let result = writer.write("data");
    assert!(matches!(result, Err(PersistError::NoFileName(_))));
}
