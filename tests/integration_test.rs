//! Integration tests for file_comfort
//!
//! These tests drive the public API end to end on temporary directories:
//! listing, renaming with a dictionary, dictionary-driven text replacement
//! and traversal.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use file_comfort::utils::dictionary::load_dictionary;
use file_comfort::{
    children, dirs, files, rename_with_dictionary, replace_from_mapping, traverse, with_ext,
    FileTarget, Traverse,
};

/// Three files and two subdirectories, each with one file inside
fn temp_directory() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let root = dir.path();
    fs::write(root.join("test1.txt"), "test1").unwrap();
    fs::write(root.join("test2.txt"), "test2").unwrap();
    fs::write(root.join("test.py"), "print('hello')").unwrap();

    fs::create_dir(root.join("subdir1")).unwrap();
    fs::create_dir(root.join("subdir2")).unwrap();
    fs::write(root.join("subdir1").join("subfile1.txt"), "subfile1").unwrap();
    fs::write(root.join("subdir2").join("subfile2.py"), "print('subfile2')").unwrap();
    dir
}

fn file_names(dir: &Path) -> HashSet<String> {
    files(dir)
        .expect("Failed to list files")
        .map(|entry| {
            entry
                .expect("Failed to read entry")
                .file_name()
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect()
}

#[test]
fn test_listing() {
    let dir = temp_directory();

    let child_items: Vec<_> = children(dir.path()).unwrap().collect::<Result<_, _>>().unwrap();
    assert_eq!(child_items.len(), 5); // 3 files + 2 directories

    let directories: Vec<_> = dirs(dir.path()).unwrap().collect::<Result<_, _>>().unwrap();
    assert_eq!(directories.len(), 2);
    assert!(directories.iter().all(|d| d.is_dir()));

    let txt_files: Vec<_> = with_ext(dir.path(), ".txt")
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(txt_files.len(), 2);
    assert!(txt_files.iter().all(|f| f.extension().unwrap() == "txt"));

    let py_files: Vec<_> = with_ext(dir.path(), ".py").unwrap().collect::<Result<_, _>>().unwrap();
    assert_eq!(py_files.len(), 1);
}

#[test]
fn test_rename_files_with_dictionary() {
    let dir = temp_directory();
    let dictionary_path = dir.path().join("subdir2").join("renames.json");
    fs::write(&dictionary_path, r#"{"test1": "new1", "test2": "new2"}"#).unwrap();

    let mapping = load_dictionary(&dictionary_path).unwrap();
    let target = FileTarget::from_path(dir.path()).unwrap();
    let results = rename_with_dictionary(&target, &mapping).unwrap();

    assert_eq!(results.len(), 2);
    let names = file_names(dir.path());
    assert!(names.contains("new1.txt"));
    assert!(names.contains("new2.txt"));
    assert!(names.contains("test.py"));
    assert!(!names.contains("test1.txt"));
    assert!(!names.contains("test2.txt"));
}

#[test]
fn test_replace_with_dictionary_file() {
    let dir = temp_directory();
    let dictionary_path = dir.path().join("chain.json");
    fs::write(&dictionary_path, r#"{"A": "B", "B": "C"}"#).unwrap();
    let target = dir.path().join("letters.txt");
    fs::write(&target, "AB").unwrap();

    let mapping = load_dictionary(&dictionary_path).unwrap();
    let written = replace_from_mapping(&target, &mapping, None, true).unwrap();

    assert_eq!(written, target);
    assert_eq!(fs::read_to_string(&target).unwrap(), "CC");
}

#[test]
fn test_app_replace_writes_output() {
    let dir = temp_directory();
    let source = dir.path().join("test1.txt");
    let output = dir.path().join("out.txt");

    file_comfort::app::run_replace(&source, "test", "prod", Some(output.as_path())).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "prod1");
    assert_eq!(fs::read_to_string(&source).unwrap(), "test1");
}

#[test]
fn test_app_reports_missing_dictionary() {
    let dir = temp_directory();
    let err = file_comfort::app::run_replace_with_dictionary(
        &dir.path().join("test1.txt"),
        &dir.path().join("missing.json"),
        None,
        false,
    )
    .unwrap_err();
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_traverse_whole_tree() {
    let dir = temp_directory();

    let shallow = traverse(dir.path(), None::<fn(&Path) -> bool>, Some(0), true)
        .unwrap()
        .into_paths();
    assert_eq!(shallow.len(), 5);

    let python: HashSet<_> = Traverse::new(dir.path())
        .predicate(|p| p.extension().map_or(false, |e| e == "py"))
        .collect_flat()
        .unwrap()
        .into_iter()
        .collect();
    let expected: HashSet<_> = [
        dir.path().join("test.py"),
        dir.path().join("subdir2").join("subfile2.py"),
    ]
    .into_iter()
    .collect();
    assert_eq!(python, expected);
}
