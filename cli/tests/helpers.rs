//! # lemonutils Library Integration Tests
//!
//! File: cli/tests/helpers.rs
//!
//! ## Overview
//!
//! Exercises the public library API end to end: the `FileHelper` facade, its
//! lenient view and the properties that hold across operations (copies are
//! identical, sizes add up, rejected moves change nothing).
//!
use lemonutils::common::fs::{Diagnostics, FileHelper, WritePolicy};
use lemonutils::core::error::FsErrorKind;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use walkdir::WalkDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn quiet_helper() -> FileHelper {
    FileHelper::new().with_diagnostics(Diagnostics::silent())
}

/// Relative path -> file content (`None` for directories) for every entry below `root`.
fn snapshot(root: &Path) -> BTreeMap<PathBuf, Option<Vec<u8>>> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| {
            let entry = entry.unwrap();
            let relative = entry.path().strip_prefix(root).unwrap().to_path_buf();
            let content = if entry.file_type().is_file() {
                Some(fs::read(entry.path()).unwrap())
            } else {
                None
            };
            (relative, content)
        })
        .collect()
}

#[test]
fn test_read_write_round_trip() -> TestResult {
    let dir = tempdir()?;
    let helper = quiet_helper();
    let original = dir.path().join("original.txt");
    fs::write(&original, "first line\nsecond line\n")?;

    let content = helper.read(&original)?;
    let copy = dir.path().join("copy.txt");
    helper.write(&copy, &content)?;
    assert_eq!(helper.read(&copy)?, content);
    Ok(())
}

#[test]
fn test_write_existing_only_policy() -> TestResult {
    let dir = tempdir()?;
    let helper = quiet_helper().with_write_policy(WritePolicy::ExistingOnly);
    let existing = dir.path().join("existing.txt");
    fs::write(&existing, "old")?;

    helper.write(&existing, "new")?;
    assert_eq!(fs::read_to_string(&existing)?, "new");

    let err = helper.write(dir.path().join("fresh.txt"), "x").unwrap_err();
    assert_eq!(err.kind(), FsErrorKind::NotFound);
    assert!(!dir.path().join("fresh.txt").exists());
    Ok(())
}

#[test]
fn test_copy_tree_is_identical() -> TestResult {
    let dir = tempdir()?;
    let source = dir.path().join("site");
    fs::create_dir_all(source.join("assets/img"))?;
    fs::create_dir_all(source.join("drafts"))?;
    fs::write(source.join("index.html"), "<h1>hi</h1>")?;
    fs::write(source.join("assets/style.css"), "body {}")?;
    fs::write(source.join("assets/img/logo.svg"), "<svg/>")?;

    let summary = quiet_helper().copy_directory_tree(&source, dir.path().join("mirror"))?;
    assert_eq!(summary.root, dir.path().join("mirror/site"));
    assert_eq!(snapshot(&source), snapshot(&summary.root));
    Ok(())
}

#[test]
fn test_copy_empty_tree() -> TestResult {
    let dir = tempdir()?;
    let source = dir.path().join("empty");
    fs::create_dir(&source)?;

    let summary = quiet_helper().copy_directory_tree(&source, dir.path().join("out"))?;
    assert!(summary.root.is_dir());
    assert_eq!(summary.files, 0);
    assert_eq!(summary.directories, 1);
    assert!(snapshot(&summary.root).is_empty());
    Ok(())
}

#[test]
fn test_copy_scenario_second_copy_conflicts() -> TestResult {
    let dir = tempdir()?;
    let helper = quiet_helper();
    let source = dir.path().join("src");
    fs::create_dir(&source)?;
    fs::write(source.join("x.txt"), "hello")?;
    let dst = dir.path().join("dst");

    helper.copy_directory_tree(&source, &dst)?;
    assert_eq!(fs::read_to_string(dst.join("src/x.txt"))?, "hello");

    let err = helper.copy_directory_tree(&source, &dst).unwrap_err();
    assert_eq!(err.kind(), FsErrorKind::Conflict);
    assert_eq!(fs::read_to_string(dst.join("src/x.txt"))?, "hello");
    Ok(())
}

#[test]
fn test_size_of_directory_is_sum_of_children() -> TestResult {
    let dir = tempdir()?;
    let helper = quiet_helper();
    let root = dir.path();
    fs::create_dir_all(root.join("a/b"))?;
    fs::create_dir(root.join("empty"))?;
    fs::write(root.join("one.bin"), vec![1u8; 10])?;
    fs::write(root.join("a/two.bin"), vec![2u8; 200])?;
    fs::write(root.join("a/b/three.bin"), vec![3u8; 3000])?;

    let children: u64 = fs::read_dir(root)?
        .map(|entry| helper.calculate_size(entry.unwrap().path()).unwrap())
        .sum();
    assert_eq!(helper.calculate_size(root)?, children);
    assert_eq!(children, 3210);
    Ok(())
}

#[test]
fn test_list_files_by_extension() -> TestResult {
    let dir = tempdir()?;
    fs::write(dir.path().join("a.txt"), "a")?;
    fs::write(dir.path().join("b.log"), "b")?;
    fs::create_dir(dir.path().join("sub"))?;

    let names: Vec<String> = quiet_helper().list_files(dir.path(), Some("txt"))?.collect();
    assert_eq!(names, vec!["a.txt"]);
    Ok(())
}

#[tokio::test]
async fn test_move_conflict_leaves_everything_untouched() -> TestResult {
    let dir = tempdir()?;
    let source = dir.path().join("reports");
    let dest = dir.path().join("archive");
    fs::create_dir_all(&source)?;
    fs::write(source.join("q1.csv"), "new")?;
    fs::create_dir_all(dest.join("reports"))?;
    fs::write(dest.join("reports/q1.csv"), "old")?;
    let before_source = snapshot(&source);
    let before_dest = snapshot(&dest);

    let err = quiet_helper()
        .move_directory(&source, &dest)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FsErrorKind::Conflict);
    assert_eq!(snapshot(&source), before_source);
    assert_eq!(snapshot(&dest), before_dest);
    Ok(())
}

#[tokio::test]
async fn test_move_then_rename_resolves_after_completion() -> TestResult {
    let dir = tempdir()?;
    let helper = quiet_helper();
    let source = dir.path().join("draft");
    fs::create_dir(&source)?;
    fs::write(source.join("text.md"), "words")?;
    fs::create_dir(dir.path().join("published"))?;

    let moved = helper
        .move_directory(&source, dir.path().join("published"))
        .await?;
    assert!(moved.join("text.md").is_file());
    assert!(!source.exists());

    let renamed = helper.rename_directory(&moved, "final").await?;
    assert_eq!(renamed, dir.path().join("published/final"));
    assert_eq!(fs::read_to_string(renamed.join("text.md"))?, "words");
    Ok(())
}

#[test]
fn test_delete_missing_directory_is_not_found() -> TestResult {
    let dir = tempdir()?;
    let err = quiet_helper()
        .delete_directory(dir.path().join("never-existed"))
        .unwrap_err();
    assert_eq!(err.kind(), FsErrorKind::NotFound);
    Ok(())
}

#[tokio::test]
async fn test_lenient_view_swallows_every_failure() -> TestResult {
    let dir = tempdir()?;
    let helper = quiet_helper();
    let lenient = helper.lenient();
    let missing = dir.path().join("missing");

    assert_eq!(lenient.read(&missing), None);
    assert!(!lenient.write(missing.join("a.txt"), "x"));
    assert!(lenient.list_files(&missing, Some("txt")).is_empty());
    assert!(lenient.list_subdirectories(&missing).is_empty());
    assert_eq!(lenient.move_directory(&missing, dir.path()).await, None);
    assert_eq!(lenient.rename_directory(&missing, "other").await, None);
    assert!(!lenient.delete_directory(&missing));
    assert!(!lenient.create_file(missing.join("a.txt")));
    assert!(!lenient.create_directory(missing.join("sub")));
    assert_eq!(lenient.copy_file(&missing, dir.path().join("c")), None);
    assert_eq!(lenient.copy_directory_tree(&missing, dir.path()), None);
    assert_eq!(lenient.calculate_size(&missing), None);
    Ok(())
}
