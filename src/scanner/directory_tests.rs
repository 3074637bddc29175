use std::fs;

use tempfile::TempDir;

use super::*;
use crate::scanner::GlobFilter;

fn make_tree(dir: &TempDir) {
    fs::create_dir_all(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("index.html"), "<p>hi</p>").unwrap();
    fs::write(dir.path().join("app.js"), "let x = 1;").unwrap();
    fs::write(dir.path().join("sub/page.html"), "<p>sub</p>").unwrap();
    fs::write(dir.path().join("notes.txt"), "notes").unwrap();
}

#[test]
fn scan_recurses_and_filters_by_extension() {
    let dir = TempDir::new().unwrap();
    make_tree(&dir);

    let filter = GlobFilter::new(vec!["html".to_string()], &[]).unwrap();
    let files = DirectoryScanner::new(filter).scan(dir.path()).unwrap();

    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(files.len(), 2);
    assert!(names.contains(&"index.html".to_string()));
    assert!(names.contains(&"page.html".to_string()));
}

#[test]
fn scan_results_are_sorted() {
    let dir = TempDir::new().unwrap();
    make_tree(&dir);

    let filter = GlobFilter::new(vec![], &[]).unwrap();
    let files = DirectoryScanner::new(filter).scan(dir.path()).unwrap();

    let mut sorted = files.clone();
    sorted.sort();
    assert_eq!(files, sorted);
}

#[test]
fn scan_single_file_root_yields_the_file() {
    let dir = TempDir::new().unwrap();
    make_tree(&dir);

    let filter = GlobFilter::new(vec![], &[]).unwrap();
    let files = DirectoryScanner::new(filter)
        .scan(&dir.path().join("index.html"))
        .unwrap();

    assert_eq!(files.len(), 1);
}

#[test]
fn scan_respects_exclude_globs() {
    let dir = TempDir::new().unwrap();
    make_tree(&dir);

    let filter = GlobFilter::new(vec![], &["**/sub/**".to_string()]).unwrap();
    let files = DirectoryScanner::new(filter).scan(dir.path()).unwrap();

    assert!(files.iter().all(|p| !p.to_string_lossy().contains("sub")));
}
