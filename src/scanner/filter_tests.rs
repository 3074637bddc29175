use std::path::Path;

use super::*;

#[test]
fn filter_by_extension() {
    let filter = GlobFilter::new(vec!["html".to_string()], &[]).unwrap();

    assert!(filter.should_include(Path::new("site/index.html")));
    assert!(!filter.should_include(Path::new("site/app.js")));
}

#[test]
fn filter_extension_is_case_insensitive() {
    let filter = GlobFilter::new(vec!["HTML".to_string()], &[]).unwrap();

    assert!(filter.should_include(Path::new("INDEX.HTML")));
    assert!(filter.should_include(Path::new("index.html")));
}

#[test]
fn filter_empty_extensions_accepts_all() {
    let filter = GlobFilter::new(vec![], &[]).unwrap();

    assert!(filter.should_include(Path::new("index.html")));
    assert!(filter.should_include(Path::new("app.js")));
    assert!(filter.should_include(Path::new("Makefile")));
}

#[test]
fn filter_exclude_patterns() {
    let filter = GlobFilter::new(
        vec![],
        &["**/node_modules/**".to_string(), "**/dist/**".to_string()],
    )
    .unwrap();

    assert!(filter.should_include(Path::new("src/index.html")));
    assert!(!filter.should_include(Path::new("node_modules/pkg/index.html")));
    assert!(!filter.should_include(Path::new("build/dist/app.js")));
}

#[test]
fn filter_exclude_by_filename() {
    let filter = GlobFilter::new(vec![], &["*.min.js".to_string()]).unwrap();

    assert!(filter.should_include(Path::new("app.js")));
    assert!(!filter.should_include(Path::new("app.min.js")));
}

#[test]
fn filter_invalid_pattern_returns_error() {
    let result = GlobFilter::new(vec![], &["[invalid".to_string()]);
    assert!(result.is_err());
}

#[test]
fn filter_file_without_extension_rejected_when_extensions_set() {
    let filter = GlobFilter::new(vec!["html".to_string()], &[]).unwrap();

    assert!(!filter.should_include(Path::new("Makefile")));
}
