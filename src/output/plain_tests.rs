use super::*;
use crate::model::{OffendingColumn, OffendingFile, OffendingLine};
use crate::output::render;

fn offending_file() -> OffendingFile {
    let mut file = OffendingFile::new("page.html");
    file.push(OffendingLine::new(
        "<div style=\"color:red\">",
        2,
        vec![OffendingColumn::new(
            "STYLE",
            6,
            "Style attributes should belong in a .css or .less file.",
        )],
    ));
    file
}

#[test]
fn renders_header_locations_source_and_footer() {
    let mut formatter = PlainTextFormatter::new();
    let out = render(&[offending_file()], &mut formatter).unwrap();

    assert!(out.contains("[Checking for offenses in file: page.html]"));
    assert!(out.contains("Offenses located at line number: L2"));
    assert!(out.contains("-> STYLE offense located at column: C6."));
    assert!(out.contains("Style attributes should belong in a .css or .less file."));
    assert!(out.contains("Offending line: <div style=\"color:red\">"));
    assert!(out.contains("Number of Offenses: 1"));
}

#[test]
fn clean_file_reports_zero_offenses() {
    let mut formatter = PlainTextFormatter::new();
    let out = render(&[OffendingFile::new("clean.html")], &mut formatter).unwrap();

    assert!(out.contains("[Checking for offenses in file: clean.html]"));
    assert!(out.contains("Number of Offenses: 0"));
    assert!(!out.contains("Offenses located at line number"));
}

#[test]
fn header_precedes_line_sections() {
    let mut formatter = PlainTextFormatter::new();
    let out = render(&[offending_file()], &mut formatter).unwrap();

    let header = out.find("[Checking for offenses").unwrap();
    let line = out.find("Offenses located at line number").unwrap();
    let footer = out.find("Number of Offenses").unwrap();
    assert!(header < line && line < footer);
}

#[test]
fn contains_no_ansi_codes() {
    let mut formatter = PlainTextFormatter::new();
    let out = render(&[offending_file()], &mut formatter).unwrap();
    assert!(!out.contains("\x1b["));
}
