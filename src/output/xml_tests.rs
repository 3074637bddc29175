use super::*;
use crate::model::{OffendingColumn, OffendingFile, OffendingLine};
use crate::output::render;

fn offending_file() -> OffendingFile {
    let mut file = OffendingFile::new("page.html");
    file.push(OffendingLine::new(
        "<div style=\"a\">",
        7,
        vec![OffendingColumn::new("STYLE", 6, "Inline style.")],
    ));
    file
}

#[test]
fn document_structure_uses_camel_case_element_names() {
    let mut formatter = MinimalXmlFormatter::new();
    let out = render(&[offending_file()], &mut formatter).unwrap();

    assert!(out.starts_with("<offenses>\n"));
    assert!(out.ends_with("</offenses>\n"));
    assert!(out.contains("<offensiveFile>"));
    assert!(out.contains("<filepath>page.html</filepath>"));
    assert!(out.contains("<offensiveLine>"));
    assert!(out.contains("<lineNumber>7</lineNumber>"));
    assert!(out.contains("<offensiveColumn>"));
    assert!(out.contains("<type>STYLE</type>"));
    assert!(out.contains("<column>6</column>"));
    assert!(out.contains("<message>Inline style.</message>"));
    assert!(out.contains("<totalOffenses>1</totalOffenses>"));
}

#[test]
fn line_text_is_escaped() {
    let mut formatter = MinimalXmlFormatter::new();
    let out = render(&[offending_file()], &mut formatter).unwrap();
    assert!(out.contains("<line>&lt;div style=\"a\"&gt;</line>"));
}

#[test]
fn zero_offense_file_keeps_file_element() {
    let mut formatter = MinimalXmlFormatter::new();
    let out = render(&[OffendingFile::new("clean.html")], &mut formatter).unwrap();
    assert!(out.contains("<filepath>clean.html</filepath>"));
    assert!(out.contains("<totalOffenses>0</totalOffenses>"));
    assert!(!out.contains("<offensiveLine>"));
}
