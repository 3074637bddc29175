use super::*;

#[test]
fn empty_file_has_zero_total() {
    let file = OffendingFile::new("clean.html");
    assert_eq!(file.total_offenses(), 0);
    assert!(file.lines.is_empty());
}

#[test]
fn total_offenses_sums_columns_over_lines() {
    let mut file = OffendingFile::new("page.html");
    file.push(OffendingLine::new(
        "<div style=\"a\">",
        1,
        vec![OffendingColumn::new("STYLE", 6, "msg")],
    ));
    file.push(OffendingLine::new(
        "<p style=\"b\" align=\"c\">",
        4,
        vec![
            OffendingColumn::new("STYLE", 4, "msg"),
            OffendingColumn::new("ALIGN", 14, "msg"),
        ],
    ));
    assert_eq!(file.total_offenses(), 3);
}

#[test]
fn column_fields_are_preserved() {
    let col = OffendingColumn::new("CONSOLE LOG", 1, "Remove this.");
    assert_eq!(col.offense_type, "CONSOLE LOG");
    assert_eq!(col.column, 1);
    assert_eq!(col.message, "Remove this.");
}
