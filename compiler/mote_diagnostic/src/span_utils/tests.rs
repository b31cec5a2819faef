use super::*;
use pretty_assertions::assert_eq;

#[test]
fn single_line() {
    let source = "(+ 1 2)";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_count(), 1);
    assert_eq!(table.offset_to_line_col(source, 3), (1, 4));
}

#[test]
fn multi_line_lookup() {
    let source = "(define x 1)\n; comment\n  (foo x)\n";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_count(), 4);
    assert_eq!(table.line_from_offset(0), 1);
    assert_eq!(table.line_from_offset(13), 2);
    assert_eq!(table.offset_to_line_col(source, 25), (3, 3));
    assert_eq!(table.span_start(source, Span::new(25, 28)), (3, 3));
}

#[test]
fn columns_count_characters() {
    let source = "\"héllo\" x";
    let table = LineOffsetTable::build(source);
    // 'x' is at byte 9 with eight characters before it.
    assert_eq!(table.offset_to_line_col(source, 9), (1, 9));
}

#[test]
fn offset_past_end_clamps() {
    let source = "ab";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 10), (1, 3));
}

#[test]
fn line_text_strips_newlines() {
    let source = "first\r\nsecond\nthird";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 1), Some("first"));
    assert_eq!(table.line_text(source, 2), Some("second"));
    assert_eq!(table.line_text(source, 3), Some("third"));
    assert_eq!(table.line_text(source, 0), None);
    assert_eq!(table.line_text(source, 4), None);
}
