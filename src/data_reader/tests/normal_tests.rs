//! Tests for non-wrapped reading and wrap arbitration

use super::*;
use crate::data_reader::{collect_data_rows, detect_actual_wrap, read_ascii_data};

#[test]
fn test_reads_rows_positionally() {
    let mut document = document_with_curves(&["DEPT", "DT", "GR"], "NO");
    let content = ascii_section(&["1670.0 123.45 45.0", "1669.875 124.0 46.5"]);

    read_ascii_data(&content, &mut document, 2);

    assert_eq!(log(&document, "DEPT"), &[1670.0, 1669.875]);
    assert_eq!(log(&document, "DT"), &[123.45, 124.0]);
    assert_eq!(log(&document, "GR"), &[45.0, 46.5]);
    assert!(document.diagnostics.is_empty());
}

#[test]
fn test_short_row_null_filled() {
    let mut document = document_with_curves(&["DEPT", "DT", "GR"], "NO");
    document.well.insert("NULL", "-999.25");
    let content = ascii_section(&["100.0 10.0 20.0", "101.0 11.0"]);

    read_ascii_data(&content, &mut document, 2);

    assert_eq!(log(&document, "GR"), &[20.0, -999.25]);
    assert_eq!(
        count_diagnostics(&document, |d| matches!(d, Diagnostic::ShortRow { .. })),
        1
    );
}

#[test]
fn test_declared_null_used_for_fill() {
    let mut document = document_with_curves(&["DEPT", "GR"], "NO");
    document.well.insert("NULL", "-9999");
    let content = ascii_section(&["100.0 abc", "101.0"]);

    read_ascii_data(&content, &mut document, 2);

    assert_eq!(log(&document, "GR"), &[-9999.0, -9999.0]);
    assert_eq!(
        count_diagnostics(&document, |d| matches!(d, Diagnostic::UnparseableValue { .. })),
        1
    );
}

#[test]
fn test_extra_tokens_ignored() {
    let mut document = document_with_curves(&["DEPT", "GR"], "NO");
    let content = ascii_section(&["100.0 10.0 99.0 98.0"]);

    read_ascii_data(&content, &mut document, 1);

    assert_eq!(log(&document, "GR"), &[10.0]);
    assert_eq!(document.logs.len(), 2);
}

#[test]
fn test_section_after_data_terminates() {
    let mut document = document_with_curves(&["DEPT", "GR"], "NO");
    let content = "~A\n100.0 1.0\n101.0 2.0\n~O\n102.0 3.0\n";

    read_ascii_data(content, &mut document, 3);

    assert_eq!(log(&document, "DEPT"), &[100.0, 101.0]);
    assert_eq!(document.row_count(), 2);
}

#[test]
fn test_repeated_ascii_section_continues() {
    let mut document = document_with_curves(&["DEPT", "GR"], "NO");
    let content = "~A\n100.0 1.0\n# comment\n\n~A\n101.0 2.0\n";

    read_ascii_data(content, &mut document, 2);

    assert_eq!(log(&document, "DEPT"), &[100.0, 101.0]);
}

#[test]
fn test_mislabeled_wrap_read_as_normal() {
    let mut document = document_with_curves(&["DEPT", "DT", "GR"], "YES");
    let rows = ["100.0 1.0 2.0", "101.0 3.0 4.0", "102.0 5.0 6.0"];
    let content = ascii_section(&rows);

    read_ascii_data(&content, &mut document, rows.len());

    assert_eq!(document.row_count(), 3);
    assert_eq!(log(&document, "GR"), &[2.0, 4.0, 6.0]);
}

#[test]
fn test_detect_actual_wrap() {
    let content = ascii_section(&["100.0", "1.0 2.0"]);
    let rows = collect_data_rows(&content);
    assert!(detect_actual_wrap(&rows, 3));

    let content = ascii_section(&["100.0 1.0 2.0"]);
    let rows = collect_data_rows(&content);
    assert!(!detect_actual_wrap(&rows, 3));

    assert!(detect_actual_wrap(&[], 3));
}

#[test]
fn test_collect_rows_keeps_line_numbers() {
    let content = "~V\n VERS. 2.0 :\n~A\n# skipped\n100.0 1.0\n";
    let rows = collect_data_rows(content);
    assert_eq!(rows, vec![(5, "100.0 1.0")]);
}

#[test]
fn test_no_curves_no_logs() {
    let mut document = LasDocument::new();
    read_ascii_data(&ascii_section(&["1.0 2.0"]), &mut document, 1);
    assert!(document.logs.is_empty());
}

#[test]
fn test_no_data_rows() {
    let mut document = document_with_curves(&["DEPT", "GR"], "NO");
    read_ascii_data("~A\n", &mut document, 0);

    assert_eq!(document.logs.len(), 2);
    assert_eq!(document.row_count(), 0);
}
