//! ASCII data reader for LAS 1.2 and 2.0 files
//!
//! Fills [`LasDocument::logs`] from the `~A` section once the header has been
//! assembled. The declared `WRAP` flag is checked against the first data row
//! before choosing between the two reading algorithms:
//!
//! - [`normal`] - one physical row per depth step
//! - [`wrapped`] - depth alone on a row, remaining curves on following rows
//! - [`dedup`] - repeated curve mnemonics renamed before any array is built
//!
//! LAS 3.0 data never goes through this module; see
//! [`parser::data_v3`](crate::parser::data_v3).

pub mod dedup;
pub mod normal;
pub mod wrapped;

#[cfg(test)]
pub mod tests;

pub use dedup::repair_duplicate_mnemonics;

use crate::diagnostics::Diagnostic;
use crate::models::LasDocument;
use crate::parser::assembler::Section;
use crate::parser::data_v3::DataLine;
use crate::parser::line::{LineKind, classify};
use tracing::{debug, info};

/// Read the `~A` section of `content` into `document.logs`
///
/// `data_line_count` comes from the assembler's pre-scan and sizes the
/// non-wrapped arrays up front.
pub fn read_ascii_data(content: &str, document: &mut LasDocument, data_line_count: usize) {
    if document.curves_order.is_empty() {
        return;
    }

    repair_duplicate_mnemonics(document);

    let curve_count = document.curves_order.len();
    let rows = collect_data_rows(content);

    if document.version.is_wrapped() {
        if detect_actual_wrap(&rows, curve_count) {
            debug!("Reading {} wrapped data rows", rows.len());
            wrapped::read_wrapped(document, &rows);
            return;
        }
        info!(
            "Header declares WRAP=YES but the first data row holds all {} curves; reading as non-wrapped",
            curve_count
        );
    }

    debug!("Reading {} non-wrapped data rows", rows.len());
    normal::read_normal(document, &rows, data_line_count);
}

/// Collect the content rows of the `~A` section together with their line numbers
///
/// A repeated `~A` continues the data; any other section header after the
/// data has started ends it.
pub fn collect_data_rows(content: &str) -> Vec<DataLine<'_>> {
    let mut rows = Vec::new();
    let mut in_ascii = false;

    for (index, line) in content.lines().enumerate() {
        match classify(line) {
            LineKind::SectionStart { letter, .. } => {
                if Section::from_letter(letter) == Section::AsciiData {
                    in_ascii = true;
                } else if in_ascii {
                    break;
                }
            }
            LineKind::Content if in_ascii => rows.push((index + 1, line)),
            _ => {}
        }
    }

    rows
}

/// Decide whether data declared as wrapped really is wrapped
///
/// Only the first row is inspected: fewer tokens than curves means wrapped.
/// No data at all counts as wrapped.
pub fn detect_actual_wrap(rows: &[DataLine<'_>], curve_count: usize) -> bool {
    rows.first()
        .is_none_or(|(_, row)| row.split_whitespace().count() < curve_count)
}

/// Parse one data token, null-filling and recording anything unparseable
pub(crate) fn parse_token(
    document: &mut LasDocument,
    line: usize,
    column: usize,
    token: &str,
    null_value: f64,
) -> f64 {
    match token.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            let curve = document
                .curves_order
                .get(column)
                .cloned()
                .unwrap_or_default();
            document.record(Diagnostic::UnparseableValue {
                line,
                curve,
                token: token.to_string(),
            });
            null_value
        }
    }
}

/// Replace `document.logs` with the given columns, in curve order
pub(crate) fn store_columns(document: &mut LasDocument, columns: Vec<Vec<f64>>) {
    document.logs.clear();
    for (name, values) in document.curves_order.iter().zip(columns) {
        document.logs.insert(name.clone(), values);
    }
}
