//! Non-wrapped reading: one physical row per depth step

use super::{parse_token, store_columns};
use crate::diagnostics::Diagnostic;
use crate::models::LasDocument;
use crate::parser::data_v3::DataLine;

/// Read rows positionally into the declared curves
///
/// Tokens beyond the curve count are ignored; missing or unparseable ones
/// become the null sentinel.
pub fn read_normal(document: &mut LasDocument, rows: &[DataLine<'_>], capacity: usize) {
    let curve_count = document.curves_order.len();
    let null_value = document.null_value();

    let mut columns: Vec<Vec<f64>> = (0..curve_count)
        .map(|_| Vec::with_capacity(capacity.max(rows.len())))
        .collect();

    for &(line_number, row) in rows {
        let tokens: Vec<&str> = row.split_whitespace().collect();
        if tokens.len() < curve_count {
            document.record(Diagnostic::ShortRow {
                line: line_number,
                expected: curve_count,
                found: tokens.len(),
            });
        }

        for (column, values) in columns.iter_mut().enumerate() {
            let value = match tokens.get(column) {
                Some(token) => parse_token(document, line_number, column, token, null_value),
                None => null_value,
            };
            values.push(value);
        }
    }

    store_columns(document, columns);
}
