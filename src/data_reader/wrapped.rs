//! Wrapped reading
//!
//! Each depth step starts with the index value alone on a row. The remaining
//! curves follow on as many rows as needed, in declared order, until the
//! step is complete and the next row is a depth row again.

use super::{parse_token, store_columns};
use crate::diagnostics::Diagnostic;
use crate::models::LasDocument;
use crate::parser::data_v3::DataLine;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WrapState {
    AwaitingDepth,
    AwaitingValues,
}

/// Read wrapped rows into growable columns, then pad them to equal length
pub fn read_wrapped(document: &mut LasDocument, rows: &[DataLine<'_>]) {
    let curve_count = document.curves_order.len();
    let null_value = document.null_value();

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); curve_count];
    let mut state = WrapState::AwaitingDepth;
    // Non-index curves filled in the current step
    let mut filled = 0;

    for &(line_number, row) in rows {
        let tokens: Vec<&str> = row.split_whitespace().collect();

        match state {
            WrapState::AwaitingDepth => {
                let depth = match tokens.first() {
                    Some(token) => parse_token(document, line_number, 0, token, null_value),
                    None => null_value,
                };
                columns[0].push(depth);

                if tokens.len() > 1 {
                    document.record(Diagnostic::ExtraDepthTokens {
                        line: line_number,
                        discarded: tokens.len() - 1,
                    });
                }

                if curve_count > 1 {
                    state = WrapState::AwaitingValues;
                    filled = 0;
                }
            }
            WrapState::AwaitingValues => {
                for (position, token) in tokens.iter().enumerate() {
                    filled += 1;
                    let value = parse_token(document, line_number, filled, token, null_value);
                    columns[filled].push(value);

                    if filled == curve_count - 1 {
                        let leftover = tokens.len() - position - 1;
                        if leftover > 0 {
                            document.record(Diagnostic::ExtraWrappedTokens {
                                line: line_number,
                                discarded: leftover,
                            });
                        }
                        state = WrapState::AwaitingDepth;
                        filled = 0;
                        break;
                    }
                }
            }
        }
    }

    pad_columns(document, &mut columns, null_value);

    debug!(
        "Read {} wrapped depth steps for {} curves",
        columns.first().map_or(0, Vec::len),
        curve_count
    );

    store_columns(document, columns);
}

/// Pad every column to the longest one with the null sentinel
fn pad_columns(document: &mut LasDocument, columns: &mut [Vec<f64>], null_value: f64) {
    let longest = columns.iter().map(Vec::len).max().unwrap_or(0);
    let complete = columns.iter().filter(|c| c.len() == longest).count();

    if complete == columns.len() {
        return;
    }

    document.record(Diagnostic::IncompleteWrappedStep {
        expected: columns.len(),
        filled: complete,
    });

    for column in columns.iter_mut() {
        column.resize(longest, null_value);
    }
}
