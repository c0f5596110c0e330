//! LAS 3.0 data section extraction
//!
//! Rows are split on the declared delimiter, short rows are padded with the
//! null sentinel, and `{S}` curves are kept as strings. Each `~A` block turns
//! into one [`DataSection`].

use crate::data_reader::repair_duplicate_mnemonics;
use crate::diagnostics::Diagnostic;
use crate::models::{DataSection, Delimiter, LasDocument};
use indexmap::IndexMap;
use tracing::debug;

/// A data line together with its 1-based line number in the file
pub type DataLine<'a> = (usize, &'a str);

/// Convert the collected lines of one `~A` block into a data section
pub fn extract_data_section(document: &mut LasDocument, lines: &[DataLine<'_>], name: String) {
    if lines.is_empty() || document.curves.is_empty() {
        return;
    }

    repair_duplicate_mnemonics(document);

    let delimiter = document.version.delimiter();
    let null_value = document.null_value();
    let null_token = null_value.to_string();
    let mnemonics: Vec<String> = document.curves.iter().map(|c| c.mnemonic.clone()).collect();
    let string_columns: Vec<bool> = document.curves.iter().map(|c| c.is_string()).collect();
    let curve_count = mnemonics.len();

    let mut numeric: Vec<Vec<f64>> = (0..curve_count)
        .map(|_| Vec::with_capacity(lines.len()))
        .collect();
    let mut strings: Vec<Vec<String>> = vec![Vec::new(); curve_count];

    for &(line_number, line) in lines {
        let mut tokens: Vec<&str> = match delimiter {
            Delimiter::Space => line.split_whitespace().collect(),
            other => line.split(other.as_char()).map(str::trim).collect(),
        };

        if tokens.len() < curve_count {
            document.record(Diagnostic::ShortRow {
                line: line_number,
                expected: curve_count,
                found: tokens.len(),
            });
            tokens.resize(curve_count, null_token.as_str());
        }

        for (column, token) in tokens.iter().take(curve_count).enumerate() {
            if string_columns[column] {
                strings[column].push(token.to_string());
                continue;
            }

            let value = if token.is_empty() {
                null_value
            } else {
                match token.parse::<f64>() {
                    Ok(value) => value,
                    Err(_) => {
                        document.record(Diagnostic::UnparseableValue {
                            line: line_number,
                            curve: mnemonics[column].clone(),
                            token: token.to_string(),
                        });
                        null_value
                    }
                }
            };
            numeric[column].push(value);
        }
    }

    let mut section = DataSection {
        name,
        curves_order: mnemonics.clone(),
        data: IndexMap::with_capacity(curve_count),
        string_data: IndexMap::new(),
    };

    for (column, mnemonic) in mnemonics.into_iter().enumerate() {
        if string_columns[column] {
            let values = std::mem::take(&mut strings[column]);
            section.data.insert(mnemonic.clone(), vec![0.0; values.len()]);
            section.string_data.insert(mnemonic.clone(), values.clone());
            document.string_data.insert(mnemonic, values);
        } else {
            let values = std::mem::take(&mut numeric[column]);
            section.data.insert(mnemonic.clone(), values.clone());
            document.logs.insert(mnemonic, values);
        }
    }

    debug!(
        "Extracted data section '{}': {} rows, {} curves",
        section.name,
        section.row_count(),
        curve_count
    );

    document.data_sections.push(section);
}
