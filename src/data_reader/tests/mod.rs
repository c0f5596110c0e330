//! Test utilities for the ASCII data reader
//!
//! Documents are built directly rather than parsed so each test controls the
//! header state the reader sees.

use crate::diagnostics::Diagnostic;
use crate::models::{CurveDefinition, LasDocument};

mod normal_tests;

/// Document with the given curves and WRAP flag
pub fn document_with_curves(curves: &[&str], wrap: &str) -> LasDocument {
    let mut document = LasDocument::new();
    document.version.wrap = wrap.to_string();
    for mnemonic in curves {
        document.curves.push(CurveDefinition::new(*mnemonic));
        document.curves_order.push(mnemonic.to_string());
    }
    document
}

/// `~A` section text for the given rows
pub fn ascii_section(rows: &[&str]) -> String {
    let mut content = String::from("~A  DEPTH\n");
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    content
}

pub fn log<'a>(document: &'a LasDocument, name: &str) -> &'a [f64] {
    document
        .logs
        .get(name)
        .map(Vec::as_slice)
        .unwrap_or_else(|| panic!("missing log {}", name))
}

pub fn count_diagnostics(document: &LasDocument, predicate: fn(&Diagnostic) -> bool) -> usize {
    document.diagnostics.iter().filter(|d| predicate(d)).count()
}
