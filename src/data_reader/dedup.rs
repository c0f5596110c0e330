//! Duplicate curve mnemonic repair
//!
//! The logs mapping is keyed by curve name, so two curves sharing a mnemonic
//! would collapse into one array. Every repeat after the first occurrence is
//! renamed `NAME_2`, `NAME_3`, ... before any array is allocated.

use crate::diagnostics::Diagnostic;
use crate::models::LasDocument;
use std::collections::{HashMap, HashSet};

/// Rename repeated mnemonics in `curves_order` and the matching curve records
///
/// Returns the number of curves renamed. Running it twice is a no-op.
pub fn repair_duplicate_mnemonics(document: &mut LasDocument) -> usize {
    let mut taken: HashSet<String> = document.curves_order.iter().cloned().collect();
    let mut first_seen: HashSet<String> = HashSet::new();
    let mut suffixes: HashMap<String, usize> = HashMap::new();
    let mut renamed = 0;

    for position in 0..document.curves_order.len() {
        let name = document.curves_order[position].clone();
        if first_seen.insert(name.clone()) {
            continue;
        }

        let suffix = suffixes.entry(name.clone()).or_insert(1);
        let replacement = loop {
            *suffix += 1;
            let candidate = format!("{}_{}", name, suffix);
            if !taken.contains(&candidate) {
                break candidate;
            }
        };

        taken.insert(replacement.clone());
        document.curves_order[position] = replacement.clone();

        // Earlier repeats are already renamed, so the second match is this one
        if let Some(curve) = document
            .curves
            .iter_mut()
            .filter(|c| c.mnemonic == name)
            .nth(1)
        {
            if curve.original_mnemonic.is_empty() {
                curve.original_mnemonic = name.clone();
            }
            curve.mnemonic = replacement.clone();
        }

        document.record(Diagnostic::DuplicateMnemonic {
            original: name,
            renamed: replacement,
        });
        renamed += 1;
    }

    renamed
}
