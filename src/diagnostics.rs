//! Non-fatal diagnostics raised while reading LAS content.
//!
//! Every diagnostic describes a repair that was applied locally so the read
//! could continue. They are logged through `tracing` when recorded and kept
//! on the document for callers that want to inspect them.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Diagnostic {
    /// Declared version is newer than 3.0; the file was read anyway
    UnsupportedVersion { version: String },

    /// A repeated curve mnemonic was renamed
    DuplicateMnemonic { original: String, renamed: String },

    /// A data row had fewer values than curves; the rest were null-filled
    ShortRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A data token could not be parsed as a number and was null-filled
    UnparseableValue {
        line: usize,
        curve: String,
        token: String,
    },

    /// A wrapped-mode depth row carried more than one value
    ExtraDepthTokens { line: usize, discarded: usize },

    /// Tokens left over on the row that completed a wrapped depth step
    ExtraWrappedTokens { line: usize, discarded: usize },

    /// The last wrapped depth step was incomplete and was padded
    IncompleteWrappedStep { expected: usize, filled: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnsupportedVersion { version } => write!(
                f,
                "LAS version {} is not officially supported (only 1.2, 2.0 and 3.0); attempting to read anyway",
                version
            ),
            Diagnostic::DuplicateMnemonic { original, renamed } => write!(
                f,
                "Duplicate curve mnemonic '{}' renamed to '{}'",
                original, renamed
            ),
            Diagnostic::ShortRow {
                line,
                expected,
                found,
            } => write!(
                f,
                "Line {}: expected {} values, found {}; missing values set to null",
                line, expected, found
            ),
            Diagnostic::UnparseableValue { line, curve, token } => write!(
                f,
                "Line {}: cannot parse '{}' for curve {}; value set to null",
                line, token, curve
            ),
            Diagnostic::ExtraDepthTokens { line, discarded } => write!(
                f,
                "Line {}: wrapped depth row has {} extra value(s); discarded",
                line, discarded
            ),
            Diagnostic::ExtraWrappedTokens { line, discarded } => write!(
                f,
                "Line {}: {} value(s) beyond the declared curves in a wrapped step; discarded",
                line, discarded
            ),
            Diagnostic::IncompleteWrappedStep { expected, filled } => write!(
                f,
                "Final wrapped depth step has {} of {} values; curves padded with null",
                filled, expected
            ),
        }
    }
}
