//! Configuration for reading and writing LAS files.

use crate::constants::{DEFAULT_OUTPUT_ENCODING, DEFAULT_PRECISION};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Options for reading LAS files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Curve mnemonic normalisation table (raw name -> canonical name).
    /// Keys are matched case-insensitively.
    pub mnemonic_aliases: HashMap<String, String>,

    /// Explicit input encoding label; auto-detected when `None`
    pub encoding: Option<String>,

    /// Reject files larger than this many bytes before decoding
    pub max_file_size: Option<u64>,
}

impl ReaderConfig {
    /// Add a single mnemonic alias
    pub fn with_alias(mut self, raw: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.mnemonic_aliases.insert(raw.into(), canonical.into());
        self
    }

    /// Replace the whole alias table
    pub fn with_mnemonic_aliases(mut self, aliases: HashMap<String, String>) -> Self {
        self.mnemonic_aliases = aliases;
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    pub fn with_max_file_size(mut self, max_bytes: u64) -> Self {
        self.max_file_size = Some(max_bytes);
        self
    }

    /// Alias table with upper-cased keys, as used by the parser
    pub fn normalized_aliases(&self) -> HashMap<String, String> {
        self.mnemonic_aliases
            .iter()
            .map(|(raw, canonical)| (raw.trim().to_uppercase(), canonical.clone()))
            .collect()
    }
}

/// Options for writing LAS files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriterConfig {
    /// Output encoding label
    pub encoding: String,

    /// Decimal places for numeric data values
    pub precision: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            encoding: DEFAULT_OUTPUT_ENCODING.to_string(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl WriterConfig {
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}
