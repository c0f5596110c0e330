//! Header field parsing
//!
//! A header line has the shape `MNEMONIC .UNIT  VALUE : DESCRIPTION`. Two
//! forms are tried in order, with description and value-only; lines matching
//! neither are not header fields and are skipped by the caller.

use regex::{Captures, Regex};
use std::sync::LazyLock;

// Whitespace between mnemonic and dot is common ("DT  .US/M").
static DATA_LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?P<mnemonic>[\w\-]+(?:\[\d+\])?)\s*\.(?P<unit>[^\s:]*)\s+(?P<value>[^:]*?)\s*:\s*(?P<description>.*?)\s*$",
    )
    .unwrap()
});

static VALUE_ONLY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<mnemonic>[\w\-]+(?:\[\d+\])?)\s*\.(?P<unit>[^\s:]*)\s+(?P<value>.+?)\s*$")
        .unwrap()
});

/// One parsed header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderField {
    /// Upper-cased mnemonic, including any `[n]` suffix
    pub mnemonic: String,
    pub unit: String,
    pub value: String,
    /// Empty for value-only lines
    pub description: String,
}

/// Parse a content line into a header field
pub fn parse_header_field(line: &str) -> Option<HeaderField> {
    DATA_LINE_PATTERN
        .captures(line)
        .or_else(|| VALUE_ONLY_PATTERN.captures(line))
        .map(|caps| HeaderField {
            mnemonic: group(&caps, "mnemonic").to_uppercase(),
            unit: group(&caps, "unit").to_string(),
            value: group(&caps, "value").to_string(),
            description: group(&caps, "description").to_string(),
        })
}

fn group<'a>(caps: &Captures<'a>, name: &str) -> &'a str {
    caps.name(name).map_or("", |m| m.as_str().trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_with_description() {
        let field = parse_header_field(" STRT.M   1670.0 : START DEPTH").unwrap();
        assert_eq!(field.mnemonic, "STRT");
        assert_eq!(field.unit, "M");
        assert_eq!(field.value, "1670.0");
        assert_eq!(field.description, "START DEPTH");
    }

    #[test]
    fn test_padded_mnemonic() {
        let field = parse_header_field(" DT  .US/M    :  Sonic Travel Time").unwrap();
        assert_eq!(field.mnemonic, "DT");
        assert_eq!(field.unit, "US/M");
        assert_eq!(field.value, "");
        assert_eq!(field.description, "Sonic Travel Time");
    }

    #[test]
    fn test_value_only() {
        let field = parse_header_field(" COMP.   ACME OIL").unwrap();
        assert_eq!(field.mnemonic, "COMP");
        assert_eq!(field.unit, "");
        assert_eq!(field.value, "ACME OIL");
        assert_eq!(field.description, "");
    }

    #[test]
    fn test_lowercase_and_unicode_mnemonic() {
        let field = parse_header_field(" скв.   12 : номер скважины").unwrap();
        assert_eq!(field.mnemonic, "СКВ");
        assert_eq!(field.value, "12");
        assert_eq!(field.description, "номер скважины");
    }

    #[test]
    fn test_array_mnemonic_and_api_code() {
        let field = parse_header_field(" NMR[1].ms  07 310 01 00 : NMR bin {A:0}").unwrap();
        assert_eq!(field.mnemonic, "NMR[1]");
        assert_eq!(field.unit, "ms");
        assert_eq!(field.value, "07 310 01 00");
        assert_eq!(field.description, "NMR bin {A:0}");
    }

    #[test]
    fn test_unit_with_percent() {
        let field = parse_header_field(" PHIE.%   : Effective porosity").unwrap();
        assert_eq!(field.mnemonic, "PHIE");
        assert_eq!(field.unit, "%");
    }

    #[test]
    fn test_malformed_lines() {
        assert!(parse_header_field("no dot separator here").is_none());
        assert!(parse_header_field(" STRT.M").is_none());
        assert!(parse_header_field("").is_none());
    }
}
