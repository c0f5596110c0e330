//! LAS 3.0 dialect extensions
//!
//! Three independent extractions layered on top of header field parsing:
//! array-indexed mnemonics (`NMR[2]`), format specifiers in curve
//! descriptions (`{F}`, `{E}`, `{S}`, `{A:5}`) and zone associations at the
//! end of parameter descriptions (`| ZONE[1]`).

use crate::models::{DataFormat, ParameterZone};
use regex::Regex;
use std::sync::LazyLock;

static ARRAY_MNEMONIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<base>[\w\-]+)\[(?P<index>\d+)\]$").unwrap());

static FORMAT_SPEC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(?P<format>[FESA]):?(?P<offset>[\d.]*)\s*\}").unwrap()
});

static ZONE_ASSOC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\|\s*(?P<zone>[\w\-]+)(?:\[(?P<index>\d+)\])?$").unwrap()
});

/// Format tag found in a curve description
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatSpec {
    pub format: DataFormat,
    /// Only kept for array (`A`) curves
    pub time_offset: Option<f64>,
}

/// Split `BASE[n]` into upper-cased base name and 1-based index
pub fn parse_array_mnemonic(mnemonic: &str) -> Option<(String, u32)> {
    let caps = ARRAY_MNEMONIC_PATTERN.captures(mnemonic)?;
    let index = caps["index"].parse::<u32>().ok()?;
    Some((caps["base"].to_uppercase(), index))
}

/// Extract a format specifier, returning the description with every tag removed
pub fn extract_format_spec(description: &str) -> (String, Option<FormatSpec>) {
    let Some(caps) = FORMAT_SPEC_PATTERN.captures(description) else {
        return (description.to_string(), None);
    };

    let spec = caps["format"]
        .chars()
        .next()
        .and_then(DataFormat::from_code)
        .map(|format| {
            let time_offset = match format {
                DataFormat::Array => caps["offset"].parse::<f64>().ok(),
                _ => None,
            };
            FormatSpec {
                format,
                time_offset,
            }
        });

    let stripped = FORMAT_SPEC_PATTERN
        .replace_all(description, "")
        .trim()
        .to_string();
    (stripped, spec)
}

/// Extract a trailing zone association, returning the stripped description
pub fn extract_zone(description: &str) -> (String, Option<ParameterZone>) {
    let Some(caps) = ZONE_ASSOC_PATTERN.captures(description) else {
        return (description.to_string(), None);
    };

    let zone = ParameterZone {
        zone_name: caps["zone"].to_uppercase(),
        zone_index: caps.name("index").and_then(|m| m.as_str().parse().ok()),
    };

    let stripped = ZONE_ASSOC_PATTERN
        .replace(description, "")
        .trim()
        .to_string();
    (stripped, Some(zone))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_mnemonic() {
        assert_eq!(parse_array_mnemonic("NMR[1]"), Some(("NMR".to_string(), 1)));
        assert_eq!(parse_array_mnemonic("t2_bin[12]"), Some(("T2_BIN".to_string(), 12)));
        assert_eq!(parse_array_mnemonic("GR"), None);
        assert_eq!(parse_array_mnemonic("NMR[]"), None);
    }

    #[test]
    fn test_format_spec_float() {
        let (desc, spec) = extract_format_spec("Gamma Ray {F}");
        assert_eq!(desc, "Gamma Ray");
        let spec = spec.unwrap();
        assert_eq!(spec.format, DataFormat::Float);
        assert_eq!(spec.time_offset, None);
    }

    #[test]
    fn test_format_spec_array_offset() {
        let (desc, spec) = extract_format_spec("NMR Echo {A:5}");
        assert_eq!(desc, "NMR Echo");
        let spec = spec.unwrap();
        assert_eq!(spec.format, DataFormat::Array);
        assert_eq!(spec.time_offset, Some(5.0));

        let (_, spec) = extract_format_spec("{A:0.5}");
        assert_eq!(spec.unwrap().time_offset, Some(0.5));

        let (_, spec) = extract_format_spec("{A}");
        assert_eq!(spec.unwrap().time_offset, None);
    }

    #[test]
    fn test_format_spec_absent() {
        let (desc, spec) = extract_format_spec("Plain description");
        assert_eq!(desc, "Plain description");
        assert!(spec.is_none());
    }

    #[test]
    fn test_zone_association() {
        let (desc, zone) = extract_zone("Bottom hole temperature | Run[1]");
        assert_eq!(desc, "Bottom hole temperature");
        let zone = zone.unwrap();
        assert_eq!(zone.zone_name, "RUN");
        assert_eq!(zone.zone_index, Some(1));

        let (desc, zone) = extract_zone("Mud weight | ZONE");
        assert_eq!(desc, "Mud weight");
        assert_eq!(zone.unwrap().zone_index, None);

        let (desc, zone) = extract_zone("No zone here");
        assert_eq!(desc, "No zone here");
        assert!(zone.is_none());
    }
}
