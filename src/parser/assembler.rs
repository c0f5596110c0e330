//! Section assembler
//!
//! Routes classified lines to per-section handlers and accumulates a single
//! [`LasDocument`]. All per-file state lives in a [`ParseState`] created at
//! the start of every [`LasParser::parse`] call, so a parser can be reused
//! for any number of sequential parses.

use std::collections::HashMap;
use tracing::debug;

use super::data_v3::{DataLine, extract_data_section};
use super::extensions::{extract_format_spec, extract_zone, parse_array_mnemonic};
use super::field::parse_header_field;
use super::line::{LineKind, classify};
use crate::config::ReaderConfig;
use crate::constants::{DLM_MNEMONIC, VERS_MNEMONIC, WRAP_MNEMONIC, section_letters};
use crate::models::{ArrayElementInfo, CurveDefinition, LasDocument, ParameterEntry};

/// Sections a LAS file can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Version,
    Well,
    Curve,
    Parameter,
    Other,
    AsciiData,
    /// Vendor extension or malformed header; its lines are skipped
    Ignored,
}

impl Section {
    pub fn from_letter(letter: Option<char>) -> Self {
        match letter {
            Some(section_letters::VERSION) => Section::Version,
            Some(section_letters::WELL) => Section::Well,
            Some(section_letters::CURVE) => Section::Curve,
            Some(section_letters::PARAMETER) => Section::Parameter,
            Some(section_letters::OTHER) => Section::Other,
            Some(section_letters::ASCII) => Section::AsciiData,
            _ => Section::Ignored,
        }
    }
}

/// Parsed document plus the pre-scanned data line count
#[derive(Debug, Clone)]
pub struct ParseOutput {
    pub document: LasDocument,
    /// Content lines found after `~A` markers, for pre-allocation
    pub data_line_count: usize,
}

/// Accumulation state for one parse call
struct ParseState<'a> {
    document: LasDocument,
    section: Option<Section>,
    data_section_name: String,
    data_section_index: usize,
    data_lines: Vec<DataLine<'a>>,
}

impl<'a> ParseState<'a> {
    fn new() -> Self {
        Self {
            document: LasDocument::new(),
            section: None,
            data_section_name: String::new(),
            data_section_index: 0,
            data_lines: Vec::new(),
        }
    }

    /// Finalise the `~A` block that is being left (LAS 3.0 only)
    fn finish_data_section(&mut self) {
        if self.data_lines.is_empty() {
            return;
        }

        let lines = std::mem::take(&mut self.data_lines);
        if self.document.is_v3() {
            let name = if self.data_section_name.is_empty() {
                format!("Section_{}", self.data_section_index)
            } else {
                self.data_section_name.clone()
            };
            extract_data_section(&mut self.document, &lines, name);
            self.data_section_index += 1;
        }
    }
}

/// LAS header and LAS 3.0 data parser
#[derive(Debug, Clone, Default)]
pub struct LasParser {
    /// Upper-cased raw mnemonic -> canonical mnemonic
    aliases: HashMap<String, String>,
}

impl LasParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser using the reader configuration's alias table
    pub fn with_config(config: &ReaderConfig) -> Self {
        Self {
            aliases: config.normalized_aliases(),
        }
    }

    /// Parse LAS content.
    ///
    /// Builds every header section; for LAS 3.0 also the data sections.
    /// LAS 1.2/2.0 numeric data is left to
    /// [`read_ascii_data`](crate::data_reader::read_ascii_data).
    pub fn parse(&self, content: &str) -> ParseOutput {
        let lines: Vec<&str> = content.lines().collect();
        let data_line_count = pre_scan(&lines);

        let mut state = ParseState::new();
        for (index, &line) in lines.iter().enumerate() {
            self.parse_line(&mut state, index + 1, line);
        }

        if state.section == Some(Section::AsciiData) {
            state.finish_data_section();
        }

        debug!(
            "Parsed LAS {} header: {} well entries, {} curves, {} parameters, {} data lines",
            state.document.version.vers,
            state.document.well.len(),
            state.document.curves.len(),
            state.document.parameters.len(),
            data_line_count
        );

        ParseOutput {
            document: state.document,
            data_line_count,
        }
    }

    fn parse_line<'a>(&self, state: &mut ParseState<'a>, line_number: usize, line: &'a str) {
        match classify(line) {
            LineKind::SectionStart { letter, name } => {
                if state.section == Some(Section::AsciiData) {
                    state.finish_data_section();
                }

                let section = Section::from_letter(letter);
                if section == Section::AsciiData {
                    state.data_section_name = name.to_string();
                }
                debug!("Line {}: entering {:?} section", line_number, section);
                state.section = Some(section);
            }
            LineKind::Comment | LineKind::Blank => {}
            LineKind::Content => match state.section {
                Some(Section::Version) => parse_version(&mut state.document, line),
                Some(Section::Well) => parse_well(&mut state.document, line),
                Some(Section::Curve) => self.parse_curve(&mut state.document, line),
                Some(Section::Parameter) => parse_parameter(&mut state.document, line),
                Some(Section::Other) => parse_other(&mut state.document, line),
                Some(Section::AsciiData) => {
                    if state.document.is_v3() {
                        state.data_lines.push((line_number, line));
                    }
                }
                Some(Section::Ignored) | None => {}
            },
        }
    }

    fn parse_curve(&self, document: &mut LasDocument, line: &str) {
        let Some(field) = parse_header_field(line) else {
            return;
        };

        let raw_mnemonic = field.mnemonic;
        let mut curve = CurveDefinition {
            unit: field.unit,
            api_code: field.value,
            description: field.description,
            ..Default::default()
        };

        if document.is_v3() {
            let (description, spec) = extract_format_spec(&curve.description);
            curve.description = description;
            curve.data_format = spec.map(|s| s.format);

            let time_offset = spec.and_then(|s| s.time_offset);
            curve.array_info =
                parse_array_mnemonic(&raw_mnemonic).map(|(base_name, index)| ArrayElementInfo {
                    base_name,
                    index,
                    time_offset,
                });
        }

        let normalized = self
            .aliases
            .get(&raw_mnemonic)
            .cloned()
            .unwrap_or_else(|| raw_mnemonic.clone());
        if normalized != raw_mnemonic {
            curve.original_mnemonic = raw_mnemonic;
        }

        curve.mnemonic = normalized.clone();
        document.curves.push(curve);
        document.curves_order.push(normalized);
    }
}

/// Count content lines inside `~A` sections
pub fn pre_scan(lines: &[&str]) -> usize {
    let mut in_ascii = false;
    let mut count = 0;

    for line in lines {
        match classify(line) {
            LineKind::SectionStart { letter, .. } => {
                in_ascii = Section::from_letter(letter) == Section::AsciiData;
            }
            LineKind::Content if in_ascii => count += 1,
            _ => {}
        }
    }

    count
}

fn parse_version(document: &mut LasDocument, line: &str) {
    let Some(field) = parse_header_field(line) else {
        return;
    };

    match field.mnemonic.as_str() {
        VERS_MNEMONIC => document.version.vers = field.value,
        WRAP_MNEMONIC => document.version.wrap = field.value.to_uppercase(),
        DLM_MNEMONIC => document.version.dlm = field.value,
        _ => {}
    }
}

fn parse_well(document: &mut LasDocument, line: &str) {
    if let Some(field) = parse_header_field(line) {
        document.well.insert(field.mnemonic, field.value);
    }
}

fn parse_parameter(document: &mut LasDocument, line: &str) {
    let Some(field) = parse_header_field(line) else {
        return;
    };

    let mut param = ParameterEntry {
        unit: field.unit,
        value: field.value,
        description: field.description,
        ..Default::default()
    };

    if document.is_v3() {
        let (description, zone) = extract_zone(&param.description);
        param.description = description;
        param.zone = zone;
        param.array_index = parse_array_mnemonic(&field.mnemonic).map(|(_, index)| index);
    }

    param.mnemonic = field.mnemonic;
    document.parameters.push(param);
}

fn parse_other(document: &mut LasDocument, line: &str) {
    document.other.push_str(line);
    document.other.push('\n');
}
