//! Writing LAS files
//!
//! Serialises a [`LasDocument`] in the fixed section order V, W, C, P, O, A.
//! Output is always one row per depth step, so the header always declares
//! `WRAP = NO` whatever the input was. LAS 3.0 documents get their format,
//! array offset and zone tags re-attached to the descriptions.

use crate::config::WriterConfig;
use crate::constants::{
    CURVE_HEADER, DLM_DESCRIPTION, OTHER_HEADER, PARAMETER_HEADER, VERS_DESCRIPTION,
    VERS_DESCRIPTION_V3, VERSION_HEADER, WELL_HEADER, WRAP_DESCRIPTION, WRAP_NO,
};
use crate::encoding::encode_text;
use crate::error::{LasError, Result};
use crate::models::{CurveDefinition, Delimiter, LasDocument, ParameterEntry};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Write a document to `path` in the configured encoding
pub fn write_las_file(
    path: impl AsRef<Path>,
    document: &LasDocument,
    config: &WriterConfig,
) -> Result<()> {
    let path = path.as_ref();
    let content = to_las_string(document, config);
    let bytes = encode_text(&content, &config.encoding)?;

    fs::write(path, &bytes).map_err(|e| LasError::write(path, e))?;

    debug!(
        "Wrote {} ({} bytes, {})",
        path.display(),
        bytes.len(),
        config.encoding
    );
    Ok(())
}

/// Render a document as LAS text
pub fn to_las_string(document: &LasDocument, config: &WriterConfig) -> String {
    let writer = LasWriter::new(document, config);
    let mut lines = Vec::new();

    writer.write_version(&mut lines);
    writer.write_well(&mut lines);
    writer.write_curves(&mut lines);
    writer.write_parameters(&mut lines);
    writer.write_other(&mut lines);
    writer.write_data(&mut lines);

    let mut content = lines.join("\n");
    content.push('\n');
    content
}

struct LasWriter<'a> {
    document: &'a LasDocument,
    precision: usize,
    is_v3: bool,
    null_value: f64,
}

impl<'a> LasWriter<'a> {
    fn new(document: &'a LasDocument, config: &WriterConfig) -> Self {
        Self {
            document,
            precision: config.precision,
            is_v3: document.is_v3(),
            null_value: document.null_value(),
        }
    }

    fn write_version(&self, lines: &mut Vec<String>) {
        let version = &self.document.version;
        let description = if self.is_v3 {
            VERS_DESCRIPTION_V3
        } else {
            VERS_DESCRIPTION
        };

        lines.push(VERSION_HEADER.to_string());
        lines.push(format!(" VERS.   {}  : {}", version.vers, description));
        lines.push(format!(" WRAP.   {}  : {}", WRAP_NO, WRAP_DESCRIPTION));
        if self.is_v3 {
            lines.push(format!(
                " DLM .   {} : {}",
                version.delimiter().name(),
                DLM_DESCRIPTION
            ));
        }
        lines.push(String::new());
    }

    fn write_well(&self, lines: &mut Vec<String>) {
        lines.push(WELL_HEADER.to_string());
        for (mnemonic, value) in self.document.well.iter() {
            lines.push(format!(" {}.   {}  :", mnemonic, value));
        }
        lines.push(String::new());
    }

    fn write_curves(&self, lines: &mut Vec<String>) {
        lines.push(CURVE_HEADER.to_string());
        for curve in self.curves().iter() {
            lines.push(self.curve_line(curve));
        }
        lines.push(String::new());
    }

    fn curve_line(&self, curve: &CurveDefinition) -> String {
        let mut description = curve.description.clone();

        if self.is_v3 {
            if let Some(format) = curve.data_format {
                let offset = curve
                    .array_info
                    .as_ref()
                    .and_then(|info| info.time_offset)
                    .map(|offset| format!(":{}", offset))
                    .unwrap_or_default();
                let tag = format!("{{{}{}}}", format.code(), offset);
                description = if description.is_empty() {
                    tag
                } else {
                    format!("{}  {}", description, tag)
                };
            }
        }

        let api = if curve.api_code.is_empty() {
            String::new()
        } else {
            format!("  {}", curve.api_code)
        };

        format!(
            " {}.{}{}  : {}",
            curve.mnemonic, curve.unit, api, description
        )
    }

    fn write_parameters(&self, lines: &mut Vec<String>) {
        if self.document.parameters.is_empty() {
            return;
        }

        lines.push(PARAMETER_HEADER.to_string());
        for param in &self.document.parameters {
            lines.push(self.parameter_line(param));
        }
        lines.push(String::new());
    }

    fn parameter_line(&self, param: &ParameterEntry) -> String {
        let mut description = param.description.clone();

        if self.is_v3 {
            if let Some(zone) = &param.zone {
                description.push_str(" | ");
                description.push_str(&zone.zone_name);
                if let Some(index) = zone.zone_index {
                    description.push_str(&format!("[{}]", index));
                }
            }
        }

        format!(
            " {}.{}  {}  : {}",
            param.mnemonic, param.unit, param.value, description
        )
    }

    fn write_other(&self, lines: &mut Vec<String>) {
        let other = self.document.other.trim_end();
        if other.trim().is_empty() {
            return;
        }

        lines.push(OTHER_HEADER.to_string());
        lines.push(other.to_string());
        lines.push(String::new());
    }

    fn write_data(&self, lines: &mut Vec<String>) {
        let document = self.document;
        if document.data_sections.is_empty() {
            self.write_logs(lines);
            return;
        }

        let delimiter = self.delimiter();
        let last = document.data_sections.len() - 1;
        for (index, section) in document.data_sections.iter().enumerate() {
            if section.name.is_empty() {
                lines.push("~A".to_string());
            } else {
                lines.push(format!("~A {}", section.name));
            }

            // `logs` and `string_data` mirror the last block and carry user edits
            let columns: Vec<Column<'_>> = section
                .curves_order
                .iter()
                .map(|name| {
                    let section_strings = section.string_data.get(name);
                    let section_numbers = section.data.get(name);
                    if index == last {
                        self.column(
                            document.string_data.get(name).or(section_strings),
                            document.logs.get(name).or(section_numbers),
                        )
                    } else {
                        self.column(
                            section_strings.or_else(|| document.string_data.get(name)),
                            section_numbers,
                        )
                    }
                })
                .collect();
            self.write_rows(lines, &columns, delimiter);
        }
    }

    fn write_logs(&self, lines: &mut Vec<String>) {
        let document = self.document;
        let names: Vec<&String> = if document.curves_order.is_empty() {
            document.logs.keys().collect()
        } else {
            document.curves_order.iter().collect()
        };

        let columns: Vec<Column<'_>> = names
            .iter()
            .map(|name| {
                self.column(
                    document.string_data.get(*name),
                    document.logs.get(*name),
                )
            })
            .collect();
        if columns.iter().all(|c| c.len() == 0) {
            return;
        }

        let header: Vec<&str> = names.iter().map(|name| name.as_str()).collect();
        lines.push(format!("~A  {}", header.join("  ")));
        self.write_rows(lines, &columns, self.delimiter());
    }

    /// Pick a curve's value source; string data wins over numbers
    fn column(
        &self,
        strings: Option<&'a Vec<String>>,
        numbers: Option<&'a Vec<f64>>,
    ) -> Column<'a> {
        match (strings, numbers) {
            (Some(values), _) => Column::Strings(values),
            (None, Some(values)) => Column::Numbers(values),
            (None, None) => Column::Missing,
        }
    }

    fn write_rows(&self, lines: &mut Vec<String>, columns: &[Column<'_>], delimiter: &str) {
        let rows = columns.iter().map(Column::len).max().unwrap_or(0);
        for row in 0..rows {
            let cells: Vec<Cow<'_, str>> = columns
                .iter()
                .map(|column| self.cell(column, row))
                .collect();
            lines.push(cells.join(delimiter));
        }
    }

    fn cell<'c>(&self, column: &Column<'c>, row: usize) -> Cow<'c, str> {
        match *column {
            Column::Strings(values) if row < values.len() => Cow::Borrowed(values[row].as_str()),
            Column::Numbers(values) if row < values.len() => {
                Cow::Owned(format!("{:.*}", self.precision, values[row]))
            }
            _ => Cow::Owned(format!("{:.*}", self.precision, self.null_value)),
        }
    }

    fn delimiter(&self) -> &'static str {
        if !self.is_v3 {
            return " ";
        }
        match self.document.version.delimiter() {
            Delimiter::Space => " ",
            Delimiter::Tab => "\t",
            Delimiter::Comma => ",",
        }
    }

    /// Declared curves, or curves made up from the ordering when none were declared
    fn curves(&self) -> Cow<'a, [CurveDefinition]> {
        if !self.document.curves.is_empty() {
            return Cow::Borrowed(self.document.curves.as_slice());
        }
        let names = if self.document.curves_order.is_empty() {
            self.document.logs.keys().cloned().collect::<Vec<_>>()
        } else {
            self.document.curves_order.clone()
        };
        Cow::Owned(names.into_iter().map(CurveDefinition::new).collect())
    }
}

enum Column<'a> {
    Numbers(&'a Vec<f64>),
    Strings(&'a Vec<String>),
    Missing,
}

impl Column<'_> {
    fn len(&self) -> usize {
        match self {
            Column::Numbers(values) => values.len(),
            Column::Strings(values) => values.len(),
            Column::Missing => 0,
        }
    }
}
