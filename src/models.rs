//! Core data structures for parsed LAS documents.
//!
//! Defines the document aggregate and its section records for LAS 1.2, 2.0
//! and 3.0, plus the flat legacy mapping shape returned by
//! [`read_las_file`](crate::reader::read_las_file).

use crate::constants::{
    DEFAULT_NULL_VALUE, DEFAULT_OUTPUT_ENCODING, DEFAULT_VERSION, DLM_MNEMONIC, NULL_MNEMONIC,
    VERS_MNEMONIC, WRAP_MNEMONIC, WRAP_NO, WRAP_YES, delimiters,
};
use crate::diagnostics::Diagnostic;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// Column delimiter of LAS 3.0 data sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Delimiter {
    Space,
    Tab,
    Comma,
}

impl Delimiter {
    /// Resolve a `DLM` value; anything unrecognised means space
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_uppercase().as_str() {
            delimiters::TAB => Delimiter::Tab,
            delimiters::COMMA => Delimiter::Comma,
            _ => Delimiter::Space,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Delimiter::Space => ' ',
            Delimiter::Tab => '\t',
            Delimiter::Comma => ',',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Delimiter::Space => delimiters::SPACE,
            Delimiter::Tab => delimiters::TAB,
            Delimiter::Comma => delimiters::COMMA,
        }
    }
}

/// LAS 3.0 curve data format from `{F}`, `{E}`, `{S}` or `{A:offset}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataFormat {
    Float,
    Scientific,
    String,
    Array,
}

impl DataFormat {
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'F' => Some(DataFormat::Float),
            'E' => Some(DataFormat::Scientific),
            'S' => Some(DataFormat::String),
            'A' => Some(DataFormat::Array),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            DataFormat::Float => 'F',
            DataFormat::Scientific => 'E',
            DataFormat::String => 'S',
            DataFormat::Array => 'A',
        }
    }
}

/// Version information section (`~V`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionSection {
    pub vers: String,
    pub wrap: String,
    /// LAS 3.0 only: SPACE, TAB or COMMA
    pub dlm: String,
}

impl Default for VersionSection {
    fn default() -> Self {
        Self {
            vers: DEFAULT_VERSION.to_string(),
            wrap: WRAP_NO.to_string(),
            dlm: delimiters::SPACE.to_string(),
        }
    }
}

impl VersionSection {
    pub fn is_v3(&self) -> bool {
        self.vers.trim().starts_with('3')
    }

    /// Whether the header declares wrapped data
    pub fn is_wrapped(&self) -> bool {
        self.wrap.trim().eq_ignore_ascii_case(WRAP_YES)
    }

    pub fn delimiter(&self) -> Delimiter {
        Delimiter::from_name(&self.dlm)
    }

    pub fn to_map(&self) -> IndexMap<String, String> {
        let mut map = IndexMap::new();
        map.insert(VERS_MNEMONIC.to_string(), self.vers.clone());
        map.insert(WRAP_MNEMONIC.to_string(), self.wrap.clone());
        map.insert(DLM_MNEMONIC.to_string(), self.dlm.clone());
        map
    }
}

/// Well information section (`~W`)
///
/// Values are kept as the strings found in the file; nothing is coerced here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WellSection {
    pub entries: IndexMap<String, String>,
}

impl WellSection {
    pub fn get(&self, mnemonic: &str) -> Option<&str> {
        self.entries.get(mnemonic).map(String::as_str)
    }

    pub fn insert(&mut self, mnemonic: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(mnemonic.into(), value.into());
    }

    pub fn contains(&self, mnemonic: &str) -> bool {
        self.entries.contains_key(mnemonic)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.entries.iter()
    }

    /// Declared `NULL` value, or -999.25 when absent or non-numeric
    pub fn null_value(&self) -> f64 {
        self.get(NULL_MNEMONIC)
            .and_then(|value| value.trim().parse::<f64>().ok())
            .unwrap_or(DEFAULT_NULL_VALUE)
    }
}

/// Array element metadata of a LAS 3.0 curve such as `NMR[2]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayElementInfo {
    pub base_name: String,
    /// 1-based element index
    pub index: u32,
    /// Offset from the first element in milliseconds, from `{A:offset}`
    pub time_offset: Option<f64>,
}

/// Single curve definition from the `~C` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveDefinition {
    pub mnemonic: String,
    pub unit: String,
    pub api_code: String,
    pub description: String,
    /// Name before normalisation or duplicate repair; empty if unchanged
    pub original_mnemonic: String,
    pub data_format: Option<DataFormat>,
    pub array_info: Option<ArrayElementInfo>,
}

impl CurveDefinition {
    pub fn new(mnemonic: impl Into<String>) -> Self {
        Self {
            mnemonic: mnemonic.into(),
            ..Default::default()
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_array_element(&self) -> bool {
        self.array_info.is_some()
    }

    pub fn is_string(&self) -> bool {
        self.data_format == Some(DataFormat::String)
    }

    /// Base name for array curves, the mnemonic otherwise
    pub fn base_mnemonic(&self) -> &str {
        match &self.array_info {
            Some(info) => &info.base_name,
            None => &self.mnemonic,
        }
    }
}

/// LAS 3.0 zone association of a parameter (`| ZONE[n]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterZone {
    pub zone_name: String,
    pub zone_index: Option<u32>,
}

/// Single entry from the `~P` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterEntry {
    pub mnemonic: String,
    pub unit: String,
    pub value: String,
    pub description: String,
    pub array_index: Option<u32>,
    pub zone: Option<ParameterZone>,
}

impl ParameterEntry {
    pub fn new(mnemonic: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            mnemonic: mnemonic.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    /// Mnemonic without its `[n]` suffix
    pub fn base_mnemonic(&self) -> &str {
        match (self.array_index, self.mnemonic.find('[')) {
            (Some(_), Some(pos)) => &self.mnemonic[..pos],
            _ => &self.mnemonic,
        }
    }
}

/// One `~A` block of a LAS 3.0 file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSection {
    pub name: String,
    pub curves_order: Vec<String>,
    /// Numeric data; `{S}` curves hold a zero-filled placeholder
    pub data: IndexMap<String, Vec<f64>>,
    /// Values of this block's `{S}` curves
    pub string_data: IndexMap<String, Vec<String>>,
}

impl DataSection {
    pub fn row_count(&self) -> usize {
        self.data.values().next().map_or(0, Vec::len)
    }
}

/// A parsed LAS file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LasDocument {
    pub version: VersionSection,
    pub well: WellSection,
    pub curves: Vec<CurveDefinition>,
    pub parameters: Vec<ParameterEntry>,
    pub other: String,
    /// Numeric curve data keyed by final curve name
    pub logs: IndexMap<String, Vec<f64>>,
    pub curves_order: Vec<String>,
    pub data_sections: Vec<DataSection>,
    /// LAS 3.0 `{S}` curves, kept out of `logs`
    pub string_data: IndexMap<String, Vec<String>>,
    pub source_file: Option<PathBuf>,
    pub encoding: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl Default for LasDocument {
    fn default() -> Self {
        Self {
            version: VersionSection::default(),
            well: WellSection::default(),
            curves: Vec::new(),
            parameters: Vec::new(),
            other: String::new(),
            logs: IndexMap::new(),
            curves_order: Vec::new(),
            data_sections: Vec::new(),
            string_data: IndexMap::new(),
            source_file: None,
            encoding: DEFAULT_OUTPUT_ENCODING.to_string(),
            diagnostics: Vec::new(),
        }
    }
}

impl LasDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_v3(&self) -> bool {
        self.version.is_v3()
    }

    pub fn null_value(&self) -> f64 {
        self.well.null_value()
    }

    /// Log a diagnostic and keep it on the document
    pub fn record(&mut self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    /// Find a curve by mnemonic, or by base name for array curves
    pub fn curve(&self, mnemonic: &str) -> Option<&CurveDefinition> {
        self.curves
            .iter()
            .find(|c| c.mnemonic == mnemonic || c.base_mnemonic() == mnemonic)
    }

    /// All elements of an array curve, in declaration order
    pub fn array_curves(&self, base_name: &str) -> Vec<&CurveDefinition> {
        self.curves
            .iter()
            .filter(|c| {
                c.array_info
                    .as_ref()
                    .is_some_and(|info| info.base_name == base_name)
            })
            .collect()
    }

    pub fn parameter(&self, mnemonic: &str) -> Option<&ParameterEntry> {
        self.parameters.iter().find(|p| p.mnemonic == mnemonic)
    }

    pub fn parameters_by_zone(&self, zone_name: &str) -> Vec<&ParameterEntry> {
        self.parameters
            .iter()
            .filter(|p| p.zone.as_ref().is_some_and(|z| z.zone_name == zone_name))
            .collect()
    }

    /// Shared length of the numeric curve arrays
    pub fn row_count(&self) -> usize {
        self.logs.values().next().map_or(0, Vec::len)
    }

    /// Flatten into the legacy mapping shape
    pub fn to_legacy(&self) -> LegacyLas {
        let parameters = self
            .parameters
            .iter()
            .map(|p| (p.mnemonic.clone(), p.value.clone()))
            .collect();

        LegacyLas {
            version: self.version.to_map(),
            well: self.well.entries.clone(),
            parameters,
            logs: self.logs.clone(),
            curves_order: self.curves_order.clone(),
        }
    }
}

/// Flat mapping shape: well values are strings, logs are equal-length arrays
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyLas {
    pub version: IndexMap<String, String>,
    pub well: IndexMap<String, String>,
    pub parameters: IndexMap<String, String>,
    pub logs: IndexMap<String, Vec<f64>>,
    pub curves_order: Vec<String>,
}

impl From<LegacyLas> for LasDocument {
    fn from(legacy: LegacyLas) -> Self {
        let defaults = VersionSection::default();
        let version_value = |key: &str, fallback: &str| {
            legacy
                .version
                .get(key)
                .cloned()
                .unwrap_or_else(|| fallback.to_string())
        };

        let version = VersionSection {
            vers: version_value(VERS_MNEMONIC, &defaults.vers),
            wrap: version_value(WRAP_MNEMONIC, &defaults.wrap),
            dlm: version_value(DLM_MNEMONIC, &defaults.dlm),
        };

        let curves = legacy
            .curves_order
            .iter()
            .map(CurveDefinition::new)
            .collect();

        let parameters = legacy
            .parameters
            .into_iter()
            .map(|(mnemonic, value)| ParameterEntry::new(mnemonic, value))
            .collect();

        Self {
            version,
            well: WellSection {
                entries: legacy.well,
            },
            curves,
            parameters,
            logs: legacy.logs,
            curves_order: legacy.curves_order,
            ..Default::default()
        }
    }
}
