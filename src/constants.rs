//! Constants for LAS processing
//!
//! Default values, section letters and format literals shared by the
//! parser, the data reader and the writer.

// =============================================================================
// Null Sentinel
// =============================================================================

/// Null value used when the well section declares none (or a non-numeric one)
pub const DEFAULT_NULL_VALUE: f64 = -999.25;

/// Well-section mnemonic holding the null sentinel
pub const NULL_MNEMONIC: &str = "NULL";

// =============================================================================
// Version Section
// =============================================================================

pub const VERS_MNEMONIC: &str = "VERS";
pub const WRAP_MNEMONIC: &str = "WRAP";
pub const DLM_MNEMONIC: &str = "DLM";

/// Version assumed when the file has no `VERS` entry
pub const DEFAULT_VERSION: &str = "2.0";

/// Highest LAS version this crate knows how to read
pub const MAX_SUPPORTED_VERSION: f64 = 3.0;

pub const WRAP_YES: &str = "YES";
pub const WRAP_NO: &str = "NO";

/// Delimiter names accepted in the LAS 3.0 `DLM` entry
pub mod delimiters {
    pub const SPACE: &str = "SPACE";
    pub const TAB: &str = "TAB";
    pub const COMMA: &str = "COMMA";
}

// =============================================================================
// Section Letters
// =============================================================================

/// Leading character of every section header line
pub const SECTION_MARKER: char = '~';

/// Leading character of comment lines
pub const COMMENT_MARKER: char = '#';

pub mod section_letters {
    pub const VERSION: char = 'V';
    pub const WELL: char = 'W';
    pub const CURVE: char = 'C';
    pub const PARAMETER: char = 'P';
    pub const OTHER: char = 'O';
    pub const ASCII: char = 'A';
}

// =============================================================================
// Encoding
// =============================================================================

/// Decoding attempts in order when no encoding is given and no BOM is present.
///
/// Ordered by likelihood for well-log archives: modern files are UTF-8, older
/// Russian exports are windows-1251 or DOS 866, western ones windows-1252.
pub const FALLBACK_ENCODINGS: &[&str] = &["utf-8", "windows-1251", "windows-1252", "ibm866"];

/// Encoding used for output unless configured otherwise
pub const DEFAULT_OUTPUT_ENCODING: &str = "utf-8";

// =============================================================================
// Writer
// =============================================================================

/// Decimal places for numeric data values
pub const DEFAULT_PRECISION: usize = 4;

pub const VERSION_HEADER: &str = "~VERSION INFORMATION";
pub const WELL_HEADER: &str = "~WELL INFORMATION";
pub const CURVE_HEADER: &str = "~CURVE INFORMATION";
pub const PARAMETER_HEADER: &str = "~PARAMETER INFORMATION";
pub const OTHER_HEADER: &str = "~OTHER";

pub const VERS_DESCRIPTION: &str = "CWLS LOG ASCII STANDARD";
pub const VERS_DESCRIPTION_V3: &str = "CWLS LOG ASCII STANDARD -VERSION 3.0";
pub const WRAP_DESCRIPTION: &str = "ONE LINE PER DEPTH STEP";
pub const DLM_DESCRIPTION: &str = "DELIMITING CHARACTER BETWEEN DATA COLUMNS";
