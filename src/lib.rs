//! LAS Well-Log Library
//!
//! Reads and writes Log ASCII Standard well-log files in the 1.2, 2.0 and
//! 3.0 dialects.
//!
//! This library provides tools for:
//! - Parsing version, well, curve, parameter and other header sections
//! - Reading wrapped and non-wrapped ASCII data, including files whose
//!   `WRAP` flag does not match their layout
//! - LAS 3.0 array curves, format tags, zone associations, delimited and
//!   multiple data sections
//! - Repairing duplicate mnemonics, short rows and incomplete wrapped steps
//!   with recorded diagnostics instead of failing
//! - Writing documents back out, and exporting curves to polars / Parquet
//!
//! # Example
//!
//! ```no_run
//! use lasdev::{ReaderConfig, WriterConfig, read_las_file_as_object, write_las_file};
//!
//! # fn example() -> lasdev::Result<()> {
//! let document = read_las_file_as_object("well.las", &ReaderConfig::default())?;
//! println!("{} rows of {:?}", document.row_count(), document.curves_order);
//! write_las_file("well_copy.las", &document, &WriterConfig::default())?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod data_reader;
pub mod diagnostics;
pub mod encoding;
pub mod error;
pub mod frame;
pub mod models;
pub mod parser;
pub mod reader;
pub mod writer;

// Re-export commonly used types
pub use config::{ReaderConfig, WriterConfig};
pub use diagnostics::Diagnostic;
pub use error::{LasError, Result};
pub use frame::write_parquet;
pub use models::{
    ArrayElementInfo, CurveDefinition, DataFormat, DataSection, Delimiter, LasDocument, LegacyLas,
    ParameterEntry, ParameterZone, VersionSection, WellSection,
};
pub use parser::LasParser;
pub use reader::{parse_las_str, read_las_file, read_las_file_as_object};
pub use writer::{to_las_string, write_las_file};
