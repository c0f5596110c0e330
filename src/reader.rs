//! Reading LAS files
//!
//! Entry points that chain decoding, header parsing, the version check and
//! the ASCII data reader into one call.

use crate::config::ReaderConfig;
use crate::constants::MAX_SUPPORTED_VERSION;
use crate::data_reader::read_ascii_data;
use crate::diagnostics::Diagnostic;
use crate::encoding::read_with_encoding;
use crate::error::Result;
use crate::models::{LasDocument, LegacyLas};
use crate::parser::LasParser;
use std::path::Path;
use tracing::info;

/// Read a LAS file into the flat legacy mapping shape
pub fn read_las_file(path: impl AsRef<Path>, config: &ReaderConfig) -> Result<LegacyLas> {
    read_las_file_as_object(path, config).map(|document| document.to_legacy())
}

/// Read a LAS file into a full [`LasDocument`]
///
/// # Errors
///
/// Fails only on structural problems: a missing path, a file over
/// `config.max_file_size`, or bytes that cannot be decoded. Content problems
/// are repaired and listed in [`LasDocument::diagnostics`].
pub fn read_las_file_as_object(
    path: impl AsRef<Path>,
    config: &ReaderConfig,
) -> Result<LasDocument> {
    let path = path.as_ref();
    let decoded = read_with_encoding(path, config.encoding.as_deref(), config.max_file_size)?;

    let mut document = parse_las_str(&decoded.content, config);
    document.source_file = Some(path.to_path_buf());
    document.encoding = decoded.encoding;

    info!(
        "Read {}: LAS {}, {} curves, {} rows",
        path.display(),
        document.version.vers,
        document.curves_order.len(),
        document.row_count()
    );

    Ok(document)
}

/// Parse LAS text that is already in memory
pub fn parse_las_str(content: &str, config: &ReaderConfig) -> LasDocument {
    let parser = LasParser::with_config(config);
    let output = parser.parse(content);
    let mut document = output.document;

    check_version(&mut document);

    if !document.is_v3() {
        read_ascii_data(content, &mut document, output.data_line_count);
    }

    document
}

/// Record a diagnostic for versions newer than 3.0
///
/// Non-numeric version strings are accepted silently.
pub fn check_version(document: &mut LasDocument) {
    let Ok(version) = document.version.vers.trim().parse::<f64>() else {
        return;
    };

    if version > MAX_SUPPORTED_VERSION {
        let version = document.version.vers.clone();
        document.record(Diagnostic::UnsupportedVersion { version });
    }
}
