//! Byte decoding for LAS files
//!
//! Well-log archives mix modern UTF-8 files with Windows and DOS code-page
//! exports. Decoding is done here once, so the parser only ever sees text.

use crate::constants::FALLBACK_ENCODINGS;
use crate::error::{LasError, Result};
use encoding_rs::{Encoding, UTF_8};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

const BOM: char = '\u{feff}';

/// Decoded file content with the name of the encoding that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub encoding: String,
    pub content: String,
}

/// Read a file and decode it
///
/// The path and the optional size limit are checked on metadata before any
/// bytes are read.
pub fn read_with_encoding(
    path: &Path,
    encoding: Option<&str>,
    max_file_size: Option<u64>,
) -> Result<DecodedText> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(LasError::not_found(path, e.to_string()));
        }
        Err(e) => return Err(e.into()),
    };
    if !metadata.is_file() {
        return Err(LasError::not_found(path, "not a regular file"));
    }

    if let Some(limit) = max_file_size {
        if metadata.len() > limit {
            return Err(LasError::SizeExceeded {
                path: path.to_path_buf(),
                size: metadata.len(),
                limit,
            });
        }
    }

    let bytes = fs::read(path)?;
    let decoded = decode_bytes(&bytes, encoding)?;
    debug!(
        "Decoded {} ({} bytes) as {}",
        path.display(),
        bytes.len(),
        decoded.encoding
    );
    Ok(decoded)
}

/// Decode raw bytes
///
/// With an explicit label the bytes must decode cleanly in that encoding.
/// Without one, a byte order mark wins, then each of [`FALLBACK_ENCODINGS`]
/// is tried in turn, and finally UTF-8 with replacement characters. A
/// single-byte candidate is rejected when it yields C1 control characters,
/// which is how unassigned code-page bytes decode.
pub fn decode_bytes(bytes: &[u8], label: Option<&str>) -> Result<DecodedText> {
    if let Some(label) = label {
        let encoding = lookup(label)?;
        let content = encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .ok_or_else(|| LasError::encoding(label, "malformed byte sequence"))?;
        let text: &str = &content;
        return Ok(DecodedText {
            encoding: encoding.name().to_string(),
            content: text.strip_prefix(BOM).unwrap_or(text).to_string(),
        });
    }

    if let Some((encoding, bom_length)) = Encoding::for_bom(bytes) {
        let (content, _) = encoding.decode_without_bom_handling(&bytes[bom_length..]);
        return Ok(DecodedText {
            encoding: encoding.name().to_string(),
            content: content.into_owned(),
        });
    }

    for candidate in FALLBACK_ENCODINGS {
        let Some(encoding) = Encoding::for_label(candidate.as_bytes()) else {
            continue;
        };
        let Some(content) = encoding.decode_without_bom_handling_and_without_replacement(bytes)
        else {
            continue;
        };
        if encoding != UTF_8 && content.chars().any(is_c1_control) {
            debug!("{} left unassigned bytes, trying next", encoding.name());
            continue;
        }
        return Ok(DecodedText {
            encoding: encoding.name().to_string(),
            content: content.into_owned(),
        });
    }

    let (content, _) = UTF_8.decode_without_bom_handling(bytes);
    Ok(DecodedText {
        encoding: UTF_8.name().to_string(),
        content: content.into_owned(),
    })
}

/// Encode text for output in the given encoding
pub fn encode_text(content: &str, label: &str) -> Result<Vec<u8>> {
    let encoding = lookup(label)?;
    let (bytes, _, unmappable) = encoding.encode(content);
    if unmappable {
        return Err(LasError::encoding(
            label,
            "text contains characters the encoding cannot represent",
        ));
    }
    Ok(bytes.into_owned())
}

fn is_c1_control(c: char) -> bool {
    ('\u{80}'..='\u{9f}').contains(&c)
}

fn lookup(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| LasError::encoding(label, "unknown encoding label"))
}
