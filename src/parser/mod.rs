//! LAS text parsing
//!
//! Turns decoded LAS text into a [`LasDocument`](crate::models::LasDocument).
//!
//! # Architecture
//!
//! - [`line`] - classifies each physical line
//! - [`field`] - `MNEMONIC .UNIT VALUE : DESCRIPTION` header fields
//! - [`extensions`] - LAS 3.0 array mnemonics, format tags and zones
//! - [`assembler`] - section state machine producing the document
//! - [`data_v3`] - LAS 3.0 delimited data sections
//!
//! LAS 1.2/2.0 numeric data is read afterwards by
//! [`data_reader`](crate::data_reader), which needs the finished header to
//! arbitrate wrap mode.

pub mod assembler;
pub mod data_v3;
pub mod extensions;
pub mod field;
pub mod line;

#[cfg(test)]
pub mod tests;

pub use assembler::{LasParser, ParseOutput, Section};
pub use field::{HeaderField, parse_header_field};
pub use line::{LineKind, classify};
