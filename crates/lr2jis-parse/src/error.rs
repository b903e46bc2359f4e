//! Error types for font description parsing.
//!
//! Uses [`thiserror`] for ergonomic error derivation. [`ParseError`] converts
//! into [`GlyphMapError`] for unified error handling across the workspace.

use lr2jis_core::GlyphMapError;
use thiserror::Error;

/// Error type for reading and parsing an LR2 font description.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Error reading the font description.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The font description is not valid Shift-JIS.
    #[error("font description is not valid Shift-JIS (first bad byte at offset {offset})")]
    Decode {
        /// Byte offset of the first undecodable sequence.
        offset: usize,
    },

    /// A glyph record line has too few comma-separated fields.
    #[error("line {line}: glyph record needs at least {expected} fields, found {found}")]
    TooFewFields {
        /// 1-based line number.
        line: usize,
        /// Minimum number of fields.
        expected: usize,
        /// Number of fields present.
        found: usize,
    },

    /// A glyph record field is not an unsigned integer.
    #[error("line {line}: field {field} is not an unsigned integer: {value:?}")]
    InvalidInteger {
        /// 1-based line number.
        line: usize,
        /// 0-based field index within the comma split.
        field: usize,
        /// The raw field text.
        value: String,
    },

    /// A core library error.
    #[error(transparent)]
    Core(#[from] GlyphMapError),
}

impl From<ParseError> for GlyphMapError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Io(e) => GlyphMapError::IoError(e.to_string()),
            ParseError::Core(e) => e,
            other => GlyphMapError::ParseError(other.to_string()),
        }
    }
}
