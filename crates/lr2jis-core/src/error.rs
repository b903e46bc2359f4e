//! Error type for glyph table construction.
//!
//! Provides [`GlyphMapError`] for fatal errors that stop a run. There are no
//! recoverable errors: every failure aborts the table build.

use std::fmt;

/// Fatal error types for glyph table construction.
#[derive(Debug, Clone, PartialEq)]
pub enum GlyphMapError {
    /// Error parsing the font description.
    ParseError(String),
    /// I/O error reading inputs or writing artifacts.
    IoError(String),
    /// The character list and glyph record list differ in length.
    LengthMismatch {
        /// Number of distinct characters collected.
        chars: usize,
        /// Number of glyph records parsed.
        glyphs: usize,
    },
    /// The font description contains no glyph records.
    NoGlyphRecords,
    /// A glyph ID lies beyond the allocated table.
    GlyphIdOutOfBounds {
        /// The offending glyph ID.
        glyph_id: u32,
        /// The largest index the table holds.
        max_glyph_id: u32,
    },
    /// A glyph ID does not fit the 16-bit accessor argument.
    GlyphIdOutOfRange {
        /// The offending glyph ID.
        glyph_id: u32,
    },
    /// A character lies outside the Basic Multilingual Plane.
    CodePointOutOfRange {
        /// The offending character.
        ch: char,
        /// Position of the character in the ordered list.
        position: usize,
    },
}

impl fmt::Display for GlyphMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphMapError::ParseError(msg) => write!(f, "parse error: {msg}"),
            GlyphMapError::IoError(msg) => write!(f, "I/O error: {msg}"),
            GlyphMapError::LengthMismatch { chars, glyphs } => {
                write!(f, "len not fit: chars {chars}, lr2glyphs {glyphs}")
            }
            GlyphMapError::NoGlyphRecords => {
                write!(f, "font description contains no #R glyph records")
            }
            GlyphMapError::GlyphIdOutOfBounds {
                glyph_id,
                max_glyph_id,
            } => write!(
                f,
                "glyph id {glyph_id} exceeds table bound (max glyph id: {max_glyph_id})"
            ),
            GlyphMapError::GlyphIdOutOfRange { glyph_id } => write!(
                f,
                "glyph id {glyph_id} does not fit in 16 bits (max: {})",
                u16::MAX
            ),
            GlyphMapError::CodePointOutOfRange { ch, position } => write!(
                f,
                "character {ch:?} (U+{:04X}) at position {position} does not fit in 16 bits",
                u32::from(*ch)
            ),
        }
    }
}

impl std::error::Error for GlyphMapError {}

impl From<std::io::Error> for GlyphMapError {
    fn from(err: std::io::Error) -> Self {
        GlyphMapError::IoError(err.to_string())
    }
}
