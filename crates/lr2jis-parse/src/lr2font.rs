//! Parser for LR2 font description (`.lr2font`) text.
//!
//! A font description is a list of comma-separated directives, one per line:
//!
//! ```text
//! #S,16                     font height
//! #T,0,font0.png            texture id and file name
//! #R,4640,0,32,16,16,16     glyph id, texture id, x, y, width, height
//! // comment
//! ```
//!
//! Only `#R` records contribute to the glyph table. `#S` and `#T` are kept as
//! metadata; malformed ones are skipped because they never affect the table.

use std::path::Path;

use lr2jis_core::GlyphRecord;

use crate::decode::decode_shift_jis;
use crate::error::ParseError;

/// Marker that starts a glyph record line.
pub const RECORD_MARKER: &str = "#R";

/// Minimum number of comma-separated fields in a glyph record line.
pub const RECORD_MIN_FIELDS: usize = 5;

const GLYPH_ID_FIELD: usize = 1;
const TEXTURE_FIELD: usize = 2;
const COLUMN_FIELD: usize = 3;
const ROW_FIELD: usize = 4;

/// A texture referenced by a `#T` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureEntry {
    /// Texture index that `#R` records refer to.
    pub id: u32,
    /// Texture file name, relative to the font archive.
    pub file_name: String,
}

/// A parsed LR2 font description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontDescription {
    /// Font height in pixels, from `#S`.
    pub height: Option<u32>,
    /// Textures, in file order.
    pub textures: Vec<TextureEntry>,
    /// Glyph records, in file order.
    pub glyphs: Vec<GlyphRecord>,
}

impl FontDescription {
    /// Read and parse a font description file.
    pub fn open_file(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Decode Shift-JIS `bytes` and parse them.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        let text = decode_shift_jis(bytes)?;
        parse_lr2font(&text)
    }
}

/// Parse decoded font description text.
///
/// # Errors
///
/// - [`ParseError::TooFewFields`] if an `#R` line has fewer than
///   [`RECORD_MIN_FIELDS`] fields.
/// - [`ParseError::InvalidInteger`] if one of its fields is not an unsigned
///   integer.
pub fn parse_lr2font(text: &str) -> Result<FontDescription, ParseError> {
    let mut font = FontDescription::default();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;

        if line.starts_with(RECORD_MARKER) {
            font.glyphs.push(parse_record(line, line_number)?);
        } else if line.starts_with("#S") {
            match parse_height(line) {
                Some(height) => font.height = Some(height),
                None => skip_directive(line, line_number),
            }
        } else if line.starts_with("#T") {
            match parse_texture(line) {
                Some(texture) => font.textures.push(texture),
                None => skip_directive(line, line_number),
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        glyphs = font.glyphs.len(),
        textures = font.textures.len(),
        height = ?font.height,
        "parsed font description"
    );

    Ok(font)
}

/// Parse one `#R` line into a [`GlyphRecord`].
///
/// Fields 1 to 4 are glyph id, texture id, x and y. Anything after them
/// (glyph width and height) is ignored.
pub fn parse_record(line: &str, line_number: usize) -> Result<GlyphRecord, ParseError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < RECORD_MIN_FIELDS {
        return Err(ParseError::TooFewFields {
            line: line_number,
            expected: RECORD_MIN_FIELDS,
            found: fields.len(),
        });
    }

    let field = |index: usize| -> Result<u32, ParseError> {
        let raw = fields[index];
        raw.trim().parse().map_err(|_| ParseError::InvalidInteger {
            line: line_number,
            field: index,
            value: raw.to_string(),
        })
    };

    Ok(GlyphRecord {
        texture_id: field(TEXTURE_FIELD)?,
        row: field(ROW_FIELD)?,
        column: field(COLUMN_FIELD)?,
        glyph_id: field(GLYPH_ID_FIELD)?,
    })
}

fn parse_height(line: &str) -> Option<u32> {
    line.split(',').nth(1)?.trim().parse().ok()
}

fn parse_texture(line: &str) -> Option<TextureEntry> {
    let mut fields = line.split(',').skip(1);
    let id = fields.next()?.trim().parse().ok()?;
    let file_name = fields.next()?.trim();
    if file_name.is_empty() {
        return None;
    }
    Some(TextureEntry {
        id,
        file_name: file_name.to_string(),
    })
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn skip_directive(line: &str, line_number: usize) {
    #[cfg(feature = "tracing")]
    tracing::warn!(line = line_number, text = line, "skipping malformed directive");
}
