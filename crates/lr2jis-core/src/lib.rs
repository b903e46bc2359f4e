//! lr2jis-core: Backend-independent data types and algorithms.
//!
//! This crate provides the types (CharList, GlyphRecord, GlyphMap) and
//! algorithms (character ordering, positional pairing, header rendering) used
//! to turn an LR2 font's glyph IDs into a Unicode lookup table. It does no
//! file I/O; see `lr2jis-parse` for reading font descriptions.

pub mod charset;
pub mod echo;
pub mod error;
pub mod glyph;
pub mod glyph_map;
pub mod header;

pub use charset::{CharList, OrderingPolicy};
pub use echo::{ECHO_LINE_WIDTH, render_echo, render_map_dump};
pub use error::GlyphMapError;
pub use glyph::{GlyphRecord, sort_atlas_order};
pub use glyph_map::{GlyphMap, MapOptions, SizingRule};
pub use header::{
    ACCESSOR_NAME, DEFAULT_HEADER_NAME, HeaderOptions, TABLE_NAME, render_header,
};
