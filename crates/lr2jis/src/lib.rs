//! lr2jis: Build LR2 glyph ID to Unicode lookup tables.
//!
//! This is the public API facade crate for lr2jis. It re-exports types from
//! lr2jis-core and uses lr2jis-parse to read font descriptions.
//!
//! # Architecture
//!
//! - **lr2jis-core**: Character ordering, glyph records, table construction and rendering
//! - **lr2jis-parse**: Shift-JIS decoding and `.lr2font` parsing
//! - **lr2jis** (this crate): File-level pipeline and artifact writing
//!
//! # Example
//!
//! ```no_run
//! use lr2jis::{ArtifactOptions, MapOptions, Resolution};
//! use std::path::Path;
//!
//! let source = Path::new("SHIFT-JIS.txt");
//! let resolution = Resolution::open_files(source, "font.lr2font", &MapOptions::default())?;
//! resolution.write_artifacts(source, &ArtifactOptions::default())?;
//! # Ok::<(), lr2jis::GlyphMapError>(())
//! ```

mod artifacts;
mod resolution;

pub use artifacts::{
    ArtifactOptions, ECHO_SUFFIX, MAP_DUMP_SUFFIX, WrittenArtifacts, companion_path,
};
pub use resolution::Resolution;

pub use lr2jis_core;
pub use lr2jis_core::{
    CharList, GlyphMap, GlyphMapError, GlyphRecord, HeaderOptions, MapOptions, OrderingPolicy,
    SizingRule,
};
pub use lr2jis_parse;
pub use lr2jis_parse::{FontDescription, ParseError, TextureEntry};
