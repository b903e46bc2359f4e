//! lr2jis-parse: LR2 font description reading.
//!
//! Decodes `.lr2font` files (Shift-JIS text) and parses their directives into
//! a [`FontDescription`]. Depends on lr2jis-core for the glyph record type.

pub mod decode;
pub mod error;
pub mod lr2font;

pub use decode::decode_shift_jis;
pub use error::ParseError;
pub use lr2font::{FontDescription, TextureEntry, parse_lr2font, parse_record};
pub use lr2jis_core;
