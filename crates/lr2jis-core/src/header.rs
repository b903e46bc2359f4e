//! C header rendering for a [`GlyphMap`].
//!
//! The header declares the table as a `uint16_t` array and a lookup function
//! that returns 0 for any code past the last slot.

use std::fmt::Write;

use crate::glyph_map::GlyphMap;

/// Default file name of the generated header.
pub const DEFAULT_HEADER_NAME: &str = "LR2JIS.h";

/// Name of the generated table array.
pub const TABLE_NAME: &str = "_LR2GlyphID";

/// Name of the generated lookup function.
pub const ACCESSOR_NAME: &str = "ConvertLR2JIStoUTF16";

/// Options for header rendering.
#[derive(Debug, Clone, Default)]
pub struct HeaderOptions {
    /// Lines placed in the banner comment after the generated-file notice.
    ///
    /// Used for provenance such as the source file names.
    pub banner: Vec<String>,
}

/// Render `map` as a C header.
pub fn render_header(map: &GlyphMap, options: &HeaderOptions) -> String {
    let mut out = String::with_capacity(map.len() * 7 + 512);

    out.push_str("// Generated by lr2jis. Do not edit.\n");
    for line in &options.banner {
        let _ = writeln!(out, "// {line}");
    }
    out.push_str("#pragma once\n\n#include <stdint.h>\n\n");

    let _ = write!(out, "uint16_t {TABLE_NAME}[{}] = {{", map.len());
    for code in map.slots() {
        let _ = writeln!(out, "{code},");
    }
    out.push_str("};\n\n");

    let _ = write!(
        out,
        "uint16_t {ACCESSOR_NAME}(uint16_t lr2_code)\n\
         {{\n\
         \x20 if (lr2_code > {max}) return 0;\n\
         \x20 return {TABLE_NAME}[lr2_code];\n\
         }}\n",
        max = map.max_glyph_id(),
    );

    out
}
