//! Top-level pipeline: inputs in, glyph table out.

use std::path::Path;

use lr2jis_core::{CharList, GlyphMap, GlyphMapError, MapOptions};
use lr2jis_parse::FontDescription;

/// The result of pairing a character source with a font description.
#[derive(Debug, Clone)]
pub struct Resolution {
    chars: CharList,
    font: FontDescription,
    map: GlyphMap,
}

impl Resolution {
    /// Read both input files and build the glyph table.
    ///
    /// The character source is read as UTF-8, the font description as
    /// Shift-JIS.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphMapError::IoError`] if either file cannot be read (or
    /// the character source is not UTF-8), [`GlyphMapError::ParseError`] for
    /// a malformed font description, and any error of [`GlyphMap::build`].
    pub fn open_files(
        char_source: impl AsRef<Path>,
        font_description: impl AsRef<Path>,
        options: &MapOptions,
    ) -> Result<Self, GlyphMapError> {
        let text = std::fs::read_to_string(char_source)?;
        let font = FontDescription::open_file(font_description)?;
        Self::from_parts(&text, font, options)
    }

    /// Build the glyph table from in-memory inputs.
    ///
    /// `font_bytes` is the raw Shift-JIS font description.
    pub fn from_sources(
        text: &str,
        font_bytes: &[u8],
        options: &MapOptions,
    ) -> Result<Self, GlyphMapError> {
        let font = FontDescription::from_bytes(font_bytes)?;
        Self::from_parts(text, font, options)
    }

    /// Build the glyph table from a character source and a parsed font.
    pub fn from_parts(
        text: &str,
        font: FontDescription,
        options: &MapOptions,
    ) -> Result<Self, GlyphMapError> {
        let (chars, map) = GlyphMap::resolve(text, &font.glyphs, options)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            chars = chars.len(),
            slots = map.len(),
            assigned = map.assigned_count(),
            "resolved glyph table"
        );

        Ok(Self { chars, font, map })
    }

    /// The ordered character list.
    pub fn chars(&self) -> &CharList {
        &self.chars
    }

    /// The parsed font description.
    pub fn font(&self) -> &FontDescription {
        &self.font
    }

    /// The glyph table.
    pub fn map(&self) -> &GlyphMap {
        &self.map
    }

    /// Banner lines describing the font and ordering, for the generated
    /// header.
    pub fn banner(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(3 + self.font.textures.len());
        lines.push(format!(
            "ordering: {}, glyphs: {}, max glyph id: {}",
            self.chars.policy().as_str(),
            self.chars.len(),
            self.map.max_glyph_id()
        ));
        if let Some(height) = self.font.height {
            lines.push(format!("font height: {height}"));
        }
        for texture in &self.font.textures {
            lines.push(format!("texture {}: {}", texture.id, texture.file_name));
        }
        lines
    }
}
