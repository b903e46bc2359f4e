//! Glyph records recovered from `#R` lines of a font description.

/// One glyph of an LR2 font: where it lives in the texture atlas and which
/// LR2 glyph ID it answers to.
///
/// Field order matters: the derived [`Ord`] compares texture, then row, then
/// column, then glyph ID, which is the order glyphs are laid out in the atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlyphRecord {
    /// Index of the texture the glyph is cut from.
    pub texture_id: u32,
    /// Vertical pixel offset within the texture.
    pub row: u32,
    /// Horizontal pixel offset within the texture.
    pub column: u32,
    /// The LR2 glyph ID.
    pub glyph_id: u32,
}

impl GlyphRecord {
    /// Creates a new [`GlyphRecord`].
    pub const fn new(texture_id: u32, row: u32, column: u32, glyph_id: u32) -> Self {
        Self {
            texture_id,
            row,
            column,
            glyph_id,
        }
    }
}

/// Sort glyph records into atlas order.
pub fn sort_atlas_order(records: &mut [GlyphRecord]) {
    records.sort();
}
