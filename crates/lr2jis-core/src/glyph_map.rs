//! Dense glyph ID to Unicode table.
//!
//! Pairs a [`CharList`] with glyph records by position and stores each
//! character's code point in the slot named by its record's glyph ID.

use crate::charset::{CharList, OrderingPolicy};
use crate::error::GlyphMapError;
use crate::glyph::{GlyphRecord, sort_atlas_order};

/// How the table length is derived from the glyph records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SizingRule {
    /// Largest glyph ID across all records.
    #[default]
    MaxGlyphId,
    /// Glyph ID of the last record in file order. Records with larger IDs
    /// fail with [`GlyphMapError::GlyphIdOutOfBounds`].
    LastRecord,
}

impl SizingRule {
    /// Returns the command-line spelling of the rule.
    pub fn as_str(&self) -> &'static str {
        match self {
            SizingRule::MaxGlyphId => "max-glyph-id",
            SizingRule::LastRecord => "last-record",
        }
    }

    /// The largest table index under this rule, or `None` without records.
    ///
    /// `records` must be in file order.
    pub fn max_glyph_id(&self, records: &[GlyphRecord]) -> Option<u32> {
        match self {
            SizingRule::MaxGlyphId => records.iter().map(|r| r.glyph_id).max(),
            SizingRule::LastRecord => records.last().map(|r| r.glyph_id),
        }
    }
}

/// Options for building a [`GlyphMap`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapOptions {
    /// Character and record ordering. Default: [`OrderingPolicy::Sorted`].
    pub ordering: OrderingPolicy,
    /// Table sizing. Default: [`SizingRule::MaxGlyphId`].
    pub sizing: SizingRule,
}

/// A dense table of 16-bit code points indexed by LR2 glyph ID.
///
/// Unassigned slots hold 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphMap {
    slots: Vec<u16>,
}

impl GlyphMap {
    /// Collect characters from `text` and build the table against `records`.
    ///
    /// `records` must be in file order.
    pub fn resolve(
        text: &str,
        records: &[GlyphRecord],
        options: &MapOptions,
    ) -> Result<(CharList, GlyphMap), GlyphMapError> {
        let chars = CharList::collect(text, options.ordering);
        let map = Self::build(&chars, records, options.sizing)?;
        Ok((chars, map))
    }

    /// Build the table from an ordered character list and file-ordered
    /// glyph records.
    ///
    /// Records are reordered to match the policy of `chars` before pairing,
    /// so the two orderings can never be mixed.
    ///
    /// # Errors
    ///
    /// - [`GlyphMapError::LengthMismatch`] if the counts differ.
    /// - [`GlyphMapError::NoGlyphRecords`] if there are no records.
    /// - [`GlyphMapError::GlyphIdOutOfRange`] if the table would need an
    ///   index above `u16::MAX`.
    /// - [`GlyphMapError::GlyphIdOutOfBounds`] if a record lies past the
    ///   table end ([`SizingRule::LastRecord`] only).
    /// - [`GlyphMapError::CodePointOutOfRange`] for characters outside the BMP.
    pub fn build(
        chars: &CharList,
        records: &[GlyphRecord],
        sizing: SizingRule,
    ) -> Result<Self, GlyphMapError> {
        if chars.len() != records.len() {
            return Err(GlyphMapError::LengthMismatch {
                chars: chars.len(),
                glyphs: records.len(),
            });
        }

        let max_glyph_id = sizing
            .max_glyph_id(records)
            .ok_or(GlyphMapError::NoGlyphRecords)?;
        if max_glyph_id > u32::from(u16::MAX) {
            return Err(GlyphMapError::GlyphIdOutOfRange {
                glyph_id: max_glyph_id,
            });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            max_glyph_id,
            sizing = sizing.as_str(),
            policy = chars.policy().as_str(),
            "sizing glyph table"
        );

        let mut ordered = records.to_vec();
        if chars.policy() == OrderingPolicy::Sorted {
            sort_atlas_order(&mut ordered);
        }

        let mut slots = vec![0u16; max_glyph_id as usize + 1];
        for (position, (&ch, record)) in chars.chars().iter().zip(&ordered).enumerate() {
            let code = u16::try_from(u32::from(ch))
                .map_err(|_| GlyphMapError::CodePointOutOfRange { ch, position })?;
            let slot = slots.get_mut(record.glyph_id as usize).ok_or(
                GlyphMapError::GlyphIdOutOfBounds {
                    glyph_id: record.glyph_id,
                    max_glyph_id,
                },
            )?;

            #[cfg(feature = "tracing")]
            if *slot != 0 {
                tracing::warn!(
                    glyph_id = record.glyph_id,
                    previous = *slot,
                    replacement = code,
                    "glyph id assigned twice, keeping the later character"
                );
            }

            *slot = code;
        }

        Ok(Self { slots })
    }

    /// Returns the code point for `glyph_id`, or 0 if it exceeds
    /// [`max_glyph_id`](Self::max_glyph_id).
    ///
    /// This is the contract of the generated C accessor.
    pub fn lookup(&self, glyph_id: u16) -> u16 {
        self.slots.get(usize::from(glyph_id)).copied().unwrap_or(0)
    }

    /// The largest valid index. Indices `0..=max_glyph_id` are in range.
    pub fn max_glyph_id(&self) -> u16 {
        // Construction guarantees 1..=65536 slots.
        (self.slots.len() - 1) as u16
    }

    /// All slots, indexed by glyph ID.
    pub fn slots(&self) -> &[u16] {
        &self.slots
    }

    /// Number of slots (`max_glyph_id + 1`).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`: a built table has at least one slot.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots holding a non-zero code point.
    pub fn assigned_count(&self) -> usize {
        self.slots.iter().filter(|&&code| code != 0).count()
    }
}
