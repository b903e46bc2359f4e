//! Human-readable companions of a glyph table: the ordered character echo
//! and the per-slot map dump.

use std::fmt::Write;

use crate::charset::CharList;
use crate::glyph_map::GlyphMap;

/// Characters per line of the echo text.
pub const ECHO_LINE_WIDTH: usize = 64;

/// Render the ordered characters, inserting a newline after every
/// [`ECHO_LINE_WIDTH`] characters.
///
/// Inserted newlines are not counted, so 128 characters produce exactly two
/// of them: after the 64th and after the 128th.
pub fn render_echo(chars: &CharList) -> String {
    let count = chars.len();
    let mut out = String::with_capacity(count * 3 + count / ECHO_LINE_WIDTH);
    for (i, &ch) in chars.chars().iter().enumerate() {
        out.push(ch);
        if (i + 1) % ECHO_LINE_WIDTH == 0 {
            out.push('\n');
        }
    }
    out
}

/// Render one line per table slot: its index, the mapped character and the
/// raw slot value.
///
/// Characters are escaped so every slot stays on its own line; unassigned
/// slots show as `'\0'`.
pub fn render_map_dump(map: &GlyphMap) -> String {
    let mut out = String::with_capacity(map.len() * 24);
    for (index, &code) in map.slots().iter().enumerate() {
        let ch = char::from_u32(u32::from(code)).unwrap_or(char::REPLACEMENT_CHARACTER);
        let _ = writeln!(out, "glyph {index}\t'{}'\t{code}", ch.escape_debug());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::OrderingPolicy;
    use crate::glyph::GlyphRecord;
    use crate::glyph_map::SizingRule;

    /// `count` distinct CJK ideographs starting at U+4E00.
    fn distinct_text(count: u32) -> String {
        (0..count)
            .map(|i| char::from_u32(0x4E00 + i).unwrap())
            .collect()
    }

    #[test]
    fn short_echo_has_no_newline() {
        let chars = CharList::collect("cab", OrderingPolicy::Sorted);
        assert_eq!(render_echo(&chars), "abc");
    }

    #[test]
    fn wraps_at_64_and_128() {
        let chars = CharList::collect(&distinct_text(128), OrderingPolicy::Sorted);
        let echo = render_echo(&chars);
        let newline_positions: Vec<usize> = echo
            .chars()
            .enumerate()
            .filter(|(_, ch)| *ch == '\n')
            .map(|(i, _)| i)
            .collect();
        // Character index 64 is the first inserted newline, 129 the second
        // (64 chars, newline, 64 chars, newline).
        assert_eq!(newline_positions, vec![64, 129]);
        assert_eq!(echo.chars().count(), 130);
        assert!(echo.ends_with('\n'));
    }

    #[test]
    fn wraps_after_65_chars_once() {
        let chars = CharList::collect(&distinct_text(65), OrderingPolicy::Sorted);
        let echo = render_echo(&chars);
        assert_eq!(echo.matches('\n').count(), 1);
        assert!(!echo.ends_with('\n'));
    }

    #[test]
    fn collected_newline_is_echoed() {
        let chars = CharList::collect("a\nb", OrderingPolicy::Sorted);
        assert_eq!(render_echo(&chars), "\nab");
    }

    #[test]
    fn map_dump_lists_every_slot() {
        let chars = CharList::collect("a\n", OrderingPolicy::Sorted);
        let records = [GlyphRecord::new(0, 0, 0, 0), GlyphRecord::new(0, 0, 1, 2)];
        let map = GlyphMap::build(&chars, &records, SizingRule::MaxGlyphId).unwrap();
        let dump = render_map_dump(&map);
        assert_eq!(
            dump,
            "glyph 0\t'\\n'\t10\nglyph 1\t'\\0'\t0\nglyph 2\t'a'\t97\n"
        );
    }
}
