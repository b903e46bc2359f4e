//! Shift-JIS decoding of font description files.
//!
//! LR2 font descriptions are written by Japanese Windows tooling, so texture
//! file names and comments are in code page 932. `encoding_rs::SHIFT_JIS`
//! implements the WHATWG Shift_JIS decoder, which covers that code page.

use encoding_rs::{DecoderResult, SHIFT_JIS};

use crate::error::ParseError;

/// Decode `bytes` as Shift-JIS, failing on the first malformed sequence.
///
/// A leading BOM is not stripped: LR2 tooling never writes one.
pub fn decode_shift_jis(bytes: &[u8]) -> Result<String, ParseError> {
    let mut decoder = SHIFT_JIS.new_decoder_without_bom_handling();
    let mut text = String::with_capacity(bytes.len());
    let mut offset = 0;

    loop {
        let remaining = bytes.len() - offset;
        text.reserve(
            decoder
                .max_utf8_buffer_length_without_replacement(remaining)
                .unwrap_or(remaining * 3),
        );

        let (result, read) =
            decoder.decode_to_string_without_replacement(&bytes[offset..], &mut text, true);
        offset += read;

        match result {
            DecoderResult::InputEmpty => return Ok(text),
            DecoderResult::OutputFull => continue,
            DecoderResult::Malformed(bad, consumed_after) => {
                return Err(ParseError::Decode {
                    offset: offset - usize::from(bad) - usize::from(consumed_after),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passthrough() {
        assert_eq!(decode_shift_jis(b"#R,1,0,0,0").unwrap(), "#R,1,0,0,0");
    }

    #[test]
    fn decodes_kana_and_kanji() {
        let (bytes, _, had_errors) = SHIFT_JIS.encode("#T,0,フォント漢字.png");
        assert!(!had_errors);
        assert_eq!(decode_shift_jis(&bytes).unwrap(), "#T,0,フォント漢字.png");
    }

    #[test]
    fn half_width_katakana() {
        // 0xB1 is HALFWIDTH KATAKANA LETTER A.
        assert_eq!(decode_shift_jis(&[0xB1]).unwrap(), "\u{FF71}");
    }

    #[test]
    fn empty_input() {
        assert_eq!(decode_shift_jis(&[]).unwrap(), "");
    }

    #[test]
    fn malformed_byte_at_end() {
        let err = decode_shift_jis(&[b'a', b'b', 0xFF]).unwrap_err();
        assert!(matches!(err, ParseError::Decode { offset: 2 }));
    }

    #[test]
    fn malformed_byte_in_middle() {
        let err = decode_shift_jis(&[b'a', 0xFD, b'b']).unwrap_err();
        assert!(matches!(err, ParseError::Decode { offset: 1 }));
    }
}
