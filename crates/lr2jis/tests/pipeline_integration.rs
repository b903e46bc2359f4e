//! End-to-end tests: files on disk in, artifacts on disk out.

use std::fs;
use std::path::{Path, PathBuf};

use lr2jis::{
    ArtifactOptions, GlyphMapError, MapOptions, OrderingPolicy, Resolution, SizingRule,
};

/// Write `text` as Shift-JIS to `path`.
fn write_shift_jis(path: &Path, text: &str) {
    let (bytes, _, had_errors) = encoding_rs::SHIFT_JIS.encode(text);
    assert!(!had_errors, "fixture not representable in Shift-JIS");
    fs::write(path, bytes).unwrap();
}

struct Fixture {
    _dir: tempfile::TempDir,
    chars: PathBuf,
    font: PathBuf,
    header: PathBuf,
}

fn fixture(chars: &str, font: &str) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let chars_path = dir.path().join("SHIFT-JIS.txt");
    let font_path = dir.path().join("font.lr2font");
    let header = dir.path().join("LR2JIS.h");
    fs::write(&chars_path, chars).unwrap();
    write_shift_jis(&font_path, font);
    Fixture {
        _dir: dir,
        chars: chars_path,
        font: font_path,
        header,
    }
}

const KANA_FONT: &str = "\
// テスト用フォント
#S,24
#T,0,かな.png
#R,200,0,0,0,24,24
#R,201,0,24,0,24,24
#R,202,0,48,0,24,24
#R,100,0,0,24,24,24
";

#[test]
fn sorted_run_writes_echo_and_header() {
    let fx = fixture("いあ\r\nう", KANA_FONT);
    let resolution =
        Resolution::open_files(&fx.chars, &fx.font, &MapOptions::default()).unwrap();

    // Sorted chars: '\n' あ い う. Atlas order: 200, 201, 202 (row 0), 100 (row 24).
    let map = resolution.map();
    assert_eq!(map.lookup(200), u16::from(b'\n'));
    assert_eq!(map.lookup(201), 'あ' as u16);
    assert_eq!(map.lookup(202), 'い' as u16);
    assert_eq!(map.lookup(100), 'う' as u16);
    assert_eq!(map.lookup(203), 0);
    assert_eq!(map.lookup(0), 0);

    let options = ArtifactOptions {
        header_path: fx.header.clone(),
        ..ArtifactOptions::default()
    };
    let written = resolution.write_artifacts(&fx.chars, &options).unwrap();

    assert_eq!(written.echo, fx.chars.with_file_name("SHIFT-JIS.txt.out"));
    assert_eq!(fs::read_to_string(&written.echo).unwrap(), "\nあいう");
    assert!(written.map_dump.is_none());

    let header = fs::read_to_string(&fx.header).unwrap();
    assert!(header.contains("uint16_t _LR2GlyphID[203] = {0,\n"));
    assert!(header.contains("if (lr2_code > 202) return 0;"));
    assert!(header.contains("// font height: 24\n"));
    assert!(header.contains("// texture 0: かな.png\n"));
    assert_eq!(header.matches(",\n").count(), 203);
}

#[test]
fn file_order_run_writes_map_dump() {
    let font = "#R,5,0,0,0\n#R,4,0,0,0\n#R,3,0,0,0\n#R,2,0,0,0\n#R,1,0,0,0\n";
    let fx = fixture("ba\r\nc", font);
    let options = MapOptions {
        ordering: OrderingPolicy::FileOrder,
        sizing: SizingRule::MaxGlyphId,
    };
    let resolution = Resolution::open_files(&fx.chars, &fx.font, &options).unwrap();

    // ' ' '\n' b a c, paired with 5 4 3 2 1 in file order.
    let map = resolution.map();
    assert_eq!(map.slots(), &[0, 99, 97, 98, 10, 32]);

    let artifacts = ArtifactOptions {
        header_path: fx.header.clone(),
        write_map_dump: true,
        banner: vec!["source: test".to_string()],
    };
    let written = resolution.write_artifacts(&fx.chars, &artifacts).unwrap();

    let dump_path = written.map_dump.unwrap();
    let dump = fs::read_to_string(dump_path).unwrap();
    assert_eq!(dump.lines().count(), 6);
    assert_eq!(dump.lines().nth(4), Some("glyph 4\t'\\n'\t10"));

    let header = fs::read_to_string(&fx.header).unwrap();
    assert!(header.contains("// source: test\n// ordering: file-order"));
}

#[test]
fn mismatch_writes_nothing() {
    let fx = fixture("abcde", "#R,1,0,0,0\n#R,2,0,0,0\n#R,3,0,0,0\n#R,4,0,0,0\n");
    let err = Resolution::open_files(&fx.chars, &fx.font, &MapOptions::default()).unwrap_err();
    assert_eq!(
        err,
        GlyphMapError::LengthMismatch {
            chars: 5,
            glyphs: 4
        }
    );
    assert!(!fx.header.exists());
    assert!(!fx.chars.with_file_name("SHIFT-JIS.txt.out").exists());
}

#[test]
fn last_record_sizing_out_of_bounds() {
    let fx = fixture("ab", "#R,9,0,0,0\n#R,4,0,0,0\n");
    let options = MapOptions {
        ordering: OrderingPolicy::Sorted,
        sizing: SizingRule::LastRecord,
    };
    let err = Resolution::open_files(&fx.chars, &fx.font, &options).unwrap_err();
    assert_eq!(
        err,
        GlyphMapError::GlyphIdOutOfBounds {
            glyph_id: 9,
            max_glyph_id: 4
        }
    );
}

#[test]
fn invalid_utf8_char_source() {
    let fx = fixture("", "#R,1,0,0,0\n");
    fs::write(&fx.chars, [0xFF, 0xFE, 0x00]).unwrap();
    let err = Resolution::open_files(&fx.chars, &fx.font, &MapOptions::default()).unwrap_err();
    assert!(matches!(err, GlyphMapError::IoError(_)));
}

#[test]
fn invalid_shift_jis_font() {
    let fx = fixture("a", "");
    fs::write(&fx.font, [b'#', b'R', 0xFF]).unwrap();
    let err = Resolution::open_files(&fx.chars, &fx.font, &MapOptions::default()).unwrap_err();
    assert!(matches!(err, GlyphMapError::ParseError(_)));
    assert!(err.to_string().contains("Shift-JIS"));
}

#[test]
fn lookup_round_trips_every_assigned_glyph() {
    let text: String = (0..300u32)
        .map(|i| char::from_u32(0x4E00 + i).unwrap())
        .collect();
    let font: String = (0..300u32)
        .map(|i| format!("#R,{},{},{},{}\n", 1000 + i, i / 100, (i % 10) * 16, (i / 10 % 10) * 16))
        .collect();
    let fx = fixture(&text, &font);
    let resolution =
        Resolution::open_files(&fx.chars, &fx.font, &MapOptions::default()).unwrap();
    let map = resolution.map();

    assert_eq!(map.assigned_count(), 300);
    assert_eq!(usize::from(map.max_glyph_id()), 1299);
    for id in 0..1000u16 {
        assert_eq!(map.lookup(id), 0);
    }
    for id in 1300..=u16::MAX {
        assert_eq!(map.lookup(id), 0);
    }
    for &code in &map.slots()[1000..] {
        assert!((0x4E00..0x4E00 + 300).contains(&code));
    }
}
