use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser, ValueEnum};
use lr2jis::{OrderingPolicy, SizingRule};

/// Default character source path.
pub const DEFAULT_CHARS: &str = "SHIFT-JIS.txt";

/// Default font description path.
pub const DEFAULT_FONT: &str = "font.lr2font";

/// Generate the LR2JIS.h glyph table from a character list and an LR2 font description.
#[derive(Debug, Parser)]
#[command(name = "lr2jis", about, version)]
pub struct Cli {
    /// Character source text, UTF-8 [default: SHIFT-JIS.txt]
    #[arg(value_name = "CHARS")]
    pub chars: Option<PathBuf>,

    /// LR2 font description, Shift-JIS [default: font.lr2font]
    #[arg(value_name = "FONT")]
    pub font: Option<PathBuf>,

    /// How characters and glyph records are ordered before pairing
    #[arg(long, value_enum, default_value_t = OrderingArg::Sorted)]
    pub ordering: OrderingArg,

    /// How the table length is derived from the glyph records
    #[arg(long, value_enum, default_value_t = SizingArg::MaxGlyphId)]
    pub sizing: SizingArg,

    /// Output path of the generated header
    #[arg(long, value_name = "FILE", default_value = lr2jis::lr2jis_core::DEFAULT_HEADER_NAME)]
    pub header: PathBuf,

    /// Also write <CHARS>.mapout with one line per table slot (always on with --ordering file-order)
    #[arg(long)]
    pub debug_map: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Resolve the positional inputs. Both or neither must be given.
    pub fn input_paths(&self) -> Result<(&Path, &Path), clap::Error> {
        match (&self.chars, &self.font) {
            (Some(chars), Some(font)) => Ok((chars.as_path(), font.as_path())),
            (None, None) => Ok((Path::new(DEFAULT_CHARS), Path::new(DEFAULT_FONT))),
            _ => Err(Cli::command().error(
                ErrorKind::MissingRequiredArgument,
                "CHARS and FONT must be given together (or both omitted)",
            )),
        }
    }
}

/// Ordering policy argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderingArg {
    /// Characters by code point, glyph records by texture/row/column
    Sorted,
    /// Space and newline first, then first-seen order; glyph records in file order
    FileOrder,
}

impl From<OrderingArg> for OrderingPolicy {
    fn from(arg: OrderingArg) -> Self {
        match arg {
            OrderingArg::Sorted => OrderingPolicy::Sorted,
            OrderingArg::FileOrder => OrderingPolicy::FileOrder,
        }
    }
}

/// Table sizing argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SizingArg {
    /// Largest glyph ID across all records
    MaxGlyphId,
    /// Glyph ID of the last record in the file
    LastRecord,
}

impl From<SizingArg> for SizingRule {
    fn from(arg: SizingArg) -> Self {
        match arg {
            SizingArg::MaxGlyphId => SizingRule::MaxGlyphId,
            SizingArg::LastRecord => SizingRule::LastRecord,
        }
    }
}
