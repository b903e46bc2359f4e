use std::path::Path;

use lr2jis::{ArtifactOptions, GlyphMapError, MapOptions, OrderingPolicy, Resolution};

use crate::cli::{OrderingArg, SizingArg};
use crate::shared::{FAILURE_EXIT, LENGTH_MISMATCH_EXIT, require_file};

pub fn run(
    chars: &Path,
    font: &Path,
    ordering: OrderingArg,
    sizing: SizingArg,
    header: &Path,
    debug_map: bool,
) -> Result<(), i32> {
    require_file(chars, "character source")?;
    require_file(font, "font description")?;

    let options = MapOptions {
        ordering: ordering.into(),
        sizing: sizing.into(),
    };

    let resolution = Resolution::open_files(chars, font, &options).map_err(|e| match e {
        GlyphMapError::LengthMismatch { .. } => {
            println!("{e}");
            LENGTH_MISMATCH_EXIT
        }
        other => {
            eprintln!("Error: {other}");
            FAILURE_EXIT
        }
    })?;

    let map = resolution.map();
    log::info!(
        "{} characters paired with {} glyph records ({} ordering)",
        resolution.chars().len(),
        resolution.font().glyphs.len(),
        options.ordering.as_str(),
    );
    log::info!(
        "glyph table: {} slots, {} assigned, max glyph id {}",
        map.len(),
        map.assigned_count(),
        map.max_glyph_id(),
    );

    let artifacts = ArtifactOptions {
        header_path: header.to_path_buf(),
        write_map_dump: debug_map || options.ordering == OrderingPolicy::FileOrder,
        banner: vec![
            format!("characters: {}", chars.display()),
            format!("font: {}", font.display()),
        ],
    };

    let written = resolution
        .write_artifacts(chars, &artifacts)
        .map_err(|e| {
            eprintln!("Error: {e}");
            FAILURE_EXIT
        })?;

    log::info!("wrote {}", written.echo.display());
    if let Some(dump) = &written.map_dump {
        log::info!("wrote {}", dump.display());
    }
    log::info!("wrote {}", written.header.display());

    Ok(())
}
