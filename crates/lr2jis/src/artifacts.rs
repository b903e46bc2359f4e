//! Writing the echo file, the map dump and the C header to disk.
//!
//! Files are written one after another. A failure part-way leaves the files
//! already written in place.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use lr2jis_core::{
    DEFAULT_HEADER_NAME, GlyphMapError, HeaderOptions, render_echo, render_header,
    render_map_dump,
};

use crate::resolution::Resolution;

/// Suffix appended to the character source path for the echo file.
pub const ECHO_SUFFIX: &str = ".out";

/// Suffix appended to the character source path for the map dump.
pub const MAP_DUMP_SUFFIX: &str = ".mapout";

/// Options for [`Resolution::write_artifacts`].
#[derive(Debug, Clone)]
pub struct ArtifactOptions {
    /// Where the C header goes. Default: `LR2JIS.h` in the working directory.
    pub header_path: PathBuf,
    /// Also write `<source>.mapout`. Default: `false`.
    pub write_map_dump: bool,
    /// Extra banner lines placed ahead of the font description in the header.
    pub banner: Vec<String>,
}

impl Default for ArtifactOptions {
    fn default() -> Self {
        Self {
            header_path: PathBuf::from(DEFAULT_HEADER_NAME),
            write_map_dump: false,
            banner: Vec::new(),
        }
    }
}

/// Paths of the files a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifacts {
    /// The echo file.
    pub echo: PathBuf,
    /// The map dump, if requested.
    pub map_dump: Option<PathBuf>,
    /// The C header.
    pub header: PathBuf,
}

/// Append `suffix` to the full `path` (`font.txt` becomes `font.txt.out`).
pub fn companion_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

impl Resolution {
    /// Write the artifacts next to `char_source` (echo, optional map dump)
    /// and at `options.header_path` (header).
    ///
    /// # Errors
    ///
    /// Returns [`GlyphMapError::IoError`] if any file cannot be written.
    pub fn write_artifacts(
        &self,
        char_source: &Path,
        options: &ArtifactOptions,
    ) -> Result<WrittenArtifacts, GlyphMapError> {
        let echo = companion_path(char_source, ECHO_SUFFIX);
        std::fs::write(&echo, render_echo(self.chars()))?;

        let map_dump = if options.write_map_dump {
            let path = companion_path(char_source, MAP_DUMP_SUFFIX);
            std::fs::write(&path, render_map_dump(self.map()))?;
            Some(path)
        } else {
            None
        };

        let mut banner = options.banner.clone();
        banner.extend(self.banner());
        let header_options = HeaderOptions { banner };
        std::fs::write(
            &options.header_path,
            render_header(self.map(), &header_options),
        )?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            echo = %echo.display(),
            header = %options.header_path.display(),
            map_dump = map_dump.is_some(),
            "wrote artifacts"
        );

        Ok(WrittenArtifacts {
            echo,
            map_dump,
            header: options.header_path.clone(),
        })
    }
}
