use std::path::Path;

use env_logger::Env;

/// Exit status for a character/glyph count mismatch (255 on Unix).
pub const LENGTH_MISMATCH_EXIT: i32 = -1;

/// Exit status for every other failure.
pub const FAILURE_EXIT: i32 = 1;

/// Install the global logger.
///
/// `verbose` picks the default filter; `RUST_LOG` overrides it.
pub fn init_logging(verbose: u8) {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter(verbose)))
        .format_timestamp(None)
        .init();
}

/// Default log filter for a `-v` count.
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Check that an input file exists, with a user-friendly error message.
///
/// Returns `Err(1)` with a message printed to stderr if the file is missing.
pub fn require_file(path: &Path, what: &str) -> Result<(), i32> {
    if !path.is_file() {
        eprintln!("Error: {what} not found: {}", path.display());
        return Err(FAILURE_EXIT);
    }
    Ok(())
}
