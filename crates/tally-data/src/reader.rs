//! Line-by-line access to chat export files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tally_core::error::{Result, TallyError};
use tracing::debug;

/// Open `path` for buffered line reading.
///
/// Fails with [`TallyError::FileAccess`] when the file is missing or
/// unreadable.
pub fn open_chat_log(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| TallyError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Opened chat log {}", path.display());
    Ok(BufReader::new(file))
}

/// Lines of `reader` with terminators stripped.
///
/// A read failure part-way through (including invalid UTF-8) is reported as
/// [`TallyError::FileAccess`] against `path`.
pub fn chat_lines<'a, R: BufRead + 'a>(
    reader: R,
    path: &'a Path,
) -> impl Iterator<Item = Result<String>> + 'a {
    reader.lines().map(move |line| {
        line.map_err(|source| TallyError::FileAccess {
            path: path.to_path_buf(),
            source,
        })
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
