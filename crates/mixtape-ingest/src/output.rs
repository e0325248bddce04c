//! Line-delimited JSON output of the final playlists
//!
//! One playlist object per line with fields `id`, `user_id`, `song_ids`.
//! Line order follows store enumeration order, which is unspecified.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use mixtape_core::{MixtapeError, Store};

use crate::errors::{io_error, Result};

/// Write every playlist in `store` to `writer`, one per line
///
/// Returns the number of lines written.
///
/// # Errors
///
/// Returns `Io` if writing fails or `Serialization` if a playlist cannot
/// be encoded.
pub fn write_playlists<W: Write>(store: &Store, mut writer: W) -> Result<u64> {
    let mut written = 0;
    store.for_each_playlist(|playlist| {
        serde_json::to_writer(&mut writer, playlist).map_err(|e| {
            if e.is_io() {
                MixtapeError::Io {
                    operation: "write output".to_string(),
                    message: e.to_string(),
                }
            } else {
                MixtapeError::from(e)
            }
        })?;
        writer
            .write_all(b"\n")
            .map_err(|e| io_error("write output", e))?;
        written += 1;
        Ok::<(), MixtapeError>(())
    })?;

    writer.flush().map_err(|e| io_error("write output", e))?;
    Ok(written)
}

/// Create (or truncate) `path` and write every playlist to it
///
/// # Errors
///
/// Returns `Io` if the file cannot be created or written.
pub fn write_playlists_file(store: &Store, path: &Path) -> Result<u64> {
    let file = File::create(path).map_err(|e| io_error("create output", e))?;
    let mut writer = BufWriter::new(file);
    let written = write_playlists(store, &mut writer)?;
    writer
        .into_inner()
        .map_err(|e| io_error("write output", e.into_error()))?
        .sync_all()
        .map_err(|e| io_error("sync output", e))?;
    Ok(written)
}
