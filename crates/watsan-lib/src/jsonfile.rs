//! JSON file I/O for one collection.
//!
//! Each backing file holds a single pretty-printed JSON array of
//! records, kept human-inspectable.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Result, WatsanError};

/// Load a collection from a JSON array file.
///
/// A file containing only whitespace is treated as an empty collection.
///
/// # Errors
///
/// Returns `FileNotFound` if the file does not exist, `Io` if it cannot
/// be read, or `Json` if the content is not a valid record array.
pub fn load<R: DeserializeOwned>(path: &Path) -> Result<Vec<R>> {
    let data = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            WatsanError::FileNotFound(path.to_path_buf())
        } else {
            WatsanError::Io(e)
        }
    })?;

    if data.trim().is_empty() {
        return Ok(Vec::new());
    }

    Ok(serde_json::from_str(&data)?)
}

/// Save a collection as a pretty-printed JSON array with atomic write.
///
/// Uses write-to-temp + rename so a crash mid-write never leaves a
/// truncated backing file.
///
/// # Errors
///
/// Returns `Io` if the file cannot be written, or `Json` on
/// serialization failure.
pub fn save<R: Serialize>(path: &Path, records: &[R]) -> Result<()> {
    use std::io::Write;

    let json = serde_json::to_string_pretty(records)?;

    let tmp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&tmp_path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    file.flush()?;
    drop(file);

    // Atomic rename
    fs::rename(&tmp_path, path)?;

    Ok(())
}
