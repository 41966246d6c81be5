//! File system utilities.

use std::fs;
use std::io;
use std::path::Path;

/// Replaces the contents of `path` by writing a sibling temp file and renaming it over.
///
/// The temp file sits in the same directory as the target so the rename
/// stays on one filesystem. A stale temp file from an earlier interrupted
/// run is overwritten.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}
