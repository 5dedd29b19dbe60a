//! Text reading and atomic writes with file locking

use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Write content atomically to a file with locking.
///
/// Writes to a temporary file in the same directory, then renames it over
/// the target. The temporary file holds an exclusive advisory lock while
/// it is written. A symlinked `path` is followed, so the link survives and
/// its target receives the new content. The temporary file is removed if
/// any step fails.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let target = resolve_target(path)?;

    // Same directory keeps the rename on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        target
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = target.with_file_name(&temp_name);

    let temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    let replaced = replace_with_temp(temp_file, &temp_path, &target, content);
    if replaced.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    replaced?;

    tracing::debug!(path = %target.display(), bytes = content.len(), "Wrote file atomically");
    Ok(())
}

/// The file a write to `path` should land on: the resolved target when
/// `path` is a symlink, otherwise `path` itself.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => {
            fs::canonicalize(path).map_err(|e| Error::io(path, e))
        }
        _ => Ok(path.to_path_buf()),
    }
}

fn replace_with_temp(
    mut temp_file: File,
    temp_path: &Path,
    target: &Path,
    content: &[u8],
) -> Result<()> {
    let lock_failed = |_: std::io::Error| Error::LockFailed {
        path: target.to_path_buf(),
    };

    temp_file.lock_exclusive().map_err(lock_failed)?;
    temp_file
        .write_all(content)
        .and_then(|()| temp_file.sync_all())
        .map_err(|e| Error::io(temp_path, e))?;
    temp_file.unlock().map_err(lock_failed)?;
    drop(temp_file);

    // Keep the original permissions, e.g. an executable script
    if let Ok(metadata) = fs::metadata(target) {
        fs::set_permissions(temp_path, metadata.permissions())
            .map_err(|e| Error::io(temp_path, e))?;
    }

    fs::rename(temp_path, target).map_err(|e| Error::io(target, e))
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
