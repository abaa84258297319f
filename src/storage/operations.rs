//! Storage operations
//!
//! Filesystem reads and writes for stored images. Writes go through a
//! temporary file and a rename, so a failed upload never leaves a final
//! file behind.

use log::{error, info};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::storage::paths::{ensure_base_dir, resolve_within_base};

/// Write image bytes under `base` as `file_name`, atomically.
///
/// The destination must not exist; stored names are freshly random per
/// upload, so a collision is a fatal error rather than an overwrite.
pub fn store_image_bytes(
    base: &Path,
    file_name: &str,
    content: &[u8],
) -> Result<PathBuf, StorageError> {
    ensure_base_dir(base)?;
    let final_path = resolve_within_base(base, file_name)?;

    if final_path.exists() {
        error!("Stored name collision: {}", final_path.display());
        return Err(StorageError::FileAlreadyExists(file_name.to_string()));
    }

    let temp_path = final_path.with_extension(format!(
        "{}.tmp",
        final_path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
    ));

    if let Err(e) = write_then_rename(&temp_path, &final_path, content) {
        let _ = fs::remove_file(&temp_path);
        error!("Failed to store {}: {}", file_name, e);
        return Err(StorageError::Io(e));
    }

    info!(
        "Stored image {} ({} bytes)",
        final_path.display(),
        content.len()
    );
    Ok(final_path)
}

fn write_then_rename(temp: &Path, final_path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = File::create_new(temp)?;
    file.write_all(content)?;
    file.flush()?;
    drop(file);
    fs::rename(temp, final_path)
}

/// Open a stored image for reading.
///
/// Returns the resolved path, the open handle, and the file length.
pub fn open_image_file(base: &Path, file_name: &str) -> Result<(PathBuf, File, u64), StorageError> {
    let path = resolve_within_base(base, file_name)?;

    if !path.exists() || !path.is_file() {
        return Err(StorageError::FileNotFound(file_name.to_string()));
    }

    let file = File::open(&path)?;
    let len = file.metadata()?.len();
    info!("Opened image {} ({} bytes)", path.display(), len);
    Ok((path, file, len))
}

/// Remove a stored image.
pub fn remove_image_file(base: &Path, file_name: &str) -> Result<(), StorageError> {
    let path = resolve_within_base(base, file_name)?;

    if !path.is_file() {
        return Err(StorageError::FileNotFound(file_name.to_string()));
    }

    fs::remove_file(&path)?;
    info!("Deleted image {}", path.display());
    Ok(())
}
