//! Image retrieval and deletion
//!
//! Serves stored images back from untrusted name and type segments, and
//! removes superseded images best-effort.

use log::warn;
use std::io::ErrorKind;

use crate::config::StoreConfig;
use crate::error::{RetrieveError, StorageError};
use crate::storage::operations::{open_image_file, remove_image_file};
use crate::storage::results::ImageStream;
use crate::validation::filename::sanitize_filename;

/// Open a stored image from two untrusted URL segments.
///
/// The type segment is checked against the allow-list before any
/// filesystem access; both segments are sanitized before the path
/// resolver sees them.
pub fn open_image(
    config: &StoreConfig,
    raw_name: &str,
    raw_type: &str,
) -> Result<ImageStream, RetrieveError> {
    let name = sanitize_filename(raw_name);
    let extension = sanitize_filename(raw_type).to_ascii_lowercase();

    let media = config
        .allowed_types
        .iter()
        .copied()
        .find(|t| t.extensions().contains(&extension.as_str()))
        .ok_or_else(|| RetrieveError::InvalidType(raw_type.to_string()))?;

    if name.is_empty() {
        return Err(RetrieveError::InvalidPath(raw_name.to_string()));
    }

    let file_name = format!("{}.{}", name, extension);
    let (_, file, len) = open_image_file(&config.base_dir, &file_name)
        .map_err(|e| retrieve_error_from_storage(e, &file_name))?;

    Ok(ImageStream {
        file,
        content_type: media.mime(),
        len,
    })
}

fn retrieve_error_from_storage(err: StorageError, file_name: &str) -> RetrieveError {
    match err {
        StorageError::PathTraversal(p)
        | StorageError::InvalidPath(p)
        | StorageError::FileAlreadyExists(p) => RetrieveError::InvalidPath(p),
        StorageError::FileNotFound(p) => RetrieveError::NotFound(p),
        // A missing base directory means nothing was ever stored
        StorageError::Io(e) if e.kind() == ErrorKind::NotFound => {
            RetrieveError::NotFound(file_name.to_string())
        }
        StorageError::Io(e) => RetrieveError::Io(e),
    }
}

/// Delete a stored image by its public path, best-effort.
///
/// Failures are logged and swallowed: a stray orphan file is preferable
/// to failing the caller's unrelated action, such as an article edit.
pub fn delete_image(config: &StoreConfig, public_path: &str) {
    let file_name = public_path.rsplit('/').next().unwrap_or_default();
    let file_name = sanitize_filename(file_name);

    if file_name.is_empty() {
        warn!("Ignoring image delete with empty file name: {}", public_path);
        return;
    }

    match remove_image_file(&config.base_dir, &file_name) {
        Ok(()) => {}
        // Already gone is as good as deleted
        Err(StorageError::FileNotFound(_)) => {}
        Err(StorageError::Io(e)) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!("Failed to delete image {}: {}", public_path, e),
    }
}

/// Public path of the placeholder image for an article category.
///
/// Pure mapping; no filesystem access.
pub fn fallback_image(config: &StoreConfig, category: Option<&str>) -> String {
    let placeholder = match category.map(|c| c.to_ascii_lowercase()).as_deref() {
        Some("technology") | Some("tech") => "tech_placeholder.png",
        Some("business") | Some("economy") => "business_placeholder.png",
        Some("sports") => "sports_placeholder.png",
        Some("politics") => "politics_placeholder.png",
        _ => "default_placeholder.png",
    };
    format!("{}/placeholders/{}", config.public_prefix, placeholder)
}
