//! Image upload
//!
//! Validates an uploaded payload and persists it under a fresh random
//! name. The stored identifier is never derived from user input, so
//! uploads cannot overwrite each other or place files outside the base
//! directory.

use log::info;
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::error::UploadError;
use crate::storage::operations::store_image_bytes;
use crate::storage::results::StoredImage;
use crate::validation::content::{validate_content, ValidatedUpload};

/// An uploaded payload with its client-declared metadata
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Raw file bytes
    pub content: Vec<u8>,
    /// MIME type declared by the client
    pub declared_mime: String,
    /// Original filename declared by the client
    pub original_filename: String,
}

impl UploadRequest {
    pub fn new(
        content: Vec<u8>,
        declared_mime: impl Into<String>,
        original_filename: impl Into<String>,
    ) -> Self {
        Self {
            content,
            declared_mime: declared_mime.into(),
            original_filename: original_filename.into(),
        }
    }
}

/// Validate and store an uploaded image.
///
/// The extension comes from the original filename only after it passed
/// the allow-list check. The public reference is returned only once the
/// bytes are fully on disk.
pub fn store_image(
    config: &StoreConfig,
    request: &UploadRequest,
) -> Result<StoredImage, UploadError> {
    let ValidatedUpload { media, extension } = validate_content(
        config,
        &request.declared_mime,
        &request.original_filename,
        &request.content,
    )?;

    let id = Uuid::new_v4();
    let file_name = format!("{}.{}", id, extension);
    let disk_path = store_image_bytes(&config.base_dir, &file_name, &request.content)?;

    let public_path = format!("{}/{}", config.public_prefix, file_name);
    info!("Accepted {} upload as {}", media.mime(), public_path);

    Ok(StoredImage {
        id,
        extension,
        file_name,
        public_path,
        disk_path,
    })
}
