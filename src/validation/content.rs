//! Upload content validation
//!
//! Pure accept/reject decision over an uploaded payload and its declared
//! metadata. Checks run cheapest-first and short-circuit, so oversized or
//! empty payloads are rejected before any byte inspection.

use crate::config::StoreConfig;
use crate::error::ValidationError;
use crate::validation::media::MediaType;

/// Shortest payload the magic-byte check will consider.
const MIN_CONTENT_LEN: usize = 4;

/// Outcome of a successful validation
#[derive(Debug, Clone)]
pub struct ValidatedUpload {
    /// Media type resolved from the declared MIME
    pub media: MediaType,
    /// Lower-cased extension taken from the original filename
    pub extension: String,
}

/// Validate an upload against the configured limits and allow-list.
///
/// Check order: size, emptiness, declared MIME, filename extension, magic
/// bytes against the declared type's signature. The first failure is
/// returned; no side effects.
pub fn validate_content(
    config: &StoreConfig,
    declared_mime: &str,
    original_filename: &str,
    content: &[u8],
) -> Result<ValidatedUpload, ValidationError> {
    if content.len() as u64 > config.max_file_size_bytes {
        return Err(ValidationError::FileTooLarge {
            size: content.len() as u64,
            max: config.max_file_size_bytes,
        });
    }

    if content.is_empty() {
        return Err(ValidationError::EmptyFile);
    }

    let media = MediaType::from_mime(declared_mime)
        .filter(|t| config.allowed_types.contains(t))
        .ok_or_else(|| ValidationError::UnsupportedMediaType(declared_mime.to_string()))?;

    let extension = file_extension(original_filename)
        .ok_or_else(|| ValidationError::UnsupportedExtension(original_filename.to_string()))?;
    let extension_allowed = config
        .allowed_types
        .iter()
        .any(|t| t.extensions().contains(&extension.as_str()));
    if !extension_allowed {
        return Err(ValidationError::UnsupportedExtension(extension));
    }

    if content.len() < MIN_CONTENT_LEN || !media.matches_magic(content) {
        return Err(ValidationError::ContentMismatch);
    }

    Ok(ValidatedUpload { media, extension })
}

/// Lower-cased extension of a filename, if it has one.
pub fn file_extension(filename: &str) -> Option<String> {
    let (_, extension) = filename.rsplit_once('.')?;
    if extension.is_empty() {
        return None;
    }
    Some(extension.to_ascii_lowercase())
}
