//! Media type registry
//!
//! Closed set of image formats the store knows, each bundling its MIME
//! type, extension set, and magic-byte signature. Which of them a store
//! actually accepts is decided by the configured allow-list.

use serde::Deserialize;

/// JPEG leading bytes: FF D8 FF
const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];
/// PNG leading bytes: 89 50 4E 47
const PNG_MAGIC: [u8; 4] = [0x89, 0x50, 0x4E, 0x47];

/// Image formats known to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Jpeg,
    Png,
    Webp,
}

/// Every known media type, used for MIME/extension resolution.
const ALL_TYPES: [MediaType; 3] = [MediaType::Jpeg, MediaType::Png, MediaType::Webp];

impl MediaType {
    /// MIME type as declared by upload clients
    pub fn mime(&self) -> &'static str {
        match self {
            MediaType::Jpeg => "image/jpeg",
            MediaType::Png => "image/png",
            MediaType::Webp => "image/webp",
        }
    }

    /// File extensions accepted for this type (lower-case)
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            MediaType::Jpeg => &["jpg", "jpeg"],
            MediaType::Png => &["png"],
            MediaType::Webp => &["webp"],
        }
    }

    /// Resolve a declared MIME type, case-insensitively
    pub fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.to_ascii_lowercase();
        ALL_TYPES.into_iter().find(|t| t.mime() == mime)
    }

    /// Resolve a file extension, case-insensitively
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.to_ascii_lowercase();
        ALL_TYPES
            .into_iter()
            .find(|t| t.extensions().contains(&extension.as_str()))
    }

    /// Check the leading bytes of `content` against this type's signature.
    pub fn matches_magic(&self, content: &[u8]) -> bool {
        match self {
            MediaType::Jpeg => content.starts_with(&JPEG_MAGIC),
            MediaType::Png => content.starts_with(&PNG_MAGIC),
            // RIFF container: "RIFF" at offset 0, "WEBP" at offset 8
            MediaType::Webp => {
                content.len() >= 12
                    && content.starts_with(b"RIFF")
                    && &content[8..12] == b"WEBP"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_mime_case_insensitively() {
        assert_eq!(MediaType::from_mime("image/jpeg"), Some(MediaType::Jpeg));
        assert_eq!(MediaType::from_mime("IMAGE/PNG"), Some(MediaType::Png));
        assert_eq!(MediaType::from_mime("Image/WebP"), Some(MediaType::Webp));
        assert_eq!(MediaType::from_mime("image/gif"), None);
        assert_eq!(MediaType::from_mime(""), None);
    }

    #[test]
    fn resolves_extensions_case_insensitively() {
        assert_eq!(MediaType::from_extension("jpg"), Some(MediaType::Jpeg));
        assert_eq!(MediaType::from_extension("JPEG"), Some(MediaType::Jpeg));
        assert_eq!(MediaType::from_extension("png"), Some(MediaType::Png));
        assert_eq!(MediaType::from_extension("webp"), Some(MediaType::Webp));
        assert_eq!(MediaType::from_extension("exe"), None);
    }

    #[test]
    fn jpeg_magic_requires_three_byte_signature() {
        assert!(MediaType::Jpeg.matches_magic(&[0xFF, 0xD8, 0xFF, 0xE0]));
        assert!(!MediaType::Jpeg.matches_magic(&[0x00, 0x00, 0x00, 0x00]));
        assert!(!MediaType::Jpeg.matches_magic(&[0xFF, 0xD8]));
    }

    #[test]
    fn png_magic_requires_four_byte_signature() {
        assert!(MediaType::Png.matches_magic(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]));
        assert!(!MediaType::Png.matches_magic(&[0x89, 0x50, 0x4E]));
        assert!(!MediaType::Png.matches_magic(&[0xFF, 0xD8, 0xFF, 0xE0]));
    }

    #[test]
    fn webp_magic_requires_riff_header_and_webp_tag() {
        let mut content = b"RIFF".to_vec();
        content.extend_from_slice(&[0x24, 0x00, 0x00, 0x00]);
        content.extend_from_slice(b"WEBPVP8 ");
        assert!(MediaType::Webp.matches_magic(&content));

        assert!(!MediaType::Webp.matches_magic(b"RIFF1234NOPE"));
        assert!(!MediaType::Webp.matches_magic(b"RIFFWEBP"));
    }
}
