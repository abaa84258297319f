//! Upload and lookup validation
//!
//! Content inspection for uploads and sanitization for retrieval lookups.

pub mod content;
pub mod filename;
pub mod media;

pub use content::validate_content;
pub use filename::sanitize_filename;
pub use media::MediaType;
