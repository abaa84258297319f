//! Error handlers
//!
//! Centralized error logging and status mapping for the embedding layer.

use crate::error::types::{ImageStoreError, RetrieveError, UploadError};
use log::error;

/// Log an image store error
pub fn handle_error(err: &ImageStoreError) {
    error!("Image store error: {}", err);
}

/// Convert an error to the HTTP-like status the embedding layer answers with
pub fn error_to_http_status(err: &ImageStoreError) -> u16 {
    match err {
        ImageStoreError::Upload(UploadError::Validation(_)) => 400,
        ImageStoreError::Upload(UploadError::Storage(_)) => 500,
        ImageStoreError::Retrieve(RetrieveError::InvalidType(_)) => 400,
        ImageStoreError::Retrieve(RetrieveError::InvalidPath(_)) => 400,
        ImageStoreError::Retrieve(RetrieveError::NotFound(_)) => 404,
        ImageStoreError::Retrieve(RetrieveError::Io(_)) => 500,
        ImageStoreError::Config(_) => 500,
        ImageStoreError::Io(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::types::ValidationError;

    #[test]
    fn validation_failures_map_to_bad_request() {
        let err = ImageStoreError::Upload(UploadError::Validation(ValidationError::EmptyFile));
        assert_eq!(error_to_http_status(&err), 400);
    }

    #[test]
    fn missing_files_map_to_not_found() {
        let err = ImageStoreError::Retrieve(RetrieveError::NotFound("x.jpg".into()));
        assert_eq!(error_to_http_status(&err), 404);
    }

    #[test]
    fn io_failures_map_to_server_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ImageStoreError::Retrieve(RetrieveError::Io(io));
        assert_eq!(error_to_http_status(&err), 500);
    }
}
