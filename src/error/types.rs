//! Error types
//!
//! Defines domain-specific error types for each module of the image store.

use std::fmt;
use std::io;

/// Upload content validation errors
#[derive(Debug)]
pub enum ValidationError {
    FileTooLarge { size: u64, max: u64 },
    EmptyFile,
    UnsupportedMediaType(String),
    UnsupportedExtension(String),
    ContentMismatch,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FileTooLarge { size, max } => {
                write!(f, "File size {} exceeds maximum of {} bytes", size, max)
            }
            ValidationError::EmptyFile => write!(f, "File is empty"),
            ValidationError::UnsupportedMediaType(m) => {
                write!(f, "Unsupported media type: {}", m)
            }
            ValidationError::UnsupportedExtension(e) => {
                write!(f, "Unsupported file extension: {}", e)
            }
            ValidationError::ContentMismatch => {
                write!(f, "File content does not match the declared type")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    PathTraversal(String),
    InvalidPath(String),
    FileNotFound(String),
    FileAlreadyExists(String),
    Io(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::PathTraversal(p) => write!(f, "Path traversal attempt: {}", p),
            StorageError::InvalidPath(p) => write!(f, "Invalid path: {}", p),
            StorageError::FileNotFound(p) => write!(f, "File not found: {}", p),
            StorageError::FileAlreadyExists(p) => write!(f, "File already exists: {}", p),
            StorageError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::Io(error)
    }
}

/// Upload errors: a rejected payload or a failed write
#[derive(Debug)]
pub enum UploadError {
    Validation(ValidationError),
    Storage(StorageError),
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::Validation(e) => write!(f, "Upload rejected: {}", e),
            UploadError::Storage(e) => write!(f, "Upload failed: {}", e),
        }
    }
}

impl std::error::Error for UploadError {}

impl From<ValidationError> for UploadError {
    fn from(error: ValidationError) -> Self {
        UploadError::Validation(error)
    }
}

impl From<StorageError> for UploadError {
    fn from(error: StorageError) -> Self {
        UploadError::Storage(error)
    }
}

/// Retrieval errors
#[derive(Debug)]
pub enum RetrieveError {
    InvalidType(String),
    InvalidPath(String),
    NotFound(String),
    Io(io::Error),
}

impl fmt::Display for RetrieveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetrieveError::InvalidType(t) => write!(f, "Invalid file type: {}", t),
            RetrieveError::InvalidPath(p) => write!(f, "Invalid file path: {}", p),
            RetrieveError::NotFound(p) => write!(f, "File not found: {}", p),
            RetrieveError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for RetrieveError {}

impl From<io::Error> for RetrieveError {
    fn from(error: io::Error) -> Self {
        RetrieveError::Io(error)
    }
}

/// General image store error that encompasses all error types
#[derive(Debug)]
pub enum ImageStoreError {
    Upload(UploadError),
    Retrieve(RetrieveError),
    Config(config::ConfigError),
    Io(io::Error),
}

impl fmt::Display for ImageStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageStoreError::Upload(e) => write!(f, "Upload error: {}", e),
            ImageStoreError::Retrieve(e) => write!(f, "Retrieval error: {}", e),
            ImageStoreError::Config(e) => write!(f, "Configuration error: {}", e),
            ImageStoreError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ImageStoreError {}

impl From<UploadError> for ImageStoreError {
    fn from(error: UploadError) -> Self {
        ImageStoreError::Upload(error)
    }
}

impl From<RetrieveError> for ImageStoreError {
    fn from(error: RetrieveError) -> Self {
        ImageStoreError::Retrieve(error)
    }
}

impl From<config::ConfigError> for ImageStoreError {
    fn from(error: config::ConfigError) -> Self {
        ImageStoreError::Config(error)
    }
}

impl From<io::Error> for ImageStoreError {
    fn from(error: io::Error) -> Self {
        ImageStoreError::Io(error)
    }
}
