//! Storage result types
//!
//! Values returned by upload and retrieval operations.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use uuid::Uuid;

/// Reference to a successfully stored image
#[derive(Debug, Clone)]
pub struct StoredImage {
    /// Random identifier the stored name is built from
    pub id: Uuid,
    /// Lower-cased extension taken from the validated original filename
    pub extension: String,
    /// On-disk file name, `<id>.<extension>`
    pub file_name: String,
    /// Public-facing path, `<prefix>/<file_name>`
    pub public_path: String,
    /// Absolute location on disk
    pub disk_path: PathBuf,
}

/// An open stored image ready to stream to a caller.
///
/// Owns the file handle; dropping the stream closes it on every exit
/// path, including a transfer that fails midway.
#[derive(Debug)]
pub struct ImageStream {
    pub(crate) file: File,
    /// MIME type inferred from the requested extension
    pub content_type: &'static str,
    /// Total size in bytes
    pub len: u64,
}

impl ImageStream {
    /// Stream the full contents into `writer`, returning the bytes copied.
    pub fn copy_to<W: Write>(mut self, writer: &mut W) -> io::Result<u64> {
        io::copy(&mut self.file, writer)
    }
}

impl Read for ImageStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}
