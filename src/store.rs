//! Store facade
//!
//! Bundles a validated configuration with the upload, retrieval, and
//! deletion operations so the embedding layer holds a single value.

use config::ConfigError;

use crate::config::StoreConfig;
use crate::error::{RetrieveError, UploadError};
use crate::retrieve;
use crate::storage::results::{ImageStream, StoredImage};
use crate::upload::{self, UploadRequest};

/// Image store bound to one base directory and one set of limits
#[derive(Debug, Clone)]
pub struct ImageStore {
    config: StoreConfig,
}

impl ImageStore {
    /// Create a store from an already-built configuration.
    pub fn new(config: StoreConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a store from config.toml and environment overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            config: StoreConfig::load()?,
        })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Validate and persist an uploaded image.
    pub fn upload(&self, request: &UploadRequest) -> Result<StoredImage, UploadError> {
        upload::store_image(&self.config, request)
    }

    /// Open a stored image from untrusted name and type segments.
    pub fn retrieve(&self, raw_name: &str, raw_type: &str) -> Result<ImageStream, RetrieveError> {
        retrieve::open_image(&self.config, raw_name, raw_type)
    }

    /// Best-effort delete of a superseded image.
    pub fn delete(&self, public_path: &str) {
        retrieve::delete_image(&self.config, public_path)
    }

    /// Placeholder public path for an article category without an image.
    pub fn fallback_image(&self, category: Option<&str>) -> String {
        retrieve::fallback_image(&self.config, category)
    }
}
