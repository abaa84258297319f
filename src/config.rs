//! Configuration management for the image store
//!
//! Every limit and allow-list is explicit configuration rather than a
//! hidden constant: defaults first, then an optional `config.toml`, then
//! `IMAGE_STORE_*` environment overrides.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::validation::media::MediaType;

/// Default maximum upload size (5 MiB)
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
/// Default public path prefix for stored images
pub const DEFAULT_PUBLIC_PREFIX: &str = "images";
/// Default on-disk base directory
pub const DEFAULT_BASE_DIR: &str = "./article_images";

/// Image store configuration
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Flat directory holding every stored image
    pub base_dir: PathBuf,

    /// Maximum accepted upload size in bytes
    pub max_file_size_bytes: u64,

    /// Prefix prepended to stored file names to form public paths
    pub public_prefix: String,

    /// Media types the store accepts; anything else is rejected
    pub allowed_types: Vec<MediaType>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            public_prefix: DEFAULT_PUBLIC_PREFIX.to_string(),
            allowed_types: vec![MediaType::Jpeg, MediaType::Png],
        }
    }
}

impl StoreConfig {
    /// Load configuration from config.toml (optional) with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("base_dir", DEFAULT_BASE_DIR)?
            .set_default("max_file_size_bytes", DEFAULT_MAX_FILE_SIZE_BYTES as i64)?
            .set_default("public_prefix", DEFAULT_PUBLIC_PREFIX)?
            .set_default(
                "allowed_types",
                vec!["jpeg".to_string(), "png".to_string()],
            )?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("IMAGE_STORE"))
            .build()?;

        let config: StoreConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the store cannot operate with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_dir.as_os_str().is_empty() {
            return Err(ConfigError::Message("base_dir must not be empty".into()));
        }
        if self.max_file_size_bytes == 0 {
            return Err(ConfigError::Message(
                "max_file_size_bytes must be greater than zero".into(),
            ));
        }
        if self.allowed_types.is_empty() {
            return Err(ConfigError::Message(
                "allowed_types must name at least one media type".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = StoreConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_file_size_bytes, 5 * 1024 * 1024);
        assert_eq!(config.public_prefix, "images");
        assert_eq!(config.allowed_types, vec![MediaType::Jpeg, MediaType::Png]);
    }

    #[test]
    fn rejects_zero_size_limit() {
        let config = StoreConfig {
            max_file_size_bytes: 0,
            ..StoreConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_allow_list() {
        let config = StoreConfig {
            allowed_types: vec![],
            ..StoreConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_base_dir() {
        let config = StoreConfig {
            base_dir: PathBuf::new(),
            ..StoreConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
