//! Secure article-image storage: validated uploads, collision-free
//! stored names, and containment-checked retrieval.

pub mod config;
pub mod error;
pub mod retrieve;
pub mod storage;
pub mod store;
pub mod upload;
pub mod validation;

pub use crate::config::StoreConfig;
pub use crate::storage::results::{ImageStream, StoredImage};
pub use crate::store::ImageStore;
pub use crate::upload::UploadRequest;
