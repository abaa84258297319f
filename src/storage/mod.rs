//! File system storage management
//!
//! Path containment, atomic writes, and read access for stored images.

pub mod operations;
pub mod paths;
pub mod results;

pub use paths::{ensure_base_dir, resolve_within_base};
pub use results::{ImageStream, StoredImage};
