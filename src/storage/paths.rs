//! Path resolution and containment
//!
//! Computes on-disk locations under the base directory and rejects
//! anything that would escape it. Runs after sanitization as an
//! independent structural check.

use log::warn;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::StorageError;

/// Create the base directory if absent.
///
/// "Already exists" is success, so concurrent callers may race freely.
pub fn ensure_base_dir(base: &Path) -> Result<(), StorageError> {
    fs::create_dir_all(base)?;
    Ok(())
}

/// Resolve `file_name` under `base`, guaranteeing the result stays inside it.
///
/// `file_name` must be a single normal path component; separators, `..`,
/// and absolute paths are rejected outright. An existing target is
/// canonicalized and re-checked so a symlink cannot point outside the
/// base directory.
pub fn resolve_within_base(base: &Path, file_name: &str) -> Result<PathBuf, StorageError> {
    if file_name.is_empty() {
        return Err(StorageError::InvalidPath("empty file name".to_string()));
    }

    if file_name.contains('/') || file_name.contains('\\') {
        warn!("Rejected path with separator: {}", file_name);
        return Err(StorageError::PathTraversal(file_name.to_string()));
    }

    let mut components = Path::new(file_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => {}
        _ => {
            warn!("Rejected non-normal path component: {}", file_name);
            return Err(StorageError::PathTraversal(file_name.to_string()));
        }
    }

    let base = base.canonicalize()?;
    let resolved = base.join(file_name);

    if resolved.exists() {
        let canonical = resolved.canonicalize()?;
        if !canonical.starts_with(&base) {
            warn!("Rejected path escaping base directory: {}", file_name);
            return Err(StorageError::PathTraversal(file_name.to_string()));
        }
        return Ok(canonical);
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn resolves_plain_file_name_under_base() {
        let dir = TempDir::new().unwrap();
        let resolved = resolve_within_base(dir.path(), "abc.jpg").unwrap();
        assert!(resolved.starts_with(dir.path().canonicalize().unwrap()));
        assert_eq!(resolved.file_name().unwrap(), "abc.jpg");
    }

    #[test]
    fn rejects_empty_name() {
        let dir = TempDir::new().unwrap();
        match resolve_within_base(dir.path(), "") {
            Err(StorageError::InvalidPath(_)) => {}
            other => panic!("expected InvalidPath, got {:?}", other),
        }
    }

    #[test]
    fn rejects_separators() {
        let dir = TempDir::new().unwrap();
        for name in ["a/b.jpg", "a\\b.jpg", "/etc/passwd", "..\\..\\x"] {
            match resolve_within_base(dir.path(), name) {
                Err(StorageError::PathTraversal(_)) => {}
                other => panic!("expected PathTraversal for {:?}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn rejects_parent_and_current_dir_components() {
        let dir = TempDir::new().unwrap();
        for name in ["..", "."] {
            match resolve_within_base(dir.path(), name) {
                Err(StorageError::PathTraversal(_)) => {}
                other => panic!("expected PathTraversal for {:?}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn leading_dots_in_a_plain_name_are_harmless() {
        let dir = TempDir::new().unwrap();
        let resolved = resolve_within_base(dir.path(), "..hidden.jpg").unwrap();
        assert!(resolved.starts_with(dir.path().canonicalize().unwrap()));
    }

    #[cfg(unix)]
    #[test]
    fn rejects_symlink_escaping_base() {
        let outside = TempDir::new().unwrap();
        let secret = outside.path().join("secret.jpg");
        std::fs::write(&secret, b"outside").unwrap();

        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(&secret, dir.path().join("link.jpg")).unwrap();

        match resolve_within_base(dir.path(), "link.jpg") {
            Err(StorageError::PathTraversal(_)) => {}
            other => panic!("expected PathTraversal, got {:?}", other),
        }
    }

    #[test]
    fn missing_base_dir_surfaces_io_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        match resolve_within_base(&missing, "abc.jpg") {
            Err(StorageError::Io(e)) => {
                assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io, got {:?}", other),
        }
    }
}
