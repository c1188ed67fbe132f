//! # Filesystem Probe
//!
//! The [`ExistenceCheck`] contract is the only filesystem access in ufname:
//! a read-only "does this path exist" predicate. Nothing in this workspace
//! creates, renames, or deletes files.

use std::path::Path;

/// Read-only existence predicate.
pub trait ExistenceCheck: Send + Sync + std::fmt::Debug {
    /// True if something already occupies `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// Checks the real filesystem.
///
/// A path whose metadata cannot be read (permission denied, broken
/// symlink) is reported as absent, matching `Path::exists`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsExistence;

impl ExistenceCheck for FsExistence {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_created_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        assert!(!FsExistence.exists(&path));
        std::fs::write(&path, b"").unwrap();
        assert!(FsExistence.exists(&path));
    }
}
