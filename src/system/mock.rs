//! Mock system implementation for testing

use super::System;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// In-memory implementation of the System trait for testing
///
/// Holds a set of file and directory paths; existence checks never touch the
/// real filesystem, so unit tests stay fast and hermetic.
///
/// # Example
/// ```
/// use orthoconserv_config::system::{MockSystem, System};
/// use std::path::Path;
///
/// let system = MockSystem::new()
///     .with_file("/data/database_key.json")
///     .with_file("/data/table.csv");
///
/// assert!(system.exists(Path::new("/data/table.csv")));
/// assert!(!system.exists(Path::new("/data/other.csv")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockSystem {
    files: HashSet<PathBuf>,
    dirs: HashSet<PathBuf>,
}

impl MockSystem {
    /// Create a new empty `MockSystem`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file path (builder pattern); parent directories are
    /// registered implicitly
    #[must_use]
    pub fn with_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        let path = path.into();
        for ancestor in path.ancestors().skip(1) {
            self.dirs.insert(ancestor.to_path_buf());
        }
        self.files.insert(path);
        self
    }

    /// Register a directory path (builder pattern)
    #[must_use]
    pub fn with_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        let path = path.into();
        for ancestor in path.ancestors() {
            self.dirs.insert(ancestor.to_path_buf());
        }
        self
    }
}

impl System for MockSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains(path) || self.dirs.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_file_registers_parents() {
        let system = MockSystem::new().with_file("/a/b/c.csv");
        assert!(system.exists(Path::new("/a/b/c.csv")));
        assert!(system.exists(Path::new("/a/b")));
        assert!(system.exists(Path::new("/a")));
    }

    #[test]
    fn missing_path_does_not_exist() {
        let system = MockSystem::new().with_dir("/data");
        assert!(!system.exists(Path::new("/data/table.csv")));
    }
}
