//! Temporary directory fixtures shared by the workspace's test suites.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Name of the ignore file the fixtures write.
pub const IGNORE_FILE: &str = ".terraformignore";

/// Self-deleting directory that stands in for a configuration root.
#[derive(Debug)]
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Creates an empty temporary directory.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Creates a temporary directory whose ignore file holds `content`.
    pub fn with_ignore_file(content: &str) -> io::Result<Self> {
        let dir = Self::new()?;
        dir.write_file(IGNORE_FILE, content.as_bytes())?;
        Ok(dir)
    }

    /// Returns the directory root.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Resolves `relative` below the root.
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Writes `contents` to `relative`, creating parent directories.
    pub fn write_file(&self, relative: impl AsRef<Path>, contents: &[u8]) -> io::Result<PathBuf> {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Creates `relative` and any missing parents as directories.
    pub fn create_dir(&self, relative: impl AsRef<Path>) -> io::Result<PathBuf> {
        let path = self.join(relative);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Reads `relative` back.
    pub fn read_file(&self, relative: impl AsRef<Path>) -> io::Result<Vec<u8>> {
        fs::read(self.join(relative))
    }

    /// Returns whether `relative` exists.
    pub fn exists(&self, relative: impl AsRef<Path>) -> bool {
        self.join(relative).exists()
    }
}
