//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go to a temporary file in the target directory and are renamed
/// into place, so a reader never sees a half-written file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| FsError::at(path, e))
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| FsError::at(parent, e))?;

        let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::at(parent, e))?;
        temp.write_all(content).map_err(|e| FsError::at(path, e))?;
        temp.flush().map_err(|e| FsError::at(path, e))?;
        temp.persist(path).map_err(|e| FsError::at(path, e.error))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_empty_dir(&self, path: &Path) -> FsResult<bool> {
        let mut entries = std::fs::read_dir(path).map_err(|e| FsError::at(path, e))?;
        Ok(entries.next().is_none())
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::at(path, e))
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| FsError::at(path, e))
    }
}
