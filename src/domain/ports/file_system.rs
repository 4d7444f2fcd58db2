//! FileSystem port - abstraction over bundle file I/O
//!
//! The export use case prepares, clears and writes bundle directories through
//! this trait. Model payloads go through `ModelProvider` instead.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ContentHash;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors, each naming the path involved
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// Any other I/O failure
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl FsError {
    /// Wrap an I/O error, attributing it to `path`
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io { path, source } => write!(f, "I/O error at {}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<FsError> for crate::error::MuwanxError {
    fn from(err: FsError) -> Self {
        let (path, source) = match err {
            FsError::NotFound(path) => (path, std::io::Error::from(std::io::ErrorKind::NotFound)),
            FsError::PermissionDenied(path) => (
                path,
                std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            ),
            FsError::Io { path, source } => (path, source),
        };
        crate::error::MuwanxError::File { path, source }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
pub trait FileSystem {
    /// Read file content as bytes
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Write content to file atomically, creating parent directories
    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()>;

    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if an existing directory has no entries
    fn is_empty_dir(&self, path: &Path) -> FsResult<bool>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Remove a directory and everything under it
    fn remove_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Compute content hash (SHA256)
    fn hash(&self, path: &Path) -> FsResult<ContentHash> {
        self.read(path).map(|bytes| ContentHash::from_bytes(&bytes))
    }
}
