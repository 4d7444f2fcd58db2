//! Model Value Objects
//!
//! Physics and policy models are opaque to Muwanx. A `ModelBlob` is what a
//! `ModelProvider` produces and consumes; the core only routes it to a path.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Opaque, already-loaded model contents
///
/// Cloning is cheap: the payload is shared.
#[derive(Clone, PartialEq, Eq)]
pub struct ModelBlob {
    extension: String,
    bytes: Arc<[u8]>,
}

impl ModelBlob {
    /// Create a blob persisted with the given file extension (without the dot)
    pub fn new(extension: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let extension: String = extension.into();
        Self {
            extension: extension.trim_start_matches('.').to_string(),
            bytes: Arc::from(bytes.into()),
        }
    }

    /// File extension used when the blob is persisted
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Raw payload, for provider implementations
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for ModelBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelBlob")
            .field("extension", &self.extension)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Where a model comes from: a file reference or loaded contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// Filesystem reference, loaded through the provider at export time
    Path(PathBuf),
    /// Already-materialized model
    Blob(ModelBlob),
}

impl ModelSource {
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            ModelSource::Path(path) => Some(path),
            ModelSource::Blob(_) => None,
        }
    }

    pub fn as_blob(&self) -> Option<&ModelBlob> {
        match self {
            ModelSource::Path(_) => None,
            ModelSource::Blob(blob) => Some(blob),
        }
    }
}

impl From<PathBuf> for ModelSource {
    fn from(path: PathBuf) -> Self {
        ModelSource::Path(path)
    }
}

impl From<&Path> for ModelSource {
    fn from(path: &Path) -> Self {
        ModelSource::Path(path.to_path_buf())
    }
}

impl From<&str> for ModelSource {
    fn from(path: &str) -> Self {
        ModelSource::Path(PathBuf::from(path))
    }
}

impl From<String> for ModelSource {
    fn from(path: String) -> Self {
        ModelSource::Path(PathBuf::from(path))
    }
}

impl From<ModelBlob> for ModelSource {
    fn from(blob: ModelBlob) -> Self {
        ModelSource::Blob(blob)
    }
}
