//! ModelProvider port - the load/save contract for opaque models
//!
//! Physics-model and policy-model loaders live outside Muwanx. The export
//! pipeline takes one provider per model kind and never looks inside a blob.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ModelBlob;

/// Result type for provider operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Provider failure, attributed to the path being loaded or saved
#[derive(Debug)]
pub struct ModelError {
    pub path: PathBuf,
    pub message: String,
}

impl ModelError {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

impl std::error::Error for ModelError {}

impl From<ModelError> for crate::error::MuwanxError {
    fn from(err: ModelError) -> Self {
        crate::error::MuwanxError::Model {
            path: err.path,
            message: err.message,
        }
    }
}

/// Anything that can load a model from a path and save it to a path
///
/// Implementations:
/// - `RawFileProvider` - byte-for-byte copy, extension taken from the source
/// - test doubles that record or fail saves
pub trait ModelProvider {
    /// Load a model from a filesystem reference
    fn load(&self, path: &Path) -> ModelResult<ModelBlob>;

    /// Persist a model to `path` (the parent directory already exists)
    fn save(&self, model: &ModelBlob, path: &Path) -> ModelResult<()>;
}

impl<P: ModelProvider + ?Sized> ModelProvider for &P {
    fn load(&self, path: &Path) -> ModelResult<ModelBlob> {
        (**self).load(path)
    }

    fn save(&self, model: &ModelBlob, path: &Path) -> ModelResult<()> {
        (**self).save(model, path)
    }
}
