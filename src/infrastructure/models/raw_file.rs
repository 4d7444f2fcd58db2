//! Raw file model provider
//!
//! Treats a model file as an opaque byte payload: `load` reads it and takes
//! the extension from the file name, `save` writes the bytes back out.

use std::path::Path;

use crate::domain::ports::{FileSystem, ModelError, ModelProvider, ModelResult};
use crate::domain::value_objects::ModelBlob;
use crate::infrastructure::fs::LocalFs;

/// Byte-for-byte model provider backed by the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct RawFileProvider {
    fs: LocalFs,
}

impl RawFileProvider {
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl ModelProvider for RawFileProvider {
    fn load(&self, path: &Path) -> ModelResult<ModelBlob> {
        if self.fs.is_dir(path) {
            return Err(ModelError::new(path, "expected a model file, found a directory"));
        }
        let bytes = self
            .fs
            .read(path)
            .map_err(|e| ModelError::new(path, e.to_string()))?;
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(ModelBlob::new(extension, bytes))
    }

    fn save(&self, model: &ModelBlob, path: &Path) -> ModelResult<()> {
        self.fs
            .write(path, model.bytes())
            .map_err(|e| ModelError::new(path, e.to_string()))
    }
}
