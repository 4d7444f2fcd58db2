//! Export result types

use std::path::{Path, PathBuf};

use crate::domain::services::BundleFileKind;
use crate::domain::value_objects::ContentHash;

use super::options::ExportFormat;

/// A file produced by an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// Path relative to the output directory
    pub path: PathBuf,
    pub kind: BundleFileKind,
    pub hash: ContentHash,
}

/// Result of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    pub output_dir: PathBuf,
    pub format: ExportFormat,
    /// Files in write order; the manifest is always last
    pub files: Vec<WrittenFile>,
    /// Whether previous output was removed first
    pub cleared: bool,
}

impl ExportResult {
    pub(crate) fn new(output_dir: PathBuf, format: ExportFormat) -> Self {
        Self {
            output_dir,
            format,
            files: Vec::new(),
            cleared: false,
        }
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Look up a written file by its bundle-relative path
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&WrittenFile> {
        let path = path.as_ref();
        self.files.iter().find(|f| f.path == path)
    }

    pub fn files_of_kind(&self, kind: BundleFileKind) -> impl Iterator<Item = &WrittenFile> {
        self.files.iter().filter(move |f| f.kind == kind)
    }

    /// Absolute (or caller-relative) path of the manifest
    pub fn manifest_path(&self) -> PathBuf {
        self.output_dir
            .join(crate::domain::services::MANIFEST_FILE)
    }
}
