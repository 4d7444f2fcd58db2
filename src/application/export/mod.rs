//! Export Use Case
//!
//! Writes a built `App` to disk.
//!
//! This module handles:
//! - Config-only export (`config.json`)
//! - Full bundle export (manifest, scene models, policy models and configs)
//! - Output directory checks and overwrite
//!
//! `App::export` is the one-call entry point, using the local file system and
//! raw-file model providers.

mod options;
mod result;
mod use_case;

use std::path::PathBuf;
use std::sync::Arc;

pub use options::{ExportFormat, ExportOptions};
pub use result::{ExportResult, WrittenFile};
pub use use_case::ExportUseCase;

use crate::domain::entities::App;
use crate::domain::ports::{EventSink, ModelProvider, NoopEventSink};
use crate::domain::services::Manifest;
use crate::error::MuwanxResult;
use crate::infrastructure::{LocalFs, RawFileProvider};

impl App {
    /// Export to `output_dir`, resolving relative model paths against the
    /// current directory
    pub fn export(
        &self,
        output_dir: impl Into<PathBuf>,
        format: ExportFormat,
        overwrite: bool,
    ) -> MuwanxResult<ExportResult> {
        let options = ExportOptions::new(output_dir)
            .with_format(format)
            .with_overwrite(overwrite);
        self.export_with(
            &options,
            RawFileProvider::new(),
            RawFileProvider::new(),
            Arc::new(NoopEventSink),
        )
    }

    /// Export with caller-supplied model providers and event sink
    pub fn export_with<PM, QM>(
        &self,
        options: &ExportOptions,
        physics: PM,
        policies: QM,
        events: Arc<dyn EventSink>,
    ) -> MuwanxResult<ExportResult>
    where
        PM: ModelProvider,
        QM: ModelProvider,
    {
        ExportUseCase::new(LocalFs::new(), physics, policies)
            .execute_with_events(self, options, events)
    }

    /// The `config.json` document, in memory
    pub fn manifest(&self) -> Manifest {
        Manifest::from_app(self)
    }

    /// The `config.json` document, serialized exactly as written to disk
    pub fn to_config_json(&self) -> MuwanxResult<String> {
        Ok(self.manifest().to_json_pretty()?)
    }
}
