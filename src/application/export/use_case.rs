//! Export Use Case
//!
//! Runs in two phases. Preparation plans the layout, checks the output
//! directory, loads every path-form model and reads every policy
//! `config_path`; any failure here leaves the disk untouched. Persistence
//! then clears (on overwrite) and writes files one by one. A failure during
//! persistence leaves the files written so far in place and names the file
//! that failed.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::entities::{App, Policy};
use crate::domain::ports::{Event, EventSink, FileSystem, ModelError, ModelProvider, NoopEventSink};
use crate::domain::services::validator::scene_scope;
use crate::domain::services::{BundleFileKind, BundleLayout, Manifest, MANIFEST_FILE};
use crate::domain::value_objects::{ContentHash, ModelBlob, ModelSource};
use crate::error::{MuwanxError, MuwanxResult};

use super::options::{ExportFormat, ExportOptions};
use super::result::{ExportResult, WrittenFile};

/// Which provider persists a model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModelKind {
    Physics,
    Policy,
}

#[derive(Debug)]
enum Payload {
    Bytes(Vec<u8>),
    Model(ModelKind, ModelBlob),
}

/// A file ready to be written, relative to the output directory
#[derive(Debug)]
struct PreparedFile {
    path: PathBuf,
    kind: BundleFileKind,
    payload: Payload,
}

/// Export use case - writes an app as a config document or a full bundle
pub struct ExportUseCase<FS, PM, QM>
where
    FS: FileSystem,
    PM: ModelProvider,
    QM: ModelProvider,
{
    fs: FS,
    physics: PM,
    policies: QM,
}

impl<FS, PM, QM> ExportUseCase<FS, PM, QM>
where
    FS: FileSystem,
    PM: ModelProvider,
    QM: ModelProvider,
{
    /// Create a new export use case with one provider per model kind
    pub fn new(fs: FS, physics: PM, policies: QM) -> Self {
        Self {
            fs,
            physics,
            policies,
        }
    }

    /// Export silently
    pub fn execute(&self, app: &App, options: &ExportOptions) -> MuwanxResult<ExportResult> {
        self.execute_with_events(app, options, Arc::new(NoopEventSink))
    }

    /// Export, reporting progress to `events`
    pub fn execute_with_events(
        &self,
        app: &App,
        options: &ExportOptions,
        events: Arc<dyn EventSink>,
    ) -> MuwanxResult<ExportResult> {
        events.on_event(Event::ExportStarted {
            output_dir: options.output_dir.clone(),
            format: options.format.as_str(),
            projects: app.projects().len(),
            scenes: app.scene_count(),
            policies: app.policy_count(),
        });

        // Phase 1: nothing below touches the disk except reads
        let layout = match options.format {
            ExportFormat::Config => None,
            ExportFormat::Bundle => Some(BundleLayout::plan(app)?),
        };
        let needs_clear = self.check_output(&options.output_dir, options.overwrite)?;

        let mut files = match &layout {
            Some(layout) => self.prepare_assets(app, layout, &options.source_root)?,
            None => Vec::new(),
        };
        files.push(PreparedFile {
            path: PathBuf::from(MANIFEST_FILE),
            kind: BundleFileKind::Manifest,
            payload: Payload::Bytes(Manifest::from_app(app).to_json_pretty()?.into_bytes()),
        });
        events.on_event(Event::ExportPrepared {
            file_count: files.len(),
        });

        // Phase 2: persist
        let mut result = ExportResult::new(options.output_dir.clone(), options.format);
        if needs_clear {
            self.fs.remove_dir_all(&options.output_dir)?;
            result.cleared = true;
            events.on_event(Event::OutputCleared {
                path: options.output_dir.clone(),
            });
        }
        self.fs.create_dir_all(&options.output_dir)?;

        for (index, file) in files.into_iter().enumerate() {
            let hash = self.persist(&options.output_dir, &file)?;
            if events.wants_detailed_events() {
                events.on_event(Event::FileWritten {
                    index,
                    path: file.path.clone(),
                    kind: file.kind,
                });
            }
            result.files.push(WrittenFile {
                path: file.path,
                kind: file.kind,
                hash,
            });
        }

        events.on_event(Event::ExportCompleted {
            output_dir: options.output_dir.clone(),
            file_count: result.file_count(),
        });
        Ok(result)
    }

    /// Returns whether existing output must be removed before writing
    fn check_output(&self, output_dir: &Path, overwrite: bool) -> MuwanxResult<bool> {
        if !self.fs.exists(output_dir) {
            return Ok(false);
        }
        if !self.fs.is_dir(output_dir) {
            return Err(MuwanxError::AlreadyExists {
                path: output_dir.to_path_buf(),
            });
        }
        if self.fs.is_empty_dir(output_dir)? {
            return Ok(false);
        }
        if !overwrite {
            return Err(MuwanxError::AlreadyExists {
                path: output_dir.to_path_buf(),
            });
        }
        Ok(true)
    }

    fn prepare_assets(
        &self,
        app: &App,
        layout: &BundleLayout,
        source_root: &Path,
    ) -> MuwanxResult<Vec<PreparedFile>> {
        let mut files = Vec::with_capacity(layout.asset_file_count(app));

        for slot in &layout.scenes {
            let project = &app.projects()[slot.project];
            let scene = &project.scenes()[slot.scene];

            let blob = self.materialize(ModelKind::Physics, scene.model(), source_root)?;
            files.push(PreparedFile {
                path: slot.scene_model_path(blob.extension())?,
                kind: BundleFileKind::SceneModel,
                payload: Payload::Model(ModelKind::Physics, blob),
            });

            for policy_slot in &slot.policies {
                let policy = &scene.policies()[policy_slot.policy];

                let blob = self.materialize(ModelKind::Policy, policy.model(), source_root)?;
                let model_path = slot.policy_model_path(policy_slot, blob.extension())?;

                let config = self.policy_config(policy, source_root)?;
                files.push(PreparedFile {
                    path: model_path.clone(),
                    kind: BundleFileKind::PolicyModel,
                    payload: Payload::Model(ModelKind::Policy, blob),
                });

                if let Some(config) = config {
                    let config_path = slot.policy_config_path(policy_slot);
                    if config_path == model_path {
                        return Err(MuwanxError::invalid(
                            scene_scope(project.name(), scene.name()),
                            format!(
                                "policy '{}' model and config would both be written to {}",
                                policy.name(),
                                model_path.display()
                            ),
                        ));
                    }
                    files.push(PreparedFile {
                        path: config_path,
                        kind: BundleFileKind::PolicyConfig,
                        payload: Payload::Bytes(config),
                    });
                }
            }
        }

        Ok(files)
    }

    fn materialize(
        &self,
        kind: ModelKind,
        source: &ModelSource,
        source_root: &Path,
    ) -> MuwanxResult<ModelBlob> {
        match source {
            ModelSource::Blob(blob) => Ok(blob.clone()),
            ModelSource::Path(path) => {
                let resolved = source_root.join(path);
                let blob = match kind {
                    ModelKind::Physics => self.physics.load(&resolved)?,
                    ModelKind::Policy => self.policies.load(&resolved)?,
                };
                Ok(blob)
            }
        }
    }

    /// Serialized policy config: inline first, then `config_path`
    fn policy_config(&self, policy: &Policy, source_root: &Path) -> MuwanxResult<Option<Vec<u8>>> {
        let value = match (policy.config(), policy.config_path()) {
            (Some(inline), _) => inline.clone(),
            (None, Some(config_path)) => {
                let path = source_root.join(config_path);
                let raw = self.fs.read(&path).map_err(|e| MuwanxError::PolicyConfig {
                    path: path.clone(),
                    message: e.to_string(),
                })?;
                serde_json::from_slice(&raw).map_err(|e| MuwanxError::PolicyConfig {
                    path: path.clone(),
                    message: e.to_string(),
                })?
            }
            (None, None) => return Ok(None),
        };

        let mut bytes = serde_json::to_vec_pretty(&value)?;
        bytes.push(b'\n');
        Ok(Some(bytes))
    }

    fn persist(&self, output_dir: &Path, file: &PreparedFile) -> MuwanxResult<ContentHash> {
        let target = output_dir.join(&file.path);
        match &file.payload {
            Payload::Bytes(bytes) => {
                self.fs.write(&target, bytes)?;
                Ok(ContentHash::from_bytes(bytes))
            }
            Payload::Model(kind, blob) => {
                if let Some(parent) = target.parent() {
                    self.fs.create_dir_all(parent)?;
                }
                let saved = match kind {
                    ModelKind::Physics => self.physics.save(blob, &target),
                    ModelKind::Policy => self.policies.save(blob, &target),
                };
                saved.map_err(|e| ModelError::new(&target, e.message))?;
                Ok(self.fs.hash(&target)?)
            }
        }
    }
}
