//! Configuration type definitions
//!
//! A project file (`muwanx.toml`) declares the same graph the builder API
//! constructs:
//!
//! ```toml
//! [app]
//! base_path = "/"
//!
//! [[projects]]
//! name = "Main"
//!
//! [[projects.scenes]]
//! name = "G1"
//! model = "assets/scene/unitree_g1/scene.xml"
//!
//! [[projects.scenes.policies]]
//! name = "Tracking"
//! model = "assets/policy/unitree_g1/tracking.onnx"
//! config_path = "assets/policy/unitree_g1/tracking.json"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::application::launch::{DEFAULT_HOST, DEFAULT_PORT};
use crate::builder::{Builder, PolicySpec, ProjectSpec, SceneSpec, DEFAULT_BASE_PATH};
use crate::domain::value_objects::Metadata;
use crate::error::MuwanxResult;

use super::loader::{self, ConfigWarning};

/// `[app]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppSection {
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
        }
    }
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

/// `[[projects]]` entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectTable {
    pub name: String,
    /// Omit (or leave empty) for the root project
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub scenes: Vec<SceneTable>,
}

/// `[[projects.scenes]]` entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneTable {
    pub name: String,
    /// Physics model, relative to the project file
    pub model: PathBuf,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub policies: Vec<PolicyTable>,
}

/// `[[projects.scenes.policies]]` entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PolicyTable {
    pub name: String,
    /// Policy model, relative to the project file
    pub model: PathBuf,
    /// Inline policy configuration
    #[serde(default)]
    pub config: Option<serde_json::Value>,
    /// JSON policy configuration, relative to the project file
    #[serde(default)]
    pub config_path: Option<PathBuf>,
    #[serde(default)]
    pub source_path: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
}

/// A whole `muwanx.toml`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ProjectFile {
    #[serde(default)]
    pub app: AppSection,
    #[serde(default)]
    pub projects: Vec<ProjectTable>,
}

impl ProjectFile {
    /// Load a project file
    pub fn load(path: &Path) -> MuwanxResult<Self> {
        let (file, _warnings) = loader::load_with_warnings(path)?;
        Ok(file)
    }

    /// Load a project file and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> MuwanxResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Replay the file through the builder API, so every builder rule
    /// applies; relative paths are resolved against `base_dir`
    pub fn into_builder(self, base_dir: &Path) -> MuwanxResult<Builder> {
        let mut builder = Builder::new(self.app.base_path);

        for project in self.projects {
            let mut spec = ProjectSpec::new(project.name).with_metadata(project.metadata);
            if let Some(id) = project.id {
                spec = spec.with_id(id);
            }
            let mut project_handle = builder.add_project(spec)?;

            for scene in project.scenes {
                let spec = SceneSpec::new(scene.name, resolve(base_dir, &scene.model))
                    .with_metadata(scene.metadata);
                let mut scene_handle = project_handle.add_scene(spec)?;

                for policy in scene.policies {
                    let source_path = policy
                        .source_path
                        .unwrap_or_else(|| policy.model.display().to_string());
                    let mut spec = PolicySpec::new(policy.name, resolve(base_dir, &policy.model))
                        .with_source_path(source_path)
                        .with_metadata(policy.metadata);
                    if let Some(config) = policy.config {
                        spec = spec.with_config(config);
                    }
                    if let Some(config_path) = policy.config_path {
                        spec = spec
                            .with_config_path(resolve(base_dir, &config_path).display().to_string());
                    }
                    scene_handle.add_policy(spec)?;
                }
            }
        }

        Ok(builder)
    }
}

fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// CLI runtime settings taken from `MUWANX_*` environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `MUWANX_BASE_PATH`, replacing the project file's `[app] base_path`
    pub base_path: Option<String>,
    /// `MUWANX_NO_LAUNCH`
    pub no_launch: bool,
    /// `MUWANX_HOST`
    pub host: String,
    /// `MUWANX_PORT`
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_path: None,
            no_launch: false,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Settings {
    /// Read settings from the process environment, warning on stderr
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply environment variable overrides (MUWANX_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok(), &mut std::io::stderr())
    }
}
