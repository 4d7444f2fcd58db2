//! Manifest - the `config.json` document read by the viewer
//!
//! Structural skeleton only: names, ids and metadata. Models and policy
//! configuration documents are never embedded.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{App, Policy, Project, Scene};
use crate::domain::value_objects::Metadata;

/// Manifest schema version written into every document
pub const MANIFEST_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Top-level manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub version: String,
    pub base_path: String,
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    /// Serialized as `null` for the root project
    pub id: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub scenes: Vec<SceneEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneEntry {
    pub name: String,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub policies: Vec<PolicyEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyEntry {
    pub name: String,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Manifest {
    pub fn from_app(app: &App) -> Self {
        Self {
            version: MANIFEST_VERSION.to_string(),
            base_path: app.base_path().to_string(),
            projects: app.projects().iter().map(ProjectEntry::from).collect(),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl From<&Project> for ProjectEntry {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name().to_string(),
            id: project.id().map(|id| id.as_str().to_string()),
            metadata: project.metadata().clone(),
            scenes: project.scenes().iter().map(SceneEntry::from).collect(),
        }
    }
}

impl From<&Scene> for SceneEntry {
    fn from(scene: &Scene) -> Self {
        Self {
            name: scene.name().to_string(),
            metadata: scene.metadata().clone(),
            policies: scene.policies().iter().map(PolicyEntry::from).collect(),
        }
    }
}

impl From<&Policy> for PolicyEntry {
    fn from(policy: &Policy) -> Self {
        Self {
            name: policy.name().to_string(),
            metadata: policy.metadata().clone(),
        }
    }
}
