//! Entity specs - the arguments for adding projects, scenes and policies
//!
//! Optional fields use `with_*` methods so call sites stay short:
//!
//! ```
//! use muwanx::builder::{PolicySpec, ProjectSpec, SceneSpec};
//!
//! let project = ProjectSpec::new("MuJoCo Menagerie").with_id("menagerie");
//! let scene = SceneSpec::new("G1", "assets/scene/unitree_g1/scene.xml");
//! let policy = PolicySpec::new("Tracking", "assets/policy/unitree_g1/tracking.onnx")
//!     .with_config_path("assets/policy/unitree_g1/tracking.json");
//! # let _ = (project, scene, policy);
//! ```

use crate::domain::value_objects::{Metadata, ModelSource};

/// Arguments for `Builder::add_project`
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSpec {
    pub(super) name: String,
    pub(super) id: Option<String>,
    pub(super) metadata: Metadata,
}

impl ProjectSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            metadata: Metadata::new(),
        }
    }

    /// Route id; projects without one are served at the root route
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Arguments for `ProjectHandle::add_scene`
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSpec {
    pub(super) name: String,
    pub(super) model: ModelSource,
    pub(super) metadata: Metadata,
}

impl SceneSpec {
    pub fn new(name: impl Into<String>, model: impl Into<ModelSource>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            metadata: Metadata::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Arguments for `SceneHandle::add_policy`
#[derive(Debug, Clone, PartialEq)]
pub struct PolicySpec {
    pub(super) name: String,
    pub(super) model: ModelSource,
    pub(super) metadata: Metadata,
    pub(super) config: Option<serde_json::Value>,
    pub(super) config_path: Option<String>,
    pub(super) source_path: Option<String>,
}

impl PolicySpec {
    pub fn new(name: impl Into<String>, model: impl Into<ModelSource>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            metadata: Metadata::new(),
            config: None,
            config_path: None,
            source_path: None,
        }
    }

    /// Inline policy configuration; takes precedence over `config_path`
    pub fn with_config(mut self, config: serde_json::Value) -> Self {
        self.config = Some(config);
        self
    }

    /// JSON file read at bundle export when no inline config is given
    pub fn with_config_path(mut self, path: impl Into<String>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Provenance of the policy model; defaults to the model path, if any
    pub fn with_source_path(mut self, path: impl Into<String>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
