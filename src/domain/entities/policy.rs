//! Policy entity - a control policy attached to a scene

use crate::domain::value_objects::{Metadata, ModelSource};

/// A neural control policy, immutable once its app is built
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    name: String,
    model: ModelSource,
    metadata: Metadata,
    /// Policy-side configuration document interpreted by the viewer
    config: Option<serde_json::Value>,
    /// Where `config` came from, or should be read from at export
    config_path: Option<String>,
    /// Where the policy model came from
    source_path: Option<String>,
}

impl Policy {
    pub(crate) fn new(
        name: String,
        model: ModelSource,
        metadata: Metadata,
        config: Option<serde_json::Value>,
        config_path: Option<String>,
        source_path: Option<String>,
    ) -> Self {
        Self {
            name,
            model,
            metadata,
            config,
            config_path,
            source_path,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> &ModelSource {
        &self.model
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn config(&self) -> Option<&serde_json::Value> {
        self.config.as_ref()
    }

    pub fn config_path(&self) -> Option<&str> {
        self.config_path.as_deref()
    }

    pub fn source_path(&self) -> Option<&str> {
        self.source_path.as_deref()
    }

    /// Whether the bundle gets a `<policy>.json` next to the model
    pub fn has_config(&self) -> bool {
        self.config.is_some() || self.config_path.is_some()
    }
}
