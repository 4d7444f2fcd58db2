//! Scene entity - a physics model plus the policies that drive it

use super::Policy;
use crate::domain::value_objects::{Metadata, ModelSource};

/// A simulation scene, immutable once its app is built
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    name: String,
    model: ModelSource,
    metadata: Metadata,
    policies: Vec<Policy>,
}

impl Scene {
    pub(crate) fn new(
        name: String,
        model: ModelSource,
        metadata: Metadata,
        policies: Vec<Policy>,
    ) -> Self {
        Self {
            name,
            model,
            metadata,
            policies,
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

    /// Policies in attach order
    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    pub fn policy(&self, name: &str) -> Option<&Policy> {
        self.policies.iter().find(|p| p.name() == name)
    }

    /// A scene without policies has nothing interactive to show
    pub fn is_interactive(&self) -> bool {
        !self.policies.is_empty()
    }
}
