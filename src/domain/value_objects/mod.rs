//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod asset_name;
mod hash;
mod model;
mod project_id;

pub use asset_name::AssetName;
pub use hash::ContentHash;
pub use model::{ModelBlob, ModelSource};
pub use project_id::{ProjectId, ProjectIdError};

/// Free-form metadata attached to projects, scenes and policies
///
/// Ordered by key so serialized output is deterministic.
pub type Metadata = std::collections::BTreeMap<String, serde_json::Value>;
