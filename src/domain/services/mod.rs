//! Domain Services
//!
//! Stateless rules over the entity graph: validation, bundle layout, and the
//! manifest document.

pub mod bundle_layout;
pub mod manifest;
pub mod validator;

pub use bundle_layout::{
    BundleFileKind, BundleLayout, PolicySlot, SceneSlot, MANIFEST_FILE, POLICY_ASSETS_DIR,
    SCENE_ASSETS_DIR,
};
pub use manifest::{Manifest, PolicyEntry, ProjectEntry, SceneEntry, MANIFEST_VERSION};
pub use validator::GraphValidator;
