//! Configuration module for Muwanx
//!
//! Two sources, highest priority first:
//! 1. Environment variables (`MUWANX_*`), CLI only
//! 2. Project file (`muwanx.toml`)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{closest, EnvVarValidator};
pub use loader::{
    load_with_warnings, parse_with_warnings, with_env_overrides, ConfigWarning, ENV_BASE_PATH,
    ENV_HOST, ENV_NO_LAUNCH, ENV_PORT,
};
pub use types::{AppSection, PolicyTable, ProjectFile, ProjectTable, SceneTable, Settings};

/// Default project file name looked up by the CLI
pub const PROJECT_FILE: &str = "muwanx.toml";
