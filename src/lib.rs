//! Muwanx - builder and bundle exporter for browser-based MuJoCo demos
//!
//! Muwanx assembles projects, scenes and control policies into an immutable
//! `App`, then exports it either as a `config.json` document or as a
//! self-contained bundle the web viewer can serve. Models are opaque: they
//! pass through a `ModelProvider` and are never simulated or executed here.
//!
//! ```no_run
//! use muwanx::{Builder, ExportFormat, PolicySpec, ProjectSpec, SceneSpec};
//!
//! let mut builder = Builder::default();
//! let mut project = builder.add_project(ProjectSpec::new("Main"))?;
//! let mut scene = project.add_scene(SceneSpec::new("G1", "assets/g1.xml"))?;
//! scene.add_policy(PolicySpec::new("Tracking", "assets/tracking.onnx"))?;
//!
//! let app = builder.build()?;
//! app.export("dist", ExportFormat::Bundle, true)?;
//! muwanx::launch("dist", &muwanx::LaunchOptions::default())?;
//! # Ok::<(), muwanx::MuwanxError>(())
//! ```

pub mod application;
pub mod builder;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    launch, launch_with_events, ExportFormat, ExportOptions, ExportResult, ExportUseCase,
    LaunchOptions, WrittenFile,
};
pub use builder::{
    Builder, PolicyHandle, PolicySpec, ProjectHandle, ProjectSpec, ProjectView, SceneHandle,
    SceneSpec,
};
pub use domain::entities::{App, Policy, Project, RouteEntry, Scene};
pub use domain::ports::{Event, EventSink, ModelError, ModelProvider, ModelResult, NoopEventSink};
pub use domain::value_objects::{AssetName, ContentHash, Metadata, ModelBlob, ModelSource, ProjectId};
pub use error::{MuwanxError, MuwanxResult, ValidationErrors, Violation};
pub use infrastructure::{LocalFs, RawFileProvider};
