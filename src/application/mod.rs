//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ExportUseCase` - Config-only and full-bundle export of a built app
//! - `launch` - Serve an exported bundle until interrupted

pub mod export;
pub mod launch;

pub use export::{ExportFormat, ExportOptions, ExportResult, ExportUseCase, WrittenFile};
pub use launch::{launch, launch_with_events, LaunchOptions, DEFAULT_HOST, DEFAULT_PORT};
