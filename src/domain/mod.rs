//! Domain Layer
//!
//! The core of Muwanx - the entity graph and its rules, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Immutable records (App, Project, Scene, Policy)
//! - `value_objects/` - Validated values (ProjectId, AssetName, ModelSource)
//! - `services/` - Validation, bundle layout, manifest
//! - `ports/` - Interfaces for models, files, and events
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
