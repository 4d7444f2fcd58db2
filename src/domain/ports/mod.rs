//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod events;
pub mod file_system;
pub mod model_provider;

pub use events::{Event, EventSink, NoopEventSink};
pub use file_system::{FileSystem, FsError, FsResult};
pub use model_provider::{ModelError, ModelProvider, ModelResult};
