//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `models/` - Model providers (raw file copy)
//! - `events/` - Event sinks (JSON, console)
//! - `server/` - Static file server for launching bundles

pub mod events;
pub mod fs;
pub mod models;
pub mod server;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use models::RawFileProvider;
pub use server::{BoundServer, StaticServer};
