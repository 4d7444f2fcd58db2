//! Event Port
//!
//! Provides an observable interface for export and launch operations.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::services::BundleFileKind;

/// Event emitted during export or launch
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Export started
    ExportStarted {
        output_dir: PathBuf,
        format: &'static str,
        projects: usize,
        scenes: usize,
        policies: usize,
    },

    /// Layout checked and models loaded, nothing written yet
    ExportPrepared { file_count: usize },

    /// Previous output removed (overwrite)
    OutputCleared { path: PathBuf },

    /// Bundle file written
    FileWritten {
        index: usize,
        path: PathBuf,
        kind: BundleFileKind,
    },

    /// Export completed
    ExportCompleted { output_dir: PathBuf, file_count: usize },

    /// Static server is accepting connections
    ServerListening { url: String, root: PathBuf },

    /// Non-fatal problem worth surfacing
    Warning { message: String },

    /// Static server released its socket
    ServerStopped,
}

/// Trait for receiving events
///
/// Implementations can be:
/// - ConsoleEventSink: Human-readable progress in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait EventSink: Send + Sync {
    /// Handle an event
    fn on_event(&self, event: Event);

    /// Check if this sink wants detailed events (e.g., per-file)
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn on_event(&self, _event: Event) {
        // Do nothing
    }

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
