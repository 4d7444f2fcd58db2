//! JSON Event Sink
//!
//! Outputs export and launch events as NDJSON for CI/automation consumption.

use crate::domain::ports::{Event, EventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl EventSink for JsonEventSink {
    fn on_event(&self, event: Event) {
        let json = match event {
            Event::ExportStarted {
                output_dir,
                format,
                projects,
                scenes,
                policies,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "export",
                    "output_dir": output_dir.display().to_string(),
                    "format": format,
                    "projects": projects,
                    "scenes": scenes,
                    "policies": policies,
                })
            }

            Event::ExportPrepared { file_count } => {
                serde_json::json!({
                    "event": "prepared",
                    "command": "export",
                    "file_count": file_count,
                })
            }

            Event::OutputCleared { path } => {
                serde_json::json!({
                    "event": "cleared",
                    "command": "export",
                    "path": path.display().to_string(),
                })
            }

            Event::FileWritten { index, path, kind } => {
                serde_json::json!({
                    "event": "item_written",
                    "command": "export",
                    "index": index,
                    "path": path.display().to_string().replace('\\', "/"),
                    "kind": kind.as_str(),
                })
            }

            Event::ExportCompleted {
                output_dir,
                file_count,
            } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "export",
                    "status": "success",
                    "output_dir": output_dir.display().to_string(),
                    "written": file_count,
                })
            }

            Event::ServerListening { url, root } => {
                serde_json::json!({
                    "event": "listening",
                    "command": "launch",
                    "url": url,
                    "root": root.display().to_string(),
                })
            }

            Event::Warning { message } => {
                serde_json::json!({
                    "event": "warning",
                    "message": message,
                })
            }

            Event::ServerStopped => {
                serde_json::json!({
                    "event": "stopped",
                    "command": "launch",
                })
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
